//! The single "currently displayed" structure.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::structure::Structure;

/// A populated slot value.
#[derive(Debug, Clone)]
pub struct SlotSnapshot {
    /// The displayed structure.
    pub structure: Arc<Structure>,
    /// Starts at 1 and increases by one on every replacement.
    pub revision: u64,
    /// When the structure was put in the slot.
    pub updated_at: DateTime<Utc>,
}

/// Holds exactly one structure once populated.
///
/// Replacement swaps the whole value; the stored structure is never mutated
/// in place. Cloning the slot yields another handle to the same value.
/// Viewers either poll [`DisplaySlot::current`] or hold a receiver from
/// [`DisplaySlot::subscribe`].
///
/// Concurrent replacements are not ordered: the last one to complete wins.
#[derive(Debug, Clone)]
pub struct DisplaySlot {
    sender: Arc<watch::Sender<Option<SlotSnapshot>>>,
}

impl DisplaySlot {
    /// Create an empty slot.
    pub fn empty() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Create a slot populated with `structure`.
    pub fn with_default(structure: Structure) -> Self {
        let slot = Self::empty();
        slot.replace(structure);
        slot
    }

    /// Replace the displayed structure. Returns the new revision.
    pub fn replace(&self, structure: impl Into<Arc<Structure>>) -> u64 {
        let structure = structure.into();
        let mut revision = 0;
        self.sender.send_modify(|slot| {
            revision = slot.as_ref().map_or(1, |s| s.revision + 1);
            *slot = Some(SlotSnapshot {
                structure,
                revision,
                updated_at: Utc::now(),
            });
        });
        revision
    }

    /// The displayed structure, if any.
    pub fn current(&self) -> Option<Arc<Structure>> {
        self.sender
            .borrow()
            .as_ref()
            .map(|snapshot| Arc::clone(&snapshot.structure))
    }

    /// The full slot value, if populated.
    pub fn snapshot(&self) -> Option<SlotSnapshot> {
        self.sender.borrow().clone()
    }

    /// Whether a structure has been placed in the slot.
    pub fn is_populated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Receive every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<Option<SlotSnapshot>> {
        self.sender.subscribe()
    }
}

impl Default for DisplaySlot {
    fn default() -> Self {
        Self::empty()
    }
}
