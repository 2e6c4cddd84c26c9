//! State shared with the structure viewer.

mod slot;

pub use slot::{DisplaySlot, SlotSnapshot};
