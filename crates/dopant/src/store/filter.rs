//! Field-equality filters and projections.

use serde_json::Value;

use super::document::{Document, ID_FIELD};

/// Conjunction of field-equality clauses. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching documents where `field == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// Add another equality clause.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// The equality clauses in insertion order.
    pub fn clauses(&self) -> &[(String, Value)] {
        &self.clauses
    }

    /// Whether the filter has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check a document against every clause.
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}

/// Set of fields to return from a query. `_id` is always included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    /// Project onto the given fields.
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields kept besides `_id`.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Apply the projection to a document.
    pub fn apply(&self, doc: &Document) -> Document {
        let mut projected = Document::new();
        if let Some(id) = doc.get(ID_FIELD) {
            projected.insert(ID_FIELD, id.clone());
        }
        for field in &self.fields {
            if let Some(value) = doc.get(field) {
                projected.insert(field.clone(), value.clone());
            }
        }
        projected
    }
}
