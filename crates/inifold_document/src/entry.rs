//! Key/value entries.

use serde::Serialize;

use crate::Span;

/// One key/value pair within a [`Section`](crate::Section).
///
/// Both strings are owned copies of the lexemes they were built from, so an
/// entry stays valid after the input buffer is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The key as written.
    pub key: String,
    /// The (possibly joined) value. Empty when no value followed `=`.
    pub value: String,
    /// Span of the key token in the source buffer.
    pub span: Span,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>, span: Span) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            span,
        }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
