//! Named groups of entries.

use serde::Serialize;

use crate::{Entry, Span};

/// A named group of entries.
///
/// Entries are kept in arrival order. Whether a key may occur more than once
/// is decided by the caller through [`Section::push`] (duplicates kept) or
/// [`Section::upsert`] (one slot per key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

impl Section {
    /// Creates an empty section.
    ///
    /// `span` is the header that introduced the section, if any.
    pub fn new(name: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            span,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Span of the header that first created this section.
    #[inline]
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(Entry::value)
    }

    /// Returns every value stored under `key`, in arrival order.
    pub fn get_all<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.entries
            .iter()
            .filter(move |entry| entry.key == key)
            .map(Entry::value)
    }

    /// Iterates over keys in arrival order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }

    /// Appends `entry` unconditionally.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Stores `entry` in the slot already holding its key, or appends it.
    ///
    /// The slot keeps its original position. Returns the entry that was
    /// replaced.
    pub fn upsert(&mut self, entry: Entry) -> Option<Entry> {
        match self.entries.iter_mut().find(|slot| slot.key == entry.key) {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Removes every entry, keeping the name.
    pub(crate) fn take_entries(&mut self) -> Vec<Entry> {
        std::mem::take(&mut self.entries)
    }
}
