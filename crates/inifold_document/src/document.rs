//! The section-keyed document.

use serde::Serialize;

use crate::{Section, Span};

/// Name of the section holding entries that precede any header.
pub const DEFAULT_SECTION: &str = "";

/// A parsed INI document.
///
/// Sections are kept in creation order. The default section (named `""`)
/// always exists at index 0 and section names are pairwise distinct.
///
/// Dropping a document releases every section, key and value it owns; use
/// [`Document::clear`] to release the contents but keep the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Creates a document holding only the empty default section.
    pub fn new() -> Self {
        Self {
            sections: vec![Section::new(DEFAULT_SECTION, None)],
        }
    }

    /// The section for entries that appear before any header.
    pub fn default_section(&self) -> &Section {
        &self.sections[0]
    }

    /// Looks up a section by its exact (already folded) name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    /// Returns the section at `index`, in creation order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Indices returned by
    /// [`Document::section_or_insert`] stay valid until a section is removed.
    pub fn section_at_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }

    /// Iterates over sections in creation order, default section first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    /// Number of sections, including the default one.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if no section holds an entry.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Returns the first value stored under `key` in section `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Finds the section named `name`, creating it at the end if absent.
    ///
    /// Returns the section's index and whether it was created by this call.
    pub fn section_or_insert(&mut self, name: &str, span: Option<Span>) -> (usize, bool) {
        match self.sections.iter().position(|s| s.name() == name) {
            Some(index) => (index, false),
            None => {
                self.sections.push(Section::new(name, span));
                (self.sections.len() - 1, true)
            }
        }
    }

    /// Removes the section named `name` together with all of its entries.
    ///
    /// The default section is never detached from the document: removing it
    /// moves its entries into the returned section and leaves it empty.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        if name == DEFAULT_SECTION {
            let mut removed = Section::new(DEFAULT_SECTION, None);
            for entry in self.sections[0].take_entries() {
                removed.push(entry);
            }
            return Some(removed);
        }

        let index = self.sections.iter().position(|s| s.name() == name)?;
        Some(self.sections.remove(index))
    }

    /// Releases every section and entry, leaving a fresh document.
    pub fn clear(&mut self) {
        self.sections.truncate(1);
        self.sections[0].take_entries();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
