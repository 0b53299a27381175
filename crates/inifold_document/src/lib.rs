//! # inifold_document
//!
//! The document model produced by the inifold parser.
//!
//! A [`Document`] is an ordered set of uniquely named [`Section`]s, each an
//! ordered list of [`Entry`] key/value pairs. Every document contains the
//! default section named `""` for entries that precede the first header.
//!
//! ## Example
//!
//! ```rust
//! use inifold_document::{Document, Entry, Span};
//!
//! let mut doc = Document::new();
//! let (index, created) = doc.section_or_insert("server", None);
//! assert!(created);
//!
//! doc.section_at_mut(index)
//!     .push(Entry::new("port", "8080", Span::new(9, 13)));
//!
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! ```

mod document;
mod entry;
mod section;
mod span;

pub use document::{DEFAULT_SECTION, Document};
pub use entry::Entry;
pub use section::Section;
pub use span::{LineIndex, Position, Span};
