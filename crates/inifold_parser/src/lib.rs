//! # inifold_parser
//!
//! Builds an [`inifold_document::Document`] from INI text.
//!
//! This crate provides:
//! - The token-driven [`Parser`], generic over any [`TokenSource`]
//! - [`ParserOptions`] selecting the duplicate-key, section-case and value
//!   policies
//! - [`parse`] and [`parse_into`] entry points over raw bytes
//!
//! ## Ownership on error
//!
//! [`parse`] allocates the document itself and drops it when parsing fails,
//! so a caller never holds a half-built document. [`parse_into`] fills a
//! caller-owned document and leaves whatever was built before the error in
//! place.
//!
//! ## Example
//!
//! ```rust
//! use inifold_parser::{ParseErrorKind, parse};
//!
//! let doc = parse(b"name = demo\n[server]\nport = 8080\n").unwrap();
//! assert_eq!(doc.get("", "name"), Some("demo"));
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//!
//! let err = parse(b"= oops").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::UnexpectedEquals);
//! ```

mod error;
mod options;
mod parser;

pub use error::{ConfigError, ParseError, ParseErrorKind};
pub use inifold_document::{Document, Entry, Position, Section, Span};
pub use inifold_lexer::{Lexer, Token, TokenKind, TokenSource, TokenStream};
pub use options::{DuplicateKeys, ParserOptions, SectionCase, ValuePolicy};
pub use parser::Parser;

/// Parses `data` into a new document using the default policies.
pub fn parse(data: &[u8]) -> Result<Document, ParseError> {
    parse_with(data, ParserOptions::default())
}

/// Parses `data` into a new document.
///
/// On error the partially built document is released before returning.
pub fn parse_with(data: &[u8], options: ParserOptions) -> Result<Document, ParseError> {
    let mut document = Document::new();
    parse_into_with(data, &mut document, options)?;
    Ok(document)
}

/// Parses `data` into `document` using the default policies.
pub fn parse_into(data: &[u8], document: &mut Document) -> Result<(), ParseError> {
    parse_into_with(data, document, ParserOptions::default())
}

/// Parses `data` into `document`, merging with what it already holds.
///
/// Entries before the first header go to the default section. On error,
/// everything added up to the offending token stays in `document`.
pub fn parse_into_with(
    data: &[u8],
    document: &mut Document,
    options: ParserOptions,
) -> Result<(), ParseError> {
    Parser::new(Lexer::new(data), document, options)
        .parse()
        .map(|_| ())
}
