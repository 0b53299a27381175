//! Parse error types.

use std::fmt;

use inifold_document::{Position, Span};
use inifold_lexer::Token;
use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

/// Why a parse halted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The lexer produced an [`Illegal`](inifold_lexer::TokenKind::Illegal) token.
    IllegalToken,
    /// A key was not immediately followed by `=`.
    KeyWithoutEquals,
    /// A value appeared with no key in progress.
    ValueWithoutKey,
    /// `=` appeared with no key in progress.
    UnexpectedEquals,
}

impl ParseErrorKind {
    pub const fn description(self) -> &'static str {
        match self {
            Self::IllegalToken => "illegal token",
            Self::KeyWithoutEquals => "key without '='",
            Self::ValueWithoutKey => "value without key",
            Self::UnexpectedEquals => "unexpected '='",
        }
    }

    /// Stable diagnostic code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::IllegalToken => "inifold::illegal_token",
            Self::KeyWithoutEquals => "inifold::key_without_equals",
            Self::ValueWithoutKey => "inifold::value_without_key",
            Self::UnexpectedEquals => "inifold::unexpected_equals",
        }
    }

    const fn help(self) -> &'static str {
        match self {
            Self::IllegalToken => "check for unterminated section headers or invalid UTF-8",
            Self::KeyWithoutEquals => "write entries as `key = value`",
            Self::ValueWithoutKey => "values must follow a `key =` on the same line",
            Self::UnexpectedEquals => "add a key before '='",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A parse that halted on a malformed token.
///
/// Points at the offending token: for [`ParseErrorKind::KeyWithoutEquals`]
/// that is the key, not the token found in place of `=`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    kind: ParseErrorKind,
    lexeme: String,
    span: Span,
    position: Position,
}

impl ParseError {
    /// Creates an error pointing at `token`.
    pub fn at(kind: ParseErrorKind, token: &Token<'_>) -> Self {
        Self {
            kind,
            lexeme: token.text.to_owned(),
            span: token.span,
            position: token.position,
        }
    }

    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The raw text of the offending token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = (self.span.start as usize, self.span.len() as usize);
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.description().to_string()),
            span,
        ))))
    }
}

/// Errors raised while loading [`ParserOptions`](crate::ParserOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid JSON/JSONC.
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    /// The JSON does not describe valid options.
    #[error("Invalid parser options: {0}")]
    Invalid(#[from] serde_json::Error),
}
