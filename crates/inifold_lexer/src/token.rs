//! Token types handed from the lexer to the parser.

use std::fmt;

use inifold_document::{Position, Span};

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Input the lexer could not tokenize. Always fatal to a parse.
    Illegal,
    /// The left-hand side of an entry.
    Key,
    /// `=`
    Assign,
    /// One whitespace-delimited piece of an entry's value.
    Value,
    /// A `[name]` header, brackets included in the raw text.
    Section,
    /// `;` or `#` through end of line.
    Comment,
    /// End of input. Produced exactly once, last.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "illegal",
            Self::Key => "key",
            Self::Assign => "'='",
            Self::Value => "value",
            Self::Section => "section header",
            Self::Comment => "comment",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexeme borrowed from the input buffer.
///
/// `text` is a view into the caller's buffer. Anything stored past the
/// lifetime of a parse must be copied out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact lexeme consumed.
    pub text: &'src str,
    /// Byte range of the lexeme in the input buffer.
    pub span: Span,
    /// Line/column of the first byte of the lexeme.
    pub position: Position,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, text: &'src str, span: Span, position: Position) -> Self {
        Self {
            kind,
            text,
            span,
            position,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
