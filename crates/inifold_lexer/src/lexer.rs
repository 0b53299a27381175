//! INI tokenizer built on `logos`.
//!
//! Raw lexemes come from a `logos` automaton. A thin layer on top tracks
//! line starts so a leading word can be classified as a key or a value,
//! attaches positions, and appends the single terminating `Eof` token.

use std::ops::Range;

use inifold_document::{LineIndex, Position, Span};
use logos::Logos;

use crate::{Token, TokenKind, TokenSource};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Lexemes recognized by the automaton. Whitespace other than `\n` is
/// skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0C]+")]
enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"[;#][^\n]*")]
    Comment,

    #[regex(r"\[[^\]\n]*\]")]
    Section,

    #[token("=")]
    Assign,

    #[regex(r"[^\s=\[\];#][^\s=\[\]]*")]
    Word,
}

type RawItem = (Result<RawToken, ()>, Range<usize>);

/// Tokenizer over an input byte buffer.
///
/// Implements [`TokenSource`] for the parser, and [`Iterator`] (ending after
/// the `Eof` token) for inspection.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    text: &'src str,
    /// Byte offset of `text` within the input buffer.
    base: usize,
    /// Line starts of the buffer past the byte order mark.
    lines: LineIndex,
    lookahead: Option<RawItem>,
    at_line_start: bool,
    /// Span of undecodable bytes following `text`, reported once.
    invalid: Option<Span>,
    end: usize,
    finished: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("base", &self.base)
            .field("at_line_start", &self.at_line_start)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `data`.
    ///
    /// A leading UTF-8 byte order mark is skipped. Tokenization stops at the
    /// first byte sequence that is not valid UTF-8, which is reported as a
    /// single [`TokenKind::Illegal`] token.
    pub fn new(data: &'src [u8]) -> Self {
        let base = if data.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        let body = &data[base..];

        let (text, invalid) = match std::str::from_utf8(body) {
            Ok(text) => (text, None),
            Err(e) => {
                let valid = e.valid_up_to();
                let bad_len = e.error_len().unwrap_or(body.len() - valid);
                let start = base + valid;
                let text = std::str::from_utf8(&body[..valid]).unwrap_or_default();
                (text, Some(Span::from(start..start + bad_len)))
            }
        };

        Self {
            inner: RawToken::lexer(text),
            text,
            base,
            lines: LineIndex::new(body),
            lookahead: None,
            at_line_start: true,
            invalid,
            end: data.len(),
            finished: false,
        }
    }

    fn pull_raw(&mut self) -> Option<RawItem> {
        if let Some(item) = self.lookahead.take() {
            return Some(item);
        }
        let raw = self.inner.next()?;
        Some((raw, self.inner.span()))
    }

    /// Whether the rest of the current line holds another significant
    /// lexeme. A leading word followed by one is a key.
    fn line_continues(&mut self) -> bool {
        if self.lookahead.is_none() {
            self.lookahead = self.inner.next().map(|raw| (raw, self.inner.span()));
        }
        !matches!(
            self.lookahead,
            None | Some((Ok(RawToken::Newline | RawToken::Comment), _))
        )
    }

    fn make(&self, kind: TokenKind, range: Range<usize>) -> Token<'src> {
        let text = &self.text[range.clone()];
        let span = Span::from(range.start + self.base..range.end + self.base);
        Token::new(kind, text, span, self.position(span.start))
    }

    /// Position of an absolute buffer offset. Columns on the first line do
    /// not count the byte order mark.
    fn position(&self, offset: u32) -> Position {
        self.lines.position(offset.saturating_sub(self.base as u32))
    }

    fn finish(&mut self) -> Token<'src> {
        if let Some(span) = self.invalid.take() {
            return Token::new(
                TokenKind::Illegal,
                "\u{FFFD}",
                span,
                Lexer::position(self, span.start),
            );
        }

        let span = Span::from(self.end..self.end);
        Token::new(TokenKind::Eof, "", span, Lexer::position(self, span.start))
    }
}

impl<'src> TokenSource<'src> for Lexer<'src> {
    fn next_token(&mut self) -> Token<'src> {
        loop {
            let Some((raw, range)) = self.pull_raw() else {
                return self.finish();
            };

            let kind = match raw {
                Ok(RawToken::Newline) => {
                    self.at_line_start = true;
                    continue;
                }
                Ok(RawToken::Word) if self.at_line_start && self.line_continues() => {
                    TokenKind::Key
                }
                Ok(RawToken::Word) => TokenKind::Value,
                Ok(RawToken::Comment) => TokenKind::Comment,
                Ok(RawToken::Section) if self.at_line_start => TokenKind::Section,
                // A bracketed word after the start of a line is plain text.
                Ok(RawToken::Section) => TokenKind::Value,
                Ok(RawToken::Assign) => TokenKind::Assign,
                Err(()) => TokenKind::Illegal,
            };

            self.at_line_start = false;
            return self.make(kind, range);
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is(TokenKind::Eof);
        Some(token)
    }
}

/// Tokenizes `data` completely, `Eof` token included.
pub fn tokenize(data: &[u8]) -> Vec<Token<'_>> {
    Lexer::new(data).collect()
}
