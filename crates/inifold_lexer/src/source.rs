//! The pull interface between a lexer and the parser.

use inifold_document::{Position, Span};

use crate::{Token, TokenKind};

/// A pull-based producer of tokens.
///
/// Implementations must yield a finite sequence ending in exactly one
/// [`TokenKind::Eof`] token. Pulling again after `Eof` must keep returning
/// `Eof` rather than panic.
pub trait TokenSource<'src> {
    fn next_token(&mut self) -> Token<'src>;
}

impl<'src, S: TokenSource<'src> + ?Sized> TokenSource<'src> for &mut S {
    fn next_token(&mut self) -> Token<'src> {
        (**self).next_token()
    }
}

/// A token source over an already materialized token list.
///
/// If the list does not end in `Eof`, one is synthesized right after the
/// last token.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    tokens: std::vec::IntoIter<Token<'src>>,
    end: Token<'src>,
}

impl<'src> TokenStream<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        let end = match tokens.last() {
            Some(last) if last.is(TokenKind::Eof) => *last,
            Some(last) => {
                let width = last.span.len();
                Token::new(
                    TokenKind::Eof,
                    "",
                    Span::empty(last.span.end),
                    Position::new(last.position.line, last.position.column + width),
                )
            }
            None => Token::new(TokenKind::Eof, "", Span::empty(0), Position::new(1, 0)),
        };

        Self {
            tokens: tokens.into_iter(),
            end,
        }
    }
}

impl<'src> TokenSource<'src> for TokenStream<'src> {
    fn next_token(&mut self) -> Token<'src> {
        match self.tokens.next() {
            Some(token) if token.is(TokenKind::Eof) => {
                // Drop anything queued after the terminator.
                self.tokens = Vec::new().into_iter();
                token
            }
            Some(token) => token,
            None => self.end,
        }
    }
}
