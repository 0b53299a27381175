//! The token-driven parser.
//!
//! A single pass pulls tokens from a [`TokenSource`] and folds them into a
//! [`Document`]. The first malformed token halts the pass; nothing is
//! resynchronized.

use inifold_document::{Document, Entry, Span};
use inifold_lexer::{Token, TokenKind, TokenSource};
use tracing::{debug, trace};

use crate::{DuplicateKeys, ParseError, ParseErrorKind, ParserOptions, ValuePolicy};

/// Outcome of dispatching one token.
#[derive(Debug)]
enum Step {
    /// Keep pulling.
    Continue,
    /// The pass is over. `Ok` carries the span of the `Eof` token.
    Done(Result<Span, ParseError>),
}

/// An on-going parse into a borrowed [`Document`].
///
/// Starts in the document's default section. Any mutations made before an
/// error stay in the document.
#[derive(Debug)]
pub struct Parser<'doc, 'src, S> {
    source: S,
    document: &'doc mut Document,
    options: ParserOptions,
    /// Index of the section new entries go to.
    current: usize,
    /// A token already pulled but not yet dispatched: the one that ended a
    /// run of values.
    pending: Option<Token<'src>>,
}

impl<'doc, 'src, S> Parser<'doc, 'src, S>
where
    S: TokenSource<'src>,
{
    pub fn new(source: S, document: &'doc mut Document, options: ParserOptions) -> Self {
        Self {
            source,
            document,
            options,
            current: 0,
            pending: None,
        }
    }

    /// Runs the pass to completion.
    ///
    /// Returns the span of the `Eof` token on success, or the first error.
    pub fn parse(&mut self) -> Result<Span, ParseError> {
        loop {
            let token = match self.pending.take() {
                Some(token) => token,
                None => self.source.next_token(),
            };

            trace!(kind = %token.kind, position = %token.position, "dispatch");

            if let Step::Done(result) = self.dispatch(token) {
                if let Err(err) = &result {
                    debug!(
                        kind = ?err.kind(),
                        position = %err.position(),
                        lexeme = err.lexeme(),
                        "parse halted"
                    );
                }
                return result;
            }
        }
    }

    fn dispatch(&mut self, token: Token<'src>) -> Step {
        match token.kind {
            TokenKind::Section => {
                self.enter_section(&token);
                Step::Continue
            }
            TokenKind::Key => self.entry(token),
            TokenKind::Comment => Step::Continue,
            TokenKind::Value => Step::Done(Err(ParseError::at(
                ParseErrorKind::ValueWithoutKey,
                &token,
            ))),
            TokenKind::Assign => Step::Done(Err(ParseError::at(
                ParseErrorKind::UnexpectedEquals,
                &token,
            ))),
            TokenKind::Illegal => {
                Step::Done(Err(ParseError::at(ParseErrorKind::IllegalToken, &token)))
            }
            TokenKind::Eof => {
                debug!(sections = self.document.len(), "parse complete");
                Step::Done(Ok(token.span))
            }
        }
    }

    /// Makes the section named by a `[name]` header current, creating it if
    /// this is its first header.
    fn enter_section(&mut self, token: &Token<'src>) {
        let raw = token.text;
        let name = raw
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(raw);
        let name = self.options.fold_section_name(name);

        let (index, created) = self.document.section_or_insert(&name, Some(token.span));
        if created {
            debug!(section = %name, position = %token.position, "created section");
        } else {
            debug!(section = %name, position = %token.position, "merged into section");
        }
        self.current = index;
    }

    /// Handles `key = value...` starting at `key`.
    ///
    /// Values belong to the entry only while they stay on the line of the
    /// `=`. The token that ends the value run is parked in `pending` so the
    /// main loop dispatches it next.
    fn entry(&mut self, key: Token<'src>) -> Step {
        let assign = self.source.next_token();
        if !assign.is(TokenKind::Assign) {
            return Step::Done(Err(ParseError::at(ParseErrorKind::KeyWithoutEquals, &key)));
        }

        let mut value = String::new();
        let mut count = 0usize;
        loop {
            let token = self.source.next_token();
            if !token.is(TokenKind::Value) || token.position.line > assign.position.line {
                self.pending = Some(token);
                break;
            }

            match self.options.values {
                ValuePolicy::Join => {
                    if count > 0 {
                        value.push(' ');
                    }
                    value.push_str(token.text);
                }
                ValuePolicy::First if count == 0 => value.push_str(token.text),
                ValuePolicy::First => {
                    trace!(key = key.text, extra = token.text, "discarding value");
                }
            }
            count += 1;
        }

        self.store(Entry::new(key.text, value, key.span));
        Step::Continue
    }

    fn store(&mut self, entry: Entry) {
        let section = self.document.section_at_mut(self.current);
        match self.options.duplicate_keys {
            DuplicateKeys::Preserve => section.push(entry),
            DuplicateKeys::Overwrite => {
                if let Some(old) = section.upsert(entry) {
                    debug!(
                        section = section.name(),
                        key = %old.key,
                        "overwrote duplicate key"
                    );
                }
            }
        }
    }
}
