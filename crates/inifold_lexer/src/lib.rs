//! # inifold_lexer
//!
//! Turns an INI byte buffer into a stream of [`Token`]s.
//!
//! The parser only depends on the [`TokenSource`] trait, so any producer
//! honoring its contract can stand in for [`Lexer`]: a finite sequence
//! ending in exactly one [`TokenKind::Eof`], each token carrying its raw
//! lexeme and source position.
//!
//! ## Example
//!
//! ```rust
//! use inifold_lexer::{Lexer, TokenKind, TokenSource};
//!
//! let mut lexer = Lexer::new(b"[server]\nport = 8080\n");
//! assert_eq!(lexer.next_token().kind, TokenKind::Section);
//! assert_eq!(lexer.next_token().kind, TokenKind::Key);
//! ```

mod lexer;
mod source;
mod token;

pub use lexer::{Lexer, tokenize};
pub use source::{TokenSource, TokenStream};
pub use token::{Token, TokenKind};
