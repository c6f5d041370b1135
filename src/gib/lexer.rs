//! Lexer module for the GIB format
//!
//! Tokenization is a single logos pass over the whole input; there is no
//! transformation pipeline. The grammar parser consumes the `(Token, Span)`
//! pairs directly and newlines stay in the stream because game records are
//! newline-terminated.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize_with_locations;
pub use tokens::Token;

use crate::gib::error::GibError;

/// Main lexer entry point: tokens with their byte spans
pub fn lex(source: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, GibError> {
    tokenize_with_locations(source)
}
