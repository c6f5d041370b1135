//! Core tokenization implementation for the GIB lexer
//!
//! Tokenization is handled entirely by logos; this module runs the lexer over
//! the full source and pairs every token with its byte span. Unlike the
//! downstream soft-decode rules, lexing is strict: the first slice that fails
//! to match any token aborts with a [`GibError`] pointing at it.

use logos::Logos;

use crate::gib::error::GibError;
use crate::gib::lexer::tokens::Token;
use crate::gib::location::SourceLocation;

/// Tokenize source text with location information
///
/// Returns tokens paired with their byte spans, or the first lexical error
/// with a marker at the offending characters.
pub fn tokenize_with_locations(source: &str) -> Result<Vec<(Token, logos::Span)>, GibError> {
    let locations = SourceLocation::new(source);
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(GibError::new(
                    format!("Unexpected input '{}'", lexer.slice()),
                    locations.range_to_marker(&lexer.span()),
                ))
            }
        }
    }

    Ok(tokens)
}
