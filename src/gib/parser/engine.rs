//! Token-cursor grammar parser for the GIB format
//!
//! The grammar has two fenced top-level sections:
//!
//! ```text
//! gib             := header game
//! header          := '\HS' header_property* '\HE'
//! header_property := IDENT '=' VALUE
//! game            := '\GS' game_line* '\GE'
//! game_line       := IDENT INT* NEWLINE
//!                  | INT+ NEWLINE
//! ```
//!
//! This stage is purely syntactic: it yields header key/value pairs with
//! their raw value lexemes and tagged argument lines with their spans, and
//! leaves the semantic decoding (value de-quoting, arities, color codes) to
//! the extractors. Bare integer lines and trailing tokens after a record's
//! arguments are real-world Tygem noise and are skipped; a token that fits
//! nowhere in the grammar is a fatal error with a marker at its span.

use std::ops::Range;

use crate::gib::error::GibError;
use crate::gib::lexer::{self, Token};
use crate::gib::location::SourceLocation;

/// One `IDENT = VALUE` header pair, value still carrying its delimiters
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPropertySyntax {
    pub key: String,
    pub key_span: Range<usize>,
    /// Raw value lexeme including the quotes and the `;` terminator
    pub raw_value: String,
    pub value_span: Range<usize>,
}

/// One integer argument of a game record
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub text: String,
    pub span: Range<usize>,
}

/// One tagged game record line, e.g. `STO 0 2 2 15 15`
#[derive(Debug, Clone, PartialEq)]
pub struct GameLineSyntax {
    pub tag: String,
    pub tag_span: Range<usize>,
    pub args: Vec<Argument>,
}

/// The structural parse result: both top-level sections
#[derive(Debug, Clone, PartialEq)]
pub struct GibSyntax {
    pub header: Vec<HeaderPropertySyntax>,
    pub game: Vec<GameLineSyntax>,
}

/// Parse source text into the syntactic section structure
pub fn parse_syntax(source: &str) -> Result<GibSyntax, GibError> {
    let tokens = lexer::lex(source)?;
    let mut cursor = TokenCursor::new(source, tokens);
    cursor.document()
}

struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    locations: SourceLocation,
}

impl<'a> TokenCursor<'a> {
    fn new(source: &'a str, tokens: Vec<(Token, Range<usize>)>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            locations: SourceLocation::new(source),
        }
    }

    fn document(&mut self) -> Result<GibSyntax, GibError> {
        self.skip_newlines();
        self.expect(Token::HeaderStart)?;
        let header = self.header_properties()?;
        self.skip_newlines();
        self.expect(Token::GameStart)?;
        let game = self.game_lines()?;
        self.skip_newlines();

        if let Some((token, span)) = self.peek() {
            let (token, span) = (*token, span.clone());
            return Err(self.error_at(
                span,
                format!("Expected end of file, but got {}", token.describe()),
            ));
        }

        Ok(GibSyntax { header, game })
    }

    /// Parse header properties up to and including the closing `\HE`
    fn header_properties(&mut self) -> Result<Vec<HeaderPropertySyntax>, GibError> {
        let mut properties = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                Some((Token::HeaderEnd, _)) => {
                    self.advance();
                    return Ok(properties);
                }
                Some((Token::Ident, span)) => {
                    let key_span = span.clone();
                    let key = self.slice(&key_span).to_string();
                    self.advance();
                    self.expect(Token::Equals)?;
                    let value_span = self.expect(Token::Value)?;
                    let raw_value = self.slice(&value_span).to_string();
                    properties.push(HeaderPropertySyntax {
                        key,
                        key_span,
                        raw_value,
                        value_span,
                    });
                }
                Some((token, span)) => {
                    let (token, span) = (*token, span.clone());
                    return Err(self.error_at(
                        span,
                        format!(
                            "Expected a header property or '\\HE', but got {}",
                            token.describe()
                        ),
                    ));
                }
                None => {
                    return Err(self.error_at(
                        self.eof_span(),
                        "Expected '\\HE', but got end of file".to_string(),
                    ))
                }
            }
        }
    }

    /// Parse game record lines up to and including the closing `\GE`
    fn game_lines(&mut self) -> Result<Vec<GameLineSyntax>, GibError> {
        let mut lines = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                Some((Token::GameEnd, _)) => {
                    self.advance();
                    return Ok(lines);
                }
                Some((Token::Ident, span)) => {
                    let tag_span = span.clone();
                    let tag = self.slice(&tag_span).to_string();
                    self.advance();

                    let mut args = Vec::new();
                    while let Some((Token::Int, span)) = self.peek() {
                        let span = span.clone();
                        args.push(Argument {
                            text: self.slice(&span).to_string(),
                            span,
                        });
                        self.advance();
                    }
                    self.skip_to_line_end();

                    lines.push(GameLineSyntax {
                        tag,
                        tag_span,
                        args,
                    });
                }
                // Bare counter lines, e.g. `119 43 0`
                Some((Token::Int, _)) => self.skip_to_line_end(),
                Some((token, span)) => {
                    let (token, span) = (*token, span.clone());
                    return Err(self.error_at(
                        span,
                        format!(
                            "Expected a game record or '\\GE', but got {}",
                            token.describe()
                        ),
                    ));
                }
                None => {
                    return Err(self.error_at(
                        self.eof_span(),
                        "Expected '\\GE', but got end of file".to_string(),
                    ))
                }
            }
        }
    }

    fn peek(&self) -> Option<&(Token, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn slice(&self, span: &Range<usize>) -> &'a str {
        &self.source[span.clone()]
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some((Token::Newline, _))) {
            self.advance();
        }
    }

    /// Skip trailing tokens of the current game record; stops before the
    /// newline or section fence so the caller sees record boundaries
    fn skip_to_line_end(&mut self) {
        while let Some((token, _)) = self.peek() {
            if token.ends_game_line() {
                break;
            }
            self.advance();
        }
    }

    fn expect(&mut self, expected: Token) -> Result<Range<usize>, GibError> {
        match self.peek() {
            Some((token, span)) if *token == expected => {
                let span = span.clone();
                self.advance();
                Ok(span)
            }
            Some((token, span)) => {
                let (token, span) = (*token, span.clone());
                Err(self.error_at(
                    span,
                    format!(
                        "Expected {}, but got {}",
                        expected.describe(),
                        token.describe()
                    ),
                ))
            }
            None => Err(self.error_at(
                self.eof_span(),
                format!("Expected {}, but got end of file", expected.describe()),
            )),
        }
    }

    fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    fn error_at(&self, span: Range<usize>, message: String) -> GibError {
        GibError::new(message, self.locations.range_to_marker(&span))
    }
}
