//! Token definitions for the GIB format
//!
//! Tokens are defined with the logos derive macro. The format is
//! line-oriented with two fenced sections: a header (`\HS` .. `\HE`) of
//! `IDENT="value";` properties and a game section (`\GS` .. `\GE`) of tagged
//! integer records.
//!
//! A header value lexes as a single [`Token::Value`] covering the opening
//! quote, the content, the closing quote and the `;` record terminator. The
//! extractor strips exactly one leading and two trailing characters from the
//! lexeme, so the token must keep all of them. A quote that never closes on
//! its line fails to lex, which is a fatal error.
//!
//! `&n` markers that Tygem clients append to game records carry no
//! information we extract and are skipped at the lexer level, as is all
//! non-newline whitespace. Newlines are real tokens: game records are
//! newline-terminated.

use logos::Logos;

/// All possible tokens in the GIB format
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"&[0-9]+")]
pub enum Token {
    // Section fences
    #[token(r"\HS")]
    HeaderStart,
    #[token(r"\HE")]
    HeaderEnd,
    #[token(r"\GS")]
    GameStart,
    #[token(r"\GE")]
    GameEnd,

    #[token("=")]
    Equals,

    // Quoted header value including its terminator, e.g. `"Lee Sedol";`
    #[regex(r#""[^"\n]*";"#)]
    Value,

    // Header keys and game record tags (GAMEBLACKNAME, STO, INI, SKI, ...)
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"-?[0-9]+")]
    Int,

    #[token("\n")]
    Newline,
}

impl Token {
    /// Name used in "expected X, but got Y" diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::HeaderStart => r"'\HS'",
            Token::HeaderEnd => r"'\HE'",
            Token::GameStart => r"'\GS'",
            Token::GameEnd => r"'\GE'",
            Token::Equals => "'='",
            Token::Value => "a quoted value",
            Token::Ident => "an identifier",
            Token::Int => "an integer",
            Token::Newline => "a line break",
        }
    }

    /// Check if this token ends a game record line
    pub fn ends_game_line(&self) -> bool {
        matches!(self, Token::Newline | Token::GameEnd)
    }
}
