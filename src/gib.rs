//! GIB format core: lexer, grammar parser, and the semantic game record

pub mod error;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod record;
