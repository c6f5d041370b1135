//! Grammar parser for the GIB format
//!
//! Three stages, strict at every step:
//! 1. [`engine`] parses the token stream into the two fenced sections.
//! 2. [`header`] de-quotes the header pairs into a [`RawHeader`].
//! 3. [`game`] decodes record lines into typed [`GameEvent`]s.
//!
//! The first failure anywhere aborts with a [`GibError`](crate::gib::error::GibError);
//! there is no recovery and no partial result.

pub mod engine;
pub mod game;
pub mod header;

pub use engine::{parse_syntax, Argument, GameLineSyntax, GibSyntax, HeaderPropertySyntax};

use crate::gib::error::GibError;
use crate::gib::location::SourceLocation;
use crate::gib::record::{GameEvent, RawHeader};

/// Parse GIB source text into the raw header and the ordered event sequence
pub fn parse(source: &str) -> Result<(RawHeader, Vec<GameEvent>), GibError> {
    let syntax = engine::parse_syntax(source)?;
    let locations = SourceLocation::new(source);

    let raw_header = header::extract_header(syntax.header);
    let events = game::extract_game(&syntax.game, &locations)?;

    Ok((raw_header, events))
}
