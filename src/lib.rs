//! # gib
//!
//! A parser for the GIB go game record format, with a projection onto SGF.
//!
//! A GIB file has a fenced header of quoted key/value pairs and a fenced game
//! section of tagged integer records:
//!
//! ```text
//! \HS
//! GAMEBLACKNAME="Lee Sedol";
//! GAMEWHITENAME="Gu Li";
//! GAMEGONGJE="65";
//! \HE
//! \GS
//! INI 0 1 0 &4
//! STO 0 1 1 15 15
//! STO 0 2 2 3 3
//! \GE
//! ```
//!
//! Parsing yields an immutable [`GibRecord`] with lazily derived semantic
//! fields (handicap, komi, result, start color, time settings). The
//! [`sgf`] module projects a record onto an ordered list of typed SGF
//! property assertions and renders them as SGF text.
//!
//! Fatal failures carry a [`Marker`](gib::location::Marker) pointing at the
//! offending span, 1-based, suitable for showing a user the bad characters
//! in the original file.

pub mod gib;
pub mod sgf;

pub use gib::error::GibError;
pub use gib::record::{Color, GameEvent, GameResult, GibRecord, RawHeader, TimeSettings};
