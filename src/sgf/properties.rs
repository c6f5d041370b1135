//! SGF property vocabulary
//!
//! The typed assertions the projection hands to an SGF builder. Only the
//! properties this converter can produce are modeled; this is the contract
//! with the consumer, not a general SGF implementation.

use serde::Serialize;

use crate::gib::record::{Color, GameResult};

/// A board point in SGF's 1-based coordinate space (`a` = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SgfPoint {
    pub x: i32,
    pub y: i32,
}

impl SgfPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A stone placement or a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SgfMove {
    Stone(SgfPoint),
    Pass,
}

/// One typed SGF property assertion, in emission order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SgfProperty {
    // Root properties
    FF(i32),
    GM(i32),
    SZ(i32),
    CA(String),
    AP(String, String),

    // Game info properties
    PC(String),
    PB(String),
    PW(String),
    KM(f64),
    RE(GameResult),
    TM(f64),
    OT(String),
    HA(i32),

    // Setup
    AB(Vec<SgfPoint>),

    // Move properties; every `MN` opens a new move group
    MN(i32),
    B(SgfMove),
    W(SgfMove),
}

impl SgfProperty {
    /// Build the B/W move property for a color
    pub fn stone(color: Color, point: SgfPoint) -> Self {
        match color {
            Color::Black => SgfProperty::B(SgfMove::Stone(point)),
            Color::White => SgfProperty::W(SgfMove::Stone(point)),
        }
    }

    /// Build the B/W pass property for a color
    pub fn pass(color: Color) -> Self {
        match color {
            Color::Black => SgfProperty::B(SgfMove::Pass),
            Color::White => SgfProperty::W(SgfMove::Pass),
        }
    }
}
