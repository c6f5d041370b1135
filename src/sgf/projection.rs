//! Projection of a [`GibRecord`] onto SGF property assertions
//!
//! This module owns the GIB-specific conversion rules: the star-point table
//! for standard handicaps, the +1 shift from GIB's 0-based coordinates into
//! SGF's 1-based space, move-number preservation, and the reconstruction of
//! pass colors from move parity. Absent optional fields are omitted
//! entirely, never emitted as empty or defaulted values.

use std::collections::BTreeSet;

use crate::gib::record::{GameEvent, GibRecord};
use crate::sgf::properties::{SgfPoint, SgfProperty};

/// Project a game record onto the ordered SGF property list
pub fn project(record: &GibRecord) -> Vec<SgfProperty> {
    let mut properties = root_properties();
    properties.extend(game_info_properties(record));
    properties.extend(handicap_properties(record));
    properties.extend(time_properties(record));
    properties.extend(move_properties(record));
    properties
}

fn root_properties() -> Vec<SgfProperty> {
    vec![
        SgfProperty::FF(4),
        SgfProperty::GM(1),
        SgfProperty::SZ(19),
        SgfProperty::CA("UTF-8".to_string()),
        SgfProperty::AP("gib".to_string(), env!("CARGO_PKG_VERSION").to_string()),
    ]
}

fn game_info_properties(record: &GibRecord) -> Vec<SgfProperty> {
    let mut properties = Vec::new();

    if let Some(place) = record.game_place() {
        properties.push(SgfProperty::PC(place.to_string()));
    }
    if let Some(black) = record.player_black() {
        properties.push(SgfProperty::PB(black.to_string()));
    }
    if let Some(white) = record.player_white() {
        properties.push(SgfProperty::PW(white.to_string()));
    }
    if let Some(komi) = record.komi() {
        properties.push(SgfProperty::KM(komi));
    }
    if let Some(result) = record.game_result() {
        properties.push(SgfProperty::RE(result));
    }

    properties
}

/// `HA` whenever a handicap is recorded; `AB` only for the standard counts
/// that have star points
fn handicap_properties(record: &GibRecord) -> Vec<SgfProperty> {
    let handicap = record.handicap();
    if handicap <= 0 {
        return Vec::new();
    }

    let mut properties = vec![SgfProperty::HA(handicap)];
    let points = handicap_points(handicap);
    if !points.is_empty() {
        properties.push(SgfProperty::AB(points.into_iter().collect()));
    }

    properties
}

fn time_properties(record: &GibRecord) -> Vec<SgfProperty> {
    match record.time_settings() {
        Some(time) => vec![
            SgfProperty::TM(time.limit_seconds as f64),
            SgfProperty::OT(format!(
                "{}x{} byo-yomi",
                time.overtime_stones, time.overtime_seconds
            )),
        ],
        None => Vec::new(),
    }
}

/// One `MN` + `B`/`W` pair per stone or pass event, preserving file order
/// and original move numbers
fn move_properties(record: &GibRecord) -> Vec<SgfProperty> {
    record
        .events()
        .iter()
        .flat_map(|event| match *event {
            GameEvent::InitialHandicap { .. } => Vec::new(),
            GameEvent::StonePlacement {
                move_number,
                color,
                x,
                y,
            } => vec![
                SgfProperty::MN(move_number),
                // GIB coordinates are 0-based, SGF points are 1-based
                SgfProperty::stone(color, SgfPoint::new(x + 1, y + 1)),
            ],
            GameEvent::PassMove { move_number } => vec![
                SgfProperty::MN(move_number),
                SgfProperty::pass(record.color_by_move_number(move_number)),
            ],
        })
        .collect()
}

/// Star points for the standard handicap counts 2-9, as SGF points
///
/// Each count's set extends a smaller count's set, which is why this is
/// written recursively. Counts outside 2-9 place no stones.
pub fn handicap_points(stones: i32) -> BTreeSet<SgfPoint> {
    let point = |x, y| SgfPoint::new(x, y);

    match stones {
        2 => BTreeSet::from([point(4, 16), point(16, 4)]),
        3 => &handicap_points(2) | &BTreeSet::from([point(16, 16)]),
        4 => &handicap_points(3) | &BTreeSet::from([point(4, 4)]),
        5 => &handicap_points(4) | &BTreeSet::from([point(10, 10)]),
        6 => &handicap_points(4) | &BTreeSet::from([point(4, 10), point(16, 10)]),
        7 => &handicap_points(6) | &BTreeSet::from([point(10, 10)]),
        8 => &handicap_points(6) | &BTreeSet::from([point(10, 4), point(10, 16)]),
        9 => &handicap_points(8) | &BTreeSet::from([point(10, 10)]),
        _ => BTreeSet::new(),
    }
}
