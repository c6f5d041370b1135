//! Projection shape and end-to-end SGF output
//!
//! For a record with N stone/pass events the projection must emit exactly N
//! move groups (`MN` + `B`/`W`), preserving file order and original move
//! numbers; handicap games additionally get `HA`/`AB`.

use gib::sgf::{self, SgfProperty};
use gib::GibRecord;

const EVEN_GAME: &str = r#"\HS
GAMEBLACKNAME="Lee Sedol";
GAMEWHITENAME="Gu Li";
GAMEPLACE="Tygem";
GAMEGONGJE="65";
GAMEZIPSU="50";
GAMEINFOMAIN="GRLT:0,GTIME:600-30-3";
\HE
\GS
2 1 0
STO 0 1 1 15 15
STO 0 2 2 3 3
SKI 0 3
\GE
"#;

const HANDICAP_GAME: &str = r#"\HS
GAMEINFOMAIN="GRLT:3";
\HE
\GS
INI 0 1 4 &4
STO 0 1 2 2 13
SKI 0 2
\GE
"#;

#[test]
fn one_move_group_per_stone_or_pass_event() {
    let record: GibRecord = EVEN_GAME.parse().unwrap();
    let properties = sgf::project(&record);

    let move_numbers: Vec<i32> = properties
        .iter()
        .filter_map(|p| match p {
            SgfProperty::MN(n) => Some(*n),
            _ => None,
        })
        .collect();
    let moves = properties
        .iter()
        .filter(|p| matches!(p, SgfProperty::B(_) | SgfProperty::W(_)))
        .count();

    assert_eq!(move_numbers, vec![1, 2, 3]);
    assert_eq!(moves, 3);
}

#[test]
fn handicap_events_produce_setup_not_moves() {
    let record: GibRecord = HANDICAP_GAME.parse().unwrap();
    let properties = sgf::project(&record);

    assert!(properties.contains(&SgfProperty::HA(4)));
    let setup_points = properties.iter().find_map(|p| match p {
        SgfProperty::AB(points) => Some(points.len()),
        _ => None,
    });
    assert_eq!(setup_points, Some(4));

    // The INI record itself contributes no move group
    let move_count = properties
        .iter()
        .filter(|p| matches!(p, SgfProperty::MN(_)))
        .count();
    assert_eq!(move_count, 2);
}

#[test]
fn handicap_pass_color_starts_from_white() {
    // Handicap 4: White starts, so the even-numbered pass is White's
    let record: GibRecord = HANDICAP_GAME.parse().unwrap();
    let properties = sgf::project(&record);

    assert!(properties.contains(&SgfProperty::pass(gib::Color::White)));
}

#[test]
fn full_document_renders_expected_sgf() {
    let record: GibRecord = EVEN_GAME.parse().unwrap();
    let tree = sgf::write_tree(&sgf::project(&record));

    assert_eq!(
        tree,
        "(;FF[4]GM[1]SZ[19]CA[UTF-8]AP[gib:0.1.0]\
         PC[Tygem]PB[Lee Sedol]PW[Gu Li]KM[6.5]RE[B+5]\
         TM[600]OT[3x30 byo-yomi]\
         ;MN[1]B[pp];MN[2]W[dd];MN[3]W[])"
    );
}

#[test]
fn record_without_optional_headers_renders_minimal_tree() {
    let record: GibRecord = "\\HS\n\\HE\n\\GS\n\\GE\n".parse().unwrap();
    let tree = sgf::write_tree(&sgf::project(&record));

    assert_eq!(tree, "(;FF[4]GM[1]SZ[19]CA[UTF-8]AP[gib:0.1.0])");
}
