//! Full-document parses through every entry point
//!
//! The same grammar entry point serves in-memory text, byte streams, and
//! paths; these tests feed one fixture through all three and check the
//! resulting records agree.

use gib::{GameEvent, GibRecord};

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

#[test]
fn parse_from_string() {
    let record: GibRecord = EVEN_GAME.parse().unwrap();

    assert_eq!(record.player_black(), Some("Lee Sedol"));
    assert_eq!(record.player_white(), Some("Gu Li"));
    assert_eq!(record.game_place(), Some("Tygem"));
    assert_eq!(record.komi(), Some(6.5));
    assert_eq!(record.events().len(), 3);
}

#[test]
fn parse_from_reader() {
    let from_string: GibRecord = EVEN_GAME.parse().unwrap();
    let from_reader = GibRecord::from_reader(EVEN_GAME.as_bytes()).unwrap();

    assert_eq!(from_string.summary(), from_reader.summary());
}

#[test]
fn parse_from_path() {
    let path = std::env::temp_dir().join(format!("gib_parse_from_path_{}.gib", std::process::id()));
    std::fs::write(&path, EVEN_GAME).unwrap();

    let from_path = GibRecord::from_path(&path);
    std::fs::remove_file(&path).unwrap();

    let from_string: GibRecord = EVEN_GAME.parse().unwrap();
    assert_eq!(from_path.unwrap().summary(), from_string.summary());
}

#[test]
fn stone_and_pass_records_yield_events() {
    let record: GibRecord = EVEN_GAME.parse().unwrap();
    assert!(!record.events().is_empty());
    assert!(matches!(
        record.events()[0],
        GameEvent::StonePlacement { move_number: 1, .. }
    ));
    assert!(matches!(
        record.events()[2],
        GameEvent::PassMove { move_number: 3 }
    ));
}

#[test]
fn empty_game_section_yields_empty_events() {
    let record: GibRecord = "\\HS\n\\HE\n\\GS\n\\GE\n".parse().unwrap();
    assert!(record.events().is_empty());
}

#[test]
fn missing_closing_quote_is_fatal() {
    let source = "\\HS\nGAMEPLACE=\"Tygem\n\\HE\n\\GS\n\\GE\n";
    let err = source.parse::<GibRecord>().unwrap_err();

    assert_eq!(err.marker().start_line, 2);
    assert_eq!(err.marker().start_column, 11);
}

#[test]
fn missing_file_reports_io_failure() {
    let err = GibRecord::from_path(std::path::Path::new("/nonexistent/game.gib")).unwrap_err();
    assert!(err.message().contains("Failed to read input"));
}

#[test]
fn invalid_utf8_is_a_parse_failure() {
    let mut bytes = b"\\HS\n".to_vec();
    bytes.extend([0xff, 0xfe]);
    let err = GibRecord::from_bytes(&bytes).unwrap_err();

    assert!(err.message().contains("not valid UTF-8"));
    assert_eq!(err.marker().start_line, 2);
}
