//! The semantic game record model
//!
//! [`GibRecord`] is the immutable aggregate the parser produces once per
//! input: the raw header map plus the ordered event sequence. Everything
//! else (handicap, komi, result, start color, time settings) is derived from
//! those two on demand and cached in a `OnceCell`, so each derivation runs at
//! most once no matter how often it is queried. Derivations are best-effort:
//! a header field that fails to decode resolves to `None`, never to an error.
//! Strictness lives in the parser, not here.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use once_cell::unsync::OnceCell;
use serde::Serialize;

use crate::gib::error::GibError;
use crate::gib::location::SourceLocation;
use crate::gib::parser;

const HEADER_GAME_INFO: &str = "GAMEINFOMAIN";
const HEADER_GAME_PLACE: &str = "GAMEPLACE";
const HEADER_KOMI: &str = "GAMEGONGJE";
const HEADER_GAME_SCORE: &str = "GAMEZIPSU";
const HEADER_BLACK_PLAYER: &str = "GAMEBLACKNAME";
const HEADER_WHITE_PLAYER: &str = "GAMEWHITENAME";
const GAME_INFO_GAME_RESULT: &str = "GRLT";
const GAME_INFO_TIME_INFO: &str = "GTIME";

/// A stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn flip(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// One entry of the game section, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    InitialHandicap {
        count: i32,
    },
    StonePlacement {
        move_number: i32,
        color: Color,
        /// 0-based board coordinates
        x: i32,
        y: i32,
    },
    PassMove {
        move_number: i32,
    },
}

/// The decoded game outcome
///
/// A score-bearing result with a missing score header keeps its `None` score;
/// the anomaly stays observable instead of being defaulted away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameResult {
    Score(Color, Option<f64>),
    Resignation(Color),
    Time(Color),
}

impl GameResult {
    fn winner_letter(color: Color) -> &'static str {
        match color {
            Color::Black => "B",
            Color::White => "W",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Score(winner, Some(score)) => {
                write!(f, "{}+{}", Self::winner_letter(*winner), score)
            }
            GameResult::Score(winner, None) => write!(f, "{}+", Self::winner_letter(*winner)),
            GameResult::Resignation(winner) => write!(f, "{}+R", Self::winner_letter(*winner)),
            GameResult::Time(winner) => write!(f, "{}+T", Self::winner_letter(*winner)),
        }
    }
}

/// Decoded `GTIME` value: main time plus byo-yomi overtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSettings {
    pub limit_seconds: i32,
    pub overtime_seconds: i32,
    pub overtime_stones: i32,
}

/// The header section as a plain key/value map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHeader {
    properties: HashMap<String, String>,
}

impl RawHeader {
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

/// An immutable, fully parsed GIB game record
#[derive(Debug)]
pub struct GibRecord {
    header: RawHeader,
    events: Vec<GameEvent>,
    game_info: OnceCell<HashMap<String, String>>,
    handicap: OnceCell<i32>,
    komi: OnceCell<Option<f64>>,
    game_score: OnceCell<Option<f64>>,
    game_result: OnceCell<Option<GameResult>>,
    time_settings: OnceCell<Option<TimeSettings>>,
}

impl GibRecord {
    pub fn new(header: RawHeader, events: Vec<GameEvent>) -> Self {
        Self {
            header,
            events,
            game_info: OnceCell::new(),
            handicap: OnceCell::new(),
            komi: OnceCell::new(),
            game_score: OnceCell::new(),
            game_result: OnceCell::new(),
            time_settings: OnceCell::new(),
        }
    }

    /// Parse a GIB file from a path; the file handle is opened and closed
    /// internally on every exit path
    pub fn from_path(path: &Path) -> Result<Self, GibError> {
        let bytes = fs::read(path).map_err(|e| GibError::io(&e))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a GIB file from an open byte stream; closing the stream stays
    /// the caller's responsibility
    pub fn from_reader(mut reader: impl Read) -> Result<Self, GibError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| GibError::io(&e))?;
        Self::from_bytes(&bytes)
    }

    /// Parse GIB bytes; anything that is not valid UTF-8 is a parse failure,
    /// never a silent lossy decode
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GibError> {
        match std::str::from_utf8(bytes) {
            Ok(source) => source.parse(),
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                let prefix = std::str::from_utf8(&bytes[..valid_up_to]).unwrap_or("");
                let marker =
                    SourceLocation::new(prefix).range_to_marker(&(valid_up_to..valid_up_to));
                Err(GibError::new("Input is not valid UTF-8", marker))
            }
        }
    }

    pub fn header(&self) -> &RawHeader {
        &self.header
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The `GAMEINFOMAIN` sub-map: `name:value` pairs separated by commas.
    /// An absent header key yields an empty map, not an error.
    fn game_info(&self) -> &HashMap<String, String> {
        self.game_info.get_or_init(|| {
            let mut map = HashMap::new();
            if let Some(value) = self.header.get(HEADER_GAME_INFO) {
                for piece in value.split(',') {
                    if let Some((name, value)) = piece.split_once(':') {
                        map.insert(name.to_string(), value.to_string());
                    }
                }
            }
            map
        })
    }

    /// The handicap count: the single `InitialHandicap` event's count iff
    /// exactly one such event exists, otherwise 0. Duplicate events cancel
    /// out to 0 on purpose; see DESIGN.md.
    pub fn handicap(&self) -> i32 {
        *self.handicap.get_or_init(|| {
            let mut counts = self.events.iter().filter_map(|event| match event {
                GameEvent::InitialHandicap { count } => Some(*count),
                _ => None,
            });

            match (counts.next(), counts.next()) {
                (Some(count), None) => count,
                _ => 0,
            }
        })
    }

    /// Komi, stored in the header as tenths of a point
    pub fn komi(&self) -> Option<f64> {
        *self
            .komi
            .get_or_init(|| decode_tenths(self.header.get(HEADER_KOMI)))
    }

    pub fn game_place(&self) -> Option<&str> {
        self.header.get(HEADER_GAME_PLACE)
    }

    pub fn player_black(&self) -> Option<&str> {
        self.header.get(HEADER_BLACK_PLAYER)
    }

    pub fn player_white(&self) -> Option<&str> {
        self.header.get(HEADER_WHITE_PLAYER)
    }

    fn game_score(&self) -> Option<f64> {
        *self
            .game_score
            .get_or_init(|| decode_tenths(self.header.get(HEADER_GAME_SCORE)))
    }

    /// The decoded game result, from the `GRLT` game-info code. Unknown codes
    /// resolve to `None`.
    pub fn game_result(&self) -> Option<GameResult> {
        *self.game_result.get_or_init(|| {
            let code = self
                .game_info()
                .get(GAME_INFO_GAME_RESULT)?
                .parse::<i32>()
                .ok()?;

            match code {
                0 => Some(GameResult::Score(Color::Black, self.game_score())),
                1 => Some(GameResult::Score(Color::White, self.game_score())),
                3 => Some(GameResult::Resignation(Color::Black)),
                4 => Some(GameResult::Resignation(Color::White)),
                7 => Some(GameResult::Time(Color::Black)),
                8 => Some(GameResult::Time(Color::White)),
                _ => None,
            }
        })
    }

    /// Handicap games conventionally start with White
    pub fn start_color(&self) -> Color {
        if self.handicap() >= 2 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Time settings from the dash-delimited `GTIME` value, e.g. `600-30-3`.
    /// Decoding is best-effort: anything off resolves to `None`.
    pub fn time_settings(&self) -> Option<TimeSettings> {
        *self.time_settings.get_or_init(|| {
            let info = self.game_info().get(GAME_INFO_TIME_INFO)?;
            let parts: Vec<&str> = info.split('-').collect();
            let [limit, seconds, stones]: [&str; 3] = parts.try_into().ok()?;

            Some(TimeSettings {
                limit_seconds: limit.parse().ok()?,
                overtime_seconds: seconds.parse().ok()?,
                overtime_stones: stones.parse().ok()?,
            })
        })
    }

    /// Reconstruct a move's color from its number; pass records carry no
    /// explicit color tag
    pub fn color_by_move_number(&self, move_number: i32) -> Color {
        if move_number % 2 == 0 {
            self.start_color()
        } else {
            self.start_color().flip()
        }
    }

    /// A serializable snapshot of the record with every derived field
    /// resolved, for debug output
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            place: self.game_place().map(str::to_string),
            player_black: self.player_black().map(str::to_string),
            player_white: self.player_white().map(str::to_string),
            komi: self.komi(),
            handicap: self.handicap(),
            start_color: self.start_color(),
            result: self.game_result(),
            time_settings: self.time_settings(),
            events: self.events.clone(),
        }
    }
}

impl FromStr for GibRecord {
    type Err = GibError;

    fn from_str(source: &str) -> Result<Self, GibError> {
        let (header, events) = parser::parse(source)?;
        Ok(Self::new(header, events))
    }
}

/// Decode a header field stored as tenths (komi and score)
fn decode_tenths(value: Option<&str>) -> Option<f64> {
    Some(value?.parse::<i32>().ok()? as f64 / 10.0)
}

/// The resolved view of a [`GibRecord`] produced by [`GibRecord::summary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub place: Option<String>,
    pub player_black: Option<String>,
    pub player_white: Option<String>,
    pub komi: Option<f64>,
    pub handicap: i32,
    pub start_color: Color,
    pub result: Option<GameResult>,
    pub time_settings: Option<TimeSettings>,
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(header: &[(&str, &str)], events: Vec<GameEvent>) -> GibRecord {
        let map = header
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GibRecord::new(RawHeader::new(map), events)
    }

    #[test]
    fn test_handicap_single_ini() {
        let record = record(&[], vec![GameEvent::InitialHandicap { count: 4 }]);
        assert_eq!(record.handicap(), 4);
        assert_eq!(record.start_color(), Color::White);
    }

    #[test]
    fn test_handicap_missing_ini() {
        let record = record(&[], vec![]);
        assert_eq!(record.handicap(), 0);
        assert_eq!(record.start_color(), Color::Black);
    }

    #[test]
    fn test_handicap_duplicate_ini_yields_zero() {
        // Two conflicting INI records cancel out rather than erroring
        let record = record(
            &[],
            vec![
                GameEvent::InitialHandicap { count: 2 },
                GameEvent::InitialHandicap { count: 3 },
            ],
        );
        assert_eq!(record.handicap(), 0);
        assert_eq!(record.start_color(), Color::Black);
    }

    #[test]
    fn test_komi_is_tenths() {
        let record = record(&[("GAMEGONGJE", "65")], vec![]);
        assert_eq!(record.komi(), Some(6.5));
    }

    #[test]
    fn test_komi_unparsable_is_none() {
        let record = record(&[("GAMEGONGJE", "six")], vec![]);
        assert_eq!(record.komi(), None);
    }

    #[test]
    fn test_game_result_score_with_score_header() {
        let record = record(
            &[("GAMEINFOMAIN", "GRLT:0"), ("GAMEZIPSU", "50")],
            vec![],
        );
        assert_eq!(
            record.game_result(),
            Some(GameResult::Score(Color::Black, Some(5.0)))
        );
    }

    #[test]
    fn test_game_result_score_without_score_header() {
        let record = record(&[("GAMEINFOMAIN", "GRLT:1")], vec![]);
        let result = record.game_result();
        assert_eq!(result, Some(GameResult::Score(Color::White, None)));
        assert_eq!(result.unwrap().to_string(), "W+");
    }

    #[test]
    fn test_game_result_unknown_code_is_none() {
        let record = record(&[("GAMEINFOMAIN", "GRLT:9")], vec![]);
        assert_eq!(record.game_result(), None);
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(
            GameResult::Score(Color::Black, Some(5.0)).to_string(),
            "B+5"
        );
        assert_eq!(GameResult::Resignation(Color::Black).to_string(), "B+R");
        assert_eq!(GameResult::Time(Color::White).to_string(), "W+T");
    }

    #[test]
    fn test_time_settings() {
        let record = record(&[("GAMEINFOMAIN", "GRLT:3,GTIME:600-30-3")], vec![]);
        assert_eq!(
            record.time_settings(),
            Some(TimeSettings {
                limit_seconds: 600,
                overtime_seconds: 30,
                overtime_stones: 3,
            })
        );
    }

    #[test]
    fn test_time_settings_malformed_is_none() {
        for value in ["GTIME:600-30", "GTIME:600-30-3-1", "GTIME:600-x-3", ""] {
            let record = record(&[("GAMEINFOMAIN", value)], vec![]);
            assert_eq!(record.time_settings(), None, "value: {value}");
        }
    }

    #[test]
    fn test_color_by_move_number() {
        let record = record(&[], vec![GameEvent::InitialHandicap { count: 3 }]);
        assert_eq!(record.start_color(), Color::White);
        assert_eq!(record.color_by_move_number(0), Color::White);
        assert_eq!(record.color_by_move_number(1), Color::Black);
        assert_eq!(record.color_by_move_number(2), Color::White);
    }

    #[test]
    fn test_derived_fields_are_stable_across_queries() {
        let record = record(&[("GAMEINFOMAIN", "GRLT:3,GTIME:60-30-3")], vec![]);
        let first = record.game_result();
        assert_eq!(record.game_result(), first);
        let first = record.time_settings();
        assert_eq!(record.time_settings(), first);
    }
}
