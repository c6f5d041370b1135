//! Game property extraction: record lines to typed [`GameEvent`]s
//!
//! Exactly three tags are understood:
//!
//! - `STO pad move color x y` — a stone placement; the color code is `1` for
//!   Black and `2` for White, anything else is fatal.
//! - `INI pad pad handicap` — the initial handicap setup.
//! - `SKI pad move` — a pass.
//!
//! Any other tag is dropped without an event: the game section is treated as
//! a forward-compatible stream. Argument decoding is strict; too few
//! arguments or an integer that does not fit point at the offending span.

use crate::gib::error::GibError;
use crate::gib::location::SourceLocation;
use crate::gib::parser::engine::{Argument, GameLineSyntax};
use crate::gib::record::{Color, GameEvent};

const TAG_STONE: &str = "STO";
const TAG_INITIAL: &str = "INI";
const TAG_PASS: &str = "SKI";

/// Map every recognized game record line to one event, in file order
pub fn extract_game(
    lines: &[GameLineSyntax],
    locations: &SourceLocation,
) -> Result<Vec<GameEvent>, GibError> {
    let mut events = Vec::new();

    for line in lines {
        if let Some(event) = extract_event(line, locations)? {
            events.push(event);
        }
    }

    Ok(events)
}

fn extract_event(
    line: &GameLineSyntax,
    locations: &SourceLocation,
) -> Result<Option<GameEvent>, GibError> {
    let event = match line.tag.as_str() {
        TAG_STONE => {
            let move_number = to_int(arg(line, 1, locations)?, locations)?;
            let color = to_color(arg(line, 2, locations)?, locations)?;
            let x = to_int(arg(line, 3, locations)?, locations)?;
            let y = to_int(arg(line, 4, locations)?, locations)?;
            Some(GameEvent::StonePlacement {
                move_number,
                color,
                x,
                y,
            })
        }
        TAG_INITIAL => {
            let count = to_int(arg(line, 2, locations)?, locations)?;
            Some(GameEvent::InitialHandicap { count })
        }
        TAG_PASS => {
            let move_number = to_int(arg(line, 1, locations)?, locations)?;
            Some(GameEvent::PassMove { move_number })
        }
        _ => None,
    };

    Ok(event)
}

/// Fetch the record's n-th argument, or fail at the tag's span
fn arg<'a>(
    line: &'a GameLineSyntax,
    index: usize,
    locations: &SourceLocation,
) -> Result<&'a Argument, GibError> {
    line.args.get(index).ok_or_else(|| {
        GibError::new(
            format!(
                "Expected at least {} arguments for '{}', but got {}",
                index + 1,
                line.tag,
                line.args.len()
            ),
            locations.range_to_marker(&line.tag_span),
        )
    })
}

fn to_int(argument: &Argument, locations: &SourceLocation) -> Result<i32, GibError> {
    argument.text.parse().map_err(|_| {
        GibError::new(
            format!("Expected an integer, but got {}", argument.text),
            locations.range_to_marker(&argument.span),
        )
    })
}

fn to_color(argument: &Argument, locations: &SourceLocation) -> Result<Color, GibError> {
    match to_int(argument, locations)? {
        1 => Ok(Color::Black),
        2 => Ok(Color::White),
        _ => Err(GibError::new(
            format!("Expected either '1' or '2' but got {}", argument.text),
            locations.range_to_marker(&argument.span),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gib::parser::engine::parse_syntax;

    fn events(game_lines: &str) -> Result<Vec<GameEvent>, GibError> {
        let source = format!("\\HS\n\\HE\n\\GS\n{}\\GE\n", game_lines);
        let syntax = parse_syntax(&source)?;
        extract_game(&syntax.game, &SourceLocation::new(&source))
    }

    #[test]
    fn test_stone_placement() {
        assert_eq!(
            events("STO 0 2 2 15 15\n").unwrap(),
            vec![GameEvent::StonePlacement {
                move_number: 2,
                color: Color::White,
                x: 15,
                y: 15,
            }]
        );
    }

    #[test]
    fn test_initial_handicap() {
        assert_eq!(
            events("INI 0 1 3 &4\n").unwrap(),
            vec![GameEvent::InitialHandicap { count: 3 }]
        );
    }

    #[test]
    fn test_pass() {
        assert_eq!(
            events("SKI 0 58\n").unwrap(),
            vec![GameEvent::PassMove { move_number: 58 }]
        );
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        assert_eq!(events("NYA 1 2 3\nSKI 0 4\n").unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_color_code_is_fatal() {
        let err = events("STO 0 1 5 3 3\n").unwrap_err();
        assert_eq!(err.message(), "Expected either '1' or '2' but got 5");
        // `5` sits on line 4 of the synthesized document
        assert_eq!(err.marker().start_line, 4);
        assert_eq!(err.marker().start_column, 9);
        assert_eq!(err.marker().end_column, 10);
    }

    #[test]
    fn test_integer_overflow_is_fatal() {
        let err = events("SKI 0 99999999999999999999\n").unwrap_err();
        assert!(err
            .message()
            .contains("Expected an integer, but got 99999999999999999999"));
    }

    #[test]
    fn test_too_few_arguments_is_fatal() {
        let err = events("STO 0 1\n").unwrap_err();
        assert_eq!(
            err.message(),
            "Expected at least 3 arguments for 'STO', but got 2"
        );
    }
}
