//! Header extraction: syntactic key/value pairs to a [`RawHeader`]
//!
//! A value lexeme arrives as `"content";` and is de-quoted by stripping
//! exactly one leading character (the opening quote) and two trailing
//! characters (the closing quote and the record terminator). The offsets are
//! load-bearing: stripping anything else would truncate or pad the content.
//! Duplicate keys follow map semantics, last value wins.

use std::collections::HashMap;

use crate::gib::parser::engine::HeaderPropertySyntax;
use crate::gib::record::RawHeader;

/// Turn the header section's pair list into the raw header map
pub fn extract_header(properties: Vec<HeaderPropertySyntax>) -> RawHeader {
    let mut map = HashMap::new();

    for property in properties {
        map.insert(property.key, strip_value(&property.raw_value));
    }

    RawHeader::new(map)
}

/// Strip `"` from the front and `";` from the back of a value lexeme
///
/// The lexeme shape is guaranteed by the lexer (at least three bytes, ASCII
/// delimiters), so byte slicing cannot split a UTF-8 character.
fn strip_value(raw: &str) -> String {
    raw[1..raw.len() - 2].to_string()
}
