//! SGF text rendering
//!
//! A minimal serializer for the property assertions this converter emits:
//! one game tree, root properties in the first node, and a new node per move
//! group (every `MN` opens one). This stands in for a full SGF library on
//! the consumer side of the projection contract; it makes no attempt to
//! cover SGF beyond what [`project`](crate::sgf::projection::project)
//! produces.

use std::fmt::Write;

use crate::sgf::properties::{SgfMove, SgfPoint, SgfProperty};

/// Render a property list as a single SGF game tree
pub fn write_tree(properties: &[SgfProperty]) -> String {
    let mut out = String::from("(;");

    for property in properties {
        if matches!(property, SgfProperty::MN(_)) {
            out.push(';');
        }
        render(property, &mut out);
    }

    out.push(')');
    out
}

fn render(property: &SgfProperty, out: &mut String) {
    match property {
        SgfProperty::FF(v) => render_simple(out, "FF", v),
        SgfProperty::GM(v) => render_simple(out, "GM", v),
        SgfProperty::SZ(v) => render_simple(out, "SZ", v),
        SgfProperty::CA(v) => render_text(out, "CA", v),
        SgfProperty::AP(name, version) => render_text(out, "AP", &format!("{}:{}", name, version)),
        SgfProperty::PC(v) => render_text(out, "PC", v),
        SgfProperty::PB(v) => render_text(out, "PB", v),
        SgfProperty::PW(v) => render_text(out, "PW", v),
        SgfProperty::KM(v) => render_simple(out, "KM", v),
        SgfProperty::RE(v) => render_text(out, "RE", &v.to_string()),
        SgfProperty::TM(v) => render_simple(out, "TM", v),
        SgfProperty::OT(v) => render_text(out, "OT", v),
        SgfProperty::HA(v) => render_simple(out, "HA", v),
        SgfProperty::AB(points) => {
            out.push_str("AB");
            for point in points {
                out.push('[');
                render_point(out, *point);
                out.push(']');
            }
        }
        SgfProperty::MN(v) => render_simple(out, "MN", v),
        SgfProperty::B(mv) => render_move(out, "B", *mv),
        SgfProperty::W(mv) => render_move(out, "W", *mv),
    }
}

fn render_simple(out: &mut String, tag: &str, value: &impl std::fmt::Display) {
    // Numeric values never contain characters needing escapes
    let _ = write!(out, "{}[{}]", tag, value);
}

fn render_text(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push('[');
    for ch in value.chars() {
        if ch == ']' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(']');
}

fn render_move(out: &mut String, tag: &str, mv: SgfMove) {
    out.push_str(tag);
    out.push('[');
    if let SgfMove::Stone(point) = mv {
        render_point(out, point);
    }
    out.push(']');
}

/// 1-based coordinates map to letters, `1` = `a`. A coordinate outside the
/// letter range can only come from a malformed record; it renders as `?`
/// rather than panicking.
fn render_point(out: &mut String, point: SgfPoint) {
    out.push(coord_letter(point.x));
    out.push(coord_letter(point.y));
}

fn coord_letter(value: i32) -> char {
    if (1..=26).contains(&value) {
        (b'a' + (value as u8 - 1)) as char
    } else {
        '?'
    }
}
