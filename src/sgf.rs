//! SGF-facing side of the conversion
//!
//! The core's output contract is the ordered property list produced by
//! [`projection`]; [`writer`] is the thin in-crate consumer that renders it
//! as SGF text.

pub mod projection;
pub mod properties;
pub mod writer;

pub use projection::{handicap_points, project};
pub use properties::{SgfMove, SgfPoint, SgfProperty};
pub use writer::write_tree;
