//! Parse failure reporting
//!
//! All fatal failures share a single error type carrying a human-readable
//! message and a [`Marker`] pointing at the offending span in the original
//! file. Lexical errors, structural grammar errors, and value-decode errors
//! (bad integer, bad color code) are deliberately the same kind: the first
//! one raised aborts the whole conversion and no partial record is returned.

use std::fmt;

use crate::gib::location::Marker;

/// A fatal GIB parse failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GibError {
    message: String,
    marker: Marker,
}

impl GibError {
    pub fn new(message: impl Into<String>, marker: Marker) -> Self {
        Self {
            message: message.into(),
            marker,
        }
    }

    /// Wrap an I/O failure from the path-based entry point
    pub fn io(err: &std::io::Error) -> Self {
        Self::new(format!("Failed to read input: {}", err), Marker::start_of_file())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl fmt::Display for GibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.marker)
    }
}

impl std::error::Error for GibError {}
