//! CSS Values and Units Module Level 3 — Percentages and angles used by keyframes.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_5_percentages;
pub mod chapter_7_angles;

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::error::Error;

// Re-exports for ergonomic access from other crates.
pub use chapter_5_percentages::{Percentage, parse_keyframe_selector, parse_percentage};
pub use chapter_7_angles::{Angle, parse_angle};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnexpectedToken => write!(formatter, "unexpected token"),
        }
    }
}

impl Error for ParseError {}

/// Widen a token's `f32` to the `f64` the author wrote (`0.1` stays `0.1`).
pub(crate) fn widen(value: f32) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_keeps_written_digits() {
        assert_eq!(widen(0.1).to_bits(), 0.1_f64.to_bits());
        assert_eq!(widen(0.33).to_bits(), 0.33_f64.to_bits());
        assert_eq!(widen(-2.5).to_bits(), (-2.5_f64).to_bits());
        assert!(widen(f32::NAN).is_nan());
    }
}
