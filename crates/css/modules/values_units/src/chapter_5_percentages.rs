//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::{ParseError, widen};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use cssparser::{Parser, Token};

/// A CSS <percentage>, stored in percent units (`50.0` is `50%`).
///
/// Equality, ordering and hashing all go through [`f64::total_cmp`] so the
/// type can key ordered collections. `-0%` and `0%` compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Percentage(f64);

impl Percentage {
    /// `0%`, the start of an animation timeline.
    pub const ZERO: Self = Self(0.0);
    /// `100%`, the end of an animation timeline.
    pub const HUNDRED: Self = Self(100.0);

    /// Wrap a raw percent value. No range is enforced here.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value in percent units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the value lies inside the closed interval `[low, high]`.
    ///
    /// NaN is never within any interval.
    #[inline]
    pub fn is_within(self, low: Self, high: Self) -> bool {
        self.0 >= low.0 && self.0 <= high.0
    }

    fn canonical(self) -> f64 {
        // Fold -0.0 into 0.0 so equal values hash equally.
        if self.0 == 0.0 { 0.0 } else { self.0 }
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Percentage {}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percentage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl Hash for Percentage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl Display for Percentage {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}%", self.canonical())
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u8> for Percentage {
    fn from(value: u8) -> Self {
        Self(f64::from(value))
    }
}

impl Percentage {
    /// From a tokenizer `unit_value` (`0.33` for `33%`), dropping the noise
    /// the scale by 100 adds past the sixth decimal.
    fn from_unit_value(unit_value: f32) -> Self {
        const PRECISION: f64 = 1e6;
        Self((widen(unit_value) * 100.0 * PRECISION).round() / PRECISION)
    }
}

impl From<i32> for Percentage {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    if let Ok(token) = input.next()
        && let Token::Percentage { unit_value, .. } = token.clone()
    {
        return Ok(Percentage::from_unit_value(unit_value));
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse a keyframe selector: `from`, `to`, or a <percentage>.
///
/// Spec: <https://www.w3.org/TR/css-animations-1/#typedef-keyframe-selector>
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other input.
pub fn parse_keyframe_selector(input: &mut Parser) -> Result<Percentage, ParseError> {
    let token = match input.next() {
        Ok(token) => token.clone(),
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    match token {
        Token::Ident(name) if name.eq_ignore_ascii_case("from") => Ok(Percentage::ZERO),
        Token::Ident(name) if name.eq_ignore_ascii_case("to") => Ok(Percentage::HUNDRED),
        Token::Percentage { unit_value, .. } => Ok(Percentage::from_unit_value(unit_value)),
        _ => Err(ParseError::UnexpectedToken),
    }
}
