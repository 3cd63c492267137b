//! CSS Values & Units Level 3 — §7.1 Angle Units
//! Spec: <https://www.w3.org/TR/css-values-3/#angles>

use crate::{ParseError, widen};
use core::f64::consts::PI;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use cssparser::{Parser, Token};

/// A CSS <angle> with the unit the author wrote it in.
#[derive(Clone, Copy, Debug)]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
    Gradians(f64),
    Turns(f64),
}

impl Angle {
    /// The raw number without its unit.
    pub const fn magnitude(self) -> f64 {
        match self {
            Self::Degrees(value) | Self::Radians(value) | Self::Gradians(value) | Self::Turns(value) => {
                value
            }
        }
    }

    /// The CSS unit suffix (`deg`, `rad`, `grad`, `turn`).
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Degrees(_) => "deg",
            Self::Radians(_) => "rad",
            Self::Gradians(_) => "grad",
            Self::Turns(_) => "turn",
        }
    }

    /// Convert to degrees (§7.1: 360deg = 2πrad = 400grad = 1turn).
    pub fn to_degrees(self) -> f64 {
        match self {
            Self::Degrees(value) => value,
            Self::Radians(value) => value * 180.0 / PI,
            Self::Gradians(value) => value * 0.9,
            Self::Turns(value) => value * 360.0,
        }
    }
}

// Structural equality: `90deg` and `0.25turn` are different declarations.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.unit() == other.unit() && self.magnitude().to_bits() == other.magnitude().to_bits()
    }
}

impl Eq for Angle {}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit().hash(state);
        self.magnitude().to_bits().hash(state);
    }
}

impl Display for Angle {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}{}", self.magnitude(), self.unit())
    }
}

/// Parse a CSS <angle> (§7.1). Unitless zero is accepted as `0deg`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an `<angle>`.
pub fn parse_angle(input: &mut Parser) -> Result<Angle, ParseError> {
    let token = match input.next() {
        Ok(token) => token.clone(),
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    match token {
        Token::Dimension { value, unit, .. } => {
            let magnitude = widen(value);
            match unit.as_ref().to_ascii_lowercase().as_str() {
                "deg" => Ok(Angle::Degrees(magnitude)),
                "rad" => Ok(Angle::Radians(magnitude)),
                "grad" => Ok(Angle::Gradians(magnitude)),
                "turn" => Ok(Angle::Turns(magnitude)),
                _ => Err(ParseError::UnexpectedToken),
            }
        }
        Token::Number { value, .. } if value == 0.0 => Ok(Angle::Degrees(0.0)),
        _ => Err(ParseError::UnexpectedToken),
    }
}
