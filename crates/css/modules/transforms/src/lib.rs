//! CSS Transforms Module Level 1 — transform functions and origins used by keyframes.
//! Spec: <https://www.w3.org/TR/css-transforms-1/>

#![forbid(unsafe_code)]

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use core::mem::discriminant;
use css_values_units::{Angle, Percentage};

/// The reference point a rotation or scale is applied around.
///
/// Leading/trailing map to left/right (left-to-right writing).
///
/// Spec: <https://www.w3.org/TR/css-transforms-1/#transform-origin-property>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorPoint {
    #[default]
    Center,
    Top,
    Bottom,
    Leading,
    Trailing,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
    /// Offsets measured from the top-left corner of the box.
    Custom { x: Percentage, y: Percentage },
}

impl AnchorPoint {
    /// The `transform-origin` value for this anchor.
    pub fn value(self) -> String {
        match self {
            Self::Center => "center".to_owned(),
            Self::Top => "top".to_owned(),
            Self::Bottom => "bottom".to_owned(),
            Self::Leading => "left".to_owned(),
            Self::Trailing => "right".to_owned(),
            Self::TopLeading => "top left".to_owned(),
            Self::TopTrailing => "top right".to_owned(),
            Self::BottomLeading => "bottom left".to_owned(),
            Self::BottomTrailing => "bottom right".to_owned(),
            Self::Custom { x, y } => format!("{x} {y}"),
        }
    }
}

impl Display for AnchorPoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.value())
    }
}

/// A single CSS transform function.
///
/// Spec: <https://www.w3.org/TR/css-transforms-1/#transform-functions>
#[derive(Clone, Copy, Debug)]
pub enum TransformFunction {
    /// `scale(factor)`; the factor is passed through unvalidated.
    Scale(f64),
    /// `scale(x, y)`
    ScaleXy(f64, f64),
    /// `rotate(angle)`
    Rotate(Angle),
    /// `translate(x, y)` with percentages of the box size.
    Translate(Percentage, Percentage),
}

impl PartialEq for TransformFunction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scale(lhs), Self::Scale(rhs)) => lhs.to_bits() == rhs.to_bits(),
            (Self::ScaleXy(lhs_x, lhs_y), Self::ScaleXy(rhs_x, rhs_y)) => {
                lhs_x.to_bits() == rhs_x.to_bits() && lhs_y.to_bits() == rhs_y.to_bits()
            }
            (Self::Rotate(lhs), Self::Rotate(rhs)) => lhs == rhs,
            (Self::Translate(lhs_x, lhs_y), Self::Translate(rhs_x, rhs_y)) => {
                lhs_x == rhs_x && lhs_y == rhs_y
            }
            _ => false,
        }
    }
}

impl Eq for TransformFunction {}

impl Hash for TransformFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Self::Scale(factor) => factor.to_bits().hash(state),
            Self::ScaleXy(x_factor, y_factor) => {
                x_factor.to_bits().hash(state);
                y_factor.to_bits().hash(state);
            }
            Self::Rotate(angle) => angle.hash(state),
            Self::Translate(x_offset, y_offset) => {
                x_offset.hash(state);
                y_offset.hash(state);
            }
        }
    }
}

impl Display for TransformFunction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Scale(factor) => write!(formatter, "scale({factor})"),
            Self::ScaleXy(x_factor, y_factor) => write!(formatter, "scale({x_factor}, {y_factor})"),
            Self::Rotate(angle) => write!(formatter, "rotate({angle})"),
            Self::Translate(x_offset, y_offset) => {
                write!(formatter, "translate({x_offset}, {y_offset})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_values() {
        assert_eq!(AnchorPoint::default().value(), "center");
        assert_eq!(AnchorPoint::Leading.value(), "left");
        assert_eq!(AnchorPoint::BottomTrailing.value(), "bottom right");
        let custom = AnchorPoint::Custom {
            x: Percentage::new(30.0),
            y: Percentage::new(70.0),
        };
        assert_eq!(custom.to_string(), "30% 70%");
    }

    #[test]
    fn transform_expressions() {
        assert_eq!(TransformFunction::Scale(1.5).to_string(), "scale(1.5)");
        assert_eq!(TransformFunction::Scale(-2.0).to_string(), "scale(-2)");
        assert_eq!(TransformFunction::ScaleXy(1.0, 0.5).to_string(), "scale(1, 0.5)");
        assert_eq!(
            TransformFunction::Rotate(Angle::Degrees(90.0)).to_string(),
            "rotate(90deg)"
        );
        assert_eq!(
            TransformFunction::Translate(Percentage::new(-50.0), Percentage::ZERO).to_string(),
            "translate(-50%, 0%)"
        );
    }

    #[test]
    fn structural_equality() {
        assert_eq!(TransformFunction::Scale(2.0), TransformFunction::Scale(2.0));
        assert_ne!(
            TransformFunction::Scale(2.0),
            TransformFunction::ScaleXy(2.0, 2.0)
        );
    }
}
