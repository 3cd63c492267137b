use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};
use css_values_units::Percentage;

/// Errors raised while building frames and timelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// A frame position outside `0%..=100%` (or NaN).
    InvalidFramePosition(Percentage),
    /// A frame pushed before an earlier position on a strict timeline.
    FrameOutOfOrder {
        previous: Percentage,
        position: Percentage,
    },
    /// A second frame at an existing position on a strict timeline.
    DuplicateFramePosition(Percentage),
    /// A timeline order name that is not `strict`, `sorted` or `unchecked`.
    UnknownTimelineOrder(String),
}

impl Display for AnimationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidFramePosition(position) => write!(
                formatter,
                "animation frame position must be between 0% and 100%, got {position}"
            ),
            Self::FrameOutOfOrder { previous, position } => write!(
                formatter,
                "animation frame at {position} comes after a frame at {previous}"
            ),
            Self::DuplicateFramePosition(position) => {
                write!(formatter, "animation already has a frame at {position}")
            }
            Self::UnknownTimelineOrder(name) => {
                write!(formatter, "unknown timeline order: {name:?}")
            }
        }
    }
}

impl Error for AnimationError {}
