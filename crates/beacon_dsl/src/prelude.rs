//! Everything needed to describe keyframe animations.

pub use crate::build_timeline;
pub use crate::keyframes;
pub use css_animations::{
    AnchorPoint, AnimatableProperty, AnimationConfig, AnimationError, Angle, Color, ColorArea,
    Frame, InlineStyle, Keyframe, Percentage, StyleSet, Timeline, TimelineOrder,
};
