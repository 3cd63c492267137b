//! CSS Animations Level 1 — keyframe construction.
//! Spec: <https://www.w3.org/TR/css-animations-1/#keyframes>
//!
//! A [`Frame`] pairs a timeline position with an ordered, duplicate-free set
//! of style declarations. A [`Timeline`] owns the frames of one named
//! animation and applies a [`TimelineOrder`] policy to their positions.

#![forbid(unsafe_code)]

pub mod config;
mod error;
mod frame;
mod property;
mod style;
mod timeline;

pub use config::{AnimationConfig, TimelineOrder};
pub use error::AnimationError;
pub use frame::{Frame, Keyframe};
pub use property::{AnimatableProperty, ColorArea};
pub use style::{InlineStyle, StyleSet};
pub use timeline::Timeline;

// Value types frames are built from.
pub use css_color::Color;
pub use css_transforms::AnchorPoint;
pub use css_values_units::{Angle, Percentage};
