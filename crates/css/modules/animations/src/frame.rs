//! A single keyframe and its fluent mutators.

use crate::error::AnimationError;
use crate::property::{AnimatableProperty, ColorArea};
use crate::style::{InlineStyle, StyleSet};
use css_color::Color;
use css_transforms::{AnchorPoint, TransformFunction};
use css_values_units::{Angle, Percentage};
use log::{debug, trace, warn};

/// Alias matching the CSS name for a frame.
pub type Keyframe = Frame;

/// A position on an animation timeline and the declarations active there.
///
/// The position is checked once, in [`Frame::new`], and is immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    position: Percentage,
    styles: StyleSet,
}

impl Frame {
    /// Create a frame at `position` holding `styles`.
    ///
    /// # Errors
    /// Returns `AnimationError::InvalidFramePosition` if `position` is not in `0%..=100%`.
    pub fn new(position: impl Into<Percentage>, styles: StyleSet) -> Result<Self, AnimationError> {
        let position = position.into();
        if !position.is_within(Percentage::ZERO, Percentage::HUNDRED) {
            warn!(target: "css_animations", "rejected frame position {position}");
            return Err(AnimationError::InvalidFramePosition(position));
        }
        debug!(
            target: "css_animations",
            "frame at {position} with {} initial declarations",
            styles.len()
        );
        Ok(Self { position, styles })
    }

    /// Create an empty frame at `position`.
    ///
    /// # Errors
    /// Returns `AnimationError::InvalidFramePosition` if `position` is not in `0%..=100%`.
    #[inline]
    pub fn at(position: impl Into<Percentage>) -> Result<Self, AnimationError> {
        Self::new(position, StyleSet::new())
    }

    #[inline]
    pub const fn position(&self) -> Percentage {
        self.position
    }

    #[inline]
    pub const fn styles(&self) -> &StyleSet {
        &self.styles
    }

    #[inline]
    pub fn into_styles(self) -> StyleSet {
        self.styles
    }

    /// Set the text color at this position.
    #[inline]
    pub fn color(&mut self, value: Color) -> &mut Self {
        self.color_for(ColorArea::Foreground, value)
    }

    /// Set the foreground or background color at this position.
    pub fn color_for(&mut self, area: ColorArea, value: Color) -> &mut Self {
        self.append(InlineStyle::new(area.property(), value.to_string()))
    }

    /// Scale the element by `factor`. Zero and negative factors pass through.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.append(InlineStyle::new(
            AnimatableProperty::Transform,
            TransformFunction::Scale(factor).to_string(),
        ))
    }

    /// Rotate the element around its center.
    #[inline]
    pub fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.rotate_around(angle, AnchorPoint::Center)
    }

    /// Rotate the element around `anchor`.
    ///
    /// Always appends `transform-origin` before `transform`.
    pub fn rotate_around(&mut self, angle: Angle, anchor: AnchorPoint) -> &mut Self {
        self.append(InlineStyle::new(
            AnimatableProperty::TransformOrigin,
            anchor.value(),
        ))
        .append(InlineStyle::new(
            AnimatableProperty::Transform,
            TransformFunction::Rotate(angle).to_string(),
        ))
    }

    /// Append an arbitrary declaration. The value is not checked as CSS.
    pub fn custom(&mut self, property: AnimatableProperty, value: impl Into<String>) -> &mut Self {
        self.append(InlineStyle::new(property, value))
    }

    /// Merge another set of declarations after the existing ones.
    pub(crate) fn absorb(&mut self, styles: StyleSet) {
        for style in styles {
            self.append(style);
        }
    }

    fn append(&mut self, style: InlineStyle) -> &mut Self {
        if self.styles.contains(&style) {
            trace!(
                target: "css_animations",
                "frame at {}: `{style}` already present",
                self.position
            );
        } else {
            self.styles.insert(style);
        }
        self
    }
}
