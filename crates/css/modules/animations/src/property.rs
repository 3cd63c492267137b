use core::fmt::{Display, Formatter, Result as FmtResult};

/// CSS properties a keyframe can animate.
///
/// Spec: <https://www.w3.org/TR/css-animations-1/#keyframes>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    Color,
    BackgroundColor,
    BorderColor,
    Transform,
    TransformOrigin,
    Opacity,
    Width,
    Height,
    FontSize,
    Filter,
    /// Any other property name, written verbatim.
    Custom(String),
}

impl AnimatableProperty {
    /// The property name as it appears in a declaration.
    pub fn css_name(&self) -> &str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::BorderColor => "border-color",
            Self::Transform => "transform",
            Self::TransformOrigin => "transform-origin",
            Self::Opacity => "opacity",
            Self::Width => "width",
            Self::Height => "height",
            Self::FontSize => "font-size",
            Self::Filter => "filter",
            Self::Custom(name) => name,
        }
    }
}

impl Display for AnimatableProperty {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.css_name())
    }
}

/// Which color of an element a frame changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorArea {
    /// Text color.
    #[default]
    Foreground,
    Background,
}

impl ColorArea {
    pub const fn property(self) -> AnimatableProperty {
        match self {
            Self::Foreground => AnimatableProperty::Color,
            Self::Background => AnimatableProperty::BackgroundColor,
        }
    }
}
