//! CSS Color Module Level 4 — Color values as written into animation frames.
//! Spec: <https://www.w3.org/TR/css-color-4/>

use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};
use csscolorparser::NAMED_COLORS;
use log::trace;
use std::borrow::Cow;

/// Color keywords that are not in the named-color table.
const SPECIAL_KEYWORDS: [&str; 2] = ["currentcolor", "transparent"];

/// 8-bit RGBA channels.
pub type Rgba8Tuple = (u8, u8, u8, u8);

/// Parse a CSS <color> into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()/rgba()`.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
/// Spec: <https://www.w3.org/TR/css-color-4/#legacy-color-values>
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba8Tuple> {
    let parsed: csscolorparser::Color = input.parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some((red, green, blue, alpha))
}

/// A color that can be written into a style declaration.
///
/// Keywords keep the author's spelling (`red` stays `red`); everything else
/// is held as RGBA channels and rendered as hex or `rgb()` text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A named color or special keyword, lowercase.
    Keyword(Cow<'static, str>),
    /// Explicit 8-bit channels.
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
    },
}

impl Color {
    pub const BLACK: Self = Self::Keyword(Cow::Borrowed("black"));
    pub const WHITE: Self = Self::Keyword(Cow::Borrowed("white"));
    pub const RED: Self = Self::Keyword(Cow::Borrowed("red"));
    pub const GREEN: Self = Self::Keyword(Cow::Borrowed("green"));
    pub const BLUE: Self = Self::Keyword(Cow::Borrowed("blue"));
    pub const YELLOW: Self = Self::Keyword(Cow::Borrowed("yellow"));
    pub const ORANGE: Self = Self::Keyword(Cow::Borrowed("orange"));
    pub const PURPLE: Self = Self::Keyword(Cow::Borrowed("purple"));
    pub const GRAY: Self = Self::Keyword(Cow::Borrowed("gray"));
    pub const TRANSPARENT: Self = Self::Keyword(Cow::Borrowed("transparent"));
    pub const CURRENT_COLOR: Self = Self::Keyword(Cow::Borrowed("currentcolor"));

    /// An opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// A color from 8-bit channels including alpha.
    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse CSS color text.
    ///
    /// Identifiers that name a color are kept as keywords. Hex and functional
    /// forms are normalised to channels.
    ///
    /// # Errors
    /// Returns `ColorError::Unrecognized` when the text is not a valid CSS color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if SPECIAL_KEYWORDS.contains(&lower.as_str()) || NAMED_COLORS.contains_key(lower.as_str()) {
            return Ok(Self::Keyword(Cow::Owned(lower)));
        }
        // Hex needs its `#`; csscolorparser also takes bare digits like `beef`.
        let is_hex_or_function = trimmed.starts_with('#') || trimmed.ends_with(')');
        let channels = if is_hex_or_function {
            parse_css_color(trimmed)
        } else {
            None
        };
        let Some((red, green, blue, alpha)) = channels else {
            trace!(target: "css_color", "rejected color text {trimmed:?}");
            return Err(ColorError::Unrecognized(trimmed.to_owned()));
        };
        Ok(Self::rgba(red, green, blue, alpha))
    }

    /// RGBA channels, when known. `currentcolor` has none.
    pub fn channels(&self) -> Option<Rgba8Tuple> {
        match self {
            Self::Keyword(name) => parse_css_color(name),
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Some((*red, *green, *blue, *alpha)),
        }
    }
}

impl Display for Color {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Keyword(name) => formatter.write_str(name),
            Self::Rgba {
                red,
                green,
                blue,
                alpha: u8::MAX,
            } => write!(formatter, "#{red:02x}{green:02x}{blue:02x}"),
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => {
                let opacity = (f64::from(*alpha) / 255.0 * 1000.0).round() / 1000.0;
                write!(formatter, "rgb({red} {green} {blue} / {opacity})")
            }
        }
    }
}

/// Errors raised while reading color text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The text is not a CSS color.
    Unrecognized(String),
}

impl Display for ColorError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unrecognized(text) => write!(formatter, "unrecognized CSS color: {text:?}"),
        }
    }
}

impl Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_keep_their_spelling() {
        assert_eq!(Color::RED.to_string(), "red");
        assert_eq!(Color::parse("RebeccaPurple"), Ok(Color::Keyword(Cow::Borrowed("rebeccapurple"))));
        assert_eq!(Color::parse("currentColor"), Ok(Color::CURRENT_COLOR));
    }

    #[test]
    fn keyword_constants_equal_parsed_keywords() {
        assert_eq!(Color::parse("red"), Ok(Color::RED));
    }

    #[test]
    fn hex_and_functional_forms_become_channels() {
        assert_eq!(Color::parse("#abc"), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color::parse("rgb(255, 0, 0)"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn translucent_colors_render_with_alpha() {
        assert_eq!(Color::rgba(0, 0, 0, 0).to_string(), "rgb(0 0 0 / 0)");
        assert_eq!(Color::rgba(10, 20, 30, 51).to_string(), "rgb(10 20 30 / 0.2)");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            Color::parse("not-a-color"),
            Err(ColorError::Unrecognized("not-a-color".to_owned()))
        );
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn rejects_bare_hex() {
        for text in ["facade", "decade", "beef", "abc", "ff0000"] {
            assert_eq!(
                Color::parse(text),
                Err(ColorError::Unrecognized(text.to_owned())),
                "{text} is not a CSS color without `#`"
            );
        }
        assert_eq!(Color::parse("#beef"), Ok(Color::rgba(0xbb, 0xee, 0xee, 0xff)));
    }

    #[test]
    fn special_keywords_stay_keywords() {
        assert_eq!(Color::parse(" Transparent "), Ok(Color::TRANSPARENT));
        assert_eq!(Color::parse("transparent").map(|color| color.to_string()), Ok("transparent".to_owned()));
    }

    #[test]
    fn channels_for_keywords() {
        assert_eq!(Color::WHITE.channels(), Some((255, 255, 255, 255)));
        assert_eq!(Color::CURRENT_COLOR.channels(), None);
        assert_eq!(parse_css_color("#00ff0080"), Some((0, 255, 0, 128)));
    }
}
