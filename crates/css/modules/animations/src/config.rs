//! Configuration for how timelines treat frame positions.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use crate::error::AnimationError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use log::warn;
use std::env;

/// Environment variable read by [`AnimationConfig::from_env`].
pub const TIMELINE_ORDER_VAR: &str = "BEACON_TIMELINE_ORDER";

/// Policy applied to frame positions as they are added to a timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimelineOrder {
    /// Positions must strictly increase in insertion order.
    #[default]
    Strict,
    /// Frames are kept sorted; a repeated position merges into the existing frame.
    Sorted,
    /// Frames are kept exactly as pushed, repeats included.
    Unchecked,
}

impl FromStr for TimelineOrder {
    type Err = AnimationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "sorted" => Ok(Self::Sorted),
            "unchecked" => Ok(Self::Unchecked),
            _ => Err(AnimationError::UnknownTimelineOrder(text.to_owned())),
        }
    }
}

impl Display for TimelineOrder {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(match self {
            Self::Strict => "strict",
            Self::Sorted => "sorted",
            Self::Unchecked => "unchecked",
        })
    }
}

/// Animation settings shared by every timeline built from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Ordering policy for new timelines
    pub timeline_order: TimelineOrder,
}

impl AnimationConfig {
    #[inline]
    #[must_use]
    pub const fn new(timeline_order: TimelineOrder) -> Self {
        Self { timeline_order }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `BEACON_TIMELINE_ORDER` (`strict`, `sorted` or `unchecked`;
    /// default: `strict`). Unknown values are logged and ignored.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeline_order = lookup(TIMELINE_ORDER_VAR)
            .and_then(|raw| match raw.parse::<TimelineOrder>() {
                Ok(order) => Some(order),
                Err(err) => {
                    warn!(target: "css_animations", "{TIMELINE_ORDER_VAR}: {err}; using default");
                    None
                }
            })
            .unwrap_or_default();
        Self { timeline_order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_names_are_case_insensitive() {
        assert_eq!(" Sorted ".parse::<TimelineOrder>(), Ok(TimelineOrder::Sorted));
        assert_eq!("UNCHECKED".parse::<TimelineOrder>(), Ok(TimelineOrder::Unchecked));
        assert_eq!(
            "loose".parse::<TimelineOrder>(),
            Err(AnimationError::UnknownTimelineOrder("loose".to_owned()))
        );
    }

    #[test]
    fn vars_select_order() {
        let config = AnimationConfig::from_vars(|key| {
            (key == TIMELINE_ORDER_VAR).then(|| "unchecked".to_owned())
        });
        assert_eq!(config.timeline_order, TimelineOrder::Unchecked);
    }

    #[test]
    fn missing_or_bad_vars_fall_back_to_strict() {
        assert_eq!(AnimationConfig::from_vars(|_| None), AnimationConfig::default());
        let config = AnimationConfig::from_vars(|_| Some("sideways".to_owned()));
        assert_eq!(config.timeline_order, TimelineOrder::Strict);
    }

    #[test]
    fn display_round_trips_names() {
        for order in [TimelineOrder::Strict, TimelineOrder::Sorted, TimelineOrder::Unchecked] {
            assert_eq!(order.to_string().parse::<TimelineOrder>(), Ok(order));
        }
    }
}
