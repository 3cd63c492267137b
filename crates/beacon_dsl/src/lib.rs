//! Beacon DSL - declarative keyframe animations for statically generated sites
//!
//! This crate is the entry point for page authors. It re-exports the keyframe
//! model from `css_animations` and adds the [`keyframes!`] macro for building
//! a whole timeline in one expression.

use log::debug;

pub mod macros;
pub mod prelude;

pub use css_animations::*;

/// Build a timeline named `name` with the ordering from `config`.
///
/// `build` adds frames; the first error it returns aborts the build.
///
/// # Errors
/// Returns whatever `build` returns, typically an invalid or out-of-order frame position.
pub fn build_timeline<F>(
    name: impl Into<String>,
    config: &AnimationConfig,
    build: F,
) -> Result<Timeline, AnimationError>
where
    F: FnOnce(&mut Timeline) -> Result<(), AnimationError>,
{
    let mut timeline = Timeline::from_config(name, config);
    build(&mut timeline)?;
    debug!(
        target: "beacon_dsl",
        "built timeline {:?} with {} frames ({} order)",
        timeline.name(),
        timeline.len(),
        timeline.order()
    );
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_errors_propagate() {
        let result = build_timeline("broken", &AnimationConfig::default(), |timeline| {
            timeline.frame(101, |_| {})?;
            Ok(())
        });
        assert!(matches!(
            result,
            Err(AnimationError::InvalidFramePosition(_))
        ));
    }

    #[test]
    fn build_uses_config_order() {
        let config = AnimationConfig::new(TimelineOrder::Unchecked);
        let result = build_timeline("loose", &config, |timeline| {
            timeline.frame(90, |_| {})?.frame(10, |_| {})?;
            Ok(())
        });
        assert_eq!(result.map(|timeline| timeline.len()), Ok(2));
    }
}
