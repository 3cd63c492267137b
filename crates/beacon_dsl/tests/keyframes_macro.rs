//! Timeline construction through the `keyframes!` macro

use beacon_dsl::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn declarations(frame: &Frame) -> Vec<String> {
        frame.styles().iter().map(ToString::to_string).collect()
    }

    /// Tests a strict timeline built in order
    ///
    /// # Panics
    /// Panics if the timeline fails to build
    #[test]
    fn test_pulse_timeline() {
        init_logging();
        let config = AnimationConfig::default();
        let pulse = keyframes!("pulse", &config => {
            0 => |frame| frame.scale(1.0),
            50 => |frame| frame.scale(1.2).color(Color::RED),
            100 => |frame| frame.scale(1.0),
        })
        .unwrap();

        assert_eq!(pulse.name(), "pulse");
        assert_eq!(pulse.len(), 3);
        assert_eq!(
            declarations(&pulse.frames()[1]),
            ["transform: scale(1.2)", "color: red"]
        );
    }

    /// Tests that the first bad frame aborts the build
    ///
    /// # Panics
    /// Panics if an out-of-order frame is accepted
    #[test]
    fn test_out_of_order_frame_aborts() {
        init_logging();
        let config = AnimationConfig::new(TimelineOrder::Strict);
        let result = keyframes!("spin", &config => {
            100 => |frame| frame.rotate(Angle::Turns(1.0)),
            0 => |frame| frame.rotate(Angle::Turns(0.0)),
        });

        assert_eq!(
            result,
            Err(AnimationError::FrameOutOfOrder {
                previous: Percentage::HUNDRED,
                position: Percentage::ZERO,
            })
        );
    }

    /// Tests sorted timelines reorder frames written out of order
    ///
    /// # Panics
    /// Panics if the timeline fails to build or is not sorted
    #[test]
    fn test_sorted_config_reorders() {
        let config = AnimationConfig::new(TimelineOrder::Sorted);
        let spin = keyframes!("spin", &config => {
            100 => |frame| frame.rotate_around(Angle::Turns(1.0), AnchorPoint::BottomTrailing),
            0 => |frame| frame.rotate_around(Angle::Turns(0.0), AnchorPoint::BottomTrailing),
        })
        .unwrap();

        assert_eq!(spin.validate(), Ok(()));
        assert_eq!(
            declarations(&spin.frames()[0]),
            ["transform-origin: bottom right", "transform: rotate(0turn)"]
        );
    }

    /// Tests invalid positions surface as typed errors
    ///
    /// # Panics
    /// Panics if an out-of-range position is accepted
    #[test]
    fn test_invalid_position_is_typed_error() {
        let config = AnimationConfig::default();
        let result = keyframes!("fade", &config => {
            -10 => |frame| frame.custom(AnimatableProperty::Opacity, "0"),
        });

        assert_eq!(
            result,
            Err(AnimationError::InvalidFramePosition(Percentage::new(-10.0)))
        );
    }

    /// Tests the environment-configured form builds a timeline
    ///
    /// # Panics
    /// Panics if the timeline fails to build
    #[test]
    fn test_environment_form() {
        let fade = keyframes!("fade" => {
            0 => |frame| frame.custom(AnimatableProperty::Opacity, "0"),
            100 => |frame| frame.custom(AnimatableProperty::Opacity, "1"),
        })
        .unwrap();

        assert_eq!(fade.len(), 2);
    }
}
