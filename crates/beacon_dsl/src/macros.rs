//! Macros for easier Beacon DSL usage

/// Build a [`Timeline`](crate::Timeline) from a list of positions and frame builders
///
/// Each entry is a position followed by a closure that receives the new
/// [`Frame`](crate::Frame). The whole expression evaluates to
/// `Result<Timeline, AnimationError>`. Without an explicit configuration the
/// timeline order comes from [`AnimationConfig::from_env`](crate::AnimationConfig::from_env).
///
/// # Examples
///
/// ```ignore
/// use beacon_dsl::prelude::*;
///
/// let pulse = keyframes!("pulse" => {
///     0 => |frame| frame.scale(1.0),
///     50 => |frame| frame.scale(1.2).color(Color::RED),
///     100 => |frame| frame.scale(1.0),
/// })?;
///
/// // With an explicit configuration
/// let config = AnimationConfig::new(TimelineOrder::Sorted);
/// let spin = keyframes!("spin", &config => {
///     100 => |frame| frame.rotate(Angle::Turns(1.0)),
///     0 => |frame| frame.rotate(Angle::Turns(0.0)),
/// })?;
/// ```
#[macro_export]
macro_rules! keyframes {
    // Explicit configuration
    ($name:expr, $config:expr => { $($position:expr => |$frame:ident| $body:expr),* $(,)? }) => {
        $crate::build_timeline($name, $config, |timeline| {
            $(
                timeline.frame($position, |$frame: &mut $crate::Frame| {
                    $body;
                })?;
            )*
            ::core::result::Result::Ok(())
        })
    };

    // Configuration from the environment
    ($name:expr => { $($position:expr => |$frame:ident| $body:expr),* $(,)? }) => {
        $crate::keyframes!($name, &$crate::AnimationConfig::from_env() => {
            $($position => |$frame| $body),*
        })
    };
}
