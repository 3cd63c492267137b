//! Builds a few keyframe timelines and logs their declarations.
//!
//! Run with `RUST_LOG=info` (and optionally `BEACON_TIMELINE_ORDER=sorted`).

use anyhow::{Context as _, Result};
use beacon_dsl::prelude::*;
use log::info;

fn describe(timeline: &Timeline) {
    info!(
        "@{} ({} order, {} frames)",
        timeline.name(),
        timeline.order(),
        timeline.len()
    );
    for frame in timeline {
        let declarations: Vec<String> = frame.styles().iter().map(ToString::to_string).collect();
        info!("  {} {{ {} }}", frame.position(), declarations.join("; "));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let pulse = keyframes!("pulse" => {
        0 => |frame| frame.scale(1.0).color(Color::BLACK),
        50 => |frame| frame.scale(1.2).color(Color::parse("#ff6600").unwrap_or(Color::ORANGE)),
        100 => |frame| frame.scale(1.0).color(Color::BLACK),
    })
    .context("building pulse")?;
    describe(&pulse);

    let spin = keyframes!("spin" => {
        0 => |frame| frame.rotate_around(Angle::Degrees(0.0), AnchorPoint::TopLeading),
        100 => |frame| frame.rotate_around(Angle::Degrees(360.0), AnchorPoint::TopLeading),
    })
    .context("building spin")?;
    describe(&spin);

    let glow = Color::parse("rgba(255, 200, 0, 0.5)").context("parsing glow color")?;
    let mut highlight = Frame::at(50).context("building highlight frame")?;
    highlight
        .color_for(ColorArea::Background, glow)
        .custom(AnimatableProperty::Custom("--glow-radius".to_owned()), "12px");
    let mut flash = Timeline::from_config("flash", &AnimationConfig::from_env());
    flash.push(Frame::at(0).context("building flash start")?)?;
    flash.push(highlight)?;
    describe(&flash);

    Ok(())
}
