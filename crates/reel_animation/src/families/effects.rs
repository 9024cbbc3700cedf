//! Blur, glitch, camera moves and color grading

use std::f64::consts::PI;

use super::CENTER;
use crate::registry::FrameContext;
use crate::style::{props, FilterFn, FilterList, StyleSnapshot, TransformFn, TransformList};

/// Hue swing of the glitch at full intensity, in degrees
const GLITCH_HUE: f64 = 90.0;

/// Digital glitch that calms down over the window.
///
/// Noise is a mix of sinusoids of `frame`, so it is repeatable for any
/// frame. Every displacement is scaled by `1 - p`, leaving the final frame
/// clean.
pub fn glitch(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let intensity = ctx.number("intensity", 10.0);
    let decay = 1.0 - ctx.progress();
    let f = ctx.frame;

    let x = intensity * decay * (f * 2.3).sin() * (f * 0.7).cos();
    let y = intensity * 0.5 * decay * (f * 3.1).sin();
    let skew = intensity * 0.5 * decay * (f * 1.7).cos() * (f * 5.3).sin();
    let hue = GLITCH_HUE * decay * (f * 0.9).sin();
    let flicker = 0.3 * decay * (f * 7.9).sin().max(0.0);

    StyleSnapshot::new()
        .with(props::OPACITY, 1.0 - flicker)
        .with(
            props::TRANSFORM,
            TransformList::new()
                .then(TransformFn::Translate(x, y))
                .then(TransformFn::SkewX(skew)),
        )
        .with(
            props::FILTER,
            FilterList::new().then(FilterFn::HueRotate(hue)),
        )
}

pub fn blur_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let blur = ctx.ramp(ctx.number("startBlur", 20.0), 0.0);
    StyleSnapshot::new()
        .with(props::OPACITY, ctx.fade_in(0.5))
        .with(props::FILTER, FilterList::new().then(FilterFn::Blur(blur)))
}

pub fn blur_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let blur = ctx.ramp(0.0, ctx.number("endBlur", 20.0));
    StyleSnapshot::new()
        .with(props::OPACITY, ctx.fade_out(0.5))
        .with(props::FILTER, FilterList::new().then(FilterFn::Blur(blur)))
}

/// Rack focus: the element sharpens while settling back from a slight zoom
pub fn depth_of_field(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let blur = ctx.ramp(ctx.number("startBlur", 8.0), ctx.number("focusBlur", 0.0));
    let scale = ctx.ramp(ctx.number("startScale", 1.1), 1.0);

    StyleSnapshot::new()
        .with(props::FILTER, FilterList::new().then(FilterFn::Blur(blur)))
        .with(
            props::TRANSFORM,
            TransformList::new().then(TransformFn::Scale(scale)),
        )
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

/// Slow push-in with a pan
pub fn ken_burns(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let scale = ctx.ramp(ctx.number("startScale", 1.0), ctx.number("endScale", 1.2));
    let x = ctx.ramp(0.0, ctx.number("panX", -40.0));
    let y = ctx.ramp(0.0, ctx.number("panY", -20.0));

    StyleSnapshot::new()
        .with(
            props::TRANSFORM,
            TransformList::new()
                .then(TransformFn::Scale(scale))
                .then(TransformFn::Translate(x, y)),
        )
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

/// Breathing scale while the window is active; at rest outside it
pub fn pulse(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let amplitude = ctx.number("amplitude", 0.05);
    let period = match ctx.number("period", 30.0) {
        p if p > 0.0 => p,
        _ => 30.0,
    };

    let scale = if ctx.window.contains(ctx.frame) {
        1.0 + amplitude * (2.0 * PI * ctx.elapsed() / period).sin()
    } else {
        1.0
    };

    StyleSnapshot::new()
        .with(
            props::TRANSFORM,
            TransformList::new().then(TransformFn::Scale(scale)),
        )
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

/// Desaturated, dim image coming up to full color
pub fn color_reveal(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let grayscale = ctx.ramp(ctx.number("grayscale", 100.0), 0.0);
    let brightness = ctx.ramp(ctx.number("startBrightness", 0.6), 1.0);

    StyleSnapshot::new().with(
        props::FILTER,
        FilterList::new()
            .then(FilterFn::Grayscale(grayscale))
            .then(FilterFn::Brightness(brightness)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationConfig, AnimationType};
    use crate::easing::Easing;

    fn linear(kind: AnimationType) -> AnimationConfig {
        AnimationConfig::new(kind).with_easing(Easing::Linear)
    }

    #[test]
    fn test_glitch_is_clean_on_last_frame() {
        let config = AnimationConfig::new(AnimationType::Glitch);
        let end = glitch(&FrameContext::new(30.0, 0.0, 30.0, &config, 30.0));

        assert_eq!(end.opacity(), Some(1.0));
        assert_eq!(end.transform(), Some("translate(0px, 0px) skewX(0deg)"));
        assert_eq!(end.filter(), Some("hue-rotate(0deg)"));
    }

    #[test]
    fn test_glitch_is_noisy_and_repeatable() {
        let config = AnimationConfig::new(AnimationType::Glitch).with_custom("intensity", 20.0);
        let at = |frame| glitch(&FrameContext::new(frame, 0.0, 30.0, &config, 30.0));

        let noisy = (1..10).any(|frame| at(f64::from(frame)).transform() != at(30.0).transform());
        assert!(noisy);
        for frame in [3.0, 7.0, 12.0] {
            assert_eq!(at(frame), at(frame));
            let opacity = at(frame).opacity().unwrap();
            assert!((0.7..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn test_blur_in_and_out() {
        let config = linear(AnimationType::BlurIn);
        let start = blur_in(&FrameContext::new(0.0, 0.0, 30.0, &config, 30.0));
        assert_eq!(start.filter(), Some("blur(20px)"));
        assert_eq!(start.opacity(), Some(0.0));

        let config = linear(AnimationType::BlurOut).with_custom("endBlur", 6.0);
        let mid = blur_out(&FrameContext::new(15.0, 0.0, 30.0, &config, 30.0));
        assert_eq!(mid.filter(), Some("blur(3px)"));
        assert_eq!(mid.opacity(), Some(1.0));
    }

    #[test]
    fn test_depth_of_field_focuses() {
        let config = linear(AnimationType::DepthOfField);
        let start = depth_of_field(&FrameContext::new(0.0, 0.0, 30.0, &config, 30.0));
        let end = depth_of_field(&FrameContext::new(30.0, 0.0, 30.0, &config, 30.0));

        assert_eq!(start.filter(), Some("blur(8px)"));
        assert_eq!(start.transform(), Some("scale(1.1)"));
        assert_eq!(end.filter(), Some("blur(0px)"));
        assert_eq!(end.transform(), Some("scale(1)"));
    }

    #[test]
    fn test_ken_burns_end_state() {
        let config = linear(AnimationType::KenBurns);
        let end = ken_burns(&FrameContext::new(90.0, 0.0, 90.0, &config, 30.0));
        assert_eq!(end.transform(), Some("scale(1.2) translate(-40px, -20px)"));
        assert_eq!(end.text(props::TRANSFORM_ORIGIN), Some("center center"));
    }

    #[test]
    fn test_pulse_rests_outside_window() {
        let config = AnimationConfig::new(AnimationType::Pulse).with_custom("amplitude", 0.1);
        let at = |frame| pulse(&FrameContext::new(frame, 10.0, 70.0, &config, 30.0));

        assert_eq!(at(5.0).transform(), Some("scale(1)"));
        assert_eq!(at(80.0).transform(), Some("scale(1)"));
        // Quarter period after the start: peak
        assert_eq!(at(17.5).transform(), Some("scale(1.1)"));
        assert_eq!(at(32.5).transform(), Some("scale(0.9)"));
    }

    #[test]
    fn test_color_reveal() {
        let config = linear(AnimationType::ColorReveal);
        let start = color_reveal(&FrameContext::new(0.0, 0.0, 30.0, &config, 30.0));
        let end = color_reveal(&FrameContext::new(30.0, 0.0, 30.0, &config, 30.0));

        assert_eq!(start.filter(), Some("grayscale(100%) brightness(0.6)"));
        assert_eq!(end.filter(), Some("grayscale(0%) brightness(1)"));
    }
}
