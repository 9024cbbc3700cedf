//! Scale and zoom
//!
//! All scale animations honor `transformProperty` (`scale`, `scaleX` or
//! `scaleY`) and declare a centered `transformOrigin` unless `origin`
//! overrides it.

use super::CENTER;
use crate::easing::Easing;
use crate::registry::FrameContext;
use crate::style::{props, StyleSnapshot, TransformFn, TransformList};

/// Scale transform along the axis picked by `transformProperty`
pub(crate) fn scale_transform(ctx: &FrameContext<'_>, value: f64) -> TransformFn {
    match ctx.custom().text("transformProperty", "scale") {
        "scaleX" => TransformFn::ScaleX(value),
        "scaleY" => TransformFn::ScaleY(value),
        _ => TransformFn::Scale(value),
    }
}

fn scaled(ctx: &FrameContext<'_>, value: f64, opacity: f64) -> StyleSnapshot {
    StyleSnapshot::new()
        .with(props::OPACITY, opacity)
        .with(
            props::TRANSFORM,
            TransformList::new().then(scale_transform(ctx, value)),
        )
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

pub fn scale_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 0.0);
    let to = ctx.number("endScale", 1.0);
    scaled(ctx, ctx.ramp(from, to), ctx.fade_in(0.5))
}

pub fn scale_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 1.0);
    let to = ctx.number("endScale", 0.0);
    scaled(ctx, ctx.ramp(from, to), ctx.fade_out(0.5))
}

pub fn zoom_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 1.5);
    let to = ctx.number("endScale", 1.0);
    scaled(ctx, ctx.ramp(from, to), ctx.fade_in(0.3))
}

pub fn zoom_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 1.0);
    let to = ctx.number("endScale", 1.5);
    scaled(ctx, ctx.ramp(from, to), ctx.fade_out(0.3))
}

/// Always bounces, whatever easing the config carries
pub fn bounce_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 0.0);
    let to = ctx.number("endScale", 1.0);
    scaled(ctx, ctx.ramp_with(Easing::Bounce, from, to), ctx.fade_in(0.3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationConfig, AnimationType};

    fn linear(kind: AnimationType) -> AnimationConfig {
        AnimationConfig::new(kind).with_easing(Easing::Linear)
    }

    #[test]
    fn test_scale_in_endpoints() {
        let config = linear(AnimationType::ScaleIn);
        let start = scale_in(&FrameContext::new(0.0, 0.0, 30.0, &config, 30.0));
        let end = scale_in(&FrameContext::new(30.0, 0.0, 30.0, &config, 30.0));

        assert_eq!(start.transform(), Some("scale(0)"));
        assert_eq!(start.opacity(), Some(0.0));
        assert_eq!(start.text(props::TRANSFORM_ORIGIN), Some("center center"));
        assert_eq!(end.transform(), Some("scale(1)"));
        assert_eq!(end.opacity(), Some(1.0));
    }

    #[test]
    fn test_transform_property_and_origin_overrides() {
        let config = linear(AnimationType::ScaleIn)
            .with_custom("transformProperty", "scaleX")
            .with_custom("origin", "left center");
        let snapshot = scale_in(&FrameContext::new(15.0, 0.0, 30.0, &config, 30.0));

        assert_eq!(snapshot.transform(), Some("scaleX(0.5)"));
        assert_eq!(snapshot.text(props::TRANSFORM_ORIGIN), Some("left center"));
    }

    #[test]
    fn test_zoom_out_fades_over_last_portion() {
        let config = linear(AnimationType::ZoomOut);
        let at = |frame| zoom_out(&FrameContext::new(frame, 0.0, 30.0, &config, 30.0));

        assert_eq!(at(20.0).opacity(), Some(1.0));
        assert_eq!(at(30.0).opacity(), Some(0.0));
        assert_eq!(at(30.0).transform(), Some("scale(1.5)"));
    }

    #[test]
    fn test_bounce_in_ignores_config_easing() {
        let config = linear(AnimationType::BounceIn);
        let snapshot = bounce_in(&FrameContext::new(10.0, 0.0, 30.0, &config, 30.0));
        let expected = Easing::Bounce.apply(1.0 / 3.0);
        let scale = TransformList::new().then(TransformFn::Scale(expected)).to_string();
        assert_eq!(snapshot.transform(), Some(scale.as_str()));
    }
}
