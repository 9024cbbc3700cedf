//! 3D and perspective transforms
//!
//! Every transform here starts with `perspective(...)` (custom key
//! `perspective`, 1000px by default), declares its `transformOrigin` and
//! hides back faces.

use std::f64::consts::PI;

use super::CENTER;
use crate::registry::FrameContext;
use crate::style::{props, StyleSnapshot, TransformFn, TransformList};

const DEFAULT_PERSPECTIVE: f64 = 1000.0;

fn projected(ctx: &FrameContext<'_>) -> TransformList {
    let depth = ctx.number("perspective", DEFAULT_PERSPECTIVE);
    TransformList::new().then(TransformFn::Perspective(depth))
}

fn staged(
    ctx: &FrameContext<'_>,
    transform: TransformList,
    opacity: f64,
    origin: &'static str,
) -> StyleSnapshot {
    StyleSnapshot::new()
        .with(props::OPACITY, opacity)
        .with(props::TRANSFORM, transform)
        .with(props::TRANSFORM_ORIGIN, ctx.origin(origin))
        .with(props::BACKFACE_VISIBILITY, "hidden")
}

pub fn flip_x(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let angle = ctx.ramp(ctx.number("startRotation", 90.0), 0.0);
    let transform = projected(ctx).then(TransformFn::RotateX(angle));
    staged(ctx, transform, ctx.fade_in(0.3), CENTER)
}

pub fn flip_y(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let angle = ctx.ramp(ctx.number("startRotation", 90.0), 0.0);
    let transform = projected(ctx).then(TransformFn::RotateY(angle));
    staged(ctx, transform, ctx.fade_in(0.3), CENTER)
}

pub fn rotate_3d(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let x = ctx.ramp(ctx.number("rotateX", 45.0), 0.0);
    let y = ctx.ramp(ctx.number("rotateY", -45.0), 0.0);
    let transform = projected(ctx)
        .then(TransformFn::RotateX(x))
        .then(TransformFn::RotateY(y));
    staged(ctx, transform, ctx.fade_in(0.5), CENTER)
}

/// Damped pendulum hinged at the top edge:
/// `amplitude * (1 - p) * sin(2π * swings * p)`
pub fn swing(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let amplitude = ctx.number("amplitude", 15.0);
    let swings = ctx.number("swings", 3.0);
    let p = ctx.progress();
    let angle = amplitude * (1.0 - p) * (2.0 * PI * swings * p).sin();

    let transform = projected(ctx).then(TransformFn::RotateX(angle));
    staged(ctx, transform, ctx.fade_in(0.3), "top center")
}

pub fn zoom_perspective(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let z = ctx.ramp(ctx.number("startZ", -500.0), 0.0);
    let transform = projected(ctx).then(TransformFn::TranslateZ(z));
    staged(ctx, transform, ctx.fade_in(0.5), CENTER)
}

pub fn rotate_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let angle = ctx.ramp(ctx.number("startRotation", -90.0), 0.0);
    let transform = projected(ctx).then(TransformFn::Rotate(angle));
    staged(ctx, transform, ctx.fade_in(0.5), CENTER)
}

pub fn rotate_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let angle = ctx.ramp(0.0, ctx.number("endRotation", 90.0));
    let transform = projected(ctx).then(TransformFn::Rotate(angle));
    staged(ctx, transform, ctx.fade_out(0.5), CENTER)
}

pub fn skew_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let skew = ctx.ramp(ctx.number("startSkew", 20.0), 0.0);
    let offset = ctx.ramp(ctx.number("distance", -50.0), 0.0);
    let transform = projected(ctx)
        .then(TransformFn::TranslateX(offset))
        .then(TransformFn::SkewX(skew));
    staged(ctx, transform, ctx.fade_in(0.4), CENTER)
}
