//! Spring-driven motion
//!
//! Progress comes from the closed-form spring stretched over the window, so
//! every animation here lands exactly on its end value at the window's last
//! frame. Setting `reverse` turns an entry into its mirrored exit: the
//! property runs from its end value back to its start value and the opacity
//! fades out instead of in.

use super::CENTER;
use crate::registry::FrameContext;
use crate::style::{props, StyleSnapshot, TransformFn, TransformList};

const FADE_FRACTION: f64 = 0.4;

fn reversed(ctx: &FrameContext<'_>) -> bool {
    ctx.flag("reverse", false)
}

/// Spring between `from` and `to`, honoring `reverse`
fn spring_between(ctx: &FrameContext<'_>, from: f64, to: f64) -> f64 {
    let p = ctx.spring_progress();
    if reversed(ctx) {
        to + (from - to) * p
    } else {
        from + (to - from) * p
    }
}

fn spring_opacity(ctx: &FrameContext<'_>) -> f64 {
    if reversed(ctx) {
        ctx.fade_out(FADE_FRACTION)
    } else {
        ctx.fade_in(FADE_FRACTION)
    }
}

fn with_transform(snapshot: StyleSnapshot, function: TransformFn) -> StyleSnapshot {
    snapshot.with(props::TRANSFORM, TransformList::new().then(function))
}

pub fn spring_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let scale = spring_between(ctx, ctx.number("startScale", 0.0), 1.0);
    let snapshot = StyleSnapshot::new().with(props::OPACITY, spring_opacity(ctx));
    with_transform(snapshot, TransformFn::Scale(scale))
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

/// Scale from 1 down to `endScale`.
///
/// Without `reverse` this is the entry spring played backwards in time, so
/// the element gathers speed as it leaves. With `reverse` the spring runs
/// forwards and decelerates into `endScale`.
pub fn spring_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let end = ctx.number("endScale", 0.0);
    let progress = if reversed(ctx) || ctx.window.is_empty() {
        ctx.spring_progress()
    } else {
        let mirrored = ctx.window.len() - ctx.elapsed();
        1.0 - ctx.spring_at(mirrored, 0.0, 1.0)
    };
    let scale = 1.0 + (end - 1.0) * progress;

    let snapshot = StyleSnapshot::new().with(props::OPACITY, ctx.fade_out(FADE_FRACTION));
    with_transform(snapshot, TransformFn::Scale(scale))
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

pub fn spring_scale(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let from = ctx.number("startScale", 0.5);
    let to = ctx.number("endScale", 1.0);
    with_transform(StyleSnapshot::new(), TransformFn::Scale(spring_between(ctx, from, to)))
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}

pub fn spring_translate_x(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let offset = spring_between(ctx, ctx.number("distance", -100.0), 0.0);
    let snapshot = StyleSnapshot::new().with(props::OPACITY, spring_opacity(ctx));
    with_transform(snapshot, TransformFn::TranslateX(offset))
}

pub fn spring_translate_y(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let offset = spring_between(ctx, ctx.number("distance", -100.0), 0.0);
    let snapshot = StyleSnapshot::new().with(props::OPACITY, spring_opacity(ctx));
    with_transform(snapshot, TransformFn::TranslateY(offset))
}

pub fn spring_rotate(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let angle = spring_between(ctx, ctx.number("startRotation", -180.0), 0.0);
    let snapshot = StyleSnapshot::new().with(props::OPACITY, spring_opacity(ctx));
    with_transform(snapshot, TransformFn::Rotate(angle))
        .with(props::TRANSFORM_ORIGIN, ctx.origin(CENTER))
}
