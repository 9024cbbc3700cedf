//! Slides along one axis
//!
//! Entries travel from `distance` px off their resting place back to 0 and
//! are fully visible halfway through; exits travel out and fade over the
//! second half.

use crate::registry::FrameContext;
use crate::style::{props, StyleSnapshot, TransformFn, TransformList};

const DEFAULT_DISTANCE: f64 = 100.0;
const FADE_FRACTION: f64 = 0.5;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn translate(axis: Axis, offset: f64) -> TransformList {
    let function = match axis {
        Axis::X => TransformFn::TranslateX(offset),
        Axis::Y => TransformFn::TranslateY(offset),
    };
    TransformList::new().then(function)
}

/// `sign` is the side the element enters from: -1 left/top, +1 right/bottom
fn slide_in(ctx: &FrameContext<'_>, axis: Axis, sign: f64) -> StyleSnapshot {
    let distance = ctx.number("distance", DEFAULT_DISTANCE);
    let offset = ctx.ramp(sign * distance, 0.0);

    StyleSnapshot::new()
        .with(props::OPACITY, ctx.fade_in(FADE_FRACTION))
        .with(props::TRANSFORM, translate(axis, offset))
}

/// `sign` is the side the element leaves toward
fn slide_out(ctx: &FrameContext<'_>, axis: Axis, sign: f64) -> StyleSnapshot {
    let distance = ctx.number("distance", DEFAULT_DISTANCE);
    let offset = ctx.ramp(0.0, sign * distance);

    StyleSnapshot::new()
        .with(props::OPACITY, ctx.fade_out(FADE_FRACTION))
        .with(props::TRANSFORM, translate(axis, offset))
}

pub fn slide_in_left(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_in(ctx, Axis::X, -1.0)
}

pub fn slide_in_right(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_in(ctx, Axis::X, 1.0)
}

pub fn slide_in_top(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_in(ctx, Axis::Y, -1.0)
}

pub fn slide_in_bottom(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_in(ctx, Axis::Y, 1.0)
}

pub fn slide_out_left(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_out(ctx, Axis::X, -1.0)
}

pub fn slide_out_right(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_out(ctx, Axis::X, 1.0)
}

pub fn slide_out_top(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_out(ctx, Axis::Y, -1.0)
}

pub fn slide_out_bottom(ctx: &FrameContext<'_>) -> StyleSnapshot {
    slide_out(ctx, Axis::Y, 1.0)
}
