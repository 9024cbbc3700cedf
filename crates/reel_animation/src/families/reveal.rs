//! Clip-path wipes
//!
//! A reveal uncovers the element starting at the named edge, so the hidden
//! share sits on the opposite side and shrinks from 100% to 0%. A collapse
//! runs the other way, folding the element back toward the named edge.

use crate::registry::FrameContext;
use crate::style::{clip_inset, props, StyleSnapshot};

const REVEAL_FADE: f64 = 0.3;

#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Inset hiding `hidden` percent of the element on the side opposite `edge`
fn inset_from(edge: Edge, hidden: f64) -> String {
    match edge {
        Edge::Left => clip_inset(0.0, hidden, 0.0, 0.0),
        Edge::Right => clip_inset(0.0, 0.0, 0.0, hidden),
        Edge::Top => clip_inset(0.0, 0.0, hidden, 0.0),
        Edge::Bottom => clip_inset(hidden, 0.0, 0.0, 0.0),
    }
}

fn reveal(ctx: &FrameContext<'_>, edge: Edge) -> StyleSnapshot {
    StyleSnapshot::new()
        .with(props::CLIP_PATH, inset_from(edge, ctx.ramp(100.0, 0.0)))
        .with(props::OPACITY, ctx.fade_in(REVEAL_FADE))
}

fn collapse(ctx: &FrameContext<'_>, edge: Edge) -> StyleSnapshot {
    StyleSnapshot::new().with(props::CLIP_PATH, inset_from(edge, ctx.ramp(0.0, 100.0)))
}

pub fn reveal_left(ctx: &FrameContext<'_>) -> StyleSnapshot {
    reveal(ctx, Edge::Left)
}

pub fn reveal_right(ctx: &FrameContext<'_>) -> StyleSnapshot {
    reveal(ctx, Edge::Right)
}

pub fn reveal_top(ctx: &FrameContext<'_>) -> StyleSnapshot {
    reveal(ctx, Edge::Top)
}

pub fn reveal_bottom(ctx: &FrameContext<'_>) -> StyleSnapshot {
    reveal(ctx, Edge::Bottom)
}

pub fn collapse_left(ctx: &FrameContext<'_>) -> StyleSnapshot {
    collapse(ctx, Edge::Left)
}

pub fn collapse_right(ctx: &FrameContext<'_>) -> StyleSnapshot {
    collapse(ctx, Edge::Right)
}

pub fn collapse_top(ctx: &FrameContext<'_>) -> StyleSnapshot {
    collapse(ctx, Edge::Top)
}

pub fn collapse_bottom(ctx: &FrameContext<'_>) -> StyleSnapshot {
    collapse(ctx, Edge::Bottom)
}
