//! Opacity fades

use crate::registry::FrameContext;
use crate::style::{props, StyleSnapshot};

pub fn fade_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    StyleSnapshot::new().with(props::OPACITY, ctx.ramp(0.0, 1.0))
}

pub fn fade_out(ctx: &FrameContext<'_>) -> StyleSnapshot {
    StyleSnapshot::new().with(props::OPACITY, ctx.ramp(1.0, 0.0))
}
