//! Frame sampling
//!
//! The adapter a renderer calls once per frame and element. It holds no
//! state between calls; a [`FrameSampler`] only remembers the frame rate.

use std::ops::Range;

use serde::Serialize;

use crate::config::AnimationConfig;
use crate::style::StyleSnapshot;
use crate::timeline::{evaluate_config, stagger, DualAnimation};
use crate::DEFAULT_FPS;

/// What an element is animated with
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Animated {
    Single(AnimationConfig),
    Dual(DualAnimation),
}

impl Animated {
    /// Copy for list item `index`, with the entry delayed by `index * step`
    pub fn staggered(&self, index: usize, step: u32) -> Self {
        match self {
            Animated::Single(config) => Animated::Single(stagger(config, index, step)),
            Animated::Dual(dual) => Animated::Dual(dual.staggered(index, step)),
        }
    }
}

impl From<AnimationConfig> for Animated {
    fn from(config: AnimationConfig) -> Self {
        Animated::Single(config)
    }
}

impl From<DualAnimation> for Animated {
    fn from(dual: DualAnimation) -> Self {
        Animated::Dual(dual)
    }
}

/// Styles for `animated` at `frame`; `fps` defaults to 30
pub fn sample(frame: u32, fps: Option<f64>, animated: &Animated) -> StyleSnapshot {
    let fps = resolve_fps(fps);
    let frame = f64::from(frame);
    match animated {
        Animated::Single(config) => evaluate_config(config, frame, fps),
        Animated::Dual(dual) => dual.evaluate(frame, fps),
    }
}

fn resolve_fps(fps: Option<f64>) -> f64 {
    match fps {
        Some(fps) if fps.is_finite() && fps > 0.0 => fps,
        Some(fps) => {
            tracing::warn!(fps, "invalid frame rate, using {DEFAULT_FPS}");
            DEFAULT_FPS
        }
        None => DEFAULT_FPS,
    }
}

/// Samples animations at a fixed frame rate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSampler {
    fps: f64,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl FrameSampler {
    pub fn new(fps: f64) -> Self {
        Self {
            fps: resolve_fps(Some(fps)),
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn styles_at(&self, frame: u32, animated: &Animated) -> StyleSnapshot {
        sample(frame, Some(self.fps), animated)
    }

    /// Styles for item `index` of a staggered list
    pub fn styles_for_item(
        &self,
        frame: u32,
        animated: &Animated,
        index: usize,
        step: u32,
    ) -> StyleSnapshot {
        self.styles_at(frame, &animated.staggered(index, step))
    }

    /// One snapshot per frame in `frames`
    pub fn sample_range(&self, frames: Range<u32>, animated: &Animated) -> Vec<StyleSnapshot> {
        frames.map(|frame| self.styles_at(frame, animated)).collect()
    }
}
