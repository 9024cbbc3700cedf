//! Frame windows, entry/exit phase switching, and stagger
//!
//! A window is never stored: it is derived from a config's delay and
//! duration every time a frame is sampled.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::interpolate::{interpolate_or_start, InterpolateOptions};
use crate::registry;
use crate::style::StyleSnapshot;

/// The `[start, end]` frame span an animation runs over
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameWindow {
    pub start: f64,
    pub end: f64,
}

impl FrameWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `[delay, delay + duration]`
    pub fn from_config(config: &AnimationConfig) -> Self {
        let start = f64::from(config.delay());
        Self::new(start, start + f64::from(config.duration()))
    }

    /// `[anchor, anchor + duration]`, for exit phases pinned to a switch frame
    pub fn rebased(anchor: u32, duration: u32) -> Self {
        let start = f64::from(anchor);
        Self::new(start, start + f64::from(duration))
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    pub fn contains(&self, frame: f64) -> bool {
        frame >= self.start && frame <= self.end
    }

    /// Linear progress through the window, clamped to `[0, 1]`
    pub fn progress(&self, frame: f64) -> f64 {
        interpolate_or_start(
            frame,
            [self.start, self.end],
            [0.0, 1.0],
            InterpolateOptions::clamp(),
        )
    }

    /// Sub-window between two fractions of this window
    pub fn fraction(&self, from: f64, to: f64) -> Self {
        let len = self.len();
        Self::new(self.start + len * from, self.start + len * to)
    }
}

/// Evaluate a single config over its own `[delay, delay + duration]` window
pub fn evaluate_config(config: &AnimationConfig, frame: f64, fps: f64) -> StyleSnapshot {
    let window = FrameWindow::from_config(config);
    registry::evaluate(config.kind(), frame, window.start, window.end, config, fps)
}

/// Which half of a dual animation is producing styles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Entry,
    Exit,
}

/// Entry animation with an optional exit that takes over at `exit_frame`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DualAnimation {
    pub entry: AnimationConfig,
    pub exit: AnimationConfig,
    pub exit_frame: u32,
}

impl DualAnimation {
    pub fn new(entry: AnimationConfig, exit: AnimationConfig, exit_frame: u32) -> Self {
        Self {
            entry,
            exit,
            exit_frame,
        }
    }

    /// An entry animation that never exits
    pub fn entry_only(entry: AnimationConfig) -> Self {
        Self::new(entry, AnimationConfig::none(), 0)
    }

    /// Whether an exit phase can ever become active
    pub fn has_exit(&self) -> bool {
        !self.exit.is_none() && self.exit_frame > 0
    }

    /// Phase active at `frame`; the switch is instantaneous at `exit_frame`
    pub fn phase_at(&self, frame: f64) -> Phase {
        if self.has_exit() && frame >= f64::from(self.exit_frame) {
            Phase::Exit
        } else {
            Phase::Entry
        }
    }

    /// Window the exit runs over once active
    pub fn exit_window(&self) -> FrameWindow {
        FrameWindow::rebased(self.exit_frame, self.exit.duration())
    }

    pub fn evaluate(&self, frame: f64, fps: f64) -> StyleSnapshot {
        compose_dual(&self.entry, &self.exit, self.exit_frame, frame, fps)
    }

    /// Copy for list item `index`: the entry delay grows by `index * step`,
    /// the exit stays pinned to its switch frame
    pub fn staggered(&self, index: usize, step: u32) -> Self {
        Self {
            entry: stagger(&self.entry, index, step),
            exit: self.exit.clone(),
            exit_frame: self.exit_frame,
        }
    }
}

/// Evaluate an entry animation, handing over to `exit` at `exit_frame`.
///
/// The exit's own delay is ignored: its window starts exactly at
/// `exit_frame` and runs for its duration, without truncation. Exactly one
/// phase produces styles at any frame.
pub fn compose_dual(
    entry: &AnimationConfig,
    exit: &AnimationConfig,
    exit_frame: u32,
    frame: f64,
    fps: f64,
) -> StyleSnapshot {
    if exit.is_none() || exit_frame == 0 || frame < f64::from(exit_frame) {
        return evaluate_config(entry, frame, fps);
    }

    let rebased = exit.clone().with_delay(0);
    let window = FrameWindow::rebased(exit_frame, rebased.duration());
    registry::evaluate(rebased.kind(), frame, window.start, window.end, &rebased, fps)
}

/// Copy of `config` for list item `index`, delayed by `index * step` frames
pub fn stagger(config: &AnimationConfig, index: usize, step: u32) -> AnimationConfig {
    let offset = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step);
    config.clone().with_delay(config.delay().saturating_add(offset))
}

/// Sequential reveal of `count` items, `step` frames apart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaggerGroup {
    #[serde(default)]
    pub base_delay: u32,
    pub step: u32,
    pub count: usize,
}

impl StaggerGroup {
    pub fn new(count: usize, step: u32) -> Self {
        Self {
            base_delay: 0,
            step,
            count,
        }
    }

    /// Builder: extra delay before the first item, on top of the config's own
    pub fn with_base_delay(mut self, delay: u32) -> Self {
        self.base_delay = delay;
        self
    }

    /// Offset added to item `index`'s configured delay: `base_delay + index * step`
    pub fn item_delay(&self, index: usize) -> u32 {
        let offset = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step);
        self.base_delay.saturating_add(offset)
    }

    /// Window of item `index` for `config`
    pub fn item_window(&self, index: usize, config: &AnimationConfig) -> FrameWindow {
        FrameWindow::from_config(&self.item_config(index, config))
    }

    /// Copy of `config` for item `index`, its delay pushed back by
    /// [`item_delay`](Self::item_delay)
    pub fn item_config(&self, index: usize, config: &AnimationConfig) -> AnimationConfig {
        config
            .clone()
            .with_delay(config.delay().saturating_add(self.item_delay(index)))
    }

    /// One config per item, each with its staggered delay
    pub fn apply(&self, config: &AnimationConfig) -> Vec<AnimationConfig> {
        (0..self.count)
            .map(|index| self.item_config(index, config))
            .collect()
    }
}
