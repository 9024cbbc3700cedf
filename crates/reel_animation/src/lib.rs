//! Reel Animation Engine
//!
//! Frame-indexed entry/exit animations for rendered video overlays.
//!
//! # Features
//!
//! - **Easing & Interpolation**: clamped range mapping with named and
//!   cubic-bezier curves
//! - **Closed-form Springs**: damped oscillators that settle exactly at the
//!   end of a frame window
//! - **Animation Registry**: fade, slide, scale, reveal, spring, 3D,
//!   effect and typography families, all pure functions of the frame
//! - **Timelines**: entry/exit phase switching and list stagger
//!
//! Every evaluation is a pure function of its arguments: sampling frames in
//! any order, on any thread, gives the same [`StyleSnapshot`].

pub mod config;
pub mod descriptor;
pub mod easing;
pub mod error;
pub mod families;
pub mod interpolate;
pub mod presets;
pub mod registry;
pub mod sampler;
pub mod spring;
pub mod style;
pub mod timeline;

/// Frame rate assumed when none (or an invalid one) is given
pub const DEFAULT_FPS: f64 = 30.0;

pub use config::{AnimationConfig, AnimationType, CustomParams, CustomValue, Family};
pub use descriptor::{normalize, AnimationDescriptor, AnimationSpec, Overrides};
pub use easing::{ease, Easing};
pub use error::{MotionError, Result};
pub use interpolate::{interpolate, interpolate_segments, Extrapolate, InterpolateOptions};
pub use presets::AnimationPreset;
pub use registry::{evaluate, FrameContext};
pub use sampler::{sample, Animated, FrameSampler};
pub use spring::{measure_spring, spring, SpringConfig, SpringCurve, SpringSample};
pub use style::{StyleSnapshot, StyleValue};
pub use timeline::{compose_dual, stagger, DualAnimation, FrameWindow, Phase, StaggerGroup};
