//! Animation descriptors and normalization
//!
//! Callers describe an animation either by bare type name (`"fadeIn"`) or by
//! a descriptor table (`{ type = "fadeIn", duration = 20 }`). [`normalize`]
//! resolves both into an [`AnimationConfig`]:
//!
//! descriptor field > positional override > default
//!
//! Values that are out of domain (negative delay, non-positive duration)
//! count as absent and fall through to the next source.

use serde::{Deserialize, Serialize};

use crate::config::{AnimationConfig, AnimationType, CustomParams, DEFAULT_DURATION};
use crate::easing::Easing;
use crate::spring::SpringConfig;

/// A fully spelled-out animation; every field but `type` is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    #[serde(rename = "type")]
    pub kind: AnimationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring_config: Option<SpringConfig>,
    #[serde(default, skip_serializing_if = "CustomParams::is_empty")]
    pub custom: CustomParams,
}

impl AnimationDescriptor {
    pub fn new(kind: AnimationType) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}

/// Shorthand or descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimationSpec {
    Named(AnimationType),
    Descriptor(AnimationDescriptor),
}

impl AnimationSpec {
    pub fn kind(&self) -> AnimationType {
        match self {
            AnimationSpec::Named(kind) => *kind,
            AnimationSpec::Descriptor(descriptor) => descriptor.kind,
        }
    }

    /// Resolve into a canonical config, see [`normalize`]
    pub fn normalize(&self, overrides: &Overrides) -> AnimationConfig {
        normalize(self, overrides)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Named(AnimationType::None)
    }
}

impl From<AnimationType> for AnimationSpec {
    fn from(kind: AnimationType) -> Self {
        AnimationSpec::Named(kind)
    }
}

impl From<AnimationDescriptor> for AnimationSpec {
    fn from(descriptor: AnimationDescriptor) -> Self {
        AnimationSpec::Descriptor(descriptor)
    }
}

/// Positional timing arguments that apply when the descriptor is silent
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    #[serde(default)]
    pub delay: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub easing: Option<Easing>,
    #[serde(default)]
    pub spring_config: Option<SpringConfig>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: delay in frames
    pub fn delay(mut self, frames: i64) -> Self {
        self.delay = Some(frames);
        self
    }

    /// Builder: duration in frames
    pub fn duration(mut self, frames: i64) -> Self {
        self.duration = Some(frames);
        self
    }

    /// Builder: easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Builder: spring parameters
    pub fn spring_config(mut self, config: SpringConfig) -> Self {
        self.spring_config = Some(config);
        self
    }
}

/// Resolve a shorthand or descriptor into an [`AnimationConfig`]
pub fn normalize(spec: &AnimationSpec, overrides: &Overrides) -> AnimationConfig {
    let empty = AnimationDescriptor::default();
    let (kind, descriptor) = match spec {
        AnimationSpec::Named(kind) => (*kind, &empty),
        AnimationSpec::Descriptor(descriptor) => (descriptor.kind, descriptor),
    };

    let delay = first_valid(&[descriptor.delay, overrides.delay], |d| d >= 0).unwrap_or(0);
    let duration = first_valid(&[descriptor.duration, overrides.duration], |d| d > 0)
        .unwrap_or(i64::from(DEFAULT_DURATION));
    let easing = descriptor.easing.or(overrides.easing).unwrap_or_default();

    let mut config = AnimationConfig::new(kind)
        .with_delay(saturate(delay))
        .with_duration(saturate(duration))
        .with_easing(easing)
        .with_custom_params(descriptor.custom.clone());

    if let Some(spring) = descriptor.spring_config.or(overrides.spring_config) {
        config = config.with_spring(spring);
    }

    config
}

/// First candidate that is present and passes `valid`
fn first_valid(candidates: &[Option<i64>], valid: impl Fn(i64) -> bool) -> Option<i64> {
    candidates.iter().flatten().copied().find(|&value| {
        let ok = valid(value);
        if !ok {
            tracing::debug!(value, "ignoring out-of-range timing value");
        }
        ok
    })
}

fn saturate(frames: i64) -> u32 {
    u32::try_from(frames).unwrap_or(u32::MAX)
}
