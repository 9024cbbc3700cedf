//! Scene file handling

use anyhow::{Context, Result};
use reel_animation::{
    normalize, AnimationSpec, Animated, DualAnimation, Easing, Overrides, DEFAULT_FPS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level scene description (scene.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

/// Output settings
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Frames sampled when no explicit range is given
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

fn default_frames() -> u32 {
    90
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            frames: default_frames(),
        }
    }
}

/// One animated element
#[derive(Debug, Deserialize, Serialize)]
pub struct ElementConfig {
    pub id: String,
    pub animation: AnimationSpec,
    /// Positional overrides, used where the animation table is silent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<StaggerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<ExitConfig>,
}

/// Repeat an element as a list, each item delayed by `step` frames
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct StaggerConfig {
    pub count: usize,
    #[serde(default = "default_step")]
    pub step: u32,
}

fn default_step() -> u32 {
    5
}

/// Exit animation taking over at `frame`
#[derive(Debug, Deserialize, Serialize)]
pub struct ExitConfig {
    pub animation: AnimationSpec,
    pub frame: u32,
}

impl ElementConfig {
    fn overrides(&self) -> Overrides {
        Overrides {
            delay: self.delay,
            duration: self.duration,
            easing: self.easing,
            spring_config: None,
        }
    }

    /// Resolve the element's animations
    pub fn animated(&self) -> Animated {
        let entry = normalize(&self.animation, &self.overrides());
        match &self.exit {
            Some(exit) => {
                let exit_config = exit.animation.normalize(&Overrides::new());
                DualAnimation::new(entry, exit_config, exit.frame).into()
            }
            None => entry.into(),
        }
    }

    /// Number of list items this element expands to
    pub fn item_count(&self) -> usize {
        self.stagger.map_or(1, |stagger| stagger.count.max(1))
    }

    /// Frames between consecutive list items
    pub fn stagger_step(&self) -> u32 {
        self.stagger.map_or(0, |stagger| stagger.step)
    }
}

impl SceneConfig {
    /// Load a scene from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No scene file found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a scene from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let scene: SceneConfig = toml::from_str(content)?;

        for (i, element) in scene.elements.iter().enumerate() {
            if scene.elements[..i].iter().any(|other| other.id == element.id) {
                tracing::warn!(id = %element.id, "duplicate element id");
            }
            if element.animation.kind().is_none() {
                tracing::warn!(id = %element.id, "element has no animation");
            }
        }

        Ok(scene)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene")
    }
}
