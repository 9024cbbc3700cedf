//! Subcommand implementations
//!
//! Every command writes to the given writer so the output can be captured.

use std::io::Write;

use anyhow::{Context, Result};
use reel_animation::registry;
use reel_animation::{
    AnimationConfig, AnimationType, Animated, Easing, Family, FrameSampler, StyleSnapshot,
};
use serde::Serialize;

use crate::config::SceneConfig;

/// One line of `sample`/`probe` output
#[derive(Serialize)]
struct SampleLine<'a> {
    frame: u32,
    element: &'a str,
    item: usize,
    styles: &'a StyleSnapshot,
}

fn write_line(out: &mut impl Write, line: &SampleLine<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, line).context("Failed to encode styles")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

/// Frames to sample from a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frames {
    Single(u32),
    Range { from: u32, to: u32, step: u32 },
}

impl Frames {
    /// Resolve the command-line selection; `to` is exclusive and defaults
    /// to the scene's frame count
    pub fn resolve(
        frame: Option<u32>,
        from: Option<u32>,
        to: Option<u32>,
        step: u32,
        scene: &SceneConfig,
    ) -> Result<Self> {
        if let Some(frame) = frame {
            return Ok(Frames::Single(frame));
        }
        if step == 0 {
            anyhow::bail!("--step must be at least 1");
        }

        let from = from.unwrap_or(0);
        let to = to.unwrap_or(scene.render.frames);
        if from > to {
            anyhow::bail!("--from {from} is past --to {to}");
        }
        Ok(Frames::Range { from, to, step })
    }

    fn iter(self) -> Box<dyn Iterator<Item = u32>> {
        match self {
            Frames::Single(frame) => Box::new(std::iter::once(frame)),
            Frames::Range { from, to, step } => Box::new((from..to).step_by(step as usize)),
        }
    }
}

/// Print every element of `scene` at each selected frame
pub fn sample(scene: &SceneConfig, frames: Frames, out: &mut impl Write) -> Result<()> {
    let sampler = FrameSampler::new(scene.render.fps);
    let elements: Vec<(&str, Animated, usize, u32)> = scene
        .elements
        .iter()
        .map(|element| {
            (
                element.id.as_str(),
                element.animated(),
                element.item_count(),
                element.stagger_step(),
            )
        })
        .collect();

    tracing::info!(
        elements = elements.len(),
        fps = sampler.fps(),
        "sampling scene"
    );

    for frame in frames.iter() {
        for (id, animated, count, step) in &elements {
            for item in 0..*count {
                let styles = sampler.styles_for_item(frame, animated, item, *step);
                let line = SampleLine {
                    frame,
                    element: id,
                    item,
                    styles: &styles,
                };
                write_line(out, &line)?;
            }
        }
    }

    Ok(())
}

/// Print the registered animations grouped by family
pub fn list(out: &mut impl Write) -> Result<()> {
    let mut current: Option<Family> = None;
    for (kind, family) in registry::entries() {
        if current != Some(family) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "{}:", family.name())?;
            current = Some(family);
        }
        writeln!(out, "  {kind}")?;
    }
    Ok(())
}

/// Options for `probe`
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub animation: String,
    pub duration: u32,
    pub delay: u32,
    pub easing: Option<String>,
    pub fps: f64,
    pub frames: Option<u32>,
}

/// Sample one animation from frame 0 through its end (or `frames`)
pub fn probe(options: &ProbeOptions, out: &mut impl Write) -> Result<()> {
    let kind = AnimationType::parse(&options.animation).with_context(|| {
        format!(
            "Unknown animation `{}`. Run `reel list` to see the catalogue.",
            options.animation
        )
    })?;

    let mut config = AnimationConfig::new(kind)
        .with_delay(options.delay)
        .with_duration(options.duration);
    if let Some(name) = &options.easing {
        let easing = Easing::parse(name).with_context(|| format!("Unknown easing `{name}`"))?;
        config = config.with_easing(easing);
    }

    let last = options
        .frames
        .unwrap_or_else(|| config.delay().saturating_add(config.duration()));
    let sampler = FrameSampler::new(options.fps);
    let animated = Animated::Single(config);

    for frame in 0..=last {
        let styles = sampler.styles_at(frame, &animated);
        let line = SampleLine {
            frame,
            element: kind.name(),
            item: 0,
            styles: &styles,
        };
        write_line(out, &line)?;
    }

    Ok(())
}
