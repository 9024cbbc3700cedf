//! Closed-form spring physics
//!
//! A damped harmonic oscillator evaluated analytically at any frame. Nothing
//! is integrated step by step, so sampling frames forwards, backwards or
//! repeatedly always yields the same value for the same inputs.
//!
//! The oscillator starts at rest at displacement 0 and approaches 1:
//!
//! - underdamped (ζ < 1): `1 - e^(-ζω₀t) * [cos(ωd·t) + ζ/√(1-ζ²) · sin(ωd·t)]`
//! - critically damped (ζ = 1): `1 - e^(-ω₀t) * (1 + ω₀t)`
//! - overdamped (ζ > 1): sum of two decaying exponentials
//!
//! where `ω₀ = √(k/m)` and `ζ = c / (2√(km))`.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_FPS;

/// Default distance from the target below which a spring counts as settled
pub const DEFAULT_REST_THRESHOLD: f64 = 0.005;

/// Upper bound on the settle search, in frames
pub const MAX_SETTLE_FRAMES: u32 = 10_000;

/// Tolerance around ζ = 1 treated as critically damped
const CRITICAL_TOLERANCE: f64 = 1e-6;

/// Fewest sampled frames per oscillation period a stretched spring may show
const MIN_SAMPLES_PER_PERIOD: f64 = 4.0;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    pub mass: f64,
    pub damping: f64,
    pub stiffness: f64,
    /// Clamp displacement to `[0, 1]` so the spring never overshoots
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    pub fn new(mass: f64, damping: f64, stiffness: f64) -> Self {
        Self {
            mass,
            damping,
            stiffness,
            overshoot_clamping: false,
        }
    }

    /// Soft, slow spring with a hint of overshoot
    pub fn gentle() -> Self {
        Self::new(1.0, 14.0, 120.0)
    }

    /// Bouncy spring with visible oscillation
    pub fn wobbly() -> Self {
        Self::new(1.0, 12.0, 180.0)
    }

    /// Fast spring with little overshoot
    pub fn stiff() -> Self {
        Self::new(1.0, 20.0, 210.0)
    }

    /// Very fast, nearly critically damped
    pub fn snappy() -> Self {
        Self::new(1.0, 30.0, 400.0)
    }

    /// Overdamped, creeps into place
    pub fn molasses() -> Self {
        Self::new(1.0, 120.0, 280.0)
    }

    /// Builder: clamp overshoot
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Replace out-of-domain fields with their defaults.
    ///
    /// Mass and stiffness must be positive, damping non-negative, and all
    /// three finite.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if !(config.mass.is_finite() && config.mass > 0.0) {
            tracing::warn!(mass = config.mass, "invalid spring mass, using default");
            config.mass = defaults.mass;
        }
        if !(config.stiffness.is_finite() && config.stiffness > 0.0) {
            tracing::warn!(
                stiffness = config.stiffness,
                "invalid spring stiffness, using default"
            );
            config.stiffness = defaults.stiffness;
        }
        if !(config.damping.is_finite() && config.damping >= 0.0) {
            tracing::warn!(damping = config.damping, "invalid spring damping, using default");
            config.damping = defaults.damping;
        }

        config
    }

    /// Undamped angular frequency ω₀ in rad/s
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio ζ
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized displacement at `t` seconds, starting at 0 and approaching 1
    pub fn displacement(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let omega_0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let d = if (zeta - 1.0).abs() < CRITICAL_TOLERANCE {
            critically_damped(t, omega_0)
        } else if zeta < 1.0 {
            underdamped(t, omega_0, zeta)
        } else {
            overdamped(t, omega_0, zeta)
        };

        if self.overshoot_clamping {
            d.clamp(0.0, 1.0)
        } else {
            d
        }
    }

    /// Upper bound on `|d(t) - 1|` for all times `>= t`
    fn envelope(&self, t: f64) -> f64 {
        let omega_0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_TOLERANCE || zeta > 1.0 {
            // Monotone approach, the distance itself only shrinks
            (1.0 - self.displacement(t)).abs()
        } else {
            (-zeta * omega_0 * t).exp() / (1.0 - zeta * zeta).sqrt()
        }
    }
}

fn underdamped(t: f64, omega_0: f64, zeta: f64) -> f64 {
    let root = (1.0 - zeta * zeta).sqrt();
    let omega_d = omega_0 * root;
    let decay = (-zeta * omega_0 * t).exp();
    let oscillation = (omega_d * t).cos() + (zeta / root) * (omega_d * t).sin();
    1.0 - decay * oscillation
}

fn critically_damped(t: f64, omega_0: f64) -> f64 {
    1.0 - (-omega_0 * t).exp() * (1.0 + omega_0 * t)
}

fn overdamped(t: f64, omega_0: f64, zeta: f64) -> f64 {
    // Exponential form instead of cosh/sinh, which overflow for long times
    let root = (zeta * zeta - 1.0).sqrt();
    let slow = -omega_0 * (zeta - root);
    let fast = -omega_0 * (zeta + root);
    let offset = (fast * (slow * t).exp() - slow * (fast * t).exp()) / (slow - fast);
    1.0 + offset
}

/// Inputs for one spring evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSample {
    /// Frames elapsed since the spring started
    pub frame: f64,
    pub fps: f64,
    pub from: f64,
    pub to: f64,
    pub config: SpringConfig,
    /// Stretch time so the spring settles exactly at this frame
    pub duration_in_frames: Option<f64>,
    pub rest_threshold: f64,
}

impl SpringSample {
    /// A 0 → 1 spring with the default config
    pub fn new(frame: f64, fps: f64) -> Self {
        Self {
            frame,
            fps,
            from: 0.0,
            to: 1.0,
            config: SpringConfig::default(),
            duration_in_frames: None,
            rest_threshold: DEFAULT_REST_THRESHOLD,
        }
    }

    /// Builder: set the value range
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Builder: set the physical config
    pub fn config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder: settle exactly at `frames`
    pub fn duration(mut self, frames: f64) -> Self {
        self.duration_in_frames = Some(frames);
        self
    }

    /// Builder: set the settle threshold
    pub fn rest_threshold(mut self, threshold: f64) -> Self {
        self.rest_threshold = threshold;
        self
    }
}

/// A spring with its settle time measured, ready to sample at any frame.
///
/// Building one runs the settle search once; [`SpringCurve::value_at`] is
/// then a closed-form evaluation, so callers sampling many frames of the
/// same spring can keep the curve around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    config: SpringConfig,
    fps: f64,
    from: f64,
    to: f64,
    /// Natural frames covered per sampled frame
    stretch: f64,
    /// Sampled frame from which the value is exactly `to`
    settle_frame: f64,
}

impl SpringCurve {
    /// Measure the spring described by `sample`; its `frame` is ignored.
    ///
    /// With a duration, natural time is compressed so the spring settles at
    /// the duration's last frame. The compression is capped so an
    /// oscillating spring keeps at least four samples per period. A spring
    /// that settles too slowly for that cap (zero damping always does) is
    /// still moving when the window ends and lands on `to` in one step.
    pub fn new(sample: &SpringSample) -> Self {
        let config = sample.config.sanitized();
        let fps = sanitize_fps(sample.fps);
        let threshold = sanitize_threshold(sample.rest_threshold);
        let natural = measure_spring(&config, fps, threshold);

        let (stretch, settle_frame) = match sample.duration_in_frames {
            Some(duration) if duration.is_finite() && duration > 0.0 => {
                let stretch = (natural / duration).min(max_stretch(&config, fps));
                (stretch, duration)
            }
            _ => (1.0, natural),
        };

        Self {
            config,
            fps,
            from: sample.from,
            to: sample.to,
            stretch,
            settle_frame,
        }
    }

    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    pub fn settle_frame(&self) -> f64 {
        self.settle_frame
    }

    /// Value `frame` frames after the spring started
    pub fn value_at(&self, frame: f64) -> f64 {
        if frame.is_nan() || frame <= 0.0 {
            return self.from;
        }
        if frame >= self.settle_frame {
            return self.to;
        }
        let seconds = frame * self.stretch / self.fps;
        self.from + (self.to - self.from) * self.config.displacement(seconds)
    }
}

/// Largest stretch that keeps [`MIN_SAMPLES_PER_PERIOD`] samples in each
/// oscillation; unbounded for springs that do not oscillate
fn max_stretch(config: &SpringConfig, fps: f64) -> f64 {
    let zeta = config.damping_ratio();
    if zeta >= 1.0 - CRITICAL_TOLERANCE {
        return f64::INFINITY;
    }
    let omega_d = config.natural_frequency() * (1.0 - zeta * zeta).sqrt();
    std::f64::consts::TAU * fps / (omega_d * MIN_SAMPLES_PER_PERIOD)
}

/// Evaluate a spring at one frame.
///
/// Once the oscillator's envelope drops under the rest threshold the value
/// is exactly `to`, so the end of a duration window lands on the target
/// rather than merely near it. Each call measures the spring again; build a
/// [`SpringCurve`] to sample one spring repeatedly.
pub fn spring(sample: &SpringSample) -> f64 {
    if sample.frame.is_nan() || sample.frame <= 0.0 {
        return sample.from;
    }
    SpringCurve::new(sample).value_at(sample.frame)
}

/// Frames a spring needs before its envelope stays within `threshold`.
///
/// Springs that never settle (zero damping) report [`MAX_SETTLE_FRAMES`].
pub fn measure_spring(config: &SpringConfig, fps: f64, threshold: f64) -> f64 {
    let config = config.sanitized();
    let fps = sanitize_fps(fps);
    let threshold = sanitize_threshold(threshold);

    (0..MAX_SETTLE_FRAMES)
        .find(|&n| config.envelope(f64::from(n) / fps) < threshold)
        .unwrap_or(MAX_SETTLE_FRAMES)
        .into()
}

fn sanitize_fps(fps: f64) -> f64 {
    if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        DEFAULT_FPS
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        DEFAULT_REST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damping_ratio_classification() {
        assert!((SpringConfig::default().damping_ratio() - 0.5).abs() < 1e-12);
        assert!((SpringConfig::default().natural_frequency() - 10.0).abs() < 1e-12);
        assert!(SpringConfig::molasses().damping_ratio() > 1.0);
        assert!(SpringConfig::wobbly().damping_ratio() < 1.0);
    }

    #[test]
    fn test_displacement_starts_at_zero_for_every_regime() {
        for config in [
            SpringConfig::default(),
            SpringConfig::new(1.0, 20.0, 100.0),
            SpringConfig::molasses(),
        ] {
            assert_eq!(config.displacement(0.0), 0.0);
            assert!(config.displacement(1e-6).abs() < 1e-6);
            assert!((config.displacement(20.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_critical_damping_never_overshoots() {
        let config = SpringConfig::new(1.0, 20.0, 100.0);
        for i in 0..200 {
            assert!(config.displacement(i as f64 / 60.0) <= 1.0);
        }
    }

    #[test]
    fn test_overdamped_is_finite_for_long_times() {
        let config = SpringConfig::molasses();
        let d = config.displacement(10_000.0);
        assert!(d.is_finite());
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_underdamped_overshoots_unless_clamped() {
        let config = SpringConfig::default();
        let peak = (0..60)
            .map(|i| config.displacement(i as f64 / 30.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);

        let clamped = config.with_overshoot_clamping(true);
        for i in 0..60 {
            let d = clamped.displacement(i as f64 / 30.0);
            assert!((0.0..=1.0).contains(&d));
        }
    }

    #[test]
    fn test_measure_default_spring() {
        // e^(-5t) / sqrt(0.75) < 0.005 first holds at t = 1.1s
        assert_eq!(
            measure_spring(&SpringConfig::default(), 30.0, DEFAULT_REST_THRESHOLD),
            33.0
        );
    }

    #[test]
    fn test_undamped_spring_hits_search_cap() {
        let config = SpringConfig::new(1.0, 0.0, 100.0);
        assert_eq!(measure_spring(&config, 30.0, 0.005), f64::from(MAX_SETTLE_FRAMES));
    }

    #[test]
    fn test_spring_settles_exactly_at_duration() {
        let sample = SpringSample::new(30.0, 30.0).duration(30.0);
        assert_eq!(spring(&sample), 1.0);
        for frame in 30..120 {
            let later = SpringSample::new(frame as f64, 30.0).duration(30.0);
            assert_eq!(spring(&later), 1.0);
        }
    }

    #[test]
    fn test_curve_matches_single_evaluation() {
        let sample = SpringSample::new(0.0, 30.0)
            .config(SpringConfig::wobbly())
            .duration(24.0);
        let curve = SpringCurve::new(&sample);
        for frame in 0..30 {
            let frame = f64::from(frame);
            let single = spring(&SpringSample { frame, ..sample });
            assert_eq!(curve.value_at(frame).to_bits(), single.to_bits());
        }
    }

    #[test]
    fn test_stretch_is_untouched_for_settling_springs() {
        let curve = SpringCurve::new(&SpringSample::new(0.0, 30.0).duration(30.0));
        assert_eq!(curve.stretch(), 33.0 / 30.0);
        assert_eq!(curve.settle_frame(), 30.0);
    }

    #[test]
    fn test_undamped_spring_is_not_aliased() {
        let config = SpringConfig::new(1.0, 0.0, 100.0);
        let curve = SpringCurve::new(&SpringSample::new(0.0, 30.0).config(config).duration(30.0));

        // ω = 10 rad/s, so one period spans 2π·30/10 natural frames
        let samples_per_period = std::f64::consts::TAU * 30.0 / (10.0 * curve.stretch());
        assert!(samples_per_period >= MIN_SAMPLES_PER_PERIOD - 1e-9);
        assert!(curve.stretch() < f64::from(MAX_SETTLE_FRAMES) / 30.0);

        // Undamped motion stays inside its [0, 2] swing and still lands on 1
        for frame in 0..30 {
            let value = curve.value_at(f64::from(frame));
            assert!((-1e-9..=2.0 + 1e-9).contains(&value), "frame {frame}: {value}");
        }
        assert_eq!(curve.value_at(30.0), 1.0);
    }

    #[test]
    fn test_spring_respects_range() {
        let start = SpringSample::new(0.0, 30.0).range(100.0, -50.0);
        assert_eq!(spring(&start), 100.0);
        let end = SpringSample::new(200.0, 30.0).range(100.0, -50.0);
        assert_eq!(spring(&end), -50.0);
    }

    #[test]
    fn test_spring_is_pure() {
        let sample = SpringSample::new(11.0, 30.0).duration(24.0);
        let first = spring(&sample);
        let _ = spring(&SpringSample::new(3.0, 30.0));
        assert_eq!(first.to_bits(), spring(&sample).to_bits());
    }

    #[test]
    fn test_invalid_config_is_sanitized() {
        let broken = SpringConfig::new(-1.0, f64::NAN, 0.0);
        assert_eq!(broken.sanitized(), SpringConfig::default());

        let sample = SpringSample::new(10.0, 30.0).config(broken);
        let reference = SpringSample::new(10.0, 30.0);
        assert_eq!(spring(&sample), spring(&reference));
    }
}
