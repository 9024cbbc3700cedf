//! Animation function registry
//!
//! Every [`AnimationType`] maps to one pure function through a static table.
//! Functions receive a [`FrameContext`] and return a [`StyleSnapshot`]; they
//! never fail and never read anything beyond their arguments.

use crate::config::{AnimationConfig, AnimationType, CustomParams, Family};
use crate::easing::Easing;
use crate::families::{effects, fade, perspective, reveal, scale, slide, springs, typography};
use crate::interpolate::{interpolate_or_start, InterpolateOptions};
use crate::spring::{spring, SpringSample, DEFAULT_REST_THRESHOLD};
use crate::style::StyleSnapshot;
use crate::timeline::FrameWindow;
use crate::DEFAULT_FPS;

/// Signature shared by every animation function
pub type AnimationFn = fn(&FrameContext<'_>) -> StyleSnapshot;

/// Everything an animation function may look at
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    pub frame: f64,
    pub window: FrameWindow,
    pub config: &'a AnimationConfig,
    pub fps: f64,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        frame: f64,
        start_frame: f64,
        end_frame: f64,
        config: &'a AnimationConfig,
        fps: f64,
    ) -> Self {
        Self {
            frame,
            window: FrameWindow::new(start_frame, end_frame),
            config,
            fps: if fps.is_finite() && fps > 0.0 {
                fps
            } else {
                DEFAULT_FPS
            },
        }
    }

    pub fn custom(&self) -> &'a CustomParams {
        self.config.custom()
    }

    /// Numeric custom parameter with a default
    pub fn number(&self, key: &str, default: f64) -> f64 {
        self.custom().number(key, default)
    }

    /// Boolean custom parameter with a default
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.custom().flag(key, default)
    }

    /// `transformOrigin` to declare, honoring the `origin` override
    pub fn origin(&self, default: &'static str) -> String {
        self.custom().text("origin", default).to_string()
    }

    /// Frames elapsed since the window started
    pub fn elapsed(&self) -> f64 {
        self.frame - self.window.start
    }

    /// Map the window onto `[from, to]` through the config's easing
    pub fn ramp(&self, from: f64, to: f64) -> f64 {
        self.ramp_with(self.config.easing(), from, to)
    }

    /// Map the window onto `[from, to]` through a specific easing
    pub fn ramp_with(&self, easing: Easing, from: f64, to: f64) -> f64 {
        interpolate_or_start(
            self.frame,
            [self.window.start, self.window.end],
            [from, to],
            InterpolateOptions::clamp().easing(easing),
        )
    }

    /// Eased progress through the window, `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.ramp(0.0, 1.0)
    }

    /// Opacity rising 0 → 1 over the first `fraction` of the window
    pub fn fade_in(&self, fraction: f64) -> f64 {
        let window = self.window.fraction(0.0, fraction);
        interpolate_or_start(
            self.frame,
            [window.start, window.end],
            [0.0, 1.0],
            InterpolateOptions::clamp(),
        )
    }

    /// Opacity falling 1 → 0 over the last `fraction` of the window
    pub fn fade_out(&self, fraction: f64) -> f64 {
        let window = self.window.fraction(1.0 - fraction, 1.0);
        interpolate_or_start(
            self.frame,
            [window.start, window.end],
            [1.0, 0.0],
            InterpolateOptions::clamp(),
        )
    }

    /// Spring-driven progress through the window, `0` at the start and
    /// exactly `1` at the end.
    ///
    /// With `reverse` set in `custom`, the simulator runs from 1 to 0 and the
    /// result is complemented, so the two flips cancel in value and the
    /// motion decelerates into its end state.
    pub fn spring_progress(&self) -> f64 {
        let reverse = self.flag("reverse", false);
        let (from, to) = if reverse { (1.0, 0.0) } else { (0.0, 1.0) };
        let value = self.spring_at(self.elapsed(), from, to);
        if reverse {
            1.0 - value
        } else {
            value
        }
    }

    /// Spring value `elapsed` frames into the window, settling at the
    /// window's end. An empty window holds `from`.
    pub fn spring_at(&self, elapsed: f64, from: f64, to: f64) -> f64 {
        if self.window.is_empty() {
            tracing::trace!(
                start = self.window.start,
                end = self.window.end,
                "empty spring window, holding start value"
            );
            return from;
        }
        let sample = SpringSample::new(elapsed, self.fps)
            .range(from, to)
            .config(self.config.spring())
            .duration(self.window.len())
            .rest_threshold(self.number("durationRestThreshold", DEFAULT_REST_THRESHOLD));
        spring(&sample)
    }
}

/// Registry entry
#[derive(Clone, Copy)]
pub struct Entry {
    pub kind: AnimationType,
    pub function: AnimationFn,
}

macro_rules! registry_table {
    ($($kind:ident => $function:path,)*) => {
        static REGISTRY: &[Entry] = &[
            $(Entry { kind: AnimationType::$kind, function: $function },)*
        ];
    };
}

registry_table! {
    FadeIn => fade::fade_in,
    FadeOut => fade::fade_out,

    SlideInLeft => slide::slide_in_left,
    SlideInRight => slide::slide_in_right,
    SlideInTop => slide::slide_in_top,
    SlideInBottom => slide::slide_in_bottom,
    SlideOutLeft => slide::slide_out_left,
    SlideOutRight => slide::slide_out_right,
    SlideOutTop => slide::slide_out_top,
    SlideOutBottom => slide::slide_out_bottom,

    ScaleIn => scale::scale_in,
    ScaleOut => scale::scale_out,
    ZoomIn => scale::zoom_in,
    ZoomOut => scale::zoom_out,
    BounceIn => scale::bounce_in,

    RevealLeft => reveal::reveal_left,
    RevealRight => reveal::reveal_right,
    RevealTop => reveal::reveal_top,
    RevealBottom => reveal::reveal_bottom,
    CollapseLeft => reveal::collapse_left,
    CollapseRight => reveal::collapse_right,
    CollapseTop => reveal::collapse_top,
    CollapseBottom => reveal::collapse_bottom,

    SpringIn => springs::spring_in,
    SpringOut => springs::spring_out,
    SpringScale => springs::spring_scale,
    SpringTranslateX => springs::spring_translate_x,
    SpringTranslateY => springs::spring_translate_y,
    SpringRotate => springs::spring_rotate,

    FlipX => perspective::flip_x,
    FlipY => perspective::flip_y,
    Rotate3D => perspective::rotate_3d,
    Swing => perspective::swing,
    ZoomPerspective => perspective::zoom_perspective,
    RotateIn => perspective::rotate_in,
    RotateOut => perspective::rotate_out,
    SkewIn => perspective::skew_in,

    Glitch => effects::glitch,
    BlurIn => effects::blur_in,
    BlurOut => effects::blur_out,
    DepthOfField => effects::depth_of_field,
    KenBurns => effects::ken_burns,
    Pulse => effects::pulse,
    ColorReveal => effects::color_reveal,

    Typewriter => typography::typewriter,
    TrackingIn => typography::tracking_in,
}

/// Function registered for `kind`; `None` for the empty animation
pub fn lookup(kind: AnimationType) -> Option<AnimationFn> {
    REGISTRY
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.function)
}

/// All registered animations with their family
pub fn entries() -> impl Iterator<Item = (AnimationType, Family)> {
    REGISTRY.iter().map(|entry| (entry.kind, entry.kind.family()))
}

/// Evaluate animation `kind` at `frame` over `[start_frame, end_frame]`.
///
/// `None` (and anything unregistered) yields an empty snapshot.
pub fn evaluate(
    kind: AnimationType,
    frame: f64,
    start_frame: f64,
    end_frame: f64,
    config: &AnimationConfig,
    fps: f64,
) -> StyleSnapshot {
    match lookup(kind) {
        Some(function) => {
            let ctx = FrameContext::new(frame, start_frame, end_frame, config, fps);
            function(&ctx)
        }
        None => StyleSnapshot::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_is_registered_once() {
        for &kind in AnimationType::ALL {
            let count = REGISTRY.iter().filter(|entry| entry.kind == kind).count();
            assert_eq!(count, 1, "{kind} registered {count} times");
        }
        assert_eq!(REGISTRY.len(), AnimationType::ALL.len());
        assert!(lookup(AnimationType::None).is_none());
    }

    #[test]
    fn test_none_evaluates_to_empty_snapshot() {
        let config = AnimationConfig::none();
        let snapshot = evaluate(AnimationType::None, 10.0, 0.0, 30.0, &config, 30.0);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_context_fade_windows() {
        let config = AnimationConfig::new(AnimationType::FadeIn);
        let ctx = FrameContext::new(5.0, 0.0, 20.0, &config, 30.0);
        assert_eq!(ctx.fade_in(0.5), 0.5);
        assert_eq!(ctx.fade_out(0.5), 1.0);

        let late = FrameContext::new(15.0, 0.0, 20.0, &config, 30.0);
        assert_eq!(late.fade_in(0.5), 1.0);
        assert_eq!(late.fade_out(0.5), 0.5);
    }

    #[test]
    fn test_degenerate_window_holds_start_values() {
        let config = AnimationConfig::new(AnimationType::FadeIn);
        let ctx = FrameContext::new(5.0, 10.0, 10.0, &config, 30.0);
        assert_eq!(ctx.ramp(0.0, 1.0), 0.0);
        assert_eq!(ctx.fade_in(0.5), 0.0);
        assert_eq!(ctx.fade_out(0.5), 1.0);
    }

    #[test]
    fn test_degenerate_window_holds_spring_start() {
        for reverse in [false, true] {
            let config = AnimationConfig::new(AnimationType::SpringIn).with_custom("reverse", reverse);
            let ctx = FrameContext::new(15.0, 10.0, 10.0, &config, 30.0);
            assert_eq!(ctx.spring_progress(), 0.0, "reverse = {reverse}");
            assert_eq!(ctx.spring_at(5.0, 2.0, 8.0), 2.0);
        }

        let spring_in = AnimationConfig::new(AnimationType::SpringIn);
        let scale_in = AnimationConfig::new(AnimationType::ScaleIn);
        let spring = evaluate(AnimationType::SpringIn, 15.0, 10.0, 10.0, &spring_in, 30.0);
        let ramp = evaluate(AnimationType::ScaleIn, 15.0, 10.0, 10.0, &scale_in, 30.0);
        assert_eq!(spring.transform(), Some("scale(0)"));
        assert_eq!(spring.transform(), ramp.transform());
    }

    #[test]
    fn test_context_falls_back_to_default_fps() {
        let config = AnimationConfig::new(AnimationType::FadeIn);
        assert_eq!(FrameContext::new(0.0, 0.0, 1.0, &config, 0.0).fps, DEFAULT_FPS);
        assert_eq!(FrameContext::new(0.0, 0.0, 1.0, &config, f64::NAN).fps, DEFAULT_FPS);
    }

    #[test]
    fn test_spring_progress_boundaries() {
        for reverse in [false, true] {
            let config = AnimationConfig::new(AnimationType::SpringIn).with_custom("reverse", reverse);
            let start = FrameContext::new(10.0, 10.0, 40.0, &config, 30.0);
            let end = FrameContext::new(40.0, 10.0, 40.0, &config, 30.0);
            assert_eq!(start.spring_progress(), 0.0);
            assert_eq!(end.spring_progress(), 1.0);
        }
    }
}
