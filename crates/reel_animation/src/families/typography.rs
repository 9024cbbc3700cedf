//! Text-oriented animations

use crate::registry::FrameContext;
use crate::style::{clip_inset, css_number, props, StyleSnapshot};

/// Reveal text left to right in `characters` discrete steps
pub fn typewriter(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let characters = ctx.number("characters", 20.0).round().max(1.0);
    let shown = (ctx.progress() * characters).floor() / characters;
    let hidden = (1.0 - shown).clamp(0.0, 1.0) * 100.0;

    StyleSnapshot::new().with(props::CLIP_PATH, clip_inset(0.0, hidden, 0.0, 0.0))
}

/// Letters drift together from a wide tracking
pub fn tracking_in(ctx: &FrameContext<'_>) -> StyleSnapshot {
    let spacing = ctx.ramp(
        ctx.number("startSpacing", 20.0),
        ctx.number("endSpacing", 0.0),
    );

    StyleSnapshot::new()
        .with(props::OPACITY, ctx.fade_in(0.6))
        .with(props::LETTER_SPACING, format!("{}px", css_number(spacing)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationConfig, AnimationType};
    use crate::easing::Easing;

    #[test]
    fn test_typewriter_steps() {
        let config = AnimationConfig::new(AnimationType::Typewriter)
            .with_easing(Easing::Linear)
            .with_custom("characters", 4.0);
        let clip = |frame| {
            typewriter(&FrameContext::new(frame, 0.0, 40.0, &config, 30.0))
                .text(props::CLIP_PATH)
                .map(str::to_string)
        };

        assert_eq!(clip(0.0).as_deref(), Some("inset(0% 100% 0% 0%)"));
        // Holds between steps
        assert_eq!(clip(10.0).as_deref(), Some("inset(0% 75% 0% 0%)"));
        assert_eq!(clip(19.0).as_deref(), Some("inset(0% 75% 0% 0%)"));
        assert_eq!(clip(40.0).as_deref(), Some("inset(0% 0% 0% 0%)"));
    }

    #[test]
    fn test_typewriter_survives_bad_character_count() {
        let config = AnimationConfig::new(AnimationType::Typewriter).with_custom("characters", -3.0);
        let ctx = FrameContext::new(30.0, 0.0, 30.0, &config, 30.0);
        assert_eq!(typewriter(&ctx).text(props::CLIP_PATH), Some("inset(0% 0% 0% 0%)"));
    }

    #[test]
    fn test_tracking_in() {
        let config = AnimationConfig::new(AnimationType::TrackingIn).with_easing(Easing::Linear);
        let at = |frame| tracking_in(&FrameContext::new(frame, 0.0, 30.0, &config, 30.0));

        assert_eq!(at(0.0).text(props::LETTER_SPACING), Some("20px"));
        assert_eq!(at(15.0).text(props::LETTER_SPACING), Some("10px"));
        assert_eq!(at(30.0).text(props::LETTER_SPACING), Some("0px"));
        assert_eq!(at(18.0).opacity(), Some(1.0));
    }
}
