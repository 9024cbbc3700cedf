//! Animation presets for common highlight overlays
//!
//! Ready-made entry/exit pairs for the elements a sports highlight reel
//! keeps showing: score bugs, player cards, headlines and stat rows.

use crate::config::{AnimationConfig, AnimationType};
use crate::easing::Easing;
use crate::spring::SpringConfig;
use crate::timeline::{DualAnimation, StaggerGroup};

/// Pre-built animation presets for common patterns
pub struct AnimationPreset;

impl AnimationPreset {
    // ========================================================================
    // Persistent overlays
    // ========================================================================

    /// Score bug dropping in from the top edge and leaving the same way
    pub fn score_bug(exit_frame: u32) -> DualAnimation {
        let entry = AnimationConfig::new(AnimationType::SlideInTop)
            .with_duration(20)
            .with_easing(Easing::EaseOut)
            .with_custom("distance", 60.0);
        let exit = AnimationConfig::new(AnimationType::SlideOutTop)
            .with_duration(15)
            .with_easing(Easing::EaseIn)
            .with_custom("distance", 60.0);
        DualAnimation::new(entry, exit, exit_frame)
    }

    /// Player card popping in on a spring, shrinking away on exit
    pub fn player_card(exit_frame: u32) -> DualAnimation {
        let entry = AnimationConfig::new(AnimationType::SpringIn)
            .with_duration(25)
            .with_spring(SpringConfig::wobbly());
        let exit = AnimationConfig::new(AnimationType::SpringOut)
            .with_duration(20)
            .with_spring(SpringConfig::stiff())
            .with_custom("reverse", true);
        DualAnimation::new(entry, exit, exit_frame)
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Headline tightening its letter spacing, fading out on exit
    pub fn headline(exit_frame: u32) -> DualAnimation {
        let entry = AnimationConfig::new(AnimationType::TrackingIn)
            .with_duration(30)
            .with_easing(Easing::EaseOut);
        let exit = AnimationConfig::new(AnimationType::FadeOut).with_duration(15);
        DualAnimation::new(entry, exit, exit_frame)
    }

    /// One row of a stat table; pair with [`AnimationPreset::stat_rows`]
    pub fn stat_row() -> AnimationConfig {
        AnimationConfig::new(AnimationType::SlideInLeft)
            .with_duration(18)
            .with_easing(Easing::EaseOut)
            .with_custom("distance", 40.0)
    }

    /// Stagger for `count` stat rows, 5 frames apart
    pub fn stat_rows(count: usize) -> StaggerGroup {
        StaggerGroup::new(count, 5)
    }

    // ========================================================================
    // Imagery
    // ========================================================================

    /// Slow push-in over a still photo, `duration` frames long
    pub fn hero_image(duration: u32) -> AnimationConfig {
        AnimationConfig::new(AnimationType::KenBurns)
            .with_duration(duration)
            .with_easing(Easing::Linear)
    }

    /// Short glitch burst to mark a replay cut
    pub fn replay_flash() -> AnimationConfig {
        AnimationConfig::new(AnimationType::Glitch)
            .with_duration(12)
            .with_easing(Easing::EaseOut)
            .with_custom("intensity", 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Phase;

    #[test]
    fn test_dual_presets_switch_at_exit_frame() {
        for dual in [
            AnimationPreset::score_bug(90),
            AnimationPreset::player_card(90),
            AnimationPreset::headline(90),
        ] {
            assert!(dual.has_exit());
            assert_eq!(dual.phase_at(89.0), Phase::Entry);
            assert_eq!(dual.phase_at(90.0), Phase::Exit);
        }
    }

    #[test]
    fn test_player_card_exit_lands_on_end_scale() {
        let card = AnimationPreset::player_card(60);
        let end = card.evaluate(80.0, 30.0);
        assert_eq!(end.transform(), Some("scale(0)"));
        assert_eq!(end.opacity(), Some(0.0));
    }

    #[test]
    fn test_stat_rows_stagger() {
        let rows = AnimationPreset::stat_rows(4).apply(&AnimationPreset::stat_row());
        let delays: Vec<u32> = rows.iter().map(AnimationConfig::delay).collect();
        assert_eq!(delays, vec![0, 5, 10, 15]);
    }

    #[test]
    fn test_single_presets() {
        assert_eq!(AnimationPreset::hero_image(120).duration(), 120);
        assert_eq!(AnimationPreset::replay_flash().kind(), AnimationType::Glitch);
    }
}
