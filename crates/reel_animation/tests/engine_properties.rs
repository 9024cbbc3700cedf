//! End-to-end properties of the animation engine

use reel_animation::{
    interpolate, sample, spring, AnimationConfig, AnimationType, Animated, DualAnimation, Easing,
    FrameSampler, InterpolateOptions, SpringSample, StaggerGroup, StyleSnapshot,
};

fn every_animation() -> Vec<Animated> {
    AnimationType::ALL
        .iter()
        .map(|&kind| {
            AnimationConfig::new(kind)
                .with_delay(10)
                .with_duration(40)
                .into()
        })
        .collect()
}

fn first_fully_opaque(sampler: &FrameSampler, animated: &Animated, index: usize) -> Option<u32> {
    (0..200).find(|&frame| sampler.styles_for_item(frame, animated, index, 5).opacity() == Some(1.0))
}

#[test]
fn repeated_sampling_is_bit_identical() {
    for animated in every_animation() {
        for frame in [0, 10, 23, 37, 50, 80] {
            let first = sample(frame, None, &animated);
            let second = sample(frame, None, &animated);
            assert_eq!(first, second, "{animated:?} at {frame}");
        }
    }
}

#[test]
fn out_of_order_and_threaded_sampling_match_serial_pass() {
    let animations = every_animation();
    let serial: Vec<Vec<StyleSnapshot>> = animations
        .iter()
        .map(|animated| FrameSampler::default().sample_range(0..60, animated))
        .collect();

    // Backwards on this thread
    for (animated, expected) in animations.iter().zip(&serial) {
        for frame in (0..60u32).rev() {
            assert_eq!(&sample(frame, None, animated), &expected[frame as usize]);
        }
    }

    // Interleaved across threads
    std::thread::scope(|scope| {
        for worker in 0..4u32 {
            let animations = &animations;
            let serial = &serial;
            scope.spawn(move || {
                for (animated, expected) in animations.iter().zip(serial) {
                    for frame in (worker..60).step_by(4) {
                        assert_eq!(&sample(frame, None, animated), &expected[frame as usize]);
                    }
                }
            });
        }
    });
}

#[test]
fn interpolation_clamps_at_both_ends() {
    let linear = InterpolateOptions::clamp().easing(Easing::Linear);
    assert_eq!(interpolate(-5.0, [0.0, 30.0], [0.0, 1.0], linear), Ok(0.0));
    assert_eq!(interpolate(35.0, [0.0, 30.0], [0.0, 1.0], linear), Ok(1.0));
    assert_eq!(interpolate(15.0, [0.0, 30.0], [0.0, 1.0], linear), Ok(0.5));
}

#[test]
fn every_easing_keeps_its_endpoints() {
    let mut curves = Easing::NAMED.to_vec();
    curves.push(Easing::CubicBezier(0.68, -0.55, 0.27, 1.55));
    for easing in curves {
        assert_eq!(easing.apply(0.0), 0.0, "{easing}");
        assert_eq!(easing.apply(1.0), 1.0, "{easing}");
    }
}

#[test]
fn spring_settles_at_duration_and_stays() {
    for frame in [30.0, 31.0, 45.0, 300.0] {
        let sample = SpringSample::new(frame, 30.0).duration(30.0);
        assert!((spring(&sample) - 1.0).abs() <= 0.005, "frame {frame}");
    }
    assert_eq!(spring(&SpringSample::new(30.0, 30.0).duration(30.0)), 1.0);
}

#[test]
fn reversed_spring_out_starts_at_one_and_ends_at_end_scale() {
    let exit = AnimationConfig::new(AnimationType::SpringOut)
        .with_duration(30)
        .with_custom("reverse", true)
        .with_custom("endScale", 0.0);
    let animated = Animated::Single(exit);

    assert_eq!(sample(0, None, &animated).transform(), Some("scale(1)"));
    assert_eq!(sample(30, None, &animated).transform(), Some("scale(0)"));
}

#[test]
fn dual_animation_switches_exactly_at_exit_frame() {
    let entry = AnimationConfig::new(AnimationType::SlideInLeft);
    let exit = AnimationConfig::new(AnimationType::FadeOut).with_duration(20);
    let animated = Animated::Dual(DualAnimation::new(entry.clone(), exit, 60));

    // Entry has long finished: fully in place
    let before = sample(59, None, &animated);
    assert_eq!(before, sample(59, None, &Animated::Single(entry)));
    assert_eq!(before.transform(), Some("translateX(0px)"));

    // Exit takes over with its own property set
    let at_switch = sample(60, None, &animated);
    assert_eq!(at_switch.opacity(), Some(1.0));
    assert!(at_switch.transform().is_none());
    assert_eq!(sample(80, None, &animated).opacity(), Some(0.0));
}

#[test]
fn staggered_items_reach_full_opacity_in_order() {
    let group = StaggerGroup::new(5, 5);
    let starts: Vec<u32> = (0..5).map(|i| group.item_delay(i)).collect();
    assert_eq!(starts, vec![0, 5, 10, 15, 20]);

    let sampler = FrameSampler::default();
    let animated: Animated = AnimationConfig::new(AnimationType::FadeIn).into();
    let first = first_fully_opaque(&sampler, &animated, 0);
    let fourth = first_fully_opaque(&sampler, &animated, 3);

    assert_eq!(first, Some(30));
    assert_eq!(fourth, Some(45));
    assert!(fourth > first);
}

#[test]
fn no_exit_is_identical_to_entry_alone() {
    let entry = AnimationConfig::new(AnimationType::ScaleIn).with_delay(5);
    let single = Animated::Single(entry.clone());
    let without_frame = Animated::Dual(DualAnimation::new(
        entry.clone(),
        AnimationConfig::new(AnimationType::FadeOut),
        0,
    ));
    let without_type = Animated::Dual(DualAnimation::entry_only(entry));

    for frame in 0..120 {
        let expected = sample(frame, None, &single);
        assert_eq!(sample(frame, None, &without_frame), expected);
        assert_eq!(sample(frame, None, &without_type), expected);
    }
}

#[test]
fn none_animation_produces_no_styles() {
    let animated = Animated::Single(AnimationConfig::none());
    assert!(sample(10, None, &animated).is_empty());
}
