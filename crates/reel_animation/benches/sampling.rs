//! Frame Sampling Benchmarks
//!
//! Benchmarks for per-frame style evaluation across animation families.
//!
//! Run with: `cargo bench --bench sampling`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reel_animation::{
    measure_spring, AnimationConfig, AnimationPreset, AnimationType, Animated, FrameSampler,
    SpringConfig,
};

fn bench_single_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_frame");
    let sampler = FrameSampler::default();

    for kind in [
        AnimationType::FadeIn,
        AnimationType::SlideInLeft,
        AnimationType::SpringIn,
        AnimationType::Swing,
        AnimationType::Glitch,
    ] {
        let animated = Animated::Single(AnimationConfig::new(kind));
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.name()),
            &animated,
            |bench, animated: &Animated| {
                bench.iter(|| black_box(sampler.styles_at(black_box(15), animated)));
            },
        );
    }

    group.finish();
}

fn bench_full_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_range");
    let sampler = FrameSampler::default();

    for frames in [30u32, 90, 300] {
        let animated = Animated::Dual(AnimationPreset::player_card(frames / 2));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_frames", frames)),
            &animated,
            |bench, animated: &Animated| {
                bench.iter(|| black_box(sampler.sample_range(0..frames, animated)));
            },
        );
    }

    group.finish();
}

fn bench_measure_spring(c: &mut Criterion) {
    c.bench_function("measure_spring_wobbly", |bench| {
        bench.iter(|| measure_spring(black_box(&SpringConfig::wobbly()), 30.0, 0.005));
    });
}

criterion_group!(
    benches,
    bench_single_frame,
    bench_full_range,
    bench_measure_spring
);
criterion_main!(benches);
