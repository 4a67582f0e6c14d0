//! Benchmarks for modulator tree sampling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavescope::modulator::{Modulator, Signal};
use wavescope::scene::{presets, SceneState};

use crate::WIDTHS;

/// A chain where every node modulates the frequency of its parent
fn chain(depth: usize) -> Modulator {
    (0..depth).fold(Modulator::sine(0.1), |child, i| {
        Modulator::sine(0.1 + i as f64 * 0.05).with_frequency_modulator(child)
    })
}

pub fn bench_modulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/modulator");

    // Leaf - a single sin() per sample
    let leaf = Modulator::sine(0.5);
    group.bench_function("leaf", |b| b.iter(|| leaf.sample(black_box(12.34))));

    // Recursion cost grows with depth
    for depth in [1, 4, 16] {
        let tree = chain(depth);
        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |b, _| {
            b.iter(|| tree.sample(black_box(12.34)))
        });
    }

    // Whole scene mix into the points buffer
    for &width in WIDTHS {
        let mut state = SceneState::new(width, presets::filled_curve()).unwrap();
        state.time = 3.0;
        group.bench_with_input(BenchmarkId::new("recompute", width), &width, |b, _| {
            b.iter(|| {
                state.recompute();
                black_box(state.points());
            })
        });
    }

    group.finish();
}
