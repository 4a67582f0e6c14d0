//! Benchmarks for complete frames of each variant.

use std::hint::black_box;

use criterion::Criterion;
use wavescope::render::Raster;
use wavescope::{Scene, SceneConfig, Variant};

pub fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/frames");

    for variant in [Variant::DotPlot, Variant::FilledCurve] {
        let config = SceneConfig::new(variant);
        let mut scene = Scene::new(config).unwrap();
        let mut raster = Raster::new(config.canvas.width, config.canvas.height).unwrap();
        let mut now = 0.0;
        scene.frame(now);

        // Render every iteration so the throttled variant is measured at its
        // redraw cost rather than its idle cost
        group.bench_function(variant.name(), |b| {
            b.iter(|| {
                now += 1000.0 / 60.0;
                black_box(scene.frame(now));
                scene.render(&mut raster);
                black_box(raster.pixels());
            })
        });
    }

    group.finish();
}
