//! Benchmarks for raster drawing primitives.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavescope::render::{LineCap, Raster, Rgba, Surface};

use crate::WIDTHS;

pub fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/raster");

    for &width in WIDTHS {
        let height = width as u32 * 3 / 4;
        let mut raster = Raster::new(width as u32, height).unwrap();

        // Full clear - the first thing every frame does
        group.bench_with_input(BenchmarkId::new("clear", width), &width, |b, _| {
            b.iter(|| {
                raster.set_fill_color(Rgba::rgb(17, 18, 18));
                raster.fill_rect(0.0, 0.0, width as f64, height as f64);
            })
        });

        // Zig-zag polyline, one vertex per column
        group.bench_with_input(BenchmarkId::new("stroke", width), &width, |b, _| {
            b.iter(|| {
                raster.set_line_width(2.0);
                raster.set_line_cap(LineCap::Round);
                raster.begin_path();
                for x in 0..width {
                    let y = (if x % 2 == 0 { 0.25 } else { 0.75 }) * height as f64;
                    raster.line_to(x as f64, y);
                }
                raster.stroke();
                black_box(raster.pixels());
            })
        });

        // Translucent silhouette under the same zig-zag
        group.bench_with_input(BenchmarkId::new("fill", width), &width, |b, _| {
            b.iter(|| {
                raster.set_fill_color(Rgba::rgb(180, 160, 120).with_opacity(0.25));
                raster.fill();
                black_box(raster.pixels());
            })
        });
    }

    group.finish();
}
