//! Benchmarks for the building blocks of a frame.

mod modulator;
mod raster;

pub use modulator::bench_modulator;
pub use raster::bench_raster;
