//! Full-frame benchmarks.
//!
//! These mirror what the terminal front-end does per refresh: advance the
//! driver, sample, and draw into the raster.

mod frames;

pub use frames::bench_frames;
