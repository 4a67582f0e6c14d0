//! Drawing the scene onto a 2D raster surface.
//!
//! The [`Surface`] trait mirrors the small subset of a canvas 2D context the
//! renderer needs. [`Raster`] is the in-memory implementation used by the
//! terminal front-end and by tests; any other host can implement the trait
//! directly.

/// RGBA colours and the scene palette.
pub mod color;
/// Scene renderers (dot plot and filled curve).
pub mod draw;
/// In-memory pixel buffer implementing `Surface`.
pub mod raster;
/// The drawing-surface trait.
pub mod surface;

pub use color::Rgba;
pub use draw::{render, DrawStyle};
pub use raster::Raster;
pub use surface::{LineCap, Surface};
