pub mod driver; // Frame pacing and the run loop
pub mod error;
pub mod modulator; // Time-driven signal trees
pub mod render;
pub mod scene; // State, variants and input
pub mod viewport;

pub use error::{Error, Result};
pub use scene::{Scene, SceneConfig, Variant};
