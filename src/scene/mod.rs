//! The animated scene: state, pacing and drawing wired together.
//!
//! A [`Scene`] owns its [`SceneState`] and [`FrameDriver`] outright. Host
//! glue hands it refreshes, clicks and a surface; nothing is global.

/// Variant selection and scene configuration.
pub mod config;
/// Pointer clicks that steer simulation time.
pub mod input;
/// Hard-coded modulator trees.
pub mod presets;
/// Simulation time and the sample buffer.
pub mod state;

pub use config::{SceneConfig, Variant, CANVAS_SIZE, TARGET_FRAME_RATE};
pub use input::{apply_click, PointerButton, PointerClick};
pub use state::{SceneState, TimeDirection, TimeSpeed, POINT_LIMIT};

use crate::driver::{FrameDriver, Tick};
use crate::error::{Error, Result};
use crate::render::{self, Surface};

pub struct Scene {
    config: SceneConfig,
    state: SceneState,
    driver: FrameDriver,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        let canvas = config.canvas;
        if canvas.is_empty() {
            return Err(Error::InvalidDimensions {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let mode = config.variant.frame_mode(config.frame_rate)?;
        let state = SceneState::new(
            config.canvas.width as usize,
            config.variant.modulators(),
        )?;

        Ok(Self {
            config,
            state,
            driver: FrameDriver::new(mode),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Handle one host refresh observed at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> Tick {
        self.driver.tick(&mut self.state, now_ms)
    }

    /// Apply a click if this variant listens for them.
    pub fn click(&mut self, click: PointerClick) -> bool {
        if !self.config.variant.accepts_clicks() {
            return false;
        }
        apply_click(&mut self.state, click)
    }

    /// Draw the current state onto `surface`.
    ///
    /// The dot plot samples the trees here, at draw time; the filled curve
    /// draws the buffer its last refresh computed.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let style = self.config.variant.draw_style();
        match self.config.variant {
            Variant::DotPlot => render::render(surface, style, self.state.columns()),
            Variant::FilledCurve => {
                render::render(surface, style, self.state.points().iter().copied())
            }
        }
    }
}
