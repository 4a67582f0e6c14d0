#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::presets;
use crate::driver::FrameMode;
use crate::error::Result;
use crate::modulator::Modulator;
use crate::render::DrawStyle;
use crate::viewport::{Size, DEFAULT_MARGIN};

/// Logical canvas size; also the number of sample columns.
pub const CANVAS_SIZE: Size = Size::new(320, 240);
/// Redraw rate of the throttled dot plot, in frames per second.
pub const TARGET_FRAME_RATE: f64 = 15.0;

/// The two ways the scene can be animated and drawn.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Throttled snapshots drawn as discrete dots.
    #[default]
    DotPlot,
    /// Continuously integrated time drawn as a filled curve; clicks steer time.
    FilledCurve,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::DotPlot => "dot plot",
            Variant::FilledCurve => "filled curve",
        }
    }

    pub fn draw_style(self) -> DrawStyle {
        match self {
            Variant::DotPlot => DrawStyle::Points,
            Variant::FilledCurve => DrawStyle::FilledCurve,
        }
    }

    pub fn frame_mode(self, frame_rate: f64) -> Result<FrameMode> {
        match self {
            Variant::DotPlot => FrameMode::throttled(frame_rate),
            Variant::FilledCurve => Ok(FrameMode::Continuous),
        }
    }

    /// Whether pointer clicks steer time.
    pub fn accepts_clicks(self) -> bool {
        matches!(self, Variant::FilledCurve)
    }

    /// The hard-coded modulator trees for this variant.
    pub fn modulators(self) -> Vec<Modulator> {
        match self {
            Variant::DotPlot => presets::dot_plot(),
            Variant::FilledCurve => presets::filled_curve(),
        }
    }
}

/// Everything needed to build a [`Scene`](super::Scene).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub variant: Variant,
    /// Logical canvas size. The width is also the number of sample columns.
    pub canvas: Size,
    /// Throttled redraw rate (dot plot only).
    pub frame_rate: f64,
    /// Space kept free around the canvas when fitting the viewport.
    pub margin: Size,
}

impl SceneConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            canvas: CANVAS_SIZE,
            frame_rate: TARGET_FRAME_RATE,
            margin: DEFAULT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_canvas() {
        let config = SceneConfig::default();
        assert_eq!(config.variant, Variant::DotPlot);
        assert_eq!(config.canvas, Size::new(320, 240));
        assert_eq!(config.frame_rate, 15.0);
        assert_eq!(config.margin, Size::new(80, 160));
    }

    #[test]
    fn variants_pick_their_modes() {
        assert_eq!(
            Variant::DotPlot.frame_mode(15.0),
            Ok(FrameMode::Throttled { frame_rate: 15.0 })
        );
        // Continuous mode has no frame rate to validate
        assert_eq!(Variant::FilledCurve.frame_mode(0.0), Ok(FrameMode::Continuous));
        assert!(Variant::DotPlot.frame_mode(0.0).is_err());

        assert_eq!(Variant::DotPlot.draw_style(), DrawStyle::Points);
        assert_eq!(Variant::FilledCurve.draw_style(), DrawStyle::FilledCurve);
        assert!(!Variant::DotPlot.accepts_clicks());
        assert!(Variant::FilledCurve.accepts_clicks());
    }
}
