#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour at `opacity` (0.0..=1.0, clamped).
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Source-over composite of `self` on top of `dst`.
    ///
    /// The result is always opaque since the backing buffer is.
    pub fn over(self, dst: Rgba) -> Rgba {
        if self.a == 255 {
            return self;
        }
        let alpha = self.a as f32 / 255.0;
        let mix = |src: u8, dst: u8| -> u8 {
            (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
        };
        Rgba {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: 255,
        }
    }
}

/// Frame clear colour.
pub const BACKGROUND: Rgba = Rgba::rgb(17, 18, 18);
/// Waveform colour for dots, strokes and fills.
pub const INK: Rgba = Rgba::rgb(180, 160, 120);
/// Opacity of the silhouette under the filled curve.
pub const FILL_OPACITY: f64 = 0.25;
