//! Integer upscaling of the fixed logical canvas into the host display.
//!
//! The backing raster never changes size. Only the displayed size grows, by
//! whole multiples of the logical size, so every logical pixel maps onto a
//! square block of display pixels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height in pixels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Space reserved around the canvas for the surrounding page furniture.
pub const DEFAULT_MARGIN: Size = Size::new(80, 160);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub logical: Size,
    pub scale: u32,
}

impl Viewport {
    /// Fit `logical` into `client` minus `margin`.
    ///
    /// Picks the largest `k` with `k * width < container_width` and
    /// `k * height < container_height`, growing one whole multiple at a time.
    /// When not even one multiple fits, `scale` is 0 and the displayed size
    /// collapses to 0x0. A zero-sized logical canvas also yields scale 0.
    pub fn fit(logical: Size, client: Size, margin: Size) -> Self {
        if logical.is_empty() {
            return Self { logical, scale: 0 };
        }

        // Signed so a margin larger than the client simply fits nothing
        let container_width = i64::from(client.width) - i64::from(margin.width);
        let container_height = i64::from(client.height) - i64::from(margin.height);

        let mut scale = 0;
        let mut width = 0i64;
        let mut height = 0i64;

        loop {
            let next_width = width + i64::from(logical.width);
            let next_height = height + i64::from(logical.height);

            if next_width < container_width && next_height < container_height {
                width = next_width;
                height = next_height;
                scale += 1;
                continue;
            }

            break;
        }

        Self { logical, scale }
    }

    /// Size the canvas occupies on the display.
    pub fn displayed(&self) -> Size {
        Size {
            width: self.logical.width * self.scale,
            height: self.logical.height * self.scale,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.scale == 0
    }
}
