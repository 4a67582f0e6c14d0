//! Canvas widget - presents the raster with half-block cells

use std::ops::Range;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use wavescope::render::{color::BACKGROUND, Raster, Rgba, Surface};

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '▀';

/// Downscaled view of a raster, `columns` x `rows` cells, centred.
///
/// Each half-cell covers a block of raster pixels and shows the brightest
/// non-background pixel in it, so thin strokes and small dots survive.
pub struct RasterView<'a> {
    raster: &'a Raster,
    columns: u16,
    rows: u16,
}

impl<'a> RasterView<'a> {
    pub fn new(raster: &'a Raster, columns: u16, rows: u16) -> Self {
        Self {
            raster,
            columns,
            rows,
        }
    }
}

fn to_color(pixel: Rgba) -> Color {
    Color::Rgb(pixel.r, pixel.g, pixel.b)
}

fn luma(pixel: Rgba) -> u32 {
    299 * u32::from(pixel.r) + 587 * u32::from(pixel.g) + 114 * u32::from(pixel.b)
}

/// Pixels `index` of `parts` covers along an axis of `len` pixels; never empty
fn span(index: u64, parts: u64, len: u64) -> Range<u32> {
    let start = (index * len / parts).min(len.saturating_sub(1));
    let end = ((index + 1) * len / parts).max(start + 1);
    start as u32..end as u32
}

/// Brightest non-background pixel of the block, else its first pixel
fn reduce(raster: &Raster, xs: Range<u32>, ys: Range<u32>) -> Option<Rgba> {
    let first = raster.pixel(xs.start, ys.start)?;
    let ink = ys
        .flat_map(|y| xs.clone().filter_map(move |x| raster.pixel(x, y)))
        .filter(|&pixel| pixel != BACKGROUND)
        .max_by_key(|&pixel| luma(pixel));
    Some(ink.unwrap_or(first))
}

impl Widget for RasterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.columns.min(area.width);
        let rows = self.rows.min(area.height);
        if columns == 0 || rows == 0 {
            return;
        }

        let left = area.x + (area.width - columns) / 2;
        let top = area.y + (area.height - rows) / 2;

        let width = u64::from(self.raster.width());
        let height = u64::from(self.raster.height());
        let sub_rows = u64::from(rows) * 2;

        for cy in 0..rows {
            let upper_ys = span(u64::from(cy) * 2, sub_rows, height);
            let lower_ys = span(u64::from(cy) * 2 + 1, sub_rows, height);

            for cx in 0..columns {
                let xs = span(u64::from(cx), u64::from(columns), width);
                let (Some(upper), Some(lower)) = (
                    reduce(self.raster, xs.clone(), upper_ys.clone()),
                    reduce(self.raster, xs, lower_ys.clone()),
                ) else {
                    continue;
                };

                if let Some(cell) = buf.cell_mut((left + cx, top + cy)) {
                    cell.set_char(HALF_BLOCK)
                        .set_fg(to_color(upper))
                        .set_bg(to_color(lower));
                }
            }
        }
    }
}
