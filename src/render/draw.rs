#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    color::{BACKGROUND, FILL_OPACITY, INK},
    LineCap, Surface,
};

/// Side length of each plotted dot, in logical pixels.
pub const DOT_SIZE: f64 = 5.0;
/// Stroke width of the filled-curve outline.
pub const CURVE_LINE_WIDTH: f64 = 2.0;

/// How sample values are turned into pixels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    /// One small filled square per column.
    Points,
    /// A stroked polyline with a translucent silhouette beneath it.
    FilledCurve,
}

/// Vertical pixel position of `value` (nominally -1..1) on a surface `height` tall.
#[inline]
pub fn value_to_y(value: f64, height: f64) -> f64 {
    height * 0.5 + height * 0.5 * value
}

/// Clear `surface` and draw one sample per column, column `i` at `x = i`.
pub fn render<S, I>(surface: &mut S, style: DrawStyle, values: I)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let width = surface.width() as f64;
    let height = surface.height() as f64;

    surface.set_fill_color(BACKGROUND);
    surface.fill_rect(0.0, 0.0, width, height);

    match style {
        DrawStyle::Points => draw_points(surface, values, height),
        DrawStyle::FilledCurve => draw_curve(surface, values, width, height),
    }
}

fn draw_points<S, I>(surface: &mut S, values: I, height: f64)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let offset = (DOT_SIZE / 2.0).floor();
    surface.set_fill_color(INK);

    for (i, value) in values.into_iter().enumerate() {
        let x = i as f64;
        // Snap to whole pixels so dots keep a crisp 5x5 footprint
        let y = value_to_y(value, height).trunc();
        surface.fill_rect(x - offset, y - offset, DOT_SIZE, DOT_SIZE);
    }
}

fn draw_curve<S, I>(surface: &mut S, values: I, width: f64, height: f64)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = f64>,
{
    surface.set_stroke_color(INK);
    surface.set_line_width(CURVE_LINE_WIDTH);
    surface.set_line_cap(LineCap::Round);
    surface.begin_path();

    let mut drawn = 0usize;
    for (i, value) in values.into_iter().enumerate() {
        let x = i as f64;
        let y = value_to_y(value, height);
        if i == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
        drawn += 1;
    }

    if drawn == 0 {
        return;
    }

    surface.stroke();

    surface.line_to(width, height);
    surface.line_to(0.0, height);
    surface.close_path();
    surface.set_fill_color(INK.with_opacity(FILL_OPACITY));
    surface.fill();
}
