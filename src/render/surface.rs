use super::Rgba;

/// How the ends of stroked lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end at the endpoint.
    #[default]
    Butt,
    /// Semicircle of the line width around the endpoint.
    Round,
    /// Square extending half the line width past the endpoint.
    Square,
}

/// Fixed-size 2D raster target, modelled on a canvas 2D context.
///
/// Coordinates are in logical pixels with the origin at the top-left. Path
/// operations accumulate into a current path that `stroke` and `fill` consume
/// without clearing; `begin_path` starts a fresh one.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn set_fill_color(&mut self, color: Rgba);

    fn set_stroke_color(&mut self, color: Rgba);

    fn set_line_width(&mut self, width: f64);

    fn set_line_cap(&mut self, cap: LineCap);

    /// Fill an axis-aligned rectangle with the current fill colour.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Stroke the current path with the stroke colour, width and cap.
    fn stroke(&mut self);

    /// Fill the current path with the fill colour (even-odd rule).
    fn fill(&mut self);
}
