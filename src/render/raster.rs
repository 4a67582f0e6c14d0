use line_2d::Coord;

use super::{LineCap, Rgba, Surface};
use crate::error::{Error, Result};

/*
Raster Surface
==============

A fixed-size grid of opaque RGBA pixels plus the drawing state of a canvas
2D context (fill/stroke colour, line width, line cap, current path).

Shapes are rasterised into a coverage mask first and composited once, so
a translucent fill never darkens where its own edges overlap.


Strokes
-------

Each segment is walked with `line_2d` and a brush is stamped at every
visited pixel:

  Butt / Square   square brush, side = line width
  Round           disc brush, diameter = line width

Caps are therefore approximate: a square brush already overhangs the
endpoint by half the width, which is what `Square` asks for and slightly more
than `Butt` would draw.


Fills
-----

Even-odd scanline fill sampled at pixel centres. Every subpath is treated
as closed for filling, the same as a canvas context does.
*/

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<(f64, f64)>,
    closed: bool,
}

#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    fill_color: Rgba,
    stroke_color: Rgba,
    line_width: f64,
    line_cap: LineCap,
    path: Vec<Subpath>,
}

impl Raster {
    /// Create a black raster. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::rgb(0, 0, 0); width as usize * height as usize],
            fill_color: Rgba::rgb(0, 0, 0),
            stroke_color: Rgba::rgb(0, 0, 0),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            path: Vec::new(),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x as i64, y as i64)])
        } else {
            None
        }
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    fn composite(&mut self, mask: &[bool], color: Rgba) {
        for (pixel, &covered) in self.pixels.iter_mut().zip(mask) {
            if covered {
                *pixel = color.over(*pixel);
            }
        }
    }

    fn stamp(&self, mask: &mut [bool], center: Coord) {
        let half = ((self.line_width - 1.0) / 2.0).ceil().max(0.0) as i64;
        let radius_sq = (self.line_width / 2.0).powi(2);

        for dy in -half..=half {
            for dx in -half..=half {
                if self.line_cap == LineCap::Round
                    && half > 0
                    && (dx * dx + dy * dy) as f64 > radius_sq
                {
                    continue;
                }
                let x = center.x as i64 + dx;
                let y = center.y as i64 + dy;
                if self.contains(x, y) {
                    mask[self.index(x, y)] = true;
                }
            }
        }
    }

    fn stroke_segment(&self, mask: &mut [bool], from: (f64, f64), to: (f64, f64)) {
        let start = to_coord(from);
        let end = to_coord(to);

        self.stamp(mask, start);
        if start != end {
            for coord in line_2d::coords_between(start, end) {
                self.stamp(mask, coord);
            }
            self.stamp(mask, end);
        }
    }

    fn edges(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.path
            .iter()
            .filter(|subpath| subpath.points.len() > 1)
            .flat_map(|subpath| {
                let points = &subpath.points;
                let closing = (points[points.len() - 1], points[0]);
                points
                    .windows(2)
                    .map(|pair| (pair[0], pair[1]))
                    .chain(std::iter::once(closing))
            })
    }

    fn current_subpath(&mut self) -> Option<&mut Subpath> {
        self.path.last_mut().filter(|subpath| !subpath.closed)
    }
}

fn to_coord((x, y): (f64, f64)) -> Coord {
    Coord::new(x.round() as i32, y.round() as i32)
}

impl Surface for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores non-positive and non-finite widths
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (left, right) = (x.min(x + width), x.max(x + width));
        let (top, bottom) = (y.min(y + height), y.max(y + height));

        let x0 = (left.round() as i64).max(0);
        let x1 = (right.round() as i64).min(self.width as i64);
        let y0 = (top.round() as i64).max(0);
        let y1 = (bottom.round() as i64).min(self.height as i64);

        let color = self.fill_color;
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = self.index(px, py);
                self.pixels[idx] = color.over(self.pixels[idx]);
            }
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Subpath {
            points: vec![(x, y)],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.current_subpath() {
            Some(subpath) => subpath.points.push((x, y)),
            // With no open subpath, line_to behaves like move_to
            None => self.move_to(x, y),
        }
    }

    fn close_path(&mut self) {
        let start = match self.current_subpath() {
            Some(subpath) => {
                subpath.closed = true;
                subpath.points[0]
            }
            None => return,
        };
        // Drawing continues from the start of the subpath just closed
        self.move_to(start.0, start.1);
    }

    fn stroke(&mut self) {
        let mut mask = vec![false; self.pixels.len()];

        for subpath in &self.path {
            for pair in subpath.points.windows(2) {
                self.stroke_segment(&mut mask, pair[0], pair[1]);
            }
            if subpath.closed && subpath.points.len() > 1 {
                let last = subpath.points[subpath.points.len() - 1];
                self.stroke_segment(&mut mask, last, subpath.points[0]);
            }
        }

        let color = self.stroke_color;
        self.composite(&mask, color);
    }

    fn fill(&mut self) {
        let mut mask = vec![false; self.pixels.len()];
        let mut crossings = Vec::new();

        for row in 0..self.height as i64 {
            let cy = row as f64 + 0.5;

            crossings.clear();
            for ((x0, y0), (x1, y1)) in self.edges() {
                if (y0 <= cy) != (y1 <= cy) {
                    crossings.push(x0 + (cy - y0) * (x1 - x0) / (y1 - y0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - 0.5).ceil() as i64).max(0);
                let end = ((span[1] - 0.5).ceil() as i64).min(self.width as i64);
                for col in start..end {
                    let idx = self.index(col, row);
                    mask[idx] = true;
                }
            }
        }

        let color = self.fill_color;
        self.composite(&mask, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    fn count(raster: &Raster, color: Rgba) -> usize {
        raster.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Raster::new(0, 10).unwrap_err(),
            Error::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
        assert!(Raster::new(10, 0).is_err());
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_fill_color(RED);
        raster.fill_rect(2.0, 3.0, 5.0, 5.0);

        assert_eq!(count(&raster, RED), 25);
        assert_eq!(raster.pixel(2, 3), Some(RED));
        assert_eq!(raster.pixel(6, 7), Some(RED));
        assert_eq!(raster.pixel(7, 7), Some(BLACK));
        assert_eq!(raster.pixel(1, 3), Some(BLACK));
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut raster = Raster::new(4, 4).unwrap();
        raster.set_fill_color(RED);
        raster.fill_rect(-2.0, -2.0, 5.0, 5.0);
        // Covers [0, 3) x [0, 3)
        assert_eq!(count(&raster, RED), 9);

        raster.fill_rect(100.0, 100.0, 5.0, 5.0);
        assert_eq!(count(&raster, RED), 9);
    }

    #[test]
    fn translucent_fill_rect_blends() {
        let mut raster = Raster::new(2, 1).unwrap();
        raster.set_fill_color(Rgba::rgb(200, 200, 200).with_opacity(0.5));
        raster.fill_rect(0.0, 0.0, 1.0, 1.0);
        let p = raster.pixel(0, 0).unwrap();
        assert!((p.r as i32 - 100).abs() <= 1);
        assert_eq!(raster.pixel(1, 0), Some(BLACK));
    }

    #[test]
    fn horizontal_stroke_draws_line() {
        let mut raster = Raster::new(10, 5).unwrap();
        raster.set_stroke_color(RED);
        raster.begin_path();
        raster.move_to(1.0, 2.0);
        raster.line_to(8.0, 2.0);
        raster.stroke();

        for x in 1..=8 {
            assert_eq!(raster.pixel(x, 2), Some(RED), "missing pixel at x={x}");
        }
        assert_eq!(raster.pixel(0, 2), Some(BLACK));
        assert_eq!(raster.pixel(9, 2), Some(BLACK));
        assert_eq!(count(&raster, RED), 8);
    }

    #[test]
    fn wide_stroke_is_thicker() {
        let mut raster = Raster::new(20, 9).unwrap();
        raster.set_stroke_color(RED);
        raster.set_line_width(3.0);
        raster.begin_path();
        raster.move_to(5.0, 4.0);
        raster.line_to(15.0, 4.0);
        raster.stroke();

        for y in 3..=5 {
            assert_eq!(raster.pixel(10, y), Some(RED));
        }
        assert_eq!(raster.pixel(10, 2), Some(BLACK));
    }

    #[test]
    fn translucent_stroke_composites_once() {
        let ink = Rgba::rgb(200, 0, 0).with_opacity(0.5);
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_stroke_color(ink);
        raster.set_line_width(3.0);
        raster.begin_path();
        raster.move_to(1.0, 5.0);
        raster.line_to(8.0, 5.0);
        raster.line_to(8.0, 1.0);
        raster.stroke();

        let expected = ink.over(BLACK);
        assert!(raster
            .pixels()
            .iter()
            .all(|&p| p == BLACK || p == expected));
    }

    #[test]
    fn closed_path_strokes_closing_edge() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_stroke_color(RED);
        raster.begin_path();
        raster.move_to(1.0, 1.0);
        raster.line_to(8.0, 1.0);
        raster.line_to(8.0, 8.0);
        raster.close_path();
        raster.stroke();

        // Diagonal back to the start
        assert_eq!(raster.pixel(4, 4), Some(RED));
    }

    #[test]
    fn fill_rectangle_path() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_fill_color(RED);
        raster.begin_path();
        raster.move_to(2.0, 2.0);
        raster.line_to(6.0, 2.0);
        raster.line_to(6.0, 6.0);
        raster.line_to(2.0, 6.0);
        raster.close_path();
        raster.fill();

        assert_eq!(count(&raster, RED), 16);
        assert_eq!(raster.pixel(2, 2), Some(RED));
        assert_eq!(raster.pixel(5, 5), Some(RED));
        assert_eq!(raster.pixel(6, 6), Some(BLACK));
    }

    #[test]
    fn fill_treats_open_subpath_as_closed() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_fill_color(RED);
        raster.begin_path();
        raster.move_to(0.0, 0.0);
        raster.line_to(10.0, 0.0);
        raster.line_to(10.0, 10.0);
        raster.line_to(0.0, 10.0);
        raster.fill();
        assert_eq!(count(&raster, RED), 100);
    }

    #[test]
    fn begin_path_discards_previous_path() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_stroke_color(RED);
        raster.begin_path();
        raster.move_to(0.0, 0.0);
        raster.line_to(9.0, 0.0);
        raster.begin_path();
        raster.stroke();
        assert_eq!(count(&raster, RED), 0);
    }

    #[test]
    fn line_to_without_subpath_starts_one() {
        let mut raster = Raster::new(10, 10).unwrap();
        raster.set_stroke_color(RED);
        raster.begin_path();
        raster.line_to(2.0, 2.0);
        raster.line_to(5.0, 2.0);
        raster.stroke();
        assert_eq!(raster.pixel(2, 2), Some(RED));
        assert_eq!(raster.pixel(5, 2), Some(RED));
        assert_eq!(count(&raster, RED), 4);
    }

    #[test]
    fn round_cap_trims_brush_corners() {
        let mut round = Raster::new(11, 11).unwrap();
        round.set_stroke_color(RED);
        round.set_line_width(5.0);
        round.set_line_cap(LineCap::Round);
        round.begin_path();
        round.move_to(5.0, 5.0);
        round.line_to(5.0, 5.0);
        round.stroke();

        let mut square = round.clone();
        square.set_line_cap(LineCap::Square);
        square.stroke();

        assert_eq!(round.pixel(5, 5), Some(RED));
        assert_eq!(round.pixel(3, 3), Some(BLACK));
        assert_eq!(square.pixel(3, 3), Some(RED));
    }
}
