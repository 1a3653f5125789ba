//! Graphics rendering functions
//!
//! This module provides integer scan-conversion of shapes directly into a
//! raster:
//! - Lines (Bresenham)
//! - Rectangles (outline, filled)
//! - Circles (midpoint, outline, filled)
//! - Triangles (outline, filled)
//! - Polygons (outline, even-odd scanline fill)
//!
//! Every primitive clips silently: writes whose target falls outside
//! `[0, width) x [0, height)` are dropped, and off-canvas geometry is never
//! an error. Coordinates are widened to `i64`, and edge interpolation
//! products to `i128`, so extreme `i32` inputs cannot overflow. Lines only
//! visit their on-canvas steps; circles that miss or enclose the canvas are
//! resolved without walking them.

use super::{Pixel, Raster};
use std::ops::RangeInclusive;

/// Integer point used by the rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// X coordinate of the edge `p -> q` at scanline `y`.
///
/// The exact rational value is truncated toward zero as a whole, so both
/// orientations of an edge give the same column. A horizontal edge yields
/// its end point. `y` must lie within the edge's y range; the result then
/// lies between `p.x` and `q.x`.
#[inline]
fn edge_x(p: Point, q: Point, y: i64) -> i64 {
    let (px, py, qx, qy) = (p.x as i128, p.y as i128, q.x as i128, q.y as i128);
    if py == qy {
        return q.x as i64;
    }
    let (num, den) = (px * (qy - py) + (qx - px) * (y as i128 - py), qy - py);
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    (num / den) as i64
}

/// Where a circle lies relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CircleReach {
    /// No pixel of the circle or its disc is on the canvas
    Outside,
    /// The outline misses the canvas and the disc covers all of it
    Encloses,
    /// The outline may touch the canvas
    Crosses,
}

/// Steps `k` in `0..=len` for which `start + step * k` falls in `0..extent`.
fn major_steps(start: i64, step: i64, len: i64, extent: u32) -> RangeInclusive<i64> {
    let last = extent as i64 - 1;
    let (lo, hi) = if step > 0 {
        (-start, last - start)
    } else {
        (start - last, start)
    };
    lo.max(0)..=hi.min(len)
}

/// Minor-axis offset of a Bresenham walk after `k` major-axis steps.
///
/// With `f = 2 * err`, the walk keeps `f` in `[major - 2 * minor,
/// 3 * major - 2 * minor)` and takes a minor step exactly when
/// `f < major`, so the offset is `ceil((2 * k * minor - major) / (2 * major))`.
fn minor_offset(k: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let num = 2 * k as i128 * minor as i128 - major as i128;
    let den = 2 * major as i128;
    (num + den - 1).div_euclid(den) as i64
}

impl<P: Pixel> Raster<P> {
    /// Clamp an inclusive row range to the canvas. An empty canvas has no
    /// rows.
    #[inline]
    fn clip_rows(&self, y1: i64, y2: i64) -> RangeInclusive<i64> {
        if self.is_empty() {
            return 1..=0;
        }
        y1.max(0)..=y2.min(self.height() as i64 - 1)
    }

    /// Fill the inclusive span `x1..=x2` on row `y`. Endpoints may come in
    /// either order.
    fn draw_horizontal_line(&mut self, x1: i64, x2: i64, y: i64, color: P) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let lo = lo.max(0);
        let hi = hi.min(self.width() as i64 - 1);
        if lo > hi {
            return;
        }
        self.row_mut(y as u32)[lo as usize..=hi as usize].fill(color);
    }

    /// Draw a line from `p1` to `p2` (both endpoints included).
    ///
    /// The pixels are those of the integer Bresenham walk with decision
    /// variable `err = dx - dy`. Each pixel's position is computed from its
    /// major-axis step, so only steps landing on the canvas are visited.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: P) {
        if self.is_empty() {
            return;
        }
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let (x2, y2) = (p2.x as i64, p2.y as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };

        if dx >= dy {
            for k in major_steps(x1, sx, dx, self.width()) {
                let j = minor_offset(k, dx, dy);
                self.put_clipped(x1 + sx * k, y1 + sy * j, color);
            }
        } else {
            for k in major_steps(y1, sy, dy, self.height()) {
                let j = minor_offset(k, dy, dx);
                self.put_clipped(x1 + sx * j, y1 + sy * k, color);
            }
        }
    }

    /// Draw a rectangle outline with top-left corner `p1`.
    ///
    /// Top and bottom rows are drawn in full; the left and right columns
    /// skip the corners. A zero `width` or `height` draws nothing.
    pub fn draw_rectangle(&mut self, p1: Point, width: u32, height: u32, color: P) {
        if width == 0 || height == 0 {
            return;
        }
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let x2 = x1 + width as i64 - 1;
        let y2 = y1 + height as i64 - 1;

        self.draw_horizontal_line(x1, x2, y1, color);
        self.draw_horizontal_line(x1, x2, y2, color);
        for y in self.clip_rows(y1 + 1, y2 - 1) {
            self.put_clipped(x1, y, color);
            self.put_clipped(x2, y, color);
        }
    }

    /// Fill every pixel of the `width` x `height` box at `p1`.
    pub fn draw_filled_rectangle(&mut self, p1: Point, width: u32, height: u32, color: P) {
        if width == 0 || height == 0 {
            return;
        }
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let x2 = x1 + width as i64 - 1;
        let y2 = y1 + height as i64 - 1;
        for y in self.clip_rows(y1, y2) {
            self.draw_horizontal_line(x1, x2, y, color);
        }
    }

    /// Walk one octant of a midpoint circle, calling `f(x, y)` for each step.
    ///
    /// `x` starts at `radius`, `y` at 0; the walk ends once `x < y`.
    fn walk_circle(radius: u32, mut f: impl FnMut(i64, i64)) {
        let mut x = radius as i64;
        let mut y = 0i64;
        let mut err = 0i64;

        while x >= y {
            f(x, y);
            y += 1;
            if err <= 0 {
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }

    /// Classify a circle against the canvas without walking it.
    ///
    /// Midpoint walk points lie within 1.5 pixels of the true radius, so a
    /// canvas whose farthest pixel is more than 3 pixels inside the radius
    /// is untouched by the outline and fully covered by the disc.
    fn circle_reach(&self, cx: i64, cy: i64, radius: u32) -> CircleReach {
        let r = radius as i64;
        let (w, h) = (self.width() as i64, self.height() as i64);
        if w == 0 || h == 0 || cx + r < 0 || cx - r >= w || cy + r < 0 || cy - r >= h {
            return CircleReach::Outside;
        }
        let far_x = cx.abs().max((cx - (w - 1)).abs()) as i128;
        let far_y = cy.abs().max((cy - (h - 1)).abs()) as i128;
        let inner = (r - 3) as i128;
        if r > 3 && far_x * far_x + far_y * far_y < inner * inner {
            CircleReach::Encloses
        } else {
            CircleReach::Crosses
        }
    }

    /// Draw a circle outline using eight-way symmetry.
    pub fn draw_circle(&mut self, center: Point, radius: u32, color: P) {
        let (cx, cy) = (center.x as i64, center.y as i64);
        if self.circle_reach(cx, cy, radius) != CircleReach::Crosses {
            return;
        }
        Self::walk_circle(radius, |x, y| {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-x, y),
                (-y, x),
                (-x, -y),
                (-y, -x),
                (x, -y),
                (y, -x),
            ] {
                self.put_clipped(cx + dx, cy + dy, color);
            }
        });
    }

    /// Draw a filled circle.
    ///
    /// Each octant step fills the horizontal spans between its symmetric
    /// x-extents on rows `cy ± y` and `cy ± x`.
    pub fn draw_filled_circle(&mut self, center: Point, radius: u32, color: P) {
        let (cx, cy) = (center.x as i64, center.y as i64);
        match self.circle_reach(cx, cy, radius) {
            CircleReach::Outside => return,
            CircleReach::Encloses => {
                self.fill(color);
                return;
            }
            CircleReach::Crosses => {}
        }
        Self::walk_circle(radius, |x, y| {
            self.draw_horizontal_line(cx - x, cx + x, cy + y, color);
            self.draw_horizontal_line(cx - x, cx + x, cy - y, color);
            self.draw_horizontal_line(cx - y, cx + y, cy + x, color);
            self.draw_horizontal_line(cx - y, cx + y, cy - x, color);
        });
    }

    /// Draw a triangle outline (its three edges).
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p1, color);
    }

    /// Draw a filled triangle.
    ///
    /// Vertices are sorted by ascending y. The top half (`v1.y..=v2.y`) spans
    /// between edges `v1 -> v2` and `v1 -> v3`; the bottom half
    /// (`v2.y + 1..=v3.y`) between `v2 -> v3` and `v1 -> v3`.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [a, b, c] = v;

        if a.y == c.y {
            let lo = a.x.min(b.x).min(c.x);
            let hi = a.x.max(b.x).max(c.x);
            self.draw_horizontal_line(lo as i64, hi as i64, a.y as i64, color);
            return;
        }

        for y in self.clip_rows(a.y as i64, b.y as i64) {
            self.draw_horizontal_line(edge_x(a, b, y), edge_x(a, c, y), y, color);
        }
        for y in self.clip_rows(b.y as i64 + 1, c.y as i64) {
            self.draw_horizontal_line(edge_x(b, c, y), edge_x(a, c, y), y, color);
        }
    }

    /// Draw a closed polygon outline.
    ///
    /// Fewer than three vertices draws nothing.
    pub fn draw_polygon(&mut self, points: &[Point], color: P) {
        if points.len() < 3 {
            return;
        }
        for (i, &p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            self.draw_line(p, q, color);
        }
    }

    /// Fill a polygon with the even-odd rule.
    ///
    /// For each scanline between the minimum and maximum vertex y, every edge
    /// with one end at or above the line and the other strictly below it
    /// contributes one intersection. Intersections are sorted and spans are
    /// drawn between pairs `[0, 1], [2, 3], ...`. Self-intersecting input is
    /// filled by parity, not winding. Fewer than three vertices draws nothing.
    pub fn draw_filled_polygon(&mut self, points: &[Point], color: P) {
        let n = points.len();
        if n < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0) as i64;
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0) as i64;

        let mut xs: Vec<i64> = Vec::with_capacity(n);
        for y in self.clip_rows(min_y, max_y) {
            xs.clear();
            for (i, &p) in points.iter().enumerate() {
                let q = points[(i + 1) % n];
                let (yi, yj) = (p.y as i64, q.y as i64);
                if (yi <= y && yj > y) || (yj <= y && yi > y) {
                    xs.push(edge_x(p, q, y));
                }
            }
            xs.sort_unstable();
            for pair in xs.chunks_exact(2) {
                self.draw_horizontal_line(pair[0], pair[1], y, color);
            }
        }
    }
}
