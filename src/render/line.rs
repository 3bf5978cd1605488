//! Line rasterization for the wireframe render mode.
//!
//! Two interchangeable algorithms are provided:
//! - [`draw_bline`]: integer Bresenham, draws both endpoints.
//! - [`draw_midpoint_line`]: midpoint subdivision, draws interior points
//!   only and stops once a segment is shorter than two pixels.
//!
//! Both clip the segment to a guard band of one framebuffer size around the
//! visible area before stepping. Lines inside the guard band are drawn from
//! their exact endpoints; longer lines are cut at the band so the work stays
//! proportional to the framebuffer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::framebuffer::FrameBuffer;
use crate::colors::Color4;
use crate::math::vec2::Vec2;

/// Selects the algorithm used for wireframe edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineAlgorithm {
    /// Integer error-accumulation line drawing.
    #[default]
    Bresenham,
    /// Recursive midpoint subdivision, evaluated with an explicit stack.
    Midpoint,
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
            LineAlgorithm::Midpoint => write!(f, "Midpoint"),
        }
    }
}

/// Draws a line from `p0` to `p1` with the chosen algorithm.
pub fn draw_line(
    buffer: &mut FrameBuffer,
    p0: Vec2,
    p1: Vec2,
    color: Color4,
    algorithm: LineAlgorithm,
) {
    match algorithm {
        LineAlgorithm::Bresenham => draw_bline(buffer, p0, p1, color),
        LineAlgorithm::Midpoint => draw_midpoint_line(buffer, p0, p1, color),
    }
}

/// Draws a line between two points using Bresenham's line algorithm.
///
/// Endpoints are truncated to whole pixels. The error term starts at
/// `dx - dy`; each step moves along x when `2 * err > -dy` and along y when
/// `2 * err < dx`, so every octant is handled by the sign of the step.
pub fn draw_bline(buffer: &mut FrameBuffer, p0: Vec2, p1: Vec2, color: Color4) {
    let Some((p0, p1)) = clip_to_guard_band(buffer, p0, p1) else {
        return;
    };

    // Clipped coordinates fit comfortably; i64 keeps `2 * err` in range.
    let (mut x, mut y) = (p0.x as i64, p0.y as i64);
    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let x_incr_direction = if x < x1 { 1 } else { -1 };
    let y_incr_direction = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        buffer.draw_point(Vec2::new(x as f32, y as f32), color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_incr_direction;
        }
        if e2 < dx {
            err += dx;
            y += y_incr_direction;
        }
    }
}

/// Draws a line by repeatedly plotting the midpoint of each segment.
///
/// Segments shorter than two pixels are not subdivided further. The work
/// list is processed depth-first, left half before right half, which plots
/// points in the same order as the recursive formulation.
pub fn draw_midpoint_line(buffer: &mut FrameBuffer, p0: Vec2, p1: Vec2, color: Color4) {
    let Some((p0, p1)) = clip_to_guard_band(buffer, p0, p1) else {
        return;
    };

    let mut segments = vec![(p0, p1)];
    while let Some((start, end)) = segments.pop() {
        if (end - start).length() < 2.0 {
            continue;
        }
        let middle = start.midpoint(end);
        buffer.draw_point(middle, color);
        segments.push((middle, end));
        segments.push((start, middle));
    }
}

/// Rejects non-finite lines and lines whose endpoints are both beyond the
/// same framebuffer edge; no point of such a line can be drawn.
fn visible(buffer: &FrameBuffer, p0: Vec2, p1: Vec2) -> bool {
    if !(p0.x.is_finite() && p0.y.is_finite() && p1.x.is_finite() && p1.y.is_finite()) {
        return false;
    }
    let width = buffer.width() as f32;
    let height = buffer.height() as f32;
    !((p0.x < 0.0 && p1.x < 0.0)
        || (p0.y < 0.0 && p1.y < 0.0)
        || (p0.x >= width && p1.x >= width)
        || (p0.y >= height && p1.y >= height))
}

/// Liang-Barsky clip of `p0 -> p1` against `[-w, 2w] x [-h, 2h]`.
///
/// Returns `None` for lines that cannot touch the framebuffer. Endpoints
/// already inside the band are returned unchanged. The math runs in f64 so
/// endpoints near `f32::MAX` cannot overflow the direction vector.
fn clip_to_guard_band(buffer: &FrameBuffer, p0: Vec2, p1: Vec2) -> Option<(Vec2, Vec2)> {
    if !visible(buffer, p0, p1) {
        return None;
    }

    let width = buffer.width() as f64;
    let height = buffer.height() as f64;
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let (dx, dy) = (p1.x as f64 - x0, p1.y as f64 - y0);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 + width),
        (dx, 2.0 * width - x0),
        (-dy, y0 + height),
        (dy, 2.0 * height - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    // Rounding on huge inputs can overshoot the band; the clamp bounds it.
    let at = |t: f64| {
        Vec2::new(
            (x0 + dx * t).clamp(-width, 2.0 * width) as f32,
            (y0 + dy * t).clamp(-height, 2.0 * height) as f32,
        )
    };
    let start = if t0 > 0.0 { at(t0) } else { p0 };
    let end = if t1 < 1.0 { at(t1) } else { p1 };
    Some((start, end))
}
