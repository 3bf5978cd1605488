//! Scanline triangle fill.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y with three compare-and-swap steps
//!    (`p1.y <= p2.y <= p3.y`).
//! 2. **Inverse slopes** `dx/dy` of the edges `p1 -> p2` and `p1 -> p3`
//!    decide which side `p2` sits on. A zero-height edge has slope 0.
//! 3. **Walk rows** from `floor(p1.y)` through `p3.y`. Rows above `p2.y` are
//!    bounded by `p1 -> p2` and `p1 -> p3`; the rest by `p2 -> p3` and
//!    `p1 -> p3`.
//! 4. **Fill each row** between the two edges, interpolating X with a
//!    gradient clamped to `[0, 1]`.
//!
//! ```text
//!         p1
//!         /|
//!        / |      slope12 > slope13: p2 on the right,
//!       /  |      long edge p1 -> p3 on the left
//!      /   p2
//!     /   /
//!    /  /
//!   / /
//!  p3
//! ```
//!
//! # Degenerate Edges
//!
//! An edge whose endpoints share a Y coordinate never divides by zero: its
//! inverse slope is 0 and its scanline gradient is 1, which selects the
//! edge's end point. Spans are filled left to right only, so a row whose
//! start lies past its end draws nothing.
//!
//! Rows and columns outside the framebuffer are skipped before iteration,
//! which produces the same pixels as clipping every point individually.

use log::trace;

use crate::colors::Color4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Fills the triangle `p1, p2, p3` (raster space) with a flat `color`.
///
/// Vertices may come in any order. The z components are ignored.
/// Triangles with a NaN or infinite coordinate are skipped.
pub fn draw_triangle(buffer: &mut FrameBuffer, p1: Vec3, p2: Vec3, p3: Vec3, color: Color4) {
    if !(p1.is_finite() && p2.is_finite() && p3.is_finite()) {
        trace!("skipping non-finite triangle {p1:?} {p2:?} {p3:?}");
        return;
    }

    let (mut p1, mut p2, mut p3) = (p1, p2, p3);
    sort_by_y(&mut p1, &mut p2, &mut p3);

    let slope12 = inverse_slope(p1, p2);
    let slope13 = inverse_slope(p1, p3);

    let Some((first_row, last_row)) = clipped_span(p1.y, p3.y, buffer.height()) else {
        return;
    };

    for y in first_row..=last_row {
        let row = y as f32;
        if slope12 > slope13 {
            // p2 on the right: p1 -> p3 bounds the left for the whole triangle.
            if row < p2.y {
                process_scan_line(buffer, y, p1, p3, p1, p2, color);
            } else {
                process_scan_line(buffer, y, p1, p3, p2, p3, color);
            }
        } else if row < p2.y {
            // p2 on the left: p1 -> p3 bounds the right.
            process_scan_line(buffer, y, p1, p2, p1, p3, color);
        } else {
            process_scan_line(buffer, y, p2, p3, p1, p3, color);
        }
    }
}

/// Fills row `y` from edge `pa -> pb` (left) to edge `pc -> pd` (right).
///
/// Pixels from `floor(start_x)` through `end_x` inclusive are written with
/// [`FrameBuffer::draw_point`].
pub fn process_scan_line(
    buffer: &mut FrameBuffer,
    y: i32,
    pa: Vec3,
    pb: Vec3,
    pc: Vec3,
    pd: Vec3,
    color: Color4,
) {
    let row = y as f32;
    let gradient1 = if pa.y != pb.y {
        (row - pa.y) / (pb.y - pa.y)
    } else {
        1.0
    };
    let gradient2 = if pc.y != pd.y {
        (row - pc.y) / (pd.y - pc.y)
    } else {
        1.0
    };

    let start_x = interpolate(pa.x, pb.x, gradient1);
    let end_x = interpolate(pc.x, pd.x, gradient2);

    let Some((first, last)) = clipped_span(start_x, end_x, buffer.width()) else {
        return;
    };
    for x in first..=last {
        buffer.draw_point(Vec2::new(x as f32, row), color);
    }
}

/// Restricts `value` to `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Linear interpolation from `min` to `max` with `gradient` clamped to `[0, 1]`.
#[inline]
pub fn interpolate(min: f32, max: f32, gradient: f32) -> f32 {
    min + (max - min) * clamp(gradient, 0.0, 1.0)
}

/// Sorts three vertices by Y coordinate (ascending: top to bottom in screen space).
///
/// Three comparisons suffice for 3 elements (bubble sort). Only strictly
/// greater pairs are swapped, so equal Y values keep their input order.
fn sort_by_y(p1: &mut Vec3, p2: &mut Vec3, p3: &mut Vec3) {
    if p1.y > p2.y {
        std::mem::swap(p1, p2);
    }
    if p2.y > p3.y {
        std::mem::swap(p2, p3);
    }
    if p1.y > p2.y {
        std::mem::swap(p1, p2);
    }
}

/// `dx / dy` from `from` to `to`, or 0 when the edge has no downward extent.
#[inline]
fn inverse_slope(from: Vec3, to: Vec3) -> f32 {
    if to.y - from.y > 0.0 {
        (to.x - from.x) / (to.y - from.y)
    } else {
        0.0
    }
}

/// Integer range `floor(start) ..= end` intersected with `[0, limit)`.
#[inline]
fn clipped_span(start: f32, end: f32, limit: u32) -> Option<(i32, i32)> {
    let first = start.floor().max(0.0);
    let last = end.floor().min(limit as f32 - 1.0);
    if first > last {
        return None;
    }
    Some((first as i32, last as i32))
}
