//! Triangle rasterization.
//!
//! Triangles are filled with the scanline algorithm in [`scanline`]. There is
//! no depth test: each call overwrites the pixels it covers.

mod scanline;

pub use scanline::{clamp, draw_triangle, interpolate, process_scan_line};

use super::framebuffer::FrameBuffer;
use crate::colors::Color4;
use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
///
/// The z component of each point is the projected depth; it travels with the
/// point but is not used to resolve visibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub color: Color4,
}

impl Triangle {
    pub fn new(points: [Vec3; 3], color: Color4) -> Self {
        Self { points, color }
    }

    /// Fills this triangle into `buffer` with its flat color.
    #[inline]
    pub fn fill(&self, buffer: &mut FrameBuffer) {
        let [p1, p2, p3] = self.points;
        draw_triangle(buffer, p1, p2, p3, self.color);
    }
}
