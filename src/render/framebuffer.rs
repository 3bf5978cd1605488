//! RGBA back buffer with clipped and unclipped pixel writes.
//!
//! The buffer is a flat `width * height * 4` byte array of interleaved
//! R, G, B, A values, row-major with the origin at the top-left. There is no
//! depth buffer: every write replaces whatever was there.

use crate::colors::{self, Color4};
use crate::math::vec2::Vec2;

pub const BYTES_PER_PIXEL: usize = 4;

/// An owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a cleared buffer of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Writes `color` at integer pixel `(x, y)`.
    ///
    /// Channels are converted with [`Color4::to_bytes`] (multiply by 255,
    /// truncate).
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the buffer. Callers that cannot
    /// guarantee bounds should use [`FrameBuffer::draw_point`].
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color4) {
        assert!(
            self.contains(x, y),
            "put_pixel({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        let index = self.index(x, y);
        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
    }

    /// Writes `color` at `point` if it lies inside `[0, width) x [0, height)`.
    ///
    /// Points outside the buffer are silently dropped. Coordinates are
    /// truncated to whole pixels after the bounds test.
    #[inline]
    pub fn draw_point(&mut self, point: Vec2, color: Color4) {
        if point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
        {
            self.put_pixel(point.x as i32, point.y as i32, color);
        }
    }

    /// Get the RGBA bytes at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if !self.contains(x, y) {
            return None;
        }
        let index = self.index(x, y);
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// True if the pixel at (x, y) still holds the cleared value.
    pub fn is_clear(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y) == Some(colors::CLEAR.to_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
