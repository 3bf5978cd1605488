//! Floating-point RGBA colors and the named colors used by the renderer.

/// An RGBA color with each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Transparent black, the cleared state of the back buffer.
pub const CLEAR: Color4 = Color4::new(0.0, 0.0, 0.0, 0.0);
pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
/// Point color used by the wireframe render mode.
pub const WIREFRAME: Color4 = Color4::new(1.0, 1.0, 0.0, 1.0);

impl Color4 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque grey with all color channels set to `level`.
    pub const fn grey(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Converts to interleaved RGBA bytes.
    ///
    /// Each channel is multiplied by 255 and truncated; values outside
    /// `[0, 1]` saturate at 0 or 255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            channel_to_byte(self.a),
        ]
    }
}

#[inline]
fn channel_to_byte(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    (value * 255.0) as u8
}

/// Synthetic flat shade for face `index` of a mesh with `face_count` faces.
///
/// The shade ramps from 0.25 for the first face toward 1.0 for the last, so
/// it depends only on face order, never on geometry or lighting.
pub fn face_shade(index: usize, face_count: usize) -> Color4 {
    if face_count == 0 {
        return Color4::grey(0.25);
    }
    let fraction = (index % face_count) as f32 / face_count as f32;
    Color4::grey(0.25 + fraction * 0.75)
}
