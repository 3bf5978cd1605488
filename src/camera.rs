//! Look-at camera.
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A camera defined by where it sits and what it looks at.
///
/// Both fields may be changed freely between frames; the renderer reads them
/// once at the start of each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// View matrix for the current frame, with +Y as the up direction.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.target, Vec3::UP)
    }
}
