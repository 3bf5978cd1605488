//! Perspective projection parameters and the NDC to raster-space mapping.
//!
//! [`Projection`] holds the canonical perspective parameters. The defaults
//! (fov 0.78 rad, near 0.01, far 0.1) are part of the renderer's observable
//! output and should only be overridden deliberately.

use serde::{Deserialize, Serialize};

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

pub const DEFAULT_FOV_Y: f32 = 0.78;
pub const DEFAULT_Z_NEAR: f32 = 0.01;
pub const DEFAULT_Z_FAR: f32 = 0.1;

/// Perspective projection parameters.
///
/// The aspect ratio is not stored; it always comes from the target
/// framebuffer's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near plane distance.
    pub z_near: f32,
    /// Far plane distance.
    pub z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
        }
    }
}

impl Projection {
    /// Generates the left-handed perspective matrix for a `width x height` target.
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect_ratio = width as f32 / height as f32;
        Mat4::perspective_fov_lh(self.fov_y, aspect_ratio, self.z_near, self.z_far)
    }
}

/// Projects a model-space point into raster space.
///
/// Applies `transform` with the perspective divide, then maps normalized
/// device coordinates (origin center, y up) to pixels (origin top-left,
/// y down). The returned z is the post-divide depth; it is carried along but
/// never used for depth testing.
#[inline]
pub fn project(point: Vec3, transform: &Mat4, width: u32, height: u32) -> Vec3 {
    let ndc = transform.transform_coordinates(point);
    let width = width as f32;
    let height = height as f32;
    let x = ndc.x * width + width / 2.0;
    let y = -ndc.y * height + height / 2.0;
    Vec3::new(x, y, ndc.z)
}
