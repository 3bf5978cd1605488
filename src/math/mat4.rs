//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Coordinate system is **left-handed**: +X right, +Y up, +Z into the screen
//!
//! # Example
//! ```ignore
//! let world = Mat4::translation(1.0, 0.0, 0.0) * Mat4::rotation_y(0.5);
//! let transform = projection * view * world; // world applied first
//! let ndc = transform.transform_coordinates(vertex);
//! ```

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis (pitch).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis (yaw).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis (roll).
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a combined Euler rotation.
    ///
    /// Roll is applied first, then pitch, then yaw: `Ry(yaw) * Rx(pitch) * Rz(roll)`.
    pub fn rotation_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Mat4::rotation_y(yaw) * Mat4::rotation_x(pitch) * Mat4::rotation_z(roll)
    }

    /// Creates a perspective matrix with left-handed coordinate system.
    ///
    /// `fov` is the vertical field of view in radians. After the perspective
    /// divide, view-space depth `z_near` maps to 0 and `z_far` maps to 1.
    pub fn perspective_fov_lh(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let focal = 1.0 / (fov * 0.5).tan();
        Mat4::new([
            [focal / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [
                0.0,
                0.0,
                z_far / (z_far - z_near),
                (z_near * z_far) / (z_near - z_far),
            ],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Creates a view matrix with left-handed coordinate system.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    ///
    /// When `up` is parallel to the viewing direction the right axis falls
    /// back to +X.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward);
        let right = if right.length_squared() == 0.0 {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            right.normalize()
        };
        let up = forward.cross(right).normalize();

        // Rotation matrix (transpose of basis vectors as rows)
        // Combined with translation to eye position
        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point (w = 1) and performs the perspective divide.
    ///
    /// The divide is unconditional; a point on the camera plane (w = 0)
    /// yields infinite or NaN components.
    pub fn transform_coordinates(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        let x = m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3];
        let y = m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3];
        let z = m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3];
        let w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        Vec3::new(x / w, y / w, z / w)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn identity_is_neutral() {
        let t = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(t * Mat4::identity(), t);
        assert_eq!(Mat4::identity() * t, t);
    }

    #[test]
    fn translation_moves_point() {
        let p = Mat4::translation(1.0, -2.0, 3.0).transform_coordinates(Vec3::ONE);
        assert_vec_eq(p, Vec3::new(2.0, -1.0, 4.0));
    }

    #[test]
    fn yaw_turns_x_axis_toward_negative_z() {
        let p = Mat4::rotation_y(FRAC_PI_2).transform_coordinates(Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn pitch_turns_y_axis_toward_positive_z() {
        let p = Mat4::rotation_x(FRAC_PI_2).transform_coordinates(Vec3::UP);
        assert_vec_eq(p, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn roll_turns_x_axis_toward_positive_y() {
        let p = Mat4::rotation_z(FRAC_PI_2).transform_coordinates(Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p, Vec3::UP);
    }

    #[test]
    fn yaw_pitch_roll_applies_roll_first() {
        // Roll takes +X to +Y, pitch takes +Y to +Z, yaw takes +Z back to +X.
        let m = Mat4::rotation_yaw_pitch_roll(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        let p = m.transform_coordinates(Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn yaw_only_matches_rotation_y() {
        let a = Mat4::rotation_yaw_pitch_roll(0.3, 0.0, 0.0);
        let b = Mat4::rotation_y(0.3);
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth_range() {
        let p = Mat4::perspective_fov_lh(0.78, 4.0 / 3.0, 0.5, 20.0);
        let near = p.transform_coordinates(Vec3::new(0.0, 0.0, 0.5));
        let far = p.transform_coordinates(Vec3::new(0.0, 0.0, 20.0));
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at_lh(eye, Vec3::ZERO, Vec3::UP);
        assert_vec_eq(view.transform_coordinates(eye), Vec3::ZERO);
        assert_vec_eq(view.transform_coordinates(Vec3::ZERO), Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn look_at_looking_back_mirrors_x() {
        let view = Mat4::look_at_lh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::UP);
        let p = view.transform_coordinates(Vec3::new(1.0, 1.0, 0.0));
        assert_vec_eq(p, Vec3::new(-1.0, 1.0, 10.0));
    }

    #[test]
    fn look_at_straight_down_does_not_produce_nan() {
        let view = Mat4::look_at_lh(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::UP);
        assert!(view.transform_coordinates(Vec3::ONE).is_finite());
    }
}
