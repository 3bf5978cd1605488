//! Core rendering device.
//!
//! A [`Device`] owns the back buffer and the [`Surface`] frames are shown on.
//! Each frame follows the same sequence:
//!
//! 1. [`Device::clear`] resets the back buffer.
//! 2. [`Device::render`] projects every face of every mesh and draws it.
//! 3. [`Device::present`] hands the finished buffer to the surface.
//!
//! Faces are drawn in array order without a depth buffer, so a later face
//! always overwrites an earlier one where they overlap.

use std::fmt;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::colors::{self, Color4};
use crate::config::RenderConfig;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::projection::{self, Projection};
use crate::render::{self, FrameBuffer, LineAlgorithm};
use crate::surface::{Surface, SurfaceError};

/// How faces are turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Scanline-filled triangles with a per-face grey shade.
    #[default]
    Filled,
    /// Yellow triangle outlines.
    Wireframe,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::Wireframe => write!(f, "Wireframe"),
        }
    }
}

pub struct Device<S: Surface> {
    back_buffer: FrameBuffer,
    surface: S,
    projection: Projection,
    render_mode: RenderMode,
    line_algorithm: LineAlgorithm,
    presented_since_clear: bool,
    frame: u64,
}

impl<S: Surface> Device<S> {
    /// Creates a device with a cleared `width x height` back buffer.
    pub fn new(width: u32, height: u32, surface: S) -> Self {
        Self {
            back_buffer: FrameBuffer::new(width, height),
            surface,
            projection: Projection::default(),
            render_mode: RenderMode::default(),
            line_algorithm: LineAlgorithm::default(),
            presented_since_clear: false,
            frame: 0,
        }
    }

    /// Creates a device sized and configured from `config`.
    pub fn from_config(config: &RenderConfig, surface: S) -> Self {
        let mut device = Self::new(config.width, config.height, surface);
        device.projection = config.projection;
        device.render_mode = config.render_mode;
        device.line_algorithm = config.line_algorithm;
        device
    }

    pub fn width(&self) -> u32 {
        self.back_buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.back_buffer.height()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.line_algorithm = algorithm;
    }

    pub fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algorithm
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// The frame being drawn, not yet presented.
    pub fn back_buffer(&self) -> &FrameBuffer {
        &self.back_buffer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frame
    }

    /// Resets the back buffer to transparent black. Call once per frame
    /// before drawing.
    pub fn clear(&mut self) {
        self.back_buffer.clear();
        self.presented_since_clear = false;
    }

    /// Publishes the back buffer to the surface in one call.
    pub fn present(&mut self) -> Result<(), SurfaceError> {
        if self.presented_since_clear {
            warn!("frame {} presented again without a clear", self.frame);
        }
        self.surface.present(
            self.back_buffer.as_bytes(),
            self.back_buffer.width(),
            self.back_buffer.height(),
        )?;
        self.presented_since_clear = true;
        self.frame += 1;
        trace!("presented frame {}", self.frame);
        Ok(())
    }

    /// Writes a pixel without clipping.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the back buffer.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color4) {
        self.back_buffer.put_pixel(x, y, color);
    }

    /// Writes a pixel, silently dropping points outside the back buffer.
    pub fn draw_point(&mut self, point: Vec2, color: Color4) {
        self.back_buffer.draw_point(point, color);
    }

    /// Projects `coord` through `transform` into this device's raster space.
    pub fn project(&self, coord: Vec3, transform: &Mat4) -> Vec3 {
        projection::project(coord, transform, self.width(), self.height())
    }

    /// Fills a raster-space triangle with a flat color.
    pub fn draw_triangle(&mut self, p1: Vec3, p2: Vec3, p3: Vec3, color: Color4) {
        render::draw_triangle(&mut self.back_buffer, p1, p2, p3, color);
    }

    /// Draws a raster-space line with the configured line algorithm.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: Color4) {
        render::draw_line(&mut self.back_buffer, p0, p1, color, self.line_algorithm);
    }

    /// Draws every mesh as seen from `camera` into the back buffer.
    ///
    /// Every face index of every mesh must be valid for that mesh's vertex
    /// list (see [`Mesh`]); an invalid index panics.
    pub fn render(&mut self, camera: &Camera, meshes: &[Mesh]) {
        let view_projection =
            self.projection.matrix(self.width(), self.height()) * camera.view_matrix();

        for mesh in meshes {
            let transform = view_projection * mesh.world_matrix();
            let face_count = mesh.faces().len();

            for (index, face) in mesh.faces().iter().enumerate() {
                let [a, b, c] = mesh.face_vertices(face);
                let pixel_a = self.project(a, &transform);
                let pixel_b = self.project(b, &transform);
                let pixel_c = self.project(c, &transform);

                match self.render_mode {
                    RenderMode::Filled => {
                        let shade = colors::face_shade(index, face_count);
                        self.draw_triangle(pixel_a, pixel_b, pixel_c, shade);
                    }
                    RenderMode::Wireframe => {
                        let (a, b, c) = (flatten(pixel_a), flatten(pixel_b), flatten(pixel_c));
                        self.draw_line(a, b, colors::WIREFRAME);
                        self.draw_line(b, c, colors::WIREFRAME);
                        self.draw_line(c, a, colors::WIREFRAME);
                    }
                }
            }
        }

        trace!(
            "rendered {} meshes ({} mode) for frame {}",
            meshes.len(),
            self.render_mode,
            self.frame
        );
    }
}

#[inline]
fn flatten(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Face;
    use crate::surface::ImageSurface;

    fn device(width: u32, height: u32) -> Device<ImageSurface> {
        Device::new(width, height, ImageSurface::new())
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }

    fn quad_mesh() -> Mesh {
        // Two triangles covering the same square.
        Mesh::new(
            "quad",
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![Face::new(0, 1, 2), Face::new(0, 2, 3)],
        )
    }

    #[test]
    fn project_centers_camera_target() {
        let device = device(640, 480);
        let cam = camera();
        let transform = device.projection().matrix(640, 480) * cam.view_matrix();
        let p = device.project(cam.target, &transform);
        assert!((p.x - 320.0).abs() < 1e-3);
        assert!((p.y - 240.0).abs() < 1e-3);
    }

    #[test]
    fn present_publishes_back_buffer() {
        let mut device = device(4, 4);
        device.clear();
        device.put_pixel(1, 1, colors::WHITE);
        device.present().unwrap();
        assert_eq!(device.surface().image().get_pixel(1, 1).0, [255; 4]);
        assert_eq!(device.frames_presented(), 1);
    }

    #[test]
    fn surface_holds_previous_frame_until_present() {
        let mut device = device(4, 4);
        device.clear();
        device.put_pixel(0, 0, colors::WHITE);
        device.present().unwrap();

        device.clear();
        device.put_pixel(3, 3, colors::WHITE);
        let shown = device.surface().image();
        assert_eq!(shown.get_pixel(0, 0).0, [255; 4]);
        assert_eq!(shown.get_pixel(3, 3).0, [0; 4]);
    }

    #[test]
    fn draw_point_outside_is_dropped() {
        let mut device = device(4, 4);
        let before = device.back_buffer().clone();
        device.draw_point(Vec2::new(4.0, 0.0), colors::WHITE);
        device.draw_point(Vec2::new(0.0, -1.0), colors::WHITE);
        assert_eq!(device.back_buffer(), &before);
    }

    #[test]
    fn filled_mode_draws_quad_with_face_shades() {
        let mut device = device(64, 64);
        device.clear();
        device.render(&camera(), &[quad_mesh()]);
        let fb = device.back_buffer();
        // Face 0 is the lower-left half of the square on screen.
        assert_eq!(fb.pixel(24, 40), Some(colors::face_shade(0, 2).to_bytes()));
        assert!(fb.is_clear(0, 0));
        assert!(fb.is_clear(60, 60));
    }

    #[test]
    fn later_face_wins_overlap_regardless_of_depth() {
        // Face 1 sits behind face 0 but is drawn last.
        let mesh = Mesh::new(
            "overlap",
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, -1.0, -5.0),
                Vec3::new(1.0, -1.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
            ],
            vec![Face::new(0, 1, 2), Face::new(3, 4, 5)],
        );
        let mut device = device(64, 64);
        device.clear();
        device.render(&camera(), &[mesh]);
        let later = colors::face_shade(1, 2).to_bytes();
        assert_eq!(device.back_buffer().pixel(32, 36), Some(later));
    }

    #[test]
    fn wireframe_mode_draws_yellow_outline_only() {
        let mut device = device(64, 64);
        device.set_render_mode(RenderMode::Wireframe);
        device.clear();
        device.render(&camera(), &[quad_mesh()]);

        let fb = device.back_buffer();
        let yellow = colors::WIREFRAME.to_bytes();
        let mut drawn = 0;
        for y in 0..64 {
            for x in 0..64 {
                match fb.pixel(x, y) {
                    Some(p) if p == yellow => drawn += 1,
                    Some(p) => assert_eq!(p, [0; 4], "unexpected color at ({x}, {y})"),
                    None => unreachable!(),
                }
            }
        }
        assert!(drawn > 0);
        // Interior of the quad, away from the diagonal, stays clear.
        assert!(fb.is_clear(28, 36));
    }

    #[test]
    fn midpoint_wireframe_draws_subset_of_pixels() {
        let mut device = device(64, 64);
        device.set_render_mode(RenderMode::Wireframe);
        device.set_line_algorithm(LineAlgorithm::Midpoint);
        device.clear();
        device.render(&camera(), &[quad_mesh()]);
        let fb = device.back_buffer();
        let drawn = (0..64)
            .flat_map(|y| (0..64).map(move |x| (x, y)))
            .filter(|&(x, y)| !fb.is_clear(x, y))
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn wireframe_survives_vertex_on_camera_plane() {
        // (1, 0, 0) sits almost exactly level with the eye, so it projects
        // to an enormous raster coordinate.
        let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0e-20), Vec3::ZERO);
        let mesh = Mesh::new(
            "edge_on",
            vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(0.0, 0.5, -1.0),
            ],
            vec![Face::new(0, 1, 2)],
        );
        let yellow = colors::WIREFRAME.to_bytes();
        for algorithm in [LineAlgorithm::Bresenham, LineAlgorithm::Midpoint] {
            let mut device = device(64, 48);
            device.set_render_mode(RenderMode::Wireframe);
            device.set_line_algorithm(algorithm);
            device.clear();
            device.render(&camera, std::slice::from_ref(&mesh));
            let fb = device.back_buffer();
            for y in 0..48 {
                for x in 0..64 {
                    let p = fb.pixel(x, y).unwrap();
                    assert!(p == yellow || p == [0; 4], "({x}, {y}) with {algorithm}");
                }
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut cube = Mesh::cube();
        cube.rotation = Vec3::new(0.4, 0.7, 0.1);
        let mut first = device(80, 60);
        let mut second = device(80, 60);
        for d in [&mut first, &mut second] {
            d.clear();
            d.render(&camera(), std::slice::from_ref(&cube));
        }
        assert_eq!(first.back_buffer(), second.back_buffer());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = RenderConfig {
            width: 32,
            height: 16,
            render_mode: RenderMode::Wireframe,
            line_algorithm: LineAlgorithm::Midpoint,
            ..RenderConfig::default()
        };
        let device = Device::from_config(&config, ImageSurface::new());
        assert_eq!((device.width(), device.height()), (32, 16));
        assert_eq!(device.render_mode(), RenderMode::Wireframe);
        assert_eq!(device.line_algorithm(), LineAlgorithm::Midpoint);
    }
}
