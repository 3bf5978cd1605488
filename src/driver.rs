//! Frame loop state.
//!
//! [`RenderContext`] bundles everything a frame needs: the device, the camera
//! and the meshes. The binary drives it; nothing here is global.

use log::debug;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::device::Device;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::surface::{Surface, SurfaceError};

pub struct RenderContext<S: Surface> {
    pub device: Device<S>,
    pub camera: Camera,
    pub meshes: Vec<Mesh>,
    /// Rotation added to every mesh by [`RenderContext::advance`].
    pub rotation_step: Vec3,
}

impl<S: Surface> RenderContext<S> {
    pub fn new(device: Device<S>, camera: Camera, meshes: Vec<Mesh>) -> Self {
        Self {
            device,
            camera,
            meshes,
            rotation_step: Vec3::ZERO,
        }
    }

    /// Builds a context from `config` that draws `meshes` onto `surface`.
    pub fn from_config(config: &RenderConfig, surface: S, meshes: Vec<Mesh>) -> Self {
        debug!(
            "render context {}x{}, {} meshes, {} mode",
            config.width,
            config.height,
            meshes.len(),
            config.render_mode
        );
        Self {
            device: Device::from_config(config, surface),
            camera: config.camera(),
            meshes,
            rotation_step: config.rotation_step,
        }
    }

    /// Rotates every mesh by one step.
    pub fn advance(&mut self) {
        for mesh in &mut self.meshes {
            mesh.rotation = mesh.rotation + self.rotation_step;
        }
    }

    /// Runs one frame: clear, rotate, render, present.
    pub fn render_frame(&mut self) -> Result<(), SurfaceError> {
        self.device.clear();
        self.advance();
        self.device.render(&self.camera, &self.meshes);
        self.device.present()
    }
}
