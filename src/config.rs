//! Render settings for the frame driver.
//!
//! Settings are read from RON files. Every field is optional and falls back
//! to the defaults below:
//!
//! ```ron
//! (
//!     width: 640,
//!     height: 480,
//!     render_mode: Filled,
//!     line_algorithm: Bresenham,
//!     projection: (fov_y: 0.78, z_near: 0.01, z_far: 0.1),
//!     camera_position: (x: 0.0, y: 0.0, z: 10.0),
//!     camera_target: (x: 0.0, y: 0.0, z: 0.0),
//!     rotation_step: (x: 0.01, y: 0.01, z: 0.0),
//!     frames: 1,
//!     output: "frame.png",
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera;
use crate::device::RenderMode;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::render::LineAlgorithm;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub render_mode: RenderMode,
    pub line_algorithm: LineAlgorithm,
    pub projection: Projection,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// Rotation added to every mesh before each frame (radians).
    pub rotation_step: Vec3,
    /// Frames rendered by the headless driver before it writes `output`.
    pub frames: u32,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            render_mode: RenderMode::default(),
            line_algorithm: LineAlgorithm::default(),
            projection: Projection::default(),
            camera_position: Vec3::new(0.0, 0.0, 10.0),
            camera_target: Vec3::ZERO,
            rotation_step: Vec3::new(0.01, 0.01, 0.0),
            frames: 1,
            output: PathBuf::from("frame.png"),
        }
    }
}

impl RenderConfig {
    /// Load a config from a RON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&contents)?;
        debug!("loaded render config from {}", path.display());
        Ok(config)
    }

    /// Load a config from a RON string.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "framebuffer must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.projection.z_near == self.projection.z_far {
            return Err(ConfigError::Invalid("z_near and z_far must differ".to_string()));
        }
        Ok(())
    }

    /// The camera described by this config.
    pub fn camera(&self) -> Camera {
        Camera::new(self.camera_position, self.camera_target)
    }
}
