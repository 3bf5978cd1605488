//! A minimal CPU software rasterizer.
//!
//! Meshes are projected through a perspective camera and drawn into an RGBA
//! back buffer, either as flat grey-shaded triangles or as yellow wireframes.
//! Finished frames are handed to a [`Surface`]: an in-memory image that can
//! be saved as PNG, or an SDL2 window with the `window` feature.
//!
//! # Quick Start
//!
//! ```no_run
//! use softengine::prelude::*;
//!
//! let mut device = Device::new(640, 480, ImageSurface::new());
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
//! let meshes = vec![Mesh::cube()];
//!
//! device.clear();
//! device.render(&camera, &meshes);
//! device.present()?;
//! device.surface().save_png("cube.png")?;
//! # Ok::<(), SurfaceError>(())
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod device;
pub mod driver;
pub mod loader;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod surface;
#[cfg(feature = "window")]
pub mod window;

pub use camera::Camera;
pub use colors::Color4;
pub use config::{ConfigError, RenderConfig};
pub use device::{Device, RenderMode};
pub use driver::RenderContext;
pub use loader::LoadError;
pub use mesh::{Face, Mesh};
pub use projection::Projection;
pub use render::{FrameBuffer, LineAlgorithm};
pub use surface::{ImageSurface, Surface, SurfaceError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::colors::Color4;
    pub use crate::config::RenderConfig;
    pub use crate::device::{Device, RenderMode};
    pub use crate::driver::RenderContext;
    pub use crate::math::{Mat4, Vec2, Vec3};
    pub use crate::mesh::{Face, Mesh};
    pub use crate::projection::Projection;
    pub use crate::render::{FrameBuffer, LineAlgorithm};
    pub use crate::surface::{ImageSurface, Surface, SurfaceError};

    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
