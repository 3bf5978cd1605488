//! Minimal linear algebra for the rendering pipeline.
//!
//! Matrices use the column-vector convention (`Mat4 * v`), so a chain such as
//! `projection * view * world` applies `world` first.

pub mod mat4;
pub mod vec2;
pub mod vec3;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
