//! Mesh asset loading.
//!
//! Two formats are understood:
//! - Babylon JSON scenes (`.babylon`, `.json`), see [`babylon`].
//! - Wavefront OBJ (`.obj`) through `tobj`, see [`obj`].
//!
//! Every mesh returned from this module has only valid face indices.

pub mod babylon;
pub mod obj;

use std::path::Path;

use thiserror::Error;

use crate::mesh::Mesh;

pub use babylon::{load_babylon_file, load_babylon_str};
pub use obj::load_obj_file;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid mesh JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("mesh '{mesh}': unsupported uvCount {uv_count} (expected 0, 1 or 2)")]
    UnsupportedUvCount { mesh: String, uv_count: u32 },
    #[error("mesh '{mesh}': {len} vertex values is not a multiple of the stride {stride}")]
    VertexArrayLength {
        mesh: String,
        len: usize,
        stride: usize,
    },
    #[error("mesh '{mesh}': {len} indices is not a multiple of 3")]
    IndexArrayLength { mesh: String, len: usize },
    #[error("mesh '{mesh}': face {face} references a vertex outside 0..{vertex_count}")]
    IndexOutOfRange {
        mesh: String,
        face: usize,
        vertex_count: usize,
    },
    #[error("unsupported mesh file extension: {0}")]
    UnsupportedFormat(String),
}

/// Loads every mesh in `path`, choosing the format from the file extension.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "babylon" | "json" => load_babylon_file(path),
        "obj" => load_obj_file(path),
        _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Fails if any face of `mesh` references a missing vertex.
pub(crate) fn validate(mesh: &Mesh) -> Result<(), LoadError> {
    match mesh.first_invalid_face() {
        Some(face) => Err(LoadError::IndexOutOfRange {
            mesh: mesh.name().to_string(),
            face,
            vertex_count: mesh.vertices().len(),
        }),
        None => Ok(()),
    }
}
