//! Babylon JSON scene loader.
//!
//! Only the geometry of each mesh is read. Vertices are stored flat with a
//! stride that depends on `uvCount`: position and normal always come first,
//! followed by two floats per UV channel.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::{validate, LoadError};
use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh};

#[derive(Debug, Deserialize)]
struct BabylonScene {
    #[serde(default)]
    meshes: Vec<BabylonMesh>,
}

#[derive(Debug, Deserialize)]
struct BabylonMesh {
    #[serde(default)]
    name: String,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    #[serde(rename = "uvCount", default)]
    uv_count: u32,
    #[serde(default)]
    position: [f32; 3],
}

impl BabylonMesh {
    fn stride(&self) -> Result<usize, LoadError> {
        match self.uv_count {
            0 => Ok(6),
            1 => Ok(8),
            2 => Ok(10),
            uv_count => Err(LoadError::UnsupportedUvCount {
                mesh: self.name.clone(),
                uv_count,
            }),
        }
    }

    fn into_mesh(self) -> Result<Mesh, LoadError> {
        let stride = self.stride()?;
        if self.vertices.len() % stride != 0 {
            return Err(LoadError::VertexArrayLength {
                mesh: self.name,
                len: self.vertices.len(),
                stride,
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(LoadError::IndexArrayLength {
                mesh: self.name,
                len: self.indices.len(),
            });
        }

        let vertices = self
            .vertices
            .chunks_exact(stride)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
            .collect();
        let faces = self
            .indices
            .chunks_exact(3)
            .map(|f| Face::new(f[0], f[1], f[2]))
            .collect();

        let mut mesh = Mesh::new(self.name, vertices, faces);
        let [x, y, z] = self.position;
        mesh.position = Vec3::new(x, y, z);
        validate(&mesh)?;
        Ok(mesh)
    }
}

/// Parses every mesh in a Babylon JSON document.
pub fn load_babylon_str(json: &str) -> Result<Vec<Mesh>, LoadError> {
    let scene: BabylonScene = serde_json::from_str(json)?;
    let meshes = scene
        .meshes
        .into_iter()
        .map(BabylonMesh::into_mesh)
        .collect::<Result<Vec<_>, _>>()?;
    for mesh in &meshes {
        debug!(
            "loaded mesh '{}': {} vertices, {} faces",
            mesh.name(),
            mesh.vertices().len(),
            mesh.faces().len()
        );
    }
    Ok(meshes)
}

/// Reads and parses a Babylon JSON file.
pub fn load_babylon_file<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    debug!("parsing Babylon scene {}", path.display());
    load_babylon_str(&json)
}
