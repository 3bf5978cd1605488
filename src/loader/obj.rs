//! Wavefront OBJ loader backed by `tobj`.

use std::path::Path;

use log::{debug, warn};

use super::{validate, LoadError};
use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh};

/// Loads every object in an OBJ file as a separate mesh.
///
/// Polygons are triangulated on load. Materials are ignored.
pub fn load_obj_file<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, LoadError> {
    let path = path.as_ref();
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, materials) = tobj::load_obj(path, &options)?;
    if let Err(err) = materials {
        warn!("ignoring materials for {}: {}", path.display(), err);
    }

    let mut meshes = Vec::with_capacity(models.len());
    for model in models {
        let positions = &model.mesh.positions;
        let indices = &model.mesh.indices;
        let mut mesh = Mesh::with_capacity(model.name, positions.len() / 3, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.push_vertex(Vec3::new(p[0], p[1], p[2]));
        }
        for f in indices.chunks_exact(3) {
            mesh.push_face(Face::new(f[0], f[1], f[2]));
        }
        validate(&mesh)?;
        debug!(
            "loaded OBJ mesh '{}': {} vertices, {} faces",
            mesh.name(),
            mesh.vertices().len(),
            mesh.faces().len()
        );
        meshes.push(mesh);
    }
    Ok(meshes)
}
