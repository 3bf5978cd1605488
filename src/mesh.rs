//! Mesh geometry: vertices, triangular faces and a world placement.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A triangle defined by three indices into the owning mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a as usize, self.b as usize, self.c as usize]
    }
}

/// A named triangle mesh placed in the world.
///
/// Vertices and faces are fixed once loaded. Only `position` and `rotation`
/// are meant to change between frames.
///
/// Every face index must be a valid offset into `vertices`; the loaders in
/// [`crate::loader`] enforce this and the renderer relies on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    /// World translation.
    pub position: Vec3,
    /// Euler angles in radians: x = pitch, y = yaw, z = roll.
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Creates an empty mesh with room for the given vertex and face counts.
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, face_count: usize) -> Self {
        Self::new(
            name,
            Vec::with_capacity(vertex_count),
            Vec::with_capacity(face_count),
        )
    }

    /// Unit cube centered on the origin, two triangles per side.
    pub fn cube() -> Self {
        Self::new("Cube", CUBE_VERTICES.to_vec(), CUBE_FACES.to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn push_vertex(&mut self, vertex: Vec3) {
        self.vertices.push(vertex);
    }

    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// The three vertices referenced by `face`.
    ///
    /// # Panics
    /// Panics if an index is out of range for this mesh.
    #[inline]
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        let [a, b, c] = face.indices();
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Model-to-world matrix: rotation (roll, pitch, yaw) then translation.
    pub fn world_matrix(&self) -> Mat4 {
        let (p, r) = (self.position, self.rotation);
        Mat4::translation(p.x, p.y, p.z) * Mat4::rotation_yaw_pitch_roll(r.y, r.x, r.z)
    }

    /// Index of the first face referencing a missing vertex, if any.
    pub fn first_invalid_face(&self) -> Option<usize> {
        let count = self.vertices.len();
        self.faces
            .iter()
            .position(|face| face.indices().iter().any(|&i| i >= count))
    }
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_FACES: [Face; 12] = [
    // Front
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // Right
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // Back
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // Left
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // Top
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // Bottom
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];
