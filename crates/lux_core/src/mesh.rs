//! Triangle mesh geometry with per-corner shading normals.
//!
//! Meshes are populated by the OBJ loader and consumed by the renderer's
//! mesh object. Positions are already scaled and translated; normals are
//! kept exactly as they were declared.

use lux_math::{Aabb, Vec3};

/// A face corner: transformed position plus its shading normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    /// Position after `raw * scale + offset`
    pub position: Vec3,
    /// Shading normal (untransformed)
    pub normal: Vec3,
}

impl MeshVertex {
    /// Build a corner from raw file data, applying the uniform scale and
    /// translation to the position only.
    pub fn transformed(raw_position: Vec3, normal: Vec3, scale: f64, offset: Vec3) -> Self {
        Self {
            position: raw_position * scale + offset,
            normal,
        }
    }
}

/// A triangular face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshFace {
    pub corners: [MeshVertex; 3],
}

impl MeshFace {
    pub fn new(a: MeshVertex, b: MeshVertex, c: MeshVertex) -> Self {
        Self { corners: [a, b, c] }
    }

    /// Corner positions in winding order.
    pub fn positions(&self) -> [Vec3; 3] {
        self.corners.map(|c| c.position)
    }

    /// Corner normals in winding order.
    pub fn normals(&self) -> [Vec3; 3] {
        self.corners.map(|c| c.normal)
    }
}

/// A mesh consisting of independent triangular faces.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    faces: Vec<MeshFace>,
}

impl Mesh {
    pub fn new(faces: Vec<MeshFace>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[MeshFace] {
        &self.faces
    }

    pub fn push(&mut self, face: MeshFace) {
        self.faces.push(face);
    }

    /// Get the number of triangles in the mesh.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Axis-aligned bounds over every corner position.
    ///
    /// Returns `Aabb::EMPTY` for a mesh without faces.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_iter_points(self.faces.iter().flat_map(|f| f.positions()))
    }
}
