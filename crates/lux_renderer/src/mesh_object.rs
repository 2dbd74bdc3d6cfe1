//! Triangle mesh entity with smooth shading normals.
//!
//! Rays are first tested against a box of twelve inert triangles around the
//! mesh. Only rays that hit the box pay for the linear scan over faces.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray, Triangle,
};
use lux_core::{Mesh, MeshFace};
use lux_math::{Aabb, Vec3};

/// Minimum thickness of the bounding box on each axis, so flat meshes still
/// get a box with area on every face.
const BOX_PADDING: f64 = 1e-4;

/// One mesh face: the triangle used for intersection plus its corner normals.
#[derive(Debug, Clone)]
struct Face {
    triangle: Triangle,
    normals: [Vec3; 3],
}

impl Face {
    fn new(face: &MeshFace, material: Material) -> Self {
        let [a, b, c] = face.positions();
        Self {
            triangle: Triangle::new(a, b, c, material),
            normals: face.normals(),
        }
    }

    /// Blend the corner normals with the hit's barycentric weights.
    fn interpolate_normal(&self, weights: [f64; 3]) -> Option<Vec3> {
        let [n0, n1, n2] = self.normals;
        (n0 * weights[0] + n1 * weights[1] + n2 * weights[2]).try_normalize()
    }
}

/// A triangle mesh loaded from an OBJ model.
#[derive(Debug, Clone)]
pub struct MeshObject {
    faces: Vec<Face>,
    /// Two triangles per box side, all with `Material::None`.
    /// `None` when the mesh has no faces.
    bounding_box: Option<[Triangle; 12]>,
    material: Material,
}

impl MeshObject {
    /// Build the mesh entity and its bounding box.
    pub fn new(mesh: &Mesh, material: Material) -> Self {
        let faces: Vec<Face> = mesh.faces().iter().map(|f| Face::new(f, material)).collect();

        let bounds = mesh.bounds();
        let bounding_box = if bounds.is_empty() {
            None
        } else {
            Some(box_triangles(&bounds.padded(BOX_PADDING)))
        };

        log::debug!(
            "Mesh object with {} faces, bounds {:?}",
            faces.len(),
            bounding_box.as_ref().map(|_| (bounds.min(), bounds.max()))
        );

        Self {
            faces,
            bounding_box,
            material,
        }
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the ray hits any triangle of the bounding box.
    pub fn hits_bounds(&self, ray: &Ray) -> bool {
        self.bounding_box
            .as_ref()
            .is_some_and(|tris| tris.iter().any(|t| t.intersect(ray).is_some()))
    }
}

impl Hittable for MeshObject {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        if !self.hits_bounds(ray) {
            return None;
        }

        let mut best: Option<(HitRecord<'_>, &Face, [f64; 3])> = None;
        for face in &self.faces {
            if let Some((rec, weights)) = face.triangle.intersect_barycentric(ray) {
                let nearer = best.as_ref().map_or(true, |(b, _, _)| rec.t < b.t);
                if nearer {
                    best = Some((rec, face, weights));
                }
            }
        }

        let (rec, face, weights) = best?;
        // Corner normals that cancel out fall back to the flat normal
        let normal = face.interpolate_normal(weights).unwrap_or(rec.normal);
        Some(rec.with_normal(normal))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Two triangles per side of the box, wound like the model's outward faces.
fn box_triangles(bounds: &Aabb) -> [Triangle; 12] {
    let lo = bounds.min();
    let hi = bounds.max();
    let v = |x: f64, y: f64, z: f64| Vec3::new(x, y, z);
    let tri = |a: Vec3, b: Vec3, c: Vec3| Triangle::new(a, b, c, Material::None);

    [
        // Front (+z)
        tri(v(lo.x, lo.y, hi.z), v(hi.x, hi.y, hi.z), v(hi.x, lo.y, hi.z)),
        tri(v(lo.x, lo.y, hi.z), v(lo.x, hi.y, hi.z), v(hi.x, hi.y, hi.z)),
        // Back (-z)
        tri(v(hi.x, lo.y, lo.z), v(lo.x, hi.y, lo.z), v(lo.x, lo.y, lo.z)),
        tri(v(hi.x, lo.y, lo.z), v(hi.x, hi.y, lo.z), v(lo.x, hi.y, lo.z)),
        // Left (-x)
        tri(v(lo.x, lo.y, hi.z), v(lo.x, hi.y, lo.z), v(lo.x, lo.y, lo.z)),
        tri(v(lo.x, lo.y, hi.z), v(lo.x, hi.y, hi.z), v(lo.x, hi.y, lo.z)),
        // Right (+x)
        tri(v(hi.x, lo.y, lo.z), v(hi.x, hi.y, hi.z), v(hi.x, lo.y, hi.z)),
        tri(v(hi.x, lo.y, lo.z), v(hi.x, hi.y, lo.z), v(hi.x, hi.y, hi.z)),
        // Top (+y)
        tri(v(lo.x, hi.y, lo.z), v(hi.x, hi.y, hi.z), v(hi.x, hi.y, lo.z)),
        tri(v(lo.x, hi.y, lo.z), v(lo.x, hi.y, hi.z), v(hi.x, hi.y, hi.z)),
        // Bottom (-y)
        tri(v(lo.x, lo.y, hi.z), v(hi.x, lo.y, lo.z), v(hi.x, lo.y, hi.z)),
        tri(v(lo.x, lo.y, hi.z), v(lo.x, lo.y, lo.z), v(hi.x, lo.y, lo.z)),
    ]
}
