//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then tests containment with
//! signed-area barycentric coordinates.

use crate::{
    hittable::{HitRecord, Hittable},
    plane::ray_plane_t,
    Material, Ray,
};
use lux_math::{Interval, Vec3};

/// Slack allowed on each barycentric coordinate so hits on shared edges are
/// not lost to rounding.
pub const DEFAULT_CONTAINMENT_TOLERANCE: f64 = 1e-4;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Unit normal from the winding, `None` for zero-area triangles
    normal: Option<Vec3>,
    /// Accepted range for each barycentric coordinate
    bounds: Interval,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::with_tolerance(v0, v1, v2, material, DEFAULT_CONTAINMENT_TOLERANCE)
    }

    /// Create a triangle with a custom containment tolerance.
    pub fn with_tolerance(v0: Vec3, v1: Vec3, v2: Vec3, material: Material, tolerance: f64) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).try_normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            bounds: Interval::unit_with_tolerance(tolerance),
            material,
        }
    }

    /// Face normal, `None` if the triangle has no area.
    pub fn normal(&self) -> Option<Vec3> {
        self.normal
    }

    /// Barycentric weights of `p` for `v0`, `v1` and `v2`.
    ///
    /// Computed from signed areas projected on the face normal, so points
    /// off the supporting plane are projected onto it. Returns `None` for
    /// degenerate triangles.
    pub fn barycentric(&self, p: Vec3) -> Option<[f64; 3]> {
        let n = self.normal?;

        let area_abc = n.dot((self.v1 - self.v0).cross(self.v2 - self.v0));
        let area_pbc = n.dot((self.v1 - p).cross(self.v2 - p));
        let area_pca = n.dot((self.v2 - p).cross(self.v0 - p));

        if area_abc == 0.0 || !area_abc.is_finite() {
            return None;
        }

        let x = area_pbc / area_abc;
        let y = area_pca / area_abc;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some([x, y, 1.0 - x - y])
    }

    /// Intersect and also return the barycentric weights of the hit point.
    pub fn intersect_barycentric(&self, ray: &Ray) -> Option<(HitRecord<'_>, [f64; 3])> {
        let normal = self.normal?;
        let t = ray_plane_t(ray, self.v0, normal)?;

        let rec = HitRecord::new(ray, t, normal, &self.material);
        let weights = self.barycentric(rec.position)?;
        if weights.iter().all(|w| self.bounds.contains(*w)) {
            Some((rec, weights))
        } else {
            None
        }
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.intersect_barycentric(ray).map(|(rec, _)| rec)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Color;

    fn triangle() -> Triangle {
        // Triangle in XY plane at z=1, wound so the normal faces -Z
        Triangle::new(
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Material::diffuse(Color::WHITE),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = tri.intersect(&ray).unwrap();

        assert!((rec.t - 1.0).abs() < 1e-12);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(tri.intersect(&ray).is_none());

        // Hits the plane outside the triangle
        let ray = Ray::new(Vec3::new(2.0, 2.0, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_edge_tolerance() {
        let tri = triangle();

        // Exactly on the bottom edge
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_some());

        // Just past the bottom edge, inside the tolerance
        let ray = Ray::new(Vec3::new(0.0, -1.00001, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_some());

        // Clearly past it
        let ray = Ray::new(Vec3::new(0.0, -1.01, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_barycentric_at_vertices() {
        let tri = triangle();
        let [a, b, c] = [tri.v0, tri.v1, tri.v2];

        let expect = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (v, want) in [a, b, c].into_iter().zip(expect) {
            let got = tri.barycentric(v).unwrap();
            for i in 0..3 {
                assert!((got[i] - want[i]).abs() < 1e-12, "{got:?} != {want:?}");
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        // Collinear vertices
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Material::None);
        assert!(tri.normal().is_none());

        let ray = Ray::new(Vec3::new(0.5, 0.0, -1.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_none());
        assert!(tri.barycentric(Vec3::X).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = triangle();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 1.0), Vec3::X);
        assert!(tri.intersect(&ray).is_none());
    }
}
