//! Infinite plane primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lux_math::Vec3;

/// An infinite plane through `center` facing `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    center: Vec3,
    /// Unit normal
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(center: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// Ray parameter where the ray meets the plane through `point` with unit
/// `normal`, or `None` if the ray is parallel or the plane is behind it.
pub(crate) fn ray_plane_t(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f64> {
    let denom = ray.direction().dot(normal);
    // Exact test; near-parallel rays produce huge t and are kept
    if denom == 0.0 || denom.is_nan() {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / denom;
    if t > 0.0 {
        Some(t)
    } else {
        None
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let t = ray_plane_t(ray, self.center, self.normal)?;
        // The fixed normal is reported whichever side the ray comes from
        Some(HitRecord::new(ray, t, self.normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
