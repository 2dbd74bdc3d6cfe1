//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lux_math::Vec3;

/// Record of a ray-object intersection.
///
/// Only produced by a successful intersection; a miss is `None`, never a
/// placeholder record. `t` is always strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal. Not flipped toward the ray.
    pub normal: Vec3,
    /// Direction of the ray that produced the hit, as given
    pub incident: Vec3,
    /// Ray parameter of the intersection
    pub t: f64,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    pub fn new(ray: &Ray, t: f64, normal: Vec3, material: &'a Material) -> Self {
        Self {
            position: ray.at(t),
            normal,
            incident: ray.direction(),
            t,
            material,
        }
    }

    /// Same hit with a different shading normal.
    pub fn with_normal(self, normal: Vec3) -> Self {
        Self { normal, ..self }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Intersect a ray with this object, returning the nearest hit in front
    /// of the ray origin.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>>;

    /// The material attached to this object.
    fn material(&self) -> &Material;
}

/// Keep whichever hit is closer. Ties keep `current`.
pub fn closer<'a>(current: Option<HitRecord<'a>>, candidate: HitRecord<'a>) -> Option<HitRecord<'a>> {
    match current {
        Some(best) if best.t <= candidate.t => Some(best),
        _ => Some(candidate),
    }
}
