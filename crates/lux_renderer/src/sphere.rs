//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lux_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    /// Solve |O + tD - C|² = r² and take the smallest positive root.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        // Degenerate sphere or direction
        if self.radius.is_nan() || self.radius <= 0.0 {
            return None;
        }

        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, then the far root when the origin is inside
        let t = if -b - sqrtd > 0.0 {
            (-b - sqrtd) / (2.0 * a)
        } else if -b + sqrtd > 0.0 {
            (-b + sqrtd) / (2.0 * a)
        } else {
            return None;
        };

        let position = ray.at(t);
        let normal = (position - self.center).normalize();
        Some(HitRecord::new(ray, t, normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Color;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Color::WHITE))
    }

    #[test]
    fn test_sphere_hit_front_face() {
        let sphere = unit_sphere();

        for d in [1.0, 2.5, 10.0] {
            let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0 * d), Vec3::Z);
            let rec = sphere.intersect(&ray).unwrap();

            assert!((rec.t - (2.0 * d - 1.0)).abs() < 1e-9);
            assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let rec = sphere.intersect(&ray).unwrap();

        assert!((rec.t - 1.0).abs() < 1e-9);
        // Outward normal even from inside
        assert!((rec.normal - Vec3::X).length() < 1e-9);
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::None);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        let rec = sphere.intersect(&ray).unwrap();

        // t is in units of the stored direction
        assert!((rec.t - 2.0).abs() < 1e-9);
        assert!((rec.position - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), -Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, -3.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_degenerate_sphere_never_hits() {
        let sphere = Sphere::new(Vec3::ZERO, 0.0, Material::None);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());

        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO);
        assert!(unit_sphere().intersect(&ray).is_none());
    }
}
