// Double precision glam types; the ray offsets used by the shader are below f32 resolution.
pub use glam;
pub use glam::DVec3 as Vec3;

// Lux math types
mod aabb;
mod color;
mod interval;
mod ray;
pub use aabb::Aabb;
pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_cross_and_normalize() {
        let c = Vec3::X.cross(Vec3::Y);
        assert_eq!(c, Vec3::Z);

        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }
}
