use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction does not have to be unit length. Intersection routines that
/// need a normalized direction normalize it themselves, and parametric hit
/// times are always expressed in units of the stored direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose origin is nudged `offset` units along `direction`.
    ///
    /// Secondary rays (shadow, reflection, refraction) start on the surface
    /// they leave; the nudge keeps them from hitting that surface again.
    pub fn offset(origin: Vec3, direction: Vec3, offset: f64) -> Self {
        Self::new(origin + direction * offset, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
