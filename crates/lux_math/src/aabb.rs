use crate::{Interval, Vec3};

/// Axis-aligned box, one [`Interval`] per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// Tightest box around `points`, or `EMPTY` if there are none.
    pub fn from_iter_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        points.into_iter().fold(Aabb::EMPTY, |acc, p| acc.include(p))
    }

    /// Copy grown to contain `p`.
    pub fn include(&self, p: Vec3) -> Aabb {
        Self {
            x: self.x.include(p.x),
            y: self.y.include(p.y),
            z: self.z.include(p.z),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.size() < 0.0 || self.y.size() < 0.0 || self.z.size() < 0.0
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Widen every axis thinner than `delta` by `delta`, so flat meshes still
    /// get a box with volume.
    pub fn padded(&self, delta: f64) -> Aabb {
        let pad = |i: Interval| if i.size() < delta { i.expand(delta) } else { i };
        Self {
            x: pad(self.x),
            y: pad(self.y),
            z: pad(self.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_points_is_tight() {
        let aabb = Aabb::from_iter_points([
            Vec3::new(-1.0, 2.0, 0.0),
            Vec3::new(3.0, -2.0, 1.0),
            Vec3::new(0.0, 0.0, -4.0),
        ]);

        assert_eq!(aabb.min(), Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(aabb.max(), Vec3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_no_points_is_empty() {
        assert!(Aabb::from_iter_points(std::iter::empty()).is_empty());
        assert!(!Aabb::EMPTY.include(Vec3::ONE).is_empty());
    }

    #[test]
    fn test_padded_only_widens_flat_axes() {
        let aabb = Aabb::from_iter_points([Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)]).padded(0.0002);

        assert_eq!(aabb.x, Interval::new(0.0, 1.0));
        assert!((aabb.z.min + 0.0001).abs() < 1e-12);
        assert!((aabb.z.max - 0.0001).abs() < 1e-12);
    }
}
