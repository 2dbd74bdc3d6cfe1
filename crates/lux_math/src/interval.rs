/// Closed `f64` range `[min, max]`.
///
/// `min > max` means the range holds nothing; see [`Interval::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Nothing is inside. Growing it by any point yields that point.
    pub const EMPTY: Interval = Interval::new(f64::INFINITY, f64::NEG_INFINITY);

    /// Color channel range.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[-tolerance, 1 + tolerance]`, the accepted range of a barycentric
    /// coordinate.
    pub const fn unit_with_tolerance(tolerance: f64) -> Self {
        Self::new(-tolerance, 1.0 + tolerance)
    }

    /// Width of the range. Negative for empty ranges.
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive membership test. NaN is never inside.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Widen by `delta` in total, half on each end.
    pub fn expand(&self, delta: f64) -> Interval {
        let half = delta * 0.5;
        Interval::new(self.min - half, self.max + half)
    }

    /// Smallest range holding both `self` and `x`.
    pub fn include(&self, x: f64) -> Interval {
        Interval::new(self.min.min(x), self.max.max(x))
    }
}
