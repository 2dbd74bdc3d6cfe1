use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul};

use crate::Interval;

/// Linear RGB color.
///
/// Channels are nominally in [0, 1] but stay unclamped during arithmetic;
/// call [`Color::clamp`] before handing a value to an image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Clamp every channel into [0, 1].
    #[must_use]
    pub fn clamp(self) -> Self {
        Self::new(
            Interval::UNIT.clamp(self.r),
            Interval::UNIT.clamp(self.g),
            Interval::UNIT.clamp(self.b),
        )
    }

    /// Convert to 8-bit RGB, clamping first.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamp();
        [
            (255.0 * c.r).round() as u8,
            (255.0 * c.g).round() as u8,
            (255.0 * c.b).round() as u8,
        ]
    }

    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        Color::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl Div<Color> for Color {
    type Output = Color;

    fn div(self, rhs: Color) -> Color {
        Color::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_arithmetic() {
        let a = Color::new(0.25, 0.5, 0.75);
        let b = Color::new(0.5, 0.5, 2.0);

        assert_eq!(a + b, Color::new(0.75, 1.0, 2.75));
        assert_eq!(a * 2.0, Color::new(0.5, 1.0, 1.5));
        assert_eq!(a * b, Color::new(0.125, 0.25, 1.5));
        assert_eq!(b / 2.0, Color::new(0.25, 0.25, 1.0));
        assert_eq!(b / b, Color::WHITE);
    }

    #[test]
    fn test_color_clamp() {
        let c = Color::new(-0.5, 0.25, 3.0).clamp();
        assert_eq!(c, Color::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(Color::BLACK.to_rgb8(), [0, 0, 0]);
        assert_eq!(Color::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }

    #[test]
    fn test_color_add_assign() {
        let mut c = Color::BLACK;
        c += Color::splat(0.25);
        c += Color::splat(0.25);
        assert_eq!(c, Color::splat(0.5));
        assert!(!c.is_black());
    }
}
