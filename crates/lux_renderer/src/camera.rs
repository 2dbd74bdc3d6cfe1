//! Pinhole camera and anti-aliasing sampler.

use crate::Ray;
use lux_math::Vec3;

/// Pinhole camera at the origin looking down +Z, with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    width: f64,
    height: f64,
    aspect_ratio: f64,
    /// tan(fov / 2)
    half_fov_tan: f64,
    /// Samples per pixel edge (at least 1)
    aa_multiplier: u32,
}

impl Camera {
    pub fn new(width: u32, height: u32, fov_degrees: f64, aa_multiplier: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        Self {
            width,
            height,
            aspect_ratio: width / height,
            half_fov_tan: (fov_degrees / 2.0).to_radians().tan(),
            aa_multiplier: aa_multiplier.max(1),
        }
    }

    pub fn aa_multiplier(&self) -> u32 {
        self.aa_multiplier
    }

    /// Number of rays averaged per pixel.
    pub fn samples_per_pixel(&self) -> u64 {
        u64::from(self.aa_multiplier) * u64::from(self.aa_multiplier)
    }

    /// Ray through a point given in pixel coordinates (fractional allowed).
    ///
    /// Pixel space runs from (0, 0) at the top-left to (width, height).
    pub fn ray_through(&self, px: f64, py: f64) -> Ray {
        let x = ((px / self.width) * 2.0 - 1.0) * self.half_fov_tan;
        let y = ((1.0 - (py / self.height) * 2.0) * self.half_fov_tan) / self.aspect_ratio;
        Ray::new(Vec3::ZERO, Vec3::new(x, y, 1.0))
    }

    /// Rays for the N×N sub-cell centers of pixel (x, y), column by column.
    pub fn sample_rays(&self, x: u32, y: u32) -> impl Iterator<Item = Ray> + '_ {
        let n = self.aa_multiplier;
        let step = 1.0 / n as f64;
        (0..n).flat_map(move |i| {
            (0..n).map(move |j| {
                let px = x as f64 + (i as f64 + 0.5) * step;
                let py = y as f64 + (j as f64 + 0.5) * step;
                self.ray_through(px, py)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new(100, 100, 60.0, 1);
        let ray = camera.ray_through(50.0, 50.0);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_corners_span_fov() {
        let camera = Camera::new(200, 100, 90.0, 1);
        let tan = 45f64.to_radians().tan();

        // Top-left corner
        let d = camera.ray_through(0.0, 0.0).direction();
        assert!((d.x + tan).abs() < 1e-12);
        assert!((d.y - tan / 2.0).abs() < 1e-12);

        // Bottom-right corner
        let d = camera.ray_through(200.0, 100.0).direction();
        assert!((d.x - tan).abs() < 1e-12);
        assert!((d.y + tan / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_is_pixel_center() {
        let camera = Camera::new(64, 48, 60.0, 1);
        let rays: Vec<Ray> = camera.sample_rays(10, 20).collect();

        assert_eq!(rays.len(), 1);
        assert_eq!(rays[0], camera.ray_through(10.5, 20.5));
    }

    #[test]
    fn test_sample_grid_is_centered() {
        let camera = Camera::new(64, 48, 60.0, 2);
        let rays: Vec<Ray> = camera.sample_rays(3, 7).collect();

        let expected = [
            camera.ray_through(3.25, 7.25),
            camera.ray_through(3.25, 7.75),
            camera.ray_through(3.75, 7.25),
            camera.ray_through(3.75, 7.75),
        ];
        assert_eq!(rays, expected);
        assert_eq!(camera.samples_per_pixel(), 4);
    }

    #[test]
    fn test_huge_aa_sample_count() {
        let camera = Camera::new(4, 4, 60.0, 70_000);
        assert_eq!(camera.samples_per_pixel(), 4_900_000_000);

        let camera = Camera::new(4, 4, 60.0, u32::MAX);
        assert_eq!(camera.samples_per_pixel(), u64::from(u32::MAX).pow(2));
    }

    #[test]
    fn test_zero_aa_is_one_sample() {
        let camera = Camera::new(10, 10, 60.0, 0);
        assert_eq!(camera.sample_rays(0, 0).count(), 1);
    }
}
