//! Render configuration and image output.

use std::path::Path;

use lux_math::Color;

/// Largest accepted anti-aliasing multiplier (16.7M rays per pixel).
pub const MAX_AA_MULTIPLIER: u32 = 4096;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Samples per pixel edge; each pixel averages `aa_multiplier²` rays
    pub aa_multiplier: u32,
    /// Camera field of view in degrees
    pub fov_degrees: f64,
    /// Recursion depth at which reflection and refraction return black
    pub max_depth: u32,
    /// Distance secondary rays are pushed off the surface they start on
    pub ray_offset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            aa_multiplier: 1,
            fov_degrees: 60.0,
            max_depth: 10,
            ray_offset: 1e-7,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the anti-aliasing multiplier.
    pub fn with_aa(mut self, aa_multiplier: u32) -> Self {
        self.aa_multiplier = aa_multiplier;
        self
    }

    /// Set the maximum recursion depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }
}

/// Write-only destination for rendered pixels.
///
/// Pixel (0, 0) is the top-left corner.
pub trait PixelSink {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Store the color of one pixel.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let [r, g, b] = color.to_rgb8();
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Save the buffer; the format follows the file extension (PNG, PPM, ...).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba())
            .ok_or_else(|| {
                image::ImageError::Parameter(image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ))
            })?;
        img.save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::BLACK), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(1.5, 0.0, -0.2)), [255, 0, 0, 255]);
    }

    #[test]
    fn test_image_buffer_layout() {
        let mut image = ImageBuffer::new(3, 2);
        image.set_pixel(2, 1, Color::WHITE);

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixels[5], Color::WHITE);

        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[20..24], &[255, 255, 255, 255]);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(4, 4);
        image.set(1, 1, Color::new(1.0, 0.0, 0.0));

        let path = std::env::temp_dir().join(format!("lux_save_test_{}.png", std::process::id()));
        image.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 0, 0, 255]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_builders() {
        let config = RenderConfig::default()
            .with_resolution(64, 32)
            .with_aa(3)
            .with_max_depth(4)
            .with_fov(90.0);

        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.aa_multiplier, 3);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.fov_degrees, 90.0);
        assert_eq!(config.ray_offset, 1e-7);
    }
}
