//! Surface materials.

use lux_math::Color;

/// How a surface responds to light.
///
/// The variant decides which branch of the shader runs when a ray lands on
/// the surface; the carried color is the surface's base color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Material {
    /// Inert geometry (bounding volumes). Never shaded.
    #[default]
    None,
    /// Lambertian shading with hard shadows from point lights.
    Diffuse { color: Color },
    /// Perfect mirror.
    Reflective { color: Color },
    /// Dielectric with Fresnel-weighted reflection and transmission.
    Refractive {
        color: Color,
        /// Index of refraction, always >= 1.0
        refractive_index: f64,
    },
}

impl Material {
    pub fn diffuse(color: Color) -> Self {
        Material::Diffuse { color }
    }

    pub fn reflective(color: Color) -> Self {
        Material::Reflective { color }
    }

    /// Create a dielectric. Indices below 1.0 are raised to 1.0.
    pub fn refractive(color: Color, refractive_index: f64) -> Self {
        Material::Refractive {
            color,
            refractive_index: refractive_index.max(1.0),
        }
    }

    /// Base color, black for `None`.
    pub fn color(&self) -> Color {
        match *self {
            Material::None => Color::BLACK,
            Material::Diffuse { color }
            | Material::Reflective { color }
            | Material::Refractive { color, .. } => color,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Material::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refractive_index_floor() {
        let m = Material::refractive(Color::WHITE, 0.5);
        assert_eq!(
            m,
            Material::Refractive {
                color: Color::WHITE,
                refractive_index: 1.0
            }
        );
    }

    #[test]
    fn test_material_color() {
        let red = Color::new(1.0, 0.0, 0.0);

        assert_eq!(Material::diffuse(red).color(), red);
        assert_eq!(Material::reflective(red).color(), red);
        assert_eq!(Material::refractive(red, 1.5).color(), red);
        assert_eq!(Material::None.color(), Color::BLACK);
        assert!(Material::default().is_none());
    }
}
