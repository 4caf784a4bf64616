//! Surface material properties.

use lux_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface properties attached to every primitive.
///
/// Colors are RGB in [0, 1]. `reflectance` weights the recursively traced
/// mirror bounce: 0 = matte, 1 = perfect mirror.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Base (diffuse) color
    pub color: Color,

    /// Specular highlight color
    pub specular: Color,

    /// Shininess exponent for the highlight (>= 0)
    pub shininess: f32,

    /// Mirror reflection coefficient in [0, 1]
    pub reflectance: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            specular: Color::ONE,
            shininess: 100.0,
            reflectance: 0.0,
        }
    }
}

impl Material {
    /// Create a material with the given base color and default highlight.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the specular highlight color.
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    /// Set the shininess exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set the mirror reflection coefficient.
    pub fn with_reflectance(mut self, reflectance: f32) -> Self {
        self.reflectance = reflectance.clamp(0.0, 1.0);
        self
    }
}
