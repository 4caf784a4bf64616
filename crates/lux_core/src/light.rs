//! Point light sources.

use lux_math::Vec3;

use crate::material::Color;

/// A positioned point emitter with Phong lighting components.
///
/// The shading engine drives the diffuse term with `color` and the highlight
/// with `specular`; `ambient` and `diffuse` are carried as part of the light
/// description.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// World-space position
    pub position: Vec3,

    /// Primary light color
    pub color: Color,

    /// Ambient component
    pub ambient: Color,

    /// Diffuse component
    pub diffuse: Color,

    /// Specular component
    pub specular: Color,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Color::ONE,
            ambient: Color::new(0.2, 0.2, 0.2),
            diffuse: Color::new(0.8, 0.8, 0.8),
            specular: Color::ONE,
        }
    }
}

impl Light {
    /// Create a light with the given color and position and default
    /// ambient/diffuse/specular components.
    pub fn new(color: Color, position: Vec3) -> Self {
        Self {
            position,
            color,
            ..Default::default()
        }
    }
}
