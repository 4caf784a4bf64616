//! Lux core - scene model for the ray tracer.
//!
//! This crate provides:
//!
//! - **Surface description**: [`Material`] (base color, specular color,
//!   shininess, reflectance)
//! - **Geometry**: [`Primitive`] with its [`Sphere`] and [`Plane`] variants
//! - **Lighting**: [`Light`] point emitters
//! - **Scene**: the owned collection of primitives and lights handed to the
//!   renderer
//!
//! # Example
//!
//! ```
//! use lux_core::{Light, Material, Scene, Sphere};
//! use lux_math::Vec3;
//!
//! let mut scene = Scene::new();
//! scene.add_light(Light::new(Vec3::ONE, Vec3::new(0.0, 10.0, -10.0)));
//! scene.add_primitive(Sphere::new(
//!     Vec3::new(0.0, 0.0, -10.0),
//!     1.0,
//!     Material::default().with_color(Vec3::new(0.1, 0.8, 0.6)),
//! ));
//! ```

pub mod light;
pub mod material;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use light::Light;
pub use material::{Color, Material};
pub use primitive::{Plane, Primitive, Sphere};
pub use scene::Scene;
