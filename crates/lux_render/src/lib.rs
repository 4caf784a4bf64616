//! Lux renderer - CPU ray tracing.
//!
//! A Whitted-style ray tracer:
//! - Nearest-hit search over the scene's primitives
//! - Shadow rays toward each light
//! - Phong accumulation with an N.L-driven highlight
//! - Bounded recursive mirror reflection
//! - Single-sample and grid-supersampled frame assembly, row-parallel

mod framebuffer;
mod tracer;

pub use framebuffer::{render, render_antialiased, FOCAL_DISTANCE};
pub use tracer::{trace, DEFAULT_BOUNCES, EPSILON};

/// Re-export the scene model and math types for callers
pub use lux_core::{Color, Light, Material, Plane, Primitive, Scene, Sphere};
pub use lux_math::{Interval, Ray, Vec3};
