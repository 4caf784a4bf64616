//! Geometric primitives and their ray intersection tests.
//!
//! [`Primitive`] is a closed variant set: every shape the renderer knows is
//! one of its arms, and the intersection and normal logic lives next to the
//! shape it belongs to. `intersect` returns the parametric distance along the
//! ray in units of the (possibly non-unit) direction vector, or `None` on a
//! miss. Callers are responsible for filtering the returned lambda through
//! their own validity window; a plane facing the ray reports its lambda even
//! when it is not positive.

use lux_math::{Ray, Vec3};

use crate::material::Material;

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Solve |origin + lambda * direction - center|^2 = radius^2 for the
    /// nearest valid root.
    ///
    /// Tangent rays (discriminant exactly zero) count as misses. The smaller
    /// root wins when positive; the larger root is only used when the smaller
    /// one is strictly negative.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let a = ray.direction().length_squared();
        let cp = ray.origin() - self.center;
        let b = ray.direction().dot(cp);
        let c = cp.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let lambda1 = (-b - sqrtd) / a;
        let lambda2 = (-b + sqrtd) / a;

        if lambda1 > 0.0 {
            // lambda1 < lambda2
            Some(lambda1)
        } else if lambda1 < 0.0 && lambda2 > 0.0 {
            Some(lambda2)
        } else {
            None
        }
    }

    /// Outward normal at a surface point.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}

/// An infinite plane defined by a point and a normal vector.
///
/// The normal is not required to be unit length.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane from a point on it and its normal.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }

    /// Intersect a ray approaching the plane's front face.
    ///
    /// Rays parallel to the plane or moving away from its front face miss.
    /// The returned lambda may be non-positive when the plane lies behind
    /// the ray origin; the caller's hit window rejects those.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let a_dot_n = self.point.dot(self.normal);
        let p_dot_n = ray.origin().dot(self.normal);
        let v_dot_n = ray.direction().dot(self.normal);

        if v_dot_n < 0.0 {
            Some((a_dot_n - p_dot_n) / v_dot_n)
        } else {
            None
        }
    }

    /// The plane's normal; constant everywhere, the point is ignored.
    pub fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

/// A renderable shape: one of the closed set of geometric variants.
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Parametric distance to the nearest valid intersection, or `None`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Surface normal at a point on the primitive.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(point),
            Primitive::Plane(plane) => plane.normal_at(point),
        }
    }

    /// The primitive's surface material.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Plane(plane) => &plane.material,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
