//! Ray casting and shading.
//!
//! [`trace`] is the core engine: it finds the nearest visible surface along a
//! ray, accumulates the Phong contribution of every unoccluded light, and
//! follows a mirror bounce while the budget lasts. It is a pure function of
//! (ray, depth, scene); the scene is only read, so traces may run
//! concurrently.

use lux_core::{Color, Primitive, Scene};
use lux_math::{Interval, Ray, Vec3};

/// Bias rejecting self-intersection at a ray's own origin.
pub const EPSILON: f32 = 1e-4;

/// Bounce budget used for frame rendering.
pub const DEFAULT_BOUNCES: u32 = 5;

/// Distances at which a primary or reflection hit is valid.
const HIT_WINDOW: Interval = Interval::new(EPSILON, f32::INFINITY);

/// Distances at which a shadow-ray hit occludes the light.
///
/// The shadow direction's length equals the distance to the light, so the
/// upper bound of 1.0 is what keeps occluders at or beyond the light from
/// casting a shadow.
const SHADOW_WINDOW: Interval = Interval::new(EPSILON, 1.0);

/// Linear scan for the primitive with the smallest valid lambda.
///
/// Strict `<` on the running minimum makes distance ties resolve to the
/// earliest-inserted primitive.
fn nearest_hit<'a>(scene: &'a Scene, ray: &Ray) -> Option<(&'a Primitive, f32)> {
    let mut lambda_min = f32::MAX;
    let mut nearest = None;

    for primitive in scene.primitives() {
        if let Some(lambda) = primitive.intersect(ray) {
            if lambda < lambda_min && HIT_WINDOW.surrounds(lambda) {
                lambda_min = lambda;
                nearest = Some(primitive);
            }
        }
    }

    nearest.map(|primitive| (primitive, lambda_min))
}

/// True if any primitive blocks the segment from the shadow ray's origin to
/// the light (lambda strictly inside (EPSILON, 1)).
fn occluded(scene: &Scene, shadow_ray: &Ray) -> bool {
    scene.primitives().iter().any(|primitive| {
        primitive
            .intersect(shadow_ray)
            .map_or(false, |lambda| SHADOW_WINDOW.surrounds(lambda))
    })
}

/// Compute the color seen along a ray.
///
/// Returns black when the ray escapes the scene. Otherwise accumulates, per
/// unoccluded light, a diffuse term `light.color * material.color * (N.L)`
/// and a highlight `light.specular * material.specular * (N.L)^shininess` -
/// the highlight is driven by N.L rather than the reflection/view angle,
/// which is this renderer's shading model. While `depth > 0` a mirror bounce
/// is traced and added weighted by the material's reflectance (a reflectance
/// of 0 simply contributes nothing). Each channel is clamped to [0, 1]
/// before returning.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    let (primitive, lambda) = match nearest_hit(scene, ray) {
        Some(hit) => hit,
        None => return Color::ZERO,
    };

    let material = primitive.material();
    let point = ray.at(lambda);
    let normal = primitive.normal_at(point);

    let mut color = Color::ZERO;

    for light in scene.lights() {
        // Deliberately not normalized: lambda 1 along this direction is the
        // light itself, which the shadow window depends on.
        let light_dir = light.position - point;

        if occluded(scene, &Ray::new(point, light_dir)) {
            continue;
        }

        let n_dot_l = normal.dot(light_dir.normalize_or_zero()).max(0.0);

        color += light.color * material.color * n_dot_l;
        color += light.specular * material.specular * n_dot_l.powf(material.shininess);
    }

    if depth > 0 {
        let direction = ray.direction();
        let reflection =
            (direction - normal * (2.0 * normal.dot(direction))).normalize_or_zero();
        let reflected = trace(scene, &Ray::new(point, reflection), depth - 1);
        color += reflected * material.reflectance;
    }

    color.clamp(Vec3::ZERO, Vec3::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{Light, Material, Plane, Sphere};

    /// Sphere radius 1 at (0,0,-10) lit from (0,10,-10), viewer at origin.
    fn single_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_light(Light::new(Color::ONE, Vec3::new(0.0, 10.0, -10.0)));
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::default().with_color(Color::new(0.1, 0.8, 0.6)),
        ));
        scene
    }

    /// Ray toward the sphere's upper front face, where N.L is positive. The
    /// hit point is (0, 0.9802, -9.802).
    fn front_face_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.1, -1.0))
    }

    #[test]
    fn test_miss_is_exactly_black() {
        let scene = single_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(trace(&scene, &ray, 5), Color::ZERO);
    }

    #[test]
    fn test_empty_scene_is_black() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(trace(&scene, &ray, 5), Color::ZERO);
    }

    #[test]
    fn test_front_face_sphere_is_lit() {
        let scene = single_sphere_scene();
        let color = trace(&scene, &front_face_ray(), 0);

        // N.L is ~0.976 at the hit point, so the diffuse term carries the
        // base color's green dominance through (plus a small white
        // highlight).
        assert!(color != Color::ZERO);
        assert!(color.y > color.x);
        assert!(color.y > 0.5 && color.y <= 1.0);
    }

    #[test]
    fn test_occluder_between_point_and_light_blocks_it() {
        let mut scene = single_sphere_scene();
        // Halfway along the segment from the hit point to the light: the
        // shadow lambda is ~0.5, inside (EPSILON, 1)
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 5.49, -9.9),
            0.5,
            Material::default(),
        ));

        let color = trace(&scene, &front_face_ray(), 0);

        // The only light is shadowed, so diffuse and specular both vanish
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let lit = trace(&single_sphere_scene(), &front_face_ray(), 0);

        let mut scene = single_sphere_scene();
        // On the same shadow axis but past the light: lambda ~1.45 > 1
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 14.51, -10.1),
            0.5,
            Material::default(),
        ));

        let shadowed = trace(&scene, &front_face_ray(), 0);
        assert_eq!(lit, shadowed);
    }

    #[test]
    fn test_zero_reflectance_ignores_budget() {
        let scene = single_sphere_scene();

        let flat = trace(&scene, &front_face_ray(), 0);
        let deep = trace(&scene, &front_face_ray(), 5);

        assert!(flat != Color::ZERO);
        assert_eq!(flat, deep);
    }

    #[test]
    fn test_reflection_needs_budget() {
        // Mirror floor under the lit sphere: the floor is pitch black on its
        // own and only shows anything through the reflected bounce.
        let mut scene = single_sphere_scene();
        scene.add_primitive(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::new(Color::ZERO)
                .with_specular(Color::ZERO)
                .with_reflectance(1.0),
        ));

        // Down onto the floor at (0,-1,-4); the mirror direction runs up
        // toward the sphere's lit upper half
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -2.0, -8.0));

        let without_bounce = trace(&scene, &ray, 0);
        let with_bounce = trace(&scene, &ray, 5);

        assert_eq!(without_bounce, Color::ZERO);
        assert!(with_bounce != Color::ZERO);
        assert!(with_bounce.y > with_bounce.x);
    }

    #[test]
    fn test_channels_stay_in_unit_range() {
        // Stack bright lights so the raw accumulation far exceeds 1
        let mut scene = Scene::new();
        for _ in 0..8 {
            scene.add_light(Light::new(Color::ONE, Vec3::new(0.0, 10.0, -10.0)));
        }
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::default(),
        ));

        let color = trace(&scene, &front_face_ray(), 5);

        assert_eq!(color, Color::ONE);
        for channel in [color.x, color.y, color.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn test_tie_break_keeps_first_inserted() {
        // Two identical spheres at the same distance with different colors;
        // the first one added must win the tie.
        let mut scene = Scene::new();
        scene.add_light(Light::new(Color::ONE, Vec3::ZERO));
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::new(Color::new(1.0, 0.0, 0.0)).with_specular(Color::ZERO),
        ));
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::new(Color::new(0.0, 1.0, 0.0)).with_specular(Color::ZERO),
        ));

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)), 0);

        assert!(color.x > 0.9);
        assert_eq!(color.y, 0.0);
    }

    #[test]
    fn test_nearest_hit_analytic_root() {
        // Radius 2 at z = -20: the smaller quadratic root along a unit
        // direction is 18.
        let mut scene = Scene::new();
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -20.0),
            2.0,
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let (primitive, lambda) = nearest_hit(&scene, &ray).unwrap();

        assert!((lambda - 18.0).abs() < 1e-3);
        assert!(matches!(primitive, Primitive::Sphere(_)));
    }

    #[test]
    fn test_nearest_hit_prefers_closer_primitive() {
        let mut scene = Scene::new();
        scene.add_primitive(Plane::new(
            Vec3::new(0.0, 0.0, -50.0),
            Vec3::Z,
            Material::default(),
        ));
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let (_, lambda) = nearest_hit(&scene, &ray).unwrap();

        assert!((lambda - 9.0).abs() < 1e-3);
    }
}
