//! The demo scene catalogue.
//!
//! Scenes 1-5 are fixed arrangements; scene 6 is a procedurally generated
//! sphere field with a deterministic seed.

use lux_render::{Color, Light, Material, Plane, Scene, Sphere, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of available scenes.
pub fn count() -> u32 {
    6
}

/// Build scene `number`, or `None` for an unknown number.
pub fn build(number: u32) -> Option<Scene> {
    match number {
        1 => Some(mirror_room()),
        2 => Some(lone_sphere()),
        3 => Some(backlit_sphere()),
        4 => Some(mirror_trio()),
        5 => Some(sphere_over_mirror_floor()),
        6 => Some(sphere_field()),
        _ => None,
    }
}

/// One-line description of scene `number`.
pub fn description(number: u32) -> &'static str {
    match number {
        1 => "A room of planes holding two reflective spheres; the left wall is a mirror, the back wall green, the right wall red.",
        2 => "A single red sphere at (0,0,-4) lit from (-10,5,5).",
        3 => "A cyan sphere in front of a reddish back wall, lit from both sides.",
        4 => "Three mirrored spheres over a reflective yellowish floor, lit from above.",
        5 => "A teal sphere above a perfectly mirrored black floor.",
        6 => "A procedural field of small colored spheres around a mirrored centerpiece.",
        _ => "Unknown scene",
    }
}

/// Two reflective spheres inside a box of six planes.
fn mirror_room() -> Scene {
    let mut scene = Scene::new();

    scene.add_light(Light::new(Color::ONE, Vec3::new(10.0, 1.0, 1.0)));

    scene.add_primitive(Sphere::new(
        Vec3::new(3.0, 0.0, -15.0),
        1.0,
        Material::new(Color::new(0.0, 0.0, 1.0)).with_reflectance(0.5),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, -10.0),
        1.0,
        Material::default().with_reflectance(1.0),
    ));

    // Back wall, mirror left wall, red right wall, matching floor/ceiling,
    // and a plane behind the viewer closing the box
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, 0.0, -50.0),
        Vec3::new(0.0, 0.0, 1.0),
        Material::new(Color::new(0.0, 1.0, 0.0)),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(-18.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Material::new(Color::new(0.0, 0.0, 0.0)).with_reflectance(0.5),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(18.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Material::new(Color::new(1.0, 0.0, 0.0)),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Material::new(Color::new(0.8, 1.0, 0.0)),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -10.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Material::new(Color::new(0.8, 1.0, 0.0)),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, -1.0),
        Material::default(),
    ));

    scene
}

/// A single red sphere close to the viewer.
fn lone_sphere() -> Scene {
    let mut scene = Scene::new();
    scene.add_light(Light::new(Color::ONE, Vec3::new(-10.0, 5.0, 5.0)));

    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, -4.0),
        1.0,
        Material::new(Color::new(1.0, 0.0, 0.0)),
    ));

    scene
}

/// A large cyan sphere lit from both sides against a reddish back wall.
fn backlit_sphere() -> Scene {
    let mut scene = Scene::new();

    scene.add_light(Light::new(Color::ONE, Vec3::new(10.0, 0.0, 0.0)));
    scene.add_light(Light::new(Color::ONE, Vec3::new(-10.0, 0.0, 0.0)));

    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, -10.0),
        2.0,
        Material::new(Color::new(0.0, 0.8, 0.8)),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, 0.0, -40.0),
        Vec3::new(0.0, 0.0, 1.0),
        Material::new(Color::new(0.8, 0.2, 0.2)),
    ));

    scene
}

/// Three fully mirrored spheres over a slightly reflective floor.
fn mirror_trio() -> Scene {
    let mut scene = Scene::new();
    scene.add_light(Light::new(Color::ONE, Vec3::new(0.0, 7.0, 0.0)));

    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, -10.0),
        1.0,
        Material::new(Color::new(0.0, 0.0, 0.0)).with_reflectance(1.0),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Material::new(Color::new(0.5, 0.5, 0.0)).with_reflectance(0.2),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(-3.0, 0.0, -11.0),
        1.0,
        Material::new(Color::new(0.5, 0.0, 0.0)).with_reflectance(1.0),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(3.0, 0.0, -11.0),
        1.0,
        Material::new(Color::new(0.0, 0.0, 0.5)).with_reflectance(1.0),
    ));

    scene
}

/// A teal sphere above a black mirror floor.
fn sphere_over_mirror_floor() -> Scene {
    let mut scene = Scene::new();
    scene.add_light(Light::new(Color::ONE, Vec3::new(0.0, 10.0, -10.0)));

    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Material::new(Color::new(0.0, 0.0, 0.0)).with_reflectance(1.0),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, -10.0),
        1.0,
        Material::new(Color::new(0.1, 0.8, 0.6)),
    ));

    scene
}

/// Procedural field: a mirrored centerpiece surrounded by a grid of small
/// randomly colored and jittered spheres over a matte floor.
fn sphere_field() -> Scene {
    // Fixed seed so scene 6 renders identically on every run
    let mut rng = StdRng::seed_from_u64(42);

    let mut scene = Scene::new();
    scene.add_light(Light::new(Color::ONE, Vec3::new(5.0, 12.0, 0.0)));

    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Material::new(Color::new(0.5, 0.5, 0.5)),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.5, -14.0),
        1.5,
        Material::new(Color::new(0.2, 0.2, 0.2)).with_reflectance(0.8),
    ));

    for a in -4i32..4 {
        for b in 0i32..4 {
            let center = Vec3::new(
                a as f32 * 2.0 + 0.9 * rng.gen::<f32>(),
                -0.7,
                -8.0 - b as f32 * 2.0 + 0.9 * rng.gen::<f32>(),
            );

            // Keep clear of the centerpiece
            if (center - Vec3::new(0.0, 0.5, -14.0)).length() < 2.0 {
                continue;
            }

            let color = Color::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
            let reflectance = if rng.gen::<f32>() < 0.25 { 0.4 } else { 0.0 };

            scene.add_primitive(Sphere::new(
                center,
                0.3,
                Material::new(color).with_reflectance(reflectance),
            ));
        }
    }

    scene
}
