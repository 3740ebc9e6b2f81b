//! Built-in scenes.

use std::sync::Arc;

use glint_math::Vec3;

use crate::scene::{Material, PointLight, Scene, SceneResult, Sphere};

/// One ivory sphere at (1, 1, -10) with radius 1 and no lights.
pub fn single_sphere() -> SceneResult<Scene> {
    let sphere = Sphere::new(Vec3::new(1.0, 1.0, -10.0), 1.0, Arc::new(Material::ivory()));
    Scene::new(vec![sphere], Vec::new())
}

/// Four spheres (ivory, glass, red rubber, mirror) lit by three point lights.
pub fn showcase() -> SceneResult<Scene> {
    let ivory = Arc::new(Material::ivory());
    let glass = Arc::new(Material::glass());
    let red_rubber = Arc::new(Material::red_rubber());
    let mirror = Arc::new(Material::mirror());

    let spheres = vec![
        Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory),
        Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass),
        Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber),
        Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror),
    ];

    let lights = vec![
        PointLight::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
        PointLight::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
        PointLight::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
    ];

    Scene::new(spheres, lights)
}

/// Look up a built-in scene by name.
pub fn by_name(name: &str) -> Option<SceneResult<Scene>> {
    match name {
        "single-sphere" => Some(single_sphere()),
        "showcase" => Some(showcase()),
        _ => None,
    }
}
