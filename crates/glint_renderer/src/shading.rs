//! Local Phong illumination with hard shadows.

use glint_core::{PointLight, RenderSettings};
use glint_math::{Interval, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable};
use crate::optics::reflect;

/// Light accumulated at a surface point, before material weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalIllumination {
    /// Sum of intensity * max(0, l . n)
    pub diffuse: f32,
    /// Sum of intensity * max(0, r . v)^shininess
    pub specular: f32,
}

/// Accumulate diffuse and specular light at `hit` from every unoccluded light.
///
/// `incoming` is the unit direction of the ray that produced the hit.
pub fn shade(
    world: &dyn Hittable,
    lights: &[PointLight],
    hit: &HitRecord,
    incoming: Vec3,
    settings: &RenderSettings,
) -> LocalIllumination {
    let mut local = LocalIllumination::default();

    for light in lights {
        let to_light = light.position - hit.p;
        let distance = to_light.length();
        let light_dir = to_light.normalize_or_zero();

        if is_occluded(world, hit.p, light_dir, distance, settings) {
            continue;
        }

        local.diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);

        let highlight = (-reflect(-light_dir, hit.normal)).dot(incoming).max(0.0);
        local.specular += light.intensity * highlight.powf(hit.material.specular_exponent);
    }

    local
}

/// Binary visibility: true if any geometry sits between `point` and a light
/// `distance` away along `light_dir`.
pub fn is_occluded(
    world: &dyn Hittable,
    point: Vec3,
    light_dir: Vec3,
    distance: f32,
    settings: &RenderSettings,
) -> bool {
    let shadow_ray = Ray::new(point + light_dir * settings.epsilon, light_dir);
    world
        .hit(&shadow_ray, Interval::new(0.0, settings.max_distance))
        .is_some_and(|blocker| blocker.t < distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Scene, Sphere};
    use std::sync::Arc;

    fn settings() -> RenderSettings {
        RenderSettings::default()
    }

    /// Target sphere hit head-on at (0, 0, -9), plus an optional blocker at (0, 0, -4).
    fn scene(with_blocker: bool) -> Scene {
        let mut spheres = vec![Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Arc::new(Material::ivory()),
        )];
        if with_blocker {
            spheres.push(Sphere::new(
                Vec3::new(0.0, 0.0, -4.0),
                1.0,
                Arc::new(Material::red_rubber()),
            ));
        }
        Scene::new(spheres, Vec::new()).unwrap()
    }

    fn target_hit(scene: &Scene) -> HitRecord<'_> {
        let sphere = &scene.spheres()[0];
        let ray = Ray::new(Vec3::new(0.0, 0.0, -8.5), Vec3::new(0.0, 0.0, -1.0));
        sphere.hit(&ray, Interval::new(0.0, 1000.0)).unwrap()
    }

    #[test]
    fn test_unoccluded_light_contributes() {
        let scene = scene(true);
        let hit = target_hit(&scene);
        let incoming = Vec3::new(0.0, 0.0, -1.0);
        // Off to the side, the shadow ray passes the blocker
        let lights = [PointLight::new(Vec3::new(5.0, 0.0, -5.0), 1.0)];

        let local = shade(&scene, &lights, &hit, incoming, &settings());

        assert!((local.diffuse - 4.0 / 41.0_f32.sqrt()).abs() < 1e-4);
        assert!(local.specular > 0.0);
    }

    #[test]
    fn test_blocked_light_contributes_nothing() {
        let scene = scene(true);
        let hit = target_hit(&scene);
        let incoming = Vec3::new(0.0, 0.0, -1.0);
        // Straight behind the blocker
        let lights = [PointLight::new(Vec3::new(0.0, 0.0, 10.0), 1.0)];

        let local = shade(&scene, &lights, &hit, incoming, &settings());
        assert_eq!(local, LocalIllumination::default());

        // Same light without the blocker: full diffuse and a head-on highlight
        let open = self::scene(false);
        let hit = target_hit(&open);
        let local = shade(&open, &lights, &hit, incoming, &settings());
        assert!((local.diffuse - 1.0).abs() < 1e-5);
        assert!((local.specular - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let scene = scene(true);
        let hit = target_hit(&scene);
        // Light sits between the surface and the blocker
        let lights = [PointLight::new(Vec3::new(0.0, 0.0, -6.0), 2.0)];

        let local = shade(&scene, &lights, &hit, Vec3::new(0.0, 0.0, -1.0), &settings());
        assert!((local.diffuse - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_light_behind_surface_adds_no_diffuse() {
        let scene = scene(false);
        let hit = target_hit(&scene);
        // Behind the target sphere: its own body casts the shadow
        let lights = [PointLight::new(Vec3::new(0.0, 0.0, -30.0), 1.0)];

        let local = shade(&scene, &lights, &hit, Vec3::new(0.0, 0.0, -1.0), &settings());
        assert_eq!(local.diffuse, 0.0);
    }

    #[test]
    fn test_contributions_sum_over_lights() {
        let scene = scene(false);
        let hit = target_hit(&scene);
        let lights = [
            PointLight::new(Vec3::new(0.0, 0.0, 10.0), 1.0),
            PointLight::new(Vec3::new(0.0, 0.0, 20.0), 0.5),
        ];

        let local = shade(&scene, &lights, &hit, Vec3::new(0.0, 0.0, -1.0), &settings());
        assert!((local.diffuse - 1.5).abs() < 1e-5);
    }
}
