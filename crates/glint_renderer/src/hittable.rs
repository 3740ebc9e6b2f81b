//! Hittable trait and HitRecord for ray-sphere intersection.

use glint_core::{Material, Scene, Sphere};
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing away from the sphere center
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Distance along the ray
    pub t: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest hit with `ray_t.min <= t < ray_t.max`.
    ///
    /// `ray.direction` must be unit length; a zero or non-finite
    /// direction never hits anything.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Distance to the nearest intersection of a unit-direction ray with a
/// sphere, at or beyond `t_min`.
///
/// When the near root lies behind `t_min` (origin inside the sphere or
/// past its front face) the far root is used instead.
pub fn sphere_distance(sphere: &Sphere, ray: &Ray, t_min: f32) -> Option<f32> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    if t0 >= t_min {
        Some(t0)
    } else if t1 >= t_min {
        Some(t1)
    } else {
        None
    }
}

fn sphere_hit<'a>(sphere: &'a Sphere, ray: &Ray, t: f32) -> HitRecord<'a> {
    let p = ray.at(t);
    HitRecord {
        p,
        normal: (p - sphere.center).normalize(),
        material: &sphere.material,
        t,
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if ray.is_degenerate() {
            return None;
        }
        sphere_distance(self, ray, ray_t.min)
            .filter(|&t| t < ray_t.max)
            .map(|t| sphere_hit(self, ray, t))
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if ray.is_degenerate() {
            return None;
        }

        // Exhaustive scan; strict `<` keeps the earliest sphere on ties
        let mut nearest: Option<(&Sphere, f32)> = None;
        for sphere in self.spheres() {
            if let Some(t) = sphere_distance(sphere, ray, ray_t.min) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((sphere, t));
                }
            }
        }

        nearest
            .filter(|&(_, t)| t < ray_t.max)
            .map(|(sphere, t)| sphere_hit(sphere, ray, t))
    }
}
