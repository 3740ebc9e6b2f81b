//! Mirror reflection, Snell refraction, and secondary-ray origin bias.

use glint_math::Vec3;

/// Reflect `incident` about the unit normal `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract a unit `incident` direction through a surface with outward unit
/// `normal`, going from air into a medium of index `eta_t`.
///
/// Rays leaving the medium (travelling along the normal) swap the indices
/// and flip the normal. Returns `Vec3::ZERO` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32) -> Vec3 {
    let mut cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = eta_t;
    let mut n = normal;
    if cosi < 0.0 {
        // Inside the object: flip to the ray's side
        cosi = -cosi;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        incident * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Nudge `point` off the surface, onto the side `direction` travels toward.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3, epsilon: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * epsilon
    } else {
        point + normal * epsilon
    }
}
