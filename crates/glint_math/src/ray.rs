use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The intersection and shading routines expect `direction` to be unit
/// length. Use [`Ray::towards`] when the direction still needs normalizing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray pointing along the normalized `direction`.
    ///
    /// A zero-length direction stays zero, which every intersector in this
    /// workspace treats as a miss.
    pub fn towards(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction.normalize_or_zero())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the direction can be intersected against (finite and non-zero).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.direction.is_finite() || self.direction.length_squared() == 0.0
    }
}
