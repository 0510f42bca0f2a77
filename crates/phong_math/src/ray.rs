use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length. Intersection code that
/// assumes |direction| = 1 should work on [`Ray::unit_direction`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Copy of this ray with a unit-length direction.
    ///
    /// A zero direction stays zero.
    pub fn unit_direction(&self) -> Ray {
        Ray::new(self.origin, self.direction.normalize_or_zero())
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}
