//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use phong_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection. Not necessarily unit length; the
    /// caller normalizes it.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the hit record for the accepted root, or `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Existence-only variant of [`Hittable::hit`] used for shadow rays.
    fn shadow_hit(&self, ray: &Ray, ray_t: Interval) -> bool;
}
