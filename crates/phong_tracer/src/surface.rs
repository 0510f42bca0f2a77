//! The closed set of primitives a scene can hold.

use crate::{HitRecord, Hittable, Plane, Sphere, Triangle};
use phong_math::{Interval, Ray};

/// A geometric primitive owned by a [`Scene`](crate::Scene).
#[derive(Debug, Clone)]
pub enum Surface {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Hittable for Surface {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Surface::Sphere(s) => s.hit(ray, ray_t),
            Surface::Plane(p) => p.hit(ray, ray_t),
            Surface::Triangle(t) => t.hit(ray, ray_t),
        }
    }

    fn shadow_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        match self {
            Surface::Sphere(s) => s.shadow_hit(ray, ray_t),
            Surface::Plane(p) => p.shadow_hit(ray, ray_t),
            Surface::Triangle(t) => t.shadow_hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::Plane(plane)
    }
}

impl From<Triangle> for Surface {
    fn from(triangle: Triangle) -> Self {
        Surface::Triangle(triangle)
    }
}
