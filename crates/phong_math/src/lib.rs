// Re-export glam for convenience
pub use glam;
pub use glam::DVec3;

// Phong math types
mod color;
mod interval;
mod ray;

pub use color::{clamp_color, color_to_rgb8, mirror_reflect, Color};
pub use interval::Interval;
pub use ray::Ray;

/// Double precision 3D vector used for all geometry.
pub type Vec3 = DVec3;
