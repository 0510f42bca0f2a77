//! Phong Tracer - CPU Ray Tracing
//!
//! A classic recursive ray tracer: one ray per pixel, nearest-hit search over
//! every surface in the scene, Phong lighting from point lights, optional hard
//! shadows and mirror reflection up to a fixed depth.
//!
//! The renderer splits the image into buckets and traces them in parallel
//! with rayon. Scenes are built in code and are read-only while rendering.

mod error;
mod hittable;
mod material;
mod light;
mod sphere;
mod plane;
mod triangle;
mod surface;
mod camera;
mod scene;
mod shading;
mod renderer;
mod bucket;
mod output;

pub use error::{TracerError, TracerResult};
pub use hittable::{HitRecord, Hittable};
pub use material::Material;
pub use light::{AmbientLight, PointLight};
pub use sphere::Sphere;
pub use plane::Plane;
pub use triangle::Triangle;
pub use surface::Surface;
pub use camera::{Camera, ViewPlane};
pub use scene::Scene;
pub use shading::{trace_ray, DEFAULT_TMAX, DEFAULT_TMIN};
pub use renderer::{
    render, render_image, render_pixel, ImageBuffer, RenderConfig, RenderOutput, RenderStats,
};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use output::write_image;

/// Re-export Vec3 and common math types from phong_math
pub use phong_math::{clamp_color, mirror_reflect, Color, Interval, Ray, Vec3};
