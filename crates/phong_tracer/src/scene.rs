//! Scene container: surfaces, materials, lights and the camera.

use std::sync::Arc;

use crate::{
    AmbientLight, Camera, HitRecord, Hittable, Material, PointLight, Surface, TracerError,
    TracerResult,
};
use phong_math::{Color, Interval, Ray};

/// Everything needed to render one image.
///
/// A scene is built once, then only read while rendering. It owns every
/// surface; materials are shared between surfaces with `Arc`. Dropping the
/// scene releases all of them.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Color returned for rays that hit nothing
    pub background: Color,
    pub ambient: AmbientLight,
    pub materials: Vec<Arc<Material>>,
    pub lights: Vec<PointLight>,
    pub surfaces: Vec<Surface>,
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            background: Color::ZERO,
            ambient: AmbientLight::default(),
            materials: Vec::new(),
            lights: Vec::new(),
            surfaces: Vec::new(),
            camera,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the ambient light intensity.
    pub fn with_ambient(mut self, intensity: Color) -> Self {
        self.ambient = AmbientLight::new(intensity);
        self
    }

    /// Register a material and return the shared handle for surfaces.
    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(Arc::clone(&material));
        material
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn add_surface(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check that the scene can be rendered.
    pub fn validate(&self) -> TracerResult<()> {
        self.camera.check()?;

        if !self.background.is_finite() || !self.ambient.intensity.is_finite() {
            return Err(TracerError::InvalidScene(
                "background and ambient colors must be finite".to_string(),
            ));
        }
        if let Some(i) = self.lights.iter().position(|l| !l.position.is_finite()) {
            return Err(TracerError::InvalidScene(format!(
                "point light {} has a non-finite position",
                i
            )));
        }

        log::debug!(
            "Scene valid: {} surfaces, {} materials, {} lights",
            self.surfaces.len(),
            self.materials.len(),
            self.lights.len()
        );
        Ok(())
    }
}

impl Hittable for Scene {
    /// Nearest hit over every surface (linear scan).
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut nearest = None;

        for surface in &self.surfaces {
            if let Some(rec) = surface.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }

    /// True as soon as any surface blocks the ray.
    fn shadow_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.surfaces.iter().any(|s| s.shadow_hit(ray, ray_t))
    }
}
