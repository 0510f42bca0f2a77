//! Camera for ray generation.
//!
//! A pinhole camera with an explicit view-plane window, the way classic
//! perspective projection is set up: the window spans `[left, right]` ×
//! `[bottom, top]` at distance `near` in front of the eye.

use crate::{TracerError, TracerResult};
use phong_math::{Ray, Vec3};

/// View-plane window in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
}

impl ViewPlane {
    /// Window of height 2 whose width matches the image aspect ratio.
    pub fn from_aspect(image_width: u32, image_height: u32, near: f64) -> Self {
        let aspect = image_width as f64 / image_height.max(1) as f64;
        Self {
            left: -aspect,
            right: aspect,
            bottom: -1.0,
            top: 1.0,
            near,
        }
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    image_width: u32,
    image_height: u32,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    view: ViewPlane,

    // Basis, computed once in new()
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera and derive its orthonormal basis.
    ///
    /// `w` points from the look-at point back to the eye, `u` to the right
    /// and `v` up. An up vector parallel to the view direction leaves a zero
    /// basis, which [`Camera::check`] reports.
    pub fn new(
        eye: Vec3,
        look_at: Vec3,
        up: Vec3,
        view: ViewPlane,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let w = (eye - look_at).normalize_or_zero();
        let u = up.cross(w).normalize_or_zero();
        let v = w.cross(u);

        Self {
            image_width,
            image_height,
            eye,
            look_at,
            up,
            view,
            u,
            v,
            w,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn view_plane(&self) -> ViewPlane {
        self.view
    }

    /// Camera basis (u, v, w).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// Generate the ray through image position (px, py).
    ///
    /// Image coordinates grow right and down, so row 0 is the top of the
    /// view-plane window. Pass `x + 0.5, y + 0.5` to sample a pixel centre.
    /// The direction is not normalized.
    pub fn get_ray(&self, px: f64, py: f64) -> Ray {
        let view = &self.view;
        let s = view.left + (view.right - view.left) * px / self.image_width as f64;
        let t = view.top - (view.top - view.bottom) * py / self.image_height as f64;

        let direction = -view.near * self.w + s * self.u + t * self.v;
        Ray::new(self.eye, direction)
    }

    /// Validate the camera before rendering.
    pub fn check(&self) -> TracerResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(TracerError::InvalidScene(format!(
                "image size {}x{} is empty",
                self.image_width, self.image_height
            )));
        }
        if self.u == Vec3::ZERO || self.w == Vec3::ZERO {
            return Err(TracerError::InvalidScene(
                "camera basis is degenerate (eye equals look-at, or up is parallel to the view direction)"
                    .to_string(),
            ));
        }
        let view = &self.view;
        if view.left == view.right || view.bottom == view.top || view.near <= 0.0 {
            return Err(TracerError::InvalidScene(format!(
                "view plane {:?} has no area or a non-positive near distance",
                view
            )));
        }
        Ok(())
    }
}
