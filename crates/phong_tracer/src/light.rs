use phong_math::{Color, Vec3};

/// A point light with a position and emitted intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Positionless base illumination, added regardless of visibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmbientLight {
    pub intensity: Color,
}

impl AmbientLight {
    pub fn new(intensity: Color) -> Self {
        Self { intensity }
    }
}
