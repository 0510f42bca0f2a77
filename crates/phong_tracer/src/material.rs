//! Phong material coefficients.

use phong_math::Color;

/// Surface appearance for the Phong model.
///
/// Materials are immutable once attached to a surface and are shared
/// between surfaces through `Arc<Material>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient coefficient
    pub k_a: Color,
    /// Diffuse coefficient
    pub k_d: Color,
    /// Specular coefficient
    pub k_r: Color,
    /// Global reflection coefficient (scales the mirrored ray)
    pub k_rg: Color,
    /// Specular exponent
    pub n: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            k_a: Color::ZERO,
            k_d: Color::ZERO,
            k_r: Color::ZERO,
            k_rg: Color::ZERO,
            n: 0.0,
        }
    }
}

impl Material {
    /// Create a material with the given diffuse color.
    ///
    /// The ambient coefficient starts equal to the diffuse one.
    pub fn new(k_d: Color) -> Self {
        Self {
            k_a: k_d,
            k_d,
            ..Default::default()
        }
    }

    /// Set the ambient coefficient.
    pub fn with_ambient(mut self, k_a: Color) -> Self {
        self.k_a = k_a;
        self
    }

    /// Set the specular coefficient and exponent.
    pub fn with_specular(mut self, k_r: Color, n: f64) -> Self {
        self.k_r = k_r;
        self.n = n.max(0.0);
        self
    }

    /// Set the global reflection coefficient.
    pub fn with_reflection(mut self, k_rg: Color) -> Self {
        self.k_rg = k_rg;
        self
    }

    /// Whether reflected rays contribute anything for this material.
    pub fn is_reflective(&self) -> bool {
        self.k_rg != Color::ZERO
    }
}
