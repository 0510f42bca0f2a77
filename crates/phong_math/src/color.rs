//! RGB color helpers.
//!
//! Colors share the vector type: r, g, b live in x, y, z. Channel values are
//! unbounded while light is accumulated and only clamped for display.

use crate::Vec3;

/// Color type alias (r, g, b in x, y, z)
pub type Color = Vec3;

/// Clamp each channel into [0, 1]. NaN channels become 0.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(clamp_01(color.x), clamp_01(color.y), clamp_01(color.z))
}

#[inline]
fn clamp_01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Convert a color to 8-bit RGB, clamping first.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp_color(color);
    [
        (255.0 * c.x).round() as u8,
        (255.0 * c.y).round() as u8,
        (255.0 * c.z).round() as u8,
    ]
}

/// Mirror `l` about the unit normal `n`.
///
/// `l` points away from the surface and so does the result, with the same
/// length as `l`.
#[inline]
pub fn mirror_reflect(l: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(l) * n - l
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_color_range() {
        let c = clamp_color(Color::new(-0.5, 0.25, 3.0));
        assert_eq!(c, Color::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_clamp_color_idempotent() {
        let samples = [
            Color::new(-1.0, 0.5, 2.0),
            Color::new(0.0, 1.0, 0.999),
            Color::new(1e9, -1e9, 0.3),
        ];
        for c in samples {
            let once = clamp_color(c);
            assert_eq!(clamp_color(once), once);
        }
    }

    #[test]
    fn test_clamp_color_monotone() {
        let c = Color::new(0.75, 1.5, -0.2);
        let clamped = clamp_color(c);

        // Never raises a channel above its input unless it was negative.
        assert!(clamped.x <= c.x);
        assert!(clamped.y <= c.y);
        assert!(clamped.z >= c.z);
        assert!(clamped.z >= 0.0);
    }

    #[test]
    fn test_clamp_color_nan() {
        let c = clamp_color(Color::new(f64::NAN, 0.5, 0.5));
        assert_eq!(c.x, 0.0);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::new(0.0, 0.5, 2.0)), [0, 128, 255]);
    }

    #[test]
    fn test_mirror_reflect() {
        let n = Vec3::Y;
        let l = Vec3::new(1.0, 1.0, 0.0).normalize();
        let r = mirror_reflect(l, n);

        assert!((r - Vec3::new(-1.0, 1.0, 0.0).normalize()).length() < 1e-12);
        assert!((r.length() - l.length()).abs() < 1e-12);
    }
}
