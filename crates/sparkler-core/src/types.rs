//! 2D drawing types

use glam::{Affine2, Vec2};

/// Size of the drawing surface in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// From a window's physical pixel size
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Rectangle covering the whole surface
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle in local (pre-transform) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` centered on `center`
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x, self.y + self.height),
            Vec2::new(self.x + self.width, self.y + self.height),
        ]
    }
}

/// 2D affine transform applied to a rectangle at draw time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    affine: Affine2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        affine: Affine2::IDENTITY,
    };

    /// Rotation by `angle` radians about `pivot` (clockwise on a y-down surface)
    pub fn rotation_about(pivot: Vec2, angle: f32) -> Self {
        Self {
            affine: Affine2::from_translation(pivot)
                * Affine2::from_angle(angle)
                * Affine2::from_translation(-pivot),
        }
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.affine.transform_point2(point)
    }

    pub fn inverse(&self) -> Self {
        Self {
            affine: self.affine.inverse(),
        }
    }

    /// Linear part as `[x_axis.x, x_axis.y, y_axis.x, y_axis.y]`
    pub fn axes(&self) -> [f32; 4] {
        let m = self.affine.matrix2;
        [m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y]
    }

    pub fn translation(&self) -> Vec2 {
        self.affine.translation
    }
}

/// RGBA color, components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// CSS-style `rgba(r, g, b, a)` with 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// CSS-style `hsl(h, s, l)`: hue in degrees, saturation and lightness in [0, 1]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self {
            r: r + m,
            g: g + m,
            b: b + m,
            a: 1.0,
        }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF8844);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.533).abs() < 0.01);
        assert!((c.b - 0.267).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hsl_warm_spark() {
        // hsl(15, 100%, 90%) = rgb(255, 217, 204)
        let c = Color::from_hsl(15.0, 1.0, 0.9);
        assert!(approx(c.r, 1.0));
        assert!(approx(c.g, 0.85));
        assert!(approx(c.b, 0.8));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hsl_primaries() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert!(approx(red.r, 1.0) && approx(red.g, 0.0) && approx(red.b, 0.0));
        let green = Color::from_hsl(120.0, 1.0, 0.5);
        assert!(approx(green.r, 0.0) && approx(green.g, 1.0) && approx(green.b, 0.0));
        let blue = Color::from_hsl(240.0, 1.0, 0.5);
        assert!(approx(blue.r, 0.0) && approx(blue.g, 0.0) && approx(blue.b, 1.0));
    }

    #[test]
    fn test_rotation_about_keeps_pivot_fixed() {
        let pivot = Vec2::new(240.0, 600.0);
        let t = Transform::rotation_about(pivot, 25f32.to_radians());
        let p = t.transform_point(pivot);
        assert!(approx(p.x, pivot.x) && approx(p.y, pivot.y));
    }

    #[test]
    fn test_rotation_about_is_clockwise_on_screen() {
        // A point straight above the pivot swings to the right
        let pivot = Vec2::new(100.0, 100.0);
        let t = Transform::rotation_about(pivot, std::f32::consts::FRAC_PI_2);
        let p = t.transform_point(Vec2::new(100.0, 50.0));
        assert!(approx(p.x, 150.0));
        assert!(approx(p.y, 100.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::rotation_about(Vec2::new(10.0, 20.0), 0.7);
        let q = Vec2::new(3.0, -4.0);
        let back = t.inverse().transform_point(t.transform_point(q));
        assert!(approx(back.x, q.x) && approx(back.y, q.y));
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(1.5, 1.5)));
        assert!(!r.contains(Vec2::new(2.0, 1.0)));
        assert!(!r.contains(Vec2::new(1.0, -0.1)));
    }

    #[test]
    fn test_centered_square() {
        let r = Rect::centered_square(Vec2::new(10.0, 10.0), 3.0);
        assert_eq!(r, Rect::new(8.5, 8.5, 3.0, 3.0));
    }

    #[test]
    fn test_surface_bounds() {
        let s = SurfaceSize::from_physical(800, 600);
        assert_eq!(s.bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(!s.is_empty());
        assert!(SurfaceSize::new(0.0, 10.0).is_empty());
    }
}
