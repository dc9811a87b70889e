//! CPU canvas backed by an RGBA8 image
//!
//! Used for headless capture. Pixels are filled when their center maps
//! back inside the rectangle, so rotated rects rasterize the same way the
//! GPU path covers them.

use glam::Vec2;
use image::{Rgba, RgbaImage};
use sparkler_core::{Canvas, Color, Rect, SparklerError, SurfaceSize, Transform};
use std::path::Path;

pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    /// A transparent framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> sparkler_core::Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| SparklerError::CaptureError(format!("{}: {e}", path.display())))
    }

    /// Integer pixel range covering the transformed rect, clipped to the image
    fn coverage_bounds(&self, rect: Rect, transform: Transform) -> Option<(u32, u32, u32, u32)> {
        let corners = rect.corners().map(|c| transform.transform_point(c));
        let min = corners.iter().fold(Vec2::splat(f32::INFINITY), |a, c| a.min(*c));
        let max = corners
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |a, c| a.max(*c));
        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::from_physical(self.width(), self.height())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Transform) {
        if rect.width <= 0.0 || rect.height <= 0.0 || color.a <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.coverage_bounds(rect, transform) else {
            return;
        };

        let inverse = transform.inverse();
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if rect.contains(inverse.transform_point(center)) {
                    let dst = self.image.get_pixel_mut(x, y);
                    *dst = blend_over(*dst, color);
                }
            }
        }
    }
}

/// Source-over compositing of `src` onto a straight-alpha pixel
fn blend_over(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    let sa = src.a.clamp(0.0, 1.0);
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: f32, d: u8| {
        let d = d as f32 / 255.0;
        let v = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
        (v * 255.0).round() as u8
    };

    Rgba([
        channel(src.r, dst.0[0]),
        channel(src.g, dst.0[1]),
        channel(src.b, dst.0[2]),
        (out_a * 255.0).round() as u8,
    ])
}
