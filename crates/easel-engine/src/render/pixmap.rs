use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{Color, ImageHandle};

use super::DrawContext;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum WriteMode {
    Blend,
    Replace,
}

/// CPU raster surface backed by an RGBA bitmap.
///
/// Sampling is one sample per pixel at the pixel center, no anti-aliasing.
/// Rectangles and images use half-open coverage, circles use closed coverage
/// (a pixel whose center lies exactly on the circle is painted).
#[derive(Debug, Clone)]
pub struct Pixmap {
    image: RgbaImage,
    transform: Transform,
    alpha: f32,
}

impl Pixmap {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image, transform: Transform::IDENTITY, alpha: 1.0 }
    }

    /// Straight-alpha RGBA bytes at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Visits every device pixel whose center maps inside `local` (under the
    /// current transform) and writes whatever `shade` returns for it.
    fn raster<F>(&mut self, local: Rect, mode: WriteMode, shade: F)
    where
        F: Fn(Vec2) -> Option<Color>,
    {
        let local = local.normalized();
        if local.is_empty() || !local.is_finite() {
            return;
        }
        let Some(inverse) = self.transform.inverse() else {
            return;
        };

        let corners = local.corners().map(|c| self.transform.apply(c));
        let (mut min, mut max) = (corners[0], corners[0]);
        for c in &corners[1..] {
            min = Vec2::new(min.x.min(c.x), min.y.min(c.y));
            max = Vec2::new(max.x.max(c.x), max.y.max(c.y));
        }

        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        let x0 = min.x.floor().clamp(0.0, w) as u32;
        let y0 = min.y.floor().clamp(0.0, h) as u32;
        let x1 = max.x.ceil().clamp(0.0, w) as u32;
        let y1 = max.y.ceil().clamp(0.0, h) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                let p = inverse.apply(Vec2::new(px as f32 + 0.5, py as f32 + 0.5));
                let Some(src) = shade(p) else {
                    continue;
                };
                let out = match mode {
                    WriteMode::Replace => src,
                    WriteMode::Blend => {
                        let dst = self.image.get_pixel(px, py).0;
                        src.with_opacity(self.alpha)
                            .over(Color::from_srgb_u8(dst[0], dst[1], dst[2], dst[3]))
                    }
                };
                self.image.put_pixel(px, py, Rgba(out.to_srgb_u8()));
            }
        }
    }
}

impl DrawContext for Pixmap {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.raster(rect, WriteMode::Replace, |p| {
            rect.contains(p).then(Color::transparent)
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.raster(rect, WriteMode::Blend, |p| rect.contains(p).then_some(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let radius = radius.abs();
        let bounds = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        self.raster(bounds, WriteMode::Blend, |p| {
            (p.distance(center) <= radius).then_some(color)
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        let (iw, ih) = (image.width(), image.height());
        if iw == 0 || ih == 0 {
            return;
        }
        let dst = rect.normalized();
        let source = image.pixels();
        self.raster(dst, WriteMode::Blend, |p| {
            if !dst.contains(p) {
                return None;
            }
            let u = ((p.x - dst.origin.x) / dst.size.x * iw as f32) as u32;
            let v = ((p.y - dst.origin.y) / dst.size.y * ih as f32) as u32;
            let [r, g, b, a] = source.get_pixel(u.min(iw - 1), v.min(ih - 1)).0;
            Some(Color::from_srgb_u8(r, g, b, a))
        });
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform.translate(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform.rotate(angle);
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    // ── rectangles ────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_is_half_open() {
        let mut pm = Pixmap::new(8, 8);
        pm.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0), red());
        assert_eq!(pm.pixel(2, 2), Some(RED));
        assert_eq!(pm.pixel(4, 4), Some(RED));
        assert_eq!(pm.pixel(5, 5), Some(CLEAR));
        assert_eq!(pm.pixel(1, 2), Some(CLEAR));
    }

    #[test]
    fn fill_rect_clips_to_bitmap() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill_rect(Rect::new(-10.0, -10.0, 100.0, 100.0), red());
        assert_eq!(pm.pixel(0, 0), Some(RED));
        assert_eq!(pm.pixel(3, 3), Some(RED));
    }

    #[test]
    fn clear_rect_resets_pixels() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill_all(red());
        pm.clear_rect(Rect::new(0.0, 0.0, 2.0, 4.0));
        assert_eq!(pm.pixel(1, 1), Some(CLEAR));
        assert_eq!(pm.pixel(2, 1), Some(RED));
    }

    // ── circles ───────────────────────────────────────────────────────────

    #[test]
    fn fill_circle_covers_center_not_corners() {
        let mut pm = Pixmap::new(20, 20);
        pm.fill_circle(Vec2::new(10.0, 10.0), 5.0, red());
        assert_eq!(pm.pixel(10, 10), Some(RED));
        assert_eq!(pm.pixel(6, 10), Some(RED));
        assert_eq!(pm.pixel(5, 5), Some(CLEAR));
        assert_eq!(pm.pixel(16, 10), Some(CLEAR));
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn global_alpha_blends_over_destination() {
        let mut pm = Pixmap::new(1, 1);
        pm.fill_all(Color::WHITE);
        pm.set_global_alpha(0.5);
        pm.fill_all(Color::BLACK);
        let [r, g, b, a] = pm.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        assert!((127..=128).contains(&r) && r == g && g == b);
    }

    #[test]
    fn rotated_frame_moves_paint() {
        // A 4x2 bar at the origin, rotated 90deg about (10, 10), lies vertically
        // below the pivot: x in [8, 10), y in [10, 14).
        let mut pm = Pixmap::new(20, 20);
        pm.translate(Vec2::new(10.0, 10.0));
        pm.rotate(FRAC_PI_2);
        pm.fill_rect(Rect::new(0.0, 0.0, 4.0, 2.0), red());
        pm.rotate(-FRAC_PI_2);
        pm.translate(Vec2::new(-10.0, -10.0));

        assert!(pm.transform().is_identity_within(1e-5));
        assert_eq!(pm.pixel(9, 12), Some(RED));
        assert_eq!(pm.pixel(12, 10), Some(CLEAR));
    }

    #[test]
    fn draw_image_stretches_source() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let handle = ImageHandle::new(src);

        let mut pm = Pixmap::new(4, 2);
        pm.draw_image(&handle, Rect::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(pm.pixel(1, 1), Some(RED));
        assert_eq!(pm.pixel(2, 0), Some([0, 0, 255, 255]));
    }
}
