//! Software raster surface backed by tiny-skia.

use super::{StrokeStyle, Surface};
use crate::draw::Icon;
use thiserror::Error;
use tiny_skia::{
    FilterQuality, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

/// Errors constructing a raster surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Requested dimensions cannot back a pixel buffer
    #[error("invalid surface size {width}x{height}")]
    InvalidSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

/// In-memory RGBA canvas implementing [`Surface`].
///
/// Strokes with round caps and antialiasing; `clear` resets every pixel to
/// transparent. Geometry outside the pixmap is clipped, matching a real
/// canvas element.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Creates a transparent surface of the given pixel dimensions.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidSize`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Borrows the rendered pixels (premultiplied RGBA).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn draw_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1 as f32, y1 as f32);
        pb.line_to(x2 as f32, y2 as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        let color = tiny_skia::Color::from_rgba(
            style.color.r as f32,
            style.color.g as f32,
            style.color.b as f32,
            style.color.a as f32,
        )
        .unwrap_or(tiny_skia::Color::BLACK);
        paint.set_color(color);

        let stroke = Stroke {
            width: style.thickness as f32,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn draw_image(&mut self, icon: &Icon, x: i32, y: i32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        let sx = width as f32 / icon.width() as f32;
        let sy = height as f32 / icon.height() as f32;
        let transform = Transform::from_scale(sx, sy).post_translate(x as f32, y as f32);

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };

        self.pixmap
            .draw_pixmap(0, 0, icon.pixmap(), &paint, transform, None);
    }
}
