//! Decoded icon bitmaps for stamping.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading an uploaded icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// The icon file could not be read
    #[error("failed to read icon file: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes did not decode as a supported image format
    #[error("failed to decode icon image: {0}")]
    Decode(#[from] image::ImageError),
    /// The decoded image had zero width or height
    #[error("icon image has zero width or height")]
    Empty,
}

/// A decoded uploaded image, ready to stamp onto a surface.
///
/// The host hands the raw bytes of whatever file the user selected to
/// [`Icon::decode`]; a failed decode (non-image file) is an error the host
/// drops without installing an icon, so a bad upload is a silent no-op.
/// Icons are read-only after decoding and are stamped directly onto the
/// surface - they never enter the shape store and cannot be erased.
///
/// Pixels are stored as premultiplied RGBA for direct blitting.
pub struct Icon {
    pixmap: tiny_skia::Pixmap,
}

impl Icon {
    /// Decodes an icon from in-memory file bytes (PNG, JPEG, or WebP).
    pub fn decode(bytes: &[u8]) -> Result<Self, IconError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut data = rgba.into_raw();
        // tiny-skia blits premultiplied alpha
        for px in data.chunks_exact_mut(4) {
            let a = px[3] as u16;
            px[0] = ((px[0] as u16 * a) / 255) as u8;
            px[1] = ((px[1] as u16 * a) / 255) as u8;
            px[2] = ((px[2] as u16 * a) / 255) as u8;
        }

        let size = tiny_skia::IntSize::from_wh(width, height).ok_or(IconError::Empty)?;
        let pixmap = tiny_skia::Pixmap::from_vec(data, size).ok_or(IconError::Empty)?;

        Ok(Self { pixmap })
    }

    /// Reads and decodes an icon file from disk.
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Icon width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Icon height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Borrows the decoded pixels for blitting.
    pub(crate) fn pixmap(&self) -> tiny_skia::PixmapRef<'_> {
        self.pixmap.as_ref()
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
