use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Shared, immutable bitmap used as a fill.
///
/// Cloning is cheap (reference counted). Two handles compare equal only when
/// they point at the same bitmap.
#[derive(Clone)]
pub struct ImageHandle(Arc<RgbaImage>);

impl ImageHandle {
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Decodes an image file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageHandle({}x{})", self.width(), self.height())
    }
}

impl From<RgbaImage> for ImageHandle {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}
