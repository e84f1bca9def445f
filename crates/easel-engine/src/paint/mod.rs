//! Paint model for scene nodes.
//!
//! Scope:
//! - color representation (premultiplied alpha) and CSS-style parsing
//! - bitmap handles
//! - the closed fill choice every shape is painted with
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod bitmap;

pub use color::Color;
pub use bitmap::ImageHandle;

use crate::error::SceneError;

/// How a shape is painted: a flat color or a bitmap stretched over its box.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Color(Color),
    Image(ImageHandle),
}

impl Fill {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Fill::Color(color)
    }

    /// Builds a color fill from a CSS-style color string.
    ///
    /// Fails with [`SceneError::TypeMismatch`] when the string is not a color.
    pub fn color_str(s: &str) -> Result<Self, SceneError> {
        Color::parse(s).map(Fill::Color)
    }

    #[inline]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Fill::Color(c) => Some(*c),
            Fill::Image(_) => None,
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill::Color(color)
    }
}

impl From<ImageHandle> for Fill {
    fn from(image: ImageHandle) -> Self {
        Fill::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_str_accepts_colors_only() {
        assert_eq!(Fill::color_str("#000").unwrap(), Fill::Color(Color::BLACK));
        assert!(matches!(Fill::color_str("not-a-color"), Err(SceneError::TypeMismatch(_))));
    }

    #[test]
    fn image_fill_has_no_color() {
        let fill = Fill::from(ImageHandle::new(image::RgbaImage::new(2, 2)));
        assert_eq!(fill.as_color(), None);
    }
}
