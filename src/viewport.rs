//! Logical-to-pixel mapping.
//!
//! Logical space has its origin at the center of the canvas, +X right and
//! +Y down. The square `[-50, 50] x [-50, 50]` always fits the shorter
//! axis, so shapes keep their proportions whatever the canvas aspect.

use kurbo::{Point, Size};

/// Logical units spanned by the shorter canvas axis.
pub const LOGICAL_EXTENT: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub size: Size,
    /// Pixel position of the logical origin.
    pub origin: Point,
    /// Pixels per logical unit, identical on both axes.
    pub scale: f64,
}

impl Viewport {
    pub fn new(origin: Point, scale: f64) -> Self {
        Self {
            size: Size::new(origin.x * 2.0, origin.y * 2.0),
            origin,
            scale,
        }
    }

    /// Mapping for a canvas of `size` physical pixels.
    pub fn from_size(size: Size) -> Self {
        Self {
            size,
            origin: Point::new(size.width / 2.0, size.height / 2.0),
            scale: size.width.min(size.height) / LOGICAL_EXTENT,
        }
    }

    #[inline]
    pub fn to_pixel(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * self.scale, self.origin.y + p.y * self.scale)
    }

    /// Length in logical units to pixels.
    #[inline]
    pub fn scale_length(&self, len: f64) -> f64 {
        len * self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.scale <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(Size::ZERO)
    }
}
