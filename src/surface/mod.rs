//! Raw 2D drawing surfaces.
//!
//! A [`Surface`] works in physical pixels, mirroring the subset of the
//! Canvas2D API the renderer needs. Coordinate mapping lives one level up
//! in [`crate::renderer::CoordinateRenderer`].

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use crate::error::Result;
use kurbo::{Point, Size};
use std::fmt;

/// 8-bit RGB with a float alpha, the way CSS spells colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// CSS `rgba()` notation.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// `globalCompositeOperation` values used by the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CompositeOp {
    #[default]
    SourceOver,
    /// Per-channel maximum of source and destination.
    Lighten,
    /// Per-channel sum, clamped.
    Lighter,
}

impl CompositeOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeOp::SourceOver => "source-over",
            CompositeOp::Lighten => "lighten",
            CompositeOp::Lighter => "lighter",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start: Point,
    pub start_radius: f64,
    pub end: Point,
    pub end_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(start: Point, start_radius: f64, end: Point, end_radius: f64) -> Self {
        Self {
            start,
            start_radius,
            end,
            end_radius,
            stops: Vec::new(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f32, color: Rgba) -> &mut Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// Pixel-space drawing target.
pub trait Surface {
    /// Match the backing store to the displayed size and return it.
    fn fit_to_display(&mut self) -> Size;

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn curve_to(&mut self, c1: Point, c2: Point, p: Point);
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Result<()>;
    fn close_path(&mut self);

    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_color(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<()>;
    fn set_composite(&mut self, op: CompositeOp) -> Result<()>;

    fn save(&mut self);
    fn restore(&mut self);
}
