//! Coordinate-aware drawing on top of a raw [`Surface`].

use crate::error::Result;
use crate::surface::{CompositeOp, RadialGradient, Rgba, Surface};
use crate::viewport::Viewport;
use kurbo::{BezPath, PathEl, Point};
use std::f64::consts::TAU;

/// Draws in logical units, see [`crate::viewport`].
///
/// Every primitive maps its points through the current [`Viewport`]
/// before handing them to the surface.
pub struct CoordinateRenderer<S: Surface> {
    surface: S,
    viewport: Viewport,
}

impl<S: Surface> CoordinateRenderer<S> {
    pub fn new(surface: S) -> Self {
        let mut renderer = Self {
            surface,
            viewport: Viewport::default(),
        };
        renderer.resize();
        renderer
    }

    /// Re-read the surface size and replace the mapping.
    pub fn resize(&mut self) {
        let size = self.surface.fit_to_display();
        self.viewport = Viewport::from_size(size);
        log::debug!(
            "viewport {}x{} origin=({}, {}) scale={}",
            size.width,
            size.height,
            self.viewport.origin.x,
            self.viewport.origin.y,
            self.viewport.scale
        );
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn to_pixel(&self, p: Point) -> Point {
        self.viewport.to_pixel(p)
    }

    // ─── Path building ──────────────────────────────────────────────────

    pub fn begin_path(&mut self) {
        self.surface.begin_path();
    }

    pub fn move_to(&mut self, p: Point) {
        let p = self.to_pixel(p);
        self.surface.move_to(p);
    }

    pub fn line_to(&mut self, p: Point) {
        let p = self.to_pixel(p);
        self.surface.line_to(p);
    }

    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        let (c1, c2, p) = (self.to_pixel(c1), self.to_pixel(c2), self.to_pixel(p));
        self.surface.curve_to(c1, c2, p);
    }

    pub fn close_path(&mut self) {
        self.surface.close_path();
    }

    /// Append a logical-space path to the current path.
    pub fn append_path(&mut self, path: &BezPath) {
        let mut last = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    self.move_to(p);
                    subpath_start = p;
                    last = p;
                }
                PathEl::LineTo(p) => {
                    self.line_to(p);
                    last = p;
                }
                // Degree-elevated: the surface only takes cubics.
                PathEl::QuadTo(c, p) => {
                    let c1 = last.lerp(c, 2.0 / 3.0);
                    let c2 = p.lerp(c, 2.0 / 3.0);
                    self.curve_to(c1, c2, p);
                    last = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    self.curve_to(c1, c2, p);
                    last = p;
                }
                PathEl::ClosePath => {
                    self.close_path();
                    last = subpath_start;
                }
            }
        }
    }

    pub fn fill(&mut self) {
        self.surface.fill();
    }

    // ─── Shapes ─────────────────────────────────────────────────────────

    /// Stroke a segment, optionally switching the stroke color first.
    pub fn line(&mut self, from: Point, to: Point, color: Option<Rgba>) {
        self.surface.begin_path();
        self.move_to(from);
        self.line_to(to);
        if let Some(color) = color {
            self.surface.set_stroke_color(color);
        }
        self.surface.stroke();
    }

    /// Fill the closed polygon through `points`. Empty input draws nothing.
    pub fn polygon(&mut self, points: &[Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.surface.set_fill_color(color);
        self.surface.begin_path();
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
        self.surface.close_path();
        self.surface.fill();
    }

    /// Stroke a full circle.
    pub fn circle(&mut self, center: Point, radius: f64, color: Option<Rgba>) -> Result<()> {
        self.surface.begin_path();
        let center = self.to_pixel(center);
        let radius = self.viewport.scale_length(radius);
        self.surface.arc(center, radius, 0.0, TAU)?;
        if let Some(color) = color {
            self.surface.set_stroke_color(color);
        }
        self.surface.stroke();
        Ok(())
    }

    /// Gradient between two logical circles, converted to pixels.
    pub fn radial_gradient(
        &self,
        start: Point,
        start_radius: f64,
        end: Point,
        end_radius: f64,
    ) -> RadialGradient {
        RadialGradient::new(
            self.to_pixel(start),
            self.viewport.scale_length(start_radius),
            self.to_pixel(end),
            self.viewport.scale_length(end_radius),
        )
    }

    pub fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<()> {
        self.surface.set_fill_gradient(gradient)
    }

    pub fn set_composite(&mut self, op: CompositeOp) -> Result<()> {
        self.surface.set_composite(op)
    }

    pub fn save(&mut self) {
        self.surface.save();
    }

    pub fn restore(&mut self) {
        self.surface.restore();
    }
}
