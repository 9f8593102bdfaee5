//! Procedural ring shapes.
//!
//! Each ring is a band between two jittered 8-vertex Bézier loops: the
//! outer loop runs clockwise and the inner one counter-clockwise, so a
//! nonzero fill leaves the hole open.

use crate::error::Result;
use crate::renderer::CoordinateRenderer;
use crate::surface::{CompositeOp, Rgba, Surface};
use kurbo::{BezPath, Point, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Vertices per outline loop.
pub const VERTICES: usize = 8;

/// Center offsets fall in `[-CENTER_SPREAD / 2, CENTER_SPREAD / 2)`.
pub const CENTER_SPREAD: f64 = 5.0;
pub const BASE_RADIUS: f64 = 20.0;
pub const RADIUS_SPREAD: f64 = 5.0;
pub const BASE_LINE_WIDTH: f64 = 5.0;
pub const LINE_WIDTH_SPREAD: f64 = 2.0;
/// Per-vertex radius jitter, centered on zero.
pub const JITTER: f64 = 5.0;

pub const OUTER_CONTROL_LENGTH: f64 = 8.0;
pub const INNER_CONTROL_LENGTH: f64 = -5.0;
pub const OUTER_ANGLE_STEP: f64 = -TAU / VERTICES as f64;
pub const INNER_ANGLE_STEP: f64 = TAU / VERTICES as f64;

/// Gradient band is inset from the nominal ring edges by this much.
const GRADIENT_INSET: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Red, green, blue, red, ...
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => ColorChannel::Red,
            1 => ColorChannel::Green,
            _ => ColorChannel::Blue,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorChannel::Red => (255, 0, 0),
            ColorChannel::Green => (0, 255, 0),
            ColorChannel::Blue => (0, 0, 255),
        }
    }

    pub fn color(self) -> Rgba {
        let (r, g, b) = self.rgb();
        Rgba::opaque(r, g, b)
    }
}

/// One ring, in logical units.
#[derive(Debug, Clone, PartialEq)]
pub struct RingShape {
    pub center: Point,
    pub radius: f64,
    pub line_width: f64,
    pub outer: [f64; VERTICES],
    pub inner: [f64; VERTICES],
    pub channel: ColorChannel,
}

impl RingShape {
    pub fn generate<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let center = Point::new(
            CENTER_SPREAD * (rng.gen::<f64>() - 0.5),
            CENTER_SPREAD * (rng.gen::<f64>() - 0.5),
        );
        let radius = BASE_RADIUS + RADIUS_SPREAD * rng.gen::<f64>();
        let line_width = BASE_LINE_WIDTH + LINE_WIDTH_SPREAD * rng.gen::<f64>();

        let mut outer = [0.0; VERTICES];
        let mut inner = [0.0; VERTICES];
        for j in 0..VERTICES {
            outer[j] = radius + line_width + JITTER * (rng.gen::<f64>() - 0.5);
            inner[j] = radius - line_width + JITTER * (rng.gen::<f64>() - 0.5);
        }

        Self {
            center,
            radius,
            line_width,
            outer,
            inner,
            channel: ColorChannel::for_index(index),
        }
    }

    /// Outer loop followed by inner loop, as one path.
    pub fn outline(&self) -> BezPath {
        let mut path = ring_path(self.center, &self.outer, OUTER_CONTROL_LENGTH, OUTER_ANGLE_STEP);
        let inner = ring_path(self.center, &self.inner, INNER_CONTROL_LENGTH, INNER_ANGLE_STEP);
        for el in inner.elements() {
            path.push(*el);
        }
        path
    }

    /// Inner and outer radii of the gradient band.
    pub fn gradient_radii(&self) -> (f64, f64) {
        (
            self.radius - self.line_width + GRADIENT_INSET,
            self.radius + self.line_width - GRADIENT_INSET,
        )
    }
}

/// Standard 2D rotation about the origin.
#[inline]
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

/// Closed loop of cubic segments through `radii.len()` vertices.
///
/// Vertex `j` sits at `radii[j]` from `center`, at angle `j * angle_step`.
/// Its outgoing tangent handle is `(0, -control_length)` rotated by the
/// same angle; the incoming handle on the next vertex mirrors it.
pub fn ring_path(center: Point, radii: &[f64], control_length: f64, angle_step: f64) -> BezPath {
    let mut path = BezPath::new();
    let n = radii.len();
    if n == 0 {
        return path;
    }

    let mut a1 = 0.0;
    for j in 0..n {
        let a2 = a1 + angle_step;
        let p1 = center + rotate(Vec2::new(radii[j], 0.0), a1);
        let c1 = p1 + rotate(Vec2::new(0.0, -control_length), a1);
        let p2 = center + rotate(Vec2::new(radii[(j + 1) % n], 0.0), a2);
        let c2 = p2 + rotate(Vec2::new(0.0, control_length), a2);

        if j == 0 {
            path.move_to(p1);
        }
        path.curve_to(c1, c2, p2);
        a1 = a2;
    }
    path.close_path();
    path
}

/// The generated set of rings. Never changes once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    rings: Vec<RingShape>,
}

impl Scene {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let rings = (0..count).map(|i| RingShape::generate(i, rng)).collect();
        log::info!("generated scene with {count} rings");
        Self { rings }
    }

    pub fn rings(&self) -> &[RingShape] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Paint every ring, lightening where they overlap.
    pub fn draw<S: Surface>(&self, renderer: &mut CoordinateRenderer<S>) -> Result<()> {
        renderer.set_composite(CompositeOp::Lighten)?;

        for (i, ring) in self.rings.iter().enumerate() {
            let (r0, r1) = ring.gradient_radii();
            let mut gradient = renderer.radial_gradient(ring.center, r0, ring.center, r1);
            gradient
                .add_color_stop(0.0, Rgba::TRANSPARENT)
                .add_color_stop(0.5, ring.channel.color())
                .add_color_stop(1.0, Rgba::TRANSPARENT);
            renderer.set_fill_gradient(&gradient)?;

            renderer.begin_path();
            renderer.append_path(&ring.outline());
            renderer.fill();

            log::trace!(
                "PAINT ring #{i} {:?} @({:.2}, {:.2}) r={:.2}",
                ring.channel,
                ring.center.x,
                ring.center.y,
                ring.radius
            );
        }
        Ok(())
    }
}
