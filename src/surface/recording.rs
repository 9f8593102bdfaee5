use super::{CompositeOp, RadialGradient, Rgba, Surface};
use crate::error::Result;
use kurbo::{Point, Size};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Arc { center: Point, radius: f64 },
    ClosePath,
    Fill,
    Stroke,
    FillColor(Rgba),
    StrokeColor(Rgba),
    FillGradient(RadialGradient),
    Composite(CompositeOp),
    Save,
    Restore,
}

/// Headless surface that keeps a log of every call.
///
/// Lets a frame be inspected without a browser.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Simulate the display changing size; picked up on the next fit.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `fill()` calls made while a gradient was the fill style.
    pub fn gradient_fills(&self) -> usize {
        let mut gradient = false;
        let mut count = 0;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillGradient(_) => gradient = true,
                DrawCommand::FillColor(_) => gradient = false,
                DrawCommand::Fill if gradient => count += 1,
                _ => {}
            }
        }
        count
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn fit_to_display(&mut self) -> Size {
        self.size
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push(DrawCommand::LineTo(p));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.push(DrawCommand::CurveTo(c1, c2, p));
    }

    fn arc(&mut self, center: Point, radius: f64, _start: f64, _end: f64) -> Result<()> {
        self.push(DrawCommand::Arc { center, radius });
        Ok(())
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<()> {
        self.push(DrawCommand::FillGradient(gradient.clone()));
        Ok(())
    }

    fn set_composite(&mut self, op: CompositeOp) -> Result<()> {
        self.push(DrawCommand::Composite(op));
        Ok(())
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }
}
