use crate::error::{RenderError, Result};
use crate::surface::{CompositeOp, RadialGradient, Rgba, Surface};
use kurbo::{Point, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl RenderError {
    pub(crate) fn js(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{value:?}"));
        RenderError::Js(msg)
    }
}

/// `<canvas>` element with its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `#id` in the current document.
    pub fn from_id(id: &str) -> Result<Self> {
        let document = window()
            .ok_or(RenderError::NoWindow)?
            .document()
            .ok_or(RenderError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| RenderError::CanvasNotFound { id: id.to_string() })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::NotACanvas { id: id.to_string() })?;
        Self::new(canvas, id)
    }

    pub fn new(canvas: HtmlCanvasElement, id: &str) -> Result<Self> {
        let unavailable = || RenderError::ContextUnavailable { id: id.to_string() };
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| unavailable())?
            .ok_or_else(unavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| unavailable())?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn fit_to_display(&mut self) -> Size {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        // Assigning the size also clears the bitmap.
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        Size::new(w as f64, h as f64)
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Result<()> {
        self.ctx
            .arc(center.x, center.y, radius, start_angle, end_angle)
            .map_err(RenderError::js)
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_fill_gradient(&mut self, g: &RadialGradient) -> Result<()> {
        let grad = self
            .ctx
            .create_radial_gradient(g.start.x, g.start.y, g.start_radius, g.end.x, g.end.y, g.end_radius)
            .map_err(RenderError::js)?;
        for stop in &g.stops {
            grad.add_color_stop(stop.offset, &stop.color.to_css())
                .map_err(RenderError::js)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&grad);
        Ok(())
    }

    fn set_composite(&mut self, op: CompositeOp) -> Result<()> {
        self.ctx
            .set_global_composite_operation(op.as_str())
            .map_err(RenderError::js)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
