use padfx_core::{Rgba, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    #[inline]
    fn circle(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba, line_width: f64) {
        self.circle(x, y, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn fill_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.circle(x, y, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }
}
