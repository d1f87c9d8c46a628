// Recording surface shared by the host-side tests.
#![allow(dead_code)]

use padfx_core::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    FillRect(Rgba),
    StrokeArc {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
        line_width: f64,
    },
    FillArc {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
        global_alpha: f64,
    },
    Save,
    Restore,
}

pub struct Recorder {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<Op>,
    pub global_alpha: f64,
    stack: Vec<f64>,
    pub available: bool,
    pub panic_on_fill: bool,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            global_alpha: 1.0,
            stack: Vec::new(),
            available: true,
            panic_on_fill: false,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, color: Rgba) {
        self.ops.push(Op::FillRect(color));
    }

    fn stroke_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba, line_width: f64) {
        self.ops.push(Op::StrokeArc {
            x,
            y,
            radius,
            color,
            line_width,
        });
    }

    fn fill_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        if self.panic_on_fill {
            panic!("fill_arc failed");
        }
        self.ops.push(Op::FillArc {
            x,
            y,
            radius,
            color,
            global_alpha: self.global_alpha,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.global_alpha);
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        if let Some(a) = self.stack.pop() {
            self.global_alpha = a;
        }
        self.ops.push(Op::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha;
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
