//! Abstract 2D drawing surface.
//!
//! The animation core only ever talks to this trait; the web front-end
//! implements it over a canvas 2D context and the tests over a recorder.

use crate::color::Rgba;
use std::ops::{Deref, DerefMut};

pub trait Surface {
    /// Drawable size in surface units: (width, height).
    fn size(&self) -> (f64, f64);

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    /// Full circle outline centered at (x, y).
    fn stroke_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba, line_width: f64);
    /// Filled circle centered at (x, y).
    fn fill_arc(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`.
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);

    /// False once the surface can no longer be drawn on.
    fn is_available(&self) -> bool {
        true
    }

    /// Scope a global-alpha override; the prior state comes back when the
    /// returned guard drops, on every exit path.
    fn with_global_alpha(&mut self, alpha: f64) -> AlphaScope<'_, Self>
    where
        Self: Sized,
    {
        self.save();
        self.set_global_alpha(alpha);
        AlphaScope { surface: self }
    }
}

/// Guard returned by [`Surface::with_global_alpha`].
pub struct AlphaScope<'a, S: Surface> {
    surface: &'a mut S,
}

impl<S: Surface> Deref for AlphaScope<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface> DerefMut for AlphaScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface> Drop for AlphaScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
