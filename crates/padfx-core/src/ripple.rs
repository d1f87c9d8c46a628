use crate::color::Rgb;
use crate::constants::{RIPPLE_LINE_WIDTH, RIPPLE_MAX_RADIUS, RIPPLE_MIN_OPACITY, RIPPLE_SPEED};
use crate::surface::Surface;
use glam::DVec2;

/// An expanding ring that fades as it grows.
#[derive(Clone, Debug)]
pub struct Ripple {
    pub center: DVec2,
    pub color: Rgb,
    radius: f64,
    opacity: f64,
}

impl Ripple {
    pub fn new(center: DVec2, color: Rgb) -> Self {
        Self {
            center,
            color,
            radius: 0.0,
            opacity: 1.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Grow by one frame. Returns true once the ring has expired.
    pub fn advance(&mut self) -> bool {
        self.radius += RIPPLE_SPEED;
        self.opacity = 1.0 - self.radius / RIPPLE_MAX_RADIUS;
        // Both bounds are checked; with other speeds either may trip first.
        self.radius > RIPPLE_MAX_RADIUS || self.opacity < RIPPLE_MIN_OPACITY
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.stroke_arc(
            self.center.x,
            self.center.y,
            self.radius,
            self.color.with_alpha(self.opacity),
            RIPPLE_LINE_WIDTH,
        );
    }
}
