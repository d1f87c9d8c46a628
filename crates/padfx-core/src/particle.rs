use crate::color::Rgb;
use crate::constants::{
    PARTICLE_ALPHA_DECAY, PARTICLE_FRICTION, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN,
    PARTICLE_SPEED_MAX,
};
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// A small dot thrown out from an activation, slowing and fading.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVec2,
    pub color: Rgb,
    pub radius: f64,
    velocity: DVec2,
    alpha: f64,
    age: u32,
}

impl Particle {
    /// Spawn at `position` with a random radius and velocity drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(position: DVec2, color: Rgb, rng: &mut R) -> Self {
        let radius = rng.gen::<f64>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN;
        let vx = (rng.gen::<f64>() - 0.5) * (rng.gen::<f64>() * PARTICLE_SPEED_MAX);
        let vy = (rng.gen::<f64>() - 0.5) * (rng.gen::<f64>() * PARTICLE_SPEED_MAX);
        Self::with_motion(position, color, radius, DVec2::new(vx, vy))
    }

    pub fn with_motion(position: DVec2, color: Rgb, radius: f64, velocity: DVec2) -> Self {
        Self {
            position,
            color,
            radius,
            velocity,
            alpha: 1.0,
            age: 0,
        }
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Step one frame. Returns true once fully faded.
    pub fn advance(&mut self) -> bool {
        self.velocity *= PARTICLE_FRICTION;
        self.position += self.velocity;
        // Derived from age rather than accumulated so the 50th frame lands on zero.
        self.age += 1;
        self.alpha = 1.0 - PARTICLE_ALPHA_DECAY * f64::from(self.age);
        self.alpha <= 0.0
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        let mut scoped = surface.with_global_alpha(self.alpha);
        scoped.fill_arc(
            self.position.x,
            self.position.y,
            self.radius,
            self.color.with_alpha(1.0),
        );
    }
}
