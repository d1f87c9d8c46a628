//! The per-frame loop body: paint the flash, then draw and step every live
//! entity, dropping the ones that expire.

use crate::flash::Flash;
use crate::particle::Particle;
use crate::ripple::Ripple;
use crate::surface::Surface;

pub struct Scene<S: Surface> {
    surface: S,
    ripples: Vec<Ripple>,
    particles: Vec<Particle>,
    flash: Option<Flash>,
    frames: u64,
}

impl<S: Surface> Scene<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            ripples: Vec::new(),
            particles: Vec::new(),
            flash: None,
            frames: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Nothing left to animate.
    pub fn is_idle(&self) -> bool {
        self.ripples.is_empty() && self.particles.is_empty() && self.flash.is_none()
    }

    pub fn push_ripple(&mut self, ripple: Ripple) {
        self.ripples.push(ripple);
    }

    pub fn extend_particles(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Replace any flash still fading.
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Run one frame if the surface can still be drawn on. Returns false,
    /// without drawing, once it cannot; the caller stops scheduling then.
    pub fn frame(&mut self) -> bool {
        if !self.surface.is_available() {
            return false;
        }
        self.tick();
        true
    }

    /// Run one frame. Entities are drawn at their current state, then stepped.
    pub fn tick(&mut self) {
        let Self {
            surface,
            ripples,
            particles,
            flash,
            frames,
        } = self;
        let (w, h) = surface.size();

        let still_fading = match flash.as_mut() {
            Some(f) if f.is_active() => {
                surface.fill_rect(0.0, 0.0, w, h, f.color.with_alpha(f.alpha()));
                f.decay();
                f.is_active()
            }
            _ => {
                surface.clear_rect(0.0, 0.0, w, h);
                false
            }
        };
        if !still_fading {
            *flash = None;
        }

        ripples.retain_mut(|ripple| {
            ripple.render(surface);
            let expired = ripple.advance();
            if expired {
                log::trace!("ripple at ({:.1}, {:.1}) expired", ripple.center.x, ripple.center.y);
            }
            !expired
        });

        particles.retain_mut(|particle| {
            particle.render(surface);
            !particle.advance()
        });

        *frames += 1;
    }
}
