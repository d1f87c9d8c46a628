use crate::color::{Palette, Rgb};
use crate::constants::PARTICLE_COUNT;
use crate::error::FxError;
use crate::flash::Flash;
use crate::particle::Particle;
use crate::ripple::Ripple;
use crate::scene::Scene;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// One pad press: which pad, and where on the surface its center lies.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub pad: String,
    pub center: DVec2,
}

impl Activation {
    pub fn new(pad: impl Into<String>, x: f64, y: f64) -> Result<Self, FxError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(FxError::NonFiniteCoordinate { x, y });
        }
        Ok(Self {
            pad: pad.into(),
            center: DVec2::new(x, y),
        })
    }
}

/// Turns activations into ripples, particles and a flash.
pub struct Trigger<R: Rng> {
    palette: Palette,
    rng: R,
}

impl<R: Rng> Trigger<R> {
    pub fn new(palette: Palette, rng: R) -> Self {
        Self { palette, rng }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Spawn feedback for `activation` into `scene`; returns the color used.
    pub fn activate<S: Surface>(&mut self, scene: &mut Scene<S>, activation: &Activation) -> Rgb {
        let color = self.palette.resolve(&activation.pad);
        let center = activation.center;

        scene.push_ripple(Ripple::new(center, color));
        scene.set_flash(Flash::new(color));
        scene.extend_particles(
            (0..PARTICLE_COUNT).map(|_| Particle::new(center, color, &mut self.rng)),
        );

        log::debug!(
            "pad {:?} at ({:.1}, {:.1}) -> rgb({})",
            activation.pad,
            center.x,
            center.y,
            color
        );
        color
    }
}
