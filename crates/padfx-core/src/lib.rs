//! Visual feedback for clickable pads: an expanding ring, a burst of fading
//! dots and a brief full-surface flash per activation.
//!
//! Nothing here touches a platform API. Drawing goes through [`Surface`] and
//! randomness through an injected [`rand::Rng`], so the whole loop runs on the
//! host in tests.

pub mod color;
pub mod constants;
pub mod error;
pub mod flash;
pub mod particle;
pub mod ripple;
pub mod scene;
pub mod surface;
pub mod trigger;

pub use color::*;
pub use error::FxError;
pub use flash::Flash;
pub use particle::Particle;
pub use ripple::Ripple;
pub use scene::Scene;
pub use surface::{AlphaScope, Surface};
pub use trigger::{Activation, Trigger};
