use crate::color::Rgb;
use crate::constants::{FLASH_ALPHA, FLASH_DECAY};

/// Full-surface color overlay left behind by an activation.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub color: Rgb,
    alpha: f64,
    steps: u32,
}

impl Flash {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            alpha: FLASH_ALPHA,
            steps: 0,
        }
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.alpha > 0.0
    }

    /// Fade by one frame, bottoming out at zero.
    pub fn decay(&mut self) {
        self.steps += 1;
        self.alpha = (FLASH_ALPHA - FLASH_DECAY * f64::from(self.steps)).max(0.0);
    }
}
