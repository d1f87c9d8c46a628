//! Animation tuning constants.
//!
//! All rates are expressed per frame; one frame is one unit of time.
use crate::color::Rgb;

// Ripple
pub const RIPPLE_MAX_RADIUS: f64 = 150.0;
pub const RIPPLE_SPEED: f64 = 4.0; // radius growth per frame
pub const RIPPLE_MIN_OPACITY: f64 = 0.01; // below this the ring is gone
pub const RIPPLE_LINE_WIDTH: f64 = 5.0;

// Particles
pub const PARTICLE_COUNT: usize = 20; // spawned per activation
pub const PARTICLE_FRICTION: f64 = 0.99; // velocity multiplier per frame
pub const PARTICLE_ALPHA_DECAY: f64 = 0.02;
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f64 = 3.0; // radius drawn from [MIN, MIN + SPAN)
pub const PARTICLE_SPEED_MAX: f64 = 6.0;

// Background flash
pub const FLASH_ALPHA: f64 = 0.3;
pub const FLASH_DECAY: f64 = 0.05;

// Pad highlight duration, honored by the front-end
pub const PAD_ACTIVE_MS: i32 = 200;

/// Color used when a pad identity has no palette entry.
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Reference palette: pad identity and its `"R, G, B"` color.
pub const DEFAULT_PALETTE: [(&str, Rgb); 10] = [
    ("red", Rgb::new(231, 76, 60)),
    ("blue", Rgb::new(52, 152, 219)),
    ("green", Rgb::new(46, 204, 113)),
    ("yellow", Rgb::new(241, 196, 15)),
    ("purple", Rgb::new(155, 89, 186)),
    ("orange", Rgb::new(230, 126, 34)),
    ("pink", Rgb::new(255, 102, 178)),
    ("cyan", Rgb::new(26, 188, 156)),
    ("lime", Rgb::new(164, 222, 2)),
    ("gray", Rgb::new(149, 165, 166)),
];
