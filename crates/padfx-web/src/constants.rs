// DOM hooks the page is expected to provide.
pub const CANVAS_ID: &str = "visualizer-canvas";
pub const PALETTE_SCRIPT_ID: &str = "pad-palette";
pub const PAD_SELECTOR: &str = ".pad";
pub const PAD_ACTIVE_CLASS: &str = "active";
