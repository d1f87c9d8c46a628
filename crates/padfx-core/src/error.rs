use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FxError {
    #[error("invalid color {0:?}: expected \"R, G, B\"")]
    InvalidColor(String),
    #[error("color channel {0:?} is not an integer in 0..=255")]
    ChannelOutOfRange(String),
    #[error("activation coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("palette: {0}")]
    Palette(String),
}
