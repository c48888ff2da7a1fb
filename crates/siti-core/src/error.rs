use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error(
        "Input appears to be full range (detected sample range [{min:.0}, {max:.0}], \
         expected limited range [{expected_min:.0}, {expected_max:.0}]); \
         re-run with full color range"
    )]
    RangeViolation {
        min: f64,
        max: f64,
        expected_min: f64,
        expected_max: f64,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error(
        "Frame dimension mismatch: expected {}x{}, got {}x{}",
        .expected.1, .expected.0, .actual.1, .actual.0
    )]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Display model input outside [0, 1]: min {min}, max {max}")]
    Domain { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, SitiError>;
