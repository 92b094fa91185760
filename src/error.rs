use std::error::Error;
use std::fmt;

/// Error for a caller-supplied configuration value that is out of range.
/// Raised synchronously at the call that supplied it; everything past
/// configuration is total over well-formed grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions must both be positive
    InvalidDimensions { rows: usize, cols: usize },
    /// Alive probability must lie in [0, 1]
    InvalidProbability(f64),
    /// A replacement grid must match the simulation's fixed dimensions
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "alive probability must lie in [0, 1], got {p}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "grid is {}x{} but the simulation was built for {}x{}",
                    got.0, got.1, expected.0, expected.1
                )
            }
        }
    }
}

impl Error for ConfigError {}
