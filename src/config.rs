use crate::error::ConfigError;
use std::time::Duration;

/// Default board size.
pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 75;
/// Default pause between generations.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);
/// Default chance for a cell to start alive when randomizing.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Simulation parameters, fixed for the lifetime of a [`Simulation`].
///
/// [`Simulation`]: crate::application::Simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_delay: Duration,
    pub alive_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_delay: DEFAULT_TICK_DELAY,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
        }
    }
}

impl SimConfig {
    /// Config with the given board size and default timing/probability.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Check every field; called once when a simulation is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}
