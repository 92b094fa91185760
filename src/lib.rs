// Domain layer - Grid data model and the generation-update rule
pub mod domain;

// Application layer - Scheduler driving the simulation
pub mod application;

// Configuration and error taxonomy
pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::{RunState, Simulation};
pub use config::SimConfig;
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::ConfigError;
