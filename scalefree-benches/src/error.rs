//! Benchmark setup error type.
//!
//! Lets setup functions propagate parameter validation failures with `?`
//! instead of using `.expect()`.

use scalefree_core::SimulationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Simulation parameters were rejected.
    #[error("simulation parameters rejected: {0}")]
    Simulation(#[from] SimulationError),
}
