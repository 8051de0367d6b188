//! Benchmark parameter types.
//!
//! Each type renders a compact `BenchmarkId` label and converts into the
//! validated core parameters.

use std::fmt;

use scalefree_core::{AttachmentModel, GrowthParams, RewiringParams};

use crate::error::BenchSetupError;

/// Parameters for a growth benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GrowthBenchParams {
    /// Attachment model under test.
    pub model: AttachmentModel,
    /// Size of the initial complete graph.
    pub initial_nodes: usize,
    /// Edges per arriving node.
    pub edges_per_node: usize,
    /// Number of arriving nodes.
    pub steps: usize,
}

impl GrowthBenchParams {
    /// Builds seeded core parameters tracking the first and last arrivals.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Simulation`] when the core rejects the
    /// parameters.
    pub fn to_core(&self, seed: u64) -> Result<GrowthParams, BenchSetupError> {
        let arrivals = [1, self.steps].into_iter().filter(|&arrival| arrival > 0);
        let params = GrowthParams::new(self.initial_nodes, self.edges_per_node, self.steps)?;
        Ok(params.with_arrival_times(arrivals).with_rng_seed(seed))
    }
}

impl fmt::Display for GrowthBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},m={},t={}", self.model, self.edges_per_node, self.steps)
    }
}

/// Parameters for a rewiring benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct RewiringBenchParams {
    /// Fixed number of nodes.
    pub nodes: usize,
    /// Edge attempts per step.
    pub edges_per_step: usize,
    /// Number of steps.
    pub steps: usize,
}

impl RewiringBenchParams {
    /// Builds core parameters with the default rejection cap.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Simulation`] when the core rejects the
    /// parameters.
    pub fn to_core(&self, seed: u64) -> Result<RewiringParams, BenchSetupError> {
        Ok(RewiringParams::new(self.nodes, self.edges_per_step, self.steps, seed)?)
    }
}

impl fmt::Display for RewiringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={},t={}", self.nodes, self.edges_per_step, self.steps)
    }
}
