//! Parameter handling for the growth and rewiring simulations.

use std::collections::BTreeSet;

use crate::{Result, error::SimulationError};

/// Draw cap applied by the rewiring sampler before an attempt is skipped.
pub const DEFAULT_MAX_REJECTION_ATTEMPTS: usize = 20;

const MIN_GROWTH_NODES: usize = 2;
const MIN_REWIRING_NODES: usize = 1;

/// Configuration for a growing-network simulation.
///
/// # Examples
/// ```
/// use scalefree_core::GrowthParams;
///
/// let params = GrowthParams::new(3, 1, 10)
///     .expect("parameters must be valid")
///     .with_arrival_times([1, 5])
///     .with_rng_seed(7);
/// assert_eq!(params.initial_nodes(), 3);
/// assert_eq!(params.final_node_count(), 13);
/// assert_eq!(params.arrival_times().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthParams {
    initial_nodes: usize,
    edges_per_node: usize,
    steps: usize,
    arrival_times: BTreeSet<usize>,
    rng_seed: Option<u64>,
}

impl GrowthParams {
    /// Creates a parameter set for `steps` arrivals on top of a complete
    /// graph of `initial_nodes` nodes, each arrival bringing `edges_per_node`
    /// edges.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidInitialNodes`] when `initial_nodes`
    /// is below 2 and [`SimulationError::InvalidEdgesPerNode`] when
    /// `edges_per_node` is zero.
    pub fn new(initial_nodes: usize, edges_per_node: usize, steps: usize) -> Result<Self> {
        if initial_nodes < MIN_GROWTH_NODES {
            return Err(SimulationError::InvalidInitialNodes {
                got: initial_nodes,
                min: MIN_GROWTH_NODES,
            });
        }
        if edges_per_node == 0 {
            return Err(SimulationError::InvalidEdgesPerNode { got: 0 });
        }
        Ok(Self {
            initial_nodes,
            edges_per_node,
            steps,
            arrival_times: BTreeSet::new(),
            rng_seed: None,
        })
    }

    /// Replaces the set of arrival times whose nodes are tracked.
    ///
    /// Arrival times are checked against `1..=steps` when the simulation is
    /// constructed.
    #[must_use]
    pub fn with_arrival_times(mut self, arrival_times: impl IntoIterator<Item = usize>) -> Self {
        self.arrival_times = arrival_times.into_iter().collect();
        self
    }

    /// Seeds the simulation RNG. Unseeded runs draw from OS entropy.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the size of the initial complete graph.
    #[must_use]
    pub fn initial_nodes(&self) -> usize {
        self.initial_nodes
    }

    /// Returns the number of edges each arriving node brings.
    #[must_use]
    pub fn edges_per_node(&self) -> usize {
        self.edges_per_node
    }

    /// Returns the number of arrivals.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the arrival times whose nodes are tracked.
    #[must_use]
    pub fn arrival_times(&self) -> &BTreeSet<usize> {
        &self.arrival_times
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Returns the number of nodes once every arrival has joined.
    #[must_use]
    pub fn final_node_count(&self) -> usize {
        self.initial_nodes + self.steps
    }

    pub(crate) fn validate_arrival_times(&self) -> Result<()> {
        match self
            .arrival_times
            .iter()
            .find(|&&arrival| arrival == 0 || arrival > self.steps)
        {
            Some(&arrival) => Err(SimulationError::ArrivalTimeOutOfRange {
                arrival,
                steps: self.steps,
            }),
            None => Ok(()),
        }
    }
}

/// Configuration for the fixed-size rewiring simulation.
///
/// # Examples
/// ```
/// use scalefree_core::{DEFAULT_MAX_REJECTION_ATTEMPTS, RewiringParams};
///
/// let params = RewiringParams::new(100, 2, 500, 42).expect("parameters must be valid");
/// assert_eq!(params.max_rejection_attempts(), DEFAULT_MAX_REJECTION_ATTEMPTS);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewiringParams {
    nodes: usize,
    edges_per_step: usize,
    steps: usize,
    seed: u64,
    max_rejection_attempts: usize,
}

impl RewiringParams {
    /// Creates a parameter set for `steps` rewiring steps over `nodes` nodes.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidInitialNodes`] when `nodes` is zero.
    pub fn new(nodes: usize, edges_per_step: usize, steps: usize, seed: u64) -> Result<Self> {
        if nodes < MIN_REWIRING_NODES {
            return Err(SimulationError::InvalidInitialNodes {
                got: nodes,
                min: MIN_REWIRING_NODES,
            });
        }
        Ok(Self {
            nodes,
            edges_per_step,
            steps,
            seed,
            max_rejection_attempts: DEFAULT_MAX_REJECTION_ATTEMPTS,
        })
    }

    /// Overrides how many weighted draws an attempt may spend before it is
    /// skipped.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidRejectionAttempts`] when `attempts`
    /// is zero.
    pub fn with_max_rejection_attempts(mut self, attempts: usize) -> Result<Self> {
        if attempts == 0 {
            return Err(SimulationError::InvalidRejectionAttempts { got: attempts });
        }
        self.max_rejection_attempts = attempts;
        Ok(self)
    }

    /// Returns the fixed node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of edge attempts per step.
    #[must_use]
    pub fn edges_per_step(&self) -> usize {
        self.edges_per_step
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the RNG seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the weighted-draw cap per attempt.
    #[must_use]
    pub fn max_rejection_attempts(&self) -> usize {
        self.max_rejection_attempts
    }
}
