//! Growing-network simulations.
//!
//! Both models start from a complete graph of `n0` nodes and add one node per
//! step, each bringing `m0` edges to distinct existing nodes. They share one
//! growth loop and differ only in how targets are drawn: the preferential
//! model samples from the stub multiset, the uniform model samples node ids
//! directly.

mod stubs;
mod uniform;

use std::fmt;

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    Result, error::SimulationError, params::GrowthParams, rng::simulation_rng,
    time_series::DegreeTimeSeries,
};

use self::{stubs::StubAttachment, uniform::UniformAttachment};

/// Selects how arriving nodes choose their neighbours.
///
/// # Examples
/// ```
/// use scalefree_core::AttachmentModel;
///
/// assert_eq!(AttachmentModel::Preferential.as_str(), "preferential");
/// assert_eq!(AttachmentModel::Uniform.to_string(), "uniform");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentModel {
    /// Targets are drawn with probability proportional to their degree.
    Preferential,
    /// Targets are drawn uniformly among existing nodes.
    Uniform,
}

impl AttachmentModel {
    /// Returns the lowercase label used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preferential => "preferential",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for AttachmentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target-selection strategy plugged into the shared growth loop.
pub(crate) trait AttachmentRule {
    /// Builds the initial complete graph over `initial_nodes` nodes.
    fn seed_complete_graph(&mut self, initial_nodes: usize, degrees: &mut [usize]);

    /// Pushes `count` distinct targets for `new_node` into `targets`.
    ///
    /// Every candidate is an existing node, i.e. an id below `new_node`.
    fn select_targets<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        new_node: usize,
        count: usize,
        targets: &mut Vec<usize>,
    );

    /// Records the edge `{target, new_node}`.
    fn connect(&mut self, target: usize, new_node: usize);
}

/// Final state of a growth simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthOutcome {
    time_series: DegreeTimeSeries,
    degrees: Vec<usize>,
    edges: usize,
}

impl GrowthOutcome {
    /// Returns the trajectories of the tracked nodes.
    #[must_use]
    pub fn time_series(&self) -> &DegreeTimeSeries {
        &self.time_series
    }

    /// Returns the final degree of every node, indexed by node id.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the number of edges in the final graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Splits the outcome into the time series and the degree sequence.
    #[must_use]
    pub fn into_parts(self) -> (DegreeTimeSeries, Vec<usize>) {
        (self.time_series, self.degrees)
    }
}

/// A validated growth simulation ready to run.
///
/// # Examples
/// ```
/// use scalefree_core::{AttachmentModel, GrowthParams, GrowthSimulation};
///
/// let params = GrowthParams::new(3, 1, 2)
///     .expect("parameters must be valid")
///     .with_arrival_times([1, 2])
///     .with_rng_seed(42);
/// let outcome = GrowthSimulation::new(params, AttachmentModel::Preferential)
///     .expect("simulation must be valid")
///     .run();
/// assert_eq!(outcome.degrees().len(), 5);
/// assert_eq!(outcome.degrees().iter().sum::<usize>(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct GrowthSimulation {
    params: GrowthParams,
    model: AttachmentModel,
}

impl GrowthSimulation {
    /// Validates `params` against `model`.
    ///
    /// # Errors
    /// Returns [`SimulationError::ArrivalTimeOutOfRange`] when an arrival time
    /// lies outside `1..=steps`, and [`SimulationError::InsufficientTargets`]
    /// when the preferential model is asked for more edges per node than the
    /// initial graph has nodes.
    pub fn new(params: GrowthParams, model: AttachmentModel) -> Result<Self> {
        params.validate_arrival_times()?;
        if model == AttachmentModel::Preferential
            && params.edges_per_node() > params.initial_nodes()
        {
            return Err(SimulationError::InsufficientTargets {
                edges_per_node: params.edges_per_node(),
                available: params.initial_nodes(),
            });
        }
        Ok(Self { params, model })
    }

    /// Returns the validated parameters.
    #[must_use]
    pub fn params(&self) -> &GrowthParams {
        &self.params
    }

    /// Returns the attachment model.
    #[must_use]
    pub fn model(&self) -> AttachmentModel {
        self.model
    }

    /// Runs the simulation with an RNG built from the configured seed.
    #[must_use]
    pub fn run(&self) -> GrowthOutcome {
        let mut rng = simulation_rng(self.params.rng_seed());
        self.run_with_rng(&mut rng)
    }

    /// Runs the simulation drawing from `rng`.
    #[instrument(
        name = "core.grow",
        skip(self, rng),
        fields(
            model = %self.model,
            initial_nodes = self.params.initial_nodes(),
            edges_per_node = self.params.edges_per_node(),
            steps = self.params.steps(),
            seed = ?self.params.rng_seed(),
        ),
    )]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GrowthOutcome {
        let outcome = match self.model {
            AttachmentModel::Preferential => {
                let mut rule = StubAttachment::with_capacity(&self.params);
                grow(&self.params, &mut rule, rng)
            }
            AttachmentModel::Uniform => grow(&self.params, &mut UniformAttachment, rng),
        };
        info!(
            nodes = outcome.degrees.len(),
            edges = outcome.edges,
            tracked = outcome.time_series.iter().count(),
            "growth simulation completed"
        );
        outcome
    }
}

fn grow<A, R>(params: &GrowthParams, rule: &mut A, rng: &mut R) -> GrowthOutcome
where
    A: AttachmentRule,
    R: Rng + ?Sized,
{
    let initial_nodes = params.initial_nodes();
    let edges_per_node = params.edges_per_node();
    let mut degrees = vec![0_usize; params.final_node_count()];
    rule.seed_complete_graph(initial_nodes, &mut degrees);

    let mut edges = complete_graph_edges(initial_nodes);
    let mut time_series = DegreeTimeSeries::default();
    let mut targets = Vec::with_capacity(edges_per_node);

    for step in 1..=params.steps() {
        let new_node = initial_nodes + step - 1;
        targets.clear();
        rule.select_targets(rng, new_node, edges_per_node.min(new_node), &mut targets);

        for &target in &targets {
            if let Some(degree) = degrees.get_mut(target) {
                *degree += 1;
            }
            rule.connect(target, new_node);
        }
        if let Some(degree) = degrees.get_mut(new_node) {
            *degree = targets.len();
        }
        edges += targets.len();

        if params.arrival_times().contains(&step) {
            time_series.track(step, new_node);
        }
        time_series.record(&degrees);
    }

    GrowthOutcome {
        time_series,
        degrees,
        edges,
    }
}

fn complete_graph_edges(nodes: usize) -> usize {
    (0..nodes).map(|node| nodes - node - 1).sum()
}

#[cfg(test)]
mod tests;
