//! Fixed-size preferential rewiring.
//!
//! The node set never grows. Each step picks a source node uniformly and
//! tries to attach `m0` edges to it, drawing targets proportionally to their
//! degree. Draws that would create a self-loop or a multi-edge are rejected;
//! an attempt whose draws are all rejected is skipped, so a step may add
//! fewer than `m0` edges.

mod graph;
mod history;

pub use self::history::DegreeHistory;

use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, WeightedIndex},
    rngs::SmallRng,
};
use tracing::{debug, info, instrument};

use crate::params::RewiringParams;

use self::graph::SimpleGraph;

/// Final state of a rewiring simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewiringOutcome {
    history: DegreeHistory,
    degrees: Vec<usize>,
    edges_added: usize,
    skipped_attempts: usize,
}

impl RewiringOutcome {
    /// Returns the degree of every node at every step.
    #[must_use]
    pub fn history(&self) -> &DegreeHistory {
        &self.history
    }

    /// Returns the final degree of every node.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns how many edges the run added.
    #[must_use]
    pub fn edges_added(&self) -> usize {
        self.edges_added
    }

    /// Returns how many attempts were skipped because no valid target was
    /// drawn.
    #[must_use]
    pub fn skipped_attempts(&self) -> usize {
        self.skipped_attempts
    }

    /// Splits the outcome into the degree history and the final degrees.
    #[must_use]
    pub fn into_parts(self) -> (DegreeHistory, Vec<usize>) {
        (self.history, self.degrees)
    }
}

/// A fixed-size rewiring simulation.
///
/// # Examples
/// ```
/// use scalefree_core::{RewiringParams, RewiringSimulation};
///
/// let params = RewiringParams::new(50, 2, 200, 7).expect("parameters must be valid");
/// let outcome = RewiringSimulation::new(params).run();
/// let total: usize = outcome.degrees().iter().sum();
/// assert_eq!(total, 2 * outcome.edges_added());
/// assert_eq!(outcome.edges_added() + outcome.skipped_attempts(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct RewiringSimulation {
    params: RewiringParams,
}

impl RewiringSimulation {
    /// Wraps validated parameters.
    #[must_use]
    pub fn new(params: RewiringParams) -> Self {
        Self { params }
    }

    /// Returns the parameters.
    #[must_use]
    pub fn params(&self) -> &RewiringParams {
        &self.params
    }

    /// Runs the simulation with an RNG seeded from the parameters.
    #[must_use]
    pub fn run(&self) -> RewiringOutcome {
        let mut rng = SmallRng::seed_from_u64(self.params.seed());
        self.run_with_rng(&mut rng)
    }

    /// Runs the simulation drawing from `rng`.
    #[instrument(
        name = "core.rewire",
        skip(self, rng),
        fields(
            nodes = self.params.nodes(),
            edges_per_step = self.params.edges_per_step(),
            steps = self.params.steps(),
            seed = self.params.seed(),
            max_rejection_attempts = self.params.max_rejection_attempts(),
        ),
    )]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> RewiringOutcome {
        let (outcome, _graph) = rewire(&self.params, rng);
        info!(
            edges = outcome.edges_added,
            skipped_attempts = outcome.skipped_attempts,
            "rewiring simulation completed"
        );
        outcome
    }
}

fn rewire<R: Rng + ?Sized>(
    params: &RewiringParams,
    rng: &mut R,
) -> (RewiringOutcome, SimpleGraph) {
    let nodes = params.nodes();
    let mut graph = SimpleGraph::new(nodes);
    let mut history = DegreeHistory::new(nodes, params.steps());
    let mut weights = Vec::with_capacity(nodes);
    let mut edges_added = 0_usize;
    let mut skipped_attempts = 0_usize;

    for step in 1..=params.steps() {
        let source = rng.gen_range(0..nodes);
        let mut skipped_this_step = 0_usize;
        for _ in 0..params.edges_per_step() {
            let target = draw_target(
                &graph,
                source,
                params.max_rejection_attempts(),
                &mut weights,
                rng,
            );
            let added = target.is_some_and(|node| graph.add_edge(source, node));
            if added {
                edges_added += 1;
            } else {
                skipped_this_step += 1;
            }
        }
        if skipped_this_step > 0 {
            debug!(
                step,
                source,
                skipped = skipped_this_step,
                "rewiring attempts skipped"
            );
        }
        skipped_attempts += skipped_this_step;
        history.record(graph.degrees());
    }

    let outcome = RewiringOutcome {
        history,
        degrees: graph.degrees().to_vec(),
        edges_added,
        skipped_attempts,
    };
    (outcome, graph)
}

/// Draws a neighbour for `source` that keeps the graph simple.
///
/// Falls back to a uniform draw over the other nodes while no node other
/// than `source` has any degree.
fn draw_target<R: Rng + ?Sized>(
    graph: &SimpleGraph,
    source: usize,
    max_attempts: usize,
    weights: &mut Vec<usize>,
    rng: &mut R,
) -> Option<usize> {
    if graph.total_degree() == 0 {
        return uniform_other(graph.node_count(), source, rng);
    }

    weights.clear();
    weights.extend_from_slice(graph.degrees());
    if let Some(weight) = weights.get_mut(source) {
        *weight = 0;
    }
    let Ok(distribution) = WeightedIndex::<usize>::new(weights.iter()) else {
        return uniform_other(graph.node_count(), source, rng);
    };

    (0..max_attempts)
        .map(|_| distribution.sample(&mut *rng))
        .find(|&target| target != source && !graph.is_neighbour(source, target))
}

fn uniform_other<R: Rng + ?Sized>(nodes: usize, source: usize, rng: &mut R) -> Option<usize> {
    if nodes < 2 {
        return None;
    }
    let draw = rng.gen_range(0..nodes - 1);
    Some(if draw >= source { draw + 1 } else { draw })
}
