//! Command definitions and execution for the scalefree CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use scalefree_core::{
    AttachmentModel, DEFAULT_MAX_REJECTION_ATTEMPTS, GrowthOutcome, GrowthParams,
    GrowthSimulation, RewiringOutcome, RewiringParams, RewiringSimulation, SimulationError,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_INITIAL_NODES: usize = 3;
const DEFAULT_EDGES: usize = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "scalefree",
    about = "Simulate graph growth under preferential attachment."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Grow a graph one node per step from a complete seed graph.
    Grow(GrowCommand),
    /// Add preferentially chosen edges to a fixed node set.
    Rewire(RewireCommand),
}

/// Options accepted by the `grow` command.
#[derive(Debug, Args, Clone)]
pub struct GrowCommand {
    /// How arriving nodes choose their neighbours.
    #[arg(long, value_enum, default_value_t = ModelArg::Preferential)]
    pub model: ModelArg,

    /// Size of the initial complete graph.
    #[arg(long = "initial-nodes", default_value_t = DEFAULT_INITIAL_NODES)]
    pub initial_nodes: usize,

    /// Edges brought by each arriving node.
    #[arg(long = "edges-per-node", default_value_t = DEFAULT_EDGES)]
    pub edges_per_node: usize,

    /// Number of arriving nodes.
    #[arg(long)]
    pub steps: usize,

    /// Step whose arriving node has its degree trajectory recorded. Repeatable.
    #[arg(long = "arrival-time")]
    pub arrival_times: Vec<usize>,

    /// Seed for reproducible runs; omitted seeds draw from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `rewire` command.
#[derive(Debug, Args, Clone)]
pub struct RewireCommand {
    /// Fixed number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Edge attempts per step.
    #[arg(long = "edges-per-step", default_value_t = DEFAULT_EDGES)]
    pub edges_per_step: usize,

    /// Number of steps.
    #[arg(long)]
    pub steps: usize,

    /// Seed for the simulation RNG.
    #[arg(long)]
    pub seed: u64,

    /// Weighted draws an attempt may spend before it is skipped.
    #[arg(
        long = "max-rejection-attempts",
        default_value_t = DEFAULT_MAX_REJECTION_ATTEMPTS
    )]
    pub max_rejection_attempts: usize,
}

/// Attachment models selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Degree-proportional target selection.
    Preferential,
    /// Uniform target selection.
    Uniform,
}

impl From<ModelArg> for AttachmentModel {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Preferential => Self::Preferential,
            ModelArg::Uniform => Self::Uniform,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The simulation parameters were rejected.
    #[error(transparent)]
    Core(#[from] SimulationError),
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum SimulationSummary {
    /// Result of the `grow` command.
    Growth {
        /// Attachment model that produced the outcome.
        model: AttachmentModel,
        /// Degrees and tracked trajectories.
        outcome: GrowthOutcome,
    },
    /// Result of the `rewire` command.
    Rewiring {
        /// Degrees and full degree history.
        outcome: RewiringOutcome,
    },
}

impl SimulationSummary {
    /// Returns the label rendered on the `model:` line.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Growth { model, .. } => model.as_str(),
            Self::Rewiring { .. } => "rewiring",
        }
    }

    /// Returns the final degree sequence.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        match self {
            Self::Growth { outcome, .. } => outcome.degrees(),
            Self::Rewiring { outcome } => outcome.degrees(),
        }
    }

    /// Returns the number of edges in the final graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Growth { outcome, .. } => outcome.edge_count(),
            Self::Rewiring { outcome } => outcome.edges_added(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError::Core`] when the simulation parameters are invalid.
///
/// # Examples
/// ```
/// use scalefree_cli::cli::{Cli, Command, RewireCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Rewire(RewireCommand {
///         nodes: 10,
///         edges_per_step: 2,
///         steps: 5,
///         seed: 42,
///         max_rejection_attempts: 20,
///     }),
/// };
/// let summary = run_cli(cli).expect("parameters are valid");
/// assert_eq!(summary.degrees().len(), 10);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<SimulationSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Grow(command) => {
            span.record("command", field::display("grow"));
            run_grow(command)?
        }
        Command::Rewire(command) => {
            span.record("command", field::display("rewire"));
            run_rewire(command)?
        }
    };
    info!(
        model = summary.label(),
        nodes = summary.degrees().len(),
        edges = summary.edge_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.grow",
    err,
    skip(command),
    fields(model = ?command.model, arrivals = command.arrival_times.len()),
)]
pub(super) fn run_grow(command: GrowCommand) -> Result<SimulationSummary, CliError> {
    let GrowCommand {
        model,
        initial_nodes,
        edges_per_node,
        steps,
        arrival_times,
        seed,
    } = command;
    let mut params =
        GrowthParams::new(initial_nodes, edges_per_node, steps)?.with_arrival_times(arrival_times);
    if let Some(value) = seed {
        params = params.with_rng_seed(value);
    }
    let model = AttachmentModel::from(model);
    let outcome = GrowthSimulation::new(params, model)?.run();
    Ok(SimulationSummary::Growth { model, outcome })
}

#[instrument(name = "cli.rewire", err, skip(command), fields(seed = command.seed))]
pub(super) fn run_rewire(command: RewireCommand) -> Result<SimulationSummary, CliError> {
    let RewireCommand {
        nodes,
        edges_per_step,
        steps,
        seed,
        max_rejection_attempts,
    } = command;
    let params = RewiringParams::new(nodes, edges_per_step, steps, seed)?
        .with_max_rejection_attempts(max_rejection_attempts)?;
    let outcome = RewiringSimulation::new(params).run();
    Ok(SimulationSummary::Rewiring { outcome })
}
