//! Command-line interface for the scalefree simulations.
//!
//! `grow` runs the preferential or uniform growth model and `rewire` runs
//! the fixed-size rewiring model. Both render their outcome as tab-separated
//! text.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, GrowCommand, ModelArg, RewireCommand, SimulationSummary, run_cli,
};
pub use render::render_summary;
