//! Tab-separated rendering of simulation summaries.

use std::io::{self, Write};

use scalefree_core::{DegreeDistribution, DegreeHistory, DegreeTimeSeries};

use super::commands::SimulationSummary;

/// Renders `summary` as tab-separated text.
///
/// The output starts with `model`, `nodes` and `edges` header lines, followed
/// by the degree distribution, the final degree of each node, and the
/// recorded degree trajectories.
///
/// # Errors
/// Returns any I/O error raised while writing to `writer`.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use scalefree_cli::cli::{Cli, Command, RewireCommand, render_summary, run_cli};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Rewire(RewireCommand {
///         nodes: 1,
///         edges_per_step: 1,
///         steps: 2,
///         seed: 0,
///         max_rejection_attempts: 20,
///     }),
/// })?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.starts_with("model: rewiring\nnodes: 1\nedges: 0\n"));
/// assert!(text.ends_with("0\t0,0,0\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &SimulationSummary, mut writer: impl Write) -> io::Result<()> {
    let degrees = summary.degrees();
    writeln!(writer, "model: {}", summary.label())?;
    writeln!(writer, "nodes: {}", degrees.len())?;
    writeln!(writer, "edges: {}", summary.edge_count())?;

    writeln!(writer, "degree distribution:")?;
    for (degree, count) in DegreeDistribution::from_degrees(degrees).iter() {
        writeln!(writer, "{degree}\t{count}")?;
    }

    writeln!(writer, "degrees:")?;
    for (node, degree) in degrees.iter().enumerate() {
        writeln!(writer, "{node}\t{degree}")?;
    }

    writeln!(writer, "trajectories:")?;
    match summary {
        SimulationSummary::Growth { outcome, .. } => {
            write_time_series(&mut writer, outcome.time_series())
        }
        SimulationSummary::Rewiring { outcome } => write_history(&mut writer, outcome.history()),
    }
}

fn write_time_series(writer: &mut impl Write, series: &DegreeTimeSeries) -> io::Result<()> {
    for (arrival, node, trajectory) in series.iter() {
        writeln!(writer, "{arrival}\t{node}\t{}", join(trajectory))?;
    }
    Ok(())
}

fn write_history(writer: &mut impl Write, history: &DegreeHistory) -> io::Result<()> {
    for (node, row) in history.iter() {
        writeln!(writer, "{node}\t{}", join(row))?;
    }
    Ok(())
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
