//! Complete degree history of a fixed-size simulation.

/// Degree of every node at every step, stored one row per node.
///
/// Column `0` is the empty initial graph; column `t` is the state after
/// step `t`.
///
/// # Examples
/// ```
/// use scalefree_core::{RewiringParams, RewiringSimulation};
///
/// let params = RewiringParams::new(4, 2, 3, 42).expect("parameters must be valid");
/// let outcome = RewiringSimulation::new(params).run();
/// let history = outcome.history();
/// assert_eq!(history.node_count(), 4);
/// assert_eq!(history.steps(), 3);
/// assert_eq!(history.column(0), Some(vec![0, 0, 0, 0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeHistory {
    rows: Vec<Vec<usize>>,
    columns: usize,
}

impl DegreeHistory {
    pub(super) fn new(nodes: usize, steps: usize) -> Self {
        let mut row = Vec::with_capacity(steps.saturating_add(1));
        row.push(0);
        Self {
            rows: vec![row; nodes],
            columns: 1,
        }
    }

    pub(super) fn record(&mut self, degrees: &[usize]) {
        for (row, &degree) in self.rows.iter_mut().zip(degrees) {
            row.push(degree);
        }
        self.columns += 1;
    }

    /// Returns the number of nodes (rows).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of recorded steps, excluding the initial column.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.columns - 1
    }

    /// Returns the degree trajectory of `node`, of length `steps() + 1`.
    #[must_use]
    pub fn node(&self, node: usize) -> Option<&[usize]> {
        self.rows.get(node).map(Vec::as_slice)
    }

    /// Returns the degree of every node after `step`.
    #[must_use]
    pub fn column(&self, step: usize) -> Option<Vec<usize>> {
        (step < self.columns).then(|| {
            self.rows
                .iter()
                .filter_map(|row| row.get(step).copied())
                .collect()
        })
    }

    /// Iterates over `(node, trajectory)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(node, row)| (node, row.as_slice()))
    }

    /// Consumes the history and returns one row per node.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }
}
