//! Degree trajectories recorded for nodes that join at chosen arrival times.

use std::collections::BTreeMap;

/// Degree trajectories keyed by arrival time, then by node id.
///
/// A node tracked from arrival time `t0` holds one degree value per step from
/// `t0` onwards, the first being its degree right after it joined.
///
/// # Examples
/// ```
/// use scalefree_core::{AttachmentModel, GrowthParams, GrowthSimulation};
///
/// let params = GrowthParams::new(3, 1, 4)
///     .expect("parameters must be valid")
///     .with_arrival_times([2])
///     .with_rng_seed(1);
/// let outcome = GrowthSimulation::new(params, AttachmentModel::Uniform)
///     .expect("simulation must be valid")
///     .run();
/// let trajectory = outcome
///     .time_series()
///     .trajectory(2, 4)
///     .expect("node 4 joins at step 2");
/// assert_eq!(trajectory.len(), 3);
/// assert_eq!(trajectory[0], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeTimeSeries {
    tracked: BTreeMap<usize, BTreeMap<usize, Vec<usize>>>,
}

impl DegreeTimeSeries {
    /// Starts recording `node` under `arrival`.
    pub(crate) fn track(&mut self, arrival: usize, node: usize) {
        self.tracked
            .entry(arrival)
            .or_default()
            .entry(node)
            .or_default();
    }

    /// Appends the current degree of every tracked node.
    pub(crate) fn record(&mut self, degrees: &[usize]) {
        for nodes in self.tracked.values_mut() {
            for (node, trajectory) in nodes.iter_mut() {
                trajectory.push(degrees.get(*node).copied().unwrap_or_default());
            }
        }
    }

    /// Returns the trajectories recorded under `arrival`.
    #[must_use]
    pub fn get(&self, arrival: usize) -> Option<&BTreeMap<usize, Vec<usize>>> {
        self.tracked.get(&arrival)
    }

    /// Returns the trajectory of `node` recorded under `arrival`.
    #[must_use]
    pub fn trajectory(&self, arrival: usize, node: usize) -> Option<&[usize]> {
        self.tracked
            .get(&arrival)
            .and_then(|nodes| nodes.get(&node))
            .map(Vec::as_slice)
    }

    /// Iterates over `(arrival, node, trajectory)` in arrival then node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[usize])> + '_ {
        self.tracked.iter().flat_map(|(&arrival, nodes)| {
            nodes
                .iter()
                .map(move |(&node, trajectory)| (arrival, node, trajectory.as_slice()))
        })
    }

    /// Returns the arrival times that have tracked nodes.
    pub fn arrivals(&self) -> impl Iterator<Item = usize> + '_ {
        self.tracked.keys().copied()
    }

    /// Returns `true` when no node is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Consumes the series and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<usize, BTreeMap<usize, Vec<usize>>> {
        self.tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_starts_with_the_current_step() {
        let mut series = DegreeTimeSeries::default();
        series.track(1, 3);
        series.record(&[2, 2, 2, 1]);
        series.track(2, 4);
        series.record(&[3, 2, 2, 2, 1]);

        assert_eq!(series.trajectory(1, 3), Some(&[1, 2][..]));
        assert_eq!(series.trajectory(2, 4), Some(&[1][..]));
        assert_eq!(series.arrivals().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn untracked_arrivals_are_absent() {
        let mut series = DegreeTimeSeries::default();
        series.record(&[1, 1]);
        assert!(series.is_empty());
        assert!(series.get(1).is_none());
        assert_eq!(series.iter().count(), 0);
    }
}
