//! Degree distributions of a final degree sequence.

use std::collections::BTreeMap;

/// Number of nodes per degree value.
///
/// # Examples
/// ```
/// use scalefree_core::DegreeDistribution;
///
/// let distribution = DegreeDistribution::from_degrees(&[1, 3, 1, 2, 1]);
/// assert_eq!(distribution.count(1), 3);
/// assert_eq!(distribution.count(4), 0);
/// assert_eq!(distribution.max_degree(), Some(3));
/// assert_eq!(distribution.node_count(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeDistribution {
    counts: BTreeMap<usize, usize>,
    nodes: usize,
}

impl DegreeDistribution {
    /// Tallies `degrees` by value.
    #[must_use]
    pub fn from_degrees(degrees: &[usize]) -> Self {
        let mut counts = BTreeMap::new();
        for &degree in degrees {
            *counts.entry(degree).or_insert(0) += 1;
        }
        Self {
            counts,
            nodes: degrees.len(),
        }
    }

    /// Returns how many nodes have exactly `degree` neighbours.
    #[must_use]
    pub fn count(&self, degree: usize) -> usize {
        self.counts.get(&degree).copied().unwrap_or(0)
    }

    /// Returns the number of tallied nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the largest observed degree.
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Iterates over `(degree, count)` pairs in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&degree, &count)| (degree, count))
    }

    /// Returns the number of nodes whose degree is at least `degree`.
    ///
    /// The complementary cumulative counts are what tail plots and
    /// power-law fits consume.
    #[must_use]
    pub fn count_at_least(&self, degree: usize) -> usize {
        self.counts.range(degree..).map(|(_, &count)| count).sum()
    }
}
