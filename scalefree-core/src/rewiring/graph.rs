//! Simple undirected graph over a fixed node set.

use std::collections::BTreeSet;

/// Adjacency sets plus cached degrees.
///
/// Edges are only inserted through [`SimpleGraph::add_edge`], which refuses
/// self-loops and duplicates, so the adjacency stays symmetric and
/// `degrees[i] == adjacency[i].len()` for every node.
#[derive(Clone, Debug)]
pub(super) struct SimpleGraph {
    adjacency: Vec<BTreeSet<usize>>,
    degrees: Vec<usize>,
    total_degree: usize,
}

impl SimpleGraph {
    pub(super) fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); nodes],
            degrees: vec![0; nodes],
            total_degree: 0,
        }
    }

    pub(super) fn node_count(&self) -> usize {
        self.degrees.len()
    }

    pub(super) fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub(super) fn total_degree(&self) -> usize {
        self.total_degree
    }

    pub(super) fn neighbours(&self, node: usize) -> Option<&BTreeSet<usize>> {
        self.adjacency.get(node)
    }

    pub(super) fn is_neighbour(&self, node: usize, other: usize) -> bool {
        self.neighbours(node)
            .is_some_and(|neighbours| neighbours.contains(&other))
    }

    /// Inserts `{left, right}` and returns whether the edge was new.
    pub(super) fn add_edge(&mut self, left: usize, right: usize) -> bool {
        if left == right || left >= self.node_count() || right >= self.node_count() {
            return false;
        }
        if self.is_neighbour(left, right) {
            return false;
        }
        for (node, other) in [(left, right), (right, left)] {
            if let Some(neighbours) = self.adjacency.get_mut(node) {
                neighbours.insert(other);
            }
            if let Some(degree) = self.degrees.get_mut(node) {
                *degree += 1;
            }
        }
        self.total_degree += 2;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = SimpleGraph::new(3);
        assert!(graph.add_edge(0, 2));
        assert!(graph.is_neighbour(0, 2));
        assert!(graph.is_neighbour(2, 0));
        assert_eq!(graph.degrees(), &[1, 0, 1]);
        assert_eq!(graph.total_degree(), 2);
    }

    #[test]
    fn add_edge_refuses_self_loops_and_duplicates() {
        let mut graph = SimpleGraph::new(3);
        assert!(!graph.add_edge(1, 1));
        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 0));
        assert!(!graph.add_edge(0, 3));
        assert_eq!(graph.degrees(), &[1, 1, 0]);
        assert_eq!(graph.total_degree(), 2);
    }
}
