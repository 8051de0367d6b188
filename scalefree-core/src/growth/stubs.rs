//! Preferential attachment through the edge-endpoint multiset.
//!
//! Every edge contributes one stub per endpoint, so node `v` occupies
//! `degree[v]` slots. A uniform draw over the slots therefore selects nodes
//! with probability proportional to their degree without maintaining a
//! cumulative distribution.

use rand::{Rng, seq::SliceRandom};

use crate::params::GrowthParams;

use super::AttachmentRule;

pub(super) struct StubAttachment {
    stubs: Vec<usize>,
}

impl StubAttachment {
    pub(super) fn with_capacity(params: &GrowthParams) -> Self {
        let initial = params.initial_nodes();
        let capacity = initial.saturating_mul(initial.saturating_sub(1)).saturating_add(
            params
                .steps()
                .saturating_mul(params.edges_per_node())
                .saturating_mul(2),
        );
        Self {
            stubs: Vec::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub(super) fn stubs(&self) -> &[usize] {
        &self.stubs
    }
}

impl AttachmentRule for StubAttachment {
    fn seed_complete_graph(&mut self, initial_nodes: usize, degrees: &mut [usize]) {
        for left in 0..initial_nodes {
            for right in (left + 1)..initial_nodes {
                self.stubs.extend([left, right]);
                if let Some(degree) = degrees.get_mut(left) {
                    *degree += 1;
                }
                if let Some(degree) = degrees.get_mut(right) {
                    *degree += 1;
                }
            }
        }
    }

    // Retries until `count` distinct targets are drawn. Construction rejects
    // `count > n0`, and every existing node holds at least one stub, so the
    // loop terminates with probability one.
    fn select_targets<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        new_node: usize,
        count: usize,
        targets: &mut Vec<usize>,
    ) {
        while targets.len() < count {
            let Some(&candidate) = self.stubs.choose(rng) else {
                return;
            };
            if candidate != new_node && !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
    }

    fn connect(&mut self, target: usize, new_node: usize) {
        self.stubs.extend([target, new_node]);
    }
}
