//! Uniform attachment, the null model for preferential growth.

use rand::{Rng, seq::index};

use super::AttachmentRule;

pub(super) struct UniformAttachment;

impl AttachmentRule for UniformAttachment {
    fn seed_complete_graph(&mut self, initial_nodes: usize, degrees: &mut [usize]) {
        for degree in degrees.iter_mut().take(initial_nodes) {
            *degree = initial_nodes - 1;
        }
    }

    fn select_targets<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        new_node: usize,
        count: usize,
        targets: &mut Vec<usize>,
    ) {
        targets.extend(index::sample(rng, new_node, count.min(new_node)));
    }

    fn connect(&mut self, _target: usize, _new_node: usize) {}
}
