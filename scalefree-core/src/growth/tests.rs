//! Unit and property tests for the growth simulations.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use crate::{
    error::SimulationError, params::GrowthParams, test_utils::suite_proptest_config,
};

use super::{
    AttachmentModel, AttachmentRule, GrowthOutcome, GrowthSimulation, grow, stubs::StubAttachment,
    uniform::UniformAttachment,
};

fn simulate(
    model: AttachmentModel,
    (initial_nodes, edges_per_node, steps): (usize, usize, usize),
    seed: u64,
) -> GrowthOutcome {
    let params = GrowthParams::new(initial_nodes, edges_per_node, steps)
        .expect("parameters must be valid")
        .with_arrival_times(1..=steps)
        .with_rng_seed(seed);
    GrowthSimulation::new(params, model)
        .expect("simulation must be valid")
        .run()
}

fn assert_growth_invariants(outcome: &GrowthOutcome, initial_nodes: usize, edges_per_node: usize) {
    let degrees = outcome.degrees();
    assert_eq!(degrees.iter().sum::<usize>(), 2 * outcome.edge_count());

    let steps = degrees.len() - initial_nodes;
    for (arrival, node, trajectory) in outcome.time_series().iter() {
        assert_eq!(node, initial_nodes + arrival - 1);
        assert_eq!(trajectory.len(), steps - arrival + 1);
        assert_eq!(trajectory.first().copied(), Some(edges_per_node.min(node)));
        assert!(trajectory.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(trajectory.last().copied(), degrees.get(node).copied());
    }
}

#[test]
fn stub_seeding_builds_complete_graph() {
    let params = GrowthParams::new(3, 1, 2).expect("parameters must be valid");
    let mut rule = StubAttachment::with_capacity(&params);
    let mut degrees = vec![0; params.final_node_count()];
    rule.seed_complete_graph(3, &mut degrees);

    assert_eq!(degrees, vec![2, 2, 2, 0, 0]);
    assert_eq!(rule.stubs().len(), 6);
}

#[test]
fn uniform_seeding_matches_complete_graph_degrees() {
    let mut degrees = vec![0; 6];
    UniformAttachment.seed_complete_graph(4, &mut degrees);
    assert_eq!(degrees, vec![3, 3, 3, 3, 0, 0]);
}

#[test]
fn small_preferential_scenario() {
    let outcome = simulate(AttachmentModel::Preferential, (3, 1, 2), 42);

    assert_eq!(outcome.degrees().len(), 5);
    assert_eq!(outcome.degrees().iter().sum::<usize>(), 10);
    assert_eq!(outcome.edge_count(), 5);
    assert_eq!(outcome.time_series().trajectory(1, 3).map(<[usize]>::len), Some(2));
    assert_eq!(outcome.time_series().trajectory(2, 4), Some(&[1][..]));
}

#[test]
fn degree_sum_grows_by_two_edges_per_arrival() {
    let params = GrowthParams::new(3, 1, 2).expect("parameters must be valid");
    let mut rng = SmallRng::seed_from_u64(7);
    let mut sums = Vec::new();
    for steps in 0..=params.steps() {
        let partial = GrowthParams::new(3, 1, steps).expect("parameters must be valid");
        let mut rule = StubAttachment::with_capacity(&partial);
        let outcome = grow(&partial, &mut rule, &mut rng);
        sums.push(outcome.degrees().iter().sum::<usize>());
    }
    assert_eq!(sums, vec![6, 8, 10]);
}

#[test]
fn stub_multiset_tracks_degrees() {
    let params = GrowthParams::new(4, 2, 50).expect("parameters must be valid");
    let mut rule = StubAttachment::with_capacity(&params);
    let mut rng = SmallRng::seed_from_u64(11);
    let outcome = grow(&params, &mut rule, &mut rng);

    for (node, &degree) in outcome.degrees().iter().enumerate() {
        let stubs = rule.stubs().iter().filter(|&&stub| stub == node).count();
        assert_eq!(stubs, degree, "node {node}");
    }
}

#[rstest]
#[case::preferential(AttachmentModel::Preferential)]
#[case::uniform(AttachmentModel::Uniform)]
fn arriving_nodes_bring_edges_per_node(#[case] model: AttachmentModel) {
    let outcome = simulate(model, (5, 3, 40), 3);
    assert_growth_invariants(&outcome, 5, 3);
    assert_eq!(outcome.edge_count(), 10 + 3 * 40);
}

#[rstest]
#[case::preferential(AttachmentModel::Preferential)]
#[case::uniform(AttachmentModel::Uniform)]
fn seeded_runs_are_reproducible(#[case] model: AttachmentModel) {
    let first = simulate(model, (4, 2, 100), 99);
    let second = simulate(model, (4, 2, 100), 99);
    assert_eq!(first, second);
}

#[test]
fn preferential_accepts_edges_equal_to_initial_nodes() {
    let outcome = simulate(AttachmentModel::Preferential, (3, 3, 20), 5);
    assert_growth_invariants(&outcome, 3, 3);
    let first_arrival = outcome.time_series().trajectory(1, 3);
    assert_eq!(first_arrival.and_then(<[usize]>::first), Some(&3));
}

#[test]
fn preferential_rejects_more_edges_than_initial_nodes() {
    let params = GrowthParams::new(3, 4, 5).expect("parameters must be valid");
    let err = GrowthSimulation::new(params, AttachmentModel::Preferential)
        .expect_err("targets cannot be found at the first arrival");
    assert_eq!(
        err,
        SimulationError::InsufficientTargets {
            edges_per_node: 4,
            available: 3,
        }
    );
}

#[test]
fn uniform_caps_targets_at_existing_nodes() {
    let outcome = simulate(AttachmentModel::Uniform, (2, 4, 5), 8);
    assert_growth_invariants(&outcome, 2, 4);
    let arrivals: Vec<usize> = (1..=5)
        .filter_map(|arrival| outcome.time_series().trajectory(arrival, arrival + 1))
        .filter_map(|trajectory| trajectory.first().copied())
        .collect();
    assert_eq!(arrivals, vec![2, 3, 4, 4, 4]);
}

#[test]
fn zero_steps_returns_the_initial_graph() {
    let outcome = simulate(AttachmentModel::Preferential, (4, 1, 0), 1);
    assert_eq!(outcome.degrees(), &[3, 3, 3, 3]);
    assert!(outcome.time_series().is_empty());
}

#[test]
fn only_requested_arrivals_are_tracked() {
    let params = GrowthParams::new(3, 2, 10)
        .expect("parameters must be valid")
        .with_arrival_times([4, 9])
        .with_rng_seed(13);
    let outcome = GrowthSimulation::new(params, AttachmentModel::Preferential)
        .expect("simulation must be valid")
        .run();
    let tracked: Vec<(usize, usize, usize)> = outcome
        .time_series()
        .iter()
        .map(|(arrival, node, trajectory)| (arrival, node, trajectory.len()))
        .collect();
    assert_eq!(tracked, vec![(4, 6, 7), (9, 11, 2)]);
}

fn growth_case() -> impl Strategy<Value = (usize, usize, usize, u64)> {
    (2_usize..8)
        .prop_flat_map(|initial| (Just(initial), 1..=initial, 0_usize..60, any::<u64>()))
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn preferential_growth_invariants_hold(
        (initial, edges, steps, seed) in growth_case(),
    ) {
        let outcome = simulate(AttachmentModel::Preferential, (initial, edges, steps), seed);
        assert_growth_invariants(&outcome, initial, edges);
        prop_assert_eq!(outcome.degrees().len(), initial + steps);
    }

    #[test]
    fn uniform_growth_invariants_hold(
        (initial, edges, steps, seed) in growth_case(),
    ) {
        let outcome = simulate(AttachmentModel::Uniform, (initial, edges, steps), seed);
        assert_growth_invariants(&outcome, initial, edges);
        prop_assert_eq!(outcome.degrees().len(), initial + steps);
    }
}
