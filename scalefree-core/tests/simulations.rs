//! Tests for the public simulation API.

use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use scalefree_core::{
    AttachmentModel, DegreeDistribution, GrowthParams, GrowthSimulation, RewiringParams,
    RewiringSimulation, SimulationError,
};
use tracing_subscriber::layer::SubscriberExt;

use scalefree_test_support::tracing::RecordingLayer;

#[fixture]
fn growth_params() -> GrowthParams {
    GrowthParams::new(3, 2, 30)
        .expect("parameters must be valid")
        .with_arrival_times([1, 10, 30])
        .with_rng_seed(2024)
}

#[rstest]
#[case::preferential(AttachmentModel::Preferential)]
#[case::uniform(AttachmentModel::Uniform)]
fn growth_outcome_has_one_degree_per_node(
    growth_params: GrowthParams,
    #[case] model: AttachmentModel,
) {
    let simulation = GrowthSimulation::new(growth_params, model).expect("simulation must be valid");
    let outcome = simulation.run();

    assert_eq!(outcome.degrees().len(), 33);
    assert_eq!(outcome.edge_count(), 3 + 2 * 30);
    assert_eq!(
        outcome.degrees().iter().sum::<usize>(),
        2 * outcome.edge_count()
    );
    let arrivals: Vec<usize> = outcome.time_series().arrivals().collect();
    assert_eq!(arrivals, vec![1, 10, 30]);
    assert_eq!(
        outcome.time_series().trajectory(10, 12).map(<[usize]>::len),
        Some(21)
    );
}

#[rstest]
#[case::preferential(AttachmentModel::Preferential)]
#[case::uniform(AttachmentModel::Uniform)]
fn injected_rng_matches_seeded_run(growth_params: GrowthParams, #[case] model: AttachmentModel) {
    let simulation = GrowthSimulation::new(growth_params, model).expect("simulation must be valid");
    let seeded = simulation.run();
    let mut rng = SmallRng::seed_from_u64(2024);
    let injected = simulation.run_with_rng(&mut rng);
    assert_eq!(seeded, injected);
}

#[rstest]
fn growth_rejects_arrivals_past_the_last_step(growth_params: GrowthParams) {
    let params = growth_params.with_arrival_times([31]);
    let err = GrowthSimulation::new(params, AttachmentModel::Uniform)
        .expect_err("arrival 31 never happens");
    assert_eq!(
        err,
        SimulationError::ArrivalTimeOutOfRange {
            arrival: 31,
            steps: 30,
        }
    );
}

#[rstest]
fn into_parts_splits_the_outcome(growth_params: GrowthParams) {
    let outcome = GrowthSimulation::new(growth_params, AttachmentModel::Preferential)
        .expect("simulation must be valid")
        .run();
    let expected_degrees = outcome.degrees().to_vec();
    let (series, degrees) = outcome.into_parts();
    assert_eq!(degrees, expected_degrees);
    assert_eq!(series.into_inner().len(), 3);
}

#[test]
fn rewiring_scenario_matches_documented_shape() {
    let params = RewiringParams::new(4, 2, 3, 42).expect("parameters must be valid");
    let (history, degrees) = RewiringSimulation::new(params).run().into_parts();

    let rows = history.into_rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 4));
    assert!(rows.iter().all(|row| row.first() == Some(&0)));
    let finals: Vec<usize> = rows.iter().filter_map(|row| row.last().copied()).collect();
    assert_eq!(finals, degrees);
}

#[test]
fn rewiring_is_reproducible_for_a_seed() {
    let params = RewiringParams::new(25, 3, 60, 42).expect("parameters must be valid");
    let first = RewiringSimulation::new(params.clone()).run();
    let second = RewiringSimulation::new(params).run();
    assert_eq!(first.history(), second.history());
    assert_eq!(first.degrees(), second.degrees());
}

#[test]
fn preferential_growth_develops_a_heavier_tail_than_uniform() {
    let params = GrowthParams::new(4, 2, 3_000)
        .expect("parameters must be valid")
        .with_rng_seed(7);
    let preferential = GrowthSimulation::new(params.clone(), AttachmentModel::Preferential)
        .expect("simulation must be valid")
        .run();
    let uniform = GrowthSimulation::new(params, AttachmentModel::Uniform)
        .expect("simulation must be valid")
        .run();

    let preferential_max = DegreeDistribution::from_degrees(preferential.degrees()).max_degree();
    let uniform_max = DegreeDistribution::from_degrees(uniform.degrees()).max_degree();
    assert!(preferential_max > uniform_max);
}

#[test]
fn growth_records_core_tracing() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = GrowthParams::new(3, 1, 5)
        .expect("parameters must be valid")
        .with_rng_seed(9);
    let simulation = GrowthSimulation::new(params, AttachmentModel::Preferential)
        .expect("simulation must be valid");

    let outcome = tracing::subscriber::with_default(subscriber, || simulation.run());
    assert_eq!(outcome.degrees().len(), 8);

    let span = layer.span("core.grow").expect("core.grow span must exist");
    assert_eq!(span.field("model"), Some("preferential"));
    assert_eq!(span.field("initial_nodes"), Some("3"));
    assert_eq!(span.field("steps"), Some("5"));
    assert_eq!(span.field("seed"), Some("Some(9)"));

    let completed = layer.events_with_message("growth simulation completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].field("edges"), Some("8"));
}

#[test]
fn rewiring_records_core_tracing() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = RewiringParams::new(3, 2, 1, 17).expect("parameters must be valid");
    let simulation = RewiringSimulation::new(params);

    let outcome = tracing::subscriber::with_default(subscriber, || simulation.run());
    assert_eq!(outcome.skipped_attempts(), 1);

    let span = layer.span("core.rewire").expect("core.rewire span must exist");
    assert_eq!(span.field("nodes"), Some("3"));
    assert_eq!(span.field("max_rejection_attempts"), Some("20"));

    let skipped = layer.events_with_message("rewiring attempts skipped");
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].field("skipped"), Some("1"));
}
