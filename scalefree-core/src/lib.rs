//! Scalefree core library.
//!
//! Simulates the growth of random graphs under preferential attachment and
//! its controls:
//!
//! - [`GrowthSimulation`] with [`AttachmentModel::Preferential`] grows a
//!   graph by sampling targets from the edge-endpoint multiset;
//! - [`GrowthSimulation`] with [`AttachmentModel::Uniform`] grows the same
//!   graph with uniformly chosen targets;
//! - [`RewiringSimulation`] adds preferentially chosen edges to a fixed node
//!   set while keeping the graph simple.
//!
//! Every engine is single-threaded and draws from an injectable RNG, so a
//! seeded run is reproducible.

mod distribution;
mod error;
mod growth;
mod params;
mod rewiring;
mod rng;
#[cfg(test)]
mod test_utils;
mod time_series;

pub use crate::{
    distribution::DegreeDistribution,
    error::{Result, SimulationError, SimulationErrorCode},
    growth::{AttachmentModel, GrowthOutcome, GrowthSimulation},
    params::{DEFAULT_MAX_REJECTION_ATTEMPTS, GrowthParams, RewiringParams},
    rewiring::{DegreeHistory, RewiringOutcome, RewiringSimulation},
    time_series::DegreeTimeSeries,
};
