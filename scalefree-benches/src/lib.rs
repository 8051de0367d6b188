//! Benchmark support crate for scalefree.
//!
//! Provides the parameter sets and setup error type shared by the Criterion
//! benchmarks of the growth and rewiring simulations.

pub mod error;
pub mod params;
