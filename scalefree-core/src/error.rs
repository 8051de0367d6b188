//! Error types for the scalefree core library.
//!
//! Every variant describes a parameter set that cannot drive a simulation.
//! Validation happens when a simulation is constructed, so running one never
//! fails.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when simulation parameters are out of range.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SimulationError {
    /// Too few initial nodes for the chosen model.
    #[error("initial node count must be at least {min} (got {got})")]
    InvalidInitialNodes {
        /// Node count supplied by the caller.
        got: usize,
        /// Smallest node count the model accepts.
        min: usize,
    },
    /// Growing models need every arriving node to bring at least one edge.
    #[error("edges per node must be at least 1 (got {got})")]
    InvalidEdgesPerNode {
        /// Edge count supplied by the caller.
        got: usize,
    },
    /// Preferential growth cannot find enough distinct targets.
    #[error(
        "cannot select {edges_per_node} distinct targets from {available} initial nodes"
    )]
    InsufficientTargets {
        /// Requested number of distinct targets per arriving node.
        edges_per_node: usize,
        /// Nodes available when the first node arrives.
        available: usize,
    },
    /// A requested arrival time lies outside `1..=steps`.
    #[error("arrival time {arrival} is outside 1..={steps}")]
    ArrivalTimeOutOfRange {
        /// Offending arrival time.
        arrival: usize,
        /// Number of growth steps configured.
        steps: usize,
    },
    /// The rejection sampler must be allowed at least one draw.
    #[error("max_rejection_attempts must be at least 1 (got {got})")]
    InvalidRejectionAttempts {
        /// Attempt cap supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SimulationError`] variants.
    enum SimulationErrorCode for SimulationError {
        /// Too few initial nodes for the chosen model.
        InvalidInitialNodes => InvalidInitialNodes { .. } => "SIMULATION_INVALID_INITIAL_NODES",
        /// Growing models need at least one edge per arriving node.
        InvalidEdgesPerNode => InvalidEdgesPerNode { .. } => "SIMULATION_INVALID_EDGES_PER_NODE",
        /// Preferential growth cannot find enough distinct targets.
        InsufficientTargets => InsufficientTargets { .. } => "SIMULATION_INSUFFICIENT_TARGETS",
        /// A requested arrival time lies outside the simulated steps.
        ArrivalTimeOutOfRange => ArrivalTimeOutOfRange { .. } => "SIMULATION_ARRIVAL_TIME_OUT_OF_RANGE",
        /// The rejection sampler must be allowed at least one draw.
        InvalidRejectionAttempts => InvalidRejectionAttempts { .. } => "SIMULATION_INVALID_REJECTION_ATTEMPTS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SimulationError>;
