//! Error types for centrix.

use thiserror::Error;

/// Error type for graph metric operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An edge weight was negative. Shortest-path based metrics require
    /// weights in `[0, +inf)` and reject offenders before traversal starts.
    #[error("weight for edge {edge} is negative: {weight}")]
    NegativeWeight {
        /// Debug rendering of the offending edge.
        edge: String,
        /// The rejected weight.
        weight: f64,
    },

    /// An operation that only makes sense on a directed graph was attempted
    /// on an undirected one (or vice versa).
    #[error("{operation} requires a directed graph")]
    DirectednessMismatch {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A floating-point tolerance was zero or negative.
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// An edge already exists with a different endpoint configuration.
    #[error("edge {edge} already exists with different endpoints")]
    EdgeConflict {
        /// Debug rendering of the conflicting edge.
        edge: String,
    },

    /// An edge was inserted with an empty endpoint, source, or destination set.
    #[error("edge {edge} has an empty endpoint set")]
    EmptyEndpoints {
        /// Debug rendering of the offending edge.
        edge: String,
    },
}

/// Result type for graph metric operations.
pub type Result<T> = std::result::Result<T, Error>;
