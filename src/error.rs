//! Error types for graph access and colony optimization.

use thiserror::Error;

/// Result type alias for colony optimization.
pub type AcoResult<T> = Result<T, AcoError>;

/// Errors raised while building or querying a [`Graph`](crate::graph::Graph).
#[derive(Debug, Error)]
pub enum GraphError {
    /// A weight query used an index outside `[0, size)`.
    #[error("graph index ({row}, {col}) out of range for size {size}")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of vertices.
        size: usize,
    },

    /// The adjacency matrix has no vertices.
    #[error("graph must contain at least one vertex")]
    Empty,

    /// A row length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {size}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Expected length.
        size: usize,
    },

    /// The input file could not be read.
    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    /// The leading vertex count is missing, non-positive, or not alone on its line.
    #[error("graph size error: {0}")]
    BadSize(String),

    /// A weight token contains something other than ASCII digits.
    #[error("non-digit edge weight {0:?}")]
    NonDigitWeight(String),

    /// A weight token does not fit in a `u32`.
    #[error("edge weight {0:?} is too large")]
    WeightOverflow(String),

    /// Fewer weights than `size * size`.
    #[error("expected {expected} edge weights, found {found}")]
    TooFewWeights {
        /// `size * size`.
        expected: usize,
        /// Tokens actually present.
        found: usize,
    },

    /// Trailing tokens after `size * size` weights.
    #[error("more edge weights than the {expected} a {size}x{size} graph holds")]
    TooManyWeights {
        /// `size * size`.
        expected: usize,
        /// Number of vertices.
        size: usize,
    },
}

/// Errors surfaced by the optimization driver.
#[derive(Debug, Error)]
pub enum AcoError {
    /// No feasible Hamiltonian tour was recorded after all colonies and rounds.
    #[error("no feasible solution: the graph admits no tour through every vertex")]
    InfeasibleSolution,

    /// Configuration rejected by [`AcoConfig::validate`](crate::aco::AcoConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying graph error.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
