//! Error types shared by the graph and reduction layers

use thiserror::Error;

/// Problems with the shape or content of an input graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph has no vertices")]
    Empty,

    #[error("row {row} has {got} entries, expected {expected} (adjacency matrix must be square)")]
    NonSquare { row: usize, expected: usize, got: usize },

    #[error("adjacency matrix is not symmetric at ({u}, {v})")]
    Asymmetric { u: usize, v: usize },

    #[error("graph with {vertex_count} vertices exceeds the limit of {max}")]
    TooLarge { vertex_count: usize, max: usize },

    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Faults raised while encoding, solving or decoding a query.
///
/// A query that simply has no witness is not an error; it is reported as
/// `Ok(None)` by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
    #[error("target size {k} exceeds vertex count {n}")]
    InvalidTargetSize { k: usize, n: usize },

    #[error("{k} positions x {n} vertices does not fit in the SAT variable range")]
    VariableOverflow { k: usize, n: usize },

    #[error("position variable ({position}, {vertex}) outside 1..={k} x 1..={n}")]
    PositionOutOfRange { position: usize, vertex: usize, k: usize, n: usize },

    #[error("variable {variable} outside 1..={max}")]
    VariableOutOfRange { variable: i32, max: i32 },

    #[error("satisfying model assigns no vertex to clique position {position}")]
    InconsistentModel { position: usize },

    #[error("decoded witness failed validation: {0}")]
    InvalidWitness(String),

    #[error("SAT backend failure: {0}")]
    Backend(String),
}

pub type ReductionResult<T> = std::result::Result<T, ReductionError>;
