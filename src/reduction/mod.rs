//! Independent set and vertex cover on top of the clique encoder, plus
//! query dispatch and witness validation

pub mod independent_set;
pub mod problem;
pub mod solution;
pub mod validator;
pub mod vertex_cover;

pub use crate::config::ProblemKind;
pub use independent_set::IndependentSetSolver;
pub use problem::{
    enumerate_query, query_encoding_statistics, solve_batch, solve_query, GraphProblem, Query,
};
pub use solution::{Solution, SolutionSummary};
pub use validator::ValidationResult;
pub use vertex_cover::{complement_set, VertexCoverSolver};
