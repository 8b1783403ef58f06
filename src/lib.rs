//! Graph problems through SAT
//!
//! Decides whether a graph has a clique, an independent set or a vertex
//! cover of a given size by encoding the clique question as CNF and handing
//! it to a SAT solver. Independent set and vertex cover are answered through
//! the complement graph and the complement vertex set.

pub mod config;
pub mod error;
pub mod graph;
pub mod reduction;
pub mod sat;
pub mod utils;

pub use config::{ProblemKind, Settings};
pub use error::{GraphError, ReductionError, ReductionResult};
pub use graph::Graph;
pub use reduction::{GraphProblem, IndependentSetSolver, Solution, VertexCoverSolver};
pub use sat::{CliqueEncoder, Witness};

use anyhow::Result;

/// Main entry point: load the configured graph and solve its query
pub fn solve(settings: Settings) -> Result<Vec<Solution>> {
    let problem = GraphProblem::new(settings)?;
    problem.solve()
}
