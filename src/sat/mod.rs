//! SAT encoding and solver backends

pub mod variables;
pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod varisat_solver;
pub mod solver_factory;

pub use variables::PositionVariables;
pub use constraints::{Clause, CnfFormula, ConstraintGenerator, ConstraintStatistics};
pub use encoder::{
    decode_witness, encode_clique, encoding_statistics, CliqueEncoder, CliqueEncoding,
    EncodingStatistics, Witness,
};
pub use solver::{SatBackend, SatSolver, SolverOptions, SolverSolution, SolverStatistics};
pub use varisat_solver::VarisatSatSolver;
pub use solver_factory::UnifiedSatSolver;
