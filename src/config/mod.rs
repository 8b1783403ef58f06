//! Configuration management for graph SAT queries

pub mod settings;

pub use settings::{
    Settings, ProblemConfig, SolverConfig, InputConfig, OutputConfig,
    ProblemKind, SolverBackend, OutputFormat, CliOverrides
};
