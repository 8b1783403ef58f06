//! Factory for creating SAT solver instances based on configuration

use super::constraints::CnfFormula;
use super::solver::{SatBackend, SatSolver, SolverOptions, SolverSolution, SolverStatistics};
use super::varisat_solver::VarisatSatSolver;
use crate::config::SolverBackend;
use anyhow::Result;

/// Unified SAT solver interface that can use different backends
pub enum UnifiedSatSolver {
    Cadical(SatSolver),
    Varisat(VarisatSatSolver),
}

impl UnifiedSatSolver {
    /// Create a new solver instance based on the specified backend
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => UnifiedSatSolver::Cadical(SatSolver::new()),
            SolverBackend::Varisat => UnifiedSatSolver::Varisat(VarisatSatSolver::new()),
        }
    }

    /// Create a configured solver instance
    pub fn with_options(backend: SolverBackend, options: &SolverOptions) -> Self {
        let mut solver = Self::new(backend);
        solver.configure(options);
        solver
    }

    /// Get solver statistics for the last solved formula
    pub fn statistics(&self) -> SolverStatistics {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.statistics(),
            UnifiedSatSolver::Varisat(solver) => solver.statistics(),
        }
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.configure(options),
            // Varisat exposes no time limit; the options only matter for CaDiCaL
            UnifiedSatSolver::Varisat(_) => {}
        }
    }

    /// Get the backend type being used
    pub fn backend(&self) -> SolverBackend {
        match self {
            UnifiedSatSolver::Cadical(_) => SolverBackend::Cadical,
            UnifiedSatSolver::Varisat(_) => SolverBackend::Varisat,
        }
    }
}

impl SatBackend for UnifiedSatSolver {
    fn name(&self) -> &'static str {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.name(),
            UnifiedSatSolver::Varisat(solver) => solver.name(),
        }
    }

    fn solve_formula(&mut self, formula: &CnfFormula) -> Result<Option<SolverSolution>> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.solve_formula(formula),
            UnifiedSatSolver::Varisat(solver) => solver.solve_formula(formula),
        }
    }
}

impl Default for UnifiedSatSolver {
    fn default() -> Self {
        UnifiedSatSolver::Cadical(SatSolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::constraints::Clause;

    fn contradiction() -> CnfFormula {
        let mut formula = CnfFormula::new(1);
        formula.push(Clause::unit(1));
        formula.push(Clause::unit(-1));
        formula
    }

    #[test]
    fn test_backend_selection() {
        assert_eq!(UnifiedSatSolver::new(SolverBackend::Cadical).backend(), SolverBackend::Cadical);
        assert_eq!(UnifiedSatSolver::new(SolverBackend::Varisat).backend(), SolverBackend::Varisat);
        assert_eq!(UnifiedSatSolver::default().name(), "cadical");
    }

    #[test]
    fn test_backends_agree() {
        for backend in [SolverBackend::Cadical, SolverBackend::Varisat] {
            let mut solver = UnifiedSatSolver::new(backend);

            let mut formula = CnfFormula::new(1);
            formula.push(Clause::unit(1));
            let solution = solver.solve_formula(&formula).unwrap().unwrap();
            assert!(solution.value(1), "{:?}", backend);

            assert!(solver.solve_formula(&contradiction()).unwrap().is_none(), "{:?}", backend);
        }
    }
}
