//! Varisat SAT solver integration

use super::constraints::CnfFormula;
use super::solver::{SatBackend, SolverResultType, SolverSolution, SolverStatistics};
use anyhow::Result;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use varisat::{Lit, Solver};

/// SAT solver wrapper for Varisat (pure Rust CDCL)
pub struct VarisatSatSolver {
    variable_count: usize,
    clause_count: usize,
    last_result: SolverResultType,
    last_solve_time: Duration,
}

impl VarisatSatSolver {
    /// Create a new SAT solver instance
    pub fn new() -> Self {
        Self {
            variable_count: 0,
            clause_count: 0,
            last_result: SolverResultType::NotRun,
            last_solve_time: Duration::ZERO,
        }
    }

    fn to_varisat_formula(formula: &CnfFormula) -> varisat::CnfFormula {
        let mut cnf = varisat::CnfFormula::from(formula.clauses().iter().map(|clause| {
            clause
                .literals
                .iter()
                .map(|&lit| Lit::from_dimacs(lit as isize))
                .collect::<Vec<_>>()
        }));
        cnf.set_var_count(cnf.var_count().max(formula.variable_count()));
        cnf
    }

    /// Get solver statistics
    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            variable_count: self.variable_count,
            clause_count: self.clause_count,
            solve_time: self.last_solve_time,
            result: self.last_result,
        }
    }
}

impl Default for VarisatSatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend for VarisatSatSolver {
    fn name(&self) -> &'static str {
        "varisat"
    }

    fn solve_formula(&mut self, formula: &CnfFormula) -> Result<Option<SolverSolution>> {
        if formula.clauses().iter().any(|clause| clause.is_empty()) {
            anyhow::bail!("Cannot add empty clause (unsatisfiable)");
        }

        let cnf = Self::to_varisat_formula(formula);
        self.variable_count = cnf.var_count();
        self.clause_count = cnf.len();

        let mut solver = Solver::new();
        solver.add_formula(&cnf);

        let start_time = Instant::now();
        let satisfiable = solver
            .solve()
            .map_err(|e| anyhow::anyhow!("Varisat solver error: {}", e))?;
        let solve_time = start_time.elapsed();
        self.last_solve_time = solve_time;

        if !satisfiable {
            self.last_result = SolverResultType::Unsatisfiable;
            return Ok(None);
        }
        self.last_result = SolverResultType::Satisfiable;

        let model = solver
            .model()
            .ok_or_else(|| anyhow::anyhow!("Varisat reported SAT without a model"))?;

        let assignment: HashMap<i32, bool> = model
            .iter()
            .map(|lit| (lit.var().to_dimacs() as i32, lit.is_positive()))
            .collect();

        Ok(Some(SolverSolution {
            assignment,
            solve_time,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::constraints::Clause;

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = VarisatSatSolver::new();

        let mut formula = CnfFormula::new(2);
        formula.push(Clause::new(vec![1, 2]));
        formula.push(Clause::new(vec![-1, 2]));

        let solution = solver.solve_formula(&formula).unwrap().unwrap();
        assert!(solution.value(2));
        assert_eq!(solver.statistics().result, SolverResultType::Satisfiable);
        assert_eq!(solver.statistics().clause_count, 2);
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = VarisatSatSolver::new();

        let mut formula = CnfFormula::new(1);
        formula.push(Clause::unit(1));
        formula.push(Clause::unit(-1));

        assert!(solver.solve_formula(&formula).unwrap().is_none());
        assert_eq!(solver.statistics().result, SolverResultType::Unsatisfiable);
    }

    #[test]
    fn test_declared_variables_are_counted() {
        let mut solver = VarisatSatSolver::new();

        let mut formula = CnfFormula::new(4);
        formula.push(Clause::unit(1));

        assert!(solver.solve_formula(&formula).unwrap().is_some());
        assert_eq!(solver.statistics().variable_count, 4);
    }

    #[test]
    fn test_empty_clause_error() {
        let mut solver = VarisatSatSolver::new();
        let mut formula = CnfFormula::new(1);
        formula.push(Clause::new(vec![]));

        assert!(solver.solve_formula(&formula).is_err());
    }
}
