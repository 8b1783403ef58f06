//! SAT backend contract and the CaDiCaL implementation

use super::constraints::{Clause, CnfFormula};
use anyhow::Result;
use cadical::{Solver, Timeout};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// An external SAT engine.
///
/// `solve_formula` answers `Some(solution)` for a satisfiable formula and
/// `None` for an unsatisfiable one. Every call starts from an empty solver,
/// so no clauses leak from one query into the next.
pub trait SatBackend {
    /// Short engine name for logs and reports
    fn name(&self) -> &'static str;

    fn solve_formula(&mut self, formula: &CnfFormula) -> Result<Option<SolverSolution>>;
}

/// SAT solver wrapper for CaDiCaL
pub struct SatSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
    timeout: Option<Duration>,
    last_result: SolverResultType,
    last_solve_time: Duration,
}

/// Result of SAT solving
#[derive(Debug, Clone)]
pub struct SolverSolution {
    pub assignment: HashMap<i32, bool>,
    pub solve_time: Duration,
}

impl SolverSolution {
    /// Truth value of `variable`; unassigned variables read as false
    pub fn value(&self, variable: i32) -> bool {
        self.assignment.get(&variable).copied().unwrap_or(false)
    }
}

/// Statistics about the solving process
#[derive(Debug, Clone)]
pub struct SolverStatistics {
    pub variable_count: usize,
    pub clause_count: usize,
    pub solve_time: Duration,
    pub result: SolverResultType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverResultType {
    NotRun,
    Satisfiable,
    Unsatisfiable,
    Interrupted,
}

impl SatSolver {
    /// Create a new SAT solver instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
            timeout: None,
            last_result: SolverResultType::NotRun,
            last_solve_time: Duration::ZERO,
        }
    }

    /// Set solving timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Add clauses to the solver
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Add a single clause to the solver
    pub fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        if clause.is_empty() {
            anyhow::bail!("Cannot add empty clause (unsatisfiable)");
        }

        for &literal in &clause.literals {
            let var = literal.unsigned_abs() as usize;
            if var > self.variable_count {
                self.variable_count = var;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());

        self.clause_count += 1;
        Ok(())
    }

    /// Solve the clauses added so far
    pub fn solve(&mut self) -> Result<Option<SolverSolution>> {
        if let Some(timeout) = self.timeout {
            self.solver.set_callbacks(Some(Timeout::new(timeout.as_secs_f32())));
        }

        let start_time = Instant::now();
        let result = self.solver.solve();
        let solve_time = start_time.elapsed();
        self.last_solve_time = solve_time;

        match result {
            Some(true) => {
                self.last_result = SolverResultType::Satisfiable;
                let assignment = self.extract_assignment();
                Ok(Some(SolverSolution {
                    assignment,
                    solve_time,
                }))
            }
            Some(false) => {
                self.last_result = SolverResultType::Unsatisfiable;
                Ok(None)
            }
            None => {
                self.last_result = SolverResultType::Interrupted;
                anyhow::bail!(
                    "CaDiCaL stopped without a verdict after {:.3}s (timeout)",
                    solve_time.as_secs_f64()
                )
            }
        }
    }

    /// Extract variable assignment from the solver
    fn extract_assignment(&self) -> HashMap<i32, bool> {
        let mut assignment = HashMap::new();

        for var in 1..=self.variable_count as i32 {
            if let Some(value) = self.solver.value(var) {
                assignment.insert(var, value);
            }
        }

        assignment
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

    /// Reset the solver (clear all clauses)
    pub fn reset(&mut self) {
        self.solver = Solver::new();
        self.variable_count = 0;
        self.clause_count = 0;
        self.last_result = SolverResultType::NotRun;
        self.last_solve_time = Duration::ZERO;
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        if let Some(timeout) = options.timeout {
            self.set_timeout(timeout);
        }
    }
}

impl Default for SatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend for SatSolver {
    fn name(&self) -> &'static str {
        "cadical"
    }

    fn solve_formula(&mut self, formula: &CnfFormula) -> Result<Option<SolverSolution>> {
        self.reset();
        self.add_clauses(formula.clauses())?;
        // Variables that occur in no clause still get a value in the model
        self.variable_count = self.variable_count.max(formula.variable_count());
        self.solve()
    }
}

/// Configuration options for the SAT solver
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    pub timeout: Option<Duration>,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Solver Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Clauses: {}", self.clause_count)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Result: {:?}", self.result)?;
        Ok(())
    }
}

impl std::fmt::Display for SolverSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Solution:")?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Variables assigned: {}", self.assignment.len())?;

        let mut vars: Vec<_> = self.assignment.keys().collect();
        vars.sort();

        write!(f, "  Sample assignments: ")?;
        for (i, &var) in vars.iter().take(10).enumerate() {
            if i > 0 { write!(f, ", ")?; }
            let value = self.assignment[var];
            write!(f, "{}={}", var, if value { "T" } else { "F" })?;
        }
        if vars.len() > 10 {
            write!(f, ", ...")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::sat::encode_clique;

    #[test]
    fn test_solver_creation() {
        let solver = SatSolver::new();
        assert_eq!(solver.variable_count(), 0);
        assert_eq!(solver.clause_count(), 0);
        assert_eq!(solver.statistics().result, SolverResultType::NotRun);
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = SatSolver::new();

        // Add clause: x1 ∨ x2
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();

        // Add clause: ¬x1 ∨ x2
        solver.add_clause(&Clause::new(vec![-1, 2])).unwrap();

        let solution = solver.solve().unwrap();
        assert!(solution.is_some());

        // x2 should be true to satisfy both clauses
        assert!(solution.unwrap().value(2));
        assert_eq!(solver.statistics().result, SolverResultType::Satisfiable);
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = SatSolver::new();

        solver.add_clause(&Clause::unit(1)).unwrap();
        solver.add_clause(&Clause::unit(-1)).unwrap();

        let solution = solver.solve().unwrap();
        assert!(solution.is_none());
        assert_eq!(solver.statistics().result, SolverResultType::Unsatisfiable);
    }

    #[test]
    fn test_empty_clause_error() {
        let mut solver = SatSolver::new();
        assert!(solver.add_clause(&Clause::new(vec![])).is_err());
    }

    #[test]
    fn test_variable_count_tracking() {
        let mut solver = SatSolver::new();

        solver.add_clause(&Clause::new(vec![1, -5, 3])).unwrap();
        assert_eq!(solver.variable_count(), 5);

        solver.add_clause(&Clause::new(vec![2, -7])).unwrap();
        assert_eq!(solver.variable_count(), 7);
    }

    #[test]
    fn test_solve_formula_starts_clean() {
        let mut solver = SatSolver::new();

        let mut contradiction = CnfFormula::new(1);
        contradiction.push(Clause::unit(1));
        contradiction.push(Clause::unit(-1));
        assert!(solver.solve_formula(&contradiction).unwrap().is_none());

        let mut single = CnfFormula::new(3);
        single.push(Clause::unit(-2));
        let solution = solver.solve_formula(&single).unwrap().unwrap();
        assert!(!solution.value(2));
        assert_eq!(solver.clause_count(), 1);
        assert_eq!(solver.variable_count(), 3);
    }

    #[test]
    fn test_solver_options() {
        let mut solver = SatSolver::new();
        solver.configure(&SolverOptions {
            timeout: Some(Duration::from_secs(10)),
        });

        let mut formula = CnfFormula::new(2);
        formula.push(Clause::new(vec![1, 2]));
        assert!(solver.solve_formula(&formula).unwrap().is_some());
    }

    #[test]
    fn test_timeout_never_reads_as_unsat() {
        // Complete 10-partite graph with parts of two: an 11-clique would
        // put two vertices in one part, a pigeonhole instance
        let edges: Vec<_> = (0..20)
            .flat_map(|u| (u + 1..20).map(move |v| (u, v)))
            .filter(|&(u, v)| u / 2 != v / 2)
            .collect();
        let graph = Graph::from_edges(20, &edges).unwrap();
        let encoding = encode_clique(&graph, 11).unwrap();

        let mut solver = SatSolver::new();
        solver.configure(&SolverOptions {
            timeout: Some(Duration::from_millis(1)),
        });

        match solver.solve_formula(&encoding.formula) {
            Err(_) => assert_eq!(solver.statistics().result, SolverResultType::Interrupted),
            Ok(None) => assert_eq!(solver.statistics().result, SolverResultType::Unsatisfiable),
            Ok(Some(_)) => panic!("pigeonhole formula reported satisfiable"),
        }
    }
}
