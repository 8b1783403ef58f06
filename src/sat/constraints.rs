//! Clause generation for the k-clique SAT encoding

use super::PositionVariables;
use crate::graph::Graph;
use itertools::Itertools;
use std::io::{self, Write};

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

/// A CNF formula: an ordered list of clauses over variables `1..=variable_count`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CnfFormula {
    variable_count: usize,
    clauses: Vec<Clause>,
}

impl CnfFormula {
    pub fn new(variable_count: usize) -> Self {
        Self {
            variable_count,
            clauses: Vec::new(),
        }
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn extend(&mut self, clauses: impl IntoIterator<Item = Clause>) {
        self.clauses.extend(clauses);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether every clause has a literal made true by `is_true`
    pub fn is_satisfied_by(&self, is_true: impl Fn(i32) -> bool) -> bool {
        self.clauses.iter().all(|clause| {
            clause.literals.iter().any(|&lit| {
                let value = is_true(lit.abs());
                if lit > 0 { value } else { !value }
            })
        })
    }

    /// Write the formula in DIMACS CNF format
    pub fn write_dimacs<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "p cnf {} {}", self.variable_count, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in &clause.literals {
                write!(out, "{} ", lit)?;
            }
            writeln!(out, "0")?;
        }
        Ok(())
    }
}

/// Generates the four clause families of the k-clique encoding
pub struct ConstraintGenerator<'g> {
    graph: &'g Graph,
    variables: PositionVariables,
}

impl<'g> ConstraintGenerator<'g> {
    /// Create a new constraint generator
    pub fn new(graph: &'g Graph, variables: PositionVariables) -> Self {
        Self { graph, variables }
    }

    /// Generate all constraints for "graph has a clique of size k"
    pub fn generate_all_constraints(&self) -> CnfFormula {
        let mut formula = CnfFormula::new(self.variables.variable_count());

        // 1. Every position holds at least one vertex
        formula.extend(self.generate_coverage_constraints());

        // 2. No position holds two vertices
        formula.extend(self.generate_position_uniqueness_constraints());

        // 3. No vertex sits in two positions
        formula.extend(self.generate_vertex_uniqueness_constraints());

        // 4. Two positions never hold non-adjacent vertices
        formula.extend(self.generate_non_adjacency_constraints());

        formula
    }

    /// `x_{i,1} ∨ ... ∨ x_{i,n}` for each position i
    pub fn generate_coverage_constraints(&self) -> Vec<Clause> {
        (1..=self.variables.positions())
            .map(|i| Clause::new(self.variables.position_row(i)))
            .collect()
    }

    /// `¬x_{i,j} ∨ ¬x_{i,l}` for each position i and vertices j < l
    pub fn generate_position_uniqueness_constraints(&self) -> Vec<Clause> {
        let vars = &self.variables;
        let mut clauses = Vec::new();

        for i in 1..=vars.positions() {
            for (j, l) in (1..=vars.vertices()).tuple_combinations() {
                clauses.push(Clause::binary(-vars.id(i, j), -vars.id(i, l)));
            }
        }

        clauses
    }

    /// `¬x_{i,j} ∨ ¬x_{l,j}` for each vertex j and positions i < l
    pub fn generate_vertex_uniqueness_constraints(&self) -> Vec<Clause> {
        let vars = &self.variables;
        let mut clauses = Vec::new();

        for j in 1..=vars.vertices() {
            for (i, l) in (1..=vars.positions()).tuple_combinations() {
                clauses.push(Clause::binary(-vars.id(i, j), -vars.id(l, j)));
            }
        }

        clauses
    }

    /// `¬x_{i,u} ∨ ¬x_{l,v}` for positions i < l and ordered distinct
    /// vertices u, v with no edge between them
    pub fn generate_non_adjacency_constraints(&self) -> Vec<Clause> {
        let vars = &self.variables;
        let n = vars.vertices();
        let mut clauses = Vec::new();

        for (i, l) in (1..=vars.positions()).tuple_combinations() {
            for u in 1..=n {
                for v in 1..=n {
                    if u != v && !self.graph.has_edge(u - 1, v - 1) {
                        clauses.push(Clause::binary(-vars.id(i, u), -vars.id(l, v)));
                    }
                }
            }
        }

        clauses
    }

    /// Clause that excludes every assignment selecting exactly `witness`.
    ///
    /// With all four families in place a model selects exactly k distinct
    /// vertices, so "some position holds a vertex outside the witness" rules
    /// out that vertex set and all its orderings. Returns `None` when the
    /// witness already covers every vertex.
    pub fn generate_blocking_clause(&self, witness: &[usize]) -> Option<Clause> {
        let vars = &self.variables;
        let literals: Vec<i32> = (1..=vars.positions())
            .flat_map(|i| {
                (1..=vars.vertices())
                    .filter(|&j| !witness.contains(&(j - 1)))
                    .map(move |j| vars.id(i, j))
            })
            .collect();

        if literals.is_empty() {
            None
        } else {
            Some(Clause::new(literals))
        }
    }

    /// Clause counts per family, computed without generating the clauses
    pub fn statistics(&self) -> ConstraintStatistics {
        let k = self.variables.positions();
        let n = self.variables.vertices();
        let pairs = |m: usize| m * m.saturating_sub(1) / 2;

        ConstraintStatistics {
            total_variables: self.variables.variable_count(),
            coverage_clauses: k,
            position_uniqueness_clauses: k * pairs(n),
            vertex_uniqueness_clauses: n * pairs(k),
            non_adjacency_clauses: pairs(k) * self.graph.non_edge_pair_count(),
        }
    }
}

/// Statistics about the generated constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStatistics {
    pub total_variables: usize,
    pub coverage_clauses: usize,
    pub position_uniqueness_clauses: usize,
    pub vertex_uniqueness_clauses: usize,
    pub non_adjacency_clauses: usize,
}

impl ConstraintStatistics {
    pub fn total_clauses(&self) -> usize {
        self.coverage_clauses
            + self.position_uniqueness_clauses
            + self.vertex_uniqueness_clauses
            + self.non_adjacency_clauses
    }
}

impl std::fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Constraint Statistics:")?;
        writeln!(f, "  Variables: {}", self.total_variables)?;
        writeln!(f, "  Coverage clauses: {}", self.coverage_clauses)?;
        writeln!(f, "  Position uniqueness clauses: {}", self.position_uniqueness_clauses)?;
        writeln!(f, "  Vertex uniqueness clauses: {}", self.vertex_uniqueness_clauses)?;
        writeln!(f, "  Non-adjacency clauses: {}", self.non_adjacency_clauses)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn test_clause_creation() {
        let unit = Clause::unit(5);
        assert!(unit.is_unit());
        assert_eq!(unit.literals, vec![5]);

        let binary = Clause::binary(1, -2);
        assert_eq!(binary.len(), 2);
        assert!(!binary.is_empty());

        assert!(Clause::new(vec![]).is_empty());
    }

    #[test]
    fn test_coverage_constraints() {
        let graph = path_graph();
        let generator = ConstraintGenerator::new(&graph, PositionVariables::new(2, 3).unwrap());

        let clauses = generator.generate_coverage_constraints();
        assert_eq!(clauses, vec![Clause::new(vec![1, 2, 3]), Clause::new(vec![4, 5, 6])]);
    }

    #[test]
    fn test_uniqueness_constraints() {
        let graph = path_graph();
        let generator = ConstraintGenerator::new(&graph, PositionVariables::new(2, 3).unwrap());

        let position = generator.generate_position_uniqueness_constraints();
        assert_eq!(position.len(), 6);
        assert!(position.contains(&Clause::binary(-1, -3)));
        assert!(position.contains(&Clause::binary(-5, -6)));

        let vertex = generator.generate_vertex_uniqueness_constraints();
        assert_eq!(
            vertex,
            vec![Clause::binary(-1, -4), Clause::binary(-2, -5), Clause::binary(-3, -6)]
        );
    }

    #[test]
    fn test_non_adjacency_constraints() {
        let graph = path_graph();
        let generator = ConstraintGenerator::new(&graph, PositionVariables::new(2, 3).unwrap());

        // Only 0 and 2 are non-adjacent: (u, v) = (1, 3) and (3, 1) one-based
        let clauses = generator.generate_non_adjacency_constraints();
        assert_eq!(clauses, vec![Clause::binary(-1, -6), Clause::binary(-3, -4)]);
    }

    #[test]
    fn test_statistics_match_generated_clauses() {
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (1, 3), (1, 4), (0, 3), (3, 4)]).unwrap();
        let generator = ConstraintGenerator::new(&graph, PositionVariables::new(3, 5).unwrap());

        let formula = generator.generate_all_constraints();
        let stats = generator.statistics();

        // k + k*C(n,2) + n*C(k,2) + C(k,2) * ordered non-edges
        assert_eq!(stats.coverage_clauses, 3);
        assert_eq!(stats.position_uniqueness_clauses, 30);
        assert_eq!(stats.vertex_uniqueness_clauses, 15);
        assert_eq!(stats.non_adjacency_clauses, 3 * 8);
        assert_eq!(formula.clause_count(), stats.total_clauses());
        assert_eq!(formula.variable_count(), 15);
    }

    #[test]
    fn test_blocking_clause() {
        let graph = path_graph();
        let generator = ConstraintGenerator::new(&graph, PositionVariables::new(2, 3).unwrap());

        let clause = generator.generate_blocking_clause(&[0, 1]).unwrap();
        assert_eq!(clause.literals, vec![3, 6]);

        assert!(generator.generate_blocking_clause(&[0, 1, 2]).is_none());
    }

    #[test]
    fn test_formula_evaluation() {
        let mut formula = CnfFormula::new(2);
        formula.push(Clause::new(vec![1, 2]));
        formula.push(Clause::binary(-1, -2));

        assert!(formula.is_satisfied_by(|var| var == 1));
        assert!(!formula.is_satisfied_by(|_| true));
        assert!(!formula.is_satisfied_by(|_| false));
    }

    #[test]
    fn test_write_dimacs() {
        let mut formula = CnfFormula::new(3);
        formula.push(Clause::new(vec![1, -3]));
        formula.push(Clause::unit(2));

        let mut out = Vec::new();
        formula.write_dimacs(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "p cnf 3 2\n1 -3 0\n2 0\n");
    }
}
