//! SAT encoder for the k-clique problem

use super::{ConstraintGenerator, ConstraintStatistics, CnfFormula, PositionVariables, SatBackend, SolverSolution};
use crate::error::{ReductionError, ReductionResult};
use crate::graph::Graph;
use crate::reduction::validator;
use log::{debug, info};

/// Zero-based vertex indices of a clique, independent set or vertex cover
pub type Witness = Vec<usize>;

/// A generated clique formula together with its variable layout
#[derive(Debug, Clone)]
pub struct CliqueEncoding {
    pub variables: PositionVariables,
    pub formula: CnfFormula,
}

/// Encodes "graph has a clique of size k" as CNF, solves it and decodes the
/// model back into a vertex set.
///
/// Every query builds its own formula and hands it to the backend from
/// scratch; nothing carries over between calls.
pub struct CliqueEncoder<B: SatBackend> {
    backend: B,
}

impl<B: SatBackend> CliqueEncoder<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Find a clique of size `k`, or `None` if the graph has none
    pub fn solve(&mut self, graph: &Graph, k: usize) -> ReductionResult<Option<Witness>> {
        check_target_size(graph, k)?;
        if k == 0 {
            return Ok(Some(Vec::new()));
        }

        let encoding = encode_clique(graph, k)?;
        self.solve_encoding(graph, &encoding)
    }

    /// Find up to `limit` distinct cliques of size `k`.
    ///
    /// Each round solves a fresh formula: the base encoding plus one blocking
    /// clause per clique already found.
    pub fn enumerate(&mut self, graph: &Graph, k: usize, limit: usize) -> ReductionResult<Vec<Witness>> {
        check_target_size(graph, k)?;
        if limit == 0 {
            return Ok(Vec::new());
        }
        if k == 0 {
            return Ok(vec![Vec::new()]);
        }

        let mut encoding = encode_clique(graph, k)?;
        let mut witnesses = Vec::new();

        while witnesses.len() < limit {
            let Some(mut witness) = self.solve_encoding(graph, &encoding)? else {
                break;
            };
            witness.sort_unstable();

            let blocking = ConstraintGenerator::new(graph, encoding.variables)
                .generate_blocking_clause(&witness);
            witnesses.push(witness);

            match blocking {
                Some(clause) => encoding.formula.push(clause),
                None => break,
            }
        }

        info!("Enumerated {} clique(s) of size {}", witnesses.len(), k);
        Ok(witnesses)
    }

    fn solve_encoding(&mut self, graph: &Graph, encoding: &CliqueEncoding) -> ReductionResult<Option<Witness>> {
        let solution = self
            .backend
            .solve_formula(&encoding.formula)
            .map_err(|e| ReductionError::Backend(format!("{:#}", e)))?;

        let Some(solution) = solution else {
            info!("{}: no clique of size {} exists", self.backend.name(), encoding.variables.positions());
            return Ok(None);
        };

        let witness = decode_witness(&encoding.variables, &solution)?;
        if let Err(reason) = validator::check_clique(graph, &witness) {
            return Err(ReductionError::InvalidWitness(reason));
        }

        info!(
            "{}: found clique {:?} in {:.3}s",
            self.backend.name(),
            witness,
            solution.solve_time.as_secs_f64()
        );
        Ok(Some(witness))
    }
}

/// Build the clique formula for `(graph, k)`.
///
/// Requires `1 <= k <= n`; `k == 0` has no position variables and is
/// answered by [`CliqueEncoder::solve`] without a formula.
pub fn encode_clique(graph: &Graph, k: usize) -> ReductionResult<CliqueEncoding> {
    check_target_size(graph, k)?;
    if k == 0 {
        return Err(ReductionError::InvalidTargetSize { k, n: graph.vertex_count() });
    }

    let variables = PositionVariables::new(k, graph.vertex_count())?;
    let formula = ConstraintGenerator::new(graph, variables).generate_all_constraints();

    debug!(
        "Generated clique formula for k={} on {} vertices: {} clauses with {} variables",
        k,
        graph.vertex_count(),
        formula.clause_count(),
        formula.variable_count()
    );

    Ok(CliqueEncoding { variables, formula })
}

/// Decode a model into the witness: for each position, the first vertex
/// whose variable is true.
pub fn decode_witness(variables: &PositionVariables, solution: &SolverSolution) -> ReductionResult<Witness> {
    (1..=variables.positions())
        .map(|position| {
            (1..=variables.vertices())
                .find(|&vertex| solution.value(variables.id(position, vertex)))
                .map(|vertex| vertex - 1)
                .ok_or(ReductionError::InconsistentModel { position })
        })
        .collect()
}

/// Reject target sizes larger than the vertex count
pub fn check_target_size(graph: &Graph, k: usize) -> ReductionResult<()> {
    if k > graph.vertex_count() {
        return Err(ReductionError::InvalidTargetSize { k, n: graph.vertex_count() });
    }
    Ok(())
}

/// Size of the clique formula for `(graph, k)` without building it
pub fn encoding_statistics(graph: &Graph, k: usize) -> ReductionResult<EncodingStatistics> {
    check_target_size(graph, k)?;
    let variables = PositionVariables::new(k, graph.vertex_count())?;
    let constraints = ConstraintGenerator::new(graph, variables).statistics();

    Ok(EncodingStatistics {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        target_size: k,
        constraints,
    })
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub target_size: usize,
    pub constraints: ConstraintStatistics,
}

impl EncodingStatistics {
    pub fn total_variables(&self) -> usize {
        self.constraints.total_variables
    }

    pub fn total_clauses(&self) -> usize {
        self.constraints.total_clauses()
    }

    /// Rough difficulty bucket for the query, by clause count
    pub fn estimate_complexity(&self) -> ComplexityEstimate {
        let clauses = self.total_clauses();

        let complexity_level = if clauses < 10_000 {
            ComplexityLevel::Low
        } else if clauses < 100_000 {
            ComplexityLevel::Medium
        } else if clauses < 1_000_000 {
            ComplexityLevel::High
        } else {
            ComplexityLevel::VeryHigh
        };

        ComplexityEstimate {
            complexity_level,
            estimated_variables: self.total_variables(),
            estimated_clauses: clauses,
            non_adjacency_share: if clauses == 0 {
                0.0
            } else {
                self.constraints.non_adjacency_clauses as f64 / clauses as f64
            },
        }
    }
}

/// Complexity estimate for the problem
#[derive(Debug, Clone)]
pub struct ComplexityEstimate {
    pub complexity_level: ComplexityLevel,
    pub estimated_variables: usize,
    pub estimated_clauses: usize,
    pub non_adjacency_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Graph: {} vertices, {} edges", self.vertex_count, self.edge_count)?;
        writeln!(f, "  Clique size: {}", self.target_size)?;
        write!(f, "{}", self.constraints)
    }
}

impl std::fmt::Display for ComplexityEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem Complexity Estimate:")?;
        writeln!(f, "  Complexity level: {:?}", self.complexity_level)?;
        writeln!(f, "  Estimated variables: {}", self.estimated_variables)?;
        writeln!(f, "  Estimated clauses: {}", self.estimated_clauses)?;
        writeln!(f, "  Non-adjacency share: {:.1}%", self.non_adjacency_share * 100.0)?;

        let recommendation = match self.complexity_level {
            ComplexityLevel::Low => "Should solve quickly",
            ComplexityLevel::Medium => "May take some time to solve",
            ComplexityLevel::High => "Likely to be challenging, consider a smaller graph",
            ComplexityLevel::VeryHigh => "Very challenging, formula generation alone needs significant memory",
        };
        writeln!(f, "  Recommendation: {}", recommendation)?;

        Ok(())
    }
}
