//! Query definition and dispatch for the three graph problems

use super::{validator, IndependentSetSolver, Solution, VertexCoverSolver};
use crate::config::{ProblemKind, Settings, SolverBackend};
use crate::error::{ReductionError, ReductionResult};
use crate::graph::{load_graph_from_file, Graph};
use crate::sat::encoder::{check_target_size, encode_clique, encoding_statistics, EncodingStatistics};
use crate::sat::{CliqueEncoder, SatBackend, SolverOptions, UnifiedSatSolver, Witness};
use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Answer one `kind` query of size `k` with the given backend
pub fn solve_query<B: SatBackend>(
    kind: ProblemKind,
    graph: &Graph,
    k: usize,
    backend: B,
) -> ReductionResult<Option<Witness>> {
    match kind {
        ProblemKind::Clique => CliqueEncoder::new(backend).solve(graph, k),
        ProblemKind::IndependentSet => IndependentSetSolver::new(backend).solve(graph, k),
        ProblemKind::VertexCover => VertexCoverSolver::new(backend).solve(graph, k),
    }
}

/// Up to `limit` distinct witnesses for one `kind` query of size `k`
pub fn enumerate_query<B: SatBackend>(
    kind: ProblemKind,
    graph: &Graph,
    k: usize,
    limit: usize,
    backend: B,
) -> ReductionResult<Vec<Witness>> {
    match kind {
        ProblemKind::Clique => CliqueEncoder::new(backend).enumerate(graph, k, limit),
        ProblemKind::IndependentSet => IndependentSetSolver::new(backend).enumerate(graph, k, limit),
        ProblemKind::VertexCover => VertexCoverSolver::new(backend).enumerate(graph, k, limit),
    }
}

/// Statistics of the clique formula a `kind` query actually hands to the
/// backend (complement graph for the reductions, `n - k` for covers)
pub fn query_encoding_statistics(kind: ProblemKind, graph: &Graph, k: usize) -> ReductionResult<EncodingStatistics> {
    check_target_size(graph, k)?;
    match kind {
        ProblemKind::Clique => encoding_statistics(graph, k),
        ProblemKind::IndependentSet => encoding_statistics(&graph.complement(), k),
        ProblemKind::VertexCover => {
            encoding_statistics(&graph.complement(), graph.vertex_count() - k)
        }
    }
}

/// One independent query for [`solve_batch`]
#[derive(Debug, Clone)]
pub struct Query {
    pub kind: ProblemKind,
    pub graph: Graph,
    pub target_size: usize,
}

/// Solve independent queries in parallel, one fresh solver per query.
///
/// Results come back in input order.
pub fn solve_batch(
    queries: &[Query],
    backend: SolverBackend,
    options: &SolverOptions,
) -> Vec<ReductionResult<Option<Witness>>> {
    queries
        .par_iter()
        .map(|query| {
            let solver = UnifiedSatSolver::with_options(backend, options);
            solve_query(query.kind, &query.graph, query.target_size, solver)
        })
        .collect()
}

/// A configured query over a loaded graph
pub struct GraphProblem {
    settings: Settings,
    graph: Graph,
}

impl GraphProblem {
    /// Create a new problem from settings, loading the graph file
    pub fn new(settings: Settings) -> Result<Self> {
        let graph = load_graph_from_file(&settings.input.graph_file)
            .context("Failed to load graph file")?;

        Self::with_graph(settings, graph)
    }

    /// Create a problem with an explicit graph
    pub fn with_graph(settings: Settings, graph: Graph) -> Result<Self> {
        check_target_size(&graph, settings.problem.target_size)
            .context("Target size does not fit the graph")?;

        Ok(Self { settings, graph })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            timeout: self.settings.solver.timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Solve the query and return up to `max_solutions` validated witnesses.
    ///
    /// An empty result means no structure of the requested size exists.
    pub fn solve(&self) -> Result<Vec<Solution>> {
        let kind = self.settings.problem.kind;
        let k = self.settings.problem.target_size;
        let backend = self.settings.solver.backend;
        let limit = self.settings.solver.max_solutions;

        info!(
            "Searching for {} {} of size {} in a graph with {} vertices and {} edges",
            if limit > 1 { "up to several" } else { "a" },
            kind,
            k,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        let start_time = Instant::now();
        let solver = UnifiedSatSolver::with_options(backend, &self.solver_options());
        let witnesses: ReductionResult<Vec<Witness>> = if limit > 1 {
            enumerate_query(kind, &self.graph, k, limit, solver)
        } else {
            solve_query(kind, &self.graph, k, solver).map(|w| w.into_iter().collect())
        };
        let witnesses = witnesses
            .with_context(|| format!("Failed to solve {} query of size {}", kind, k))?;
        let solve_time = start_time.elapsed();

        let mut solutions = Vec::new();
        for witness in witnesses {
            match validator::check_witness(kind, &self.graph, k, &witness) {
                Ok(()) => solutions.push(Solution::new(
                    solutions.len() + 1,
                    kind,
                    self.graph.vertex_count(),
                    witness,
                    backend,
                    solve_time,
                )),
                Err(reason) => {
                    warn!("Decoded {} {:?} failed validation: {}", kind, witness, reason);
                    return Err(ReductionError::InvalidWitness(reason).into());
                }
            }
        }

        info!("Found {} {} solution(s) in {:.3}s", solutions.len(), kind, solve_time.as_secs_f64());
        Ok(solutions)
    }

    /// Statistics of the formula this problem generates
    pub fn encoding_statistics(&self) -> Result<EncodingStatistics> {
        Ok(query_encoding_statistics(
            self.settings.problem.kind,
            &self.graph,
            self.settings.problem.target_size,
        )?)
    }

    /// Write the clique formula this problem generates in DIMACS format
    pub fn write_dimacs<W: std::io::Write>(&self, out: &mut W) -> Result<()> {
        let kind = self.settings.problem.kind;
        let k = self.settings.problem.target_size;
        let n = self.graph.vertex_count();

        let (graph, clique_size) = match kind {
            ProblemKind::Clique => (self.graph.clone(), k),
            ProblemKind::IndependentSet => (self.graph.complement(), k),
            ProblemKind::VertexCover => (self.graph.complement(), n - k),
        };

        if clique_size == 0 {
            anyhow::bail!("A query of size {} is answered without a formula", clique_size);
        }

        let encoding = encode_clique(&graph, clique_size)?;
        encoding.formula.write_dimacs(out).context("Failed to write DIMACS formula")?;
        Ok(())
    }
}
