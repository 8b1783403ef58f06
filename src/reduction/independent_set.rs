//! k-independent-set via cliques in the complement graph

use crate::error::ReductionResult;
use crate::graph::Graph;
use crate::sat::{CliqueEncoder, SatBackend, Witness};

/// Finds independent sets by asking the clique encoder about the complement
/// graph. A clique there is an independent set here, so witnesses pass
/// through unchanged.
pub struct IndependentSetSolver<B: SatBackend> {
    clique: CliqueEncoder<B>,
}

impl<B: SatBackend> IndependentSetSolver<B> {
    pub fn new(backend: B) -> Self {
        Self {
            clique: CliqueEncoder::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        self.clique.backend()
    }

    /// Find an independent set of size `k`, or `None` if none exists
    pub fn solve(&mut self, graph: &Graph, k: usize) -> ReductionResult<Option<Witness>> {
        let complement = graph.complement();
        self.clique.solve(&complement, k)
    }

    /// Up to `limit` distinct independent sets of size `k`
    pub fn enumerate(&mut self, graph: &Graph, k: usize, limit: usize) -> ReductionResult<Vec<Witness>> {
        let complement = graph.complement();
        self.clique.enumerate(&complement, k, limit)
    }
}
