//! k-vertex-cover via independent sets of size n - k

use super::IndependentSetSolver;
use crate::error::ReductionResult;
use crate::graph::Graph;
use crate::sat::encoder::check_target_size;
use crate::sat::{SatBackend, Witness};

/// Finds vertex covers through the complement relation: `S` covers every
/// edge exactly when `V \ S` is independent, so a cover of size `k` exists
/// iff an independent set of size `n - k` does.
pub struct VertexCoverSolver<B: SatBackend> {
    independent_set: IndependentSetSolver<B>,
}

impl<B: SatBackend> VertexCoverSolver<B> {
    pub fn new(backend: B) -> Self {
        Self {
            independent_set: IndependentSetSolver::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        self.independent_set.backend()
    }

    /// Find a vertex cover of size `k`, or `None` if none exists
    pub fn solve(&mut self, graph: &Graph, k: usize) -> ReductionResult<Option<Witness>> {
        check_target_size(graph, k)?;
        let n = graph.vertex_count();

        Ok(self
            .independent_set
            .solve(graph, n - k)?
            .map(|independent| complement_set(n, &independent)))
    }

    /// Up to `limit` distinct vertex covers of size `k`
    pub fn enumerate(&mut self, graph: &Graph, k: usize, limit: usize) -> ReductionResult<Vec<Witness>> {
        check_target_size(graph, k)?;
        let n = graph.vertex_count();

        Ok(self
            .independent_set
            .enumerate(graph, n - k, limit)?
            .iter()
            .map(|independent| complement_set(n, independent))
            .collect())
    }
}

/// `[0, n)` minus `vertices`, ascending. Vertices outside `[0, n)` are ignored.
pub fn complement_set(n: usize, vertices: &[usize]) -> Witness {
    let mut excluded = vec![false; n];
    for &v in vertices {
        if let Some(slot) = excluded.get_mut(v) {
            *slot = true;
        }
    }
    (0..n).filter(|&v| !excluded[v]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduction::validator;
    use crate::sat::SatSolver;

    fn star_graph() -> Graph {
        Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap()
    }

    #[test]
    fn test_complement_set() {
        assert_eq!(complement_set(5, &[1, 3]), vec![0, 2, 4]);
        assert_eq!(complement_set(3, &[]), vec![0, 1, 2]);
        assert!(complement_set(2, &[1, 0]).is_empty());
        assert_eq!(complement_set(2, &[5]), vec![0, 1]);
        assert_eq!(complement_set(3, &[2, 7, 0]), vec![1]);
    }

    #[test]
    fn test_star_center_covers() {
        let graph = star_graph();
        let mut solver = VertexCoverSolver::new(SatSolver::new());

        assert_eq!(solver.solve(&graph, 1).unwrap(), Some(vec![0]));
    }

    #[test]
    fn test_bipartite_cover_of_two() {
        let graph = Graph::from_edges(6, &[(0, 4), (0, 5), (1, 4), (1, 5), (2, 4), (2, 5)]).unwrap();
        let mut solver = VertexCoverSolver::new(SatSolver::new());

        let cover = solver.solve(&graph, 2).unwrap().unwrap();
        assert_eq!(cover, vec![4, 5]);
        assert!(validator::check_vertex_cover(&graph, &cover).is_ok());

        assert_eq!(solver.solve(&graph, 1).unwrap(), None);
    }

    #[test]
    fn test_boundaries() {
        let graph = star_graph();
        let mut solver = VertexCoverSolver::new(SatSolver::new());

        // k = n: the whole vertex set, via an empty independent set
        assert_eq!(solver.solve(&graph, 5).unwrap(), Some(vec![0, 1, 2, 3, 4]));

        // k = 0 only works without edges
        assert_eq!(solver.solve(&graph, 0).unwrap(), None);
        let edgeless = Graph::empty(3);
        assert_eq!(solver.solve(&edgeless, 0).unwrap(), Some(vec![]));

        assert!(solver.solve(&graph, 6).is_err());
    }

    #[test]
    fn test_enumerate_covers() {
        // Single edge 0 - 1 plus isolated 2: covers of size 1 are {0} and {1}
        let graph = Graph::from_edges(3, &[(0, 1)]).unwrap();
        let mut solver = VertexCoverSolver::new(SatSolver::new());

        let mut covers = solver.enumerate(&graph, 1, 10).unwrap();
        covers.sort();
        assert_eq!(covers, vec![vec![0], vec![1]]);
    }
}
