//! Witness validation and exhaustive cross-checks

use super::ProblemKind;
use crate::graph::Graph;
use itertools::Itertools;

/// Check that `witness` lists distinct, in-range vertices
fn check_distinct(graph: &Graph, witness: &[usize]) -> Result<(), String> {
    let n = graph.vertex_count();
    let mut seen = vec![false; n];

    for &v in witness {
        if v >= n {
            return Err(format!("vertex {} out of range for {} vertices", v, n));
        }
        if seen[v] {
            return Err(format!("vertex {} appears more than once", v));
        }
        seen[v] = true;
    }

    Ok(())
}

/// All witness vertices distinct and pairwise adjacent
pub fn check_clique(graph: &Graph, witness: &[usize]) -> Result<(), String> {
    check_distinct(graph, witness)?;

    match witness.iter().tuple_combinations().find(|&(&u, &v)| !graph.has_edge(u, v)) {
        Some((u, v)) => Err(format!("vertices {} and {} are not adjacent", u, v)),
        None => Ok(()),
    }
}

/// All witness vertices distinct and pairwise non-adjacent
pub fn check_independent_set(graph: &Graph, witness: &[usize]) -> Result<(), String> {
    check_distinct(graph, witness)?;

    match witness.iter().tuple_combinations().find(|&(&u, &v)| graph.has_edge(u, v)) {
        Some((u, v)) => Err(format!("vertices {} and {} are adjacent", u, v)),
        None => Ok(()),
    }
}

/// All witness vertices distinct and every edge has an endpoint among them
pub fn check_vertex_cover(graph: &Graph, witness: &[usize]) -> Result<(), String> {
    check_distinct(graph, witness)?;

    let mut covered = vec![false; graph.vertex_count()];
    for &v in witness {
        covered[v] = true;
    }

    match graph.edges().into_iter().find(|&(u, v)| !covered[u] && !covered[v]) {
        Some((u, v)) => Err(format!("edge {} - {} is not covered", u, v)),
        None => Ok(()),
    }
}

/// Check a witness for `kind` with exactly `k` vertices
pub fn check_witness(kind: ProblemKind, graph: &Graph, k: usize, witness: &[usize]) -> Result<(), String> {
    if witness.len() != k {
        return Err(format!("witness has {} vertices, expected {}", witness.len(), k));
    }

    match kind {
        ProblemKind::Clique => check_clique(graph, witness),
        ProblemKind::IndependentSet => check_independent_set(graph, witness),
        ProblemKind::VertexCover => check_vertex_cover(graph, witness),
    }
}

/// Exhaustive search over all k-subsets; only sensible for small graphs
pub fn brute_force(kind: ProblemKind, graph: &Graph, k: usize) -> Option<Vec<usize>> {
    if k > graph.vertex_count() {
        return None;
    }

    (0..graph.vertex_count())
        .combinations(k)
        .find(|subset| check_witness(kind, graph, k, subset).is_ok())
}

/// Outcome of checking a user-supplied witness
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub kind: ProblemKind,
    pub target_size: usize,
    pub witness: Vec<usize>,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn new(kind: ProblemKind, graph: &Graph, witness: Vec<usize>) -> Self {
        let target_size = witness.len();
        let outcome = check_witness(kind, graph, target_size, &witness);

        Self {
            kind,
            target_size,
            witness,
            is_valid: outcome.is_ok(),
            error_message: outcome.err(),
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Validation Result:")?;
        writeln!(f, "  Problem: {}", self.kind)?;
        writeln!(f, "  Size: {}", self.target_size)?;
        writeln!(f, "  Vertices: {:?}", self.witness)?;
        writeln!(f, "  Valid: {}", if self.is_valid { "Yes" } else { "No" })?;
        if let Some(ref error) = self.error_message {
            writeln!(f, "  Reason: {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_check_clique() {
        let graph = path_graph();
        assert!(check_clique(&graph, &[1, 2]).is_ok());
        assert!(check_clique(&graph, &[]).is_ok());
        assert!(check_clique(&graph, &[0, 2]).is_err());
        assert!(check_clique(&graph, &[1, 1]).is_err());
        assert!(check_clique(&graph, &[4]).is_err());
    }

    #[test]
    fn test_check_independent_set() {
        let graph = path_graph();
        assert!(check_independent_set(&graph, &[0, 2]).is_ok());
        assert!(check_independent_set(&graph, &[0, 3]).is_ok());
        assert!(check_independent_set(&graph, &[2, 3]).is_err());
    }

    #[test]
    fn test_check_vertex_cover() {
        let graph = path_graph();
        assert!(check_vertex_cover(&graph, &[1, 2]).is_ok());
        assert!(check_vertex_cover(&graph, &[0, 2]).is_ok());
        assert!(check_vertex_cover(&graph, &[1, 3]).is_ok());
        assert_eq!(
            check_vertex_cover(&graph, &[0, 3]),
            Err("edge 1 - 2 is not covered".to_string())
        );
        assert!(check_vertex_cover(&Graph::empty(2), &[]).is_ok());
    }

    #[test]
    fn test_check_witness_size() {
        let graph = path_graph();
        assert!(check_witness(ProblemKind::Clique, &graph, 2, &[1, 2]).is_ok());
        assert!(check_witness(ProblemKind::Clique, &graph, 3, &[1, 2]).is_err());
    }

    #[test]
    fn test_brute_force() {
        let graph = path_graph();
        assert_eq!(brute_force(ProblemKind::Clique, &graph, 2), Some(vec![0, 1]));
        assert_eq!(brute_force(ProblemKind::Clique, &graph, 3), None);
        assert_eq!(brute_force(ProblemKind::IndependentSet, &graph, 2), Some(vec![0, 2]));
        assert_eq!(brute_force(ProblemKind::VertexCover, &graph, 1), None);
        assert_eq!(brute_force(ProblemKind::VertexCover, &graph, 2), Some(vec![0, 2]));
        assert_eq!(brute_force(ProblemKind::Clique, &graph, 0), Some(vec![]));
        assert_eq!(brute_force(ProblemKind::Clique, &graph, 5), None);
    }

    #[test]
    fn test_validation_result() {
        let graph = path_graph();

        let valid = ValidationResult::new(ProblemKind::VertexCover, &graph, vec![1, 2]);
        assert!(valid.is_valid);
        assert_eq!(valid.target_size, 2);

        let invalid = ValidationResult::new(ProblemKind::Clique, &graph, vec![0, 3]);
        assert!(!invalid.is_valid);
        assert!(invalid.error_message.unwrap().contains("not adjacent"));
    }
}
