//! Solution representation for graph queries

use crate::config::{ProblemKind, SolverBackend};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A witness found for one query, with enough context to re-check it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// One-based index among the solutions of a query
    pub id: usize,
    pub kind: ProblemKind,
    pub target_size: usize,
    pub vertex_count: usize,
    /// Zero-based vertices, ascending
    pub vertices: Vec<usize>,
    pub backend: SolverBackend,
    /// Time taken by the whole query
    #[serde(skip)]
    pub solve_time: Duration,
}

/// Compact per-solution record for summary files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub id: usize,
    pub kind: ProblemKind,
    pub target_size: usize,
    pub vertices: Vec<usize>,
}

impl Solution {
    /// Create a new solution
    pub fn new(
        id: usize,
        kind: ProblemKind,
        vertex_count: usize,
        mut vertices: Vec<usize>,
        backend: SolverBackend,
        solve_time: Duration,
    ) -> Self {
        vertices.sort_unstable();

        Self {
            id,
            kind,
            target_size: vertices.len(),
            vertex_count,
            vertices,
            backend,
            solve_time,
        }
    }

    /// Vertices outside the witness
    pub fn remaining_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count)
            .filter(|v| self.vertices.binary_search(v).is_err())
            .collect()
    }

    /// Witness with one-based vertex numbers
    pub fn one_based(&self) -> Vec<usize> {
        self.vertices.iter().map(|v| v + 1).collect()
    }

    /// Get a summary of the solution
    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            id: self.id,
            kind: self.kind,
            target_size: self.target_size,
            vertices: self.vertices.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Solution {
        Solution::new(
            1,
            ProblemKind::VertexCover,
            5,
            vec![3, 0],
            SolverBackend::Cadical,
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_solution_creation() {
        let solution = sample();
        assert_eq!(solution.vertices, vec![0, 3]);
        assert_eq!(solution.target_size, 2);
        assert_eq!(solution.remaining_vertices(), vec![1, 2, 4]);
        assert_eq!(solution.one_based(), vec![1, 4]);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");

        let solution = sample();
        solution.save_to_file(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"kind\": \"vertex_cover\""));

        let loaded = Solution::load_from_file(&path).unwrap();
        assert_eq!(loaded.vertices, solution.vertices);
        assert_eq!(loaded.solve_time, Duration::ZERO);
    }
}
