//! Adjacency-matrix graph representation

use crate::error::GraphError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An undirected simple graph stored as an n x n boolean adjacency matrix.
///
/// Vertices are zero-based. Diagonal cells are kept as supplied but no query
/// ever reads them, so self-loops in the input are harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertex_count: usize,
    cells: Vec<bool>,
}

/// Largest vertex count a graph may be built with; the matrix holds n² cells
pub const MAX_VERTICES: usize = 10_000;

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Sizes come from code here; use [`Graph::try_empty`] for counts read
    /// from input.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![false; vertex_count * vertex_count],
        }
    }

    /// Like [`Graph::empty`], but rejects counts above [`MAX_VERTICES`]
    pub fn try_empty(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooLarge { vertex_count, max: MAX_VERTICES });
        }
        Ok(Self::empty(vertex_count))
    }

    /// Create a graph from a square, symmetric boolean matrix
    pub fn from_matrix(rows: Vec<Vec<bool>>) -> Result<Self, GraphError> {
        if rows.is_empty() {
            return Err(GraphError::Empty);
        }

        let n = rows.len();
        if n > MAX_VERTICES {
            return Err(GraphError::TooLarge { vertex_count: n, max: MAX_VERTICES });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(GraphError::NonSquare { row, expected: n, got: cells.len() });
            }
        }

        for (u, v) in (0..n).tuple_combinations() {
            if rows[u][v] != rows[v][u] {
                return Err(GraphError::Asymmetric { u, v });
            }
        }

        Ok(Self {
            vertex_count: n,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a graph from a 0/1 integer matrix
    pub fn from_binary_matrix(rows: &[Vec<u8>]) -> Result<Self, GraphError> {
        Self::from_matrix(
            rows.iter()
                .map(|row| row.iter().map(|&cell| cell != 0).collect())
                .collect(),
        )
    }

    /// Create a graph from a zero-based edge list
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::try_empty(vertex_count)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.vertex_count + v
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Insert the undirected edge `u - v`. Self-loops are ignored.
    pub(crate) fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u != v {
            let (uv, vu) = (self.index(u, v), self.index(v, u));
            self.cells[uv] = true;
            self.cells[vu] = true;
        }
        Ok(())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether `u` and `v` are distinct adjacent vertices.
    ///
    /// Out-of-range vertices are never adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v && u < self.vertex_count && v < self.vertex_count && self.cells[self.index(u, v)]
    }

    /// Raw matrix cell, including the diagonal
    pub fn cell(&self, u: usize, v: usize) -> bool {
        self.cells[self.index(u, v)]
    }

    /// All edges as `(u, v)` with `u < v`
    pub fn edges(&self) -> Vec<(usize, usize)> {
        (0..self.vertex_count)
            .tuple_combinations()
            .filter(|&(u, v)| self.has_edge(u, v))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Ordered pairs `(u, v)` with `u != v` and no edge between them
    pub fn non_edge_pair_count(&self) -> usize {
        let n = self.vertex_count;
        n * n.saturating_sub(1) - 2 * self.edge_count()
    }

    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        (0..self.vertex_count)
            .filter(|&other| self.has_edge(vertex, other))
            .collect()
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Edge density in [0, 1]
    pub fn density(&self) -> f64 {
        let n = self.vertex_count;
        if n < 2 {
            return 0.0;
        }
        self.edge_count() as f64 / (n * (n - 1) / 2) as f64
    }

    /// The complement graph: off-diagonal cells inverted, diagonal untouched.
    ///
    /// Applying this twice gives back the exact original matrix.
    pub fn complement(&self) -> Self {
        let mut cells = self.cells.clone();
        for u in 0..self.vertex_count {
            for v in 0..self.vertex_count {
                if u != v {
                    let idx = self.index(u, v);
                    cells[idx] = !self.cells[idx];
                }
            }
        }
        Self {
            vertex_count: self.vertex_count,
            cells,
        }
    }

    /// Copy of the matrix as rows of booleans
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.vertex_count.max(1))
            .take(self.vertex_count)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.vertex_count {
            let row: String = (0..self.vertex_count)
                .map(|v| if self.cell(u, v) { '1' } else { '0' })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
