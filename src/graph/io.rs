//! File I/O for graphs

use super::Graph;
use crate::error::GraphError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a graph from a file, choosing the format by extension.
///
/// `.col` and `.dimacs` files are read as DIMACS edge lists, anything else as
/// an adjacency matrix.
pub fn load_graph_from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?;

    let is_dimacs = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("col") | Some("dimacs")
    );

    let graph = if is_dimacs {
        parse_dimacs_graph(&content)
    } else {
        parse_adjacency_matrix(&content)
    };

    graph.with_context(|| format!("Failed to parse graph from file: {}", path.display()))
}

/// Parse an adjacency matrix.
///
/// One row per line. Cells are `0` or `1`, either packed (`0110`) or
/// separated by whitespace or commas (`0, 1, 1, 0`). Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_adjacency_matrix(content: &str) -> Result<Graph, GraphError> {
    let mut rows = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                ',' | '[' | ']' => {}
                c if c.is_whitespace() => {}
                c => {
                    return Err(GraphError::Parse {
                        line: line_idx + 1,
                        message: format!("invalid character '{}', only 0 and 1 are allowed", c),
                    })
                }
            }
        }
        rows.push(row);
    }

    Graph::from_matrix(rows)
}

/// Parse a DIMACS graph (`p edge <n> <m>` followed by one-based `e <u> <v>` lines)
pub fn parse_dimacs_graph(content: &str) -> Result<Graph, GraphError> {
    let mut graph: Option<Graph> = None;

    for (line_idx, line) in content.lines().enumerate() {
        let line_no = line_idx + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.first() {
            None | Some(&"c") => continue,
            Some(&"p") => {
                if parts.len() < 4 || parts[1] != "edge" {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: "expected problem line 'p edge <vertices> <edges>'".to_string(),
                    });
                }
                let n = parse_number(parts[2], line_no)?;
                graph = Some(Graph::try_empty(n)?);
            }
            Some(&"e") => {
                let g = graph.as_mut().ok_or_else(|| GraphError::Parse {
                    line: line_no,
                    message: "edge line before problem line".to_string(),
                })?;
                if parts.len() < 3 {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: "expected edge line 'e <u> <v>'".to_string(),
                    });
                }
                let u = one_based(parse_number(parts[1], line_no)?, line_no)?;
                let v = one_based(parse_number(parts[2], line_no)?, line_no)?;
                g.add_edge(u, v)?;
            }
            Some(other) => {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("unknown line type '{}'", other),
                })
            }
        }
    }

    match graph {
        Some(g) if g.vertex_count() > 0 => Ok(g),
        Some(_) => Err(GraphError::Empty),
        None => Err(GraphError::Parse {
            line: 0,
            message: "no problem line found".to_string(),
        }),
    }
}

fn parse_number(token: &str, line: usize) -> Result<usize, GraphError> {
    token.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("'{}' is not a non-negative integer", token),
    })
}

fn one_based(vertex: usize, line: usize) -> Result<usize, GraphError> {
    vertex.checked_sub(1).ok_or(GraphError::Parse {
        line,
        message: "DIMACS vertices are numbered from 1".to_string(),
    })
}

/// Save a graph as a packed adjacency matrix
pub fn save_graph_to_file<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, graph.to_string())
        .with_context(|| format!("Failed to write graph to file: {}", path.display()))?;

    Ok(())
}

/// Graphs written by `setup`
pub fn example_graphs() -> Result<Vec<(&'static str, Graph)>> {
    Ok(vec![
        (
            "triangles",
            Graph::from_edges(5, &[(0, 1), (1, 2), (1, 3), (1, 4), (0, 3), (3, 4)])?,
        ),
        (
            "bipartite",
            Graph::from_edges(6, &[(0, 4), (0, 5), (1, 4), (1, 5), (2, 4), (2, 5)])?,
        ),
        (
            "cycle5",
            Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])?,
        ),
        ("k4", Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])?),
    ])
}

/// Write the example graphs into a directory as `<name>.txt`
pub fn create_example_graphs<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, graph) in example_graphs()? {
        save_graph_to_file(&graph, dir.join(format!("{}.txt", name)))?;
    }

    Ok(())
}
