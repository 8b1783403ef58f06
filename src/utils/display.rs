//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::graph::Graph;
use crate::reduction::Solution;
use anyhow::{Context, Result};
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, graph: Option<&Graph>) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", solution.id));
        output.push_str(&format!("Problem: {} of size {}\n", solution.kind, solution.target_size));
        output.push_str(&format!("Backend: {:?}\n", solution.backend));
        output.push_str(&format!("Solve Time: {:.3}s\n", solution.solve_time.as_secs_f64()));
        output.push_str(&format!("Vertices (0-based): {:?}\n", solution.vertices));
        output.push_str(&format!("Vertices (1-based): {:?}\n", solution.one_based()));
        output.push_str(&format!("Remaining: {:?}\n", solution.remaining_vertices()));

        if let Some(graph) = graph {
            output.push('\n');
            output.push_str(&Self::format_graph_highlighted(graph, &solution.vertices));
        }

        output
    }

    /// Format multiple solutions as a summary table
    pub fn format_solution_summary(solutions: &[Solution]) -> String {
        let mut output = String::new();

        output.push_str("Solutions Summary:\n");
        output.push_str("ID   | Problem         | Size | Time(ms) | Vertices\n");
        output.push_str("-----|-----------------|------|----------|----------\n");

        for solution in solutions {
            output.push_str(&format!(
                "{:4} | {:15} | {:4} | {:8} | {:?}\n",
                solution.id,
                solution.kind.to_string(),
                solution.target_size,
                solution.solve_time.as_millis(),
                solution.vertices
            ));
        }

        output
    }

    /// Format an adjacency matrix with vertex numbers
    pub fn format_graph(graph: &Graph) -> String {
        Self::format_graph_highlighted(graph, &[])
    }

    /// Format an adjacency matrix, marking the rows of `selected` vertices
    pub fn format_graph_highlighted(graph: &Graph, selected: &[usize]) -> String {
        let mut output = String::new();

        output.push_str("    ");
        for v in 0..graph.vertex_count() {
            output.push_str(&format!("{:2}", v % 100));
        }
        output.push('\n');

        for u in 0..graph.vertex_count() {
            let marker = if selected.contains(&u) { '*' } else { ' ' };
            output.push_str(&format!("{}{:2} ", marker, u));
            for v in 0..graph.vertex_count() {
                output.push_str(if graph.has_edge(u, v) { " 1" } else { " ·" });
            }
            output.push('\n');
        }

        output
    }

    /// Save solutions to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        solutions: &[Solution],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                for solution in solutions {
                    let filepath = output_dir.join(format!("solution_{:03}.txt", solution.id));
                    std::fs::write(filepath, Self::format_solution(solution, None))?;
                }
            }
            OutputFormat::Json => {
                for solution in solutions {
                    let filepath = output_dir.join(format!("solution_{:03}.json", solution.id));
                    solution.save_to_file(filepath)?;
                }

                let summary_path = output_dir.join("solutions_summary.json");
                let summaries: Vec<_> = solutions.iter().map(|s| s.summary()).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(summary_path, summary_json)?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProblemKind, SolverBackend};
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample_solutions() -> Vec<Solution> {
        vec![
            Solution::new(1, ProblemKind::Clique, 5, vec![0, 1, 3], SolverBackend::Cadical, Duration::from_millis(3)),
            Solution::new(2, ProblemKind::Clique, 5, vec![1, 3, 4], SolverBackend::Cadical, Duration::from_millis(3)),
        ]
    }

    #[test]
    fn test_graph_formatting() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();

        let plain = SolutionFormatter::format_graph(&graph);
        assert!(plain.starts_with("     0 1 2\n"));
        assert!(plain.contains("  1  1 · 1"));

        let marked = SolutionFormatter::format_graph_highlighted(&graph, &[1]);
        assert!(marked.contains("* 1 "));
        assert!(!marked.contains("* 0 "));
    }

    #[test]
    fn test_solution_formatting() {
        let solutions = sample_solutions();

        let text = SolutionFormatter::format_solution(&solutions[0], None);
        assert!(text.contains("=== Solution 1 ==="));
        assert!(text.contains("Vertices (1-based): [1, 2, 4]"));
        assert!(text.contains("Remaining: [2, 4]"));

        let summary = SolutionFormatter::format_solution_summary(&solutions);
        assert_eq!(summary.lines().count(), 5);
        assert!(summary.contains("[1, 3, 4]"));
    }

    #[test]
    fn test_save_solutions() {
        let dir = tempdir().unwrap();
        let solutions = sample_solutions();

        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Json).unwrap();
        assert!(dir.path().join("solution_001.json").exists());
        assert!(dir.path().join("solution_002.json").exists());

        let summary = std::fs::read_to_string(dir.path().join("solutions_summary.json")).unwrap();
        assert!(summary.contains("\"vertices\""));

        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Text).unwrap();
        assert!(dir.path().join("solution_002.txt").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
