//! Configuration settings for graph SAT queries

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub problem: ProblemConfig,
    pub solver: SolverConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub kind: ProblemKind,
    pub target_size: usize,
}

/// The three fixed-size graph queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Clique,
    IndependentSet,
    VertexCover,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProblemKind::Clique => "clique",
            ProblemKind::IndependentSet => "independent set",
            ProblemKind::VertexCover => "vertex cover",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    pub max_solutions: usize,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Cadical,
    Varisat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub graph_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            problem: ProblemConfig {
                kind: ProblemKind::Clique,
                target_size: 3,
            },
            solver: SolverConfig {
                backend: SolverBackend::Cadical,
                max_solutions: 1,
                timeout_seconds: None,
            },
            input: InputConfig {
                graph_file: PathBuf::from("input/graphs/triangles.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.solver.max_solutions == 0 {
            anyhow::bail!("Maximum solutions must be positive");
        }

        if self.solver.timeout_seconds == Some(0) {
            anyhow::bail!("Timeout must be positive when set");
        }

        if !self.input.graph_file.exists() {
            anyhow::bail!("Graph file does not exist: {}", self.input.graph_file.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(kind) = cli_overrides.kind {
            self.problem.kind = kind;
        }
        if let Some(target_size) = cli_overrides.target_size {
            self.problem.target_size = target_size;
        }
        if let Some(backend) = cli_overrides.backend {
            self.solver.backend = backend;
        }
        if let Some(max_solutions) = cli_overrides.max_solutions {
            self.solver.max_solutions = max_solutions;
        }
        if let Some(ref graph_file) = cli_overrides.graph_file {
            self.input.graph_file = graph_file.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if cli_overrides.json {
            self.output.format = OutputFormat::Json;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub kind: Option<ProblemKind>,
    pub target_size: Option<usize>,
    pub backend: Option<SolverBackend>,
    pub max_solutions: Option<usize>,
    pub graph_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.problem.kind = ProblemKind::VertexCover;
        settings.solver.backend = SolverBackend::Varisat;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.problem.kind, ProblemKind::VertexCover);
        assert_eq!(loaded.solver.backend, SolverBackend::Varisat);
        assert_eq!(loaded.problem.target_size, 3);
    }

    #[test]
    fn test_yaml_names() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert!(yaml.contains("kind: clique"));
        assert!(yaml.contains("backend: cadical"));

        let kind: ProblemKind = serde_yaml::from_str("independent_set").unwrap();
        assert_eq!(kind, ProblemKind::IndependentSet);
    }

    #[test]
    fn test_validate() {
        let dir = tempdir().unwrap();
        let graph_file = dir.path().join("g.txt");
        std::fs::write(&graph_file, "01\n10\n").unwrap();

        let mut settings = Settings::default();
        assert!(settings.validate().is_err());

        settings.input.graph_file = graph_file;
        assert!(settings.validate().is_ok());

        settings.solver.max_solutions = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            kind: Some(ProblemKind::IndependentSet),
            target_size: Some(4),
            max_solutions: Some(2),
            json: true,
            ..Default::default()
        });

        assert_eq!(settings.problem.kind, ProblemKind::IndependentSet);
        assert_eq!(settings.problem.target_size, 4);
        assert_eq!(settings.solver.max_solutions, 2);
        assert_eq!(settings.solver.backend, SolverBackend::Cadical);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }
}
