//! Command line front end for the graph SAT solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use graph_sat_reductions::{
    config::{CliOverrides, ProblemKind, Settings, SolverBackend},
    graph::{create_example_graphs, load_graph_from_file},
    reduction::{GraphProblem, ValidationResult},
    utils::{ColorOutput, SolutionFormatter},
};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "graph_sat_reductions")]
#[command(about = "Clique, independent set and vertex cover through SAT")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a graph for a clique, independent set or vertex cover
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Problem kind (overrides config)
        #[arg(short, long, value_enum)]
        problem: Option<ProblemKind>,

        /// Target size (overrides config)
        #[arg(short)]
        k: Option<usize>,

        /// Graph file (overrides config)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// SAT backend (overrides config)
        #[arg(short, long, value_enum)]
        backend: Option<SolverBackend>,

        /// Maximum solutions to find (overrides config)
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write solutions as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and graph files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a vertex set against a graph
    Validate {
        /// Graph file
        #[arg(short, long)]
        graph: PathBuf,

        /// Problem kind the vertex set should satisfy
        #[arg(short, long, value_enum)]
        problem: ProblemKind,

        /// Zero-based vertices, comma separated
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        vertices: Vec<usize>,
    },

    /// Report the size of the formula a query generates
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Graph file (overrides config)
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Problem kind (overrides config)
        #[arg(short, long, value_enum)]
        problem: Option<ProblemKind>,

        /// Target size (overrides config)
        #[arg(short)]
        k: Option<usize>,

        /// Also write the clique formula in DIMACS CNF format
        #[arg(long)]
        dimacs: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    init_logging(verbose);

    match cli.command {
        Commands::Solve {
            config, problem, k, graph, backend, max_solutions, output, json, verbose
        } => {
            let overrides = CliOverrides {
                kind: problem,
                target_size: k,
                backend,
                max_solutions,
                graph_file: graph,
                output_dir: output,
                json,
            };
            solve_command(config, overrides, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate { graph, problem, vertices } => {
            validate_command(graph, problem, vertices)
        }
        Commands::Analyze { config, graph, problem, k, dimacs } => {
            let overrides = CliOverrides {
                kind: problem,
                target_size: k,
                graph_file: graph,
                ..Default::default()
            };
            analyze_command(config, overrides, dimacs)
        }
    }
}

/// Library logs go to stderr; `GRAPH_SAT_LOG` takes env_logger filter syntax
fn init_logging(verbose: bool) {
    let mut builder = Builder::new();
    builder
        .target(Target::Stderr)
        .filter(None, if verbose { LevelFilter::Info } else { LevelFilter::Warn });

    if let Ok(ref env_var) = std::env::var("GRAPH_SAT_LOG") {
        builder.parse_filters(env_var);
    }

    builder.init();
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn solve_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Starting graph SAT solver"));

    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    if verbose {
        println!("Configuration:");
        println!("  Problem: {} of size {}", settings.problem.kind, settings.problem.target_size);
        println!("  Backend: {:?}", settings.solver.backend);
        println!("  Max solutions: {}", settings.solver.max_solutions);
        println!("  Graph file: {}", settings.input.graph_file.display());
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    settings.validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let problem = GraphProblem::new(settings.clone())
        .context("Failed to create graph problem")?;

    if verbose {
        println!("Graph ({} vertices, {} edges):", problem.graph().vertex_count(), problem.graph().edge_count());
        println!("{}", SolutionFormatter::format_graph(problem.graph()));
        let stats = problem.encoding_statistics()?;
        println!("{}", stats.estimate_complexity());
    }

    println!("{}", ColorOutput::info("Generating SAT constraints and solving..."));
    let solutions = problem.solve()
        .context("Failed to solve graph problem")?;

    let total_time = start_time.elapsed();

    if solutions.is_empty() {
        println!("{}", ColorOutput::warning(&format!(
            "No {} of size {} exists",
            settings.problem.kind, settings.problem.target_size
        )));
        return Ok(());
    }

    println!("{}", ColorOutput::success(&format!(
        "Found {} solution(s) in {:.3}s",
        solutions.len(),
        total_time.as_secs_f64()
    )));

    println!("\n{}", SolutionFormatter::format_solution_summary(&solutions));

    if solutions.len() <= 3 {
        for solution in &solutions {
            println!("{}", SolutionFormatter::format_solution(solution, Some(problem.graph())));
        }
    }

    println!("{}", ColorOutput::info("Saving solutions..."));
    SolutionFormatter::save_solutions(&solutions, &settings.output.output_directory, settings.output.format)
        .context("Failed to save solutions")?;

    println!("{}", ColorOutput::success(&format!(
        "Solutions saved to {}",
        settings.output.output_directory.display()
    )));

    if verbose {
        println!("\n{}", problem.encoding_statistics()?);
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/graphs");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_graphs(&input_dir)
        .context("Failed to create example graphs")?;
    println!("Created example graphs in: {}", input_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut independent = Settings::default();
    independent.problem.kind = ProblemKind::IndependentSet;
    independent.problem.target_size = 4;
    independent.input.graph_file = PathBuf::from("input/graphs/bipartite.txt");
    independent.to_file(&examples_dir.join("independent_set.yaml"))?;

    let mut cover = Settings::default();
    cover.problem.kind = ProblemKind::VertexCover;
    cover.problem.target_size = 3;
    cover.solver.backend = SolverBackend::Varisat;
    cover.solver.max_solutions = 10;
    cover.input.graph_file = PathBuf::from("input/graphs/cycle5.txt");
    cover.to_file(&examples_dir.join("vertex_cover.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your graphs to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(graph_path: PathBuf, kind: ProblemKind, vertices: Vec<usize>) -> Result<()> {
    println!("{}", ColorOutput::info("Validating vertex set..."));

    let graph = load_graph_from_file(&graph_path)
        .with_context(|| format!("Failed to load graph from {}", graph_path.display()))?;

    let result = ValidationResult::new(kind, &graph, vertices);
    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success(&format!("Valid {}", kind)));
    } else {
        println!("{}", ColorOutput::error(&format!("Not a valid {}", kind)));
    }

    Ok(())
}

fn analyze_command(config_path: PathBuf, overrides: CliOverrides, dimacs: Option<PathBuf>) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing query..."));

    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    let problem = GraphProblem::new(settings)
        .context("Failed to create problem for analysis")?;
    let graph = problem.graph();

    println!("Graph ({} vertices):", graph.vertex_count());
    println!("{}", SolutionFormatter::format_graph(graph));

    println!("Graph Statistics:");
    println!("  Edges: {}", graph.edge_count());
    println!("  Density: {:.1}%", graph.density() * 100.0);
    println!(
        "  Degrees: min {}, max {}",
        (0..graph.vertex_count()).map(|v| graph.degree(v)).min().unwrap_or(0),
        (0..graph.vertex_count()).map(|v| graph.degree(v)).max().unwrap_or(0)
    );

    let stats = problem.encoding_statistics()?;
    println!("\n{}", stats.estimate_complexity());
    println!("{}", stats);

    if let Some(path) = dimacs {
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        problem.write_dimacs(&mut file)?;
        println!("{}", ColorOutput::success(&format!("Wrote DIMACS formula to {}", path.display())));
    }

    Ok(())
}
