//! Graph representation and file formats

pub mod adjacency;
pub mod io;

pub use adjacency::{Graph, MAX_VERTICES};
pub use io::{
    create_example_graphs, example_graphs, load_graph_from_file, parse_adjacency_matrix,
    parse_dimacs_graph, save_graph_to_file,
};
