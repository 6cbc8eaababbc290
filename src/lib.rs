//! Mol Paths - shortest paths over molecular connection tables
//!
//! This library computes shortest path distances from a fixed source atom in an
//! undirected, unweighted graph (a molecule's connection table) and answers
//! derived queries: a single canonical shortest path, lazy enumeration of every
//! distinct shortest path, and the set of atoms lying on any shortest path to a
//! group of frontier atoms.
//!
//! Molecules are tiny, so distances are labeled with a simple quadratic
//! relaxation sweep by default. A layered breadth-first labeling is available
//! and produces identical tables.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod index;

pub use algorithm::{layered::LayeredBfs, relaxation::Relaxation, DistanceLabeling};
pub use data_structures::{DistanceTable, VertexSet};
/// Re-export main types for convenient use
pub use graph::{ConnectionTable, Graph, MutableGraph};
pub use index::{ShortestPathIndex, ShortestPaths};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("No path found between source vertex {from} and {to}")]
    NoPath { from: usize, to: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
