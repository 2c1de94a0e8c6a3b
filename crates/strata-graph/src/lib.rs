//! Strata Graph - Shortest paths and betweenness centrality
//!
//! This crate analyzes small undirected, unweighted graphs. Every query is
//! recomputed from the immutable graph, so results never depend on what
//! was asked before.
//!
//! # Architecture
//!
//! Each stage calls the one before it:
//! - [`Graph`]: validated vertex and edge sets with adjacency queries
//! - [`FrontierMap`]: breadth-first distance levels from one source
//! - [`Graph::all_shortest_paths`]: level-by-level path enumeration
//! - [`Graph::betweenness_centrality`]: per-pair path fractions, summed
//!
//! # Example
//!
//! ```
//! use strata_graph::Graph;
//!
//! let graph = Graph::new([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)])?;
//!
//! assert_eq!(graph.min_distance(1, 3)?, 2);
//! assert_eq!(graph.all_shortest_paths(1, 3)?.len(), 2);
//! assert_eq!(graph.betweenness_centrality(2)?, 0.5);
//! # Ok::<(), strata_core::AnalysisError>(())
//! ```

mod builder;
mod centrality;
mod config;
mod frontier;
mod graph;
mod paths;

pub use builder::GraphBuilder;
pub use centrality::{CentralityReport, VertexScore};
pub use config::{AnalyzerConfig, ConfigError, DEFAULT_TOLERANCE};
pub use frontier::FrontierMap;
pub use graph::{Graph, GraphStats, SAMPLE_EDGES, SAMPLE_VERTICES};
pub use strata_core::{AnalysisError, Edge, Path, Result, ValidationError, VertexId};
