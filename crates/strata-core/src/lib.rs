//! Strata Core - Shared types for the graph analyzer
//!
//! This crate holds the small vocabulary every other Strata crate speaks:
//! vertex identifiers, canonical undirected edges, paths, and the error
//! taxonomy.
//!
//! # Example
//!
//! ```
//! use strata_core::Edge;
//!
//! // Edges are canonicalized, so endpoint order never matters.
//! assert_eq!(Edge::new(5, 1), Edge::new(1, 5));
//! assert_eq!(Edge::new(5, 1).endpoints(), (1, 5));
//! ```

mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{AnalysisError, Result, ValidationError};

/// Integer identifier of a vertex, unique within a graph.
pub type VertexId = i64;

/// An ordered sequence of vertices from a source to a destination.
pub type Path = Vec<VertexId>;
