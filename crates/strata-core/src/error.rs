//! Error types for graph construction and analysis.

use crate::{Edge, VertexId};
use thiserror::Error;

/// Result alias used across Strata.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Why a vertex/edge list could not form a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("vertices contain duplicates: {}", join(.duplicates))]
    DuplicateVertices { duplicates: Vec<VertexId> },

    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop { edge: Edge, vertex: VertexId },

    #[error("edge {edge} has endpoints outside the vertex set: {}", join(.missing))]
    DanglingEndpoint { edge: Edge, missing: Vec<VertexId> },

    #[error("edges contain duplicates: {}", join(.duplicates))]
    DuplicateEdges { duplicates: Vec<Edge> },
}

/// Errors raised by graph queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] ValidationError),

    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable { from: VertexId, to: VertexId },

    #[error("{operation} needs at least {required} vertices, graph has {vertex_count}")]
    PreconditionViolation {
        operation: &'static str,
        vertex_count: usize,
        required: usize,
    },

    #[error("more than {limit} shortest-path candidates between {from} and {to}")]
    PathLimitExceeded {
        from: VertexId,
        to: VertexId,
        limit: usize,
    },
}

impl AnalysisError {
    /// True if the queried pair has no connecting path.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
