//! Incremental construction of a [`Graph`].
//!
//! The builder collects vertices and edges in any order and validates them
//! all at once in [`GraphBuilder::build`].

use crate::config::AnalyzerConfig;
use crate::graph::Graph;
use strata_core::{Edge, Result, VertexId};

/// Collects vertices and edges, then builds a validated [`Graph`].
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    config: AnalyzerConfig,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, v: VertexId) -> &mut Self {
        self.vertices.push(v);
        self
    }

    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = VertexId>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Adds an edge. Endpoint order does not matter.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> &mut Self {
        self.edges.push(Edge::new(u, v));
        self
    }

    pub fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> &mut Self
    where
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration the built graph will carry.
    pub fn config(&mut self, config: AnalyzerConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Validates everything added so far and returns the graph.
    pub fn build(&self) -> Result<Graph> {
        let graph = Graph::new(self.vertices.iter().copied(), self.edges.iter().copied())?;
        Ok(graph.with_config(self.config.clone()))
    }
}
