//! Core graph data structure.
//!
//! The Graph wraps a petgraph `UnGraphMap` keyed directly by vertex id and
//! keeps the caller's vertex order alongside it, since centrality sums are
//! accumulated in that order. It is validated once and never mutated.

use crate::config::AnalyzerConfig;
use petgraph::graphmap::UnGraphMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use strata_core::{AnalysisError, Edge, Result, ValidationError, VertexId};
use tracing::debug;

/// Vertices of the demonstration graph.
pub const SAMPLE_VERTICES: [VertexId; 6] = [1, 2, 3, 4, 5, 6];

/// Edges of the demonstration graph.
pub const SAMPLE_EDGES: [(VertexId, VertexId); 8] = [
    (1, 2),
    (1, 5),
    (2, 3),
    (2, 5),
    (3, 4),
    (4, 5),
    (4, 6),
    (3, 6),
];

/// An immutable, validated, undirected and unweighted graph.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Adjacency, keyed by vertex id.
    adjacency: UnGraphMap<VertexId, ()>,

    /// Vertices in construction order.
    vertices: Vec<VertexId>,

    /// Canonical edges in construction order.
    edges: Vec<Edge>,

    config: AnalyzerConfig,
}

impl Graph {
    /// Builds a graph from a vertex list and an edge list.
    ///
    /// Edges are canonicalized before validation, so `(2, 1)` and `(1, 2)`
    /// name the same edge.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidGraph`] if a vertex repeats, an edge
    /// is a self-loop, an edge endpoint is not a vertex, or two edges are
    /// the same after canonicalization.
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = VertexId>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();

        validate(&vertices, &edges)?;

        let graph = Self::from_parts(vertices, edges);
        debug!(
            "Built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// The fixed six-vertex, eight-edge demonstration graph.
    pub fn sample() -> Self {
        Self::from_parts(
            SAMPLE_VERTICES.to_vec(),
            SAMPLE_EDGES.iter().map(|&pair| Edge::from(pair)).collect(),
        )
    }

    fn from_parts(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        let mut adjacency = UnGraphMap::with_capacity(vertices.len(), edges.len());
        for &v in &vertices {
            adjacency.add_node(v);
        }
        for edge in &edges {
            let (u, v) = edge.endpoints();
            adjacency.add_edge(u, v, ());
        }

        Self {
            adjacency,
            vertices,
            edges,
            config: AnalyzerConfig::default(),
        }
    }

    /// Replaces the analyzer configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// The analyzer configuration in effect.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Vertices in construction order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Canonical edges in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if `u` and `v` are joined by an edge, in either order.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency.contains_edge(u, v)
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_node(v)
    }

    /// Vertices adjacent to `v`. Empty for unknown vertices.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.neighbors(v)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Fails with [`AnalysisError::UnknownVertex`] unless `v` is in the graph.
    pub(crate) fn require_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(AnalysisError::UnknownVertex(v))
        }
    }
}

fn validate(vertices: &[VertexId], edges: &[Edge]) -> std::result::Result<(), ValidationError> {
    let duplicates = repeated(vertices);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateVertices { duplicates });
    }

    if let Some(edge) = edges.iter().find(|edge| edge.is_loop()) {
        return Err(ValidationError::SelfLoop {
            edge: *edge,
            vertex: edge.endpoints().0,
        });
    }

    let known: HashSet<VertexId> = vertices.iter().copied().collect();
    for edge in edges {
        let (u, v) = edge.endpoints();
        let missing: Vec<VertexId> = [u, v]
            .into_iter()
            .filter(|endpoint| !known.contains(endpoint))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::DanglingEndpoint {
                edge: *edge,
                missing,
            });
        }
    }

    let duplicates = repeated(edges);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateEdges { duplicates });
    }

    Ok(())
}

/// Items occurring more than once, each reported once, in first-seen order.
fn repeated<T: Copy + Eq + std::hash::Hash>(items: &[T]) -> Vec<T> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for item in items {
        *counts.entry(*item).or_default() += 1;
    }

    let mut reported = HashSet::new();
    items
        .iter()
        .copied()
        .filter(|item| counts[item] > 1 && reported.insert(*item))
        .collect()
}

/// Graph statistics for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
}

impl Graph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passes_validation() {
        let graph = Graph::new(SAMPLE_VERTICES, SAMPLE_EDGES).unwrap();
        let sample = Graph::sample();
        assert_eq!(graph.vertices(), sample.vertices());
        assert_eq!(graph.edges(), sample.edges());
        assert_eq!(sample.stats(), GraphStats { vertex_count: 6, edge_count: 8 });
    }

    #[test]
    fn test_edge_order_is_irrelevant() {
        let forward = Graph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        let backward = Graph::new([1, 2, 3], [(2, 1), (3, 2)]).unwrap();

        assert_eq!(forward.edges(), backward.edges());
        assert!(backward.has_edge(1, 2));
        assert!(backward.has_edge(2, 1));
        assert!(!backward.has_edge(1, 3));
    }

    #[test]
    fn test_rejects_duplicate_vertices() {
        let err = Graph::new([1, 2, 2, 3, 3], Vec::<(i64, i64)>::new()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidGraph(ValidationError::DuplicateVertices {
                duplicates: vec![2, 3]
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_edges_after_canonicalization() {
        let err = Graph::new([1, 2, 3], [(1, 2), (2, 3), (2, 1)]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidGraph(ValidationError::DuplicateEdges {
                duplicates: vec![Edge::new(1, 2)]
            })
        );
    }

    #[test]
    fn test_rejects_dangling_endpoint() {
        let err = Graph::new([1, 2], [(1, 2), (2, 9)]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidGraph(ValidationError::DanglingEndpoint {
                edge: Edge::new(2, 9),
                missing: vec![9]
            })
        );
    }

    #[test]
    fn test_rejects_self_loop() {
        let err = Graph::new([1, 2], [(2, 2)]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidGraph(ValidationError::SelfLoop { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_neighbors_and_membership() {
        let graph = Graph::sample();
        let mut neighbors: Vec<VertexId> = graph.neighbors(4).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![3, 5, 6]);

        assert!(graph.contains_vertex(6));
        assert!(!graph.contains_vertex(7));
        assert_eq!(graph.neighbors(7).count(), 0);
        assert_eq!(graph.require_vertex(7), Err(AnalysisError::UnknownVertex(7)));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(Vec::new(), Vec::<Edge>::new()).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
