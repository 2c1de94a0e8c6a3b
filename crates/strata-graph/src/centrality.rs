//! Betweenness centrality by exhaustive shortest-path enumeration.
//!
//! For a vertex `v`, every ordered pair `(x, y)` of other distinct vertices
//! contributes the fraction of its shortest paths that pass through `v`.
//! Each unordered pair is visited twice, so the sum is halved.
//!
//! Pairs with no connecting path contribute nothing.

use crate::graph::{Graph, GraphStats};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;
use strata_core::{AnalysisError, Path, Result, VertexId};
use tracing::{debug, trace};

/// Smallest graph for which standardized centrality is defined.
const STANDARDIZE_MIN_VERTICES: usize = 3;

/// Shortest-path sets for vertex pairs, shared across one centrality pass.
///
/// Keyed by the unordered pair. The reverse of a shortest path is a
/// shortest path of the reversed pair, so both directions have the same
/// path count and the same count through any vertex.
struct PairPaths<'g> {
    graph: &'g Graph,
    memo: Option<HashMap<(VertexId, VertexId), Option<BTreeSet<Path>>>>,
}

impl<'g> PairPaths<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            memo: graph.config().memoize.then(HashMap::new),
        }
    }

    /// Fraction of the shortest `x`–`y` paths that contain `node`.
    fn fraction_through(&mut self, x: VertexId, y: VertexId, node: VertexId) -> Result<f64> {
        if let Some(memo) = self.memo.as_mut() {
            let key = (x.min(y), x.max(y));
            if !memo.contains_key(&key) {
                let paths = shortest_or_none(self.graph, key.0, key.1)?;
                memo.insert(key, paths);
            }
            return Ok(memo
                .get(&key)
                .and_then(Option::as_ref)
                .map_or(0.0, |paths| fraction(paths, node)));
        }

        let paths = shortest_or_none(self.graph, x, y)?;
        Ok(paths.as_ref().map_or(0.0, |paths| fraction(paths, node)))
    }
}

fn shortest_or_none(graph: &Graph, x: VertexId, y: VertexId) -> Result<Option<BTreeSet<Path>>> {
    match graph.all_shortest_paths(x, y) {
        Ok(paths) => Ok(Some(paths)),
        Err(e) if e.is_unreachable() => {
            trace!("No path between {} and {}, skipping pair", x, y);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn fraction(paths: &BTreeSet<Path>, node: VertexId) -> f64 {
    if paths.is_empty() {
        return 0.0;
    }
    let through = paths.iter().filter(|path| path.contains(&node)).count();
    through as f64 / paths.len() as f64
}

impl Graph {
    /// Betweenness centrality of `node`.
    ///
    /// Returns 0 when `node` lies on no shortest path between two other
    /// vertices.
    pub fn betweenness_centrality(&self, node: VertexId) -> Result<f64> {
        self.require_vertex(node)?;
        let mut pairs = PairPaths::new(self);
        self.betweenness_with(&mut pairs, node)
    }

    fn betweenness_with(&self, pairs: &mut PairPaths<'_>, node: VertexId) -> Result<f64> {
        let mut sum = 0.0;
        for &x in self.vertices() {
            for &y in self.vertices() {
                if x != y && x != node && y != node {
                    sum += pairs.fraction_through(x, y, node)?;
                }
            }
        }

        let score = sum / 2.0;
        trace!("Betweenness of {}: {}", node, score);
        Ok(score)
    }

    /// Betweenness of every vertex, in vertex order.
    ///
    /// Equivalent to calling [`betweenness_centrality`](Self::betweenness_centrality)
    /// for each vertex, but shares path enumerations across the pass when
    /// memoization is enabled.
    pub fn betweenness_all(&self) -> Result<Vec<(VertexId, f64)>> {
        let mut pairs = PairPaths::new(self);
        self.vertices()
            .iter()
            .map(|&v| Ok((v, self.betweenness_with(&mut pairs, v)?)))
            .collect()
    }

    /// Betweenness scaled by its maximum for a graph of this size,
    /// `2 / ((n - 1)(n - 2))`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::PreconditionViolation`] for graphs with fewer than
    /// three vertices.
    pub fn standardized_centrality(&self, node: VertexId) -> Result<f64> {
        let n = self.vertex_count();
        if n < STANDARDIZE_MIN_VERTICES {
            return Err(AnalysisError::PreconditionViolation {
                operation: "standardized centrality",
                vertex_count: n,
                required: STANDARDIZE_MIN_VERTICES,
            });
        }

        let raw = self.betweenness_centrality(node)?;
        Ok(standardize(raw, n))
    }

    /// All vertices whose betweenness equals the maximum over the graph.
    ///
    /// Scores within the configured tolerance of the maximum count as tied.
    /// Empty only for a graph with no vertices.
    pub fn top_k_betweenness_centrality(&self) -> Result<BTreeSet<VertexId>> {
        let scores = self.betweenness_all()?;
        Ok(top_vertices(&scores, self.config().tolerance))
    }

    /// Computes every vertex's centrality and summarizes the result.
    pub fn centrality_report(&self) -> Result<CentralityReport> {
        let start = Instant::now();
        let n = self.vertex_count();

        let raw = self.betweenness_all()?;
        let top = top_vertices(&raw, self.config().tolerance);
        let max_betweenness = max_score(&raw).unwrap_or(0.0);

        let scores = raw
            .into_iter()
            .map(|(vertex, betweenness)| VertexScore {
                vertex,
                betweenness,
                standardized: (n >= STANDARDIZE_MIN_VERTICES)
                    .then(|| standardize(betweenness, n)),
            })
            .collect();

        let elapsed = start.elapsed().as_millis() as u64;
        debug!("Centrality report for {} vertices in {}ms", n, elapsed);

        Ok(CentralityReport {
            stats: self.stats(),
            scores,
            top: top.into_iter().collect(),
            max_betweenness,
            query_time_ms: elapsed,
        })
    }
}

fn standardize(raw: f64, n: usize) -> f64 {
    raw * 2.0 / ((n - 1) * (n - 2)) as f64
}

fn max_score(scores: &[(VertexId, f64)]) -> Option<f64> {
    scores.iter().map(|&(_, score)| score).reduce(f64::max)
}

fn top_vertices(scores: &[(VertexId, f64)], tolerance: f64) -> BTreeSet<VertexId> {
    let Some(max) = max_score(scores) else {
        return BTreeSet::new();
    };
    scores
        .iter()
        .filter(|&&(_, score)| (max - score).abs() <= tolerance)
        .map(|&(v, _)| v)
        .collect()
}

/// One vertex's centrality scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexScore {
    pub vertex: VertexId,
    pub betweenness: f64,
    /// `None` for graphs with fewer than three vertices.
    pub standardized: Option<f64>,
}

/// Centrality of every vertex in a graph.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    pub stats: GraphStats,
    /// Scores in vertex order.
    pub scores: Vec<VertexScore>,
    /// Vertices tied at the maximum betweenness, ascending.
    pub top: Vec<VertexId>,
    pub max_betweenness: f64,
    /// Time taken in milliseconds.
    pub query_time_ms: u64,
}

impl CentralityReport {
    /// Scores sorted by betweenness, highest first, then by vertex id.
    pub fn ranked(&self) -> Vec<&VertexScore> {
        let mut ranked: Vec<&VertexScore> = self.scores.iter().collect();
        ranked.sort_by(|a, b| {
            b.betweenness
                .total_cmp(&a.betweenness)
                .then_with(|| a.vertex.cmp(&b.vertex))
        });
        ranked
    }

    /// Returns a summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let top = self
            .top
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Betweenness over {} vertices / {} edges: max {:.4} at {{{}}}",
            self.stats.vertex_count, self.stats.edge_count, self.max_betweenness, top
        )
    }
}
