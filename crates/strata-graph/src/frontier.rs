//! Breadth-first distance levels.
//!
//! A [`FrontierMap`] records, for one source vertex, which vertices are
//! first reached at each distance. Level `i` holds exactly the vertices
//! whose minimum distance from the source is `i`.

use crate::graph::Graph;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use strata_core::{AnalysisError, Result, VertexId};
use tracing::{debug, trace};

/// Vertices grouped by their distance from a fixed source.
///
/// Index `i` of [`levels`](Self::levels) is distance level `i`. Level 0 is
/// always `{source}`. Only non-empty levels are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierMap {
    source: VertexId,
    levels: Vec<BTreeSet<VertexId>>,
}

impl FrontierMap {
    /// The vertex the levels are measured from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// All levels, nearest first.
    pub fn levels(&self) -> &[BTreeSet<VertexId>] {
        &self.levels
    }

    /// The vertices at distance `depth`, if any were reached.
    pub fn level(&self, depth: usize) -> Option<&BTreeSet<VertexId>> {
        self.levels.get(depth)
    }

    /// The distance of `v` from the source, or `None` if unreachable.
    pub fn depth_of(&self, v: VertexId) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&v))
    }

    /// Number of stored levels (the eccentricity of the source plus one).
    pub fn depth_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of vertices reachable from the source, itself included.
    pub fn reached(&self) -> usize {
        self.levels.iter().map(BTreeSet::len).sum()
    }
}

impl Graph {
    /// Computes the distance levels reachable from `source`.
    ///
    /// Level `i` holds every vertex adjacent to some vertex of level `i - 1`
    /// that did not appear in an earlier level. No path in a graph of `n`
    /// vertices is longer than `n - 1` edges, so expansion never goes past
    /// that level; it also stops at the first empty level.
    pub fn frontiers_from(&self, source: VertexId) -> Result<FrontierMap> {
        self.require_vertex(source)?;

        let max_depth = self.vertex_count().saturating_sub(1);
        let mut visited: HashSet<VertexId> = HashSet::from([source]);
        let mut levels = vec![BTreeSet::from([source])];

        while levels.len() <= max_depth {
            let previous = &levels[levels.len() - 1];
            let next: BTreeSet<VertexId> = previous
                .iter()
                .flat_map(|&v| self.neighbors(v))
                .filter(|h| !visited.contains(h))
                .collect();

            if next.is_empty() {
                break;
            }

            trace!("Level {} from {}: {:?}", levels.len(), source, next);
            visited.extend(next.iter().copied());
            levels.push(next);
        }

        debug!(
            "Frontiers from {}: {} levels, {} of {} vertices reached",
            source,
            levels.len(),
            visited.len(),
            self.vertex_count()
        );

        Ok(FrontierMap { source, levels })
    }

    /// Minimum number of edges between `source` and `dest`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::UnknownVertex`] if either vertex is absent, and
    /// [`AnalysisError::Unreachable`] if no path joins them.
    pub fn min_distance(&self, source: VertexId, dest: VertexId) -> Result<usize> {
        self.require_vertex(source)?;
        self.require_vertex(dest)?;
        self.frontiers_from(source)?
            .depth_of(dest)
            .ok_or(AnalysisError::Unreachable {
                from: source,
                to: dest,
            })
    }
}
