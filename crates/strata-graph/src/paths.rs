//! Enumeration of every shortest path between two vertices.
//!
//! Paths are grown one distance level at a time from the source's
//! [`FrontierMap`](crate::FrontierMap): a partial path ending at level `w`
//! can only be extended by an adjacent vertex of level `w + 1`, so every
//! partial path is itself a shortest path to its last vertex.

use crate::graph::Graph;
use std::collections::{BTreeSet, HashSet};
use strata_core::{AnalysisError, Path, Result, VertexId};
use tracing::{debug, trace};

impl Graph {
    /// Returns every minimum-length simple path from `source` to `dest`.
    ///
    /// The result is a set, so identical vertex sequences appear once and
    /// iteration is in lexicographic order. For `source == dest` the only
    /// path is the single vertex `[source]`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::UnknownVertex`] if either vertex is absent
    /// - [`AnalysisError::Unreachable`] if no path joins them
    /// - [`AnalysisError::PathLimitExceeded`] if the configured
    ///   `max_paths` bound is crossed
    pub fn all_shortest_paths(&self, source: VertexId, dest: VertexId) -> Result<BTreeSet<Path>> {
        self.require_vertex(source)?;
        self.require_vertex(dest)?;
        let frontiers = self.frontiers_from(source)?;
        let distance = frontiers
            .depth_of(dest)
            .ok_or(AnalysisError::Unreachable {
                from: source,
                to: dest,
            })?;

        if distance == 0 {
            return Ok(BTreeSet::from([vec![source]]));
        }

        let limit = PathLimit {
            from: source,
            to: dest,
            max: self.config().max_paths,
        };

        let mut completed: BTreeSet<Path> = BTreeSet::new();
        let mut candidates: BTreeSet<Path> = frontiers
            .level(1)
            .into_iter()
            .flatten()
            .map(|&v| vec![source, v])
            .collect();
        limit.check(candidates.len())?;
        harvest(&mut candidates, &mut completed, dest);

        for depth in 2..=distance {
            let Some(level) = frontiers.level(depth) else {
                break;
            };
            if candidates.is_empty() {
                break;
            }

            let mut next: BTreeSet<Path> = BTreeSet::new();
            for partial in &candidates {
                let Some(&last) = partial.last() else {
                    continue;
                };
                let on_path: HashSet<VertexId> = partial.iter().copied().collect();

                for q in self.neighbors(last) {
                    if level.contains(&q) && !on_path.contains(&q) {
                        let mut extended = Vec::with_capacity(partial.len() + 1);
                        extended.extend_from_slice(partial);
                        extended.push(q);
                        next.insert(extended);
                    }
                }
            }

            trace!(
                "Depth {} from {} to {}: {} partial paths",
                depth,
                source,
                dest,
                next.len()
            );
            limit.check(next.len())?;

            candidates = next;
            harvest(&mut candidates, &mut completed, dest);
            limit.check(completed.len())?;
        }

        let paths: BTreeSet<Path> = completed
            .into_iter()
            .filter(|path| path.len() == distance + 1 && is_simple(path))
            .collect();

        debug!(
            "{} shortest paths of length {} from {} to {}",
            paths.len(),
            distance,
            source,
            dest
        );

        Ok(paths)
    }
}

/// Moves every candidate ending at `dest` into `completed`.
fn harvest(candidates: &mut BTreeSet<Path>, completed: &mut BTreeSet<Path>, dest: VertexId) {
    candidates.retain(|path| {
        if path.last() == Some(&dest) {
            completed.insert(path.clone());
            false
        } else {
            true
        }
    });
}

fn is_simple(path: &[VertexId]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|v| seen.insert(*v))
}

struct PathLimit {
    from: VertexId,
    to: VertexId,
    max: Option<usize>,
}

impl PathLimit {
    fn check(&self, held: usize) -> Result<()> {
        match self.max {
            Some(limit) if held > limit => Err(AnalysisError::PathLimitExceeded {
                from: self.from,
                to: self.to,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    /// 3x3 grid, vertex `r * 3 + c`.
    fn grid() -> Graph {
        let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
        for r in 0..3 {
            for c in 0..3 {
                let v = r * 3 + c;
                if c < 2 {
                    edges.push((v, v + 1));
                }
                if r < 2 {
                    edges.push((v, v + 3));
                }
            }
        }
        Graph::new(0..9, edges).unwrap()
    }

    /// Every simple path from `source` to `dest` with exactly `edges` edges,
    /// by exhaustive depth-first search.
    fn brute_force(graph: &Graph, source: VertexId, dest: VertexId, edges: usize) -> BTreeSet<Path> {
        fn walk(
            graph: &Graph,
            path: &mut Path,
            dest: VertexId,
            edges: usize,
            out: &mut BTreeSet<Path>,
        ) {
            let last = *path.last().unwrap();
            if path.len() == edges + 1 {
                if last == dest {
                    out.insert(path.clone());
                }
                return;
            }
            let neighbors: Vec<VertexId> = graph.neighbors(last).collect();
            for next in neighbors {
                if !path.contains(&next) {
                    path.push(next);
                    walk(graph, path, dest, edges, out);
                    path.pop();
                }
            }
        }

        let mut out = BTreeSet::new();
        walk(graph, &mut vec![source], dest, edges, &mut out);
        out
    }

    #[test]
    fn test_sample_one_to_four() {
        let graph = Graph::sample();
        let distance = graph.min_distance(1, 4).unwrap();
        let paths = graph.all_shortest_paths(1, 4).unwrap();

        assert_eq!(distance, 2);
        assert!(paths.contains(&vec![1, 5, 4]));
        // [1, 2, 3, 4] takes three edges, so it is not a shortest path.
        assert!(!paths.contains(&vec![1, 2, 3, 4]));
        assert!(paths.iter().all(|p| p.len() == distance + 1));
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_sample_parallel_paths() {
        let graph = Graph::sample();

        let paths = graph.all_shortest_paths(1, 6).unwrap();
        let expected = BTreeSet::from([vec![1, 2, 3, 6], vec![1, 5, 4, 6]]);
        assert_eq!(paths, expected);

        let paths = graph.all_shortest_paths(2, 4).unwrap();
        let expected = BTreeSet::from([vec![2, 3, 4], vec![2, 5, 4]]);
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_adjacent_pair() {
        let graph = Graph::sample();
        let paths = graph.all_shortest_paths(4, 6).unwrap();
        assert_eq!(paths, BTreeSet::from([vec![4, 6]]));
    }

    #[test]
    fn test_source_equals_dest() {
        let graph = Graph::sample();
        let paths = graph.all_shortest_paths(3, 3).unwrap();
        assert_eq!(paths, BTreeSet::from([vec![3]]));
    }

    #[test]
    fn test_every_pair_well_formed() {
        let graph = Graph::sample();
        for &x in graph.vertices() {
            for &y in graph.vertices() {
                let distance = graph.min_distance(x, y).unwrap();
                let paths = graph.all_shortest_paths(x, y).unwrap();
                assert!(!paths.is_empty(), "no paths from {} to {}", x, y);

                for path in &paths {
                    assert_eq!(path.first(), Some(&x));
                    assert_eq!(path.last(), Some(&y));
                    assert_eq!(path.len(), distance + 1);
                    assert!(is_simple(path), "repeated vertex in {:?}", path);
                    assert!(path.windows(2).all(|w| graph.has_edge(w[0], w[1])));
                }
            }
        }
    }

    #[test]
    fn test_matches_exhaustive_search() {
        for graph in [Graph::sample(), grid()] {
            for &x in graph.vertices() {
                for &y in graph.vertices() {
                    let distance = graph.min_distance(x, y).unwrap();
                    assert_eq!(
                        graph.all_shortest_paths(x, y).unwrap(),
                        brute_force(&graph, x, y, distance),
                        "mismatch from {} to {}",
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_corner_to_corner() {
        // Four moves, two of each direction: C(4, 2) = 6 paths.
        let paths = grid().all_shortest_paths(0, 8).unwrap();
        assert_eq!(paths.len(), 6);
        assert!(paths.contains(&vec![0, 1, 2, 5, 8]));
        assert!(paths.contains(&vec![0, 3, 4, 5, 8]));
    }

    #[test]
    fn test_unreachable_pair() {
        let graph = Graph::new([1, 2, 3, 4], [(1, 2), (3, 4)]).unwrap();
        assert_eq!(
            graph.all_shortest_paths(1, 4),
            Err(AnalysisError::Unreachable { from: 1, to: 4 })
        );
    }

    #[test]
    fn test_unknown_vertex() {
        let graph = Graph::sample();
        assert_eq!(
            graph.all_shortest_paths(0, 1),
            Err(AnalysisError::UnknownVertex(0))
        );
        assert_eq!(
            graph.all_shortest_paths(1, 0),
            Err(AnalysisError::UnknownVertex(0))
        );
        assert_eq!(
            graph.all_shortest_paths(-1, 0),
            Err(AnalysisError::UnknownVertex(-1))
        );
    }

    #[test]
    fn test_path_limit() {
        let graph = grid().with_config(AnalyzerConfig::default().with_max_paths(3));
        assert_eq!(
            graph.all_shortest_paths(0, 8),
            Err(AnalysisError::PathLimitExceeded {
                from: 0,
                to: 8,
                limit: 3
            })
        );
        // Pairs under the bound are unaffected.
        assert_eq!(graph.all_shortest_paths(0, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let graph = grid();
        assert_eq!(
            graph.all_shortest_paths(0, 8).unwrap(),
            graph.all_shortest_paths(0, 8).unwrap()
        );
    }
}
