//! Undirected edges.
//!
//! An edge is stored with its smaller endpoint first, which makes equality,
//! hashing and ordering independent of the order the caller supplied.

use crate::VertexId;

/// An unordered pair of vertices, canonicalized as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    lo: VertexId,
    hi: VertexId,
}

impl Edge {
    /// Creates a canonical edge between `u` and `v`.
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self {
            lo: u.min(v),
            hi: u.max(v),
        }
    }

    /// Returns the endpoints, smaller first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }

    /// True if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.lo == self.hi
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Self::new(u, v)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
