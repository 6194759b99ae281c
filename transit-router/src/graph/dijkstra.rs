//! Single-source shortest paths.
//!
//! Every vertex is seeded into the heap up front, reached or not, so the heap
//! always holds exactly the vertices that are not yet finalized. Weights are
//! non-negative, which ingestion guarantees.

use tracing::{debug, trace};

use crate::containers::DynArray;

use super::adjacency::Graph;
use super::error::RoutingError;
use super::heap::{HeapEntry, IndexedMinHeap};
use super::types::{Distance, VertexIndex};

/// Distances and parent pointers from one source to every vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexIndex,
    distances: DynArray<Distance>,
    parents: DynArray<Option<VertexIndex>>,
}

impl ShortestPathTree {
    /// The vertex the search started from.
    pub fn source(&self) -> VertexIndex {
        self.source
    }

    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance to `vertex`.
    ///
    /// Unreached and out-of-range vertices are at `Distance::INFINITY`.
    pub fn distance(&self, vertex: VertexIndex) -> Distance {
        self.distances
            .get(vertex.0)
            .copied()
            .unwrap_or(Distance::INFINITY)
    }

    /// Predecessor of `vertex` on its shortest path.
    ///
    /// `None` for the source and for unreached vertices.
    pub fn parent(&self, vertex: VertexIndex) -> Option<VertexIndex> {
        self.parents.get(vertex.0).ok().copied().flatten()
    }

    /// Returns true if `vertex` has a finite distance.
    pub fn is_reachable(&self, vertex: VertexIndex) -> bool {
        self.distance(vertex).is_finite()
    }
}

impl Graph {
    /// Dijkstra's algorithm from `source` over the whole graph.
    ///
    /// Fails if `source` is not a vertex of this graph.
    pub fn shortest_paths(&self, source: VertexIndex) -> Result<ShortestPathTree, RoutingError> {
        let vertex_count = self.vertex_count();
        if !self.contains(source) {
            return Err(RoutingError::SourceOutOfRange {
                vertex: source,
                vertex_count,
            });
        }

        let mut distances = DynArray::filled(Distance::INFINITY, vertex_count);
        let mut parents: DynArray<Option<VertexIndex>> = DynArray::filled(None, vertex_count);
        let dist = distances.as_mut_slice();
        let parent = parents.as_mut_slice();
        dist[source.0] = Distance::ZERO;

        let mut heap = IndexedMinHeap::new(vertex_count);
        for (i, d) in dist.iter().enumerate() {
            heap.insert(VertexIndex(i), *d)?;
        }

        let mut settled = 0usize;
        let mut relaxations = 0usize;

        while let Some(HeapEntry { vertex: u, .. }) = heap.extract_min() {
            settled += 1;
            let du = dist[u.0];
            if !du.is_finite() {
                continue;
            }

            for edge in self.adjacency(u) {
                let v = edge.destination;
                let candidate = du.saturating_add(edge.weight);
                if candidate < dist[v.0] {
                    dist[v.0] = candidate;
                    parent[v.0] = Some(u);
                    heap.decrease_key(v, candidate);
                    relaxations += 1;
                    trace!(from = u.0, to = v.0, distance = %candidate, "Relaxed edge");
                }
            }
        }

        debug!(
            source = source.0,
            settled, relaxations, "Shortest paths computed"
        );

        Ok(ShortestPathTree {
            source,
            distances,
            parents,
        })
    }
}
