//! Graph engine error types.
//!
//! Everything here is a recoverable precondition failure: the engine never
//! aborts on bad input, it hands one of these back to the query layer.

use super::types::VertexIndex;

/// Errors from [`IndexedMinHeap`](super::IndexedMinHeap) insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// Vertex is not below the heap's vertex capacity
    #[error("vertex {vertex} out of range for heap of {capacity} vertices")]
    VertexOutOfRange {
        vertex: VertexIndex,
        capacity: usize,
    },

    /// Vertex already has an entry
    #[error("vertex {0} is already in the heap")]
    DuplicateVertex(VertexIndex),
}

/// Errors from shortest-path computation and route reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// Source vertex is outside the graph
    #[error("source vertex {vertex} out of range for graph of {vertex_count} vertices")]
    SourceOutOfRange {
        vertex: VertexIndex,
        vertex_count: usize,
    },

    /// Destination vertex is outside the graph
    #[error("destination vertex {vertex} out of range for graph of {vertex_count} vertices")]
    DestinationOutOfRange {
        vertex: VertexIndex,
        vertex_count: usize,
    },

    /// Destination cannot be reached from the source
    #[error("no path found from {from} to {to}")]
    NoPath { from: VertexIndex, to: VertexIndex },

    /// Heap rejected an entry while seeding the search
    #[error("priority queue error: {0}")]
    Heap(#[from] HeapError),
}
