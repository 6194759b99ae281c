//! Shortest-path engine for the transit network.
//!
//! The network is a weighted undirected graph whose vertices are stops and
//! whose edges carry the lines that run over them. Queries run Dijkstra's
//! algorithm over an indexed min-heap, then reconstruct the path and label
//! each hop with a line, marking where the displayed line changes.

mod adjacency;
mod dijkstra;
mod error;
mod heap;
mod route;
mod types;

pub use adjacency::{Edge, Graph, GraphBuilder};
pub use dijkstra::ShortestPathTree;
pub use error::{HeapError, RoutingError};
pub use heap::{HeapEntry, IndexedMinHeap};
pub use route::{Hop, HopLabel, Itinerary, label_lines, reconstruct, trace_path};
pub use types::{Distance, LineNo, StopId, VertexIndex, Weight};
