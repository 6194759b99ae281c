//! Undirected weighted graph with per-edge line annotations.
//!
//! Construction and querying are separate types: [`GraphBuilder`] is the
//! only way to add edges or line annotations, and [`GraphBuilder::build`]
//! yields an immutable [`Graph`] that shortest-path queries borrow.

use tracing::debug;

use crate::containers::{DynArray, LinkedList};

use super::types::{LineNo, VertexIndex, Weight};

/// Adjacency list returned for vertices outside the graph.
static EMPTY_ADJACENCY: LinkedList<Edge> = LinkedList::new();

/// One directed adjacency record.
///
/// Every undirected connection is stored as two of these, one per
/// direction, each with its own copy of the line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Vertex this record points to.
    pub destination: VertexIndex,

    /// Physical distance of the connection.
    pub weight: Weight,

    /// Lines that traverse this connection, in annotation order.
    /// Duplicates are kept. Empty means no known direct service.
    pub lines: LinkedList<LineNo>,
}

impl Edge {
    fn new(destination: VertexIndex, weight: Weight) -> Self {
        Self {
            destination,
            weight,
            lines: LinkedList::new(),
        }
    }
}

/// Mutable construction phase of a [`Graph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    adjacency: DynArray<LinkedList<Edge>>,
}

impl GraphBuilder {
    /// Create a builder for a graph with a fixed number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: DynArray::filled(LinkedList::new(), vertex_count),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add an undirected connection as the two records `u→v` and `v→u`.
    ///
    /// Returns `false` and changes nothing if either vertex is out of range.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex, weight: Weight) -> bool {
        if !self.contains(u) || !self.contains(v) {
            debug!(u = u.0, v = v.0, "Ignoring edge with out-of-range vertex");
            return false;
        }

        if let Ok(list) = self.adjacency.get_mut(u.0) {
            list.push_end(Edge::new(v, weight));
        }
        if let Ok(list) = self.adjacency.get_mut(v.0) {
            list.push_end(Edge::new(u, weight));
        }
        true
    }

    /// Record that `line` runs over the existing connection between `u` and `v`.
    ///
    /// The first `u→v` record and the first `v→u` record each get the line
    /// appended. Returns `false` if either vertex is out of range or the
    /// connection does not exist yet; annotations never create edges.
    pub fn add_line_to_edge(&mut self, u: VertexIndex, v: VertexIndex, line: LineNo) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }

        let forward = self.annotate(u, v, line);
        let backward = self.annotate(v, u, line);
        forward || backward
    }

    /// Finish construction.
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
        }
    }

    fn contains(&self, vertex: VertexIndex) -> bool {
        vertex.0 < self.adjacency.len()
    }

    fn annotate(&mut self, from: VertexIndex, to: VertexIndex, line: LineNo) -> bool {
        let edge = self
            .adjacency
            .get_mut(from.0)
            .ok()
            .and_then(|list| list.find_mut(|edge| edge.destination == to));

        match edge {
            Some(edge) => {
                edge.lines.push_end(line);
                true
            }
            None => false,
        }
    }
}

/// Immutable weighted graph over vertices `0..vertex_count`.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: DynArray<LinkedList<Edge>>,
}

impl Graph {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edge records (twice the undirected connections).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(LinkedList::len).sum()
    }

    /// Returns true if `vertex` is inside the graph.
    pub fn contains(&self, vertex: VertexIndex) -> bool {
        vertex.0 < self.adjacency.len()
    }

    /// Outgoing records of `vertex` in insertion order.
    ///
    /// Out-of-range vertices have an empty adjacency.
    pub fn adjacency(&self, vertex: VertexIndex) -> &LinkedList<Edge> {
        self.adjacency
            .get(vertex.0)
            .unwrap_or(&EMPTY_ADJACENCY)
    }

    /// The first record from `from` to `to`, if they are connected.
    pub fn edge(&self, from: VertexIndex, to: VertexIndex) -> Option<&Edge> {
        self.adjacency(from).find(|edge| edge.destination == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexIndex {
        VertexIndex(i)
    }

    fn lines_of(graph: &Graph, from: usize, to: usize) -> Vec<u32> {
        graph
            .edge(v(from), v(to))
            .map(|e| e.lines.iter().map(|l| l.0).collect())
            .unwrap_or_default()
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut builder = GraphBuilder::new(3);
        assert!(builder.add_edge(v(0), v(2), 12));
        let graph = builder.build();

        assert_eq!(graph.edge(v(0), v(2)).map(|e| e.weight), Some(12));
        assert_eq!(graph.edge(v(2), v(0)).map(|e| e.weight), Some(12));
        assert!(graph.edge(v(0), v(1)).is_none());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn out_of_range_edge_changes_nothing() {
        let mut builder = GraphBuilder::new(2);
        assert!(!builder.add_edge(v(0), v(2), 5));
        assert!(!builder.add_edge(v(7), v(1), 5));
        let graph = builder.build();

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacency(v(0)).is_empty());
        assert!(graph.adjacency(v(1)).is_empty());
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let mut builder = GraphBuilder::new(4);
        builder.add_edge(v(0), v(3), 1);
        builder.add_edge(v(0), v(1), 2);
        builder.add_edge(v(2), v(0), 3);
        let graph = builder.build();

        let dests: Vec<usize> = graph.adjacency(v(0)).iter().map(|e| e.destination.0).collect();
        assert_eq!(dests, vec![3, 1, 2]);
    }

    #[test]
    fn parallel_records_are_not_merged() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(v(0), v(1), 4);
        builder.add_edge(v(0), v(1), 9);
        let graph = builder.build();

        let weights: Vec<u32> = graph.adjacency(v(0)).iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![4, 9]);
        assert_eq!(graph.edge(v(1), v(0)).map(|e| e.weight), Some(4));
    }

    #[test]
    fn out_of_range_adjacency_is_empty() {
        let graph = GraphBuilder::new(1).build();
        assert!(graph.adjacency(v(5)).is_empty());
        assert!(!graph.contains(v(1)));
    }

    #[test]
    fn line_annotation_updates_both_directions() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(v(0), v(1), 5);
        assert!(builder.add_line_to_edge(v(0), v(1), LineNo(10)));
        assert!(builder.add_line_to_edge(v(1), v(0), LineNo(12)));
        assert!(builder.add_line_to_edge(v(0), v(1), LineNo(10)));
        let graph = builder.build();

        assert_eq!(lines_of(&graph, 0, 1), vec![10, 12, 10]);
        assert_eq!(lines_of(&graph, 1, 0), vec![10, 12, 10]);
    }

    #[test]
    fn line_annotation_without_edge_is_ignored() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(v(0), v(1), 5);
        assert!(!builder.add_line_to_edge(v(1), v(2), LineNo(3)));
        assert!(!builder.add_line_to_edge(v(1), v(9), LineNo(3)));
        let graph = builder.build();

        assert!(graph.edge(v(1), v(2)).is_none());
        assert!(lines_of(&graph, 0, 1).is_empty());
    }

    #[test]
    fn line_annotation_hits_first_parallel_record() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(v(0), v(1), 4);
        builder.add_edge(v(0), v(1), 9);
        builder.add_line_to_edge(v(0), v(1), LineNo(1));
        let graph = builder.build();

        let annotated: Vec<usize> = graph
            .adjacency(v(0))
            .iter()
            .map(|e| e.lines.len())
            .collect();
        assert_eq!(annotated, vec![1, 0]);
    }
}
