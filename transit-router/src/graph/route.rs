//! Route reconstruction and line labeling.
//!
//! Turns a [`ShortestPathTree`] into a forward itinerary and picks a line to
//! show for each hop. Labeling runs after the path is fixed and never feeds
//! back into path selection: it only decides how the chosen path is
//! explained, preferring to stay on the previous hop's line so that a
//! transfer is shown only where the lines really diverge.

use serde::Serialize;

use crate::containers::LinkedList;

use super::adjacency::Graph;
use super::dijkstra::ShortestPathTree;
use super::error::RoutingError;
use super::types::{LineNo, StopId, VertexIndex};

/// One leg between two consecutive stops of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    /// Stop the hop starts at.
    pub from: StopId,

    /// Stop the hop ends at.
    pub to: StopId,

    /// Distance covered by this hop.
    pub weight: u64,

    /// Line shown for this hop, `None` if no line serves it or any hop near it.
    pub line: Option<LineNo>,

    /// Whether the shown line changes at `from`.
    pub transfer: bool,
}

/// Line chosen for a hop and whether it differs from the previous hop's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopLabel {
    pub line: Option<LineNo>,
    pub transfer: bool,
}

/// A shortest path from source to destination, annotated with lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// First stop.
    pub source: StopId,

    /// Last stop.
    pub destination: StopId,

    /// Hops in travel order. Empty when source and destination coincide.
    pub hops: Vec<Hop>,

    /// Sum of hop weights, equal to the shortest distance.
    pub total_distance: u64,
}

impl Itinerary {
    /// Every stop visited, source first.
    pub fn stops(&self) -> Vec<StopId> {
        let mut stops = Vec::with_capacity(self.hops.len() + 1);
        stops.push(self.source);
        stops.extend(self.hops.iter().map(|hop| hop.to));
        stops
    }

    /// Number of hops marked as a transfer.
    pub fn transfer_count(&self) -> usize {
        self.hops.iter().filter(|hop| hop.transfer).count()
    }

    /// Line shown on arrival at the destination (that of the final hop).
    pub fn arrival_line(&self) -> Option<LineNo> {
        self.hops.last().and_then(|hop| hop.line)
    }
}

/// Walk parent pointers from `destination` back to the source.
///
/// Returns the vertices in travel order, source first. Fails with
/// [`RoutingError::NoPath`] if the destination was not reached.
pub fn trace_path(
    tree: &ShortestPathTree,
    destination: VertexIndex,
) -> Result<Vec<VertexIndex>, RoutingError> {
    let vertex_count = tree.vertex_count();
    if destination.0 >= vertex_count {
        return Err(RoutingError::DestinationOutOfRange {
            vertex: destination,
            vertex_count,
        });
    }

    let no_path = RoutingError::NoPath {
        from: tree.source(),
        to: destination,
    };
    if !tree.is_reachable(destination) {
        return Err(no_path);
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(parent) = tree.parent(current) {
        // A parent chain longer than the vertex count would mean a cycle.
        if path.len() >= vertex_count {
            return Err(no_path);
        }
        path.push(parent);
        current = parent;
    }

    if current != tree.source() {
        return Err(no_path);
    }

    path.reverse();
    Ok(path)
}

/// Choose a line for every hop of `path`.
///
/// For the hop `u→v`:
/// 1. if the previous hop's line also runs on `u→v`, keep it;
/// 2. otherwise take the first line listed on `u→v` that also runs on the
///    following hop, or simply the first line listed on `u→v`;
/// 3. if `u→v` has no line, carry the previous hop's line forward;
/// 4. failing that, borrow the first line of the next hop further along the
///    path that has one;
/// 5. failing that, the hop has no line.
///
/// A hop is a transfer when its line differs from the previous hop's and the
/// previous hop had a line.
pub fn label_lines(graph: &Graph, path: &[VertexIndex]) -> Vec<HopLabel> {
    let mut labels = Vec::with_capacity(path.len().saturating_sub(1));
    let mut previous: Option<LineNo> = None;

    for (i, pair) in path.windows(2).enumerate() {
        let line = match graph.edge(pair[0], pair[1]).map(|edge| &edge.lines) {
            Some(lines) if !lines.is_empty() => previous
                .filter(|line| lines.contains(line))
                .or_else(|| continuing_line(graph, lines, &path[i + 1..]))
                .or_else(|| lines.head().copied()),
            _ => previous.or_else(|| first_line_ahead(graph, &path[i + 1..])),
        };

        let transfer = previous.is_some() && line != previous;
        labels.push(HopLabel { line, transfer });
        previous = line;
    }

    labels
}

/// First of `lines` that also runs on the first hop of `rest`.
fn continuing_line(
    graph: &Graph,
    lines: &LinkedList<LineNo>,
    rest: &[VertexIndex],
) -> Option<LineNo> {
    let next = match rest {
        [from, to, ..] => graph.edge(*from, *to)?,
        _ => return None,
    };
    lines.find(|line| next.lines.contains(line)).copied()
}

/// First line of the first hop along `path` that has any.
fn first_line_ahead(graph: &Graph, path: &[VertexIndex]) -> Option<LineNo> {
    path.windows(2).find_map(|pair| {
        graph
            .edge(pair[0], pair[1])
            .and_then(|edge| edge.lines.head().copied())
    })
}

/// Build the labeled itinerary to `destination` from a completed search.
pub fn reconstruct(
    graph: &Graph,
    tree: &ShortestPathTree,
    destination: VertexIndex,
) -> Result<Itinerary, RoutingError> {
    let path = trace_path(tree, destination)?;
    let labels = label_lines(graph, &path);

    let hops: Vec<Hop> = path
        .windows(2)
        .zip(labels)
        .map(|(pair, label)| {
            let start = tree.distance(pair[0]).value().unwrap_or_default();
            let end = tree.distance(pair[1]).value().unwrap_or_default();
            Hop {
                from: pair[0].to_stop(),
                to: pair[1].to_stop(),
                weight: end.saturating_sub(start),
                line: label.line,
                transfer: label.transfer,
            }
        })
        .collect();

    Ok(Itinerary {
        source: tree.source().to_stop(),
        destination: destination.to_stop(),
        hops,
        total_distance: tree.distance(destination).value().unwrap_or_default(),
    })
}
