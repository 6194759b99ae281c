//! The transit network context object and its builder.
//!
//! [`NetworkBuilder`] is the only mutable phase: ingestion names stops,
//! registers lines and adds physical connections, then calls
//! [`NetworkBuilder::build`]. The resulting [`TransitNetwork`] is read-only
//! and every query borrows it.

use tracing::{debug, info};

use crate::cache::{CacheConfig, PathTreeCache};
use crate::graph::{
    Graph, GraphBuilder, Itinerary, LineNo, RoutingError, StopId, VertexIndex, Weight,
    reconstruct,
};
use crate::stops::{StopCatalogue, StopLineIndex};

use super::error::QueryError;
use super::line::{Line, LineStop};
use super::passenger::{PassengerRecord, find_passenger};

/// Mutable construction phase of a [`TransitNetwork`].
#[derive(Debug)]
pub struct NetworkBuilder {
    stops: StopCatalogue,
    lines: Vec<Line>,
    graph: GraphBuilder,
    stop_lines: StopLineIndex,
    cache: CacheConfig,
}

impl NetworkBuilder {
    /// Start a network over the given stops.
    ///
    /// The highest stop id fixes the vertex count.
    pub fn new(stops: StopCatalogue) -> Self {
        let graph = GraphBuilder::new(stops.max_id());
        Self {
            stops,
            lines: Vec::new(),
            graph,
            stop_lines: StopLineIndex::new(),
            cache: CacheConfig::default(),
        }
    }

    /// Set the shortest-path cache configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Number of vertices the graph will have.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Register a line and the names of the stops it visits, in order.
    ///
    /// Each name is matched against the stop catalogue. Matched stops are
    /// indexed under this line; unmatched names are kept for display only.
    pub fn add_line<I, S>(&mut self, number: LineNo, name: impl Into<String>, stop_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stops: Vec<LineStop> = stop_names
            .into_iter()
            .map(Into::into)
            .map(|stop_name: String| {
                let id = self.stops.find_by_name(&stop_name);
                if let Some(id) = id {
                    self.stop_lines.insert(id, number);
                } else {
                    debug!(line = number.0, stop = %stop_name, "Line stop not in stop list");
                }
                LineStop {
                    name: stop_name,
                    id,
                }
            })
            .collect();

        self.lines.push(Line {
            number,
            name: name.into(),
            stops,
        });
    }

    /// Add a physical connection between two vertices.
    ///
    /// Returns `false` if either vertex is outside the network.
    pub fn add_connection(&mut self, u: VertexIndex, v: VertexIndex, weight: Weight) -> bool {
        self.graph.add_edge(u, v, weight)
    }

    /// Annotate connections with the lines that run over them and freeze
    /// the network.
    ///
    /// For every line, each pair of consecutive matched stops marks the
    /// connection between them (if one exists) as served by that line.
    pub fn build(mut self) -> TransitNetwork {
        let mut annotated = 0usize;
        for line in &self.lines {
            let route: Vec<StopId> = line.route().collect();
            for pair in route.windows(2) {
                let (Some(u), Some(v)) = (pair[0].to_vertex(), pair[1].to_vertex()) else {
                    continue;
                };
                if self.graph.add_line_to_edge(u, v, line.number) {
                    annotated += 1;
                } else {
                    debug!(
                        line = line.number.0,
                        from = pair[0].0,
                        to = pair[1].0,
                        "Consecutive line stops have no connection"
                    );
                }
            }
        }

        let graph = self.graph.build();
        info!(
            stops = self.stops.len(),
            lines = self.lines.len(),
            edges = graph.edge_count() / 2,
            annotated,
            "Transit network built"
        );

        TransitNetwork {
            stops: self.stops,
            lines: self.lines,
            graph,
            stop_lines: self.stop_lines,
            cache: PathTreeCache::new(&self.cache),
        }
    }
}

/// Read-only transit network: stops, lines, the weighted graph and the
/// stop → lines index.
#[derive(Debug)]
pub struct TransitNetwork {
    stops: StopCatalogue,
    lines: Vec<Line>,
    graph: Graph,
    stop_lines: StopLineIndex,
    cache: PathTreeCache,
}

impl TransitNetwork {
    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The stop catalogue.
    pub fn stops(&self) -> &StopCatalogue {
        &self.stops
    }

    /// The stop → lines index.
    pub fn stop_lines(&self) -> &StopLineIndex {
        &self.stop_lines
    }

    /// All lines, in load order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Name of a stop, if known.
    pub fn stop_name(&self, stop: StopId) -> Option<&str> {
        self.stops.name(stop)
    }

    /// Look up a line by number.
    pub fn line(&self, number: LineNo) -> Result<&Line, QueryError> {
        if number.0 == 0 {
            return Err(QueryError::InvalidLine(number));
        }
        self.lines
            .iter()
            .find(|line| line.number == number)
            .ok_or(QueryError::UnknownLine(number))
    }

    /// Lines that visit a stop, in the order they were loaded.
    pub fn lines_at_stop(&self, stop: StopId) -> Result<Vec<LineNo>, QueryError> {
        self.validate_stop(stop)?;
        self.stop_lines
            .search(stop)
            .map(|lines| lines.iter().copied().collect())
            .ok_or(QueryError::StopNotFound(stop))
    }

    /// Shortest itinerary between two stops, labeled with lines.
    pub fn plan(&self, from: StopId, to: StopId) -> Result<Itinerary, QueryError> {
        let source = self.validate_stop(from)?;
        let destination = self.validate_stop(to)?;

        let tree = self.cache.get_or_compute(&self.graph, source)?;
        let itinerary = reconstruct(&self.graph, &tree, destination).map_err(|e| match e {
            RoutingError::NoPath { .. } => QueryError::NoPath { from, to },
            other => QueryError::Routing(other),
        })?;

        debug!(
            from = from.0,
            to = to.0,
            distance = itinerary.total_distance,
            hops = itinerary.hops.len(),
            transfers = itinerary.transfer_count(),
            "Planned itinerary"
        );
        Ok(itinerary)
    }

    /// Plan the trip of the passenger with the given id.
    pub fn plan_for_passenger<'a>(
        &self,
        records: &'a [PassengerRecord],
        passenger_id: u32,
    ) -> Result<(&'a PassengerRecord, Itinerary), QueryError> {
        let record = find_passenger(records, passenger_id)
            .ok_or(QueryError::PassengerNotFound(passenger_id))?;
        let itinerary = self.plan(record.from, record.to)?;
        Ok((record, itinerary))
    }

    fn validate_stop(&self, stop: StopId) -> Result<VertexIndex, QueryError> {
        let invalid = QueryError::InvalidStop {
            stop,
            max: self.stops.max_id(),
        };
        if !self.stops.is_valid(stop) {
            return Err(invalid);
        }
        stop.to_vertex().ok_or(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue(names: &[&str]) -> StopCatalogue {
        let mut stops = StopCatalogue::new();
        for (i, name) in names.iter().enumerate() {
            stops.insert(StopId(i as u32 + 1), *name);
        }
        stops
    }

    fn connect(builder: &mut NetworkBuilder, a: u32, b: u32, w: Weight) {
        let u = StopId(a).to_vertex().unwrap();
        let v = StopId(b).to_vertex().unwrap();
        assert!(builder.add_connection(u, v, w));
    }

    /// Stops 1-2-3 in a triangle plus an isolated stop 4.
    /// Line 10 runs 1-2, line 12 runs 1-2-3.
    fn sample() -> TransitNetwork {
        let stops = catalogue(&["Ulus", "Sihhiye", "Kizilay", "Island"]);
        let mut builder = NetworkBuilder::new(stops);
        connect(&mut builder, 1, 2, 5);
        connect(&mut builder, 2, 3, 5);
        connect(&mut builder, 1, 3, 12);
        builder.add_line(LineNo(10), "Short", ["Ulus", "Sihhiye"]);
        builder.add_line(LineNo(12), "Long", ["Ulus", "Sihhiye", "Kizilay", "Atlantis"]);
        builder.build()
    }

    #[test]
    fn plan_prefers_two_hops_and_keeps_line() {
        let network = sample();
        let itinerary = network.plan(StopId(1), StopId(3)).unwrap();

        assert_eq!(itinerary.stops(), vec![StopId(1), StopId(2), StopId(3)]);
        assert_eq!(itinerary.total_distance, 10);
        assert!(itinerary.hops.iter().all(|h| h.line == Some(LineNo(12))));
        assert_eq!(itinerary.transfer_count(), 0);
    }

    #[test]
    fn plan_to_isolated_stop_has_no_path() {
        let network = sample();
        assert_eq!(
            network.plan(StopId(1), StopId(4)),
            Err(QueryError::NoPath {
                from: StopId(1),
                to: StopId(4)
            })
        );
    }

    #[test]
    fn plan_rejects_out_of_range_stops() {
        let network = sample();
        assert_eq!(
            network.plan(StopId(0), StopId(2)),
            Err(QueryError::InvalidStop {
                stop: StopId(0),
                max: 4
            })
        );
        assert!(matches!(
            network.plan(StopId(1), StopId(5)),
            Err(QueryError::InvalidStop { .. })
        ));
    }

    #[test]
    fn repeated_plans_agree() {
        let network = sample();
        let first = network.plan(StopId(3), StopId(1)).unwrap();
        let second = network.plan(StopId(3), StopId(1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lines_at_stop() {
        let network = sample();
        assert_eq!(
            network.lines_at_stop(StopId(1)),
            Ok(vec![LineNo(10), LineNo(12)])
        );
        assert_eq!(network.lines_at_stop(StopId(3)), Ok(vec![LineNo(12)]));
        assert_eq!(
            network.lines_at_stop(StopId(4)),
            Err(QueryError::StopNotFound(StopId(4)))
        );
        assert!(matches!(
            network.lines_at_stop(StopId(9)),
            Err(QueryError::InvalidStop { .. })
        ));
    }

    #[test]
    fn line_lookup() {
        let network = sample();
        let line = network.line(LineNo(12)).unwrap();

        assert_eq!(line.name, "Long");
        assert_eq!(line.stop_count(), 4);
        assert_eq!(line.stops[3].id, None);
        assert_eq!(network.line(LineNo(7)), Err(QueryError::UnknownLine(LineNo(7))));
        assert_eq!(network.line(LineNo(0)), Err(QueryError::InvalidLine(LineNo(0))));
        assert_eq!(network.line_count(), 2);
    }

    #[test]
    fn line_annotation_lands_on_graph_edges() {
        let network = sample();
        let graph = network.graph();
        let lines: Vec<u32> = graph
            .edge(VertexIndex(0), VertexIndex(1))
            .map(|e| e.lines.iter().map(|l| l.0).collect())
            .unwrap_or_default();
        assert_eq!(lines, vec![10, 12]);
        assert!(graph
            .edge(VertexIndex(0), VertexIndex(2))
            .is_some_and(|e| e.lines.is_empty()));
    }

    #[test]
    fn plan_for_passenger() {
        let network = sample();
        let records = vec![PassengerRecord {
            id: 42,
            name: "Zeynep".to_string(),
            from: StopId(1),
            to: StopId(3),
        }];

        let (record, itinerary) = network.plan_for_passenger(&records, 42).unwrap();
        assert_eq!(record.name, "Zeynep");
        assert_eq!(itinerary.total_distance, 10);

        assert!(matches!(
            network.plan_for_passenger(&records, 7),
            Err(QueryError::PassengerNotFound(7))
        ));
    }
}
