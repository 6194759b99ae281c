//! End-to-end tests: source text through ingestion to labeled itineraries.

use super::*;
use crate::graph::{Distance, LineNo, StopId, VertexIndex};
use crate::ingest::{parse_distance_matrix, parse_line_list, parse_stop_list};

const STOPS: &str = "id,name\n1,Ulus\n2,Sihhiye\n3,Kizilay\n4,Island\n";

const LINES: &str = "no,name,stops\n\
                     10,Short,Ulus,Sihhiye\n\
                     12,Long,Ulus,Sihhiye,Kizilay\n";

const MATRIX: &str = "0,5,12,-\n\
                      5,0,5,-\n\
                      12,5,0,-\n\
                      -,-,-,0\n";

fn load(stops: &str, lines: &str, matrix: &str) -> TransitNetwork {
    let mut builder = NetworkBuilder::new(parse_stop_list(stops));
    for line in parse_line_list(lines) {
        builder.add_line(line.number, line.name, line.stop_names);
    }
    for (u, v, weight) in parse_distance_matrix(matrix, builder.vertex_count()) {
        builder.add_connection(u, v, weight);
    }
    builder.build()
}

fn v(stop: u32) -> VertexIndex {
    StopId(stop).to_vertex().unwrap()
}

#[test]
fn two_hops_beat_the_direct_edge() {
    let network = load(STOPS, LINES, MATRIX);
    let tree = network.graph().shortest_paths(v(1)).unwrap();

    assert_eq!(tree.distance(v(3)), Distance::new(10));
    assert_eq!(tree.parent(v(3)), Some(v(2)));
    assert_eq!(tree.parent(v(2)), Some(v(1)));
    assert_eq!(tree.parent(v(1)), None);
}

#[test]
fn isolated_stop_is_unreachable() {
    let network = load(STOPS, LINES, MATRIX);
    let tree = network.graph().shortest_paths(v(1)).unwrap();

    assert_eq!(tree.distance(v(4)), Distance::INFINITY);
    assert_eq!(tree.parent(v(4)), None);
    assert_eq!(
        network.plan(StopId(1), StopId(4)),
        Err(QueryError::NoPath {
            from: StopId(1),
            to: StopId(4)
        })
    );
}

#[test]
fn shared_line_is_kept_across_hops() {
    let network = load(STOPS, LINES, MATRIX);
    let itinerary = network.plan(StopId(1), StopId(3)).unwrap();

    let lines: Vec<_> = itinerary.hops.iter().map(|h| h.line).collect();
    assert_eq!(lines, vec![Some(LineNo(12)), Some(LineNo(12))]);
    assert_eq!(itinerary.transfer_count(), 0);
    assert_eq!(itinerary.arrival_line(), Some(LineNo(12)));
}

#[test]
fn changing_lines_is_a_transfer() {
    let lines = "no,name,stops\n\
                 10,Short,Ulus,Sihhiye\n\
                 20,Cross,Sihhiye,Kizilay\n";
    let network = load(STOPS, lines, MATRIX);
    let itinerary = network.plan(StopId(1), StopId(3)).unwrap();

    let labels: Vec<_> = itinerary.hops.iter().map(|h| (h.line, h.transfer)).collect();
    assert_eq!(
        labels,
        vec![(Some(LineNo(10)), false), (Some(LineNo(20)), true)]
    );
}

#[test]
fn unserved_connection_has_no_line() {
    let lines = "no,name,stops\n10,Short,Ulus,Sihhiye\n";
    let matrix = "0,-,-,-\n-,0,-,-\n-,-,0,7\n-,-,7,0\n";
    let network = load(STOPS, lines, matrix);
    let itinerary = network.plan(StopId(3), StopId(4)).unwrap();

    assert_eq!(itinerary.total_distance, 7);
    assert_eq!(itinerary.hops[0].line, None);
    assert!(!itinerary.hops[0].transfer);
}

#[test]
fn stop_lines_follow_load_order() {
    let network = load(STOPS, LINES, MATRIX);

    assert_eq!(
        network.lines_at_stop(StopId(2)),
        Ok(vec![LineNo(10), LineNo(12)])
    );
    let index = network.stop_lines();
    assert_eq!(index.in_order(), vec![StopId(1), StopId(2), StopId(3)]);
}

#[test]
fn same_stop_is_a_zero_hop_trip() {
    let network = load(STOPS, LINES, MATRIX);
    let itinerary = network.plan(StopId(2), StopId(2)).unwrap();

    assert!(itinerary.hops.is_empty());
    assert_eq!(itinerary.total_distance, 0);
    assert_eq!(itinerary.stops(), vec![StopId(2)]);
}
