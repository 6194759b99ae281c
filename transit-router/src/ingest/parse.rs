//! Parsers for the comma-separated source files.
//!
//! Parsers work on file contents so they can be tested without touching
//! the filesystem. Blank lines are skipped everywhere except the distance
//! matrix, where a blank line still counts as a row.

use std::collections::BTreeMap;

use tracing::warn;

use crate::graph::{LineNo, StopId, VertexIndex, Weight};
use crate::network::PassengerRecord;
use crate::stops::StopCatalogue;

/// Largest stop id the stop list may use.
///
/// The highest id fixes the vertex count, and every query allocates per
/// vertex, so a stray large id would size the whole network to it.
pub const MAX_STOP_ID: u32 = 100_000;

/// A row of the line list, before stop names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry {
    pub number: LineNo,
    pub name: String,
    pub stop_names: Vec<String>,
}

/// Non-blank lines after the header, with their 1-based line numbers.
fn data_rows(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .map(|(i, row)| (i + 1, row))
        .filter(|(_, row)| !row.trim().is_empty())
}

fn positive_id(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok().filter(|id| *id >= 1)
}

/// Parse the stop list: a header, then `id,name` rows.
///
/// Rows with an id above [`MAX_STOP_ID`] are skipped.
pub fn parse_stop_list(contents: &str) -> StopCatalogue {
    let mut stops = StopCatalogue::new();

    for (line_no, row) in data_rows(contents) {
        let mut fields = row.split(',');
        let id = fields.next().and_then(positive_id);
        let name = fields.next().map(str::trim).filter(|name| !name.is_empty());

        match (id, name) {
            (Some(id), Some(_)) if id > MAX_STOP_ID => {
                warn!(
                    line = line_no,
                    id,
                    max = MAX_STOP_ID,
                    "Skipping stop with id above the limit"
                );
            }
            (Some(id), Some(name)) => {
                stops.insert(StopId(id), name);
            }
            _ => warn!(line = line_no, row, "Skipping malformed stop row"),
        }
    }

    stops
}

/// Parse the line list: a header, then `number,name,stop,stop,...` rows.
pub fn parse_line_list(contents: &str) -> Vec<LineEntry> {
    let mut lines = Vec::new();

    for (line_no, row) in data_rows(contents) {
        let mut fields = row.split(',').map(str::trim);

        let Some(number) = fields.next().and_then(positive_id) else {
            warn!(line = line_no, row, "Skipping line row without a valid line number");
            continue;
        };
        let name = fields.next().unwrap_or_default().to_string();
        let stop_names = fields
            .filter(|stop| !stop.is_empty())
            .map(str::to_string)
            .collect();

        lines.push(LineEntry {
            number: LineNo(number),
            name,
            stop_names,
        });
    }

    lines
}

/// Parse the distance matrix into undirected connections.
///
/// Row `r`, column `c` describe vertices `r` and `c`. Empty and `-` cells
/// mean no connection. Cells that are not non-negative integers, diagonal
/// cells, and cells outside `[0, vertex_count)` are skipped. A pair listed
/// more than once (both triangles of a symmetric matrix) yields a single
/// connection with the smallest weight. Connections come out ordered by
/// `(min(r, c), max(r, c))`.
pub fn parse_distance_matrix(
    contents: &str,
    vertex_count: usize,
) -> Vec<(VertexIndex, VertexIndex, Weight)> {
    let mut pairs: BTreeMap<(usize, usize), Weight> = BTreeMap::new();

    for (row, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        for (col, cell) in line.split(',').map(str::trim).enumerate() {
            if cell.is_empty() || cell == "-" {
                continue;
            }
            let Ok(weight) = cell.parse::<Weight>() else {
                warn!(row, col, cell, "Skipping distance cell that is not a non-negative integer");
                continue;
            };
            if row >= vertex_count || col >= vertex_count {
                warn!(row, col, vertex_count, "Skipping distance cell outside the stop range");
                continue;
            }
            if row == col {
                continue;
            }

            let key = (row.min(col), row.max(col));
            pairs
                .entry(key)
                .and_modify(|w| *w = (*w).min(weight))
                .or_insert(weight);
        }
    }

    pairs
        .into_iter()
        .map(|((u, v), w)| (VertexIndex(u), VertexIndex(v), w))
        .collect()
}

fn parse_passenger(row: &str) -> Option<PassengerRecord> {
    let mut fields = row.split(',').map(str::trim);
    let id = fields.next()?.parse().ok()?;
    let name = fields.next()?.to_string();
    let from = StopId(fields.next()?.parse().ok()?);
    let to = StopId(fields.next()?.parse().ok()?);
    Some(PassengerRecord { id, name, from, to })
}

/// Parse the passenger list: a header, then `id,name,from,to` rows.
pub fn parse_passengers(contents: &str) -> Vec<PassengerRecord> {
    let mut records = Vec::new();

    for (line_no, row) in data_rows(contents) {
        match parse_passenger(row) {
            Some(record) => records.push(record),
            None => warn!(line = line_no, row, "Skipping malformed passenger row"),
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_list_skips_header_blank_and_bad_rows() {
        let contents = "id,name\n1, Ulus \n\n   \n0,Zero\nx,Bad\n3,Kizilay\r\n4\n";
        let stops = parse_stop_list(contents);

        assert_eq!(stops.name(StopId(1)), Some("Ulus"));
        assert_eq!(stops.name(StopId(3)), Some("Kizilay"));
        assert_eq!(stops.name(StopId(4)), None);
        assert_eq!(stops.max_id(), 3);
        assert_eq!(stops.len(), 2);
    }

    #[test]
    fn stop_list_rejects_ids_above_limit() {
        let contents = "id,name\n1,Ulus\n2,Sihhiye\n5000000,Typo\n4294967295,Max\n";
        let stops = parse_stop_list(contents);

        assert_eq!(stops.len(), 2);
        assert_eq!(stops.max_id(), 2);
        assert_eq!(stops.name(StopId(5_000_000)), None);

        let at_limit = parse_stop_list(&format!("id,name\n{MAX_STOP_ID},Edge\n"));
        assert_eq!(at_limit.max_id(), MAX_STOP_ID as usize);
    }

    #[test]
    fn line_list_rows() {
        let contents = "no,name,stops\n\
                        10, Red ,Ulus, Sihhiye ,,Kizilay\n\
                        0,Bad,Ulus\n\
                        abc,Bad,Ulus\n\
                        12\n";
        let lines = parse_line_list(contents);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, LineNo(10));
        assert_eq!(lines[0].name, "Red");
        assert_eq!(lines[0].stop_names, vec!["Ulus", "Sihhiye", "Kizilay"]);
        assert_eq!(lines[1].number, LineNo(12));
        assert_eq!(lines[1].name, "");
        assert!(lines[1].stop_names.is_empty());
    }

    #[test]
    fn distance_matrix_symmetric_pairs_collapse() {
        let contents = "0,5,12\n5,0,5\n12,5,0\n";
        let edges = parse_distance_matrix(contents, 3);

        assert_eq!(
            edges,
            vec![
                (VertexIndex(0), VertexIndex(1), 5),
                (VertexIndex(0), VertexIndex(2), 12),
                (VertexIndex(1), VertexIndex(2), 5),
            ]
        );
    }

    #[test]
    fn distance_matrix_keeps_smaller_weight() {
        let contents = "-,9\n4,-\n";
        let edges = parse_distance_matrix(contents, 2);
        assert_eq!(edges, vec![(VertexIndex(0), VertexIndex(1), 4)]);
    }

    #[test]
    fn distance_matrix_skips_bad_cells() {
        let contents = "-, ,-3,abc,7\n";
        let edges = parse_distance_matrix(contents, 5);
        assert_eq!(edges, vec![(VertexIndex(0), VertexIndex(4), 7)]);
    }

    #[test]
    fn distance_matrix_blank_line_consumes_row() {
        let contents = "-,-,-\n\n1,-,-\n";
        let edges = parse_distance_matrix(contents, 3);
        assert_eq!(edges, vec![(VertexIndex(0), VertexIndex(2), 1)]);
    }

    #[test]
    fn distance_matrix_ignores_out_of_range() {
        let contents = "-,1,2\n1,-,3\n2,3,-\n";
        let edges = parse_distance_matrix(contents, 2);
        assert_eq!(edges, vec![(VertexIndex(0), VertexIndex(1), 1)]);
    }

    #[test]
    fn passengers() {
        let contents = "id,name,from,to\n\
                        1, Ayse Yilmaz ,3,7\n\
                        2,Missing,3\n\
                        x,Bad,1,2\n\
                        3,Mehmet,1,2\n";
        let records = parse_passengers(contents);

        assert_eq!(
            records,
            vec![
                PassengerRecord {
                    id: 1,
                    name: "Ayse Yilmaz".to_string(),
                    from: StopId(3),
                    to: StopId(7),
                },
                PassengerRecord {
                    id: 3,
                    name: "Mehmet".to_string(),
                    from: StopId(1),
                    to: StopId(2),
                },
            ]
        );
    }

    #[test]
    fn header_only_files_are_empty() {
        assert!(parse_stop_list("id,name\n").is_empty());
        assert!(parse_line_list("no,name\n").is_empty());
        assert!(parse_passengers("").is_empty());
        assert!(parse_distance_matrix("", 4).is_empty());
    }
}
