//! Load a transit network from its source files.

use std::path::Path;

use tracing::info;

use crate::cache::CacheConfig;
use crate::config::DataFiles;
use crate::network::{NetworkBuilder, PassengerRecord, TransitNetwork};

use super::error::IngestError;
use super::parse::{parse_distance_matrix, parse_line_list, parse_passengers, parse_stop_list};

fn read(path: &Path) -> Result<String, IngestError> {
    std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the network from the stop list, line list and distance matrix.
///
/// Stops come first since they fix the vertex count and resolve the line
/// stop names. Connections are added next, then the lines are laid over
/// them when the builder is finished.
pub fn load_network(
    files: &DataFiles,
    cache: &CacheConfig,
) -> Result<TransitNetwork, IngestError> {
    let stops = parse_stop_list(&read(&files.stops)?);
    if stops.is_empty() {
        return Err(IngestError::EmptyStopList(files.stops.clone()));
    }
    info!(
        stops = stops.len(),
        max_id = stops.max_id(),
        path = %files.stops.display(),
        "Loaded stop list"
    );

    let mut builder = NetworkBuilder::new(stops).with_cache(cache.clone());

    let lines = parse_line_list(&read(&files.lines)?);
    info!(lines = lines.len(), path = %files.lines.display(), "Loaded line list");
    for line in lines {
        builder.add_line(line.number, line.name, line.stop_names);
    }

    let connections = parse_distance_matrix(&read(&files.distances)?, builder.vertex_count());
    info!(
        connections = connections.len(),
        path = %files.distances.display(),
        "Loaded distance matrix"
    );
    for (u, v, weight) in connections {
        builder.add_connection(u, v, weight);
    }

    Ok(builder.build())
}

/// Load passenger trip requests.
pub fn load_passengers(path: &Path) -> Result<Vec<PassengerRecord>, IngestError> {
    let records = parse_passengers(&read(path)?);
    info!(passengers = records.len(), path = %path.display(), "Loaded passenger list");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{LineNo, StopId};
    use tempfile::tempdir;

    fn write_sample(dir: &Path) -> DataFiles {
        let files = DataFiles::in_dir(dir);
        std::fs::write(
            &files.stops,
            "id,name\n1,Ulus\n2,Sihhiye\n3,Kizilay\n4,Island\n",
        )
        .unwrap();
        std::fs::write(
            &files.lines,
            "no,name,stops\n10,Short,Ulus,Sihhiye\n12,Long,Ulus,Sihhiye,Kizilay\n",
        )
        .unwrap();
        std::fs::write(&files.distances, "0,5,12,-\n5,0,5,-\n12,5,0,-\n-,-,-,0\n").unwrap();
        std::fs::write(&files.passengers, "id,name,from,to\n1,Ayse,1,3\n2,Can,1,4\n").unwrap();
        files
    }

    #[test]
    fn load_and_plan() {
        let dir = tempdir().unwrap();
        let files = write_sample(dir.path());

        let network = load_network(&files, &CacheConfig::default()).unwrap();
        let passengers = load_passengers(&files.passengers).unwrap();

        assert_eq!(network.stops().max_id(), 4);
        assert_eq!(network.line_count(), 2);
        assert_eq!(network.graph().edge_count(), 6);

        let (_, itinerary) = network.plan_for_passenger(&passengers, 1).unwrap();
        assert_eq!(itinerary.total_distance, 10);
        assert!(itinerary.hops.iter().all(|h| h.line == Some(LineNo(12))));

        assert!(network.plan_for_passenger(&passengers, 2).is_err());
        assert_eq!(network.lines_at_stop(StopId(2)), Ok(vec![LineNo(10), LineNo(12)]));
    }

    #[test]
    fn stray_large_stop_id_does_not_size_the_network() {
        let dir = tempdir().unwrap();
        let files = write_sample(dir.path());
        std::fs::write(
            &files.stops,
            "id,name\n1,Ulus\n2,Sihhiye\n3,Kizilay\n4,Island\n4000000000,Typo\n",
        )
        .unwrap();

        let network = load_network(&files, &CacheConfig::default()).unwrap();
        assert_eq!(network.stops().max_id(), 4);
        assert_eq!(network.graph().vertex_count(), 4);
        assert_eq!(network.plan(StopId(1), StopId(3)).unwrap().total_distance, 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let files = DataFiles::in_dir(dir.path());

        let err = load_network(&files, &CacheConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::Io { ref path, .. } if path == &files.stops));
    }

    #[test]
    fn empty_stop_list_is_rejected() {
        let dir = tempdir().unwrap();
        let files = write_sample(dir.path());
        std::fs::write(&files.stops, "id,name\n").unwrap();

        let err = load_network(&files, &CacheConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyStopList(_)));
    }

    #[test]
    fn missing_passenger_file() {
        let dir = tempdir().unwrap();
        let err = load_passengers(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
