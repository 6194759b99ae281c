//! Transit lines as loaded from the line list.

use crate::graph::{LineNo, StopId};

/// A stop as listed on a line, with its id if the name matched a known stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStop {
    pub name: String,
    pub id: Option<StopId>,
}

/// A transit line: number, name, and the stops it visits in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: LineNo,
    pub name: String,
    pub stops: Vec<LineStop>,
}

impl Line {
    /// Ids of the stops that resolved, in route order.
    pub fn route(&self) -> impl Iterator<Item = StopId> + '_ {
        self.stops.iter().filter_map(|stop| stop.id)
    }

    /// Number of listed stops, resolved or not.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}
