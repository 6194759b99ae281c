//! View models for query results.

use std::fmt;

use serde::Serialize;

use crate::graph::{Itinerary, LineNo, StopId};
use crate::network::{Line, PassengerRecord, TransitNetwork};

/// Placeholder for a stop id that has no name.
const UNKNOWN_STOP: &str = "Unknown";

/// A stop with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopView {
    pub id: Option<StopId>,
    pub name: Option<String>,
}

impl StopView {
    pub fn new(network: &TransitNetwork, id: StopId) -> Self {
        Self {
            id: Some(id),
            name: network.stop_name(id).map(str::to_string),
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_STOP)
    }

    fn display_id(&self) -> String {
        self.id.map_or_else(|| "?".to_string(), |id| id.to_string())
    }
}

/// Number and name of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub number: LineNo,
    pub name: String,
}

/// Every loaded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineListView {
    pub lines: Vec<LineSummary>,
}

impl LineListView {
    pub fn new(network: &TransitNetwork) -> Self {
        let lines = network
            .lines()
            .iter()
            .map(|line| LineSummary {
                number: line.number,
                name: line.name.clone(),
            })
            .collect();
        Self { lines }
    }
}

impl fmt::Display for LineListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- All Lines ---")?;
        for line in &self.lines {
            writeln!(f, "Line {}  ({})", line.number, line.name)?;
        }
        write!(f, ">>> Total lines: {}", self.lines.len())
    }
}

/// The stops of one line as listed in the line file.
///
/// Listed names that matched no stop keep their position with no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStopsView {
    pub number: LineNo,
    pub name: String,
    pub stops: Vec<StopView>,
}

impl LineStopsView {
    pub fn new(line: &Line) -> Self {
        let stops = line
            .stops
            .iter()
            .map(|stop| StopView {
                id: stop.id,
                name: Some(stop.name.clone()),
            })
            .collect();

        Self {
            number: line.number,
            name: line.name.clone(),
            stops,
        }
    }
}

impl fmt::Display for LineStopsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stops.is_empty() {
            return write!(f, "Line {} ({}) has no stops.", self.number, self.name);
        }

        writeln!(
            f,
            "Line {} ({}) stops ({}):",
            self.number,
            self.name,
            self.stops.len()
        )?;
        for stop in &self.stops {
            match stop.id {
                Some(id) => writeln!(f, "  {} ({id})", stop.display_name())?,
                None => writeln!(f, "  {} [invalid stop]", stop.display_name())?,
            }
        }
        write!(
            f,
            ">>> {} stops found for line {}.",
            self.stops.len(),
            self.number
        )
    }
}

/// Lines serving one stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopLinesView {
    pub stop: StopView,
    pub lines: Vec<LineNo>,
}

impl StopLinesView {
    pub fn new(network: &TransitNetwork, stop: StopId, lines: Vec<LineNo>) -> Self {
        Self {
            stop: StopView::new(network, stop),
            lines,
        }
    }
}

impl fmt::Display for StopLinesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Stop: {} ({})",
            self.stop.display_name(),
            self.stop.display_id()
        )?;
        write!(f, "  Lines:")?;
        if self.lines.is_empty() {
            return write!(f, " (no lines found)");
        }
        for line in &self.lines {
            write!(f, " {line}")?;
        }
        Ok(())
    }
}

/// Who an itinerary was planned for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerView {
    pub id: u32,
    pub name: String,
}

/// One stop of an itinerary and the line shown there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryStopView {
    pub stop: StopView,
    pub line: Option<LineNo>,
    pub transfer: bool,
}

/// A planned trip, stop by stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger: Option<PassengerView>,
    pub source: StopView,
    pub destination: StopView,
    pub total_distance: u64,
    pub transfers: usize,
    pub stops: Vec<ItineraryStopView>,
}

impl ItineraryView {
    /// Each stop carries the line of the hop leaving it; the destination
    /// carries the line it was reached on.
    pub fn new(
        network: &TransitNetwork,
        itinerary: &Itinerary,
        passenger: Option<&PassengerRecord>,
    ) -> Self {
        let mut stops: Vec<ItineraryStopView> = itinerary
            .hops
            .iter()
            .map(|hop| ItineraryStopView {
                stop: StopView::new(network, hop.from),
                line: hop.line,
                transfer: hop.transfer,
            })
            .collect();
        stops.push(ItineraryStopView {
            stop: StopView::new(network, itinerary.destination),
            line: itinerary.arrival_line(),
            transfer: false,
        });

        Self {
            passenger: passenger.map(|p| PassengerView {
                id: p.id,
                name: p.name.clone(),
            }),
            source: StopView::new(network, itinerary.source),
            destination: StopView::new(network, itinerary.destination),
            total_distance: itinerary.total_distance,
            transfers: itinerary.transfer_count(),
            stops,
        }
    }
}

impl fmt::Display for ItineraryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(passenger) = &self.passenger {
            writeln!(f, "Passenger: {}", passenger.name)?;
        }
        writeln!(
            f,
            "From: {} (Id: {})",
            self.source.display_name(),
            self.source.display_id()
        )?;
        writeln!(
            f,
            "To: {} (Id: {})",
            self.destination.display_name(),
            self.destination.display_id()
        )?;
        writeln!(
            f,
            "Distance: {}, transfers: {}",
            self.total_distance, self.transfers
        )?;
        writeln!(f)?;
        write!(f, "Route:")?;

        for (i, entry) in self.stops.iter().enumerate() {
            write!(
                f,
                "\n{}. {} ({}) [Line: ",
                i + 1,
                entry.stop.display_name(),
                entry.stop.display_id()
            )?;
            match entry.line {
                Some(line) => write!(f, "{line}]")?,
                None => write!(f, "none]")?,
            }
            if entry.transfer {
                write!(f, " <<< Transfer!")?;
            }
        }
        Ok(())
    }
}

/// A query failure, reported instead of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub error: String,
}

impl ErrorView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl fmt::Display for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)
    }
}
