//! Query error types.
//!
//! These are the outcomes the query layer reports to the user instead of
//! crashing: bad ids, lookups that miss, and destinations out of reach.

use crate::graph::{LineNo, RoutingError, StopId};

/// Errors from queries against a [`TransitNetwork`](super::TransitNetwork).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Stop id is outside `[1, V]`
    #[error("invalid stop id {stop}: network has stops 1 to {max}")]
    InvalidStop { stop: StopId, max: usize },

    /// Stop id is valid but no line visits it
    #[error("stop {0} not found in the stop-line index")]
    StopNotFound(StopId),

    /// Line numbers start at 1
    #[error("invalid line number {0}")]
    InvalidLine(LineNo),

    /// No line with this number was loaded
    #[error("line {0} not found")]
    UnknownLine(LineNo),

    /// No passenger record with this id
    #[error("passenger {0} not found")]
    PassengerNotFound(u32),

    /// Destination is not reachable from the source
    #[error("no path found from {from} to {to}")]
    NoPath { from: StopId, to: StopId },

    /// Shortest-path engine rejected the request
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}
