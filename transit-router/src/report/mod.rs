//! Presentation of query results.
//!
//! Each view is a plain data type built from the network and a query
//! result. Views render either as console text (`Display`) or as JSON
//! (`Serialize`), chosen by [`OutputFormat`].

mod views;

use std::fmt::Display;

use serde::Serialize;

use crate::config::OutputFormat;

pub use views::{
    ErrorView, ItineraryStopView, ItineraryView, LineListView, LineStopsView, LineSummary,
    PassengerView, StopLinesView, StopView,
};

/// Render a view in the requested format.
pub fn render<T: Serialize + Display>(
    view: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(view.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(view),
    }
}
