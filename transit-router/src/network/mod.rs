//! Transit network context and the queries users run against it.

mod error;
mod line;
mod passenger;
mod transit_network;

pub use error::QueryError;
pub use line::{Line, LineStop};
pub use passenger::{PassengerRecord, find_passenger};
pub use transit_network::{NetworkBuilder, TransitNetwork};

#[cfg(test)]
mod scenario_tests;
