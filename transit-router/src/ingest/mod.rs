//! Ingestion of the stop list, line list, distance matrix and passenger list.
//!
//! All four are comma-separated text files. Malformed rows are skipped with
//! a warning; only unreadable files and an empty stop list stop loading.

mod error;
mod load;
mod parse;

pub use error::IngestError;
pub use load::{load_network, load_passengers};
pub use parse::{
    LineEntry, MAX_STOP_ID, parse_distance_matrix, parse_line_list, parse_passengers,
    parse_stop_list,
};
