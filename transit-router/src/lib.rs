//! Transit network router.
//!
//! Loads stops, lines and inter-stop distances from text files, builds a
//! weighted graph annotated with the lines serving each connection, and
//! answers shortest-route queries with line labels and transfer points.

pub mod cache;
pub mod config;
pub mod containers;
pub mod graph;
pub mod ingest;
pub mod menu;
pub mod network;
pub mod report;
pub mod stops;
