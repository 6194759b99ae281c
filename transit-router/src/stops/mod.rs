//! Stop metadata: names and the stop → lines index.
//!
//! Both are filled once during ingestion and only read afterwards. Neither
//! takes part in path finding.

mod catalogue;
mod index;

pub use catalogue::StopCatalogue;
pub use index::StopLineIndex;
