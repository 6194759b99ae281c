//! Ingestion error types.

use std::path::PathBuf;

/// Errors that stop a source file from being loaded.
///
/// Individual malformed rows are not errors: they are skipped and logged.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stop list yielded no usable stop, so there is no network to build
    #[error("no valid stops in {}", .0.display())]
    EmptyStopList(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::Io {
            path: PathBuf::from("data/stops.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read data/stops.txt: missing");

        let err = IngestError::EmptyStopList(PathBuf::from("stops.txt"));
        assert_eq!(err.to_string(), "no valid stops in stops.txt");
    }
}
