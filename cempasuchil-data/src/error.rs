//! Errors raised while loading facility datasets.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned when loading a facility dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path:?}")]
    Open {
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
        /// Path that was opened.
        path: Utf8PathBuf,
    },
    /// The payload was not JSON in a recognised shape.
    #[error("failed to parse dataset JSON")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A positional row did not hold one cell per schema column.
    #[error("row {row} has {found} cells; expected {expected}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of cells present.
        found: usize,
        /// Number of schema columns.
        expected: usize,
    },
}
