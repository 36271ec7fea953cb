use std::path::PathBuf;
use thiserror::Error;

use crate::core::types::ColumnType;

/// Errors surfaced while building, loading, or uploading a dataset.
///
/// Server-side rejection of an upload is not an error; see
/// [`UploadStatus`](crate::client::UploadStatus).
#[derive(Debug, Error)]
pub enum DatabankError {
    /// The underlying HTTP call failed (connection, TLS, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The login endpoint returned a non-success status.
    #[error("login request failed with status code {status}")]
    Auth { status: u16 },

    /// A column declared on the dataset is absent from a CSV header.
    #[error("column '{column}' not found in file: {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// A cell could not be converted to its column's declared type.
    #[error("cannot convert '{value}' to {column_type} (column '{column}', row {row})")]
    Conversion {
        column: String,
        row: usize,
        value: String,
        column_type: ColumnType,
    },

    /// Structurally malformed CSV input (bad quoting, uneven record
    /// lengths) or an unreadable file.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Two column definitions in a dataset descriptor share a name.
    #[error("duplicate column '{0}' in dataset descriptor")]
    DuplicateColumn(String),

    /// The global tracing subscriber was already installed.
    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, DatabankError>;
