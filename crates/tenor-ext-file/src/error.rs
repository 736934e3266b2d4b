//! Error types for file input and output.

use thiserror::Error;

use tenor_curves::CurveError;

/// Result type alias for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Error type for file operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be parsed.
    #[error("row {row}, column '{column}': cannot parse '{value}': {reason}")]
    Parse {
        /// 1-based data row (header excluded).
        row: usize,
        /// Column header.
        column: String,
        /// Raw cell text.
        value: String,
        /// What went wrong.
        reason: String,
    },

    /// A row's cells parse but do not describe a valid record.
    #[error("row {row}: {reason}")]
    InvalidRecord {
        /// 1-based data row (header excluded).
        row: usize,
        /// What is wrong with the record.
        reason: String,
    },

    /// A required column is absent from the header.
    #[error("missing column '{column}'")]
    MissingColumn {
        /// Column header.
        column: String,
    },

    /// The curve table is not a valid curve.
    #[error("invalid curve: {0}")]
    Curve(#[from] CurveError),
}

impl FileError {
    /// Creates an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
