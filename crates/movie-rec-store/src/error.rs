use std::path::PathBuf;

/// Errors raised while reading or writing the CSV stores
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}. Available columns: {available:?}")]
    MissingColumn { column: String, available: Vec<String> },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
