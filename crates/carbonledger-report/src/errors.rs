use thiserror::Error;

/// Error type for export operations.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
