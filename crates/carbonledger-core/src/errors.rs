use crate::activity::{Category, Scope};
use thiserror::Error;

/// Error type for invalid ledger, engine and configuration operations.
#[derive(Error, Debug)]
pub enum CarbonError {
    #[error("Invalid quantity for {field}: {value}. Quantities must be finite and non-negative")]
    InvalidQuantity { field: String, value: f64 },
    #[error("{category} records belong to {actual}, not {expected}")]
    ScopeMismatch {
        expected: Scope,
        actual: Scope,
        category: Category,
    },
    #[error("No emission factor for {category} key '{key}'")]
    UnresolvedFactor { category: Category, key: String },
    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("Invalid organization information: {0} is required")]
    InvalidOrganization(String),
    #[error("Invalid reporting period: start {start} is after end {end}")]
    InvalidReportingPeriod {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Could not parse TOML: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, CarbonError>`.
pub type CarbonResult<T> = Result<T, CarbonError>;
