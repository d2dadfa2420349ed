//! Presentation and export for carbonledger inventories.
//!
//! Nothing here changes a computed value. Tables carry raw numbers and each
//! output applies its own formatting:
//!
//! - [`tables`]: summary, per-scope detail and factor reference rows
//! - [`csv_export`]: `summary.csv` and one file per scope
//! - [`json`]: a single JSON document with totals, details and metrics
//! - [`html`]: a printable report with executive summary and targets

pub mod context;
pub mod csv_export;
pub mod errors;
pub mod format;
pub mod html;
pub mod json;
pub mod tables;

pub use context::ReportContext;
pub use errors::{ReportError, ReportResult};
