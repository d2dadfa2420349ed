//! CSV export.
//!
//! Writes one summary file and one detail file per scope. Numbers are
//! written with two decimals and no thousands separators so the files load
//! cleanly into spreadsheets.

use crate::errors::ReportResult;
use crate::tables::{detail_rows, summary_rows, DetailRow, SummaryRow};
use carbonledger_core::activity::Scope;
use carbonledger_core::engine::{Inventory, ScopeResult};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SUMMARY_FILE: &str = "summary.csv";

/// File name of the detail table for `scope`, e.g. `scope1.csv`.
pub fn scope_file_name(scope: Scope) -> String {
    format!("scope{}.csv", scope.number())
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Unit")]
    unit: &'a str,
}

impl<'a> From<&'a SummaryRow> for SummaryRecord<'a> {
    fn from(row: &'a SummaryRow) -> Self {
        Self {
            category: &row.category,
            value: format!("{:.2}", row.value),
            unit: &row.unit,
        }
    }
}

#[derive(Serialize)]
struct DetailRecord<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Source")]
    source: &'a str,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Unit")]
    unit: &'a str,
    #[serde(rename = "Emission Factor")]
    coefficient: String,
    #[serde(rename = "Factor Source")]
    factor_source: &'a str,
    #[serde(rename = "Emissions (kgCO2e)")]
    emissions: String,
}

impl<'a> From<&'a DetailRow> for DetailRecord<'a> {
    fn from(row: &'a DetailRow) -> Self {
        Self {
            category: &row.category,
            source: &row.source,
            quantity: format!("{:.2}", row.quantity),
            unit: &row.unit,
            // Factors carry up to four significant decimals
            coefficient: row.coefficient.to_string(),
            factor_source: &row.factor_source,
            emissions: format!("{:.2}", row.emissions),
        }
    }
}

/// Writes the summary table to `writer`.
pub fn write_summary<W: Write>(writer: W, inventory: &Inventory) -> ReportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in summary_rows(inventory).iter() {
        wtr.serialize(SummaryRecord::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the detail table of one scope to `writer`.
///
/// A scope without records still produces a header line.
pub fn write_scope<W: Write>(writer: W, scope: &ScopeResult) -> ReportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let rows = detail_rows(scope);
    if rows.is_empty() {
        wtr.write_record([
            "Category",
            "Source",
            "Quantity",
            "Unit",
            "Emission Factor",
            "Factor Source",
            "Emissions (kgCO2e)",
        ])?;
    }
    for row in rows.iter() {
        wtr.serialize(DetailRecord::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `summary.csv` and `scope1.csv`..`scope3.csv` into `dir`,
/// creating it if needed. Returns the paths written.
pub fn export_csv(dir: impl AsRef<Path>, inventory: &Inventory) -> ReportResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let summary_path = dir.join(SUMMARY_FILE);
    write_summary(std::fs::File::create(&summary_path)?, inventory)?;
    let mut written = vec![summary_path];

    for scope in inventory.scopes() {
        let path = dir.join(scope_file_name(scope.scope));
        write_scope(std::fs::File::create(&path)?, scope)?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "Wrote CSV export");
    Ok(written)
}
