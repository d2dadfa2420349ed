//! JSON report.

use crate::context::ReportContext;
use crate::errors::ReportResult;
use carbonledger_core::engine::{GrandTotal, ScopeResult};
use carbonledger_core::metrics::ResultMetrics;
use carbonledger_core::session::Organization;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const JSON_FILE: &str = "report.json";

#[derive(Serialize)]
struct ReportDocument<'a> {
    organization: Option<&'a Organization>,
    calculation_date: String,
    unit: &'a str,
    totals: GrandTotal,
    scopes: [&'a ScopeResult; 3],
    metrics: &'a ResultMetrics,
}

impl<'a> From<&'a ReportContext<'a>> for ReportDocument<'a> {
    fn from(ctx: &'a ReportContext<'a>) -> Self {
        let inventory = ctx.inventory;
        Self {
            organization: ctx.organization,
            calculation_date: ctx.calculation_date(),
            unit: &inventory.unit,
            totals: inventory.totals,
            scopes: [&inventory.scope1, &inventory.scope2, &inventory.scope3],
            metrics: &ctx.metrics,
        }
    }
}

/// Pretty printed JSON report.
pub fn to_json(ctx: &ReportContext<'_>) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(&ReportDocument::from(ctx))?)
}

/// Writes `report.json` into `dir`, creating it if needed.
pub fn export_json(dir: impl AsRef<Path>, ctx: &ReportContext<'_>) -> ReportResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(JSON_FILE);
    std::fs::write(&path, to_json(ctx)?)?;
    info!(path = %path.display(), "Wrote JSON report");
    Ok(path)
}
