//! Printable HTML report.
//!
//! The layout is fixed: organization header, executive summary, a detailed
//! breakdown by scope and category, reduction targets and recommended
//! actions. Only the values change between reports.

use crate::context::ReportContext;
use crate::errors::ReportResult;
use crate::format::{format_emissions, format_percent, format_thousands};
use carbonledger_core::activity::{Category, Scope};
use carbonledger_core::metrics::share;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HTML_FILE: &str = "report.html";

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
h1,h3{color:#1b5e20}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#e8f5e9}\
tr.subtotal td{font-weight:bold}\
tr.total td{font-weight:bold;background:#f1f8e9}";

/// Escapes text for inclusion in HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Display adapter rendering a full HTML document.
pub struct HtmlReport<'r, 'a>(pub &'r ReportContext<'a>);

impl fmt::Display for HtmlReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.0;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<title>Carbon Footprint Report - {}</title>",
            escape_html(ctx.organization_name())
        )?;
        writeln!(f, "<style>{STYLE}</style>\n</head>\n<body>")?;
        write_header(f, ctx)?;
        write_summary(f, ctx)?;
        write_breakdown(f, ctx)?;
        write_targets(f, ctx)?;
        write_actions(f, ctx)?;
        writeln!(f, "</body>\n</html>")
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, ctx: &ReportContext<'_>) -> fmt::Result {
    writeln!(f, "<header>\n<h1>Carbon Footprint Report</h1>")?;
    writeln!(f, "<h4>{}</h4>", escape_html(ctx.organization_name()))?;
    if let Some(organization) = ctx.organization {
        if !organization.address.is_empty() {
            writeln!(f, "<p>{}</p>", escape_html(&organization.address))?;
        }
        let period = &organization.reporting_period;
        if let (Some(start), Some(end)) = (period.start(), period.end()) {
            writeln!(f, "<p>Reporting Period: {start} to {end}</p>")?;
        }
    }
    writeln!(
        f,
        "<p>Prepared by: {}</p>",
        escape_html(&ctx.parameters.prepared_by)
    )?;
    writeln!(f, "<p>Date: {}</p>\n</header>", ctx.calculation_date())
}

fn write_summary(f: &mut fmt::Formatter<'_>, ctx: &ReportContext<'_>) -> fmt::Result {
    let metrics = &ctx.metrics;
    writeln!(f, "<section>\n<h3>Executive Summary</h3>")?;
    writeln!(
        f,
        "<h2>{}</h2>\n<p>Total emissions</p>",
        format_emissions(ctx.inventory.totals.total)
    )?;
    writeln!(f, "<ul>")?;
    writeln!(
        f,
        "<li>Scope 1 emissions contribute {} of total emissions</li>",
        format_percent(metrics.scope_share(Scope::Scope1))
    )?;
    match ctx.inventory.largest_category() {
        Some(largest) => writeln!(
            f,
            "<li>Largest emission source: {}</li>",
            largest.category
        )?,
        None => writeln!(f, "<li>Largest emission source: n/a</li>")?,
    }
    writeln!(
        f,
        "<li>Employee commuting contributes {} to Scope 3</li>",
        format_percent(metrics.commuting_share_of_scope3)
    )?;
    writeln!(f, "</ul>\n</section>")
}

fn write_breakdown(f: &mut fmt::Formatter<'_>, ctx: &ReportContext<'_>) -> fmt::Result {
    let inventory = ctx.inventory;
    let total = inventory.totals.total;

    writeln!(f, "<section>\n<h3>Detailed Emission Breakdown</h3>")?;
    writeln!(f, "<table>")?;
    writeln!(
        f,
        "<tr><th>Scope</th><th>Category</th><th>Source</th>\
         <th>Emissions ({})</th><th>Percentage</th></tr>",
        inventory.unit
    )?;
    for scope in inventory.scopes() {
        for subtotal in &scope.subtotals {
            for detail in scope
                .details
                .iter()
                .filter(|d| d.category == subtotal.category)
            {
                write_row(
                    f,
                    scope.scope,
                    subtotal.category,
                    &escape_html(&detail.source),
                    detail.emissions,
                    total,
                )?;
            }
        }
        writeln!(
            f,
            "<tr class=\"subtotal\"><td>{}</td><td colspan=\"2\">Total {}</td>\
             <td>{}</td><td>{}</td></tr>",
            scope.scope,
            scope.scope,
            format_thousands(scope.total, 0),
            format_percent(share(scope.total, total))
        )?;
    }
    writeln!(
        f,
        "<tr class=\"total\"><td colspan=\"3\">Total Emissions</td>\
         <td>{}</td><td>{}</td></tr>",
        format_emissions(total),
        format_percent(share(total, total))
    )?;
    writeln!(f, "</table>\n</section>")
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    scope: Scope,
    category: Category,
    source: &str,
    emissions: f64,
    total: f64,
) -> fmt::Result {
    writeln!(
        f,
        "<tr><td>{scope}</td><td>{category}</td><td>{source}</td>\
         <td>{}</td><td>{}</td></tr>",
        format_thousands(emissions, 0),
        format_percent(share(emissions, total))
    )
}

fn write_targets(f: &mut fmt::Formatter<'_>, ctx: &ReportContext<'_>) -> fmt::Result {
    let targets = &ctx.parameters.reduction_targets;
    writeln!(f, "<section>\n<h3>Emission Reduction Targets</h3>\n<ul>")?;
    for (scope, target) in Scope::ALL
        .iter()
        .zip([targets.scope1, targets.scope2, targets.scope3])
    {
        let baseline = ctx.inventory.totals.scope(*scope);
        writeln!(
            f,
            "<li>{scope} Reduction: {}% (target {})</li>",
            format_thousands(target * 100.0, 0),
            format_emissions(baseline * (1.0 - target))
        )?;
    }
    writeln!(f, "</ul>\n</section>")
}

fn write_actions(f: &mut fmt::Formatter<'_>, ctx: &ReportContext<'_>) -> fmt::Result {
    let actions = &ctx.parameters.recommended_actions;
    if actions.is_empty() {
        return Ok(());
    }
    writeln!(f, "<section>\n<h3>Recommended Actions</h3>\n<ol>")?;
    for action in actions {
        writeln!(f, "<li>{}</li>", escape_html(action))?;
    }
    writeln!(f, "</ol>\n</section>")
}

/// Renders the HTML report.
pub fn render_html(ctx: &ReportContext<'_>) -> String {
    HtmlReport(ctx).to_string()
}

/// Writes `report.html` into `dir`, creating it if needed.
pub fn export_html(dir: impl AsRef<Path>, ctx: &ReportContext<'_>) -> ReportResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(HTML_FILE);
    std::fs::write(&path, render_html(ctx))?;
    info!(path = %path.display(), "Wrote HTML report");
    Ok(path)
}
