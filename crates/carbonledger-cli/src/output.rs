//! Plain text rendering for the terminal.

use carbonledger_core::factors::{EmissionFactorRegistry, FactorCategory};
use carbonledger_report::format::{format_optional, format_percent, format_thousands};
use carbonledger_report::tables::{detail_rows, factor_rows, render_text_table, summary_rows};
use carbonledger_report::ReportContext;

pub fn render_results(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    let inventory = ctx.inventory;
    let metrics = &ctx.metrics;

    out.push_str(&format!("{}\n", ctx.organization_name()));
    if let Some(organization) = ctx.organization {
        out.push_str(&format!("Reporting period: {}\n", organization.reporting_period));
    }
    out.push_str(&format!("Calculated: {}\n\n", ctx.calculation_date()));

    let rows: Vec<Vec<String>> = summary_rows(inventory)
        .into_iter()
        .map(|r| vec![r.category, format_thousands(r.value, 2), r.unit])
        .collect();
    out.push_str(&render_text_table(&["Category", "Value", "Unit"], &rows));

    for scope in inventory.scopes() {
        out.push_str(&format!(
            "\n{} ({} kgCO2e)\n",
            scope.scope,
            format_thousands(scope.total, 2)
        ));
        if scope.details.is_empty() {
            out.push_str("No activity recorded\n");
            continue;
        }
        let rows: Vec<Vec<String>> = detail_rows(scope)
            .into_iter()
            .map(|r| {
                vec![
                    r.category,
                    r.source,
                    format!("{} {}", format_thousands(r.quantity, 2), r.unit),
                    r.coefficient.to_string(),
                    format_thousands(r.emissions, 2),
                ]
            })
            .collect();
        out.push_str(&render_text_table(
            &["Category", "Source", "Quantity", "Factor", "kgCO2e"],
            &rows,
        ));
    }

    out.push_str("\nMetrics\n");
    let rows = vec![
        vec![
            "Equivalent cars (per year)".to_string(),
            format_optional(metrics.car_years, 1),
        ],
        vec![
            "Trees needed to offset".to_string(),
            format_optional(metrics.trees_needed, 0),
        ],
        vec![
            "Intensity (tCO2e/₦ million revenue)".to_string(),
            format_optional(metrics.revenue_intensity, 3),
        ],
        vec![
            "Intensity (kgCO2e/employee)".to_string(),
            format_optional(metrics.employee_intensity, 1),
        ],
        vec![
            "Commuting share of Scope 3".to_string(),
            format_percent(metrics.commuting_share_of_scope3),
        ],
    ];
    out.push_str(&render_text_table(&["Metric", "Value"], &rows));

    let unresolved: Vec<_> = inventory.unresolved().collect();
    if !unresolved.is_empty() {
        out.push_str("\nWarning: no emission factor for these records (counted as zero)\n");
        for detail in unresolved {
            out.push_str(&format!("  {} / {}\n", detail.category, detail.source));
        }
    }
    out
}

pub fn render_factors(
    registry: &EmissionFactorRegistry,
    category: Option<FactorCategory>,
) -> String {
    let rows: Vec<Vec<String>> = factor_rows(registry, category)
        .into_iter()
        .map(|r| {
            vec![
                r.category.to_string(),
                r.name,
                r.coefficient.to_string(),
                r.unit,
            ]
        })
        .collect();
    render_text_table(&["Category", "Name", "Factor", "Unit"], &rows)
}
