//! Tabular views of an inventory and of the factor registry.
//!
//! Rows hold raw numbers; each output format applies its own formatting.

use carbonledger_core::activity::Scope;
use carbonledger_core::engine::{Inventory, ScopeResult};
use carbonledger_core::factors::{EmissionFactorRegistry, FactorCategory};

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub value: f64,
    pub unit: String,
}

/// Total followed by the three scope totals.
pub fn summary_rows(inventory: &Inventory) -> Vec<SummaryRow> {
    let mut rows = vec![SummaryRow {
        category: "Total Emissions".to_string(),
        value: inventory.totals.total,
        unit: inventory.unit.clone(),
    }];
    rows.extend(Scope::ALL.iter().map(|scope| SummaryRow {
        category: format!("{scope} Emissions"),
        value: inventory.totals.scope(*scope),
        unit: inventory.unit.clone(),
    }));
    rows
}

/// One record of a scope detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub category: String,
    pub source: String,
    pub quantity: f64,
    /// Empty when the record has no resolvable unit.
    pub unit: String,
    pub coefficient: f64,
    pub factor_source: String,
    pub emissions: f64,
}

pub fn detail_rows(scope: &ScopeResult) -> Vec<DetailRow> {
    scope
        .details
        .iter()
        .map(|d| DetailRow {
            category: d.category.name().to_string(),
            source: d.source.clone(),
            quantity: d.quantity,
            unit: d.unit.map(|u| u.symbol().to_string()).unwrap_or_default(),
            coefficient: d.coefficient,
            factor_source: d.factor_source.name().to_string(),
            emissions: d.emissions,
        })
        .collect()
}

/// One entry of a factor reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    pub category: FactorCategory,
    pub name: String,
    pub coefficient: f64,
    /// e.g. "kgCO2e/kWh".
    pub unit: String,
}

/// Registry entries grouped by category, optionally restricted to one.
pub fn factor_rows(
    registry: &EmissionFactorRegistry,
    category: Option<FactorCategory>,
) -> Vec<FactorRow> {
    FactorCategory::ALL
        .iter()
        .filter(|c| category.map_or(true, |wanted| wanted == **c))
        .flat_map(|c| registry.factors(*c))
        .map(|f| FactorRow {
            category: f.key.category(),
            name: f.key.to_string(),
            coefficient: f.coefficient,
            unit: f.unit.factor_label(),
        })
        .collect()
}

/// Renders rows as a left-aligned plain text table.
pub fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = render_line(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let mut line = line.join("  ").trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonledger_core::activity::ActivityRecord;
    use carbonledger_core::config::EngineConfig;
    use carbonledger_core::engine::EmissionsEngine;
    use carbonledger_core::factors::WasteTreatment;
    use carbonledger_core::ledger::ActivityLedger;

    fn inventory() -> Inventory {
        let mut ledger = ActivityLedger::new();
        ledger
            .push(ActivityRecord::Flight {
                flight_type: "Domestic Flight (Nigeria)".to_string(),
                distance_km: 500.0,
                passengers: 3,
            })
            .unwrap();
        ledger
            .push(ActivityRecord::Waste {
                waste_type: "Glass".to_string(),
                treatment: WasteTreatment::Composting,
                amount_kg: 10.0,
            })
            .unwrap();
        let registry = EmissionFactorRegistry::nigeria();
        let config = EngineConfig::default();
        EmissionsEngine::new(&registry, &config)
            .compute_inventory(&ledger)
            .unwrap()
    }

    #[test]
    fn test_summary_rows() {
        let rows = summary_rows(&inventory());
        let names: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            [
                "Total Emissions",
                "Scope 1 Emissions",
                "Scope 2 Emissions",
                "Scope 3 Emissions"
            ]
        );
        assert_eq!(rows[0].value, 375.0);
        assert_eq!(rows[3].value, 375.0);
        assert!(rows.iter().all(|r| r.unit == "kgCO2e"));
    }

    #[test]
    fn test_detail_rows() {
        let inventory = inventory();
        let rows = detail_rows(&inventory.scope3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source, "Domestic Flight (Nigeria)");
        assert_eq!(rows[0].quantity, 1500.0);
        assert_eq!(rows[1].factor_source, "unresolved");
        assert_eq!(rows[1].emissions, 0.0);
    }

    #[test]
    fn test_factor_rows_filter() {
        let registry = EmissionFactorRegistry::nigeria();
        let all = factor_rows(&registry, None);
        assert_eq!(all.len(), registry.len());

        let hotels = factor_rows(&registry, Some(FactorCategory::Hotel));
        assert!(!hotels.is_empty());
        assert!(hotels.iter().all(|r| r.category == FactorCategory::Hotel));
        assert!(hotels.iter().any(|r| r.name == "Lagos"));
    }

    #[test]
    fn test_render_text_table() {
        let table = render_text_table(
            &["Category", "Value"],
            &[vec!["Total".to_string(), "1,000".to_string()]],
        );
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Category  Value");
        assert_eq!(lines[1], "--------  -----");
        assert_eq!(lines[2], "Total     1,000");
    }
}
