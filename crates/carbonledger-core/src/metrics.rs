//! Derived metrics for the results screen.
//!
//! Every ratio is `None` when its denominator is zero (or missing), so
//! undefined values never surface as NaN or infinity.

use crate::activity::{Category, Scope};
use crate::config::MetricsParameters;
use crate::engine::Inventory;
use crate::session::Organization;
use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or `None` if the result is not finite.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// `part` as a percentage of `total`.
pub fn share(part: f64, total: f64) -> Option<f64> {
    ratio(part * 100.0, total)
}

/// Headline metrics derived from an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetrics {
    /// kgCO2e.
    pub total: f64,
    /// Equivalent number of passenger cars driven for a year.
    pub car_years: Option<f64>,
    /// Trees needed to absorb the total in a year.
    pub trees_needed: Option<f64>,
    /// tCO2e per ₦ million of annual revenue.
    pub revenue_intensity: Option<f64>,
    /// kgCO2e per employee.
    pub employee_intensity: Option<f64>,
    /// Percentage of the total by scope.
    pub scope_shares: [Option<f64>; 3],
    /// Employee commuting as a percentage of scope 3.
    pub commuting_share_of_scope3: Option<f64>,
}

impl ResultMetrics {
    pub fn compute(
        inventory: &Inventory,
        organization: Option<&Organization>,
        parameters: &MetricsParameters,
    ) -> Self {
        let total = inventory.totals.total;
        let revenue = organization.and_then(|o| o.annual_revenue_million_naira);
        let employees = organization.and_then(|o| o.employees);

        Self {
            total,
            car_years: ratio(total, parameters.car_year_kg),
            trees_needed: ratio(total, parameters.tree_year_kg),
            revenue_intensity: revenue.and_then(|r| ratio(total / 1000.0, r)),
            employee_intensity: employees.and_then(|e| ratio(total, f64::from(e))),
            scope_shares: Scope::ALL.map(|scope| share(inventory.totals.scope(scope), total)),
            commuting_share_of_scope3: share(
                inventory.category_total(Category::EmployeeCommuting),
                inventory.totals.scope3,
            ),
        }
    }

    pub fn scope_share(&self, scope: Scope) -> Option<f64> {
        self.scope_shares[usize::from(scope.number() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityRecord;
    use crate::config::EngineConfig;
    use crate::engine::EmissionsEngine;
    use crate::factors::EmissionFactorRegistry;
    use crate::ledger::ActivityLedger;
    use is_close::is_close;

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(10.0, 0.0), None);
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(10.0, 4.0), Some(2.5));
        assert_eq!(share(0.0, 0.0), None);
        assert_eq!(share(25.0, 100.0), Some(25.0));
    }

    fn inventory() -> Inventory {
        let registry = EmissionFactorRegistry::nigeria();
        let config = EngineConfig::default();
        let mut ledger = ActivityLedger::new();
        ledger
            .push(ActivityRecord::Electricity {
                source: "Grid Electricity".to_string(),
                region: "National Grid Average".to_string(),
                consumption_kwh: 100_000.0,
            })
            .unwrap();
        ledger
            .push(ActivityRecord::Commuting {
                mode: "BRT Bus".to_string(),
                employees: 10,
                distance_km: 15.0,
                days: 240,
            })
            .unwrap();
        EmissionsEngine::new(&registry, &config)
            .compute_inventory(&ledger)
            .unwrap()
    }

    #[test]
    fn test_metrics_without_organization() {
        let inventory = inventory();
        let metrics = ResultMetrics::compute(&inventory, None, &MetricsParameters::default());

        // 55,000 electricity + 5,760 commuting
        assert!(is_close!(metrics.total, 60_760.0));
        assert!(is_close!(metrics.car_years.unwrap(), 60_760.0 / 4200.0));
        assert!(is_close!(metrics.trees_needed.unwrap(), 60_760.0 / 21.0));
        assert_eq!(metrics.revenue_intensity, None);
        assert_eq!(metrics.employee_intensity, None);
        assert_eq!(metrics.scope_share(Scope::Scope1), Some(0.0));
        assert!(is_close!(metrics.commuting_share_of_scope3.unwrap(), 100.0));
    }

    #[test]
    fn test_metrics_with_zero_revenue_are_undefined() {
        let inventory = inventory();
        let organization = Organization {
            annual_revenue_million_naira: Some(0.0),
            employees: Some(50),
            ..Organization::default()
        };
        let metrics = ResultMetrics::compute(
            &inventory,
            Some(&organization),
            &MetricsParameters::default(),
        );
        assert_eq!(metrics.revenue_intensity, None);
        assert!(is_close!(metrics.employee_intensity.unwrap(), 60_760.0 / 50.0));
    }

    #[test]
    fn test_empty_inventory_shares_are_undefined() {
        let registry = EmissionFactorRegistry::nigeria();
        let config = EngineConfig::default();
        let inventory = EmissionsEngine::new(&registry, &config)
            .compute_inventory(&ActivityLedger::new())
            .unwrap();
        let metrics = ResultMetrics::compute(&inventory, None, &MetricsParameters::default());
        assert_eq!(metrics.scope_shares, [None, None, None]);
        assert_eq!(metrics.commuting_share_of_scope3, None);
        assert_eq!(metrics.car_years, Some(0.0));
    }
}
