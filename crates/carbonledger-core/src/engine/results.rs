//! Calculation outputs.
//!
//! Results are derived from the ledger on demand and are never stored back
//! into it.

use crate::activity::{Category, Scope};
use crate::factors::{FactorKey, FactorSource};
use crate::units::ActivityUnit;
use serde::{Deserialize, Serialize};

/// Emissions attributed to a single activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    /// Position of the record within its scope in the ledger.
    pub index: usize,
    pub scope: Scope,
    pub category: Category,
    /// Display label of the emission source.
    pub source: String,
    /// Activity quantity the coefficient is applied to, after any
    /// multipliers (passengers, rooms, round trips).
    pub quantity: f64,
    /// Unit of `quantity`. `None` when the factor could not be resolved and
    /// the record does not imply a unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<ActivityUnit>,
    /// The key that was looked up.
    pub factor_key: FactorKey,
    /// kgCO2e per unit actually applied.
    pub coefficient: f64,
    pub factor_source: FactorSource,
    /// `quantity * coefficient`, kgCO2e.
    pub emissions: f64,
}

impl EmissionResult {
    pub fn is_resolved(&self) -> bool {
        self.factor_source != FactorSource::Unresolved
    }
}

/// Emissions summed over one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySubtotal {
    pub category: Category,
    /// Number of records in the category.
    pub records: usize,
    /// kgCO2e. May be negative when credits dominate.
    pub emissions: f64,
}

/// Emissions for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeResult {
    pub scope: Scope,
    /// Sum of `subtotals`, kgCO2e.
    pub total: f64,
    /// One entry per category of the scope, in display order.
    pub subtotals: Vec<CategorySubtotal>,
    /// One entry per record, in ledger order.
    pub details: Vec<EmissionResult>,
}

impl ScopeResult {
    /// Groups `details` into category subtotals and sums them.
    pub(crate) fn from_details(scope: Scope, details: Vec<EmissionResult>) -> Self {
        let subtotals: Vec<CategorySubtotal> = Category::in_scope(scope)
            .map(|category| {
                let mut records = 0;
                let mut emissions = 0.0;
                for detail in details.iter().filter(|d| d.category == category) {
                    records += 1;
                    emissions += detail.emissions;
                }
                CategorySubtotal {
                    category,
                    records,
                    emissions,
                }
            })
            .collect();
        let total = subtotals.iter().map(|s| s.emissions).sum();

        Self {
            scope,
            total,
            subtotals,
            details,
        }
    }

    /// An empty result for `scope`.
    pub fn empty(scope: Scope) -> Self {
        Self::from_details(scope, Vec::new())
    }

    pub fn subtotal(&self, category: Category) -> Option<&CategorySubtotal> {
        self.subtotals.iter().find(|s| s.category == category)
    }
}

/// Totals across the three scopes, kgCO2e.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrandTotal {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    pub total: f64,
}

impl GrandTotal {
    pub fn scope(&self, scope: Scope) -> f64 {
        match scope {
            Scope::Scope1 => self.scope1,
            Scope::Scope2 => self.scope2,
            Scope::Scope3 => self.scope3,
        }
    }
}

/// Complete calculation output for a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub scope1: ScopeResult,
    pub scope2: ScopeResult,
    pub scope3: ScopeResult,
    pub totals: GrandTotal,
    /// Always "kgCO2e".
    pub unit: String,
}

impl Inventory {
    pub fn scope(&self, scope: Scope) -> &ScopeResult {
        match scope {
            Scope::Scope1 => &self.scope1,
            Scope::Scope2 => &self.scope2,
            Scope::Scope3 => &self.scope3,
        }
    }

    pub fn scopes(&self) -> impl Iterator<Item = &ScopeResult> {
        [&self.scope1, &self.scope2, &self.scope3].into_iter()
    }

    /// Every per-record result, scope by scope.
    pub fn details(&self) -> impl Iterator<Item = &EmissionResult> {
        self.scopes().flat_map(|s| s.details.iter())
    }

    /// Records whose factor could not be resolved.
    pub fn unresolved(&self) -> impl Iterator<Item = &EmissionResult> {
        self.details().filter(|d| !d.is_resolved())
    }

    pub fn category_total(&self, category: Category) -> f64 {
        self.scope(category.scope())
            .subtotal(category)
            .map(|s| s.emissions)
            .unwrap_or(0.0)
    }

    /// The category with the largest positive subtotal.
    pub fn largest_category(&self) -> Option<&CategorySubtotal> {
        self.scopes()
            .flat_map(|s| s.subtotals.iter())
            .filter(|s| s.emissions > 0.0)
            .max_by(|a, b| a.emissions.total_cmp(&b.emissions))
    }
}
