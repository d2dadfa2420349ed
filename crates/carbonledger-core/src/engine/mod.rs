//! The emissions engine turns ledger records into emissions.
//!
//! Every record is resolved to a coefficient in the registry and multiplied
//! by its activity quantity. Per-record results are grouped into category
//! subtotals, subtotals into a scope total, and the three scope totals into
//! a grand total. The calculation is a stateless fold, so the numeric result
//! does not depend on record order.
//!
//! # Example
//!
//! ```
//! use carbonledger_core::activity::ActivityRecord;
//! use carbonledger_core::config::EngineConfig;
//! use carbonledger_core::engine::EmissionsEngine;
//! use carbonledger_core::factors::NIGERIA_FACTORS;
//! use carbonledger_core::ledger::ActivityLedger;
//!
//! let mut ledger = ActivityLedger::new();
//! ledger
//!     .push(ActivityRecord::Flight {
//!         flight_type: "Domestic Flight (Nigeria)".to_string(),
//!         distance_km: 500.0,
//!         passengers: 3,
//!     })
//!     .unwrap();
//!
//! let config = EngineConfig::default();
//! let engine = EmissionsEngine::new(&NIGERIA_FACTORS, &config);
//! let inventory = engine.compute_inventory(&ledger).unwrap();
//! assert_eq!(inventory.totals.scope3, 375.0);
//! ```

mod resolve;
mod results;

pub use results::{CategorySubtotal, EmissionResult, GrandTotal, Inventory, ScopeResult};

use crate::activity::{ActivityRecord, Scope};
use crate::config::EngineConfig;
use crate::errors::{CarbonError, CarbonResult};
use crate::factors::EmissionFactorRegistry;
use crate::ledger::ActivityLedger;
use tracing::debug;

/// Unit of every emissions figure produced by the engine.
pub const EMISSIONS_UNIT: &str = "kgCO2e";

/// Computes emissions against a registry with a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct EmissionsEngine<'a> {
    registry: &'a EmissionFactorRegistry,
    config: &'a EngineConfig,
}

impl<'a> EmissionsEngine<'a> {
    pub fn new(registry: &'a EmissionFactorRegistry, config: &'a EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Emissions for a single record at position `index` in its scope.
    pub fn compute_emission(
        &self,
        index: usize,
        record: &ActivityRecord,
    ) -> CarbonResult<EmissionResult> {
        let resolved = resolve::resolve(record, self.registry, self.config)?;
        let emissions = resolved.emissions();
        Ok(EmissionResult {
            index,
            scope: record.scope(),
            category: record.category(),
            source: record.source(),
            quantity: resolved.quantity,
            unit: resolved.unit,
            factor_key: resolved.key,
            coefficient: resolved.coefficient,
            factor_source: resolved.source,
            emissions,
        })
    }

    /// Emissions for all records of one scope.
    ///
    /// Every record must belong to `scope`.
    pub fn compute_scope(&self, scope: Scope, records: &[ActivityRecord]) -> CarbonResult<ScopeResult> {
        let details = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let category = record.category();
                if category.scope() != scope {
                    return Err(CarbonError::ScopeMismatch {
                        expected: scope,
                        actual: category.scope(),
                        category,
                    });
                }
                self.compute_emission(index, record)
            })
            .collect::<CarbonResult<Vec<_>>>()?;

        let result = ScopeResult::from_details(scope, details);
        debug!(scope = %scope, records = records.len(), total = result.total, "Computed scope");
        Ok(result)
    }

    /// Emissions for every scope of a ledger.
    pub fn compute_inventory(&self, ledger: &ActivityLedger) -> CarbonResult<Inventory> {
        let scope1 = self.compute_scope(Scope::Scope1, ledger.records(Scope::Scope1))?;
        let scope2 = self.compute_scope(Scope::Scope2, ledger.records(Scope::Scope2))?;
        let scope3 = self.compute_scope(Scope::Scope3, ledger.records(Scope::Scope3))?;
        let totals = compute_grand_total(scope1.total, scope2.total, scope3.total);

        Ok(Inventory {
            scope1,
            scope2,
            scope3,
            totals,
            unit: EMISSIONS_UNIT.to_string(),
        })
    }
}

/// Sums three scope totals.
pub fn compute_grand_total(scope1: f64, scope2: f64, scope3: f64) -> GrandTotal {
    GrandTotal {
        scope1,
        scope2,
        scope3,
        total: scope1 + scope2 + scope3,
    }
}
