//! Emission factor registry.
//!
//! The registry maps a typed [`FactorKey`] to a coefficient in kgCO2e per
//! activity unit. It is populated once and never mutated afterwards; the
//! only way to change a coefficient is to build a new registry with
//! [`EmissionFactorRegistry::with_overrides`].
//!
//! # Lookup Convention
//!
//! All lookups are exact. The only built-in fallback is for electricity,
//! where an unknown region resolves to the national grid average.

use super::key::{FactorCategory, FactorKey};
use super::nigeria;
use crate::units::ActivityUnit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A single emission factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Lookup key.
    pub key: FactorKey,
    /// Activity unit the coefficient applies to.
    pub unit: ActivityUnit,
    /// kgCO2e per `unit`. Negative for avoided-emission credits.
    pub coefficient: f64,
}

impl EmissionFactor {
    pub fn new(key: FactorKey, unit: ActivityUnit, coefficient: f64) -> Self {
        Self {
            key,
            unit,
            coefficient,
        }
    }
}

/// Where the coefficient applied to a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSource {
    /// Exact key match.
    Exact,
    /// Electricity region unknown; national average used.
    RegionalAverage,
    /// Key unknown; the configured per-category default used.
    CategoryDefault,
    /// Key unknown and no fallback applies. Contributes zero.
    Unresolved,
}

impl FactorSource {
    pub fn name(&self) -> &'static str {
        match self {
            FactorSource::Exact => "exact",
            FactorSource::RegionalAverage => "regional average",
            FactorSource::CategoryDefault => "category default",
            FactorSource::Unresolved => "unresolved",
        }
    }
}

/// A factor matched by the registry together with how it was matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub factor: &'a EmissionFactor,
    pub source: FactorSource,
}

/// The default Nigerian factor registry.
pub static NIGERIA_FACTORS: LazyLock<EmissionFactorRegistry> =
    LazyLock::new(EmissionFactorRegistry::nigeria);

/// Immutable registry of emission factors.
#[derive(Debug, Clone)]
pub struct EmissionFactorRegistry {
    /// Factors in table order.
    factors: Vec<EmissionFactor>,
    /// Map from key to position in `factors`.
    index: HashMap<FactorKey, usize>,
}

impl Default for EmissionFactorRegistry {
    fn default() -> Self {
        Self::nigeria()
    }
}

impl EmissionFactorRegistry {
    /// Creates a registry populated with the Nigerian factor tables.
    pub fn nigeria() -> Self {
        let mut registry = Self::empty();
        registry.register_fuel_factors();
        registry.register_electricity_factors();
        registry.register_transport_factors();
        registry.register_waste_factors();
        registry.register_agriculture_factors();
        registry.register_industrial_factors();
        registry.register_building_factors();
        registry.register_hotel_factors();
        registry
    }

    /// Creates a registry from an explicit list of factors.
    ///
    /// Later entries replace earlier entries with the same key.
    pub fn from_factors(factors: impl IntoIterator<Item = EmissionFactor>) -> Self {
        let mut registry = Self::empty();
        for factor in factors {
            registry.insert(factor);
        }
        registry
    }

    /// Returns a copy of this registry with `overrides` applied.
    ///
    /// Overrides replace the coefficient and unit of an existing key in
    /// place, or are appended when the key is new.
    pub fn with_overrides(&self, overrides: impl IntoIterator<Item = EmissionFactor>) -> Self {
        let mut registry = self.clone();
        for factor in overrides {
            registry.insert(factor);
        }
        registry
    }

    fn empty() -> Self {
        Self {
            factors: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, factor: EmissionFactor) {
        match self.index.get(&factor.key) {
            Some(&position) => self.factors[position] = factor,
            None => {
                self.index.insert(factor.key.clone(), self.factors.len());
                self.factors.push(factor);
            }
        }
    }

    /// Looks up a factor by exact key.
    pub fn lookup(&self, key: &FactorKey) -> Option<&EmissionFactor> {
        self.index.get(key).map(|&position| &self.factors[position])
    }

    /// Looks up a coefficient by exact key.
    pub fn coefficient(&self, key: &FactorKey) -> Option<f64> {
        self.lookup(key).map(|factor| factor.coefficient)
    }

    /// Resolves an electricity region, falling back to `average_region`.
    ///
    /// Returns `None` only if neither the region nor the average is registered.
    pub fn resolve_electricity(&self, region: &str, average_region: &str) -> Option<Resolution<'_>> {
        if let Some(factor) = self.lookup(&FactorKey::electricity(region)) {
            return Some(Resolution {
                factor,
                source: FactorSource::Exact,
            });
        }
        self.lookup(&FactorKey::electricity(average_region))
            .map(|factor| Resolution {
                factor,
                source: FactorSource::RegionalAverage,
            })
    }

    /// All factors in a table, in registration order.
    pub fn factors(&self, category: FactorCategory) -> impl Iterator<Item = &EmissionFactor> {
        self.factors
            .iter()
            .filter(move |factor| factor.key.category() == category)
    }

    /// All factors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EmissionFactor> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    fn register_fuel_factors(&mut self) {
        for &(fuel, unit, coefficient) in nigeria::FUEL_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::fuel(fuel, unit),
                unit.into(),
                coefficient,
            ));
        }
    }

    fn register_electricity_factors(&mut self) {
        for &(region, coefficient) in nigeria::ELECTRICITY_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::electricity(region),
                ActivityUnit::KilowattHour,
                coefficient,
            ));
        }
    }

    fn register_transport_factors(&mut self) {
        for &(mode, unit, coefficient) in nigeria::TRANSPORT_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::transport(mode),
                unit,
                coefficient,
            ));
        }
    }

    fn register_waste_factors(&mut self) {
        for &(material, treatment, coefficient) in nigeria::WASTE_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::waste(material, treatment),
                ActivityUnit::Kilogram,
                coefficient,
            ));
        }
    }

    fn register_agriculture_factors(&mut self) {
        for &(activity, unit, coefficient) in nigeria::AGRICULTURE_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::agriculture(activity),
                unit,
                coefficient,
            ));
        }
    }

    fn register_industrial_factors(&mut self) {
        for &(process, unit, coefficient) in nigeria::INDUSTRIAL_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::industrial(process),
                unit,
                coefficient,
            ));
        }
    }

    fn register_building_factors(&mut self) {
        for &(building, coefficient) in nigeria::BUILDING_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::building(building),
                ActivityUnit::SquareMetreYear,
                coefficient,
            ));
        }
    }

    fn register_hotel_factors(&mut self) {
        for &(city, coefficient) in nigeria::HOTEL_FACTORS {
            self.insert(EmissionFactor::new(
                FactorKey::hotel(city),
                ActivityUnit::RoomNight,
                coefficient,
            ));
        }
    }
}
