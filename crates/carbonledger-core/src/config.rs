//! Calculator configuration.
//!
//! Configuration is read from an optional TOML file. Every field has a
//! default, so an empty file (or no file) yields the standard behaviour:
//!
//! ```toml
//! [engine]
//! fallback = "zero"          # or "category_default"
//! strict = false
//! national_average_region = "National Grid Average"
//!
//! [metrics]
//! car_year_kg = 4200.0
//! tree_year_kg = 21.0
//!
//! [report]
//! prepared_by = "Sustainability Office"
//! reduction_targets = { scope1 = 0.3, scope2 = 0.5, scope3 = 0.2 }
//!
//! [[factors]]
//! key = { category = "electricity", region = "Lagos/Ibadan Region" }
//! coefficient = 0.48
//! ```

use crate::errors::CarbonResult;
use crate::factors::{
    EmissionFactor, EmissionFactorRegistry, FactorCategory, FactorKey, NATIONAL_GRID_AVERAGE,
    NIGERIA_FACTORS,
};
use crate::units::ActivityUnit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// What to do when a record's factor key is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Unmatched records contribute zero.
    #[default]
    Zero,
    /// Unmatched travel and commuting records use [`CategoryDefaults`].
    CategoryDefault,
}

/// Per-category coefficients applied under [`FallbackPolicy::CategoryDefault`].
///
/// Categories without an entry here (fuel, company vehicles, waste,
/// agriculture, industrial) still contribute zero when unmatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDefaults {
    /// Flights of unknown type.
    ///
    /// unit: kgCO2e/passenger-km
    /// default: 0.25
    pub flight: f64,

    /// Hotel stays in an unlisted city.
    ///
    /// unit: kgCO2e/room-night
    /// default: 20.0
    pub hotel: f64,

    /// Road travel of unknown type.
    ///
    /// unit: kgCO2e/km
    /// default: 0.2
    pub road: f64,

    /// Commuting by an unlisted mode.
    ///
    /// unit: kgCO2e/km
    /// default: 0.2
    pub commuting: f64,
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        Self {
            flight: 0.25,
            hotel: 20.0,
            road: 0.2,
            commuting: 0.2,
        }
    }
}

/// Engine behaviour for unmatched factor keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fallback: FallbackPolicy,
    /// Fail the calculation on the first unmatched key instead of
    /// substituting a fallback.
    pub strict: bool,
    /// Electricity region used when a record's region is unknown.
    pub national_average_region: String,
    pub category_defaults: CategoryDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::Zero,
            strict: false,
            national_average_region: NATIONAL_GRID_AVERAGE.to_string(),
            category_defaults: CategoryDefaults::default(),
        }
    }
}

/// Constants used for the equivalence metrics on the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsParameters {
    /// Annual emissions of an average passenger car.
    ///
    /// unit: kgCO2e/yr
    /// default: 4200.0
    pub car_year_kg: f64,

    /// Annual uptake of a single mature tree.
    ///
    /// unit: kgCO2e/yr
    /// default: 21.0
    pub tree_year_kg: f64,
}

impl Default for MetricsParameters {
    fn default() -> Self {
        Self {
            car_year_kg: 4200.0,
            tree_year_kg: 21.0,
        }
    }
}

/// Reduction targets as fractions of the baseline (0.3 = 30 %).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionTargets {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

impl Default for ReductionTargets {
    fn default() -> Self {
        Self {
            scope1: 0.3,
            scope2: 0.5,
            scope3: 0.2,
        }
    }
}

/// Settings for the templated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParameters {
    pub prepared_by: String,
    pub reduction_targets: ReductionTargets,
    pub recommended_actions: Vec<String>,
}

impl Default for ReportParameters {
    fn default() -> Self {
        Self {
            prepared_by: "Sustainability Office".to_string(),
            reduction_targets: ReductionTargets::default(),
            recommended_actions: vec![
                "Transition vehicle fleet to CNG/LNG fuel".to_string(),
                "Install solar panels at depots and offices".to_string(),
                "Implement telecommuting policy for staff".to_string(),
                "Optimize route planning for fuel efficiency".to_string(),
                "Establish waste recycling program".to_string(),
            ],
        }
    }
}

/// A user supplied factor that replaces or extends the default tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorOverride {
    pub key: FactorKey,
    pub coefficient: f64,
    /// Defaults to the unit of the replaced factor, or the table's usual
    /// unit for new keys.
    #[serde(default)]
    pub unit: Option<ActivityUnit>,
}

/// Top level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub metrics: MetricsParameters,
    pub report: ReportParameters,
    pub factors: Vec<FactorOverride>,
}

impl Config {
    pub fn from_toml_str(s: &str) -> CarbonResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarbonResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path.as_ref().display(),
            overrides = config.factors.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Builds the factor registry: the default tables plus any overrides.
    pub fn build_registry(&self) -> EmissionFactorRegistry {
        let base: &EmissionFactorRegistry = &NIGERIA_FACTORS;
        let overrides = self.factors.iter().map(|o| {
            let unit = o
                .unit
                .or_else(|| base.lookup(&o.key).map(|existing| existing.unit))
                .unwrap_or_else(|| default_unit(&o.key));
            EmissionFactor::new(o.key.clone(), unit, o.coefficient)
        });
        base.with_overrides(overrides)
    }
}

/// The usual denominator of each factor table.
fn default_unit(key: &FactorKey) -> ActivityUnit {
    match key {
        FactorKey::Fuel { unit, .. } => (*unit).into(),
        _ => match key.category() {
            FactorCategory::Electricity => ActivityUnit::KilowattHour,
            FactorCategory::Transport => ActivityUnit::Kilometre,
            FactorCategory::Waste => ActivityUnit::Kilogram,
            FactorCategory::Agriculture => ActivityUnit::Hectare,
            FactorCategory::Industrial => ActivityUnit::Tonne,
            FactorCategory::Building => ActivityUnit::SquareMetreYear,
            FactorCategory::Hotel => ActivityUnit::RoomNight,
            FactorCategory::Fuel => ActivityUnit::Litre,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine.fallback, FallbackPolicy::Zero);
        assert!(!config.engine.strict);
        assert_eq!(config.engine.national_average_region, "National Grid Average");
        assert!(is_close!(config.metrics.car_year_kg, 4200.0));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            fallback = "category_default"

            [engine.category_defaults]
            hotel = 18.0

            [report]
            prepared_by = "Green Team"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.fallback, FallbackPolicy::CategoryDefault);
        assert!(is_close!(config.engine.category_defaults.hotel, 18.0));
        assert!(is_close!(config.engine.category_defaults.flight, 0.25));
        assert_eq!(config.report.prepared_by, "Green Team");
        assert_eq!(config.report.recommended_actions.len(), 5);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Config::from_toml_str("[engine]\nstrict = \"yes\"").is_err());
    }

    #[test]
    fn test_factor_overrides_build_registry() {
        let config = Config::from_toml_str(
            r#"
            [[factors]]
            key = { category = "electricity", region = "Lagos/Ibadan Region" }
            coefficient = 0.48

            [[factors]]
            key = { category = "hotel", city = "Jos" }
            coefficient = 12.5
            "#,
        )
        .unwrap();
        let registry = config.build_registry();

        let lagos = registry
            .lookup(&FactorKey::electricity("Lagos/Ibadan Region"))
            .unwrap();
        assert!(is_close!(lagos.coefficient, 0.48));
        assert_eq!(lagos.unit, ActivityUnit::KilowattHour);

        let jos = registry.lookup(&FactorKey::hotel("Jos")).unwrap();
        assert_eq!(jos.unit, ActivityUnit::RoomNight);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let serialised = toml::to_string(&config).unwrap();
        let deserialised: Config = toml::from_str(&serialised).unwrap();
        assert_eq!(config, deserialised);
    }
}
