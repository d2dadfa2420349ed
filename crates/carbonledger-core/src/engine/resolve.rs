//! Per-record coefficient resolution.

use crate::activity::ActivityRecord;
use crate::config::{EngineConfig, FallbackPolicy};
use crate::errors::{CarbonError, CarbonResult};
use crate::factors::{EmissionFactorRegistry, FactorKey, FactorSource};
use crate::units::ActivityUnit;
use tracing::warn;

/// The coefficient and activity quantity for one record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolved {
    pub key: FactorKey,
    pub quantity: f64,
    pub unit: Option<ActivityUnit>,
    pub coefficient: f64,
    pub source: FactorSource,
}

impl Resolved {
    pub fn emissions(&self) -> f64 {
        self.quantity * self.coefficient
    }
}

/// How a record maps onto the registry.
struct Lookup {
    key: FactorKey,
    quantity: f64,
    /// Unit implied by the record itself, if any.
    unit: Option<ActivityUnit>,
    /// Coefficient used under [`FallbackPolicy::CategoryDefault`].
    default: Option<f64>,
}

fn lookup_for(record: &ActivityRecord, config: &EngineConfig) -> Lookup {
    let defaults = &config.category_defaults;
    match record {
        ActivityRecord::StationaryCombustion { fuel, unit, amount } => Lookup {
            key: FactorKey::fuel(fuel.as_str(), *unit),
            quantity: *amount,
            unit: Some((*unit).into()),
            default: None,
        },
        ActivityRecord::MobileCombustion {
            vehicle,
            distance_km,
            ..
        } => Lookup {
            key: FactorKey::transport(vehicle.as_str()),
            quantity: *distance_km,
            unit: Some(ActivityUnit::Kilometre),
            default: None,
        },
        ActivityRecord::Agriculture { activity, quantity } => Lookup {
            key: FactorKey::agriculture(activity.as_str()),
            quantity: *quantity,
            unit: None,
            default: None,
        },
        ActivityRecord::IndustrialProcess { process, quantity } => Lookup {
            key: FactorKey::industrial(process.as_str()),
            quantity: *quantity,
            unit: None,
            default: None,
        },
        ActivityRecord::Electricity {
            region,
            consumption_kwh,
            ..
        } => Lookup {
            key: FactorKey::electricity(region.as_str()),
            quantity: *consumption_kwh,
            unit: Some(ActivityUnit::KilowattHour),
            default: None,
        },
        ActivityRecord::Flight {
            flight_type,
            distance_km,
            passengers,
        } => Lookup {
            key: FactorKey::transport(flight_type.as_str()),
            quantity: distance_km * f64::from(*passengers),
            unit: Some(ActivityUnit::PassengerKilometre),
            default: Some(defaults.flight),
        },
        ActivityRecord::Hotel {
            city,
            nights,
            rooms,
        } => Lookup {
            key: FactorKey::hotel(city.as_str()),
            quantity: f64::from(*nights) * f64::from(*rooms),
            unit: Some(ActivityUnit::RoomNight),
            default: Some(defaults.hotel),
        },
        ActivityRecord::RoadTravel {
            vehicle,
            distance_km,
        } => Lookup {
            key: FactorKey::transport(vehicle.as_str()),
            quantity: *distance_km,
            unit: Some(ActivityUnit::Kilometre),
            default: Some(defaults.road),
        },
        // Round trip: each commuting day covers the one-way distance twice.
        ActivityRecord::Commuting {
            mode,
            employees,
            distance_km,
            days,
        } => Lookup {
            key: FactorKey::transport(mode.as_str()),
            quantity: distance_km * f64::from(*employees) * f64::from(*days) * 2.0,
            unit: Some(ActivityUnit::Kilometre),
            default: Some(defaults.commuting),
        },
        ActivityRecord::Waste {
            waste_type,
            treatment,
            amount_kg,
        } => Lookup {
            key: FactorKey::waste(waste_type.as_str(), *treatment),
            quantity: *amount_kg,
            unit: Some(ActivityUnit::Kilogram),
            default: None,
        },
    }
}

/// Resolves the coefficient for `record`.
///
/// Unmatched keys are logged and either fail (strict mode), use the category
/// default, or contribute zero.
pub(crate) fn resolve(
    record: &ActivityRecord,
    registry: &EmissionFactorRegistry,
    config: &EngineConfig,
) -> CarbonResult<Resolved> {
    let lookup = lookup_for(record, config);

    let matched = match &lookup.key {
        FactorKey::Electricity { region } => registry
            .resolve_electricity(region, &config.national_average_region)
            .map(|resolution| {
                if resolution.source == FactorSource::RegionalAverage {
                    warn!(
                        region = %region,
                        average = %config.national_average_region,
                        coefficient = resolution.factor.coefficient,
                        "Electricity region not found; using national average"
                    );
                }
                (resolution.factor, resolution.source)
            }),
        key => registry.lookup(key).map(|factor| (factor, FactorSource::Exact)),
    };

    if let Some((factor, source)) = matched {
        return Ok(Resolved {
            key: lookup.key,
            quantity: lookup.quantity,
            unit: Some(factor.unit),
            coefficient: factor.coefficient,
            source,
        });
    }

    let category = record.category();
    if config.strict {
        return Err(CarbonError::UnresolvedFactor {
            category,
            key: lookup.key.to_string(),
        });
    }

    let (coefficient, source) = match (config.fallback, lookup.default) {
        (FallbackPolicy::CategoryDefault, Some(default)) => (default, FactorSource::CategoryDefault),
        _ => (0.0, FactorSource::Unresolved),
    };
    warn!(
        category = %category,
        key = %lookup.key,
        quantity = lookup.quantity,
        fallback = coefficient,
        "No emission factor found for record"
    );

    Ok(Resolved {
        key: lookup.key,
        quantity: lookup.quantity,
        unit: lookup.unit,
        coefficient,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::WasteTreatment;
    use crate::units::FuelUnit;
    use is_close::is_close;

    fn registry() -> EmissionFactorRegistry {
        EmissionFactorRegistry::nigeria()
    }

    #[test]
    fn test_stationary_combustion_keys_on_fuel_and_unit() {
        let record = ActivityRecord::StationaryCombustion {
            fuel: "Natural Gas (NG)".to_string(),
            unit: FuelUnit::KilowattHour,
            amount: 1000.0,
        };
        let resolved = resolve(&record, &registry(), &EngineConfig::default()).unwrap();
        assert_eq!(resolved.source, FactorSource::Exact);
        assert_eq!(resolved.unit, Some(ActivityUnit::KilowattHour));
        assert!(is_close!(resolved.coefficient, 0.202));
        assert!(is_close!(resolved.emissions(), 202.0));
    }

    #[test]
    fn test_mobile_combustion_ignores_fuel() {
        let petrol = ActivityRecord::MobileCombustion {
            vehicle: "SUV/4x4".to_string(),
            fuel: Some("Petrol (PMS)".to_string()),
            distance_km: 10_000.0,
            fuel_consumption_l_per_100km: Some(12.0),
        };
        let diesel = ActivityRecord::MobileCombustion {
            vehicle: "SUV/4x4".to_string(),
            fuel: Some("Diesel (AGO)".to_string()),
            distance_km: 10_000.0,
            fuel_consumption_l_per_100km: Some(9.0),
        };
        let config = EngineConfig::default();
        let a = resolve(&petrol, &registry(), &config).unwrap();
        let b = resolve(&diesel, &registry(), &config).unwrap();
        assert_eq!(a, b);
        assert!(is_close!(a.emissions(), 3200.0));
    }

    #[test]
    fn test_hotel_multiplies_nights_and_rooms() {
        let record = ActivityRecord::Hotel {
            city: "Lagos".to_string(),
            nights: 3,
            rooms: 2,
        };
        let resolved = resolve(&record, &registry(), &EngineConfig::default()).unwrap();
        assert!(is_close!(resolved.quantity, 6.0));
        assert!(is_close!(resolved.emissions(), 150.0));
    }

    #[test]
    fn test_unknown_city_zero_by_default() {
        let record = ActivityRecord::Hotel {
            city: "Jos".to_string(),
            nights: 2,
            rooms: 1,
        };
        let resolved = resolve(&record, &registry(), &EngineConfig::default()).unwrap();
        assert_eq!(resolved.source, FactorSource::Unresolved);
        assert_eq!(resolved.emissions(), 0.0);
        assert_eq!(resolved.unit, Some(ActivityUnit::RoomNight));
    }

    #[test]
    fn test_unknown_city_category_default() {
        let record = ActivityRecord::Hotel {
            city: "Jos".to_string(),
            nights: 2,
            rooms: 1,
        };
        let config = EngineConfig {
            fallback: FallbackPolicy::CategoryDefault,
            ..EngineConfig::default()
        };
        let resolved = resolve(&record, &registry(), &config).unwrap();
        assert_eq!(resolved.source, FactorSource::CategoryDefault);
        assert!(is_close!(resolved.emissions(), 40.0));
    }

    fn category_default_config() -> EngineConfig {
        EngineConfig {
            fallback: FallbackPolicy::CategoryDefault,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_unknown_flight_category_default() {
        let record = ActivityRecord::Flight {
            flight_type: "Charter Flight".to_string(),
            distance_km: 100.0,
            passengers: 2,
        };
        let resolved = resolve(&record, &registry(), &category_default_config()).unwrap();
        assert_eq!(resolved.source, FactorSource::CategoryDefault);
        assert!(is_close!(resolved.coefficient, 0.25));
        assert!(is_close!(resolved.emissions(), 50.0));
    }

    #[test]
    fn test_unknown_road_vehicle_category_default() {
        let record = ActivityRecord::RoadTravel {
            vehicle: "Okada".to_string(),
            distance_km: 100.0,
        };
        let resolved = resolve(&record, &registry(), &category_default_config()).unwrap();
        assert_eq!(resolved.source, FactorSource::CategoryDefault);
        assert!(is_close!(resolved.emissions(), 20.0));
    }

    #[test]
    fn test_unknown_commuting_mode_category_default() {
        let record = ActivityRecord::Commuting {
            mode: "Keke Napep".to_string(),
            employees: 5,
            distance_km: 10.0,
            days: 20,
        };
        let resolved = resolve(&record, &registry(), &category_default_config()).unwrap();
        assert_eq!(resolved.source, FactorSource::CategoryDefault);
        assert!(is_close!(resolved.quantity, 2000.0));
        assert!(is_close!(resolved.emissions(), 400.0));
    }

    #[test]
    fn test_unknown_company_vehicle_has_no_category_default() {
        let record = ActivityRecord::MobileCombustion {
            vehicle: "Danfo Bus".to_string(),
            fuel: None,
            distance_km: 1000.0,
            fuel_consumption_l_per_100km: None,
        };
        let resolved = resolve(&record, &registry(), &category_default_config()).unwrap();
        assert_eq!(resolved.source, FactorSource::Unresolved);
        assert_eq!(resolved.coefficient, 0.0);
        assert_eq!(resolved.emissions(), 0.0);
    }

    #[test]
    fn test_waste_has_no_category_default() {
        let record = ActivityRecord::Waste {
            waste_type: "Organic Waste".to_string(),
            treatment: WasteTreatment::Incineration,
            amount_kg: 100.0,
        };
        let config = EngineConfig {
            fallback: FallbackPolicy::CategoryDefault,
            ..EngineConfig::default()
        };
        let resolved = resolve(&record, &registry(), &config).unwrap();
        assert_eq!(resolved.source, FactorSource::Unresolved);
        assert_eq!(resolved.emissions(), 0.0);
    }

    #[test]
    fn test_strict_mode_errors() {
        let record = ActivityRecord::Agriculture {
            activity: "Yam Cultivation".to_string(),
            quantity: 3.0,
        };
        let config = EngineConfig {
            strict: true,
            ..EngineConfig::default()
        };
        let err = resolve(&record, &registry(), &config).unwrap_err();
        assert!(matches!(
            err,
            CarbonError::UnresolvedFactor { ref key, .. } if key == "Yam Cultivation"
        ));
    }

    #[test]
    fn test_regional_average_is_not_an_error_in_strict_mode() {
        let record = ActivityRecord::Electricity {
            source: "Grid Electricity".to_string(),
            region: "Somewhere".to_string(),
            consumption_kwh: 100.0,
        };
        let config = EngineConfig {
            strict: true,
            ..EngineConfig::default()
        };
        let resolved = resolve(&record, &registry(), &config).unwrap();
        assert_eq!(resolved.source, FactorSource::RegionalAverage);
        assert!(is_close!(resolved.emissions(), 55.0));
    }
}
