//! Activity records entered by the user.
//!
//! Each [`ActivityRecord`] variant corresponds to one data-entry form. The
//! variant fixes the record's [`Category`], and the category in turn fixes its
//! [`Scope`], so a record can never be filed under the wrong scope.

use crate::errors::{CarbonError, CarbonResult};
use crate::factors::WasteTreatment;
use crate::units::FuelUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Greenhouse-gas accounting scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Direct emissions from owned or controlled sources.
    Scope1,
    /// Indirect emissions from purchased energy.
    Scope2,
    /// All other indirect emissions in the value chain.
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    pub fn number(&self) -> u8 {
        match self {
            Scope::Scope1 => 1,
            Scope::Scope2 => 2,
            Scope::Scope3 => 3,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope {}", self.number())
    }
}

/// Emission category. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StationaryCombustion,
    MobileCombustion,
    Agriculture,
    IndustrialProcesses,
    PurchasedElectricity,
    BusinessTravel,
    EmployeeCommuting,
    WasteGeneratedInOperations,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::StationaryCombustion,
        Category::MobileCombustion,
        Category::Agriculture,
        Category::IndustrialProcesses,
        Category::PurchasedElectricity,
        Category::BusinessTravel,
        Category::EmployeeCommuting,
        Category::WasteGeneratedInOperations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::StationaryCombustion => "Stationary Combustion",
            Category::MobileCombustion => "Mobile Combustion",
            Category::Agriculture => "Agriculture",
            Category::IndustrialProcesses => "Industrial Processes",
            Category::PurchasedElectricity => "Purchased Electricity",
            Category::BusinessTravel => "Business Travel",
            Category::EmployeeCommuting => "Employee Commuting",
            Category::WasteGeneratedInOperations => "Waste Generated in Operations",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Category::StationaryCombustion
            | Category::MobileCombustion
            | Category::Agriculture
            | Category::IndustrialProcesses => Scope::Scope1,
            Category::PurchasedElectricity => Scope::Scope2,
            Category::BusinessTravel
            | Category::EmployeeCommuting
            | Category::WasteGeneratedInOperations => Scope::Scope3,
        }
    }

    /// Categories belonging to `scope`, in display order.
    pub fn in_scope(scope: Scope) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| c.scope() == scope)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single activity entry.
///
/// Records are immutable once added to a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityRecord {
    /// Fuel burnt in boilers, generators, furnaces, etc.
    StationaryCombustion {
        fuel: String,
        unit: FuelUnit,
        amount: f64,
    },
    /// Company-owned vehicles.
    ///
    /// The factor is keyed on the vehicle type only; fuel type and
    /// consumption are kept for the record but do not affect emissions.
    MobileCombustion {
        vehicle: String,
        #[serde(default)]
        fuel: Option<String>,
        distance_km: f64,
        #[serde(default)]
        fuel_consumption_l_per_100km: Option<f64>,
    },
    Agriculture {
        activity: String,
        quantity: f64,
    },
    IndustrialProcess {
        process: String,
        quantity: f64,
    },
    /// Purchased electricity, keyed by grid region or generation source.
    Electricity {
        source: String,
        region: String,
        consumption_kwh: f64,
    },
    Flight {
        flight_type: String,
        distance_km: f64,
        passengers: u32,
    },
    Hotel {
        city: String,
        nights: u32,
        rooms: u32,
    },
    RoadTravel {
        vehicle: String,
        distance_km: f64,
    },
    /// Employee commuting. `distance_km` is one way.
    Commuting {
        mode: String,
        employees: u32,
        distance_km: f64,
        days: u32,
    },
    Waste {
        waste_type: String,
        treatment: WasteTreatment,
        amount_kg: f64,
    },
}

impl ActivityRecord {
    pub fn category(&self) -> Category {
        match self {
            ActivityRecord::StationaryCombustion { .. } => Category::StationaryCombustion,
            ActivityRecord::MobileCombustion { .. } => Category::MobileCombustion,
            ActivityRecord::Agriculture { .. } => Category::Agriculture,
            ActivityRecord::IndustrialProcess { .. } => Category::IndustrialProcesses,
            ActivityRecord::Electricity { .. } => Category::PurchasedElectricity,
            ActivityRecord::Flight { .. }
            | ActivityRecord::Hotel { .. }
            | ActivityRecord::RoadTravel { .. } => Category::BusinessTravel,
            ActivityRecord::Commuting { .. } => Category::EmployeeCommuting,
            ActivityRecord::Waste { .. } => Category::WasteGeneratedInOperations,
        }
    }

    pub fn scope(&self) -> Scope {
        self.category().scope()
    }

    /// Human readable label for the emission source, used in detail tables.
    pub fn source(&self) -> String {
        match self {
            ActivityRecord::StationaryCombustion { fuel, .. } => fuel.clone(),
            ActivityRecord::MobileCombustion { vehicle, .. } => vehicle.clone(),
            ActivityRecord::Agriculture { activity, .. } => activity.clone(),
            ActivityRecord::IndustrialProcess { process, .. } => process.clone(),
            ActivityRecord::Electricity { source, region, .. } => format!("{source} ({region})"),
            ActivityRecord::Flight { flight_type, .. } => flight_type.clone(),
            ActivityRecord::Hotel { city, .. } => format!("Hotel stay ({city})"),
            ActivityRecord::RoadTravel { vehicle, .. } => vehicle.clone(),
            ActivityRecord::Commuting { mode, .. } => mode.clone(),
            ActivityRecord::Waste {
                waste_type,
                treatment,
                ..
            } => format!("{waste_type} ({treatment})"),
        }
    }

    /// Floating point quantities carried by the record, with their field names.
    fn quantities(&self) -> Vec<(&'static str, f64)> {
        match self {
            ActivityRecord::StationaryCombustion { amount, .. } => vec![("amount", *amount)],
            ActivityRecord::MobileCombustion {
                distance_km,
                fuel_consumption_l_per_100km,
                ..
            } => {
                let mut q = vec![("distance_km", *distance_km)];
                if let Some(c) = fuel_consumption_l_per_100km {
                    q.push(("fuel_consumption_l_per_100km", *c));
                }
                q
            }
            ActivityRecord::Agriculture { quantity, .. }
            | ActivityRecord::IndustrialProcess { quantity, .. } => vec![("quantity", *quantity)],
            ActivityRecord::Electricity {
                consumption_kwh, ..
            } => vec![("consumption_kwh", *consumption_kwh)],
            ActivityRecord::Flight { distance_km, .. }
            | ActivityRecord::RoadTravel { distance_km, .. }
            | ActivityRecord::Commuting { distance_km, .. } => vec![("distance_km", *distance_km)],
            ActivityRecord::Hotel { .. } => vec![],
            ActivityRecord::Waste { amount_kg, .. } => vec![("amount_kg", *amount_kg)],
        }
    }

    /// Checks that every quantity is finite and non-negative.
    ///
    /// Credits are expressed through negative emission factors, never through
    /// negative quantities.
    pub fn validate(&self) -> CarbonResult<()> {
        for (field, value) in self.quantities() {
            if !value.is_finite() || value < 0.0 {
                return Err(CarbonError::InvalidQuantity {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_scopes() {
        assert_eq!(Category::StationaryCombustion.scope(), Scope::Scope1);
        assert_eq!(Category::IndustrialProcesses.scope(), Scope::Scope1);
        assert_eq!(Category::PurchasedElectricity.scope(), Scope::Scope2);
        assert_eq!(Category::WasteGeneratedInOperations.scope(), Scope::Scope3);

        let scope3: Vec<_> = Category::in_scope(Scope::Scope3).collect();
        assert_eq!(
            scope3,
            vec![
                Category::BusinessTravel,
                Category::EmployeeCommuting,
                Category::WasteGeneratedInOperations
            ]
        );
    }

    #[test]
    fn test_travel_records_share_category() {
        let flight = ActivityRecord::Flight {
            flight_type: "Domestic Flight (Nigeria)".to_string(),
            distance_km: 500.0,
            passengers: 1,
        };
        let hotel = ActivityRecord::Hotel {
            city: "Lagos".to_string(),
            nights: 2,
            rooms: 1,
        };
        assert_eq!(flight.category(), Category::BusinessTravel);
        assert_eq!(hotel.category(), Category::BusinessTravel);
        assert_eq!(hotel.source(), "Hotel stay (Lagos)");
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let negative = ActivityRecord::Electricity {
            source: "Grid Electricity".to_string(),
            region: "Lagos/Ibadan Region".to_string(),
            consumption_kwh: -1.0,
        };
        assert!(matches!(
            negative.validate(),
            Err(CarbonError::InvalidQuantity { ref field, .. }) if field == "consumption_kwh"
        ));

        let nan = ActivityRecord::MobileCombustion {
            vehicle: "SUV/4x4".to_string(),
            fuel: None,
            distance_km: 100.0,
            fuel_consumption_l_per_100km: Some(f64::NAN),
        };
        assert!(nan.validate().is_err());

        let zero = ActivityRecord::RoadTravel {
            vehicle: "SUV/4x4".to_string(),
            distance_km: 0.0,
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_record_deserialises_from_tagged_table() {
        let toml_str = r#"
            kind = "waste"
            waste_type = "Plastic Waste"
            treatment = "Recycling"
            amount_kg = 250.0
        "#;
        let record: ActivityRecord = toml::from_str(toml_str).unwrap();
        assert_eq!(
            record,
            ActivityRecord::Waste {
                waste_type: "Plastic Waste".to_string(),
                treatment: WasteTreatment::Recycling,
                amount_kg: 250.0,
            }
        );
        assert_eq!(record.source(), "Plastic Waste (Recycling)");
    }
}
