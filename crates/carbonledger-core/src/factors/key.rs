use crate::units::FuelUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Treatment method for a waste stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteTreatment {
    Landfill,
    Recycling,
    Composting,
    Incineration,
    #[serde(rename = "Proper Disposal", alias = "proper_disposal")]
    ProperDisposal,
}

impl WasteTreatment {
    pub fn name(&self) -> &'static str {
        match self {
            WasteTreatment::Landfill => "Landfill",
            WasteTreatment::Recycling => "Recycling",
            WasteTreatment::Composting => "Composting",
            WasteTreatment::Incineration => "Incineration",
            WasteTreatment::ProperDisposal => "Proper Disposal",
        }
    }
}

impl fmt::Display for WasteTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Table a factor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Fuel,
    Electricity,
    Transport,
    Waste,
    Agriculture,
    Industrial,
    Building,
    Hotel,
}

impl FactorCategory {
    pub const ALL: [FactorCategory; 8] = [
        FactorCategory::Fuel,
        FactorCategory::Electricity,
        FactorCategory::Transport,
        FactorCategory::Waste,
        FactorCategory::Agriculture,
        FactorCategory::Industrial,
        FactorCategory::Building,
        FactorCategory::Hotel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FactorCategory::Fuel => "Fuel",
            FactorCategory::Electricity => "Electricity",
            FactorCategory::Transport => "Transport",
            FactorCategory::Waste => "Waste",
            FactorCategory::Agriculture => "Agriculture",
            FactorCategory::Industrial => "Industrial",
            FactorCategory::Building => "Building",
            FactorCategory::Hotel => "Hotel",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed lookup key for an emission factor.
///
/// Names are matched exactly. Fuel and waste keys carry their second
/// discriminant (unit, treatment) as a closed enum rather than as part of a
/// concatenated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum FactorKey {
    Fuel { fuel: String, unit: FuelUnit },
    Electricity { region: String },
    Transport { mode: String },
    Waste {
        material: String,
        treatment: WasteTreatment,
    },
    Agriculture { activity: String },
    Industrial { process: String },
    Building { building: String },
    Hotel { city: String },
}

impl FactorKey {
    pub fn fuel(fuel: impl Into<String>, unit: FuelUnit) -> Self {
        FactorKey::Fuel {
            fuel: fuel.into(),
            unit,
        }
    }

    pub fn electricity(region: impl Into<String>) -> Self {
        FactorKey::Electricity {
            region: region.into(),
        }
    }

    pub fn transport(mode: impl Into<String>) -> Self {
        FactorKey::Transport { mode: mode.into() }
    }

    pub fn waste(material: impl Into<String>, treatment: WasteTreatment) -> Self {
        FactorKey::Waste {
            material: material.into(),
            treatment,
        }
    }

    pub fn agriculture(activity: impl Into<String>) -> Self {
        FactorKey::Agriculture {
            activity: activity.into(),
        }
    }

    pub fn industrial(process: impl Into<String>) -> Self {
        FactorKey::Industrial {
            process: process.into(),
        }
    }

    pub fn building(building: impl Into<String>) -> Self {
        FactorKey::Building {
            building: building.into(),
        }
    }

    pub fn hotel(city: impl Into<String>) -> Self {
        FactorKey::Hotel { city: city.into() }
    }

    pub fn category(&self) -> FactorCategory {
        match self {
            FactorKey::Fuel { .. } => FactorCategory::Fuel,
            FactorKey::Electricity { .. } => FactorCategory::Electricity,
            FactorKey::Transport { .. } => FactorCategory::Transport,
            FactorKey::Waste { .. } => FactorCategory::Waste,
            FactorKey::Agriculture { .. } => FactorCategory::Agriculture,
            FactorKey::Industrial { .. } => FactorCategory::Industrial,
            FactorKey::Building { .. } => FactorCategory::Building,
            FactorKey::Hotel { .. } => FactorCategory::Hotel,
        }
    }

    /// The primary name of the key (fuel, region, mode, ...).
    pub fn name(&self) -> &str {
        match self {
            FactorKey::Fuel { fuel, .. } => fuel,
            FactorKey::Electricity { region } => region,
            FactorKey::Transport { mode } => mode,
            FactorKey::Waste { material, .. } => material,
            FactorKey::Agriculture { activity } => activity,
            FactorKey::Industrial { process } => process,
            FactorKey::Building { building } => building,
            FactorKey::Hotel { city } => city,
        }
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorKey::Fuel { fuel, unit } => write!(f, "{fuel} [{unit}]"),
            FactorKey::Waste {
                material,
                treatment,
            } => write!(f, "{material} ({treatment})"),
            other => f.write_str(other.name()),
        }
    }
}
