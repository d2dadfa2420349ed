//! Activity units and the aliases accepted when parsing them.
//!
//! Emission factors are always expressed in kgCO2e per activity unit. Fuel
//! factors are additionally keyed by the unit the fuel was measured in, so
//! [`FuelUnit`] forms part of a fuel [`FactorKey`](crate::factors::FactorKey).
//! The other categories have a single fixed denominator described by
//! [`ActivityUnit`].
//!
//! # Supported Fuel Unit Notation
//!
//! | Notation | Unit |
//! |----------|------|
//! | `m³`, `m3`, `m^3`, `cubic metre` | Cubic metres |
//! | `litre`, `litres`, `liter`, `l`, `L` | Litres |
//! | `kg`, `kilogram`, `kilograms` | Kilograms |
//! | `kWh`, `kwh` | Kilowatt hours |
//!
//! Surrounding whitespace is ignored.

use crate::errors::CarbonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which a fuel quantity was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FuelUnit {
    CubicMetre,
    Litre,
    Kilogram,
    KilowattHour,
}

/// All fuel unit aliases, matched after trimming.
static FUEL_UNIT_ALIASES: &[(&str, FuelUnit)] = &[
    ("m³", FuelUnit::CubicMetre),
    ("m3", FuelUnit::CubicMetre),
    ("m^3", FuelUnit::CubicMetre),
    ("cubic metre", FuelUnit::CubicMetre),
    ("cubic metres", FuelUnit::CubicMetre),
    ("litre", FuelUnit::Litre),
    ("litres", FuelUnit::Litre),
    ("liter", FuelUnit::Litre),
    ("liters", FuelUnit::Litre),
    ("l", FuelUnit::Litre),
    ("L", FuelUnit::Litre),
    ("kg", FuelUnit::Kilogram),
    ("kilogram", FuelUnit::Kilogram),
    ("kilograms", FuelUnit::Kilogram),
    ("kWh", FuelUnit::KilowattHour),
    ("kwh", FuelUnit::KilowattHour),
];

impl FuelUnit {
    /// Canonical symbol used in factor tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            FuelUnit::CubicMetre => "m³",
            FuelUnit::Litre => "litre",
            FuelUnit::Kilogram => "kg",
            FuelUnit::KilowattHour => "kWh",
        }
    }
}

impl FromStr for FuelUnit {
    type Err = CarbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FUEL_UNIT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| CarbonError::UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for FuelUnit {
    type Error = CarbonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FuelUnit> for String {
    fn from(unit: FuelUnit) -> Self {
        unit.symbol().to_string()
    }
}

impl fmt::Display for FuelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Denominator of an emission factor (the "per unit" in kgCO2e per unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityUnit {
    CubicMetre,
    Litre,
    Kilogram,
    KilowattHour,
    Kilometre,
    PassengerKilometre,
    RoomNight,
    Hectare,
    HeadYear,
    HundredBirdsYear,
    Tonne,
    MillionNaira,
    SquareMetreYear,
}

impl ActivityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityUnit::CubicMetre => "m³",
            ActivityUnit::Litre => "litre",
            ActivityUnit::Kilogram => "kg",
            ActivityUnit::KilowattHour => "kWh",
            ActivityUnit::Kilometre => "km",
            ActivityUnit::PassengerKilometre => "passenger-km",
            ActivityUnit::RoomNight => "room-night",
            ActivityUnit::Hectare => "hectare",
            ActivityUnit::HeadYear => "head/year",
            ActivityUnit::HundredBirdsYear => "100 birds/year",
            ActivityUnit::Tonne => "tonne",
            ActivityUnit::MillionNaira => "₦ million",
            ActivityUnit::SquareMetreYear => "m²/year",
        }
    }

    /// Label of a factor expressed in this unit, e.g. `kgCO2e/kWh`.
    pub fn factor_label(&self) -> String {
        format!("kgCO2e/{}", self.symbol())
    }
}

impl From<FuelUnit> for ActivityUnit {
    fn from(unit: FuelUnit) -> Self {
        match unit {
            FuelUnit::CubicMetre => ActivityUnit::CubicMetre,
            FuelUnit::Litre => ActivityUnit::Litre,
            FuelUnit::Kilogram => ActivityUnit::Kilogram,
            FuelUnit::KilowattHour => ActivityUnit::KilowattHour,
        }
    }
}

impl fmt::Display for ActivityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_unit_aliases() {
        assert_eq!("m3".parse::<FuelUnit>().unwrap(), FuelUnit::CubicMetre);
        assert_eq!("m³".parse::<FuelUnit>().unwrap(), FuelUnit::CubicMetre);
        assert_eq!("litres".parse::<FuelUnit>().unwrap(), FuelUnit::Litre);
        assert_eq!("  kWh ".parse::<FuelUnit>().unwrap(), FuelUnit::KilowattHour);
        assert_eq!("kg".parse::<FuelUnit>().unwrap(), FuelUnit::Kilogram);
    }

    #[test]
    fn test_unknown_fuel_unit() {
        let err = "gallon".parse::<FuelUnit>().unwrap_err();
        assert!(matches!(err, CarbonError::UnknownUnit(ref u) if u == "gallon"));
    }

    #[test]
    fn test_fuel_unit_serde_uses_symbol() {
        let json = serde_json::to_string(&FuelUnit::CubicMetre).unwrap();
        assert_eq!(json, "\"m³\"");
        let parsed: FuelUnit = serde_json::from_str("\"litres\"").unwrap();
        assert_eq!(parsed, FuelUnit::Litre);
        assert!(serde_json::from_str::<FuelUnit>("\"barrel\"").is_err());
    }

    #[test]
    fn test_factor_label() {
        assert_eq!(ActivityUnit::KilowattHour.factor_label(), "kgCO2e/kWh");
        assert_eq!(ActivityUnit::from(FuelUnit::Litre).factor_label(), "kgCO2e/litre");
    }
}
