//! Nigeria-specific emission factor tables.
//!
//! All coefficients are in kgCO2e per activity unit and are reproduced from
//! the published national tables without adjustment. Negative values are
//! avoided-emission credits.

use super::key::WasteTreatment;
use crate::units::{ActivityUnit, FuelUnit};

/// Region used when an electricity region is not in the table.
pub const NATIONAL_GRID_AVERAGE: &str = "National Grid Average";

/// Fuel factors: (fuel, unit, kgCO2e per unit).
pub static FUEL_FACTORS: &[(&str, FuelUnit, f64)] = &[
    // Gaseous fuels
    ("Natural Gas (NG)", FuelUnit::CubicMetre, 2.066),
    ("Natural Gas (NG)", FuelUnit::KilowattHour, 0.202),
    ("Liquefied Petroleum Gas (LPG)", FuelUnit::Litre, 1.557),
    ("Liquefied Petroleum Gas (LPG)", FuelUnit::Kilogram, 2.939),
    ("Compressed Natural Gas (CNG)", FuelUnit::Litre, 0.451),
    ("Compressed Natural Gas (CNG)", FuelUnit::CubicMetre, 2.067),
    // Liquid fuels
    ("Diesel (Automotive Gas Oil)", FuelUnit::Litre, 2.661),
    ("Diesel (Automotive Gas Oil)", FuelUnit::Kilogram, 3.204),
    ("Premium Motor Spirit (PMS)", FuelUnit::Litre, 2.340),
    ("Premium Motor Spirit (PMS)", FuelUnit::Kilogram, 3.154),
    ("Dual Purpose Kerosene (DPK)", FuelUnit::Litre, 2.540),
    ("Dual Purpose Kerosene (DPK)", FuelUnit::Kilogram, 3.165),
    ("Aviation Turbine Kerosene (ATK)", FuelUnit::Litre, 2.543),
    ("Aviation Turbine Kerosene (ATK)", FuelUnit::Kilogram, 3.178),
    ("Fuel Oil (Low Sulphur)", FuelUnit::Litre, 3.175),
    ("Fuel Oil (Low Sulphur)", FuelUnit::Kilogram, 3.229),
    // Biofuel blends
    ("Biofuel Blend (B20)", FuelUnit::Litre, 2.320),
    ("Bioethanol (E10)", FuelUnit::Litre, 1.850),
];

/// Grid region or generation source, kgCO2e/kWh.
pub static ELECTRICITY_FACTORS: &[(&str, f64)] = &[
    (NATIONAL_GRID_AVERAGE, 0.55),
    ("Lagos/Ibadan Region", 0.52),
    ("Abuja/Kaduna Region", 0.58),
    ("Port Harcourt/Enugu Region", 0.60),
    ("Kano/Maiduguri Region", 0.62),
    ("Solar Power", 0.05),
    ("Hydro Power", 0.02),
    ("Gas Power Plant", 0.45),
    ("Diesel Generator", 0.85),
    ("Off-grid System", 0.75),
];

/// Vehicle or travel mode.
pub static TRANSPORT_FACTORS: &[(&str, ActivityUnit, f64)] = &[
    // Road
    ("Passenger Car - Small (Petrol)", ActivityUnit::Kilometre, 0.18),
    ("Passenger Car - Medium (Petrol)", ActivityUnit::Kilometre, 0.22),
    ("Passenger Car - Large (Petrol)", ActivityUnit::Kilometre, 0.28),
    ("Passenger Car - Diesel", ActivityUnit::Kilometre, 0.25),
    ("SUV/4x4", ActivityUnit::Kilometre, 0.32),
    ("Minibus (15 seater)", ActivityUnit::Kilometre, 0.45),
    ("Large Bus (50+ seater)", ActivityUnit::Kilometre, 1.20),
    ("Motorcycle (100-150cc)", ActivityUnit::Kilometre, 0.08),
    ("Motorcycle (200cc+)", ActivityUnit::Kilometre, 0.12),
    ("Tricycle (Keke NAPEP)", ActivityUnit::Kilometre, 0.15),
    // Air
    ("Domestic Flight (Nigeria)", ActivityUnit::PassengerKilometre, 0.25),
    ("Regional Flight (West Africa)", ActivityUnit::PassengerKilometre, 0.20),
    ("International Flight (Short-haul)", ActivityUnit::PassengerKilometre, 0.18),
    ("International Flight (Long-haul)", ActivityUnit::PassengerKilometre, 0.15),
    // Public transport
    ("BRT Bus", ActivityUnit::Kilometre, 0.08),
    ("Lagos Ferry", ActivityUnit::Kilometre, 0.05),
    ("Lagos Rail", ActivityUnit::Kilometre, 0.04),
    // Active travel, offered as a commuting mode
    ("Walk/Bicycle", ActivityUnit::Kilometre, 0.0),
];

/// Waste material and treatment, kgCO2e/kg.
pub static WASTE_FACTORS: &[(&str, WasteTreatment, f64)] = &[
    ("Organic Waste", WasteTreatment::Landfill, 0.35),
    ("Organic Waste", WasteTreatment::Composting, 0.05),
    ("Plastic Waste", WasteTreatment::Landfill, 0.15),
    ("Plastic Waste", WasteTreatment::Recycling, -0.20),
    ("Paper/Cardboard", WasteTreatment::Landfill, 0.12),
    ("Paper/Cardboard", WasteTreatment::Recycling, -0.15),
    ("Metal", WasteTreatment::Landfill, 0.08),
    ("Metal", WasteTreatment::Recycling, -0.30),
    ("Glass", WasteTreatment::Landfill, 0.09),
    ("Glass", WasteTreatment::Recycling, -0.10),
    ("E-waste", WasteTreatment::ProperDisposal, -0.25),
    ("E-waste", WasteTreatment::Landfill, 0.40),
];

pub static AGRICULTURE_FACTORS: &[(&str, ActivityUnit, f64)] = &[
    ("Rice Cultivation (per hectare)", ActivityUnit::Hectare, 2500.0),
    ("Livestock - Cattle (per head/year)", ActivityUnit::HeadYear, 2800.0),
    ("Livestock - Sheep/Goat (per head/year)", ActivityUnit::HeadYear, 450.0),
    ("Livestock - Poultry (per 100 birds/year)", ActivityUnit::HundredBirdsYear, 120.0),
    ("Fertilizer Use (N-based, per kg)", ActivityUnit::Kilogram, 7.2),
    ("Fertilizer Use (P-based, per kg)", ActivityUnit::Kilogram, 1.2),
    ("Crop Residue Burning (per hectare)", ActivityUnit::Hectare, 1800.0),
];

pub static INDUSTRIAL_FACTORS: &[(&str, ActivityUnit, f64)] = &[
    ("Cement Production (per tonne)", ActivityUnit::Tonne, 850.0),
    ("Steel Production (per tonne)", ActivityUnit::Tonne, 1800.0),
    ("Ammonia Production (per tonne)", ActivityUnit::Tonne, 1600.0),
    ("Ceramics/Tiles (per tonne)", ActivityUnit::Tonne, 350.0),
    ("Textile Manufacturing (per tonne)", ActivityUnit::Tonne, 2800.0),
    ("Food Processing (per ₦ million revenue)", ActivityUnit::MillionNaira, 150.0),
    ("Beverage Production (per litre)", ActivityUnit::Litre, 0.15),
];

/// Building operations, kgCO2e/m²/year.
pub static BUILDING_FACTORS: &[(&str, f64)] = &[
    ("Office Building (Air-conditioned)", 120.0),
    ("Office Building (Naturally ventilated)", 60.0),
    ("Residential Building (Lagos)", 45.0),
    ("Residential Building (Northern Nigeria)", 55.0),
    ("Hospital/Healthcare", 180.0),
    ("School/Educational", 80.0),
    ("Retail/Shopping Mall", 200.0),
    ("Hotel/Accommodation", 160.0),
];

/// City hotel stays, kgCO2e/room-night.
pub static HOTEL_FACTORS: &[(&str, f64)] = &[
    ("Lagos", 25.0),
    ("Abuja", 22.0),
    ("Port Harcourt", 20.0),
    ("Kano", 18.0),
    ("Ibadan", 16.0),
    ("Enugu", 15.0),
    ("Kaduna", 16.0),
    ("Benin City", 15.0),
    ("Maiduguri", 14.0),
    ("Warri", 17.0),
    ("Calabar", 15.0),
    ("Uyo", 14.0),
];
