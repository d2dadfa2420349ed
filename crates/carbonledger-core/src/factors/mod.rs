//! Emission factor tables and typed lookup.
//!
//! - [`key`]: typed factor keys and waste treatments
//! - [`registry`]: the immutable [`EmissionFactorRegistry`]
//! - [`nigeria`]: the Nigerian coefficient tables used by default

pub mod key;
pub mod nigeria;
pub mod registry;

pub use key::{FactorCategory, FactorKey, WasteTreatment};
pub use nigeria::NATIONAL_GRID_AVERAGE;
pub use registry::{EmissionFactor, EmissionFactorRegistry, FactorSource, Resolution, NIGERIA_FACTORS};
