//! Scope 1/2/3 greenhouse-gas inventory calculator.
//!
//! Re-exports the calculation core and the report layer under one crate.

pub use carbonledger_core as core;
pub use carbonledger_report as report;

pub use carbonledger_core::activity::{ActivityRecord, Category, Scope};
pub use carbonledger_core::config::Config;
pub use carbonledger_core::engine::{EmissionsEngine, Inventory};
pub use carbonledger_core::errors::{CarbonError, CarbonResult};
pub use carbonledger_core::factors::{EmissionFactorRegistry, NIGERIA_FACTORS};
pub use carbonledger_core::session::Session;
