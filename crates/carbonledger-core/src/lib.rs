//! Core of the carbonledger greenhouse-gas calculator.
//!
//! An organization's activity data (fuel, electricity, travel, commuting,
//! waste, agricultural and industrial processes) is recorded in an
//! [`ActivityLedger`](ledger::ActivityLedger), multiplied by coefficients
//! from an [`EmissionFactorRegistry`](factors::EmissionFactorRegistry), and
//! summed into Scope 1/2/3 totals by the [`engine`].
//!
//! # Module Organisation
//!
//! - [`factors`]: typed emission factor keys and the immutable registry
//! - [`activity`]: scopes, categories and activity records
//! - [`ledger`]: per-scope record collections
//! - [`engine`]: per-record, per-category, per-scope and grand totals
//! - [`metrics`]: equivalences and intensity ratios
//! - [`session`]: per-user context holding organization info and the ledger
//! - [`config`]: TOML configuration with documented defaults

pub mod activity;
pub mod config;
pub mod engine;
pub mod factors;
pub mod ledger;
pub mod metrics;
pub mod session;
pub mod units;

pub mod errors;
