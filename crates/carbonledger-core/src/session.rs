//! Per-session context.
//!
//! A [`Session`] owns the organization details and the activity ledger for
//! one user. It is passed explicitly to every operation; nothing is shared
//! between sessions.
//!
//! Sessions can be loaded from a TOML file:
//!
//! ```toml
//! [organization]
//! name = "Acme Logistics"
//! address = "12 Marina, Lagos"
//! industry = "transportation"
//! reporting_period = { year = 2024 }
//!
//! [[activity]]
//! kind = "electricity"
//! source = "Grid Electricity"
//! region = "Lagos/Ibadan Region"
//! consumption_kwh = 100000
//! ```

use crate::activity::{ActivityRecord, Scope};
use crate::config::EngineConfig;
use crate::engine::{EmissionsEngine, Inventory, ScopeResult};
use crate::errors::{CarbonError, CarbonResult};
use crate::factors::EmissionFactorRegistry;
use crate::ledger::ActivityLedger;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustrySector {
    Manufacturing,
    Services,
    Agriculture,
    Construction,
    Transportation,
    Energy,
    Healthcare,
    Education,
    Retail,
    #[default]
    Other,
}

impl fmt::Display for IndustrySector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndustrySector::Manufacturing => "Manufacturing",
            IndustrySector::Services => "Services",
            IndustrySector::Agriculture => "Agriculture",
            IndustrySector::Construction => "Construction",
            IndustrySector::Transportation => "Transportation",
            IndustrySector::Energy => "Energy",
            IndustrySector::Healthcare => "Healthcare",
            IndustrySector::Education => "Education",
            IndustrySector::Retail => "Retail",
            IndustrySector::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Period covered by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportingPeriod {
    /// A calendar year.
    Year { year: i32 },
    /// An explicit inclusive date range.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        ReportingPeriod::Year { year: 2024 }
    }
}

impl ReportingPeriod {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            ReportingPeriod::Year { year } => NaiveDate::from_ymd_opt(*year, 1, 1),
            ReportingPeriod::Custom { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            ReportingPeriod::Year { year } => NaiveDate::from_ymd_opt(*year, 12, 31),
            ReportingPeriod::Custom { end, .. } => Some(*end),
        }
    }

    pub fn validate(&self) -> CarbonResult<()> {
        match self {
            ReportingPeriod::Custom { start, end } if start > end => {
                Err(CarbonError::InvalidReportingPeriod {
                    start: *start,
                    end: *end,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportingPeriod::Year { year } => write!(f, "{year}"),
            ReportingPeriod::Custom { start, end } => write!(f, "{start} to {end}"),
        }
    }
}

/// Details of the reporting organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub address: String,
    pub industry: IndustrySector,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub reporting_period: ReportingPeriod,
    /// Used for the revenue intensity metric.
    pub annual_revenue_million_naira: Option<f64>,
    /// Used for the per-employee intensity metric.
    pub employees: Option<u32>,
}

impl Organization {
    /// Checks the required fields and the reporting period.
    pub fn validate(&self) -> CarbonResult<()> {
        if self.name.trim().is_empty() {
            return Err(CarbonError::InvalidOrganization("name".to_string()));
        }
        if let Some(revenue) = self.annual_revenue_million_naira {
            if !revenue.is_finite() || revenue < 0.0 {
                return Err(CarbonError::InvalidQuantity {
                    field: "annual_revenue_million_naira".to_string(),
                    value: revenue,
                });
            }
        }
        self.reporting_period.validate()
    }
}

/// On-disk form of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFile {
    pub organization: Option<Organization>,
    pub activity: Vec<ActivityRecord>,
}

/// Organization details and activity records for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    organization: Option<Organization>,
    ledger: ActivityLedger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session from its file form, validating every record.
    pub fn from_file(file: SessionFile) -> CarbonResult<Self> {
        let mut session = Session::new();
        if let Some(organization) = file.organization {
            session.set_organization(organization)?;
        }
        for record in file.activity {
            session.add_record(record)?;
        }
        Ok(session)
    }

    pub fn from_toml_str(s: &str) -> CarbonResult<Self> {
        let file: SessionFile = toml::from_str(s)?;
        Self::from_file(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarbonResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let session = Self::from_toml_str(&contents)?;
        info!(
            path = %path.as_ref().display(),
            records = session.ledger.len(),
            "Loaded session"
        );
        Ok(session)
    }

    /// The file form of this session.
    pub fn to_file(&self) -> SessionFile {
        SessionFile {
            organization: self.organization.clone(),
            activity: Scope::ALL
                .iter()
                .flat_map(|scope| self.ledger.records(*scope).iter().cloned())
                .collect(),
        }
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    pub fn set_organization(&mut self, organization: Organization) -> CarbonResult<()> {
        organization.validate()?;
        self.organization = Some(organization);
        Ok(())
    }

    pub fn ledger(&self) -> &ActivityLedger {
        &self.ledger
    }

    /// Adds a record to the scope implied by its category.
    pub fn add_record(&mut self, record: ActivityRecord) -> CarbonResult<()> {
        self.ledger.push(record)
    }

    /// Clears all activity records. Organization details are kept.
    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    pub fn calculate_scope(
        &self,
        scope: Scope,
        registry: &EmissionFactorRegistry,
        config: &EngineConfig,
    ) -> CarbonResult<ScopeResult> {
        EmissionsEngine::new(registry, config).compute_scope(scope, self.ledger.records(scope))
    }

    pub fn calculate(
        &self,
        registry: &EmissionFactorRegistry,
        config: &EngineConfig,
    ) -> CarbonResult<Inventory> {
        EmissionsEngine::new(registry, config).compute_inventory(&self.ledger)
    }
}
