use carbonledger_core::config::{Config, ReportParameters};
use carbonledger_core::engine::Inventory;
use carbonledger_core::metrics::ResultMetrics;
use carbonledger_core::session::Organization;
use chrono::NaiveDateTime;

/// Format of the calculation date in reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a report is rendered from.
///
/// The generation time is passed in rather than read from the clock so
/// output is reproducible.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub organization: Option<&'a Organization>,
    pub inventory: &'a Inventory,
    pub metrics: ResultMetrics,
    pub parameters: &'a ReportParameters,
    pub generated_at: NaiveDateTime,
}

impl<'a> ReportContext<'a> {
    /// Derives the metrics for `inventory` using the parameters in `config`.
    pub fn new(
        inventory: &'a Inventory,
        organization: Option<&'a Organization>,
        config: &'a Config,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            organization,
            inventory,
            metrics: ResultMetrics::compute(inventory, organization, &config.metrics),
            parameters: &config.report,
            generated_at,
        }
    }

    pub fn calculation_date(&self) -> String {
        self.generated_at.format(DATE_FORMAT).to_string()
    }

    /// Organization name, or a placeholder when none was entered.
    pub fn organization_name(&self) -> &str {
        self.organization
            .map(|o| o.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unnamed organization")
    }
}
