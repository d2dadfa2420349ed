//! Per-scope ordered collections of activity records.

use crate::activity::{ActivityRecord, Scope};
use crate::errors::{CarbonError, CarbonResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Activity records for one reporting session, grouped by scope.
///
/// Records are appended in submission order and never modified. Identical
/// records are kept as independent entries.
///
/// Serialises as a flat list of records. Deserialising re-adds every record
/// through [`ActivityLedger::push`], so invalid records are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ActivityRecord>", into = "Vec<ActivityRecord>")]
pub struct ActivityLedger {
    scope1: Vec<ActivityRecord>,
    scope2: Vec<ActivityRecord>,
    scope3: Vec<ActivityRecord>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to `scope`.
    ///
    /// Fails if the record's category does not belong to `scope` or if any
    /// of its quantities is negative or not finite.
    pub fn add_record(&mut self, scope: Scope, record: ActivityRecord) -> CarbonResult<()> {
        let category = record.category();
        if category.scope() != scope {
            return Err(CarbonError::ScopeMismatch {
                expected: scope,
                actual: category.scope(),
                category,
            });
        }
        record.validate()?;
        debug!(scope = %scope, category = %category, source = %record.source(), "Adding activity record");
        self.records_mut(scope).push(record);
        Ok(())
    }

    /// Adds a record to the scope implied by its category.
    pub fn push(&mut self, record: ActivityRecord) -> CarbonResult<()> {
        self.add_record(record.scope(), record)
    }

    /// Records of `scope` in submission order.
    pub fn records(&self, scope: Scope) -> &[ActivityRecord] {
        match scope {
            Scope::Scope1 => &self.scope1,
            Scope::Scope2 => &self.scope2,
            Scope::Scope3 => &self.scope3,
        }
    }

    fn records_mut(&mut self, scope: Scope) -> &mut Vec<ActivityRecord> {
        match scope {
            Scope::Scope1 => &mut self.scope1,
            Scope::Scope2 => &mut self.scope2,
            Scope::Scope3 => &mut self.scope3,
        }
    }

    pub fn len(&self) -> usize {
        self.scope1.len() + self.scope2.len() + self.scope3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every record from every scope.
    pub fn reset(&mut self) {
        self.scope1.clear();
        self.scope2.clear();
        self.scope3.clear();
    }
}

impl TryFrom<Vec<ActivityRecord>> for ActivityLedger {
    type Error = CarbonError;

    fn try_from(records: Vec<ActivityRecord>) -> CarbonResult<Self> {
        let mut ledger = ActivityLedger::new();
        for record in records {
            ledger.push(record)?;
        }
        Ok(ledger)
    }
}

impl From<ActivityLedger> for Vec<ActivityRecord> {
    fn from(ledger: ActivityLedger) -> Self {
        let ActivityLedger {
            mut scope1,
            scope2,
            scope3,
        } = ledger;
        scope1.extend(scope2);
        scope1.extend(scope3);
        scope1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Category;

    fn commute() -> ActivityRecord {
        ActivityRecord::Commuting {
            mode: "BRT Bus".to_string(),
            employees: 10,
            distance_km: 15.0,
            days: 240,
        }
    }

    #[test]
    fn test_add_record_to_matching_scope() {
        let mut ledger = ActivityLedger::new();
        ledger.add_record(Scope::Scope3, commute()).unwrap();
        assert_eq!(ledger.records(Scope::Scope3).len(), 1);
        assert!(ledger.records(Scope::Scope1).is_empty());
    }

    #[test]
    fn test_scope_mismatch() {
        let mut ledger = ActivityLedger::new();
        let err = ledger.add_record(Scope::Scope1, commute()).unwrap_err();
        match err {
            CarbonError::ScopeMismatch {
                expected,
                actual,
                category,
            } => {
                assert_eq!(expected, Scope::Scope1);
                assert_eq!(actual, Scope::Scope3);
                assert_eq!(category, Category::EmployeeCommuting);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_quantity_is_not_stored() {
        let mut ledger = ActivityLedger::new();
        let record = ActivityRecord::RoadTravel {
            vehicle: "SUV/4x4".to_string(),
            distance_km: -5.0,
        };
        assert!(ledger.push(record).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut ledger = ActivityLedger::new();
        ledger.push(commute()).unwrap();
        ledger
            .push(ActivityRecord::Hotel {
                city: "Abuja".to_string(),
                nights: 1,
                rooms: 1,
            })
            .unwrap();
        ledger.push(commute()).unwrap();

        let records = ledger.records(Scope::Scope3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], records[2]);
        assert_eq!(records[1].source(), "Hotel stay (Abuja)");
    }

    #[test]
    fn test_reset() {
        let mut ledger = ActivityLedger::new();
        ledger.push(commute()).unwrap();
        ledger
            .push(ActivityRecord::Electricity {
                source: "Grid Electricity".to_string(),
                region: "National Grid Average".to_string(),
                consumption_kwh: 10.0,
            })
            .unwrap();
        assert_eq!(ledger.len(), 2);

        ledger.reset();
        assert!(ledger.is_empty());
        for scope in Scope::ALL {
            assert!(ledger.records(scope).is_empty());
        }
    }

    #[test]
    fn test_deserialise_rejects_invalid_quantity() {
        let json = r#"[{"kind": "road_travel", "vehicle": "SUV/4x4", "distance_km": -1000.0}]"#;
        let err = serde_json::from_str::<ActivityLedger>(json).unwrap_err();
        assert!(err.to_string().contains("distance_km"));
    }

    #[test]
    fn test_serialise_round_trip_files_records_by_scope() {
        let mut ledger = ActivityLedger::new();
        ledger.push(commute()).unwrap();
        ledger
            .push(ActivityRecord::Electricity {
                source: "Grid Electricity".to_string(),
                region: "National Grid Average".to_string(),
                consumption_kwh: 10.0,
            })
            .unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let restored: ActivityLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);
        assert_eq!(restored.records(Scope::Scope2).len(), 1);
        assert_eq!(restored.records(Scope::Scope3).len(), 1);
    }
}
