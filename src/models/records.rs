//! Entity records tracked by the maintenance unit.
//!
//! Records mirror the spreadsheet tabs the unit maintains. Identifiers are
//! opaque strings assigned by the repository layer; schedule date and time
//! fields stay as the raw spreadsheet strings and are combined into instants
//! only where the calendar needs them (see [`crate::models::time`]).

use serde::{Deserialize, Serialize};

// ============================================================================
// Personnel
// ============================================================================

/// A member of the maintenance crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    /// Job title, e.g. "electrical fitter" or "test engineer".
    #[serde(default)]
    pub position: String,
    /// Electrical safety qualification group (1..=5).
    #[serde(default)]
    pub safety_group: Option<u8>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ============================================================================
// Vehicles
// ============================================================================

/// Vehicle category used for dispatch planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
    Van,
    Truck,
    Laboratory,
}

/// A vehicle in the unit's fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub plate_number: String,
    pub kind: VehicleKind,
    /// Next technical inspection date, `YYYY-MM-DD`.
    #[serde(default)]
    pub inspection_due: Option<String>,
}

// ============================================================================
// Contracts
// ============================================================================

/// Lifecycle state of a customer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

/// A customer contract the unit performs work under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default)]
    pub id: String,
    pub number: String,
    pub customer: String,
    /// Contract start date, `YYYY-MM-DD`.
    pub starts_on: String,
    /// Contract end date, `YYYY-MM-DD`.
    pub ends_on: String,
    pub status: ContractStatus,
}

// ============================================================================
// Work schedules
// ============================================================================

/// A scheduled work assignment.
///
/// Date and time fields keep the spreadsheet's string representation
/// (`YYYY-MM-DD` and `HH:MM`). Well-formedness is expected upstream; the
/// calendar grouping excludes records whose values fail to parse rather
/// than rejecting the record at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub assignee_ids: Vec<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> WorkSchedule {
        WorkSchedule {
            id: "ws-1".into(),
            title: "Transformer testing, substation 110/10".into(),
            start_date: "2024-03-15".into(),
            start_time: "08:00".into(),
            end_date: "2024-03-15".into(),
            end_time: "17:00".into(),
            contract_id: Some("c-1".into()),
            assignee_ids: vec!["p-1".into(), "p-2".into()],
            vehicle_id: Some("v-1".into()),
            notes: None,
        }
    }

    #[test]
    fn test_vehicle_kind_serde_names() {
        let json = serde_json::to_string(&VehicleKind::Laboratory).unwrap();
        assert_eq!(json, "\"laboratory\"");
        let kind: VehicleKind = serde_json::from_str("\"van\"").unwrap();
        assert_eq!(kind, VehicleKind::Van);
    }

    #[test]
    fn test_contract_status_serde_names() {
        let json = serde_json::to_string(&ContractStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let status: ContractStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ContractStatus::Cancelled);
    }

    #[test]
    fn test_work_schedule_roundtrip() {
        let schedule = sample_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: WorkSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }

    #[test]
    fn test_work_schedule_optional_fields_default() {
        let json = r#"{
            "title": "Cable fault location",
            "start_date": "2024-04-01",
            "start_time": "09:00",
            "end_date": "2024-04-01",
            "end_time": "12:00"
        }"#;
        let schedule: WorkSchedule = serde_json::from_str(json).unwrap();
        assert!(schedule.id.is_empty());
        assert!(schedule.contract_id.is_none());
        assert!(schedule.assignee_ids.is_empty());
        assert!(schedule.vehicle_id.is_none());
        assert!(schedule.notes.is_none());
    }

    #[test]
    fn test_personnel_defaults() {
        let json = r#"{"full_name": "I. Petrov"}"#;
        let person: Personnel = serde_json::from_str(json).unwrap();
        assert_eq!(person.full_name, "I. Petrov");
        assert!(person.position.is_empty());
        assert!(person.safety_group.is_none());
    }
}
