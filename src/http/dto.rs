//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most payloads are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Calculators
    ContactResistanceRequest, ContactResistanceResult, ResistanceCorrectionRequest,
    ResistanceCorrectionResult, TanDeltaRequest, TanDeltaResult, TurnsRatioRequest,
    TurnsRatioResult,
    // Calendar
    CalendarData, CalendarEntry,
    // Dashboard
    ContractCard, DashboardData, EntityCounts,
    // Entities
    Contract, Personnel, Vehicle, WorkSchedule,
    // Import
    ImportSummary, RowError,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub storage: String,
}

/// Personnel list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonnelListResponse {
    pub personnel: Vec<Personnel>,
    pub total: usize,
}

/// Vehicle list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
}

/// Contract list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractListResponse {
    pub contracts: Vec<Contract>,
    pub total: usize,
}

/// Work schedule list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    pub schedules: Vec<WorkSchedule>,
    pub total: usize,
}

/// Request body for the schedule row import endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Spreadsheet-shaped rows, one JSON object per row
    pub rows: Vec<serde_json::Value>,
}

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    /// Reference date (`YYYY-MM-DD`); defaults to the current date
    #[serde(default)]
    pub date: Option<String>,
    /// Expiring-contracts lookahead in days (default: 30)
    #[serde(default)]
    pub window_days: Option<i64>,
}
