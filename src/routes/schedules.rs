use serde::{Deserialize, Serialize};

/// One rejected row from a schedule import batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// Zero-based index of the row in the submitted batch.
    pub row: usize,
    pub column: String,
    pub reason: String,
}

/// Outcome of a schedule row import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,
    pub imported: usize,
    pub row_errors: Vec<RowError>,
    /// SHA-256 of the submitted payload, the batch version tag.
    pub checksum: String,
}

pub const IMPORT_SCHEDULES: &str = "import_schedules";
pub const GET_CALENDAR: &str = "get_calendar";
