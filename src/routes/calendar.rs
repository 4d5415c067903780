use serde::{Deserialize, Serialize};

use crate::models::records::WorkSchedule;
use crate::scheduling::OverlapGroup;

/// One schedule annotated with its overlap color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(flatten)]
    pub schedule: WorkSchedule,
    /// Palette index shared by every member of the entry's overlap group.
    /// `None` for schedules that overlap nothing.
    pub color_index: Option<usize>,
}

/// Calendar view payload: all schedules plus their overlap grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarData {
    pub entries: Vec<CalendarEntry>,
    pub groups: Vec<OverlapGroup>,
    /// Schedules excluded from grouping because of malformed date/time
    /// values. They still appear in `entries`, without a color.
    pub skipped_ids: Vec<String>,
}
