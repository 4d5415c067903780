//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::calculators::ContactResistanceRequest;
pub use crate::routes::calculators::ContactResistanceResult;
pub use crate::routes::calculators::ResistanceCorrectionRequest;
pub use crate::routes::calculators::ResistanceCorrectionResult;
pub use crate::routes::calculators::TanDeltaRequest;
pub use crate::routes::calculators::TanDeltaResult;
pub use crate::routes::calculators::TurnsRatioRequest;
pub use crate::routes::calculators::TurnsRatioResult;
pub use crate::routes::calendar::CalendarData;
pub use crate::routes::calendar::CalendarEntry;
pub use crate::routes::dashboard::ContractCard;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::EntityCounts;
pub use crate::routes::schedules::ImportSummary;
pub use crate::routes::schedules::RowError;

pub use crate::models::records::Contract;
pub use crate::models::records::ContractStatus;
pub use crate::models::records::Personnel;
pub use crate::models::records::Vehicle;
pub use crate::models::records::VehicleKind;
pub use crate::models::records::WorkSchedule;

pub use crate::scheduling::OverlapGroup;
pub use crate::scheduling::OverlapGrouping;
pub use crate::scheduling::ScheduleInterval;
