use serde::{Deserialize, Serialize};

use crate::models::records::Contract;

/// Record counts for the landing-page cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub personnel: usize,
    pub vehicles: usize,
    pub contracts: usize,
    pub schedules: usize,
}

/// A contract surfaced on the dashboard with its days left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCard {
    #[serde(flatten)]
    pub contract: Contract,
    pub days_until_expiry: i64,
}

/// Landing-page aggregation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub counts: EntityCounts,
    /// Schedules active on the reference date, by ID.
    pub active_schedule_ids: Vec<String>,
    /// Active contracts expiring within the configured window.
    pub expiring_contracts: Vec<ContractCard>,
}

pub const GET_DASHBOARD: &str = "get_dashboard";
