//! Dashboard aggregations for the landing-page cards.

use chrono::NaiveDate;
use tracing::warn;

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::records::ContractStatus;
use crate::models::time::DATE_FORMAT;
use crate::routes::dashboard::{ContractCard, DashboardData, EntityCounts};

/// Default lookahead for the expiring-contracts card, in days.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Build the dashboard payload for a given reference date.
///
/// The reference date is a parameter rather than "today" so the aggregation
/// stays deterministic under test and the frontend can ask about other days.
///
/// A schedule counts as active when the reference date falls inside its
/// start/end date range (inclusive). A contract is expiring when it is
/// active and its end date falls within `expiry_window_days` of the
/// reference date. Records with malformed dates are logged and left out of
/// the date-dependent cards; they still contribute to the counts.
pub async fn build_dashboard<R: FullRepository + ?Sized>(
    repo: &R,
    reference: NaiveDate,
    expiry_window_days: i64,
) -> RepositoryResult<DashboardData> {
    let personnel = repo.list_personnel().await?;
    let vehicles = repo.list_vehicles().await?;
    let contracts = repo.list_contracts().await?;
    let schedules = repo.list_schedules().await?;

    let counts = EntityCounts {
        personnel: personnel.len(),
        vehicles: vehicles.len(),
        contracts: contracts.len(),
        schedules: schedules.len(),
    };

    let mut active_schedule_ids = Vec::new();
    for schedule in &schedules {
        let span = parse_date(&schedule.start_date).zip(parse_date(&schedule.end_date));
        match span {
            Some((starts, ends)) => {
                if starts <= reference && reference <= ends {
                    active_schedule_ids.push(schedule.id.clone());
                }
            }
            None => warn!(
                schedule_id = %schedule.id,
                "excluding schedule with malformed dates from the active card"
            ),
        }
    }

    let mut expiring_contracts = Vec::new();
    for contract in contracts {
        if contract.status != ContractStatus::Active {
            continue;
        }
        match parse_date(&contract.ends_on) {
            Some(ends_on) => {
                let days_until_expiry = (ends_on - reference).num_days();
                if (0..=expiry_window_days).contains(&days_until_expiry) {
                    expiring_contracts.push(ContractCard {
                        contract,
                        days_until_expiry,
                    });
                }
            }
            None => warn!(
                contract_id = %contract.id,
                "excluding contract with malformed end date from the expiry card"
            ),
        }
    }

    Ok(DashboardData {
        counts,
        active_schedule_ids,
        expiring_contracts,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
