//! Storage-level orchestration used by the request handlers.

use serde_json::Value;
use tracing::info;

use crate::db::checksum::calculate_checksum;
use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::models::rows::decode_schedule_row;
use crate::routes::schedules::{ImportSummary, RowError};

/// Import a batch of spreadsheet-shaped schedule rows.
///
/// Each row is schema-decoded and stored independently: valid rows are
/// added, invalid rows are reported per-row in the summary, and the batch
/// carries no transactional guarantee. The SHA-256 checksum of the payload
/// serves as the batch version tag.
pub async fn import_schedule_rows<R: ScheduleRepository + ?Sized>(
    repo: &R,
    rows: &[Value],
) -> RepositoryResult<ImportSummary> {
    let payload = serde_json::to_string(rows)
        .map_err(|e| format!("failed to serialize import payload: {e}"))?;
    let checksum = calculate_checksum(&payload);

    let mut imported = 0usize;
    let mut row_errors = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        match decode_schedule_row(row) {
            Ok(schedule) => {
                repo.add_schedule(schedule).await?;
                imported += 1;
            }
            Err(mismatch) => row_errors.push(RowError {
                row: row_index,
                column: mismatch.column,
                reason: mismatch.reason,
            }),
        }
    }

    info!(
        total = rows.len(),
        imported,
        rejected = row_errors.len(),
        checksum = %checksum,
        "schedule row import finished"
    );

    Ok(ImportSummary {
        total_rows: rows.len(),
        imported,
        row_errors,
        checksum,
    })
}
