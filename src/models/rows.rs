//! Schema-validated decoding of spreadsheet-shaped rows.
//!
//! Imported schedule rows arrive as dynamic JSON objects keyed by column
//! name. Decoding either yields a typed [`WorkSchedule`] or fails with a
//! [`SchemaMismatch`] naming the offending column, so a drifted sheet layout
//! surfaces as an explicit error instead of silently-empty fields.

use serde_json::Value;
use thiserror::Error;

use crate::models::records::WorkSchedule;

/// A row did not match the expected column schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema mismatch in column '{column}': {reason}")]
pub struct SchemaMismatch {
    pub column: String,
    pub reason: String,
}

impl SchemaMismatch {
    fn new(column: &str, reason: impl Into<String>) -> Self {
        Self {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Decode one dynamic row into a [`WorkSchedule`].
///
/// Required columns: `title`, `start_date`, `start_time`, `end_date`,
/// `end_time`. A required column that is missing, non-string, or blank is a
/// [`SchemaMismatch`]. Optional columns (`id`, `contract_id`, `vehicle_id`,
/// `notes`, `assignee_ids`) may be absent or `null`.
///
/// Date and time values are kept as strings here; only their presence and
/// shape as cells is validated. Parseability is the calendar's concern.
pub fn decode_schedule_row(row: &Value) -> Result<WorkSchedule, SchemaMismatch> {
    let object = row
        .as_object()
        .ok_or_else(|| SchemaMismatch::new("<row>", "row is not a JSON object"))?;

    Ok(WorkSchedule {
        id: optional_str(object, "id")?.unwrap_or_default(),
        title: require_str(object, "title")?,
        start_date: require_str(object, "start_date")?,
        start_time: require_str(object, "start_time")?,
        end_date: require_str(object, "end_date")?,
        end_time: require_str(object, "end_time")?,
        contract_id: optional_str(object, "contract_id")?,
        assignee_ids: optional_str_list(object, "assignee_ids")?,
        vehicle_id: optional_str(object, "vehicle_id")?,
        notes: optional_str(object, "notes")?,
    })
}

fn require_str(
    object: &serde_json::Map<String, Value>,
    column: &str,
) -> Result<String, SchemaMismatch> {
    let value = object
        .get(column)
        .ok_or_else(|| SchemaMismatch::new(column, "required column is missing"))?;
    let text = value
        .as_str()
        .ok_or_else(|| SchemaMismatch::new(column, "expected a string cell"))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SchemaMismatch::new(column, "required column is blank"));
    }
    Ok(trimmed.to_string())
}

fn optional_str(
    object: &serde_json::Map<String, Value>,
    column: &str,
) -> Result<Option<String>, SchemaMismatch> {
    match object.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(_) => Err(SchemaMismatch::new(column, "expected a string cell")),
    }
}

fn optional_str_list(
    object: &serde_json::Map<String, Value>,
    column: &str,
) -> Result<Vec<String>, SchemaMismatch> {
    match object.get(column) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|text| text.trim().to_string())
                    .ok_or_else(|| SchemaMismatch::new(column, "expected a list of strings"))
            })
            .collect(),
        Some(_) => Err(SchemaMismatch::new(column, "expected a list of strings")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_row() -> Value {
        json!({
            "id": "ws-7",
            "title": "Relay protection check",
            "start_date": "2024-05-02",
            "start_time": "08:00",
            "end_date": "2024-05-02",
            "end_time": "16:00",
            "contract_id": "c-3",
            "assignee_ids": ["p-1", "p-4"],
            "vehicle_id": "v-2",
            "notes": "bring the test set"
        })
    }

    #[test]
    fn test_decode_complete_row() {
        let schedule = decode_schedule_row(&complete_row()).expect("complete row decodes");
        assert_eq!(schedule.id, "ws-7");
        assert_eq!(schedule.title, "Relay protection check");
        assert_eq!(schedule.assignee_ids, vec!["p-1", "p-4"]);
        assert_eq!(schedule.notes.as_deref(), Some("bring the test set"));
    }

    #[test]
    fn test_decode_minimal_row() {
        let row = json!({
            "title": "Grounding grid measurement",
            "start_date": "2024-05-03",
            "start_time": "09:00",
            "end_date": "2024-05-03",
            "end_time": "13:00"
        });
        let schedule = decode_schedule_row(&row).expect("minimal row decodes");
        assert!(schedule.id.is_empty());
        assert!(schedule.contract_id.is_none());
        assert!(schedule.assignee_ids.is_empty());
    }

    #[test]
    fn test_missing_required_column_names_column() {
        let mut row = complete_row();
        row.as_object_mut().unwrap().remove("start_time");
        let err = decode_schedule_row(&row).expect_err("missing column must fail");
        assert_eq!(err.column, "start_time");
        assert!(err.reason.contains("missing"));
    }

    #[test]
    fn test_blank_required_column_names_column() {
        let mut row = complete_row();
        row["title"] = json!("   ");
        let err = decode_schedule_row(&row).expect_err("blank column must fail");
        assert_eq!(err.column, "title");
        assert!(err.reason.contains("blank"));
    }

    #[test]
    fn test_non_string_required_column() {
        let mut row = complete_row();
        row["end_date"] = json!(20240502);
        let err = decode_schedule_row(&row).expect_err("numeric cell must fail");
        assert_eq!(err.column, "end_date");
    }

    #[test]
    fn test_null_optional_column_is_absent() {
        let mut row = complete_row();
        row["notes"] = Value::Null;
        row["vehicle_id"] = Value::Null;
        let schedule = decode_schedule_row(&row).expect("null optionals decode");
        assert!(schedule.notes.is_none());
        assert!(schedule.vehicle_id.is_none());
    }

    #[test]
    fn test_malformed_assignee_list() {
        let mut row = complete_row();
        row["assignee_ids"] = json!([1, 2]);
        let err = decode_schedule_row(&row).expect_err("non-string list must fail");
        assert_eq!(err.column, "assignee_ids");
    }

    #[test]
    fn test_non_object_row() {
        let err = decode_schedule_row(&json!("not a row")).expect_err("non-object must fail");
        assert_eq!(err.column, "<row>");
    }

    #[test]
    fn test_error_display_names_column() {
        let err = SchemaMismatch::new("start_date", "required column is missing");
        assert_eq!(
            err.to_string(),
            "schema mismatch in column 'start_date': required column is missing"
        );
    }
}
