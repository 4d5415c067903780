//! Calendar view assembly: fetch schedules, group overlaps, annotate.

use tracing::debug;

use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::routes::calendar::{CalendarData, CalendarEntry};
use crate::scheduling::group_schedules;

/// Build the calendar payload from the current schedule set.
///
/// Every stored schedule appears in the result; schedules in a multi-member
/// overlap group carry that group's color index, and schedules with
/// malformed date/time values are listed in `skipped_ids` without a color.
pub async fn build_calendar<R: ScheduleRepository + ?Sized>(repo: &R) -> RepositoryResult<CalendarData> {
    let schedules = repo.list_schedules().await?;
    let grouping = group_schedules(&schedules);

    debug!(
        schedules = schedules.len(),
        groups = grouping.groups.len(),
        skipped = grouping.skipped_ids.len(),
        "assembled calendar grouping"
    );

    let entries = schedules
        .into_iter()
        .map(|schedule| {
            let color_index = grouping.color_indices.get(&schedule.id).copied();
            CalendarEntry {
                schedule,
                color_index,
            }
        })
        .collect();

    Ok(CalendarData {
        entries,
        groups: grouping.groups,
        skipped_ids: grouping.skipped_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::MemoryRepository;
    use crate::models::records::WorkSchedule;

    fn schedule(id: &str, date: &str, start: &str, end: &str) -> WorkSchedule {
        WorkSchedule {
            id: id.into(),
            title: format!("job {id}"),
            start_date: date.into(),
            start_time: start.into(),
            end_date: date.into(),
            end_time: end.into(),
            contract_id: None,
            assignee_ids: Vec::new(),
            vehicle_id: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_empty_repository_yields_empty_calendar() {
        let repo = MemoryRepository::new();
        let data = build_calendar(&repo).await.unwrap();
        assert!(data.entries.is_empty());
        assert!(data.groups.is_empty());
        assert!(data.skipped_ids.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_schedules_share_a_color() {
        let repo = MemoryRepository::new();
        repo.add_schedule(schedule("a", "2024-03-15", "08:00", "12:00"))
            .await
            .unwrap();
        repo.add_schedule(schedule("b", "2024-03-15", "10:00", "14:00"))
            .await
            .unwrap();
        repo.add_schedule(schedule("c", "2024-03-16", "08:00", "12:00"))
            .await
            .unwrap();

        let data = build_calendar(&repo).await.unwrap();
        assert_eq!(data.entries.len(), 3);

        let color_of = |id: &str| {
            data.entries
                .iter()
                .find(|e| e.schedule.id == id)
                .unwrap()
                .color_index
        };
        assert_eq!(color_of("a"), Some(0));
        assert_eq!(color_of("b"), Some(0));
        assert_eq!(color_of("c"), None);
    }

    #[tokio::test]
    async fn test_malformed_schedule_appears_without_color() {
        let repo = MemoryRepository::new();
        repo.add_schedule(schedule("ok", "2024-03-15", "08:00", "12:00"))
            .await
            .unwrap();
        repo.add_schedule(schedule("bad", "2024-03-15", "8 am", "12:00"))
            .await
            .unwrap();

        let data = build_calendar(&repo).await.unwrap();
        assert_eq!(data.entries.len(), 2);
        assert_eq!(data.skipped_ids, vec!["bad"]);
        let bad_entry = data.entries.iter().find(|e| e.schedule.id == "bad").unwrap();
        assert!(bad_entry.color_index.is_none());
    }

    #[tokio::test]
    async fn test_calendar_references_only_stored_ids() {
        let repo = MemoryRepository::new();
        repo.add_schedule(schedule("a", "2024-03-15", "08:00", "12:00"))
            .await
            .unwrap();
        repo.add_schedule(schedule("b", "2024-03-15", "10:00", "14:00"))
            .await
            .unwrap();

        let data = build_calendar(&repo).await.unwrap();
        let stored: Vec<String> = data.entries.iter().map(|e| e.schedule.id.clone()).collect();
        for group in &data.groups {
            for member in &group.member_ids {
                assert!(stored.contains(member));
            }
        }
    }
}
