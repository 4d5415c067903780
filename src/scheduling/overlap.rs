//! Overlap grouping of scheduled work intervals.
//!
//! The calendar view highlights work schedules that compete for the same
//! time window. Records are clustered into groups by pairwise overlap and
//! multi-member groups receive a color index the frontend maps to a palette.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::records::WorkSchedule;
use crate::models::time::combine_instant;

// ============================================================================
// Types
// ============================================================================

/// A work schedule reduced to its comparable time span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInterval {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduleInterval {
    /// Build an interval from spreadsheet-shaped date and time strings.
    ///
    /// Returns `None` when any of the four components fails to parse.
    pub fn from_parts(
        id: &str,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Option<Self> {
        let start = combine_instant(start_date, start_time)?;
        let end = combine_instant(end_date, end_time)?;
        Some(Self {
            id: id.to_string(),
            start,
            end,
        })
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One cluster of mutually scheduled records.
///
/// `color_index` is `Some` only for groups of two or more members, numbered
/// in the order multi-member groups appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup {
    pub member_ids: Vec<String>,
    pub color_index: Option<usize>,
}

/// Full grouping result for one set of work schedules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapGrouping {
    /// Record id to color index, for members of multi-member groups only.
    pub color_indices: HashMap<String, usize>,
    pub groups: Vec<OverlapGroup>,
    /// Ids of records excluded because their date or time strings failed to
    /// parse. Excluded records belong to no group.
    pub skipped_ids: Vec<String>,
}

// ============================================================================
// Grouping
// ============================================================================

/// Cluster intervals by pairwise overlap.
///
/// Each interval, in input order, joins the first existing group (in group
/// creation order) that contains at least one overlapping member; otherwise
/// it starts a new group. The first-match scan is intentional and
/// order-sensitive: an interval bridging two earlier disjoint groups joins
/// the earlier group and does not merge the two. Quadratic over the input,
/// which is fine at the few hundred rows a unit schedules per season.
pub fn group_intervals(intervals: &[ScheduleInterval]) -> OverlapGrouping {
    let mut member_slots: Vec<Vec<usize>> = Vec::new();

    for (idx, interval) in intervals.iter().enumerate() {
        let existing = member_slots
            .iter()
            .position(|members| members.iter().any(|&m| intervals[m].overlaps(interval)));
        match existing {
            Some(slot) => member_slots[slot].push(idx),
            None => member_slots.push(vec![idx]),
        }
    }

    let mut groups = Vec::with_capacity(member_slots.len());
    let mut color_indices = HashMap::new();
    let mut next_color = 0usize;

    for members in member_slots {
        let member_ids: Vec<String> = members
            .iter()
            .map(|&m| intervals[m].id.clone())
            .collect();
        let color_index = if member_ids.len() >= 2 {
            let color = next_color;
            next_color += 1;
            for id in &member_ids {
                color_indices.insert(id.clone(), color);
            }
            Some(color)
        } else {
            None
        };
        groups.push(OverlapGroup {
            member_ids,
            color_index,
        });
    }

    OverlapGrouping {
        color_indices,
        groups,
        skipped_ids: Vec::new(),
    }
}

/// Group work schedules for the calendar, excluding malformed records.
///
/// Records whose date or time strings fail to parse are excluded from every
/// group, reported in [`OverlapGrouping::skipped_ids`], and logged. The
/// relationships between the remaining records are unaffected.
pub fn group_schedules(schedules: &[WorkSchedule]) -> OverlapGrouping {
    let mut intervals = Vec::with_capacity(schedules.len());
    let mut skipped_ids = Vec::new();

    for schedule in schedules {
        match ScheduleInterval::from_parts(
            &schedule.id,
            &schedule.start_date,
            &schedule.start_time,
            &schedule.end_date,
            &schedule.end_time,
        ) {
            Some(interval) => intervals.push(interval),
            None => {
                tracing::warn!(
                    schedule_id = %schedule.id,
                    start_date = %schedule.start_date,
                    start_time = %schedule.start_time,
                    end_date = %schedule.end_date,
                    end_time = %schedule.end_time,
                    "excluding schedule with malformed date/time from calendar grouping"
                );
                skipped_ids.push(schedule.id.clone());
            }
        }
    }

    let mut grouping = group_intervals(&intervals);
    grouping.skipped_ids = skipped_ids;
    grouping
}

// ============================================================================
// Tests
// ============================================================================
