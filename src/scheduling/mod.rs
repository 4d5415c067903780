//! Interval overlap grouping for the calendar view.

pub mod overlap;

pub use overlap::{
    group_intervals, group_schedules, OverlapGroup, OverlapGrouping, ScheduleInterval,
};
