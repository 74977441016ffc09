use chrono::{DateTime, TimeDelta, Utc};

use crate::model::Schedule;

/// Index of the rotation period covering `at`, counted from the anchor.
///
/// Signed floor division on milliseconds, so instants before
/// `handover_start_at` project backward through the rotation (period -1
/// is the shift immediately before the anchor).
pub(super) fn period_index(schedule: &Schedule, at: DateTime<Utc>) -> i64 {
    let elapsed = (at - schedule.handover_start_at).num_milliseconds();
    let interval = schedule.handover_interval().num_milliseconds();
    debug_assert!(interval > 0, "handover interval must be positive");
    elapsed.div_euclid(interval)
}

/// Which user is on base rotation duty at `at`, absent any override.
pub fn on_duty_at(schedule: &Schedule, at: DateTime<Utc>) -> &str {
    debug_assert!(!schedule.users.is_empty(), "roster must be non-empty");
    let index = period_index(schedule, at).rem_euclid(schedule.users.len() as i64);
    &schedule.users[index as usize]
}

/// Start of the shift covering `at`.
pub fn shift_start(schedule: &Schedule, at: DateTime<Utc>) -> DateTime<Utc> {
    let interval = schedule.handover_interval().num_milliseconds();
    schedule.handover_start_at + TimeDelta::milliseconds(period_index(schedule, at) * interval)
}
