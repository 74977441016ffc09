use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` on the UTC timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

/// Rotation definition. Field names match the schedule document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rotation order; `users[0]` is on duty at `handover_start_at`.
    pub users: Vec<String>,
    /// Instant at which `users[0]` begins a rotation period. May lie
    /// arbitrarily far in the past or future of any query window.
    pub handover_start_at: DateTime<Utc>,
    /// Shift length in whole days. Must be positive.
    pub handover_interval_days: i64,
}

impl Schedule {
    pub fn handover_interval(&self) -> TimeDelta {
        TimeDelta::days(self.handover_interval_days)
    }
}

/// A user-declared interval that preempts the base rotation for its
/// duration. The user need not appear in the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub user: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Override {
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_at <= at && at < self.end_at
    }
}

/// One maximal contiguous, single-user span of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub user: String,
    pub span: Span,
}
