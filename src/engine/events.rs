use chrono::{DateTime, Utc};

use crate::model::{Override, Schedule};

use super::rotation::shift_start;

/// A temporal boundary consumed by the sweep. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An override leaves duty; closes the matching stack entry.
    OverrideEnd { at: DateTime<Utc>, user: String },
    /// An override takes duty; pushed on the precedence stack.
    OverrideStart { at: DateTime<Utc>, user: String },
    /// Rotation boundary; no stack effect, but forces a segment break so
    /// the base user is re-resolved.
    Handover { at: DateTime<Utc> },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::OverrideEnd { at, .. }
            | Event::OverrideStart { at, .. }
            | Event::Handover { at } => *at,
        }
    }

    /// Tie-break for events at the same instant: ends close before starts
    /// open, handovers last, so an instant is never double-attributed.
    pub(super) fn priority(&self) -> u8 {
        match self {
            Event::OverrideEnd { .. } => 0,
            Event::OverrideStart { .. } => 1,
            Event::Handover { .. } => 2,
        }
    }
}

/// Boundary events from overrides intersecting `[from, until)`. Unsorted.
///
/// An override already active at `from` gets no start event — it seeds
/// the sweep's initial stack instead. An override still active at `until`
/// gets no end event — the final segment emission truncates it.
pub fn collect_override_events(
    overrides: &[Override],
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Vec<Event> {
    let mut events = Vec::new();
    for o in overrides {
        if o.end_at > from && o.start_at < until {
            if o.start_at >= from {
                events.push(Event::OverrideStart {
                    at: o.start_at,
                    user: o.user.clone(),
                });
            }
            if o.end_at <= until {
                events.push(Event::OverrideEnd {
                    at: o.end_at,
                    user: o.user.clone(),
                });
            }
        }
    }
    events
}

/// Handover boundaries inside `[from, until)`. Unsorted.
///
/// Walks forward from the start of the shift covering `from` in whole
/// handover intervals. Returns nothing for an empty roster (the caller
/// has already rejected that).
pub fn collect_handover_events(
    schedule: &Schedule,
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Vec<Event> {
    if schedule.users.is_empty() {
        return Vec::new();
    }

    let interval = schedule.handover_interval();
    let mut events = Vec::new();
    let mut next = shift_start(schedule, from) + interval;
    while next < until {
        if next >= from {
            events.push(Event::Handover { at: next });
        }
        next += interval;
    }
    events
}
