use chrono::{DateTime, Utc};

use crate::model::{Override, Schedule, Segment, Span};

use super::RenderError;
use super::events::{Event, collect_handover_events, collect_override_events};
use super::rotation::on_duty_at;

/// Render the on-call timeline for `[from, until)`.
///
/// Collects override and handover boundaries, sorts them by
/// `(instant, kind)`, and sweeps: active overrides live on a stack where
/// the most recently started one is on duty, and an empty stack falls
/// back to the base rotation. Segments between consecutive boundaries
/// are emitted and then coalesced.
///
/// `from >= until` is a valid empty query at this layer; the strict
/// entry point in `wire` rejects it instead. Everything else is
/// validated up front — the render succeeds or fails atomically.
pub fn render(
    schedule: &Schedule,
    overrides: &[Override],
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<Segment>, RenderError> {
    if schedule.users.is_empty() {
        return Err(RenderError::EmptyRoster);
    }
    if schedule.handover_interval_days <= 0 {
        return Err(RenderError::NonPositiveInterval(schedule.handover_interval_days));
    }
    if let Some(o) = overrides.iter().find(|o| o.start_at >= o.end_at) {
        return Err(RenderError::DegenerateOverride {
            user: o.user.clone(),
            start: o.start_at,
            end: o.end_at,
        });
    }
    if from >= until {
        return Ok(Vec::new());
    }

    let mut events = collect_override_events(overrides, from, until);
    events.extend(collect_handover_events(schedule, from, until));
    events.sort_by(|a, b| a.at().cmp(&b.at()).then(a.priority().cmp(&b.priority())));

    let mut stack = seed_stack(overrides, from);

    let mut segments: Vec<Segment> = Vec::new();
    let mut current_time = from;
    let mut current_user = effective_user(&stack, schedule, current_time);

    for event in &events {
        if current_time < event.at() {
            segments.push(Segment {
                user: current_user.clone(),
                span: Span::new(current_time, event.at()),
            });
        }

        match event {
            Event::OverrideStart { user, .. } => stack.push(user.clone()),
            Event::OverrideEnd { user, .. } => {
                // Pop only when the ending override is on top; an
                // out-of-order end (non-nested overlap) is a no-op.
                if stack.last().is_some_and(|top| top == user) {
                    stack.pop();
                }
            }
            Event::Handover { .. } => {}
        }

        current_time = event.at();
        current_user = effective_user(&stack, schedule, current_time);
    }

    if current_time < until {
        segments.push(Segment {
            user: current_user,
            span: Span::new(current_time, until),
        });
    }

    Ok(merge_consecutive(segments))
}

/// Overrides already active at `from`, pushed oldest start first so the
/// most recently started one ends up on top of the stack.
fn seed_stack(overrides: &[Override], from: DateTime<Utc>) -> Vec<String> {
    let mut active: Vec<&Override> = overrides
        .iter()
        .filter(|o| o.start_at < from && o.end_at > from)
        .collect();
    active.sort_by_key(|o| o.start_at);
    active.into_iter().map(|o| o.user.clone()).collect()
}

fn effective_user(stack: &[String], schedule: &Schedule, at: DateTime<Utc>) -> String {
    match stack.last() {
        Some(user) => user.clone(),
        None => on_duty_at(schedule, at).to_string(),
    }
}

/// Coalesce time-contiguous segments that share a user. Single stable
/// pass, preserves order.
pub fn merge_consecutive(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();
    for segment in segments {
        if let Some(last) = merged.last_mut()
            && last.user == segment.user
            && last.span.end == segment.span.start {
                last.span.end = segment.span.end;
                continue;
            }
        merged.push(segment);
    }
    merged
}
