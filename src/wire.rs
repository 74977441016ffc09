use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{self, RenderError};
use crate::model::{Override, Schedule, Segment};

/// One rendered timeline entry as it appears on the wire: instants are
/// ISO-8601 strings in UTC with a `Z` designator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub user: String,
    pub start_at: String,
    pub end_at: String,
}

impl From<Segment> for Entry {
    fn from(segment: Segment) -> Self {
        Entry {
            user: segment.user,
            start_at: format_instant(segment.span.start),
            end_at: format_instant(segment.span.end),
        }
    }
}

/// Validated entry point over [`engine::render`].
///
/// Rejects an empty or inverted window loudly, where the engine itself
/// would quietly return an empty timeline. Both layers are intentional:
/// callers embedding the engine may pass zero-width windows, the outward
/// surface may not.
pub fn render_schedule(
    schedule: &Schedule,
    overrides: &[Override],
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<Entry>, RenderError> {
    if from >= until {
        return Err(RenderError::EmptyWindow { from, until });
    }
    let segments = engine::render(schedule, overrides, from, until)?;
    Ok(segments.into_iter().map(Entry::from).collect())
}

fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
