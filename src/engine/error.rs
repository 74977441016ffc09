use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    EmptyRoster,
    NonPositiveInterval(i64),
    DegenerateOverride {
        user: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    EmptyWindow {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EmptyRoster => {
                write!(f, "schedule must contain at least one user")
            }
            RenderError::NonPositiveInterval(days) => {
                write!(f, "handover interval must be positive, got {days} days")
            }
            RenderError::DegenerateOverride { user, start, end } => {
                write!(f, "override for {user} is empty or inverted: [{start}, {end})")
            }
            RenderError::EmptyWindow { from, until } => {
                write!(f, "'from' ({from}) must be before 'until' ({until})")
            }
        }
    }
}

impl std::error::Error for RenderError {}
