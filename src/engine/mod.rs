mod error;
mod events;
mod render;
mod rotation;

pub use error::RenderError;
pub use events::{Event, collect_handover_events, collect_override_events};
pub use render::{merge_consecutive, render};
pub use rotation::{on_duty_at, shift_start};
