//! On-call schedule rendering: a cyclic rotation with a fixed handover
//! cadence, preempted by time-bounded overrides, rendered into a merged,
//! user-attributed segment timeline covering a query window.

pub mod engine;
pub mod model;
pub mod store;
pub mod wire;
