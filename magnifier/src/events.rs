//! Engagement events emitted by the viewer.
//!
//! The surrounding page consumes these to drive its own callbacks and to
//! feed whatever analytics pipeline it ships engagement data to. Events are
//! plain serializable values; the viewer itself never touches the network.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    Opened,
    Closed,
    ZoomChanged { level: f64 },
    DragStarted,
    DragEnded,
    PinchStarted,
    PinchEnded,
}

/// One engagement event with a unique id for downstream dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerEvent {
    pub id: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ViewerEvent {
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self { id: Uuid::new_v4().to_string(), kind }
    }

    /// JSON form for log sinks.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
