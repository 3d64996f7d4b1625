//! Event entries (host input) and their resolved/placed forms.
//!
//! # Responsibility
//! - Carry host-owned event rows by value into the engine.
//! - Describe resolved events for serialization and placed events for rendering.
//!
//! # Invariants
//! - `EventEntryId` is assigned by the host or generated here; it is never
//!   derived from a process-wide counter.
//! - `TimelineEvent::label` is never empty.

use crate::export::number::serialize_axis_number;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of one event row in the host form.
pub type EventEntryId = Uuid;

/// Raw event row as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: EventEntryId,
    /// Unparsed date text (number, ISO date, RFC 2822...).
    #[serde(alias = "date")]
    pub raw_date: String,
    pub label: String,
}

impl EventEntry {
    /// Creates an entry with a freshly generated identifier.
    pub fn new(raw_date: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), raw_date, label)
    }

    /// Creates an entry with a host-assigned identifier.
    pub fn with_id(
        id: EventEntryId,
        raw_date: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            raw_date: raw_date.into(),
            label: label.into(),
        }
    }
}

/// Event with a resolved axis value, as written into the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    #[serde(serialize_with = "serialize_axis_number")]
    pub date: f64,
    /// Date text exactly as the user typed it.
    pub date_label: String,
    pub label: String,
}

/// Side of the axis an event marker is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Above,
    Below,
}

impl Placement {
    /// Even input indices go above, odd ones below.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Above
        } else {
            Self::Below
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

/// Render instruction for one retained event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent {
    pub entry_id: EventEntryId,
    /// Percentage along the padded axis, `0..=100`.
    pub position: f64,
    pub placement: Placement,
    pub event: TimelineEvent,
}

#[cfg(test)]
mod tests {
    use super::{EventEntry, Placement};
    use uuid::Uuid;

    #[test]
    fn placement_alternates_from_above() {
        assert_eq!(Placement::for_index(0), Placement::Above);
        assert_eq!(Placement::for_index(1), Placement::Below);
        assert_eq!(Placement::for_index(4), Placement::Above);
    }

    #[test]
    fn with_id_keeps_host_identifier() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let entry = EventEntry::with_id(id, "1900", "Founded");
        assert_eq!(entry.id, id);
        assert_ne!(EventEntry::new("1", "a").id, EventEntry::new("1", "a").id);
    }

    #[test]
    fn deserialize_generates_missing_identifier() {
        let entry: EventEntry =
            serde_json::from_value(serde_json::json!({ "date": "-44", "label": "Ides" }))
                .unwrap();
        assert!(!entry.id.is_nil());
        assert_eq!(entry.raw_date, "-44");
    }
}
