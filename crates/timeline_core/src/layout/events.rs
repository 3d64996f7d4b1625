//! Event placement on the padded axis.
//!
//! # Invariants
//! - Entries with an unparsable date, an empty label or a position outside
//!   `0..=100` are dropped silently.
//! - Above/below alternation follows the index in the host's entry list,
//!   counting dropped entries too; chronological order is applied only to the
//!   document copy.

use crate::layout::scale::AxisScale;
use crate::model::event::{EventEntry, PlacedEvent, Placement, TimelineEvent};
use crate::parse::value::parse_value;
use log::debug;

/// Result of placing one batch of event entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventPlacement {
    /// Retained events in input order.
    pub placed: Vec<PlacedEvent>,
    /// Number of entries excluded for any reason.
    pub dropped: usize,
}

impl EventPlacement {
    /// Returns the resolved events for serialization, still in input order.
    pub fn timeline_events(&self) -> Vec<TimelineEvent> {
        self.placed.iter().map(|placed| placed.event.clone()).collect()
    }
}

/// Resolves and positions `entries` against `scale`.
pub fn place_events(scale: &AxisScale, entries: &[EventEntry]) -> EventPlacement {
    let mut placement = EventPlacement::default();

    for (index, entry) in entries.iter().enumerate() {
        match place_event(scale, index, entry) {
            Some(placed) => placement.placed.push(placed),
            None => placement.dropped += 1,
        }
    }

    debug!(
        "event=events_placed module=layout status=ok placed={} dropped={}",
        placement.placed.len(),
        placement.dropped
    );
    placement
}

fn place_event(scale: &AxisScale, index: usize, entry: &EventEntry) -> Option<PlacedEvent> {
    if entry.label.is_empty() {
        return None;
    }
    let date = parse_value(&entry.raw_date)?;
    let position = scale.position_of(date);
    if !AxisScale::is_visible(position) {
        return None;
    }

    Some(PlacedEvent {
        entry_id: entry.id,
        position,
        placement: Placement::for_index(index),
        event: TimelineEvent {
            date,
            date_label: entry.raw_date.clone(),
            label: entry.label.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::place_events;
    use crate::layout::scale::AxisScale;
    use crate::model::event::{EventEntry, Placement};
    use crate::model::timeline::TimelineDomain;

    fn scale() -> AxisScale {
        AxisScale::new(TimelineDomain::new(0.0, 100.0).unwrap())
    }

    #[test]
    fn drops_bad_dates_empty_labels_and_out_of_range_events() {
        let entries = vec![
            EventEntry::new("not a date", "bad"),
            EventEntry::new("10", ""),
            EventEntry::new("-6", "too early"),
            EventEntry::new("105", "edge"),
            EventEntry::new("40", "kept"),
        ];
        let placement = place_events(&scale(), &entries);

        assert_eq!(placement.dropped, 3);
        let labels: Vec<_> = placement
            .placed
            .iter()
            .map(|placed| placed.event.label.as_str())
            .collect();
        assert_eq!(labels, vec!["edge", "kept"]);
    }

    #[test]
    fn alternation_counts_dropped_entries() {
        let entries = vec![
            EventEntry::new("10", "a"),
            EventEntry::new("oops", "dropped"),
            EventEntry::new("20", "c"),
            EventEntry::new("30", "d"),
        ];
        let placement = place_events(&scale(), &entries);
        let sides: Vec<_> = placement
            .placed
            .iter()
            .map(|placed| placed.placement)
            .collect();
        assert_eq!(
            sides,
            vec![Placement::Above, Placement::Above, Placement::Below]
        );
    }

    #[test]
    fn placed_events_keep_entry_identity_and_raw_text() {
        let entry = EventEntry::new(" 25 ", "quarter");
        let placement = place_events(&scale(), std::slice::from_ref(&entry));
        let placed = &placement.placed[0];
        assert_eq!(placed.entry_id, entry.id);
        assert_eq!(placed.event.date, 25.0);
        assert_eq!(placed.event.date_label, " 25 ");
    }
}
