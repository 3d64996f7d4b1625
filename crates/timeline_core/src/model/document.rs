//! Serializable timeline aggregate.
//!
//! # Invariants
//! - `events` is sorted ascending by `date`.
//! - Field names match the wiki template schema exactly.

use crate::export::number::serialize_axis_number;
use crate::model::event::TimelineEvent;
use serde::Serialize;

/// Full data handed to the render sink and the serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDocument {
    pub title: String,
    #[serde(serialize_with = "serialize_axis_number")]
    pub start_date: f64,
    #[serde(serialize_with = "serialize_axis_number")]
    pub end_date: f64,
    #[serde(serialize_with = "serialize_axis_number")]
    pub minor_increment: f64,
    #[serde(serialize_with = "serialize_axis_number")]
    pub major_increment: f64,
    pub events: Vec<TimelineEvent>,
}

impl TimelineDocument {
    /// Builds a document, sorting events chronologically.
    ///
    /// The sort is stable, so same-date events keep their input order.
    pub fn new(
        title: impl Into<String>,
        start_date: f64,
        end_date: f64,
        minor_increment: f64,
        major_increment: f64,
        mut events: Vec<TimelineEvent>,
    ) -> Self {
        events.sort_by(|a, b| a.date.total_cmp(&b.date));
        Self {
            title: title.into(),
            start_date,
            end_date,
            minor_increment,
            major_increment,
            events,
        }
    }
}
