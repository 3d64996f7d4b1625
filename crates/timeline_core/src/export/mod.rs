//! Embeddable export formats.
//!
//! # Responsibility
//! - Encode a `TimelineDocument` as wiki template markup.
//! - Keep number formatting consistent between tick labels and payloads.

pub mod number;
pub mod wikitext;
