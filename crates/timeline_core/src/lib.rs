//! Core timeline engine.
//! This crate owns value parsing, tick/event layout and wiki export; hosts
//! only collect form values and draw the returned instructions.

pub mod export;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parse;
pub mod service;

pub use export::number::format_axis_number;
pub use export::wikitext::{
    ExportConfig, ExportError, DEFAULT_TEMPLATE_NAME, TEMPLATE_NAME_ENV,
};
pub use layout::events::{place_events, EventPlacement};
pub use layout::scale::AxisScale;
pub use layout::ticks::{estimate_periodic_candidates, generate_ticks, TickSet};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::document::TimelineDocument;
pub use model::event::{EventEntry, EventEntryId, PlacedEvent, Placement, TimelineEvent};
pub use model::timeline::{DomainError, IncrementSpec, Tick, TickKind, TimelineDomain};
pub use parse::value::{parse_increment, parse_value};
pub use service::timeline_service::{
    InputError, RenderError, TickBudgetExceeded, TimelineForm, TimelineOutcome, TimelineRender,
    TimelineService, DEFAULT_PERIODIC_CANDIDATE_LIMIT,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
