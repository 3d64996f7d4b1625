//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the timeline recomputation as one sync call per form change.
//! - Flatten core types into plain envelopes the bridge can carry.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Rejected input is reported with `ok=false` and the literal user message
//!   in both `message` and `wikitext`, so the host can show it verbatim.
//!
//! # See also
//! - crates/timeline_core/src/service/timeline_service.rs

use log::warn;
use std::sync::OnceLock;
use timeline_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EventEntry, ExportConfig, PlacedEvent, Placement, Tick, TimelineForm, TimelineOutcome,
    TimelineService, DEFAULT_PERIODIC_CANDIDATE_LIMIT,
};
use uuid::Uuid;

static TIMELINE_SERVICE: OnceLock<TimelineService> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generates an identifier for a new event row.
///
/// Hosts call this when the user adds a row and pass it back with every
/// [`timeline_render`] call.
#[flutter_rust_bridge::frb(sync)]
pub fn new_event_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// One event row as typed in the host form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRowInput {
    /// Identifier from [`new_event_entry_id`]; `None` gets a fresh one.
    pub id: Option<String>,
    pub raw_date: String,
    pub label: String,
}

/// Form snapshot sent on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineFormInput {
    pub title: String,
    pub start: String,
    pub end: String,
    pub minor_increment: String,
    pub major_increment: String,
    pub events: Vec<EventRowInput>,
}

/// Axis tick render instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct TickItem {
    /// Percentage along the padded axis.
    pub position: f64,
    pub label: Option<String>,
    /// `major|minor`.
    pub kind: String,
}

/// Event marker render instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMarkerItem {
    pub entry_id: String,
    pub position: f64,
    /// Draw above the axis when `true`, below otherwise.
    pub above: bool,
    pub date_label: String,
    pub label: String,
}

/// Response envelope for one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRenderResponse {
    pub ok: bool,
    /// Empty on success; user-facing or diagnostic message otherwise.
    pub message: String,
    /// Markup for the output box, or the rejection message.
    pub wikitext: String,
    pub ticks: Vec<TickItem>,
    pub events: Vec<EventMarkerItem>,
}

impl TimelineRenderResponse {
    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            ok: false,
            wikitext: message.clone(),
            message,
            ticks: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Recomputes preview instructions and wikitext from a form snapshot.
///
/// # FFI contract
/// - Sync call, pure computation, no I/O.
/// - Never panics.
/// - Malformed event ids fail the whole call with `ok=false`.
/// - Increments that would walk more than `DEFAULT_PERIODIC_CANDIDATE_LIMIT`
///   candidates fail with `ok=false` before any tick is generated.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_render(form: TimelineFormInput) -> TimelineRenderResponse {
    let form = match to_core_form(form) {
        Ok(form) => form,
        Err(message) => return TimelineRenderResponse::failure(message),
    };

    let service = timeline_service();
    if let Err(err) = service.check_tick_budget(&form, DEFAULT_PERIODIC_CANDIDATE_LIMIT) {
        return TimelineRenderResponse::failure(err.to_string());
    }

    match service.render(&form) {
        Ok(TimelineOutcome::Rendered(render)) => TimelineRenderResponse {
            ok: true,
            message: String::new(),
            wikitext: render.wikitext,
            ticks: render.ticks.into_iter().map(to_tick_item).collect(),
            events: render.events.into_iter().map(to_event_marker_item).collect(),
        },
        Ok(TimelineOutcome::Rejected(err)) => TimelineRenderResponse::failure(err.to_string()),
        Err(err) => {
            warn!("event=ffi_render module=ffi status=error error={err}");
            TimelineRenderResponse::failure(format!("timeline_render failed: {err}"))
        }
    }
}

fn timeline_service() -> &'static TimelineService {
    TIMELINE_SERVICE.get_or_init(|| TimelineService::new(ExportConfig::from_env()))
}

fn to_core_form(form: TimelineFormInput) -> Result<TimelineForm, String> {
    let events = form
        .events
        .into_iter()
        .map(to_event_entry)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TimelineForm {
        title: form.title,
        start: form.start,
        end: form.end,
        minor_increment: form.minor_increment,
        major_increment: form.major_increment,
        events,
    })
}

fn to_event_entry(row: EventRowInput) -> Result<EventEntry, String> {
    match row.id {
        Some(raw) => {
            let id = Uuid::parse_str(raw.trim())
                .map_err(|err| format!("invalid event id `{raw}`: {err}"))?;
            Ok(EventEntry::with_id(id, row.raw_date, row.label))
        }
        None => Ok(EventEntry::new(row.raw_date, row.label)),
    }
}

fn to_tick_item(tick: Tick) -> TickItem {
    TickItem {
        position: tick.position,
        label: tick.label,
        kind: tick.kind.as_str().to_string(),
    }
}

fn to_event_marker_item(placed: PlacedEvent) -> EventMarkerItem {
    EventMarkerItem {
        entry_id: placed.entry_id.to_string(),
        position: placed.position,
        above: placed.placement == Placement::Above,
        date_label: placed.event.date_label,
        label: placed.event.label,
    }
}
