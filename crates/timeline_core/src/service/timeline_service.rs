//! Timeline recomputation service.
//!
//! # Responsibility
//! - Turn one snapshot of form values into ticks, placed events, the document
//!   and its wikitext.
//! - Report the two bound errors as values carrying their user-facing text.
//!
//! # Invariants
//! - `render` is pure: identical forms produce identical outcomes.
//! - The service owns only immutable export settings.

use crate::export::wikitext::{ExportConfig, ExportError};
use crate::layout::events::place_events;
use crate::layout::scale::AxisScale;
use crate::layout::ticks::{estimate_periodic_candidates, generate_ticks};
use crate::model::document::TimelineDocument;
use crate::model::event::{EventEntry, PlacedEvent};
use crate::model::timeline::{DomainError, IncrementSpec, Tick, TimelineDomain};
use crate::parse::value::{parse_increment, parse_value};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Periodic candidate count hosts refuse by default before rendering.
pub const DEFAULT_PERIODIC_CANDIDATE_LIMIT: f64 = 100_000.0;

/// Snapshot of the host form, passed by value on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineForm {
    pub title: String,
    /// Start bound text exactly as typed.
    pub start: String,
    /// End bound text exactly as typed.
    pub end: String,
    pub minor_increment: String,
    pub major_increment: String,
    /// Event rows in host display order.
    pub events: Vec<EventEntry>,
}

/// User-facing input errors. `Display` yields the literal message shown in
/// place of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Start or end is neither a number nor a date.
    UnparsableBound,
    /// Start is not strictly before end.
    InvertedRange,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparsableBound => write!(
                f,
                "Please enter valid numeric or date values for the start and end of the timeline."
            ),
            Self::InvertedRange => write!(f, "Start date must be less than the end date."),
        }
    }
}

impl Error for InputError {}

impl From<DomainError> for InputError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NonFinite => Self::UnparsableBound,
            DomainError::InvertedRange { .. } => Self::InvertedRange,
        }
    }
}

/// Increments would make the synchronous render walk too many candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickBudgetExceeded {
    pub estimated: f64,
    pub limit: f64,
}

impl Display for TickBudgetExceeded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tick increments are too small for this range: about {:.0} ticks would be generated (limit {:.0}). Use a larger minor or major increment.",
            self.estimated, self.limit
        )
    }
}

impl Error for TickBudgetExceeded {}

/// Everything a host needs to draw the preview and show the markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRender {
    /// Sorted ascending by position.
    pub ticks: Vec<Tick>,
    /// Input order, with alternation flags.
    pub events: Vec<PlacedEvent>,
    pub document: TimelineDocument,
    pub wikitext: String,
}

/// Outcome of one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineOutcome {
    Rendered(TimelineRender),
    Rejected(InputError),
}

impl TimelineOutcome {
    /// Text for the markup output box: wikitext, or the error message.
    pub fn output_text(&self) -> String {
        match self {
            Self::Rendered(render) => render.wikitext.clone(),
            Self::Rejected(err) => err.to_string(),
        }
    }

    pub fn rendered(&self) -> Option<&TimelineRender> {
        match self {
            Self::Rendered(render) => Some(render),
            Self::Rejected(_) => None,
        }
    }
}

/// Internal failure that is not an input problem.
#[derive(Debug)]
pub enum RenderError {
    Export(ExportError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Export(err) => Some(err),
        }
    }
}

impl From<ExportError> for RenderError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Stateless recomputation service.
#[derive(Debug, Clone, Default)]
pub struct TimelineService {
    export: ExportConfig,
}

impl TimelineService {
    pub fn new(export: ExportConfig) -> Self {
        Self { export }
    }

    pub fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    /// Recomputes the whole timeline from `form`.
    ///
    /// # Errors
    /// - Returns `RenderError` only when the payload cannot be encoded; bound
    ///   problems are reported as `TimelineOutcome::Rejected`.
    pub fn render(&self, form: &TimelineForm) -> Result<TimelineOutcome, RenderError> {
        let domain = match resolve_domain(form) {
            Ok(domain) => domain,
            Err(err) => {
                debug!(
                    "event=timeline_rejected module=service status=rejected reason={:?}",
                    err
                );
                return Ok(TimelineOutcome::Rejected(err));
            }
        };

        let increments = form_increments(form);
        let scale = AxisScale::new(domain);

        let ticks = generate_ticks(&scale, increments, &form.start, &form.end);
        let placement = place_events(&scale, &form.events);
        let document = TimelineDocument::new(
            form.title.clone(),
            domain.start(),
            domain.end(),
            increments.minor,
            increments.major,
            placement.timeline_events(),
        );
        let wikitext = document.to_wikitext(&self.export).map_err(|err| {
            error!("event=timeline_export module=service status=error error={err}");
            RenderError::from(err)
        })?;

        debug!(
            "event=timeline_rendered module=service status=ok ticks={} events={} dropped_events={}",
            ticks.len(),
            placement.placed.len(),
            placement.dropped
        );

        Ok(TimelineOutcome::Rendered(TimelineRender {
            ticks,
            events: placement.placed,
            document,
            wikitext,
        }))
    }

    /// Estimates the periodic candidates `render` would walk for `form`.
    ///
    /// Returns `None` when the bounds are rejected or both increments are off.
    pub fn periodic_candidate_estimate(&self, form: &TimelineForm) -> Option<f64> {
        let domain = resolve_domain(form).ok()?;
        estimate_periodic_candidates(&AxisScale::new(domain), form_increments(form))
    }

    /// Refuses forms whose increments exceed `limit` periodic candidates.
    ///
    /// `render` itself never caps; hosts call this first.
    pub fn check_tick_budget(
        &self,
        form: &TimelineForm,
        limit: f64,
    ) -> Result<(), TickBudgetExceeded> {
        match self.periodic_candidate_estimate(form) {
            Some(estimated) if estimated > limit => {
                warn!(
                    "event=tick_budget module=service status=rejected estimated={:.0} limit={:.0}",
                    estimated, limit
                );
                Err(TickBudgetExceeded { estimated, limit })
            }
            _ => Ok(()),
        }
    }
}

fn form_increments(form: &TimelineForm) -> IncrementSpec {
    IncrementSpec::new(
        parse_increment(&form.minor_increment),
        parse_increment(&form.major_increment),
    )
}

fn resolve_domain(form: &TimelineForm) -> Result<TimelineDomain, InputError> {
    let (Some(start), Some(end)) = (parse_value(&form.start), parse_value(&form.end)) else {
        return Err(InputError::UnparsableBound);
    };
    Ok(TimelineDomain::new(start, end)?)
}
