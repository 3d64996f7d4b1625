//! Boundary and periodic tick generation.
//!
//! # Invariants
//! - Boundary ticks are inserted first and always win position ties.
//! - Periodic candidates are aligned to multiples of the step, but major
//!   classification is anchored at the domain start, not the padded start.
//! - Candidates accumulate `+= step`, so long walks inherit float drift; a
//!   major increment that is not a multiple of the minor one may therefore be
//!   classified as minor near its boundaries.

use crate::export::number::format_axis_number;
use crate::layout::scale::AxisScale;
use crate::model::timeline::{position_key, IncrementSpec, Tick, TickKind};
use log::{debug, warn};
use std::collections::HashSet;

/// Absolute tolerance for the major periodicity check.
pub const MAJOR_TOLERANCE: f64 = 1e-6;
/// Candidate count above which generation is logged as suspicious.
pub const LARGE_TICK_COUNT_WARNING: f64 = 10_000.0;

/// Insertion-ordered tick collection deduplicated by rounded position.
#[derive(Debug, Default)]
pub struct TickSet {
    ticks: Vec<Tick>,
    seen: HashSet<i64>,
}

impl TickSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tick unless one already exists at the same rounded position.
    ///
    /// Returns whether the tick was inserted.
    pub fn add(&mut self, position: f64, label: Option<String>, kind: TickKind) -> bool {
        if !self.seen.insert(position_key(position)) {
            return false;
        }
        self.ticks.push(Tick {
            position,
            label,
            kind,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Consumes the set, returning ticks sorted ascending by position.
    pub fn into_sorted(mut self) -> Vec<Tick> {
        self.ticks.sort_by(|a, b| a.position.total_cmp(&b.position));
        self.ticks
    }
}

/// Generates the sorted tick list for one timeline.
///
/// `start_label`/`end_label` are the bound texts exactly as typed; they label
/// the two boundary ticks verbatim.
pub fn generate_ticks(
    scale: &AxisScale,
    increments: IncrementSpec,
    start_label: &str,
    end_label: &str,
) -> Vec<Tick> {
    let domain = scale.domain();
    let mut ticks = TickSet::new();

    ticks.add(
        scale.position_of(domain.start()),
        Some(start_label.to_string()),
        TickKind::Major,
    );
    ticks.add(
        scale.position_of(domain.end()),
        Some(end_label.to_string()),
        TickKind::Major,
    );

    if let Some(step) = increments.step() {
        add_periodic_ticks(&mut ticks, scale, increments, step);
    }

    debug!(
        "event=ticks_generated module=layout status=ok count={} minor={} major={}",
        ticks.len(),
        increments.minor > 0.0,
        increments.major > 0.0
    );
    ticks.into_sorted()
}

/// Estimates how many periodic candidates `generate_ticks` will walk.
///
/// Returns `None` when both increments are disabled. Generation itself is
/// never capped; hosts use this to refuse pathological increments up front.
pub fn estimate_periodic_candidates(
    scale: &AxisScale,
    increments: IncrementSpec,
) -> Option<f64> {
    increments
        .step()
        .map(|step| (scale.padded_end() - scale.padded_start()) / step)
}

fn add_periodic_ticks(
    ticks: &mut TickSet,
    scale: &AxisScale,
    increments: IncrementSpec,
    step: f64,
) {
    let start = scale.domain().start();
    let padded_start = scale.padded_start();
    let padded_end = scale.padded_end();

    let estimated = (padded_end - padded_start) / step;
    if estimated > LARGE_TICK_COUNT_WARNING {
        warn!(
            "event=ticks_large module=layout status=warn estimated_candidates={:.0} step={}",
            estimated, step
        );
    }

    let mut current = (padded_start / step).ceil() * step;
    while current <= padded_end {
        let position = scale.position_of(current);
        if position > 0.0 && position < 100.0 {
            if is_major(current, start, increments.major) {
                ticks.add(position, Some(format_axis_number(current)), TickKind::Major);
            } else {
                ticks.add(position, None, TickKind::Minor);
            }
        }

        let next = current + step;
        if next <= current {
            // Step is below the float resolution at this magnitude.
            warn!(
                "event=ticks_stalled module=layout status=warn step={} at={}",
                step, current
            );
            break;
        }
        current = next;
    }
}

fn is_major(candidate: f64, start: f64, major: f64) -> bool {
    major > 0.0 && ((candidate - start) % major).abs() < MAJOR_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::{estimate_periodic_candidates, generate_ticks, is_major, TickSet};
    use crate::layout::scale::AxisScale;
    use crate::model::timeline::{IncrementSpec, TickKind, TimelineDomain};

    fn scale(start: f64, end: f64) -> AxisScale {
        AxisScale::new(TimelineDomain::new(start, end).unwrap())
    }

    #[test]
    fn tick_set_keeps_first_of_colliding_positions() {
        let mut set = TickSet::new();
        assert!(set.add(40.0001, Some("first".to_string()), TickKind::Major));
        assert!(!set.add(40.0003, None, TickKind::Minor));
        assert!(set.add(40.001, None, TickKind::Minor));

        let ticks = set.into_sorted();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].label.as_deref(), Some("first"));
        assert_eq!(ticks[0].kind, TickKind::Major);
    }

    #[test]
    fn major_check_is_anchored_at_domain_start() {
        assert!(is_major(53.0, 3.0, 50.0));
        assert!(!is_major(50.0, 3.0, 50.0));
        assert!(is_major(-47.0, 3.0, 50.0));
        assert!(!is_major(50.0, 0.0, 0.0));
    }

    #[test]
    fn major_only_step_off_anchor_yields_unlabeled_ticks() {
        let ticks = generate_ticks(
            &scale(3.0, 103.0),
            IncrementSpec::new(0.0, 50.0),
            "3",
            "103",
        );
        let interior: Vec<_> = ticks
            .iter()
            .filter(|tick| tick.label.is_none())
            .collect();
        // Candidates 0, 50 and 100 are step-aligned but not start-aligned.
        assert_eq!(interior.len(), 3);
        assert!(interior.iter().all(|tick| tick.kind == TickKind::Minor));
    }

    #[test]
    fn estimate_covers_padded_axis_with_active_step() {
        let scale = scale(0.0, 100.0);
        assert_eq!(
            estimate_periodic_candidates(&scale, IncrementSpec::new(0.0, 0.0)),
            None
        );
        let minor_first = estimate_periodic_candidates(&scale, IncrementSpec::new(10.0, 50.0))
            .expect("minor step should be active");
        assert!((minor_first - 11.0).abs() < 1e-9);
        let major_only = estimate_periodic_candidates(&scale, IncrementSpec::new(0.0, 55.0))
            .expect("major step should be active");
        assert!((major_only - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sub_resolution_step_terminates() {
        let ticks = generate_ticks(
            &scale(1e20, 2e20),
            IncrementSpec::new(1e-3, 0.0),
            "a",
            "b",
        );
        assert!(ticks.len() >= 2);
    }
}
