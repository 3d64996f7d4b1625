//! Tick and event layout engine.
//!
//! # Responsibility
//! - Map axis values onto a percentage scale with a fixed 5% margin per side.
//! - Generate boundary and periodic ticks, and place events on the same scale.
//!
//! # Invariants
//! - Every emitted position lies in `0..=100`.
//! - Layout functions are pure; they keep no state between calls.

pub mod events;
pub mod scale;
pub mod ticks;
