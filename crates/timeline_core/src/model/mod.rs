//! Timeline domain model.
//!
//! # Responsibility
//! - Define the value types flowing between host, engine and serializer.
//! - Keep one validated shape for the numeric axis.
//!
//! # Invariants
//! - A `TimelineDomain` always satisfies `start < end`.
//! - Everything here is rebuilt per recomputation; nothing carries identity
//!   across rebuilds except host-assigned `EventEntryId`s.

pub mod document;
pub mod event;
pub mod timeline;
