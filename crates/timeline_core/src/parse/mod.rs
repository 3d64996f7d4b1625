//! Raw form text parsing.
//!
//! # Responsibility
//! - Turn user-typed bound, event and increment text into axis values.
//!
//! # Invariants
//! - Parse failure is a value (`None` / `0`), never an error or panic.

pub mod value;
