//! Use-case services exposed to host layers.
//!
//! # Responsibility
//! - Provide one synchronous recomputation entry point per input change.
//! - Keep host layers free of layout/serialization details.

pub mod timeline_service;
