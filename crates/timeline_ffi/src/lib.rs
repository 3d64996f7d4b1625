//! Flutter-facing bindings for the timeline engine.

pub mod api;
