//! Core domain types
//!
//! These types mirror the JSON representations served by the ATC pipeline API.
//! They are plain values: the client decodes them per call and never caches them.

pub mod pipeline;
