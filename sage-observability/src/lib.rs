//! # sage-observability
//!
//! Side channels only: nothing here feeds back into pipeline decisions.
//!
//! - [`EventLog`]: in-memory, emission-ordered sink for coordinator trace events
//! - [`JsonlTraceWriter`]: appends one JSON line per handled query
//! - [`tracing_setup`]: subscriber initialisation and span macros

pub mod event_log;
pub mod trace_log;
pub mod tracing_setup;

pub use event_log::EventLog;
pub use trace_log::JsonlTraceWriter;
