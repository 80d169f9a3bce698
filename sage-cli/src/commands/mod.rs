//! CLI command handlers
//!
//! # Modules
//!
//! - `ask`: one query, answer plus trace summary
//! - `chat`: interactive loop over stdin
//! - `scenarios`: fixed assessment queries written to an output directory

pub mod ask;
pub mod chat;
pub mod scenarios;

use sage_observability::JsonlTraceWriter;
use sage_pipeline::SageRuntime;

/// Writer for the configured `observability.trace_log_path`.
fn trace_log(runtime: &SageRuntime) -> JsonlTraceWriter {
    JsonlTraceWriter::new(&runtime.config().observability.trace_log_path)
}
