use crate::models::TraceEvent;

/// Receiver for coordinator trace events. Append-only, ordered by emission.
pub trait ITraceSink: Send + Sync {
    fn emit(&self, event: TraceEvent);
}
