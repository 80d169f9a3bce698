//! Append-only trace-event log.

use std::sync::Mutex;

use sage_core::models::{TaskId, TraceEvent, TraceEventKind};
use sage_core::traits::ITraceSink;

/// Collects trace events in emission order and mirrors each one to `tracing`.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<TraceEvent>>,
    /// Maximum events to retain (ring buffer behavior). `None` keeps everything.
    max_events: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a retention cap; the oldest events are dropped first.
    pub fn with_capacity(max_events: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            max_events: Some(max_events),
        }
    }

    /// Snapshot of all retained events.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.lock().clone()
    }

    /// Events belonging to one task, in emission order.
    pub fn events_for(&self, task_id: &TaskId) -> Vec<TraceEvent> {
        self.lock()
            .iter()
            .filter(|e| &e.task_id == task_id)
            .cloned()
            .collect()
    }

    /// Event kinds for one task, in emission order.
    pub fn kinds_for(&self, task_id: &TaskId) -> Vec<TraceEventKind> {
        self.events_for(task_id).iter().map(|e| e.event).collect()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TraceEvent>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ITraceSink for EventLog {
    fn emit(&self, event: TraceEvent) {
        tracing::info!(
            event = event.event.as_str(),
            task_id = %event.task_id,
            payload = %event.payload,
            "trace"
        );

        let mut events = self.lock();
        events.push(event);
        if let Some(max) = self.max_events {
            if events.len() > max {
                let excess = events.len() - max;
                events.drain(..excess);
            }
        }
    }
}
