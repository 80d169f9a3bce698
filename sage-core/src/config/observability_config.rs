use serde::{Deserialize, Serialize};

/// Logging and trace-persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset. Default: "info".
    pub log_level: String,
    /// Emit log lines as JSON instead of the human format. Default: false.
    pub json_logs: bool,
    /// Newline-delimited JSON file that receives one line per handled query.
    pub trace_log_path: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            trace_log_path: "outputs/agent_traces.jsonl".to_string(),
        }
    }
}
