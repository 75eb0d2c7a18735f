//! Run Event Port
//!
//! Observable interface for check runs and the watch loop.
//! Drives terminal rendering and the NDJSON stream.

use serde::Serialize;

/// Event emitted by the plugin and the watch host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    /// Watch loop started
    WatchStarted { watching: Vec<String> },
    /// A debounced batch of changes was flushed
    PathsChanged { paths: Vec<String> },
    /// Checker about to run
    CheckStarted {
        full_project: bool,
        paths: Vec<String>,
    },
    /// Checker finished; `output` is omitted when output is hidden
    CheckFinished {
        passed: bool,
        exit_code: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },
    /// Error that did not stop the host
    Error { message: String },
    /// Watch loop stopped
    Shutdown,
}

impl RunEvent {
    /// NDJSON line with a `"command"` field added
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving run events
///
/// Implementations:
/// - closures (`Fn(RunEvent)`)
/// - NoopEventSink: silent operation
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

impl<F> RunEventSink for F
where
    F: Fn(RunEvent) + Send + Sync,
{
    fn on_event(&self, event: RunEvent) {
        self(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
