//! Reporter adapters.

use std::sync::{Arc, Mutex};

use archgen_core::application::ports::{Reporter, Severity};

/// Forwards progress events to `tracing`.
///
/// Info and success map to INFO, warnings to WARN, error and fatal to ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info | Severity::Success => {
                tracing::info!(severity = %severity, "{message}")
            }
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error | Severity::Fatal => {
                tracing::error!(severity = %severity, "{message}")
            }
        }
    }
}

/// Records every event in memory; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Messages reported at `severity`, in order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((severity, message.to_string()));
        }
    }
}
