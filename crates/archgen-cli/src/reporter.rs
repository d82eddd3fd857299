//! Reporter that prints service events through the [`OutputManager`].

use std::sync::Arc;

use archgen_adapters::TracingReporter;
use archgen_core::application::{Reporter, Severity};

use crate::output::OutputManager;

/// Prints each event with the glyph for its severity and forwards it to
/// the log stream.
///
/// Info lines are dropped unless `show_info` is set, so `archgen-impl`
/// only lists analyzed files when run with `--verbose`.
pub struct ConsoleReporter {
    output: Arc<OutputManager>,
    show_info: bool,
}

impl ConsoleReporter {
    pub fn new(output: Arc<OutputManager>, show_info: bool) -> Self {
        Self { output, show_info }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        TracingReporter.report(severity, message);
        // Console write failures (closed pipe) must not abort a run.
        let _ = match severity {
            Severity::Info if self.show_info => self.output.info(message),
            Severity::Info => Ok(()),
            Severity::Success => self.output.success(message),
            Severity::Warning => self.output.warning(message),
            Severity::Error | Severity::Fatal => self.output.error(message),
        };
    }
}
