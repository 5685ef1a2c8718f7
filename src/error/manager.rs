//! Error Manager
//! Routes recoverable errors to the user and to the debug log

use crate::error::{ErrorSeverity, VintageError};
use crate::host::MessageSink;

/// Reports errors through the host's status bar and console.
///
/// Nothing routed through here is fatal: the error is shown, logged, and the
/// caller moves on to the next line or binding.
pub struct ErrorManager<'a> {
    sink: &'a mut dyn MessageSink,
    reported: usize,
}

impl<'a> ErrorManager<'a> {
    /// Create a manager that writes to `sink`
    pub fn new(sink: &'a mut dyn MessageSink) -> Self {
        Self { sink, reported: 0 }
    }

    pub fn handle(&mut self, err: VintageError) {
        match err.severity {
            ErrorSeverity::Critical => tracing::error!(code = %err.code, "{}", err.message),
            ErrorSeverity::Error => tracing::debug!(code = %err.code, "{}", err.message),
        }
        self.sink.message(&err.message);
        self.reported += 1;
    }

    /// Number of errors reported so far
    #[must_use]
    pub fn reported(&self) -> usize {
        self.reported
    }
}
