//! Diagnostic channel for faults the session store recovers from locally.

use std::sync::{Arc, Mutex};

/// Sink for recovered faults. [`crate::SessionStore::init_user`] reports here
/// instead of returning an error.
pub trait Diagnostics {
    fn report(&self, event: &str, detail: &str);
}

/// Emits every report as a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: &str, detail: &str) {
        tracing::error!(event = %event, "{detail}");
    }
}

/// A single captured report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub event: String,
    pub detail: String,
}

/// Keeps reports in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Report>> {
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, event: &str, detail: &str) {
        self.lock().push(Report {
            event: event.to_string(),
            detail: detail.to_string(),
        });
    }
}
