//! Structured logger with per-input summary collection.
use std::sync::{Mutex, PoisonError};

use super::STAGE_TARGET;
use super::types::{InputEntry, InputStatus};
use crate::platform::Os;

/// Structured logger that records what happened to each platform input.
///
/// Messages are emitted as [`tracing`] events; [`init_subscriber`](super::init_subscriber)
/// decides which of them reach the console.
#[derive(Debug, Default)]
pub struct Logger {
    inputs: Mutex<Vec<InputEntry>>,
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record the outcome of a platform input for the summary.
    pub fn record_input(&self, os: Os, status: InputStatus) {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(InputEntry { os, status });
    }

    /// Return a clone of all recorded input entries.
    #[must_use]
    pub fn input_entries(&self) -> Vec<InputEntry> {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Total number of extension entries kept across merged inputs.
    #[must_use]
    pub fn merged_entry_count(&self) -> usize {
        self.input_entries()
            .iter()
            .map(|entry| match entry.status {
                InputStatus::Merged(n) => n,
                InputStatus::Absent => 0,
            })
            .sum()
    }

    /// Print the summary of all recorded inputs.
    pub fn print_summary(&self) {
        let inputs = self.input_entries();
        if inputs.is_empty() {
            return;
        }

        self.stage("Summary");
        let mut merged = 0usize;
        for entry in &inputs {
            match entry.status {
                InputStatus::Merged(n) => {
                    merged += 1;
                    self.info(&format!("\x1b[32m✓\x1b[0m {}: {n} entries", entry.os));
                }
                InputStatus::Absent => {
                    self.info(&format!("\x1b[2m· {}: not given\x1b[0m", entry.os));
                }
            }
        }
        self.info(&format!(
            "{merged} of {} platform lockfiles merged, {} entries",
            inputs.len(),
            self.merged_entry_count()
        ));
    }
}
