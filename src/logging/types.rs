//! Core logging types: per-input summary entries and their status.
use crate::platform::Os;

/// Outcome of one platform input for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    /// Platform the input was produced on.
    pub os: Os,
    /// What happened to the input.
    pub status: InputStatus,
}

/// Status of a platform input once the merge has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// The input was merged; holds the number of extension entries kept.
    Merged(usize),
    /// No file was given for this platform.
    Absent,
}
