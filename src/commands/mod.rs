//! Top-level command orchestration.

pub mod merge;
