// Shared helpers for integration tests.
//
// Provides a temporary directory seeded with the lockfile fixtures from
// `tests/fixtures/` and a fluent builder for writing extra inputs, so each
// test can set up an isolated set of lockfiles without repeating filesystem
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lockmerge_cli::cli::PlatformPaths;

/// Directory holding the checked-in lockfile fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Read a fixture file as text.
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("read fixture")
}

/// An isolated set of lockfiles backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct LockfileWorkspace {
    /// Temporary directory containing the lockfiles.
    pub root: tempfile::TempDir,
}

impl LockfileWorkspace {
    /// Create a workspace with copies of every fixture lockfile.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for name in ["main.json", "linux.json", "macos.json", "windows.json"] {
            std::fs::copy(fixtures_dir().join(name), root.path().join(name))
                .expect("copy fixture");
        }
        Self { root }
    }

    /// Path of a file inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Paths for the three platform fixtures.
    pub fn all_platforms(&self) -> PlatformPaths {
        PlatformPaths {
            linux: Some(self.path("linux.json")),
            macos: Some(self.path("macos.json")),
            windows: Some(self.path("windows.json")),
        }
    }

    /// Write `content` to `name`, overwriting any fixture copy.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("write lockfile");
        self
    }

    /// Read a file from the workspace as text.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read lockfile")
    }
}
