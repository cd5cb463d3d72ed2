//! Build script: embeds the release or `git describe` version into the binary.

use std::process::Command;

const VERSION_VAR: &str = "LOCKMERGE_VERSION";

/// Version pinned by the release pipeline, if any.
fn release_version() -> Option<String> {
    std::env::var(VERSION_VAR).ok().filter(|v| !v.is_empty())
}

/// `git describe` of the checkout, for development builds.
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_owned())
}

fn main() {
    if let Some(version) = release_version().or_else(git_describe) {
        println!("cargo:rustc-env={VERSION_VAR}={version}");
    }

    println!("cargo:rerun-if-env-changed={VERSION_VAR}");
    for path in [".git/HEAD", ".git/refs/"] {
        println!("cargo:rerun-if-changed={path}");
    }
}
