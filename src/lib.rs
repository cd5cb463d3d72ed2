//! Module lockfile merger.
//!
//! Combines the `MODULE.bazel.lock`-style lockfiles produced on GNU/Linux,
//! macOS and Windows into one lockfile. Each platform contributes only the
//! `moduleExtensions` entries whose platform selector names its own kernel
//! (`os:linux`, `os:macos`/`os:osx`, `os:windows`); every other key comes from
//! a base lockfile.
//!
//! The public API is organised into these layers:
//!
//! - **[`lockfile`]** — selector filtering and the pure merge function
//! - **[`platform`]** — supported operating systems and their kernel names
//! - **[`error`]** — typed merge errors
//! - **[`commands`]** — file reading and output for the `lockmerge` binary
//! - **[`cli`]** and **[`logging`]** — argument parsing and stderr diagnostics
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod lockfile;
pub mod logging;
pub mod platform;
