//! Command: merge platform lockfiles into the base lockfile.
use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::{Cli, PlatformPaths, VERSION};
use crate::lockfile::Merger;
use crate::logging::{InputStatus, Logger};
use crate::platform::Os;

/// Run the merge command and write the result to stdout or `--output`.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, or the merged
/// document cannot be written. Nothing is written in that case.
pub fn run(cli: &Cli, paths: &PlatformPaths, log: &Logger) -> Result<()> {
    log.debug(&format!("lockmerge {VERSION}"));

    let merged = merge_files(&cli.base, paths, log)?;
    log.print_summary();

    log.stage("Writing merged lockfile");
    write_output(&merged, cli.output.as_deref())
}

/// Read the base and platform lockfiles and merge them.
///
/// Files are read and absorbed in merge order; the first failure aborts.
///
/// # Errors
///
/// Returns an error naming the file if it cannot be read, or the
/// [`MergeError`](crate::error::MergeError) if it cannot be parsed.
pub fn merge_files(base: &Path, paths: &PlatformPaths, log: &Logger) -> Result<Vec<u8>> {
    log.stage("Reading base lockfile");
    let base_bytes = read_lockfile(base, "base")?;
    let mut merger = Merger::new(&base_bytes)?;
    log.debug(&format!("base: {}", base.display()));

    log.stage("Merging platform lockfiles");
    for os in Os::ALL {
        let Some(path) = paths.get(os) else {
            log.debug(&format!("{os}: no lockfile given"));
            log.record_input(os, InputStatus::Absent);
            continue;
        };
        let document = read_lockfile(path, os.display_name())?;
        if document.is_empty() {
            log.warn(&format!("{os} lockfile is empty, skipping: {}", path.display()));
            log.record_input(os, InputStatus::Absent);
            continue;
        }
        let kept = merger.absorb(os, &document)?;
        log.info(&format!("{os}: kept {kept} entries from {}", path.display()));
        log.record_input(os, InputStatus::Merged(kept));
    }

    let extensions = merger.extensions();
    log.debug(&format!(
        "{} extensions, {} platform entries",
        extensions.len(),
        extensions.entry_count()
    ));
    Ok(merger.finish()?)
}

/// Write the merged lockfile to `output`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if the destination cannot be written.
pub fn write_output(merged: &[u8], output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        return fs::write(path, merged)
            .with_context(|| format!("failed to write merged lockfile: {}", path.display()));
    }
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(merged)
        .and_then(|()| stdout.flush())
        .context("failed to write merged lockfile to stdout")
}

fn read_lockfile(path: &Path, what: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {what} lockfile: {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::error::{Input, MergeError};
    use serde_json::{Value, json};
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, value: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn merges_files_and_records_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.json", &json!({"moduleExtensions": {}}));
        let linux = write(
            dir.path(),
            "linux.json",
            &json!({"moduleExtensions": {"e": {"os:linux": 1, "os:osx": 2}}}),
        );
        let paths = PlatformPaths {
            linux: Some(linux),
            ..PlatformPaths::default()
        };
        let log = Logger::new();

        let out = merge_files(&base, &paths, &log).unwrap();

        let doc: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["moduleExtensions"], json!({"e": {"os:linux": 1}}));
        let inputs = log.input_entries();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].status, InputStatus::Merged(1));
        assert_eq!(inputs[1].status, InputStatus::Absent);
        assert_eq!(inputs[2].status, InputStatus::Absent);
    }

    #[test]
    fn empty_platform_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.json", &json!({}));
        let empty = dir.path().join("empty.json");
        fs::write(&empty, "").unwrap();
        let paths = PlatformPaths {
            windows: Some(empty),
            ..PlatformPaths::default()
        };
        let log = Logger::new();

        merge_files(&base, &paths, &log).unwrap();

        assert_eq!(log.input_entries()[2].status, InputStatus::Absent);
    }

    #[test]
    fn missing_platform_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.json", &json!({}));
        let paths = PlatformPaths {
            macos: Some(dir.path().join("nope.json")),
            ..PlatformPaths::default()
        };

        let err = merge_files(&base, &paths, &Logger::new()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("failed to read macOS lockfile"), "{msg}");
        assert!(msg.contains("nope.json"), "{msg}");
    }

    #[test]
    fn malformed_platform_file_keeps_merge_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.json", &json!({}));
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{").unwrap();
        let paths = PlatformPaths {
            linux: Some(bad),
            ..PlatformPaths::default()
        };

        let err = merge_files(&base, &paths, &Logger::new()).unwrap_err();

        let merge_err = err.downcast_ref::<MergeError>().unwrap();
        assert_eq!(merge_err.input(), Some(Input::Platform(Os::Linux)));
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("merged.json");
        write_output(b"{}", Some(out.as_path())).unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"{}");
    }

    #[test]
    fn write_output_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("merged.json");
        let err = write_output(b"{}", Some(out.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to write merged lockfile"));
    }
}
