//! Platform selector parsing.
//!
//! A selector is a comma-separated list of tags such as
//! `os:macos,arch:aarch64`. Only `os:` tags take part in filtering.

use crate::platform::Os;

const OS_PREFIX: &str = "os:";

/// Iterate the kernel names carried by the `os:` tags of `selector`.
///
/// # Examples
///
/// ```
/// use lockmerge_cli::lockfile::selector::kernels;
///
/// let found: Vec<&str> = kernels("os:osx,arch:aarch64").collect();
/// assert_eq!(found, ["osx"]);
/// ```
pub fn kernels(selector: &str) -> impl Iterator<Item = &str> {
    selector
        .split(',')
        .filter_map(|token| token.strip_prefix(OS_PREFIX))
}

/// Check whether any `os:` tag of `selector` names a kernel of `os`.
#[must_use]
pub fn matches(selector: &str, os: Os) -> bool {
    kernels(selector).any(|kernel| os.accepts(kernel))
}
