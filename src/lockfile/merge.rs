//! Kernel-filtered merge of the `moduleExtensions` section.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::selector;
use crate::error::{Input, MergeError};
use crate::platform::Os;

/// Lockfile key holding the per-platform module extension entries.
pub const EXTENSIONS_KEY: &str = "moduleExtensions";

/// Platform selector → resolved extension definition.
pub type SelectorMap = BTreeMap<String, Value>;

/// The view of a platform lockfile the merger cares about.
#[derive(Debug, Deserialize)]
struct PlatformLock {
    #[serde(default, rename = "moduleExtensions")]
    module_extensions: BTreeMap<String, SelectorMap>,
}

/// Accumulates extension entries from platform lockfiles.
///
/// Labels and selectors are kept sorted so the rendered section does not
/// depend on input key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionSet {
    labels: BTreeMap<String, SelectorMap>,
}

impl ExtensionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a platform lockfile and keep the entries whose selector names
    /// one of `os`'s kernels. Returns the number of entries kept.
    ///
    /// A lockfile without a `moduleExtensions` key contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MalformedDocument`] if `document` is not a JSON
    /// object or its `moduleExtensions` is not a map of maps.
    pub fn absorb(&mut self, os: Os, document: &[u8]) -> Result<usize, MergeError> {
        let malformed = |e| MergeError::malformed(Input::Platform(os), e);
        let object = parse_object(document).map_err(malformed)?;
        let lock = PlatformLock::deserialize(Value::Object(object)).map_err(malformed)?;
        Ok(self.extend_matching(os, lock.module_extensions))
    }

    /// Keep the entries of `extensions` whose selector names one of `os`'s
    /// kernels. Returns the number of entries kept.
    ///
    /// An entry replaces any earlier entry with the same label and selector.
    pub fn extend_matching(
        &mut self,
        os: Os,
        extensions: impl IntoIterator<Item = (String, SelectorMap)>,
    ) -> usize {
        let mut kept = 0;
        for (label, selectors) in extensions {
            for (platform, value) in selectors {
                if selector::matches(&platform, os) {
                    self.labels
                        .entry(label.clone())
                        .or_default()
                        .insert(platform, value);
                    kept += 1;
                }
            }
        }
        kept
    }

    /// Entries collected for `label`, if any.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&SelectorMap> {
        self.labels.get(label)
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no entry has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of `(label, selector)` entries across all labels.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.labels.values().map(BTreeMap::len).sum()
    }

    /// Render the set as the JSON value of the `moduleExtensions` key.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.labels
            .into_iter()
            .map(|(label, selectors)| (label, Value::Object(selectors.into_iter().collect())))
            .collect::<Map<String, Value>>()
            .into()
    }
}

/// Merges platform lockfiles into a base lockfile.
///
/// Every key of the base document other than `moduleExtensions` passes
/// through untouched and keeps its position.
///
/// ```
/// use lockmerge_cli::lockfile::Merger;
/// use lockmerge_cli::platform::Os;
///
/// let mut merger = Merger::new(br#"{"moduleExtensions": {}}"#).unwrap();
/// let kept = merger
///     .absorb(Os::MacOs, br#"{"moduleExtensions": {"e": {"os:osx": 1, "os:linux": 2}}}"#)
///     .unwrap();
/// assert_eq!(kept, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Merger {
    base: Map<String, Value>,
    extensions: ExtensionSet,
}

impl Merger {
    /// Parse the base lockfile.
    ///
    /// The base's own `moduleExtensions` entries seed the merge, so entries
    /// that apply to every platform survive and platform inputs only add or
    /// replace selectors.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MalformedDocument`] if `base` is not a JSON object
    /// or its `moduleExtensions` is not a map of maps.
    pub fn new(base: &[u8]) -> Result<Self, MergeError> {
        let malformed = |e| MergeError::malformed(Input::Base, e);
        let base = parse_object(base).map_err(malformed)?;
        let seed = match base.get(EXTENSIONS_KEY) {
            Some(value) => BTreeMap::<String, SelectorMap>::deserialize(value).map_err(malformed)?,
            None => BTreeMap::new(),
        };
        Ok(Self {
            base,
            extensions: ExtensionSet { labels: seed },
        })
    }

    /// Absorb the lockfile produced on `os`. See [`ExtensionSet::absorb`].
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MalformedDocument`] naming `os` if the document
    /// cannot be parsed.
    pub fn absorb(&mut self, os: Os, document: &[u8]) -> Result<usize, MergeError> {
        self.extensions.absorb(os, document)
    }

    /// Extensions collected so far.
    #[must_use]
    pub const fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Replace the base's `moduleExtensions` with the collected entries and
    /// serialize the result with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Serialize`] if the document cannot be encoded.
    pub fn finish(self) -> Result<Vec<u8>, MergeError> {
        let Self {
            mut base,
            extensions,
        } = self;
        base.insert(EXTENSIONS_KEY.to_string(), extensions.into_value());
        serde_json::to_vec_pretty(&base).map_err(MergeError::Serialize)
    }
}

/// Merge up to three platform lockfiles into `base`.
///
/// Platform inputs are absorbed in a fixed order (GNU/Linux, macOS,
/// Windows). `None` and empty buffers are skipped. The first error aborts the
/// merge.
///
/// # Errors
///
/// Returns [`MergeError::MalformedDocument`] for the first input that cannot
/// be parsed, or [`MergeError::Serialize`] if encoding fails.
///
/// # Examples
///
/// ```
/// let base = br#"{"lockFileVersion": 11, "moduleExtensions": {}}"#;
/// let linux = br#"{"moduleExtensions": {"//:ext.bzl%ext": {"os:linux": {"v": 1}}}}"#;
/// let merged = lockmerge_cli::lockfile::merge(base, Some(&linux[..]), None, None).unwrap();
/// let merged: serde_json::Value = serde_json::from_slice(&merged).unwrap();
/// assert_eq!(merged["moduleExtensions"]["//:ext.bzl%ext"]["os:linux"]["v"], 1);
/// ```
pub fn merge(
    base: &[u8],
    linux: Option<&[u8]>,
    macos: Option<&[u8]>,
    windows: Option<&[u8]>,
) -> Result<Vec<u8>, MergeError> {
    let mut merger = Merger::new(base)?;
    for (os, document) in Os::ALL.into_iter().zip([linux, macos, windows]) {
        if let Some(document) = document.filter(|d| !d.is_empty()) {
            merger.absorb(os, document)?;
        }
    }
    merger.finish()
}

fn parse_object(document: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_slice(document)
}
