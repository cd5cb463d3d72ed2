//! Lockfile merging: selector filtering and the `moduleExtensions` merger.

mod merge;
pub mod selector;

pub use merge::{EXTENSIONS_KEY, ExtensionSet, Merger, SelectorMap, merge};
