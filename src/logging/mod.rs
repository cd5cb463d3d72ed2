//! Logging infrastructure: a [`Logger`] facade over [`tracing`] and the
//! console subscriber that renders it on stderr.
//!
//! Standard output carries the merged lockfile, so nothing in this module
//! ever writes to it.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{InputEntry, InputStatus};

/// Target used for stage headers.
pub(crate) const STAGE_TARGET: &str = "lockmerge::stage";
