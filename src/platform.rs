//! Supported platforms and the kernel names that identify them.
use std::fmt;

/// Operating system a platform lockfile was produced on.
///
/// Variants are declared in merge order: inputs are always absorbed as
/// GNU/Linux, then macOS, then Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Os {
    /// GNU/Linux.
    Linux,
    /// macOS (Darwin).
    MacOs,
    /// Microsoft Windows.
    Windows,
}

impl Os {
    /// Every supported operating system, in merge order.
    pub const ALL: [Self; 3] = [Self::Linux, Self::MacOs, Self::Windows];

    /// Kernel names that identify this OS inside an `os:` selector token.
    #[must_use]
    pub const fn kernels(self) -> &'static [&'static str] {
        match self {
            Self::Linux => &["linux"],
            Self::MacOs => &["macos", "osx"],
            Self::Windows => &["windows"],
        }
    }

    /// Check whether `kernel` is one of the names accepted for this OS.
    #[must_use]
    pub fn accepts(self, kernel: &str) -> bool {
        self.kernels().contains(&kernel)
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linux => "GNU/Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
        }
    }

    /// Detect the operating system this binary was built for.
    ///
    /// Returns `None` on hosts that produce none of the supported lockfile
    /// flavours (e.g. the BSDs).
    #[must_use]
    pub const fn detect() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
