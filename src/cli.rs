//! Command-line interface definition.
use std::convert::Infallible;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::platform::Os;

/// Version string: `LOCKMERGE_VERSION` at build time, else the crate version.
pub const VERSION: &str = match option_env!("LOCKMERGE_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Merge per-platform module lockfiles into a single lockfile.
#[derive(Parser, Debug)]
#[command(name = "lockmerge", version = VERSION)]
pub struct Cli {
    /// Base lockfile supplying every key other than `moduleExtensions`
    pub base: PathBuf,

    /// Lockfile produced on GNU/Linux
    #[arg(long, value_name = "PATH", value_parser = path_arg)]
    pub linux: Option<PathBuf>,

    /// Lockfile produced on macOS
    #[arg(long, value_name = "PATH", value_parser = path_arg)]
    pub macos: Option<PathBuf>,

    /// Lockfile produced on Windows
    #[arg(long, value_name = "PATH", value_parser = path_arg)]
    pub windows: Option<PathBuf>,

    /// Lockfile produced on this machine; counts as the host platform's input
    #[arg(short, long, value_name = "PATH", value_parser = path_arg)]
    pub local: Option<PathBuf>,

    /// Write the merged lockfile here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Platform lockfile paths after `--local` has been routed to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformPaths {
    /// GNU/Linux lockfile.
    pub linux: Option<PathBuf>,
    /// macOS lockfile.
    pub macos: Option<PathBuf>,
    /// Windows lockfile.
    pub windows: Option<PathBuf>,
}

impl PlatformPaths {
    /// Path given for `os`, if any.
    #[must_use]
    pub const fn get(&self, os: Os) -> Option<&PathBuf> {
        match os {
            Os::Linux => self.linux.as_ref(),
            Os::MacOs => self.macos.as_ref(),
            Os::Windows => self.windows.as_ref(),
        }
    }

    const fn slot(&mut self, os: Os) -> &mut Option<PathBuf> {
        match os {
            Os::Linux => &mut self.linux,
            Os::MacOs => &mut self.macos,
            Os::Windows => &mut self.windows,
        }
    }
}

impl Cli {
    /// Resolve the platform inputs, routing `--local` to the host platform.
    ///
    /// An empty path means "no file for this platform", matching how build
    /// scripts pass through unset variables.
    ///
    /// # Errors
    ///
    /// Returns a usage error if `--local` is given on a host that produces no
    /// supported lockfile flavour, or if the host platform's flag is also set.
    pub fn platform_paths(&self) -> Result<PlatformPaths, clap::Error> {
        self.platform_paths_for(Os::detect())
    }

    /// Like [`platform_paths`](Self::platform_paths) with an explicit host.
    ///
    /// # Errors
    ///
    /// See [`platform_paths`](Self::platform_paths).
    pub fn platform_paths_for(&self, host: Option<Os>) -> Result<PlatformPaths, clap::Error> {
        let mut paths = PlatformPaths {
            linux: non_empty(self.linux.as_ref()),
            macos: non_empty(self.macos.as_ref()),
            windows: non_empty(self.windows.as_ref()),
        };
        let Some(local) = non_empty(self.local.as_ref()) else {
            return Ok(paths);
        };
        let Some(host) = host else {
            return Err(Self::command().error(
                ErrorKind::InvalidValue,
                "--local is not supported on this operating system",
            ));
        };
        let slot = paths.slot(host);
        if slot.is_some() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("--local names the {host} lockfile, which was already given"),
            ));
        }
        *slot = Some(local);
        Ok(paths)
    }
}

/// Path parser that, unlike clap's default, lets an empty value through.
#[allow(clippy::unnecessary_wraps)]
fn path_arg(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

fn non_empty(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}
