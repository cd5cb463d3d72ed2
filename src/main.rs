//! `lockmerge` binary entry point.
use anyhow::Result;
use clap::Parser;

use lockmerge_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let paths = args.platform_paths().unwrap_or_else(|e| e.exit());
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    commands::merge::run(&args, &paths, &log)
}
