//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `host_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use host_lookup::{
    build_sink, init_logger_with, init_resolver, run_lookups, Opt, RunMode, Severity, UsageError,
};

fn main() -> Result<()> {
    let opt = Opt::parse();

    // Initialize logger based on CLI flags
    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Decide what this invocation operates on. Ambiguous invocations print
    // usage and exit 0; they are never treated as a batch of targets.
    let mode = if let Some(path) = opt.list.clone() {
        RunMode::Batch(path)
    } else {
        match opt.targets.as_slice() {
            [single] => RunMode::Single(single.clone()),
            [] => {
                Opt::command().print_help().ok();
                return Ok(());
            }
            _ => {
                println!("{UsageError}\n");
                Opt::command().print_help().ok();
                return Ok(());
            }
        }
    };
    let is_batch = matches!(mode, RunMode::Batch(_));

    let mut sink = build_sink(opt.color);
    let resolver = match init_resolver() {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("host_lookup error: {e}");
            process::exit(1);
        }
    };

    match run_lookups(mode, &resolver, sink.as_mut()) {
        Ok(report) => {
            if is_batch {
                println!(
                    "Processed {} lookup{} ({} succeeded, {} failed) in {:.1}s",
                    report.attempted,
                    if report.attempted == 1 { "" } else { "s" },
                    report.succeeded,
                    report.failed,
                    report.elapsed_seconds
                );
            }
        }
        Err(e) => {
            // Batch file problems abort the run but keep exit status 0
            sink.write_line(Severity::Error, &e.to_string());
        }
    }

    Ok(())
}
