//! host_lookup library: forward/reverse DNS resolution with address
//! classification.
//!
//! Given a hostname or IP address, this library decides the lookup direction
//! from the address classification (RFC1918 private and public unicast
//! addresses are reverse-resolved, hostnames forward-resolved, loopback
//! rejected, other reserved space skipped) and runs the lookup through a
//! pluggable resolver.
//!
//! # Example
//!
//! ```no_run
//! use host_lookup::{build_sink, init_resolver, run_lookups, ColorChoice, RunMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver()?;
//! let mut sink = build_sink(ColorChoice::Auto);
//! let report = run_lookups(
//!     RunMode::Single("8.8.8.8".to_string()),
//!     &resolver,
//!     sink.as_mut(),
//! )?;
//! println!("{} succeeded, {} failed", report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod input;
pub mod lookup;
pub mod output;
pub mod resolver;

// Re-export public API
pub use classify::{classify, classify_ip, is_global_unicast, is_rfc1918, AddressClass};
pub use config::{ColorChoice, LogFormat, LogLevel, Opt};
pub use error_handling::{
    error_kind, InitializationError, InputError, LookupError, LookupErrorKind, LookupStats,
    UsageError,
};
pub use initialization::{init_logger_with, init_resolver};
pub use lookup::{resolve_token, select_strategy, Strategy};
pub use output::{build_sink, OutputSink, Severity};
pub use resolver::{HostResolver, SystemResolver};
pub use run::{run_lookups, LookupReport, RunMode};

// Internal run module (contains the sequential lookup loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;

    use crate::error_handling::{error_kind, InputError, LookupStats};
    use crate::input::{check_input_file, read_lines, should_skip};
    use crate::lookup::resolve_token;
    use crate::output::{OutputSink, Severity};
    use crate::resolver::HostResolver;

    /// What a run operates on: one token, or a file of tokens.
    #[derive(Debug, Clone)]
    pub enum RunMode {
        /// Resolve exactly one hostname or address
        Single(String),
        /// Resolve each eligible line of the given file, top to bottom
        Batch(PathBuf),
    }

    /// Results of a lookup run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Number of tokens a resolution was attempted for
        pub attempted: usize,
        /// Number of tokens resolved without error
        pub succeeded: usize,
        /// Number of tokens that failed to resolve
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the lookups for the given mode.
    ///
    /// Tokens are processed strictly in order, each resolved to completion
    /// (including blocking network I/O) before the next is started. Per-token
    /// failures are written to the sink and counted, and never abort the
    /// remaining batch. Skipped lines (comments, leading-space lines, blanks)
    /// are not counted as attempted.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` when the batch file is missing, is a
    /// directory, or cannot be read. These abort the run before any
    /// resolution is attempted.
    pub fn run_lookups(
        mode: RunMode,
        resolver: &dyn HostResolver,
        sink: &mut dyn OutputSink,
    ) -> Result<LookupReport, InputError> {
        let start = Instant::now();
        let mut stats = LookupStats::new();
        let mut attempted = 0usize;
        let mut succeeded = 0usize;

        match mode {
            RunMode::Single(token) => {
                attempted += 1;
                if process_token(&token, resolver, sink, &mut stats) {
                    succeeded += 1;
                }
            }
            RunMode::Batch(path) => {
                check_input_file(&path)?;
                let lines = read_lines(&path)?;
                for line in &lines {
                    if should_skip(line) {
                        continue;
                    }
                    attempted += 1;
                    if process_token(line, resolver, sink, &mut stats) {
                        succeeded += 1;
                    }
                }
            }
        }

        let failed = attempted - succeeded;
        info!(
            "Run statistics: total={}, successful={}, failed={}",
            attempted, succeeded, failed
        );
        stats.log_summary();

        Ok(LookupReport {
            attempted,
            succeeded,
            failed,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Resolves one token and writes its outcome to the sink.
    ///
    /// Returns whether the token resolved without error.
    fn process_token(
        token: &str,
        resolver: &dyn HostResolver,
        sink: &mut dyn OutputSink,
        stats: &mut LookupStats,
    ) -> bool {
        let outcome = resolve_token(token, resolver, sink);
        let ok = match outcome {
            Ok(results) => {
                for result in &results {
                    sink.write_line(Severity::Record, result);
                }
                true
            }
            Err(e) => {
                stats.record(error_kind(&e));
                sink.write_line(Severity::Error, &e.to_string());
                false
            }
        };

        // Blank separator block after each token's result set
        sink.write_line(Severity::Progress, "");
        sink.write_line(Severity::Progress, "");
        ok
    }
}
