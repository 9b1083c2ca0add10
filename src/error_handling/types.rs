//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolver(String),
}

/// Error types for a single lookup.
///
/// Per-token failures are reported and never abort a batch run.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The input parsed as an IP address and is the loopback address.
    ///
    /// Detected before any lookup is attempted.
    #[error("IP is loopback")]
    LoopbackInput,

    /// The forward or reverse lookup failed (host not found, network error,
    /// timeout). Wraps the resolver's native error.
    #[error("lookup failed: {0}")]
    Resolver(#[from] ResolveError),
}

/// Error types for batch input file access.
///
/// These are fatal: they abort the run before any resolution is attempted.
#[derive(Error, Debug)]
pub enum InputError {
    /// The batch file path does not exist.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// The batch file path is a directory, not a file.
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    /// The batch file could not be opened or read.
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Ambiguous CLI invocation: more than one bare target without a list flag.
///
/// Fatal; the binary prints this with the usage text and exits before doing
/// any work.
#[derive(Error, Debug)]
#[error("Please look up one thing at a time")]
pub struct UsageError;

/// Categories of per-token lookup failures, used for statistics counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    /// Input was the loopback address
    LoopbackInput,
    /// Lookup returned no records (NXDOMAIN or empty answer)
    NoRecordsFound,
    /// Lookup timed out
    Timeout,
    /// Network-level failure reaching the resolver
    Network,
    /// Any other resolver failure
    OtherResolver,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorKind {
    /// Returns a human-readable label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::LoopbackInput => "Loopback input",
            LookupErrorKind::NoRecordsFound => "No records found",
            LookupErrorKind::Timeout => "Lookup timeout",
            LookupErrorKind::Network => "Network error",
            LookupErrorKind::OtherResolver => "Other resolver error",
        }
    }
}
