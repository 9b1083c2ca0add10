//! Console output sinks.
//!
//! Colorized vs plain output is a presentation concern: everything the run
//! loop prints goes through the [`OutputSink`] capability, and the two
//! implementations only differ in whether they color the line. All output
//! goes to stdout; errors are a severity, not a second stream.

use std::io::IsTerminal;

use colored::Colorize;

use crate::config::ColorChoice;

/// What kind of line is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress notice (`Resolving : <token>`) or separator
    Progress,
    /// A resolved name or address
    Record,
    /// A per-token or run-level error
    Error,
}

/// Write-line capability used by the run loop.
pub trait OutputSink {
    /// Writes one line of output at the given severity.
    fn write_line(&mut self, severity: Severity, text: &str);
}

/// Sink that colors records green and errors red, tab-indented.
pub struct ColorSink;

impl OutputSink for ColorSink {
    fn write_line(&mut self, severity: Severity, text: &str) {
        match severity {
            Severity::Progress => println!("{text}"),
            Severity::Record => println!("\t{}", text.green()),
            Severity::Error => println!("\t{}", text.red()),
        }
    }
}

/// Sink with identical layout and no color codes.
pub struct PlainSink;

impl OutputSink for PlainSink {
    fn write_line(&mut self, severity: Severity, text: &str) {
        match severity {
            Severity::Progress => println!("{text}"),
            Severity::Record | Severity::Error => println!("\t{text}"),
        }
    }
}

/// Builds the sink for the given color mode.
///
/// `Auto` picks color only when stdout is a terminal. `Always` also forces
/// the colored crate's own tty detection, so colors survive piping.
pub fn build_sink(choice: ColorChoice) -> Box<dyn OutputSink> {
    match choice {
        ColorChoice::Always => {
            colored::control::set_override(true);
            Box::new(ColorSink)
        }
        ColorChoice::Never => Box::new(PlainSink),
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                Box::new(ColorSink)
            } else {
                Box::new(PlainSink)
            }
        }
    }
}
