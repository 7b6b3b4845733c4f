#![forbid(unsafe_code)]

//! Diagnostic stream, kept apart from the primary output
//!
//! Every diagnostic is rendered as `<severity>: <message>`.

use crate::types::{ColorOption, Severity};
use std::cell::RefCell;
use std::fmt;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receiver of diagnostics
pub trait Diagnostics {
    /// Record one diagnostic
    fn emit(&self, diagnostic: Diagnostic);

    /// Record a warning
    fn warn(&self, message: &str) {
        self.emit(Diagnostic::new(Severity::Warning, message));
    }

    /// Record an error
    fn error(&self, message: &str) {
        self.emit(Diagnostic::new(Severity::Error, message));
    }
}

/// Writes diagnostics to stderr, coloring the severity marker
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnostics {
    choice: ColorChoice,
}

impl StderrDiagnostics {
    pub fn new(color: ColorOption) -> Self {
        let choice = match color {
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
            ColorOption::Auto if std::io::stderr().is_terminal() => ColorChoice::Auto,
            ColorOption::Auto => ColorChoice::Never,
        };
        Self { choice }
    }

    fn write(&self, diagnostic: &Diagnostic) -> std::io::Result<()> {
        let color = match diagnostic.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        };

        let mut stream = StandardStream::stderr(self.choice);
        stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stream, "{}", diagnostic.severity)?;
        stream.reset()?;
        writeln!(stream, ": {}", diagnostic.message)?;
        stream.flush()
    }
}

impl Default for StderrDiagnostics {
    fn default() -> Self {
        Self::new(ColorOption::Auto)
    }
}

impl Diagnostics for StderrDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        // stderr is the last resort; nothing left to report a failure to
        let _ = self.write(&diagnostic);
    }
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    collected: RefCell<Vec<Diagnostic>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything collected so far
    pub fn take(&self) -> Vec<Diagnostic> {
        self.collected.take()
    }

    /// Rendered `<severity>: <message>` lines
    pub fn lines(&self) -> Vec<String> {
        self.collected.borrow().iter().map(|d| d.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.collected.borrow_mut().push(diagnostic);
    }
}
