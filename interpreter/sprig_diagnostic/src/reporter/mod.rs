//! The diagnostic sink: severity gating, rendering, history, exit policy.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::ErrorCode;

/// ANSI color codes for rendered diagnostics.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // bold red
    pub const WARNING: &str = "\x1b[1;33m"; // bold yellow
    pub const DEBUG: &str = "\x1b[1;36m"; // bold cyan
    pub const RESET: &str = "\x1b[0m";
}

/// Severity of one diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Debug => write!(f, "debug"),
        }
    }
}

/// How much the reporter actually prints.
///
/// Diagnostics below the configured level are still recorded in the history
/// and still count as errors; they are just not rendered. `Silent` is the
/// test configuration.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub enum Verbosity {
    Silent,
    Error,
    #[default]
    Warning,
    Debug,
}

/// One recorded diagnostic.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Present for errors; warnings and debug notes carry no code.
    pub code: Option<ErrorCode>,
    pub message: String,
}

impl Diagnostic {
    /// Render for a terminal, optionally with ANSI colors.
    fn render(&self, use_colors: bool) -> String {
        let (tint, reset) = if use_colors {
            let tint = match self.severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
                Severity::Debug => colors::DEBUG,
            };
            (tint, colors::RESET)
        } else {
            ("", "")
        };
        match self.code {
            Some(code) => format!(
                "{tint}{}[{code}]{reset}: {}: {}",
                self.severity,
                code.category(),
                self.message
            ),
            None => format!("{tint}{}{reset}: {}", self.severity, self.message),
        }
    }
}

/// The shared diagnostic sink.
///
/// Interior mutability keeps the call sites simple: the chunker and engine
/// hold `&Reporter` (or a shared `Rc`) and report through it freely. The
/// reporter never panics and, unless `exit_on_error` is set, never
/// terminates the process.
pub struct Reporter {
    verbosity: Verbosity,
    exit_on_error: bool,
    use_colors: bool,
    history: RefCell<Vec<Diagnostic>>,
    error_count: Cell<usize>,
}

impl Reporter {
    /// Create a reporter with the given verbosity and exit policy.
    pub fn new(verbosity: Verbosity, exit_on_error: bool) -> Self {
        Reporter {
            verbosity,
            exit_on_error,
            use_colors: true,
            history: RefCell::new(Vec::new()),
            error_count: Cell::new(0),
        }
    }

    /// A reporter that records everything and prints nothing. Used in tests.
    pub fn silent() -> Self {
        Reporter::new(Verbosity::Silent, false)
    }

    /// Disable or enable ANSI colors in rendered output.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Report an error under a category code.
    ///
    /// When the exit-on-error policy is configured this terminates the
    /// process after rendering; by default execution continues and the
    /// producing operation falls back to a void result.
    pub fn error(&self, code: ErrorCode, message: impl Into<String>) {
        self.error_count.set(self.error_count.get() + 1);
        self.record(Diagnostic {
            severity: Severity::Error,
            code: Some(code),
            message: message.into(),
        });
        if self.exit_on_error {
            std::process::exit(1);
        }
    }

    /// Report a warning.
    pub fn warning(&self, message: impl Into<String>) {
        self.record(Diagnostic {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        });
    }

    /// Report a debug note.
    pub fn debug(&self, message: impl Into<String>) {
        self.record(Diagnostic {
            severity: Severity::Debug,
            code: None,
            message: message.into(),
        });
    }

    fn record(&self, diagnostic: Diagnostic) {
        let shown = match diagnostic.severity {
            Severity::Error => self.verbosity >= Verbosity::Error,
            Severity::Warning => self.verbosity >= Verbosity::Warning,
            Severity::Debug => self.verbosity >= Verbosity::Debug,
        };
        if shown {
            eprintln!("{}", diagnostic.render(self.use_colors));
        }
        self.history.borrow_mut().push(diagnostic);
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    /// Snapshot of every diagnostic recorded so far.
    pub fn history(&self) -> Vec<Diagnostic> {
        self.history.borrow().clone()
    }

    /// Recorded errors carrying the given code.
    pub fn errors_with(&self, code: ErrorCode) -> usize {
        self.history
            .borrow()
            .iter()
            .filter(|d| d.code == Some(code))
            .count()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new(Verbosity::default(), false)
    }
}
