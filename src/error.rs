//! Error types for the glox front end

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Recoverable conditions found while scanning
///
/// These never abort a scan. The scanner formats them and hands the message
/// to a [`Reporter`] together with the current line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character that cannot start any token
    ///
    /// **Triggered by:** `@`, `#`, `$`, non-ASCII symbols outside strings
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// End of input reached inside an open string literal
    ///
    /// **Example:** `"hello` (missing closing quote)
    #[error("Unterminated string")]
    UnterminatedString,

    /// Numeric lexeme that does not decode as a 64-bit float
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// glox errors surfaced by the driver
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong command-line usage
    #[error("Usage: glox [script]")]
    Usage,

    /// Script could not be read
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// One or more lexical errors were reported while scanning a script
    #[error("{count} lexical error(s) reported")]
    Lexical {
        /// Number of reports
        count: usize,
    },

    /// Token stream could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error (sysexits-style)
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage => 64,
            Error::Lexical { .. } => 65,
            Error::Io { .. } => 1,
            Error::Json(_) => 1,
        }
    }
}

/// Result type for glox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sink for lexical error reports
///
/// Any `FnMut(usize, &str)` closure is a reporter, so callers can pass a
/// closure that prints, counts or ignores reports.
pub trait Reporter {
    /// Receives one report: 1-based line and human-readable message
    fn report(&mut self, line: usize, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// A single reported lexical error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Line number where the error was found (1-indexed)
    pub line: usize,
    /// Error description
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {} [line {}]", self.message, self.line)
    }
}

/// Reporter that records every diagnostic it receives
///
/// Serializes as a plain array of diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// True once at least one error has been reported
    pub fn had_error(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the diagnostics in report order
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Forgets every recorded diagnostic
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.entries.push(Diagnostic {
            line,
            message: message.to_string(),
        });
    }
}
