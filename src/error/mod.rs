//! Errors
//! One structured error type for parse, config, I/O and invariant failures

use std::fmt;

pub mod manager;

/// How far an error reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// One command line or rc line failed; the next one still runs
    Error,
    /// The core was driven into a state it does not allow
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        })
    }
}

/// Where an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Reading or writing the rc file
    Io,
    /// Ex command lines and rc lines
    Parse,
    /// Environment overrides
    Config,
    /// Misuse of the core's own state
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Io => "IO",
            Self::Parse => "Parse",
            Self::Config => "Config",
            Self::Internal => "Internal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VintageError {
    pub severity: ErrorSeverity,
    pub kind: ErrorType,
    /// Vim error number (`E488`) or a symbolic code (`RECURSIVE_MAPPING`)
    pub code: String,
    /// Text shown to the user unchanged
    pub message: String,
}

impl VintageError {
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(ErrorSeverity::Error, kind, code, message)
    }

    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(ErrorSeverity::Critical, kind, code, message)
    }

    fn with_severity(
        severity: ErrorSeverity,
        kind: ErrorType,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Bad user input rather than a bug in the caller
    pub fn is_recoverable(&self) -> bool {
        self.severity < ErrorSeverity::Critical
    }

    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for VintageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}({}): {}", self.severity, self.kind, self.code, self.message)
    }
}

impl std::error::Error for VintageError {}

impl From<std::io::Error> for VintageError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, "IO_ERROR", err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VintageError>;
