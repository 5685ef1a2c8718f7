//! Tokens produced by one scan of an ex command line

use crate::error::{ErrorType, VintageError};

/// A resolved command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken {
    /// Canonical command name
    pub name: &'static str,
    /// Host action to run
    pub target: &'static str,
    /// Set by a `!` directly after the name
    pub forced: bool,
    /// Argument text, bar-unescaped
    pub args: String,
}

/// Why a command line could not be resolved to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// No registered command matches the name
    Unknown { name: String },
    /// The name is a prefix of several commands
    Ambiguous { prefix: String, matches: Vec<String> },
    /// An unescaped `|` in a command that does not take one
    TrailingCharacters { line: String },
}

impl ParseFailure {
    /// User-visible error for this failure
    pub fn to_error(&self) -> VintageError {
        match self {
            ParseFailure::Unknown { name } => VintageError::new(
                ErrorType::Parse,
                "E492",
                format!("E492: Not an editor command: {name}"),
            ),
            ParseFailure::Ambiguous { prefix, matches } => VintageError::new(
                ErrorType::Parse,
                "E464",
                format!(
                    "E464: Ambiguous use of user-defined command: {prefix} ({})",
                    matches.join(", ")
                ),
            ),
            ParseFailure::TrailingCharacters { line } => VintageError::new(
                ErrorType::Parse,
                "E488",
                format!("E488: Trailing characters: {line}"),
            ),
        }
    }
}

impl From<ParseFailure> for VintageError {
    fn from(failure: ParseFailure) -> Self {
        failure.to_error()
    }
}

/// One lexical unit of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Command(CommandToken),
    Error(ParseFailure),
    /// End of input; always the last token
    Eof,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}
