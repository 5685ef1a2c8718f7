//! Ex command line
//! Tokenizes, resolves and executes colon commands

/// ## ex/ Invariants
///
/// - The command table is static and never mutated after startup.
/// - Parse failures are values; they are reported to the user, never raised.
/// - Argument text reaching the host has already passed the bar rule.
pub mod bar;
pub mod completions;
pub mod definitions;
pub mod executor;
pub mod parser;
pub mod registry;
pub mod scanner;
pub mod token;

pub use bar::BarMode;
pub use completions::{CompletionCache, CompletionItem};
pub use definitions::{BarPolicy, CommandDescriptor, Completion, COMMANDS};
pub use executor::{ExExecutor, ExecutionResult};
pub use parser::ExParser;
pub use registry::{CommandDef, CommandRegistry, MatchResult};
pub use token::{CommandToken, ParseFailure, Token};
