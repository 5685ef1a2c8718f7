//! Ex command executor
//! Runs parsed command lines through the host window

use crate::error::manager::ErrorManager;
use crate::ex::bar::BarMode;
use crate::ex::definitions;
use crate::ex::parser::ExParser;
use crate::host::{CommandArgs, Window};

/// Result of executing one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The host was asked to run `target`
    Success { target: &'static str },
    /// Nothing to run (empty line)
    Empty,
    /// Error occurred (already reported to the manager)
    Failure,
}

/// Command executor
#[derive(Debug, Clone, Default)]
pub struct ExExecutor {
    parser: ExParser,
}

impl ExExecutor {
    pub fn new(parser: ExParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &ExParser {
        &self.parser
    }

    /// Execute a command line typed by the user
    pub fn execute(
        &self,
        line: &str,
        window: &mut dyn Window,
        errors: &mut ErrorManager<'_>,
    ) -> ExecutionResult {
        self.execute_with(line, BarMode::Check, window, errors)
    }

    /// Execute a command line whose bars were already checked and unescaped
    pub fn execute_verbatim(
        &self,
        line: &str,
        window: &mut dyn Window,
        errors: &mut ErrorManager<'_>,
    ) -> ExecutionResult {
        self.execute_with(line, BarMode::Verbatim, window, errors)
    }

    fn execute_with(
        &self,
        line: &str,
        bar_mode: BarMode,
        window: &mut dyn Window,
        errors: &mut ErrorManager<'_>,
    ) -> ExecutionResult {
        let command = match self.parser.parse_with(line, bar_mode) {
            Ok(Some(command)) => command,
            Ok(None) => return ExecutionResult::Empty,
            Err(err) => {
                errors.handle(err);
                return ExecutionResult::Failure;
            }
        };

        if let Some(err) = definitions::find(command.name).and_then(|desc| desc.unsupported_error()) {
            errors.handle(err);
            return ExecutionResult::Failure;
        }

        tracing::debug!(target_command = command.target, forced = command.forced, "run ex command");
        window.run_command(
            command.target,
            &CommandArgs {
                forced: command.forced,
                args: command.args,
            },
        );
        ExecutionResult::Success {
            target: command.target,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
