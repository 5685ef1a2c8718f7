//! Ex command parser
//! Turns command lines into tokens using the declarative command table

use crate::error::Result;
use crate::ex::bar::BarMode;
use crate::ex::definitions::{CommandDescriptor, COMMANDS};
use crate::ex::registry::{CommandDef, CommandRegistry};
use crate::ex::scanner::Scanner;
use crate::ex::token::{CommandToken, Token};

/// Ex command parser
///
/// Owns the name registry, built once from [`COMMANDS`].
#[derive(Debug, Clone)]
pub struct ExParser {
    registry: CommandRegistry,
}

impl ExParser {
    /// Create a new parser over the built-in command table
    pub fn new() -> Self {
        ExParser {
            registry: Self::build_registry(COMMANDS),
        }
    }

    /// Build the name registry from declarative definitions
    fn build_registry(descriptors: &[CommandDescriptor]) -> CommandRegistry {
        descriptors.iter().fold(CommandRegistry::new(), |registry, desc| {
            registry.register(CommandDef::new(desc.name).with_aliases(desc.aliases.iter().copied()))
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Tokenize a command line, rejecting unescaped bars
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        self.tokenize_with(line, BarMode::Check)
    }

    /// Tokenize a command line with an explicit bar mode
    pub fn tokenize_with(&self, line: &str, bar_mode: BarMode) -> Vec<Token> {
        let tokens = Scanner::new(line, &self.registry, bar_mode).scan();
        tracing::trace!(line, ?tokens, "tokenized command line");
        tokens
    }

    /// Parse a command line into its command
    ///
    /// Returns `Ok(None)` for an empty line and the user-visible error when
    /// the line names no single command.
    pub fn parse(&self, line: &str) -> Result<Option<CommandToken>> {
        self.parse_with(line, BarMode::Check)
    }

    pub fn parse_with(&self, line: &str, bar_mode: BarMode) -> Result<Option<CommandToken>> {
        for token in self.tokenize_with(line, bar_mode) {
            match token {
                Token::Command(command) => return Ok(Some(command)),
                Token::Error(failure) => return Err(failure.into()),
                Token::Eof => break,
            }
        }
        Ok(None)
    }
}

impl Default for ExParser {
    fn default() -> Self {
        Self::new()
    }
}
