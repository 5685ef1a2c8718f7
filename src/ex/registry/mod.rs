//! Command registry
//! Resolves typed command names against canonical names and abbreviations

/// Result of matching a command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match found (command name or accepted abbreviation)
    Exact(String),
    /// Unique prefix of a single command
    Prefix(String),
    /// Ambiguous - multiple commands match
    Ambiguous { prefix: String, matches: Vec<String> },
    /// No match found
    Unknown(String),
}

/// Command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Canonical command name
    pub name: String,
    /// Accepted abbreviations for this command
    pub aliases: Vec<String>,
}

impl CommandDef {
    /// Create a new command definition
    pub fn new(name: impl Into<String>) -> Self {
        CommandDef {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an abbreviation
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add multiple abbreviations
    pub fn with_aliases<S: Into<String>>(mut self, aliases: impl IntoIterator<Item = S>) -> Self {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Command registry
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Register a command
    pub fn register(mut self, cmd: CommandDef) -> Self {
        self.commands.push(cmd);
        self
    }

    /// Match an input string to a command
    ///
    /// Matching order:
    /// 1. Exact match against a command name or abbreviation
    /// 2. Unique prefix of a command name or abbreviation
    /// 3. Ambiguous if several commands share the prefix
    /// 4. Unknown otherwise
    ///
    /// Names are case-sensitive: `Tabn` is not `tabn`.
    pub fn match_command(&self, input: &str) -> MatchResult {
        let input = input.trim();

        if input.is_empty() {
            return MatchResult::Unknown(input.to_string());
        }

        if let Some(cmd) = self.commands.iter().find(|cmd| cmd.names().any(|n| n == input)) {
            return MatchResult::Exact(cmd.name.clone());
        }

        let matches: Vec<String> = self
            .commands
            .iter()
            .filter(|cmd| cmd.names().any(|n| n.starts_with(input)))
            .map(|cmd| cmd.name.clone())
            .collect();

        match matches.len() {
            0 => MatchResult::Unknown(input.to_string()),
            1 => MatchResult::Prefix(matches[0].clone()),
            _ => MatchResult::Ambiguous {
                prefix: input.to_string(),
                matches,
            },
        }
    }

    /// Get all registered command names
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
