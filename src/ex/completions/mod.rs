//! Command-line completions
//! Detects what the command line wants completed and cycles command names

use crate::ex::definitions::{self, Completion};
use crate::ex::parser::ExParser;
use crate::ex::registry::MatchResult;
use crate::ex::scanner::split_head;

/// A completion entry as `(display, insert)`
pub type CompletionItem = (String, String);

impl ExParser {
    /// What the command in `line` completes, once its name is followed by whitespace
    pub fn completion_kind(&self, line: &str) -> Completion {
        let Some(head) = split_head(line) else {
            return Completion::None;
        };
        if !head.rest.starts_with(char::is_whitespace) {
            return Completion::None;
        }
        match self.registry().match_command(head.name) {
            MatchResult::Exact(name) | MatchResult::Prefix(name) => {
                definitions::find(&name).map_or(Completion::None, |desc| desc.completion)
            }
            MatchResult::Ambiguous { .. } | MatchResult::Unknown(_) => Completion::None,
        }
    }

    /// Whether the line is a file command waiting for a path
    pub fn wants_fs_completions(&self, line: &str) -> bool {
        self.completion_kind(line) == Completion::Path
    }

    /// Whether the line is `:set`/`:setlocal` waiting for an option name
    pub fn wants_setting_completions(&self, line: &str) -> bool {
        self.completion_kind(line) == Completion::Setting
    }
}

/// Command name completions for one command-line surface
///
/// Each answer lists the typed prefix followed by every command that
/// extends it, paired so that accepting an entry inserts the next one.
/// Asking again with any entry of the last answer returns it unchanged,
/// which lets repeated tab presses cycle through the list.
#[derive(Debug, Clone, Default)]
pub struct CompletionCache {
    prefixes: Vec<String>,
    completions: Vec<CompletionItem>,
}

impl CompletionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete `prefix` against the built-in command names
    pub fn complete(&mut self, prefix: &str) -> Vec<CompletionItem> {
        self.complete_from(prefix, definitions::completion_names())
    }

    /// Complete `prefix` against `candidates`
    pub fn complete_from<'c>(
        &mut self,
        prefix: &str,
        candidates: impl IntoIterator<Item = &'c str>,
    ) -> Vec<CompletionItem> {
        if !prefix.is_empty() && self.prefixes.iter().any(|p| p == prefix) {
            return self.completions.clone();
        }

        let matches: Vec<String> = candidates
            .into_iter()
            .filter(|name| name.starts_with(prefix) && *name != prefix)
            .map(str::to_string)
            .collect();

        let displays = std::iter::once(prefix.to_string()).chain(matches.iter().cloned());
        let inserts = matches.iter().cloned().chain(std::iter::once(prefix.to_string()));

        self.prefixes = displays.clone().collect();
        self.completions = displays.zip(inserts).collect();
        self.completions.clone()
    }

    pub fn clear(&mut self) {
        self.prefixes.clear();
        self.completions.clear();
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
