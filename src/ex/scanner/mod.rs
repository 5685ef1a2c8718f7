//! Command line scanner
//! State machine turning one command line into a token stream

/// ## scanner/ Invariants
///
/// - The token stream always ends with exactly one `Token::Eof`.
/// - At most one command or error token precedes it.
/// - Scanning never panics on malformed input.
use crate::ex::bar::{self, BarMode};
use crate::ex::definitions::{self, CommandDescriptor};
use crate::ex::registry::{CommandRegistry, MatchResult};
use crate::ex::token::{CommandToken, ParseFailure, Token};

#[derive(Debug, Clone, Copy)]
enum ScanState {
    ScanningCommandName,
    ScanningArguments {
        command: &'static CommandDescriptor,
        forced: bool,
    },
    EndOfInput,
}

/// Leading characters skipped before the command name
fn is_leader(c: char) -> bool {
    c == ':' || c.is_whitespace()
}

/// Scanner over a single command line
pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
    registry: &'a CommandRegistry,
    bar_mode: BarMode,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str, registry: &'a CommandRegistry, bar_mode: BarMode) -> Self {
        Scanner {
            line,
            pos: 0,
            registry,
            bar_mode,
            tokens: Vec::new(),
        }
    }

    /// Run the state machine to the end of input
    pub fn scan(mut self) -> Vec<Token> {
        let mut state = ScanState::ScanningCommandName;
        loop {
            state = match state {
                ScanState::ScanningCommandName => self.scan_command_name(),
                ScanState::ScanningArguments { command, forced } => {
                    self.scan_arguments(command, forced)
                }
                ScanState::EndOfInput => {
                    self.tokens.push(Token::Eof);
                    return self.tokens;
                }
            };
        }
    }

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let line = self.line;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &line[start..self.pos]
    }

    /// The command line as shown in diagnostics
    fn display_line(&self) -> String {
        self.line.trim_start_matches(is_leader).trim_end().to_string()
    }

    fn fail(&mut self, failure: ParseFailure) -> ScanState {
        self.tokens.push(Token::Error(failure));
        ScanState::EndOfInput
    }

    fn scan_command_name(&mut self) -> ScanState {
        self.skip_while(is_leader);

        let Some(first) = self.peek() else {
            return ScanState::EndOfInput;
        };

        let name = if first.is_ascii_alphabetic() {
            self.skip_while(|c| c.is_ascii_alphabetic())
        } else {
            // Single-character commands such as `&` or `!` are not supported
            let line = self.line;
            let start = self.pos;
            self.consume();
            &line[start..self.pos]
        };

        match self.registry.match_command(name) {
            MatchResult::Exact(canonical) | MatchResult::Prefix(canonical) => {
                let Some(command) = definitions::find(&canonical) else {
                    // Registry and descriptor table disagree
                    return self.fail(ParseFailure::Unknown {
                        name: self.display_line(),
                    });
                };
                let forced = self.peek() == Some('!');
                if forced {
                    self.consume();
                }
                ScanState::ScanningArguments { command, forced }
            }
            MatchResult::Ambiguous { prefix, matches } => {
                self.fail(ParseFailure::Ambiguous { prefix, matches })
            }
            MatchResult::Unknown(_) => self.fail(ParseFailure::Unknown {
                name: self.display_line(),
            }),
        }
    }

    fn scan_arguments(&mut self, command: &'static CommandDescriptor, forced: bool) -> ScanState {
        self.skip_while(char::is_whitespace);

        let line = self.line;
        let raw = &line[self.pos..];
        self.pos = line.len();

        let args = if self.bar_mode == BarMode::Verbatim || command.bar.is_literal(raw) {
            raw.to_string()
        } else {
            match bar::unescape(raw) {
                Some(args) => args,
                None => {
                    return self.fail(ParseFailure::TrailingCharacters {
                        line: self.display_line(),
                    })
                }
            }
        };

        self.tokens.push(Token::Command(CommandToken {
            name: command.name,
            target: command.target,
            forced,
            args,
        }));
        ScanState::EndOfInput
    }
}

/// Command name, bang and remaining text of a command line, unresolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head<'a> {
    pub name: &'a str,
    pub forced: bool,
    /// Everything after the name and bang, including leading whitespace
    pub rest: &'a str,
}

/// Split a command line into its head without consulting the registry
pub fn split_head(line: &str) -> Option<Head<'_>> {
    let body = line.trim_start_matches(is_leader);
    let name_len = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    if name_len == 0 {
        return None;
    }

    let (name, rest) = body.split_at(name_len);
    let (forced, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    Some(Head { name, forced, rest })
}
