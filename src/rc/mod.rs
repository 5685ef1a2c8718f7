//! Run-control file
//! Loads the user's `.vintageousrc`, one ex command per line

/// ## rc/ Invariants
///
/// - Only non-recursive mapping directives and `let` are executed.
/// - A bad line is reported and skipped; later lines still run.
/// - Lines reaching the executor have already passed the bar rule.
use crate::error::manager::ErrorManager;
use crate::error::{ErrorType, Result, VintageError};
use crate::ex::definitions::{self, CommandDescriptor};
use crate::ex::{bar, ExExecutor, ExecutionResult, ParseFailure};
use crate::host::{MessageSink, Window};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the run-control file
pub const RC_FILE_NAME: &str = ".vintageousrc";

/// First line of a freshly created run-control file
pub const RC_HEADER: &str = "\" Type :h vintageousrc for help.\n";

/// Commands a run-control line may start with
///
/// The recursive ones are listed so they can be rejected with a hint.
const DIRECTIVES: &[&str] = &[
    "noremap", "map", "nnoremap", "nmap", "snoremap", "smap", "vnoremap", "vmap", "onoremap",
    "omap", "let",
];

/// Turn one line of the file into a command line to execute
///
/// Returns `Ok(None)` for blank lines, comments and anything that is not a
/// recognised directive. The returned text has no leading `:` and any `\|`
/// has been unescaped.
pub fn parse_line(line: &str) -> Result<Option<String>> {
    let line = line.trim_end();
    let cmdline = line.strip_prefix(':').unwrap_or(line);

    let Some((cmd, _)) = cmdline.split_once(' ') else {
        return Ok(None);
    };
    if !DIRECTIVES.contains(&cmd) {
        return Ok(None);
    }

    if let Some(err) = definitions::find(cmd).and_then(CommandDescriptor::unsupported_error) {
        return Err(err);
    }

    match bar::unescape(cmdline) {
        Some(cmdline) => Ok(Some(cmdline)),
        None => Err(ParseFailure::TrailingCharacters {
            line: line.to_string(),
        }
        .into()),
    }
}

/// Outcome of loading the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines handed to the host
    pub executed: usize,
    /// Lines that were rejected or failed to run
    pub failed: usize,
}

/// The user's run-control file
#[derive(Debug, Clone)]
pub struct RunControl {
    path: PathBuf,
}

impl RunControl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run every accepted line through `executor`
    ///
    /// A missing file is not an error; it loads nothing.
    pub fn load(
        &self,
        executor: &ExExecutor,
        window: &mut dyn Window,
        sink: &mut dyn MessageSink,
    ) -> Result<LoadReport> {
        tracing::debug!(path = %self.path.display(), "run rcfile");

        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("rcfile not found");
                return Ok(LoadReport::default());
            }
            Err(err) => return Err(err.into()),
        };

        let mut report = LoadReport::default();
        // Lines are decoded one at a time
        for raw in content.split(|b| *b == b'\n') {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) => parse_line(line),
                Err(err) => Err(VintageError::new(
                    ErrorType::Parse,
                    "INVALID_UTF8",
                    format!("invalid UTF-8: {err}"),
                )),
            };

            let cmdline = match parsed {
                Ok(Some(cmdline)) => cmdline,
                Ok(None) => continue,
                Err(err) => {
                    let line = String::from_utf8_lossy(raw);
                    let msg = format!(
                        "error detected while processing {} at line {}: {}",
                        self.path.display(),
                        line.trim_end(),
                        err.message
                    );
                    sink.message(&msg);
                    tracing::debug!("{msg}");
                    report.failed += 1;
                    continue;
                }
            };

            let mut errors = ErrorManager::new(&mut *sink);
            match executor.execute_verbatim(&format!(":{cmdline}"), window, &mut errors) {
                ExecutionResult::Success { .. } => report.executed += 1,
                ExecutionResult::Empty => {}
                ExecutionResult::Failure => report.failed += 1,
            }
        }

        Ok(report)
    }

    /// Load the file again after the user edited it
    pub fn reload(
        &self,
        executor: &ExExecutor,
        window: &mut dyn Window,
        sink: &mut dyn MessageSink,
    ) -> Result<LoadReport> {
        self.load(executor, window, sink)
    }

    /// Open the file for editing, creating it with a help header if needed
    pub fn open(&self, window: &mut dyn Window) -> Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, RC_HEADER)?;
            tracing::debug!(path = %self.path.display(), "created rcfile");
        }
        window.open_file(&self.path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
