//! Host collaborator surface
//!
//! The host editor owns views, windows, settings storage and the status
//! bar. The core only talks to them through these traits.

/// ## host/ Invariants
///
/// - The core never stores a surface; it borrows one per event.
/// - Settings are scoped to a single surface.
/// - Surface ids are stable for the lifetime of the surface.
use std::path::Path;

/// Stable identifier of an editing surface (a host view)
pub type SurfaceId = u64;

/// Scope selector that marks the ex command-line input panel
pub const CMDLINE_SCOPE: &str = "text.excmdline";

/// A value held in a surface's settings store
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Str(String),
}

impl SettingValue {
    /// Truthiness as the host sees it
    pub fn is_truthy(&self) -> bool {
        match self {
            SettingValue::Bool(b) => *b,
            SettingValue::Integer(n) => *n != 0,
            SettingValue::Str(s) => !s.is_empty(),
        }
    }
}

/// Per-surface key/value settings store
pub trait Settings {
    fn get(&self, key: &str) -> Option<SettingValue>;
    fn set(&mut self, key: &str, value: SettingValue);
    fn erase(&mut self, key: &str);

    /// Boolean lookup with a default for absent keys
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, |v| v.is_truthy())
    }
}

/// A selection region; `a` is the anchor and `b` the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub a: usize,
    pub b: usize,
}

impl Region {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn caret(pt: usize) -> Self {
        Self { a: pt, b: pt }
    }

    pub fn begin(&self) -> usize {
        self.a.min(self.b)
    }

    pub fn end(&self) -> usize {
        self.a.max(self.b)
    }

    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }
}

/// An editing surface: a host view, or a widget such as the command-line panel
pub trait Surface {
    fn id(&self) -> SurfaceId;

    fn settings(&self) -> &dyn Settings;

    fn settings_mut(&mut self) -> &mut dyn Settings;

    /// Total length of the content
    fn size(&self) -> usize;

    /// Text of the line containing `point`, without its newline
    fn line_text(&self, point: usize) -> String;

    /// Current selections, in order
    fn selections(&self) -> &[Region];

    /// Score of `selector` against the syntax scope at `point`; zero means no match
    fn score_selector(&self, point: usize, selector: &str) -> u32;

    /// Whether this is a real content view rather than a widget
    fn is_view(&self) -> bool {
        !self.settings().get_bool("is_widget", false)
    }

    /// Whether this surface is the ex command-line input panel
    fn is_cmdline(&self) -> bool {
        self.score_selector(0, CMDLINE_SCOPE) != 0
    }
}

/// Arguments handed to a host command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// Set when the command was given a trailing `!`
    pub forced: bool,
    /// Argument text after bar unescaping
    pub args: String,
}

/// A host window: runs commands and opens files
pub trait Window {
    /// Run a host action by identifier
    fn run_command(&mut self, command: &str, args: &CommandArgs);

    fn open_file(&mut self, path: &Path);
}

/// Destination for user-visible messages
pub trait MessageSink {
    /// Show a message in the status bar
    fn status_message(&mut self, msg: &str);

    /// Print a message to the host console
    fn console_message(&mut self, msg: &str);

    /// Show a message in both places
    fn message(&mut self, msg: &str) {
        self.status_message(msg);
        self.console_message(msg);
    }
}
