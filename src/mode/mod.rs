//! Editor mode definitions

/// ## mode/ Invariants
///
/// - Exactly one mode is current per surface.
/// - `InternalNormal` tags action execution and is never a surface's current mode.
/// - Identity (`Mode`) and presentation (`Mode::name`) are separate tables.
use crate::error::{ErrorType, VintageError};
use std::fmt;
use std::str::FromStr;

/// Sentinel display name for modes with no entry in the name table
pub const UNKNOWN_MODE_NAME: &str = "REALLY UNKNOWN";

/// Editor operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Normal mode
    Normal,
    /// Insert mode (text editing)
    Insert,
    /// Insert mode entered with a count (e.g. `3i`)
    NormalInsert,
    /// Characterwise visual mode
    Visual,
    /// Linewise visual mode
    VisualLine,
    /// Blockwise visual mode
    VisualBlock,
    /// Replace mode (`R`)
    Replace,
    /// Select mode
    Select,
    /// Operator pending mode (e.g. after pressing 'd')
    OperatorPending,
    /// Pseudo-mode for running normal-mode actions on selections
    InternalNormal,
    /// Ex command line (entered with :)
    CommandLine,
    /// Insert-mode completion submode (`^X`)
    CtrlX,
    /// Mode could not be determined
    Unknown,
}

const ALL_MODES: &[Mode] = &[
    Mode::Normal,
    Mode::Insert,
    Mode::NormalInsert,
    Mode::Visual,
    Mode::VisualLine,
    Mode::VisualBlock,
    Mode::Replace,
    Mode::Select,
    Mode::OperatorPending,
    Mode::InternalNormal,
    Mode::CommandLine,
    Mode::CtrlX,
    Mode::Unknown,
];

/// Display names shown in the status bar
const MODE_NAMES: &[(Mode, &str)] = &[
    (Mode::Insert, "INSERT"),
    (Mode::InternalNormal, ""),
    (Mode::Normal, ""),
    (Mode::OperatorPending, ""),
    (Mode::Visual, "VISUAL"),
    (Mode::VisualBlock, "VISUAL BLOCK"),
    (Mode::VisualLine, "VISUAL LINE"),
    (Mode::Unknown, "UNKNOWN"),
    (Mode::Replace, "REPLACE"),
    (Mode::NormalInsert, "INSERT"),
    (Mode::Select, "SELECT"),
    (Mode::CtrlX, "Mode ^X"),
];

impl Mode {
    /// Every mode, in declaration order
    pub fn all() -> &'static [Mode] {
        ALL_MODES
    }

    /// Stable identifier used in keymaps and host settings
    pub fn id(self) -> &'static str {
        match self {
            Mode::Normal => "mode_normal",
            Mode::Insert => "mode_insert",
            Mode::NormalInsert => "mode_normal_insert",
            Mode::Visual => "mode_visual",
            Mode::VisualLine => "mode_visual_line",
            Mode::VisualBlock => "mode_visual_block",
            Mode::Replace => "mode_replace",
            Mode::Select => "mode_select",
            Mode::OperatorPending => "mode_operator_pending",
            Mode::InternalNormal => "mode_internal_normal",
            Mode::CommandLine => "mode_command_line",
            Mode::CtrlX => "mode_control_x",
            Mode::Unknown => "mode_unknown",
        }
    }

    /// Display name for the status bar
    pub fn name(self) -> &'static str {
        MODE_NAMES
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or(UNKNOWN_MODE_NAME, |(_, name)| name)
    }

    pub fn is_visual(self) -> bool {
        matches!(self, Mode::Visual | Mode::VisualLine | Mode::VisualBlock)
    }

    /// Whether a surface may report this as its current mode
    pub fn is_observable(self) -> bool {
        self != Mode::InternalNormal
    }
}

/// Display name for a mode that may not be known at all
pub fn name_of(mode: Option<Mode>) -> &'static str {
    mode.map_or(UNKNOWN_MODE_NAME, Mode::name)
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = VintageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MODES
            .iter()
            .copied()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| {
                VintageError::new(ErrorType::Parse, "UNKNOWN_MODE", format!("Unknown mode: {s}"))
            })
    }
}

/// Current mode of one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    current: Mode,
}

impl ModeState {
    pub fn new() -> Self {
        Self {
            current: Mode::Normal,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Switch mode; `InternalNormal` is rejected and leaves the state untouched
    pub fn set(&mut self, mode: Mode) -> crate::error::Result<()> {
        if !mode.is_observable() {
            return Err(VintageError::critical(
                ErrorType::Internal,
                "UNOBSERVABLE_MODE",
                format!("{mode} cannot be a surface's current mode"),
            ));
        }
        self.current = mode;
        Ok(())
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}
