//! Command dispatch
//! Decides which host actions follow a text command, given the current mode

/// ## dispatch/ Invariants
///
/// - Dispatch is pure: the same mode and command always give the same actions.
/// - When a mode switch is returned it comes after the selection update.
/// - An empty action list means "no override"; the host's default runs.
use crate::mode::Mode;
use std::fmt;

/// Granularity of a drag selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectBy {
    Words,
    Lines,
}

/// Mouse position and button that started a drag selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: i64,
    pub y: i64,
    pub button: u8,
}

/// Arguments of the host's `drag_select` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSelect {
    pub extend: bool,
    pub by: Option<SelectBy>,
    pub additive: bool,
    pub event: Option<MouseEvent>,
}

impl DragSelect {
    /// A plain click: no modifiers, only the mouse event
    pub fn click(x: i64, y: i64, button: u8) -> Self {
        Self {
            event: Some(MouseEvent { x, y, button }),
            ..Self::default()
        }
    }

    fn is_plain_left_click(&self) -> bool {
        !self.extend
            && self.by.is_none()
            && !self.additive
            && self.event.is_some_and(|ev| ev.button == 1)
    }
}

/// A text command the host is about to run (or has just run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    DragSelect(DragSelect),
    Other(String),
}

/// A host action the caller should run, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the host's own selection update with these arguments
    DragSelect(DragSelect),
    EnterNormalMode { from: Mode },
    EnterVisualMode { from: Mode },
    EnterVisualLineMode { from: Mode },
    /// Remember the caret column as the preferred column
    UpdateXpos,
    /// Pull carets back inside line bounds
    FixEolCaret { mode: Mode },
    /// Read and apply the surface's modeline
    ApplyModeline,
    /// Collapse non-empty selections in the other groups' active views
    CollapseOtherSelections,
}

impl Action {
    /// Identifier of the host command implementing this action
    pub fn command_name(&self) -> &'static str {
        match self {
            Action::DragSelect(_) => "drag_select",
            Action::EnterNormalMode { .. } => "_enter_normal_mode",
            Action::EnterVisualMode { .. } => "_enter_visual_mode",
            Action::EnterVisualLineMode { .. } => "_enter_visual_line_mode",
            Action::UpdateXpos => "_update_xpos",
            Action::FixEolCaret { .. } => "_fix_eol_caret",
            Action::ApplyModeline => "_apply_modeline",
            Action::CollapseOtherSelections => "_collapse_other_selections",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::EnterNormalMode { from }
            | Action::EnterVisualMode { from }
            | Action::EnterVisualLineMode { from } => {
                write!(f, "{} {{mode: {from}}}", self.command_name())
            }
            Action::FixEolCaret { mode } => write!(f, "{} {{mode: {mode}}}", self.command_name()),
            _ => f.write_str(self.command_name()),
        }
    }
}

/// Resolve a drag selection against the current mode
///
/// Rules are tried in order; the first match wins:
///
/// 1. visual family with `extend`, word-wise or `additive`: no override
/// 2. visual family, line-wise: select, then visual line mode
/// 3. visual family otherwise: select, then back to normal mode
/// 4. normal with `extend` or word-wise: select, then visual mode
/// 5. anything else: no override
pub fn resolve_drag_select(mode: Mode, drag: &DragSelect) -> Vec<Action> {
    let by_words = drag.by == Some(SelectBy::Words);

    if mode.is_visual() {
        if drag.extend || by_words || drag.additive {
            return Vec::new();
        }
        if drag.by == Some(SelectBy::Lines) {
            return vec![
                Action::DragSelect(*drag),
                Action::EnterVisualLineMode { from: mode },
            ];
        }
        return vec![
            Action::DragSelect(*drag),
            Action::EnterNormalMode { from: mode },
        ];
    }

    if mode == Mode::Normal && (drag.extend || by_words) {
        return vec![
            Action::DragSelect(*drag),
            Action::EnterVisualMode { from: mode },
        ];
    }

    Vec::new()
}

/// Override for a text command about to run; `None` leaves it alone
pub fn on_text_command(mode: Mode, command: &TextCommand) -> Option<Vec<Action>> {
    let TextCommand::DragSelect(drag) = command else {
        return None;
    };
    let actions = resolve_drag_select(mode, drag);
    if actions.is_empty() {
        None
    } else {
        tracing::trace!(%mode, count = actions.len(), "drag_select override");
        Some(actions)
    }
}

/// Follow-up after a text command ran
pub fn on_post_text_command(command: &TextCommand) -> Vec<Action> {
    match command {
        TextCommand::DragSelect(drag) if drag.is_plain_left_click() => vec![Action::UpdateXpos],
        _ => Vec::new(),
    }
}

/// Follow-up after a save
pub fn on_post_save(mode: Mode, modeline: bool) -> Vec<Action> {
    let mut actions = Vec::with_capacity(2);
    if modeline {
        actions.push(Action::ApplyModeline);
    }
    actions.push(Action::FixEolCaret { mode });
    actions
}
