//! Host event handler
//! Entry points the host calls; owns all per-surface state

/// ## events/ Invariants
///
/// - The handler is the only writer of per-surface state.
/// - State for a surface exists from its first event until `on_close`.
/// - Context and completion queries never change the surface.
use crate::config::Config;
use crate::context::{ContextEvaluator, ContextQuery, Tristate};
use crate::dispatch::{self, Action, TextCommand};
use crate::error::Result;
use crate::ex::{CompletionCache, CompletionItem, ExParser};
use crate::focus::{Activation, FocusTracker, DEFAULT_FOCUS_DEBOUNCE};
use crate::host::{Surface, SurfaceId};
use crate::mode::{Mode, ModeState};
use std::collections::HashMap;
use std::time::Duration;

/// Setting that turns on modeline processing for a surface
pub const MODELINE_SETTING: &str = "vintageous_modeline";

/// Everything the core remembers about one surface
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    pub mode: ModeState,
    pub completions: CompletionCache,
}

/// Result of a surface gaining focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activated {
    pub activation: Activation,
    pub actions: Vec<Action>,
}

pub struct EventHandler {
    context: ContextEvaluator,
    focus: FocusTracker,
    surfaces: HashMap<SurfaceId, SurfaceState>,
}

impl EventHandler {
    pub fn new(focus_debounce: Duration) -> Self {
        Self {
            context: ContextEvaluator::new(ExParser::new()),
            focus: FocusTracker::new(focus_debounce),
            surfaces: HashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.focus_debounce)
    }

    pub fn context(&self) -> &ContextEvaluator {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ContextEvaluator {
        &mut self.context
    }

    /// Current mode of a surface; surfaces never seen are in normal mode
    pub fn mode(&self, id: SurfaceId) -> Mode {
        self.surfaces
            .get(&id)
            .map_or(Mode::Normal, |state| state.mode.current())
    }

    pub fn set_mode(&mut self, id: SurfaceId, mode: Mode) -> Result<()> {
        self.state_mut(id).mode.set(mode)
    }

    pub fn is_tracked(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    fn state_mut(&mut self, id: SurfaceId) -> &mut SurfaceState {
        self.surfaces.entry(id).or_default()
    }

    pub fn on_query_context(&self, surface: &dyn Surface, query: &ContextQuery) -> Tristate {
        self.context.evaluate(surface, query)
    }

    /// Command-name completions for the command-line panel
    ///
    /// Only answers while the whole line (after the `:`) is the prefix.
    pub fn on_query_completions(
        &mut self,
        surface: &dyn Surface,
        prefix: &str,
    ) -> Option<Vec<CompletionItem>> {
        if !surface.is_cmdline() || prefix.len() + 1 != surface.size() {
            return None;
        }
        Some(self.state_mut(surface.id()).completions.complete(prefix))
    }

    pub fn on_text_command(
        &self,
        surface: &dyn Surface,
        command: &TextCommand,
    ) -> Option<Vec<Action>> {
        dispatch::on_text_command(self.mode(surface.id()), command)
    }

    pub fn on_post_text_command(&self, _surface: &dyn Surface, command: &TextCommand) -> Vec<Action> {
        dispatch::on_post_text_command(command)
    }

    pub fn on_load(&mut self, surface: &dyn Surface) -> Vec<Action> {
        self.state_mut(surface.id());
        if wants_modeline(surface) {
            vec![Action::ApplyModeline]
        } else {
            Vec::new()
        }
    }

    pub fn on_post_save(&self, surface: &dyn Surface) -> Vec<Action> {
        dispatch::on_post_save(self.mode(surface.id()), wants_modeline(surface))
    }

    pub fn on_close(&mut self, id: SurfaceId) {
        if self.surfaces.remove(&id).is_some() {
            tracing::trace!(surface = id, "dropped surface state");
        }
    }

    /// A surface gained focus
    ///
    /// Coming from another view resets it to normal mode. Real views also
    /// ask the host to collapse visual selections left in other groups.
    pub fn on_activated(&mut self, surface: &dyn Surface) -> Activated {
        let activation = self.focus.on_activated();
        let state = self.state_mut(surface.id());
        if activation == Activation::ViewSwitch {
            state.mode = ModeState::new();
        }

        let actions = if surface.is_view() {
            vec![Action::CollapseOtherSelections]
        } else {
            Vec::new()
        };
        tracing::trace!(surface = surface.id(), ?activation, "activated");
        Activated {
            activation,
            actions,
        }
    }

    pub fn on_deactivated(&mut self, _surface: &dyn Surface) {
        self.focus.on_deactivated();
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DEBOUNCE)
    }
}

fn wants_modeline(surface: &dyn Surface) -> bool {
    surface.settings().get_bool(MODELINE_SETTING, false)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
