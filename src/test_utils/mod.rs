//! Test utilities
//! In-memory stand-ins for the host's surfaces, windows and status bar

use crate::host::{
    CommandArgs, MessageSink, Region, SettingValue, Settings, Surface, SurfaceId, Window,
    CMDLINE_SCOPE,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Settings store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, SettingValue>,
}

impl Settings for MapSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Mock editing surface
/// Holds plain text, selections and a fixed set of scopes
#[derive(Debug, Clone)]
pub struct MockSurface {
    pub id: SurfaceId,
    pub text: String,
    pub selections: Vec<Region>,
    pub scopes: Vec<String>,
    pub settings: MapSettings,
}

impl MockSurface {
    /// A content view holding `text` with the caret at the start
    pub fn view(id: SurfaceId, text: &str) -> Self {
        MockSurface {
            id,
            text: text.to_string(),
            selections: vec![Region::caret(0)],
            scopes: vec!["source.rust".to_string()],
            settings: MapSettings::default(),
        }
    }

    /// The ex command-line panel holding `text` with the caret at the end
    pub fn cmdline(id: SurfaceId, text: &str) -> Self {
        let mut surface = Self::view(id, text);
        surface.scopes = vec![CMDLINE_SCOPE.to_string()];
        surface.selections = vec![Region::caret(text.len())];
        surface
            .settings
            .set("is_widget", SettingValue::Bool(true));
        surface
    }

    pub fn with_setting(mut self, key: &str, value: SettingValue) -> Self {
        self.settings.set(key, value);
        self
    }

    pub fn with_caret(mut self, pt: usize) -> Self {
        self.selections = vec![Region::caret(pt)];
        self
    }
}

impl Surface for MockSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn settings(&self) -> &dyn Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut dyn Settings {
        &mut self.settings
    }

    fn size(&self) -> usize {
        self.text.len()
    }

    fn line_text(&self, point: usize) -> String {
        let point = point.min(self.text.len());
        let start = self.text[..point].rfind('\n').map_or(0, |i| i + 1);
        let end = self.text[point..]
            .find('\n')
            .map_or(self.text.len(), |i| point + i);
        self.text[start..end].to_string()
    }

    fn selections(&self) -> &[Region] {
        &self.selections
    }

    fn score_selector(&self, _point: usize, selector: &str) -> u32 {
        if self.scopes.iter().any(|s| s.starts_with(selector)) {
            1
        } else {
            0
        }
    }
}

/// Mock window
/// Records every command it is asked to run and every file it opens
#[derive(Debug, Default)]
pub struct MockWindow {
    pub commands: Vec<(String, CommandArgs)>,
    pub opened: Vec<PathBuf>,
}

impl Window for MockWindow {
    fn run_command(&mut self, command: &str, args: &CommandArgs) {
        self.commands.push((command.to_string(), args.clone()));
    }

    fn open_file(&mut self, path: &Path) {
        self.opened.push(path.to_path_buf());
    }
}

/// Recording message sink
#[derive(Debug, Default)]
pub struct MessageLog {
    pub status: Vec<String>,
    pub console: Vec<String>,
}

impl MessageSink for MessageLog {
    fn status_message(&mut self, msg: &str) {
        self.status.push(msg.to_string());
    }

    fn console_message(&mut self, msg: &str) {
        self.console.push(msg.to_string());
    }
}
