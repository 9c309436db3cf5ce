//! Scripted editor sessions.
//!
//! A script is a JSON file with a list of steps replayed against a mounted
//! overlay, e.g.
//!
//! ```json
//! { "steps": [
//!     { "action": "click", "control": "edit_toggle" },
//!     { "action": "click", "control": "text_area" },
//!     { "action": "type", "text": "Hi" },
//!     { "action": "key", "key": "Backspace" },
//!     { "action": "wait_ms", "ms": 500 },
//!     { "action": "click", "control": "save" }
//! ] }
//! ```
//!
//! Clicks go through the same picking path as the pointer: the control's
//! on-screen position is computed and a pointer-down is issued there.

use scribe3d_core::{ControlId, FontChoice, SaveSink, TextColor};
use scribe3d_input::KeyInput;
use scribe3d_ui3d::EditorOverlay;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("script contains no steps")]
    Empty,
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("{0:?} is not on screen")]
    NotOnScreen(ControlId),
    #[error("save handler failed")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    steps: Vec<ScriptStep>,
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// A single key by name: `Backspace`, `Enter`, `Tab`, `Space` or one character.
    Key { key: String },
    /// Type each character of `text`; `\n` and `\t` become Enter and Tab.
    Type { text: String },
    /// Click the center of a control, by name.
    Click { control: String },
    /// Pointer-down at raw screen coordinates.
    Pointer { x: f32, y: f32 },
    /// Let time pass for the cursor blink.
    WaitMs { ms: u64 },
}

pub struct ScriptPlayer {
    steps: Vec<ScriptStep>,
}

impl ScriptPlayer {
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = serde_json::from_str(json)?;
        if file.steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { steps: file.steps })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Replay every step, stopping at the first one that fails.
    pub fn run<S>(&self, overlay: &mut EditorOverlay, sink: &mut S) -> Result<(), ScriptError>
    where
        S: SaveSink,
        S::Error: std::error::Error + Send + Sync + 'static,
    {
        for (index, step) in self.steps.iter().enumerate() {
            debug!(index, ?step, "script step");
            match step {
                ScriptStep::Key { key } => {
                    overlay.key(KeyInput::from_name(key));
                }
                ScriptStep::Type { text } => {
                    for c in text.chars() {
                        overlay.key(key_for_char(c));
                    }
                }
                ScriptStep::Click { control } => {
                    let control = parse_control(control)?;
                    let position = overlay
                        .screen_position_of(control)
                        .ok_or(ScriptError::NotOnScreen(control))?;
                    overlay
                        .pointer_down(position, sink)
                        .map_err(|err| ScriptError::Save(Box::new(err)))?;
                }
                ScriptStep::Pointer { x, y } => {
                    overlay
                        .pointer_down((*x, *y), sink)
                        .map_err(|err| ScriptError::Save(Box::new(err)))?;
                }
                ScriptStep::WaitMs { ms } => {
                    overlay.advance_time(Duration::from_millis(*ms));
                }
            }
        }
        Ok(())
    }
}

fn key_for_char(c: char) -> KeyInput {
    match c {
        '\n' => KeyInput::Enter,
        '\t' => KeyInput::Tab,
        other => KeyInput::Character(other),
    }
}

/// Resolve a control name. Font rows and swatches are written
/// `font:<display name>` and `color:<hex>`.
pub fn parse_control(name: &str) -> Result<ControlId, ScriptError> {
    if let Some(font) = name.strip_prefix("font:") {
        return font
            .parse::<FontChoice>()
            .map(ControlId::FontOption)
            .map_err(|_| ScriptError::UnknownControl(name.to_string()));
    }
    if let Some(color) = name.strip_prefix("color:") {
        return color
            .parse::<TextColor>()
            .map(ControlId::ColorSwatch)
            .map_err(|_| ScriptError::UnknownControl(name.to_string()));
    }

    let control = match name {
        "edit_toggle" => ControlId::EditToggle,
        "editor_body" => ControlId::EditorBody,
        "title_bar" => ControlId::TitleBar,
        "text_area" => ControlId::TextArea,
        "mode_toggle" => ControlId::ModeToggle,
        "font_picker" => ControlId::FontPicker,
        "color_picker" => ControlId::ColorPicker,
        "size_down" => ControlId::SizeDown,
        "size_up" => ControlId::SizeUp,
        "save" => ControlId::Save,
        "clear" => ControlId::Clear,
        "cancel" => ControlId::Cancel,
        other => return Err(ScriptError::UnknownControl(other.to_string())),
    };
    Ok(control)
}
