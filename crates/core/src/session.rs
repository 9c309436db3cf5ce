//! Editor session state.
//!
//! [`EditorSession`] is the single mutable model behind the panel. It is owned
//! by the host view and handed by `&mut` to the input router, the option
//! controls and the session actions. Every mutator keeps these invariants:
//!
//! - the font size stays within `[0.5, 2.0]` in steps of 0.1
//! - the editor is only focused while the panel is visible
//! - the color is always a palette swatch

use crate::blink::{BlinkTimer, DEFAULT_BLINK_INTERVAL};
use crate::error::ParseOptionError;
use crate::fonts::{FontChoice, DEFAULT_FONT};
use crate::palette::TextColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Text inserted for a Tab key press.
pub const TAB_TEXT: &str = "    ";

/// Which render variant the text uses. Pure metadata for the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Flat text.
    #[default]
    #[serde(rename = "2D")]
    TwoD,
    /// Lit text with a material.
    #[serde(rename = "3D")]
    ThreeD,
}

impl RenderMode {
    /// Label shown on the mode toggle.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::TwoD => Self::ThreeD,
            Self::ThreeD => Self::TwoD,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RenderMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2D" => Ok(Self::TwoD),
            "3D" => Ok(Self::ThreeD),
            other => Err(ParseOptionError::UnknownMode(other.to_string())),
        }
    }
}

/// Text scale factor, stored in tenths so repeated steps never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct FontSize {
    tenths: u8,
}

impl FontSize {
    /// Smallest size (0.5).
    pub const MIN: Self = Self { tenths: 5 };
    /// Largest size (2.0).
    pub const MAX: Self = Self { tenths: 20 };
    /// Size of a fresh session (1.0).
    pub const DEFAULT: Self = Self { tenths: 10 };
    /// Size change applied by one stepper click.
    pub const STEP: f32 = 0.1;

    /// Nearest valid size to `value`, rounded to one decimal and clamped.
    pub fn from_f32(value: f32) -> Self {
        if !value.is_finite() {
            return Self::DEFAULT;
        }
        let tenths = (value * 10.0).round();
        let tenths = tenths.clamp(Self::MIN.tenths as f32, Self::MAX.tenths as f32);
        Self {
            tenths: tenths as u8,
        }
    }

    /// Scale factor as a float.
    pub fn as_f32(self) -> f32 {
        self.tenths as f32 / 10.0
    }

    /// Size in tenths (5..=20).
    pub fn tenths(self) -> u8 {
        self.tenths
    }

    /// Apply `delta_tenths` and clamp.
    pub fn stepped(self, delta_tenths: i32) -> Self {
        let tenths = (self.tenths as i32)
            .saturating_add(delta_tenths)
            .clamp(Self::MIN.tenths as i32, Self::MAX.tenths as i32);
        Self {
            tenths: tenths as u8,
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for FontSize {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<FontSize> for f32 {
    fn from(size: FontSize) -> Self {
        size.as_f32()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f32())
    }
}

/// Whether the font dropdown and the color picker may be open together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownPolicy {
    /// Each dropdown opens and closes on its own; both may be open.
    #[default]
    Independent,
    /// Opening one dropdown closes the other.
    Exclusive,
}

/// Per-session tuning taken from the host's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Maximum buffer length in code points; `None` is unbounded.
    pub max_chars: Option<usize>,
    /// Cursor blink period.
    pub blink_interval: Duration,
    /// Dropdown exclusion rule.
    pub dropdown_policy: DropdownPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_chars: None,
            blink_interval: DEFAULT_BLINK_INTERVAL,
            dropdown_policy: DropdownPolicy::Independent,
        }
    }
}

/// Coarse state of the panel, derived from the visibility and focus flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Panel hidden.
    Closed,
    /// Panel shown, keys pass through.
    OpenUnfocused,
    /// Panel shown, keys go into the buffer.
    OpenFocused,
}

/// The editor's mutable model for one mount of the host view.
#[derive(Debug)]
pub struct EditorSession {
    buffer: String,
    initial: String,
    visible: bool,
    focused: bool,
    mode: RenderMode,
    font: FontChoice,
    color: TextColor,
    font_size: FontSize,
    font_dropdown_open: bool,
    color_picker_open: bool,
    blink: Option<BlinkTimer>,
    options: SessionOptions,
}

impl EditorSession {
    /// Create a closed session seeded with `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_options(initial, SessionOptions::default())
    }

    /// Create a closed session with explicit options.
    pub fn with_options(initial: impl Into<String>, options: SessionOptions) -> Self {
        let initial = initial.into();
        debug!(chars = initial.chars().count(), "editor session created");
        Self {
            buffer: initial.clone(),
            initial,
            visible: false,
            focused: false,
            mode: RenderMode::default(),
            font: DEFAULT_FONT,
            color: TextColor::default(),
            font_size: FontSize::DEFAULT,
            font_dropdown_open: false,
            color_picker_open: false,
            blink: None,
            options,
        }
    }

    // === Accessors ===

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text the session was created with.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether key events are routed into the buffer.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Render variant.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Selected font.
    pub fn font(&self) -> FontChoice {
        self.font
    }

    /// Selected color.
    pub fn color(&self) -> TextColor {
        self.color
    }

    /// Text scale factor.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Whether the font dropdown is open.
    pub fn font_dropdown_open(&self) -> bool {
        self.font_dropdown_open
    }

    /// Whether the color picker is open.
    pub fn color_picker_open(&self) -> bool {
        self.color_picker_open
    }

    /// Options the session was created with.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Phase derived from the flags.
    pub fn phase(&self) -> SessionPhase {
        match (self.visible, self.focused) {
            (false, _) => SessionPhase::Closed,
            (true, false) => SessionPhase::OpenUnfocused,
            (true, true) => SessionPhase::OpenFocused,
        }
    }

    /// Current blink phase; `false` while the panel is hidden.
    pub fn cursor_visible(&self) -> bool {
        self.blink
            .as_ref()
            .map(BlinkTimer::cursor_visible)
            .unwrap_or(false)
    }

    /// Time until the cursor next flips, if the blink is running.
    pub fn until_next_blink(&self) -> Option<Duration> {
        self.blink.as_ref().and_then(BlinkTimer::until_next_flip)
    }

    // === Visibility and focus ===

    /// Show or hide the panel. The buffer is left alone either way.
    pub fn toggle_visible(&mut self) {
        self.set_visible(!self.visible);
    }

    /// Show or hide the panel. Hiding also drops focus and stops the blink.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.blink = Some(BlinkTimer::start(self.options.blink_interval));
        } else {
            self.focused = false;
            self.blink = None;
        }
        debug!(visible, "editor visibility changed");
    }

    /// Route keys into the buffer or stop doing so. Focus requests while the
    /// panel is hidden are ignored.
    pub fn set_focused(&mut self, focused: bool) {
        let focused = focused && self.visible;
        if focused != self.focused {
            self.focused = focused;
            debug!(focused, "editor focus changed");
        }
    }

    /// Feed elapsed time to the cursor blink. Returns whether the cursor flipped.
    pub fn advance_time(&mut self, dt: Duration) -> bool {
        match self.blink.as_mut() {
            Some(timer) => timer.advance(dt) > 0,
            None => false,
        }
    }

    // === Buffer edits ===

    /// Append one code point.
    pub fn append_char(&mut self, c: char) {
        if self.has_room_for(1) {
            self.buffer.push(c);
        }
    }

    /// Remove the last code point. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Append a line break.
    pub fn newline(&mut self) {
        self.append_char('\n');
    }

    /// Append four spaces. Literal tabs are never stored.
    pub fn tab(&mut self) {
        if self.has_room_for(TAB_TEXT.len()) {
            self.buffer.push_str(TAB_TEXT);
        }
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Put the buffer back to the text the session was created with.
    pub(crate) fn restore_initial(&mut self) {
        self.buffer.clone_from(&self.initial);
    }

    fn has_room_for(&self, chars: usize) -> bool {
        match self.options.max_chars {
            Some(max) if self.buffer.chars().count() + chars > max => {
                debug!(max, "buffer limit reached, dropping input");
                false
            }
            _ => true,
        }
    }

    // === Formatting options ===

    /// Change the size by `delta` (normally ±0.1), rounded to tenths and clamped.
    pub fn set_font_size(&mut self, delta: f32) {
        let delta_tenths = if delta.is_finite() {
            (delta * 10.0).round() as i32
        } else {
            0
        };
        self.font_size = self.font_size.stepped(delta_tenths);
        debug!(size = %self.font_size, "font size changed");
    }

    /// Select a palette color.
    pub fn set_color(&mut self, color: TextColor) {
        self.color = color;
        debug!(%color, "text color changed");
    }

    /// Select a catalog font.
    pub fn set_font(&mut self, font: FontChoice) {
        self.font = font;
        debug!(%font, "font changed");
    }

    /// Switch between 2D and 3D.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!(mode = %self.mode, "render mode changed");
    }

    /// Open or close the font dropdown.
    pub fn set_font_dropdown_open(&mut self, open: bool) {
        self.font_dropdown_open = open;
    }

    /// Open or close the color picker.
    pub fn set_color_picker_open(&mut self, open: bool) {
        self.color_picker_open = open;
    }
}
