//! Read-only view of a session for the render layer.

use crate::fonts::FontChoice;
use crate::palette::TextColor;
use crate::session::{EditorSession, FontSize, RenderMode};

/// Glyph appended to the text while the cursor is shown.
pub const CURSOR_GLYPH: char = '|';

/// Hint shown in an empty, unfocused text area.
pub const PLACEHOLDER_TEXT: &str = "Click here to start typing...";

/// World-space text height for a font size of 1.0.
pub const BASE_TEXT_SCALE: f32 = 0.1;

/// Everything the renderer needs to draw the editor for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Buffer with the cursor glyph appended when focused and blinking on.
    pub display_text: String,
    /// Whether the placeholder hint should be drawn.
    pub show_placeholder: bool,
    /// Render variant.
    pub mode: RenderMode,
    /// Selected font.
    pub font: FontChoice,
    /// Font resource override; never resolved here, so always `None`.
    pub font_resource: Option<&'static str>,
    /// Text color.
    pub color: TextColor,
    /// Font size as picked in the stepper.
    pub font_size: FontSize,
    /// Text height in world units.
    pub text_scale: f32,
    /// Whether the panel is shown.
    pub visible: bool,
    /// Whether keys go into the buffer.
    pub focused: bool,
    /// Font dropdown state.
    pub font_dropdown_open: bool,
    /// Color picker state.
    pub color_picker_open: bool,
    /// Title bar caption.
    pub title: String,
    /// Label of the Edit/Close button.
    pub toggle_label: &'static str,
}

impl EditorSession {
    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> RenderSnapshot {
        let focused = self.is_focused();
        let mut display_text = self.buffer().to_string();
        if focused && self.cursor_visible() {
            display_text.push(CURSOR_GLYPH);
        }

        let title = if focused {
            "3D Text Editor (Active)".to_string()
        } else {
            "3D Text Editor".to_string()
        };

        RenderSnapshot {
            display_text,
            show_placeholder: self.buffer().is_empty() && !focused,
            mode: self.mode(),
            font: self.font(),
            font_resource: self.font().resource(),
            color: self.color(),
            font_size: self.font_size(),
            text_scale: BASE_TEXT_SCALE * self.font_size().as_f32(),
            visible: self.is_visible(),
            focused,
            font_dropdown_open: self.font_dropdown_open(),
            color_picker_open: self.color_picker_open(),
            title,
            toggle_label: if self.is_visible() { "Close" } else { "Edit" },
        }
    }
}
