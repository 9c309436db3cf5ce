//! Option pickers and the control dispatch table.
//!
//! Every pointer-activatable element of the panel has a [`ControlId`]. The
//! render layer turns a pointer-down into a control id; [`activate`] turns the
//! id into session mutations.

use crate::actions::{self, SavePayload, SaveSink};
use crate::error::ActionError;
use crate::fonts::FontChoice;
use crate::palette::TextColor;
use crate::session::{DropdownPolicy, EditorSession, FontSize};
use tracing::debug;

/// An activatable element of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The Edit/Close button outside the panel.
    EditToggle,
    /// Panel background (and toolbar strip).
    EditorBody,
    /// Title bar.
    TitleBar,
    /// Text input region.
    TextArea,
    /// 2D/3D toggle.
    ModeToggle,
    /// Font dropdown button.
    FontPicker,
    /// One row of the open font dropdown.
    FontOption(FontChoice),
    /// Color picker button.
    ColorPicker,
    /// One swatch of the open color picker.
    ColorSwatch(TextColor),
    /// Size stepper, minus.
    SizeDown,
    /// Size stepper, plus.
    SizeUp,
    /// Save button.
    Save,
    /// Clear button.
    Clear,
    /// Cancel button.
    Cancel,
}

impl ControlId {
    /// Whether this control exists in the scene for the given session state.
    pub fn is_live(self, session: &EditorSession) -> bool {
        match self {
            Self::EditToggle => true,
            Self::FontOption(_) => session.is_visible() && session.font_dropdown_open(),
            Self::ColorSwatch(_) => session.is_visible() && session.color_picker_open(),
            _ => session.is_visible(),
        }
    }
}

/// What an activation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    /// The session changed.
    Updated,
    /// Save ran; the emitted payload is attached.
    Saved(SavePayload),
    /// The control is not in the scene right now; nothing happened.
    Ignored,
}

/// Open or close the font dropdown.
pub fn toggle_font_dropdown(session: &mut EditorSession) {
    let open = !session.font_dropdown_open();
    session.set_font_dropdown_open(open);
    if open && session.options().dropdown_policy == DropdownPolicy::Exclusive {
        session.set_color_picker_open(false);
    }
}

/// Open or close the color picker.
pub fn toggle_color_picker(session: &mut EditorSession) {
    let open = !session.color_picker_open();
    session.set_color_picker_open(open);
    if open && session.options().dropdown_policy == DropdownPolicy::Exclusive {
        session.set_font_dropdown_open(false);
    }
}

/// Pick a font from the dropdown and close it.
pub fn select_font(session: &mut EditorSession, font: FontChoice) {
    session.set_font(font);
    session.set_font_dropdown_open(false);
}

/// Pick a swatch and close the picker.
pub fn select_color(session: &mut EditorSession, color: TextColor) {
    session.set_color(color);
    session.set_color_picker_open(false);
}

/// One stepper click up.
pub fn increase_size(session: &mut EditorSession) {
    session.set_font_size(FontSize::STEP);
}

/// One stepper click down.
pub fn decrease_size(session: &mut EditorSession) {
    session.set_font_size(-FontSize::STEP);
}

/// Dispatch a pointer-down on `control`.
///
/// Only Save can fail, and only when `sink` does.
pub fn activate<S: SaveSink>(
    session: &mut EditorSession,
    control: ControlId,
    sink: &mut S,
) -> Result<ControlOutcome, ActionError<S::Error>> {
    if !control.is_live(session) {
        debug!(?control, "activation of hidden control ignored");
        return Ok(ControlOutcome::Ignored);
    }

    debug!(?control, "control activated");
    match control {
        ControlId::EditToggle => session.toggle_visible(),
        ControlId::EditorBody | ControlId::TitleBar | ControlId::TextArea => {
            session.set_focused(true)
        }
        ControlId::ModeToggle => session.toggle_mode(),
        ControlId::FontPicker => toggle_font_dropdown(session),
        ControlId::FontOption(font) => select_font(session, font),
        ControlId::ColorPicker => toggle_color_picker(session),
        ControlId::ColorSwatch(color) => select_color(session, color),
        ControlId::SizeDown => decrease_size(session),
        ControlId::SizeUp => increase_size(session),
        ControlId::Save => {
            return actions::save(session, sink).map(ControlOutcome::Saved);
        }
        ControlId::Clear => actions::clear(session),
        ControlId::Cancel => actions::cancel(session),
    }
    Ok(ControlOutcome::Updated)
}
