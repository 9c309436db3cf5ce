//! Save, Cancel and Clear.

use crate::error::ActionError;
use crate::fonts::FontChoice;
use crate::palette::TextColor;
use crate::session::{EditorSession, FontSize, RenderMode};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::{debug, info};

/// Formatting metadata emitted alongside the text on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMeta {
    /// Selected font.
    pub font: FontChoice,
    /// Render variant.
    pub mode: RenderMode,
    /// Palette color.
    pub color: TextColor,
    /// Text scale factor.
    pub font_size: FontSize,
}

/// Everything a save handler receives, bundled for logging and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    /// Buffer content at the time of saving.
    pub text: String,
    /// Formatting at the time of saving.
    pub meta: SaveMeta,
}

/// Receiver for saved text.
///
/// Called synchronously, at most once per Save. Errors are handed back to the
/// caller of [`save`] without retry.
pub trait SaveSink {
    /// Error raised by the sink.
    type Error;

    /// Store or forward the saved text.
    fn save(&mut self, text: &str, meta: &SaveMeta) -> Result<(), Self::Error>;
}

impl<F, E> SaveSink for F
where
    F: FnMut(&str, &SaveMeta) -> Result<(), E>,
{
    type Error = E;

    fn save(&mut self, text: &str, meta: &SaveMeta) -> Result<(), E> {
        self(text, meta)
    }
}

/// Sink for editors mounted without a save handler. Save still closes the panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSink;

impl SaveSink for NoSink {
    type Error = Infallible;

    fn save(&mut self, _text: &str, _meta: &SaveMeta) -> Result<(), Infallible> {
        Ok(())
    }
}

impl EditorSession {
    /// Formatting metadata for the current state.
    pub fn save_meta(&self) -> SaveMeta {
        SaveMeta {
            font: self.font(),
            mode: self.mode(),
            color: self.color(),
            font_size: self.font_size(),
        }
    }
}

/// Emit the buffer and metadata to `sink`, then unfocus and hide the panel.
///
/// Buffer and options are kept, so reopening shows the last edit. If the sink
/// fails the session is left exactly as it was.
pub fn save<S: SaveSink>(
    session: &mut EditorSession,
    sink: &mut S,
) -> Result<SavePayload, ActionError<S::Error>> {
    let payload = SavePayload {
        text: session.buffer().to_string(),
        meta: session.save_meta(),
    };
    sink.save(&payload.text, &payload.meta)
        .map_err(ActionError::Save)?;

    session.set_focused(false);
    session.set_visible(false);
    info!(
        chars = payload.text.chars().count(),
        font = %payload.meta.font,
        mode = %payload.meta.mode,
        color = %payload.meta.color,
        size = %payload.meta.font_size,
        "editor text saved"
    );
    Ok(payload)
}

/// Revert the buffer to the initial text, drop focus and close both dropdowns.
///
/// Formatting options and panel visibility are left as they are.
pub fn cancel(session: &mut EditorSession) {
    session.restore_initial();
    session.set_focused(false);
    session.set_font_dropdown_open(false);
    session.set_color_picker_open(false);
    debug!("edit cancelled");
}

/// Empty the buffer without changing anything else.
pub fn clear(session: &mut EditorSession) {
    session.clear();
    debug!("buffer cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionPhase;

    fn open_focused(initial: &str) -> EditorSession {
        let mut session = EditorSession::new(initial);
        session.toggle_visible();
        session.set_focused(true);
        session
    }

    #[test]
    fn save_emits_payload_and_closes() {
        let mut session = open_focused("Hi");
        session.append_char('!');
        session.set_color(TextColor::Red);
        session.toggle_mode();

        let mut saved = Vec::new();
        let mut sink = |text: &str, meta: &SaveMeta| -> Result<(), Infallible> {
            saved.push((text.to_string(), *meta));
            Ok(())
        };
        let payload = save(&mut session, &mut sink).unwrap();

        assert_eq!(payload.text, "Hi!");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "Hi!");
        assert_eq!(saved[0].1.color, TextColor::Red);
        assert_eq!(saved[0].1.mode, RenderMode::ThreeD);
        assert_eq!(session.phase(), SessionPhase::Closed);
        // Nothing is reset by a save.
        assert_eq!(session.buffer(), "Hi!");
        assert_eq!(session.color(), TextColor::Red);
    }

    #[test]
    fn failed_save_leaves_session_open() {
        let mut session = open_focused("draft");
        let mut sink = |_: &str, _: &SaveMeta| -> Result<(), std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        };
        let err = save(&mut session, &mut sink).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(session.phase(), SessionPhase::OpenFocused);
        assert_eq!(session.buffer(), "draft");
    }

    #[test]
    fn save_without_handler_still_closes() {
        let mut session = open_focused("x");
        save(&mut session, &mut NoSink).unwrap();
        assert_eq!(session.phase(), SessionPhase::Closed);
    }

    #[test]
    fn cancel_reverts_buffer_only() {
        let mut session = open_focused("Edit me");
        session.clear();
        "changed".chars().for_each(|c| session.append_char(c));
        session.set_font(FontChoice::Courier);
        session.set_font_size(0.1);
        session.set_font_dropdown_open(true);
        session.set_color_picker_open(true);

        cancel(&mut session);

        assert_eq!(session.buffer(), "Edit me");
        assert!(!session.is_focused());
        assert!(session.is_visible());
        assert!(!session.font_dropdown_open());
        assert!(!session.color_picker_open());
        assert_eq!(session.font(), FontChoice::Courier);
        assert_eq!(session.font_size().tenths(), 11);
    }

    #[test]
    fn clear_keeps_phase() {
        let mut session = open_focused("abc");
        clear(&mut session);
        assert_eq!(session.buffer(), "");
        assert_eq!(session.phase(), SessionPhase::OpenFocused);
    }

    #[test]
    fn meta_serializes_with_camel_case_keys() {
        let meta = EditorSession::new("").save_meta();
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["font"], "System Default");
        assert_eq!(json["mode"], "2D");
        assert_eq!(json["color"], "#ffffff");
        assert_eq!(json["fontSize"], 1.0);
    }
}
