#![warn(missing_docs)]
//! Editor model for the scribe3d in-scene text panel.
//!
//! The crate owns the session state and every operation that mutates it; it
//! knows nothing about windows, GPUs or scene graphs. A host mounts one
//! [`EditorSession`], feeds it key commands, control activations and elapsed
//! time, and reads back a [`RenderSnapshot`] to draw.
//!
//! ```
//! use scribe3d_core::{activate, ControlId, EditorSession, NoSink};
//!
//! let mut session = EditorSession::new("Hello World!");
//! activate(&mut session, ControlId::EditToggle, &mut NoSink).unwrap();
//! activate(&mut session, ControlId::TextArea, &mut NoSink).unwrap();
//! session.append_char('?');
//! assert_eq!(session.buffer(), "Hello World!?");
//! ```

pub mod actions;
pub mod blink;
pub mod controls;
pub mod error;
pub mod fonts;
pub mod palette;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use actions::{cancel, clear, save, NoSink, SaveMeta, SavePayload, SaveSink};
pub use blink::{BlinkTimer, DEFAULT_BLINK_INTERVAL};
pub use controls::{activate, ControlId, ControlOutcome};
pub use error::{ActionError, ParseOptionError};
pub use fonts::{font_resource, FontChoice, DEFAULT_FONT};
pub use palette::TextColor;
pub use session::{
    DropdownPolicy, EditorSession, FontSize, RenderMode, SessionOptions, SessionPhase,
};
pub use snapshot::{RenderSnapshot, CURSOR_GLYPH, PLACEHOLDER_TEXT};
