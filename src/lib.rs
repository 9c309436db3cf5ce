//! scribe3d host: configuration, saved-text store and scripted sessions.
//!
//! The binary mounts one editor overlay and drives it either from a window
//! or from a JSON script. The pieces it needs live here so integration tests
//! can drive the same code without a display.

pub mod config;
pub mod host;
pub mod script;

pub use config::{CameraConfig, EditorConfig, ViewportConfig};
pub use host::SavedTexts;
pub use script::{ScriptError, ScriptPlayer, ScriptStep};
