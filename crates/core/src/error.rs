//! Error types for the editor core.

use thiserror::Error;

/// Errors produced when text from a config or script names an option that is
/// not in one of the fixed catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    /// Font name outside the catalog.
    #[error("unknown font '{0}'")]
    UnknownFont(String),
    /// Color code outside the palette.
    #[error("color '{0}' is not in the palette")]
    UnknownColor(String),
    /// Render mode label other than `2D`/`3D`.
    #[error("unknown render mode '{0}'")]
    UnknownMode(String),
}

/// Errors surfaced by session actions.
///
/// The only fallible action is Save, whose failure comes from the caller's
/// save handler and is handed back untouched.
#[derive(Debug, Error)]
pub enum ActionError<E> {
    /// The save handler rejected the payload.
    #[error("save handler failed: {0}")]
    Save(#[source] E),
}
