//! 3D UI Components
//!
//! The editor is built from three kinds of element: flat boxes (panels),
//! labelled boxes that react to the pointer (buttons) and free text.

pub mod button;
pub mod panel;
pub mod text3d;

pub use button::{Button3D, ButtonState};
pub use panel::Panel3D;
pub use text3d::{Text3D, TextAlignment, TextAnchor};

use crate::interaction::UIAABB;
use glam::Vec3;
use scribe3d_core::ControlId;

/// Base trait for all 3D UI components
pub trait UIComponent {
    /// Get the world position of this component
    fn position(&self) -> Vec3;

    /// Set the world position of this component
    fn set_position(&mut self, position: Vec3);

    /// Check if this component is visible
    fn is_visible(&self) -> bool;

    /// Set visibility
    fn set_visible(&mut self, visible: bool);
}

/// One drawable element of the editor scene.
#[derive(Debug, Clone)]
pub enum SceneElement {
    /// Background box.
    Panel(Panel3D),
    /// Activatable labelled box.
    Button(Button3D),
    /// Free-standing text.
    Text(Text3D),
}

impl SceneElement {
    /// Control this element activates, if any, with its pickable volume.
    pub fn pick_volume(&self) -> Option<(ControlId, UIAABB)> {
        match self {
            Self::Panel(panel) if panel.visible => panel.control.map(|id| (id, panel.bounds())),
            Self::Button(button) if button.visible => Some((button.control, button.bounds())),
            _ => None,
        }
    }
}

/// Convert a `0xRRGGBB` literal into linear RGBA.
pub fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}
