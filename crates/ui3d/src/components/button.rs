//! Interactive 3D Button Component

use super::{Text3D, UIComponent};
use crate::interaction::UIAABB;
use glam::Vec3;
use scribe3d_core::ControlId;

/// How far in front of its box a button's label sits.
const LABEL_OFFSET: f32 = 0.03;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal state (not interacted with)
    Normal,
    /// Pointer is over the button
    Hover,
}

/// Labelled box that activates an editor control
#[derive(Debug, Clone)]
pub struct Button3D {
    /// Center of the box in world space
    pub position: Vec3,

    /// Button label text
    pub text: String,

    /// Control activated on pointer-down
    pub control: ControlId,

    /// Current button state
    pub state: ButtonState,

    /// Box color
    pub color: [f32; 4],

    /// Label color
    pub text_color: [f32; 4],

    /// Button size (width, height)
    pub size: (f32, f32),

    /// Thickness along Z
    pub depth: f32,

    /// Font size for button text
    pub font_size: f32,

    /// Whether the button is visible
    pub visible: bool,
}

impl Button3D {
    /// Create a new 3D button
    pub fn new(position: Vec3, text: impl Into<String>, control: ControlId) -> Self {
        Self {
            position,
            text: text.into(),
            control,
            state: ButtonState::Normal,
            color: [0.8, 0.8, 0.8, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            size: (1.0, 0.3),
            depth: 0.06,
            font_size: 0.12,
            visible: true,
        }
    }

    /// Builder: Set button size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    /// Builder: Set thickness
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder: Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Builder: Set box color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set label color
    pub fn with_text_color(mut self, color: [f32; 4]) -> Self {
        self.text_color = color;
        self
    }

    /// Update button state
    pub fn set_state(&mut self, state: ButtonState) {
        self.state = state;
    }

    /// Box color for the current state; hovering lightens it
    pub fn current_color(&self) -> [f32; 4] {
        match self.state {
            ButtonState::Normal => self.color,
            ButtonState::Hover => {
                let [r, g, b, a] = self.color;
                let lift = |c: f32| c + (1.0 - c) * 0.2;
                [lift(r), lift(g), lift(b), a]
            }
        }
    }

    /// Label as a text element just in front of the box
    pub fn to_text3d(&self) -> Text3D {
        let label_pos = self.position + Vec3::new(0.0, 0.0, self.depth * 0.5 + LABEL_OFFSET);
        Text3D::new(label_pos, &self.text)
            .with_font_size(self.font_size)
            .with_color(self.text_color)
    }

    /// Get button bounds (for raycasting)
    pub fn bounds(&self) -> UIAABB {
        UIAABB::from_center_size(
            self.position,
            Vec3::new(self.size.0, self.size.1, self.depth),
        )
    }
}

impl UIComponent for Button3D {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
