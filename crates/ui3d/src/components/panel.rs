//! 3D Panel Component - Background box for UI elements

use super::UIComponent;
use crate::interaction::UIAABB;
use glam::Vec3;
use scribe3d_core::ControlId;

/// 3D Panel - A thin box behind other UI elements
#[derive(Debug, Clone)]
pub struct Panel3D {
    /// Center of the box in world space
    pub position: Vec3,

    /// Panel size (width, height)
    pub size: (f32, f32),

    /// Thickness along Z
    pub depth: f32,

    /// Background color
    pub color: [f32; 4],

    /// Whether the panel is visible
    pub visible: bool,

    /// Control activated by a pointer-down on the panel
    pub control: Option<ControlId>,
}

impl Default for Panel3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: (2.0, 1.0),
            depth: 0.02,
            color: [0.1, 0.1, 0.1, 0.8], // Dark semi-transparent
            visible: true,
            control: None,
        }
    }
}

impl Panel3D {
    /// Create a new 3D panel
    pub fn new(position: Vec3, width: f32, height: f32) -> Self {
        Self {
            position,
            size: (width, height),
            ..Default::default()
        }
    }

    /// Builder: Set background color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set thickness
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder: Make the panel activate a control
    pub fn with_control(mut self, control: ControlId) -> Self {
        self.control = Some(control);
        self
    }

    /// Get panel bounds (for raycasting)
    pub fn bounds(&self) -> UIAABB {
        UIAABB::from_center_size(
            self.position,
            Vec3::new(self.size.0, self.size.1, self.depth),
        )
    }

    /// Check if a 2D point (in panel-local space) is inside the panel
    /// u, v are in range [0, 1] representing position on the panel
    pub fn contains_uv(&self, u: f32, v: f32) -> bool {
        (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)
    }
}

impl UIComponent for Panel3D {
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
