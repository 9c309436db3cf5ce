//! 3D Text Component

use super::UIComponent;
use glam::Vec3;

/// Text rendering in 3D world space
#[derive(Debug, Clone)]
pub struct Text3D {
    /// World position of the text anchor
    pub position: Vec3,

    /// Text content
    pub text: String,

    /// Font size in world units
    pub font_size: f32,

    /// Text color (RGBA)
    pub color: [f32; 4],

    /// Whether the text is visible
    pub visible: bool,

    /// Horizontal alignment relative to the anchor
    pub alignment: TextAlignment,

    /// Vertical anchoring relative to the anchor
    pub anchor: TextAnchor,

    /// Maximum width before wrapping (0 = no wrap)
    pub max_width: f32,

    /// Font file overriding the renderer's default face
    pub font_resource: Option<&'static str>,

    /// Whether the text is drawn with a lit material
    pub lit: bool,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
}

/// Vertical anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Top,
    Middle,
}

impl Default for Text3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            text: String::new(),
            font_size: 0.1,
            color: [1.0, 1.0, 1.0, 1.0],
            visible: true,
            alignment: TextAlignment::Center,
            anchor: TextAnchor::Middle,
            max_width: 0.0,
            font_resource: None,
            lit: false,
        }
    }
}

impl Text3D {
    /// Create a new Text3D component
    pub fn new(position: Vec3, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder: Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Builder: Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder: Anchor at the top-left corner instead of the center
    pub fn top_left(mut self) -> Self {
        self.alignment = TextAlignment::Left;
        self.anchor = TextAnchor::Top;
        self
    }

    /// Builder: Set max width for wrapping
    pub fn with_max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    /// Builder: Set font resource
    pub fn with_font_resource(mut self, resource: Option<&'static str>) -> Self {
        self.font_resource = resource;
        self
    }

    /// Builder: Draw with a lit material
    pub fn with_lit(mut self, lit: bool) -> Self {
        self.lit = lit;
        self
    }

    /// Update the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get a reference to the text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl UIComponent for Text3D {
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
