//! 3D UI Layout System
//!
//! Fixed world-space layout of the editor: the Edit/Close toggle floats to the
//! upper right, the panel sits slightly right of the origin facing +Z. Every
//! layer is pushed a little further toward the camera than the one behind it
//! so raycasts pick the front-most control.

use crate::components::{rgb, Button3D, ButtonState, Panel3D, SceneElement, Text3D};
use glam::Vec3;
use scribe3d_core::{
    ControlId, FontChoice, RenderMode, RenderSnapshot, TextColor, PLACEHOLDER_TEXT,
};

/// Center of the Edit/Close toggle.
pub const TOGGLE_POSITION: Vec3 = Vec3::new(2.2, 1.8, 2.0);
/// Origin of the editor panel group.
pub const PANEL_ORIGIN: Vec3 = Vec3::new(0.8, 0.4, 0.0);
/// Panel width.
pub const PANEL_WIDTH: f32 = 6.0;
/// Panel height.
pub const PANEL_HEIGHT: f32 = 3.8;

const TOOLBAR_Y: f32 = PANEL_HEIGHT / 2.0 - 0.5;
const TITLE_Y: f32 = PANEL_HEIGHT / 2.0 - 0.15;
const DROPDOWN_Y: f32 = PANEL_HEIGHT / 2.0 - 0.9;
const ACTIONS_Y: f32 = -PANEL_HEIGHT / 2.0 + 0.3;
const FONT_PICKER_X: f32 = -0.8;
const COLOR_PICKER_X: f32 = 0.6;
const SIZE_GROUP_X: f32 = 1.8;
const DROPDOWN_ROW_SPACING: f32 = 0.18;
const SWATCH_SPACING: f32 = 0.15;
const TEXT_MARGIN: f32 = 0.2;

/// Point in the panel's local frame, in world space.
fn local(x: f32, y: f32, z: f32) -> Vec3 {
    PANEL_ORIGIN + Vec3::new(x, y, z)
}

/// Build every visible element for the given state.
///
/// `hovered` marks the button under the pointer.
pub fn build_scene(snapshot: &RenderSnapshot, hovered: Option<ControlId>) -> Vec<SceneElement> {
    let mut elements = Vec::new();

    let toggle_color = if snapshot.visible {
        rgb(0xdc2626)
    } else {
        rgb(0x2563eb)
    };
    elements.push(SceneElement::Button(
        Button3D::new(TOGGLE_POSITION, snapshot.toggle_label, ControlId::EditToggle)
            .with_size(1.0, 0.5)
            .with_depth(0.2)
            .with_font_size(0.25)
            .with_color(toggle_color),
    ));

    if snapshot.visible {
        push_frame(&mut elements, snapshot);
        push_toolbar(&mut elements, snapshot);
        push_text_area(&mut elements, snapshot);
        push_actions(&mut elements);
        if snapshot.font_dropdown_open {
            push_font_dropdown(&mut elements, snapshot.font);
        }
        if snapshot.color_picker_open {
            push_palette(&mut elements);
        }
    }

    if let Some(control) = hovered {
        for element in &mut elements {
            if let SceneElement::Button(button) = element {
                if button.control == control {
                    button.set_state(ButtonState::Hover);
                }
            }
        }
    }

    elements
}

fn push_frame(elements: &mut Vec<SceneElement>, snapshot: &RenderSnapshot) {
    elements.push(SceneElement::Panel(
        Panel3D::new(PANEL_ORIGIN, PANEL_WIDTH, PANEL_HEIGHT)
            .with_depth(0.1)
            .with_color(rgb(0xffffff))
            .with_control(ControlId::EditorBody),
    ));

    let title_color = if snapshot.focused {
        rgb(0xd4edda)
    } else {
        rgb(0xe9ecef)
    };
    elements.push(SceneElement::Panel(
        Panel3D::new(local(0.0, TITLE_Y, 0.06), PANEL_WIDTH, 0.3)
            .with_color(title_color)
            .with_control(ControlId::TitleBar),
    ));
    elements.push(SceneElement::Text(
        Text3D::new(local(0.0, TITLE_Y, 0.08), snapshot.title.clone())
            .with_font_size(0.1)
            .with_color(rgb(0x495057)),
    ));

    // Toolbar strip: clicks on it land on the panel body.
    elements.push(SceneElement::Panel(
        Panel3D::new(local(0.0, TOOLBAR_Y, 0.06), PANEL_WIDTH - 0.2, 0.3)
            .with_color(rgb(0xf8f9fa))
            .with_control(ControlId::EditorBody),
    ));
}

fn push_toolbar(elements: &mut Vec<SceneElement>, snapshot: &RenderSnapshot) {
    let mode_color = match snapshot.mode {
        RenderMode::ThreeD => rgb(0x28a745),
        RenderMode::TwoD => rgb(0x007bff),
    };
    elements.push(SceneElement::Button(
        Button3D::new(
            local(-2.2, TOOLBAR_Y, 0.08),
            snapshot.mode.label(),
            ControlId::ModeToggle,
        )
        .with_size(0.8, 0.28)
        .with_color(mode_color),
    ));

    elements.push(SceneElement::Button(
        Button3D::new(
            local(FONT_PICKER_X, TOOLBAR_Y, 0.08),
            snapshot.font.display_name(),
            ControlId::FontPicker,
        )
        .with_size(1.4, 0.35)
        .with_font_size(0.1)
        .with_color(rgb(0x6c757d)),
    ));

    elements.push(SceneElement::Button(
        Button3D::new(
            local(COLOR_PICKER_X, TOOLBAR_Y, 0.08),
            "",
            ControlId::ColorPicker,
        )
        .with_size(0.4, 0.28)
        .with_color(snapshot.color.rgba()),
    ));

    let size_origin = local(SIZE_GROUP_X, TOOLBAR_Y, 0.08);
    let caption = rgb(0x495057);
    elements.push(SceneElement::Text(
        Text3D::new(size_origin + Vec3::new(-0.5, 0.0, 0.02), "Size:")
            .with_font_size(0.08)
            .with_color(caption),
    ));
    elements.push(SceneElement::Button(
        Button3D::new(size_origin + Vec3::new(-0.22, 0.0, 0.0), "-", ControlId::SizeDown)
            .with_size(0.22, 0.28)
            .with_font_size(0.15)
            .with_color(rgb(0xdc3545)),
    ));
    elements.push(SceneElement::Text(
        Text3D::new(size_origin + Vec3::new(0.0, 0.0, 0.02), snapshot.font_size.to_string())
            .with_font_size(0.09)
            .with_color(caption),
    ));
    elements.push(SceneElement::Button(
        Button3D::new(size_origin + Vec3::new(0.22, 0.0, 0.0), "+", ControlId::SizeUp)
            .with_size(0.22, 0.28)
            .with_font_size(0.15)
            .with_color(rgb(0x28a745)),
    ));
}

fn push_text_area(elements: &mut Vec<SceneElement>, snapshot: &RenderSnapshot) {
    let area_color = if snapshot.focused {
        rgb(0xffffff)
    } else {
        rgb(0xf8f9fa)
    };
    elements.push(SceneElement::Panel(
        Panel3D::new(local(0.0, -0.2, 0.06), PANEL_WIDTH - 0.2, 2.0)
            .with_depth(0.04)
            .with_color(area_color)
            .with_control(ControlId::TextArea),
    ));

    let text_origin = local(-PANEL_WIDTH / 2.0 + TEXT_MARGIN, 0.6, 0.09);
    if snapshot.show_placeholder {
        elements.push(SceneElement::Text(
            Text3D::new(text_origin, PLACEHOLDER_TEXT)
                .with_font_size(0.08)
                .with_color(rgb(0x6c757d))
                .top_left(),
        ));
    }
    elements.push(SceneElement::Text(
        Text3D::new(text_origin, snapshot.display_text.clone())
            .with_font_size(snapshot.text_scale)
            .with_color(snapshot.color.rgba())
            .with_max_width(PANEL_WIDTH - 2.0 * TEXT_MARGIN)
            .with_font_resource(snapshot.font_resource)
            .with_lit(snapshot.mode == RenderMode::ThreeD)
            .top_left(),
    ));
}

fn push_actions(elements: &mut Vec<SceneElement>) {
    let actions = [
        (-1.2, "Save", ControlId::Save, 0x28a745, 0xffffff),
        (0.0, "Clear", ControlId::Clear, 0xffc107, 0x212529),
        (1.2, "Cancel", ControlId::Cancel, 0xdc3545, 0xffffff),
    ];
    for (x, label, control, color, text_color) in actions {
        elements.push(SceneElement::Button(
            Button3D::new(local(x, ACTIONS_Y, 0.08), label, control)
                .with_size(0.8, 0.35)
                .with_color(rgb(color))
                .with_text_color(rgb(text_color)),
        ));
    }
}

fn push_font_dropdown(elements: &mut Vec<SceneElement>, selected: FontChoice) {
    for (i, font) in FontChoice::ALL.into_iter().enumerate() {
        let y = DROPDOWN_Y - i as f32 * DROPDOWN_ROW_SPACING;
        let (color, text_color) = if font == selected {
            (rgb(0x007bff), rgb(0xffffff))
        } else {
            (rgb(0xffffff), rgb(0x495057))
        };
        elements.push(SceneElement::Button(
            Button3D::new(
                local(FONT_PICKER_X, y, 0.1),
                font.display_name(),
                ControlId::FontOption(font),
            )
            .with_size(0.9, 0.15)
            .with_font_size(0.08)
            .with_color(color)
            .with_text_color(text_color),
        ));
    }
}

fn push_palette(elements: &mut Vec<SceneElement>) {
    for color in TextColor::ALL {
        let (column, row) = color.grid_cell();
        let offset = Vec3::new(
            (column as f32 - 1.5) * SWATCH_SPACING,
            -(row as f32) * SWATCH_SPACING,
            0.0,
        );
        elements.push(SceneElement::Button(
            Button3D::new(
                local(COLOR_PICKER_X, DROPDOWN_Y, 0.1) + offset,
                "",
                ControlId::ColorSwatch(color),
            )
            .with_size(0.12, 0.12)
            .with_color(color.rgba()),
        ));
    }
}
