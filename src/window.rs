//! Windowed mode. There is no pixel renderer; the window title mirrors the
//! editor's render snapshot.

use anyhow::Result;
use scribe3d::SavedTexts;
use scribe3d_core::{RenderSnapshot, PLACEHOLDER_TEXT};
use scribe3d_input::KeyDisposition;
use scribe3d_ui3d::EditorOverlay;
use std::io;
use std::time::Instant;
use tracing::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

pub fn run(mut overlay: EditorOverlay, fov_degrees: f32, print_saved: bool) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let (width, height) = overlay.context().viewport;
    let window = WindowBuilder::new()
        .with_title(window_title(&overlay.session().snapshot()))
        .with_inner_size(PhysicalSize::new(width, height))
        .build(&event_loop)?;

    let mut saved = SavedTexts::new();
    let mut cursor = (0.0f32, 0.0f32);
    let mut last_tick = Instant::now();
    let mut title = String::new();

    info!("entering event loop");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                let context = overlay
                    .context()
                    .resized((size.width, size.height), fov_degrees);
                overlay.set_context(context);
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x as f32, position.y as f32);
                overlay.pointer_move(cursor);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Err(err) = overlay.pointer_down(cursor, &mut saved) {
                    error!("pointer action failed: {err}");
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let disposition = overlay.winit_key(&event.logical_key, event.state);
                let escape = event.logical_key == Key::Named(NamedKey::Escape);
                if disposition == KeyDisposition::Passthrough
                    && escape
                    && event.state == ElementState::Pressed
                {
                    info!("escape pressed, shutting down");
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            overlay.advance_time(now - last_tick);
            last_tick = now;

            let next = window_title(&overlay.session().snapshot());
            if next != title {
                window.set_title(&next);
                title = next;
            }

            match overlay.session().until_next_blink() {
                Some(wait) => elwt.set_control_flow(ControlFlow::WaitUntil(now + wait)),
                None => elwt.set_control_flow(ControlFlow::Wait),
            }
        }
        Event::LoopExiting => {
            if print_saved {
                if let Err(err) = saved.write_json_lines(io::stdout().lock()) {
                    error!("failed to print saved texts: {err}");
                }
            }
        }
        _ => {}
    })?;

    Ok(())
}

fn window_title(snapshot: &RenderSnapshot) -> String {
    if !snapshot.visible {
        return format!("scribe3d | [{}]", snapshot.toggle_label);
    }
    let body = if snapshot.show_placeholder {
        PLACEHOLDER_TEXT.to_string()
    } else {
        snapshot.display_text.replace('\n', " / ")
    };
    format!(
        "{} | {} | {} {} {} {} | [{}]",
        snapshot.title,
        body,
        snapshot.font,
        snapshot.mode,
        snapshot.color,
        snapshot.font_size,
        snapshot.toggle_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe3d_core::EditorSession;

    #[test]
    fn closed_editor_title_shows_toggle() {
        let session = EditorSession::new("Hello World!");
        assert_eq!(window_title(&session.snapshot()), "scribe3d | [Edit]");
    }

    #[test]
    fn open_editor_title_shows_text_and_options() {
        let mut session = EditorSession::new("a\nb");
        session.set_visible(true);
        assert_eq!(
            window_title(&session.snapshot()),
            "3D Text Editor | a / b | System Default 2D #ffffff 1.0 | [Close]"
        );
    }
}
