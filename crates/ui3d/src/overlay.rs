//! Editor overlay - the mounted editor inside a 3D scene

use crate::components::SceneElement;
use crate::interaction::{pick_control, screen_to_ray, world_to_screen};
use crate::layout::build_scene;
use glam::{Mat4, Vec3};
use scribe3d_core::{
    activate, ActionError, ControlId, ControlOutcome, EditorSession, SaveSink, SessionOptions,
};
use scribe3d_input::{InputRouter, KeyDisposition, KeyInput};
use std::time::Duration;
use tracing::{debug, info, warn};
use winit::event::ElementState;
use winit::keyboard::Key;

/// Camera and viewport of the scene the editor is mounted in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneContext {
    /// World-to-view transform
    pub view: Mat4,
    /// View-to-clip transform, `[0, 1]` depth range
    pub projection: Mat4,
    /// Viewport size in pixels
    pub viewport: (u32, u32),
}

impl SceneContext {
    /// Perspective camera at `eye` looking at the origin.
    pub fn looking_at_origin(eye: Vec3, fov_degrees: f32, viewport: (u32, u32)) -> Self {
        let aspect = viewport.0.max(1) as f32 / viewport.1.max(1) as f32;
        Self {
            view: Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y),
            projection: Mat4::perspective_rh(fov_degrees.to_radians(), aspect, 0.1, 1000.0),
            viewport,
        }
    }

    /// Rebuild the projection for a new viewport size.
    pub fn resized(self, viewport: (u32, u32), fov_degrees: f32) -> Self {
        let aspect = viewport.0.max(1) as f32 / viewport.1.max(1) as f32;
        Self {
            projection: Mat4::perspective_rh(fov_degrees.to_radians(), aspect, 0.1, 1000.0),
            viewport,
            ..self
        }
    }
}

/// The editor as mounted in a scene: session, key router and pointer picking.
#[derive(Debug)]
pub struct EditorOverlay {
    context: SceneContext,
    session: EditorSession,
    router: InputRouter,
    hovered: Option<ControlId>,
}

impl EditorOverlay {
    /// Mount an editor seeded with `initial`.
    ///
    /// Without a scene context there is nothing to draw into; the editor
    /// declines to mount and `None` is returned.
    pub fn mount(
        context: Option<SceneContext>,
        initial: impl Into<String>,
        options: SessionOptions,
    ) -> Option<Self> {
        let Some(context) = context else {
            warn!("scene context not available, editor not mounted");
            return None;
        };
        info!(
            width = context.viewport.0,
            height = context.viewport.1,
            "editor overlay mounted"
        );
        Some(Self {
            context,
            session: EditorSession::with_options(initial, options),
            router: InputRouter::new(),
            hovered: None,
        })
    }

    /// The editor session.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Mutable access to the editor session.
    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// Scene camera and viewport.
    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    /// Replace the camera and viewport, e.g. after a window resize.
    pub fn set_context(&mut self, context: SceneContext) {
        self.context = context;
    }

    /// Key router statistics.
    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Route a key press into the session.
    pub fn key(&mut self, key: KeyInput) -> KeyDisposition {
        self.router.route(&mut self.session, key)
    }

    /// Route a winit key event into the session.
    pub fn winit_key(&mut self, key: &Key, state: ElementState) -> KeyDisposition {
        self.router.route_winit(&mut self.session, key, state)
    }

    /// Feed elapsed time to the cursor blink. Returns whether a redraw is due.
    pub fn advance_time(&mut self, dt: Duration) -> bool {
        self.session.advance_time(dt)
    }

    /// Current drawable elements.
    pub fn scene(&self) -> Vec<SceneElement> {
        build_scene(&self.session.snapshot(), self.hovered)
    }

    /// Control under a screen position, if any.
    pub fn control_at(&self, screen_pos: (f32, f32)) -> Option<ControlId> {
        let (origin, dir) = screen_to_ray(
            screen_pos,
            self.context.viewport,
            &self.context.view,
            &self.context.projection,
        );
        pick_control(&self.scene(), origin, dir).map(|(control, _)| control)
    }

    /// Screen position of the front face center of a live control.
    pub fn screen_position_of(&self, control: ControlId) -> Option<(f32, f32)> {
        let volume = self
            .scene()
            .iter()
            .filter_map(SceneElement::pick_volume)
            .find(|(id, _)| *id == control)
            .map(|(_, volume)| volume)?;
        let front = Vec3::new(volume.center().x, volume.center().y, volume.max.z);
        world_to_screen(
            front,
            self.context.viewport,
            &self.context.view,
            &self.context.projection,
        )
    }

    /// Track the pointer for hover highlighting. Returns the hovered control.
    pub fn pointer_move(&mut self, screen_pos: (f32, f32)) -> Option<ControlId> {
        let hovered = self.control_at(screen_pos);
        if hovered != self.hovered {
            debug!(?hovered, "hover changed");
            self.hovered = hovered;
        }
        hovered
    }

    /// Pointer-down at a screen position: activate the front-most control.
    pub fn pointer_down<S: SaveSink>(
        &mut self,
        screen_pos: (f32, f32),
        sink: &mut S,
    ) -> Result<ControlOutcome, ActionError<S::Error>> {
        match self.control_at(screen_pos) {
            Some(control) => activate(&mut self.session, control, sink),
            None => Ok(ControlOutcome::Ignored),
        }
    }

    /// Activate a control directly, bypassing picking.
    pub fn activate<S: SaveSink>(
        &mut self,
        control: ControlId,
        sink: &mut S,
    ) -> Result<ControlOutcome, ActionError<S::Error>> {
        activate(&mut self.session, control, sink)
    }
}
