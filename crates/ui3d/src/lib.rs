//! 3D UI for the scribe3d editor
//!
//! This crate places the editor panel in world space and maps pointer input
//! back onto it. It produces plain component descriptions; drawing them is
//! left to whichever renderer hosts the scene.
//!
//! # Features
//!
//! - **Components**: panels, buttons and text with world-space transforms
//! - **Layout**: the fixed editor panel geometry, rebuilt from each snapshot
//! - **Interaction**: screen-to-ray picking of the front-most control
//!
//! # Example
//!
//! ```rust
//! use scribe3d_core::{ControlId, NoSink, SessionOptions};
//! use scribe3d_ui3d::{EditorOverlay, SceneContext};
//! use glam::Vec3;
//!
//! let context = SceneContext::looking_at_origin(Vec3::new(0.0, 0.0, 5.0), 75.0, (1280, 720));
//! let mut overlay = EditorOverlay::mount(Some(context), "Hello", SessionOptions::default())
//!     .expect("scene available");
//!
//! let edit = overlay.screen_position_of(ControlId::EditToggle).unwrap();
//! overlay.pointer_down(edit, &mut NoSink).unwrap();
//! assert!(overlay.session().is_visible());
//! ```

pub mod components;
pub mod interaction;
pub mod layout;
pub mod overlay;

// Re-export commonly used types
pub use components::{
    Button3D, ButtonState, Panel3D, SceneElement, Text3D, TextAlignment, TextAnchor, UIComponent,
};
pub use interaction::{pick_control, screen_to_ray, world_to_screen, UIRaycastHit, UIAABB};
pub use layout::build_scene;
pub use overlay::{EditorOverlay, SceneContext};

/// Version of the UI3D crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
