//! 3D UI Interaction System
//!
//! Pointer positions are turned into world-space rays and tested against the
//! pickable volumes of the scene; the nearest hit wins.

pub mod raycaster;

pub use raycaster::{screen_to_ray, world_to_screen, UIRaycastHit, UIAABB};

use crate::components::SceneElement;
use glam::Vec3;
use scribe3d_core::ControlId;

/// Nearest control hit by a ray, if any.
pub fn pick_control(
    elements: &[SceneElement],
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<(ControlId, UIRaycastHit)> {
    let mut closest: Option<(ControlId, UIRaycastHit)> = None;

    for (control, volume) in elements.iter().filter_map(SceneElement::pick_volume) {
        if let Some(hit) = volume.raycast(ray_origin, ray_dir) {
            let nearer = closest
                .as_ref()
                .map_or(true, |(_, best)| hit.distance < best.distance);
            if nearer {
                closest = Some((control, hit));
            }
        }
    }

    closest
}
