//! UI Raycasting - Detect pointer interaction with 3D UI elements

use glam::{Mat4, Vec3};

/// Result of a UI raycast
#[derive(Debug, Clone, Copy)]
pub struct UIRaycastHit {
    /// Position where ray hit the UI element
    pub position: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

/// Axis-aligned bounding box in 3D space
#[derive(Debug, Clone, Copy)]
pub struct UIAABB {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
}

impl UIAABB {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from center position and size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Test if a ray intersects this AABB
    /// Returns distance to intersection point if hit
    pub fn ray_intersection(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let inv_dir = Vec3::new(1.0 / ray_dir.x, 1.0 / ray_dir.y, 1.0 / ray_dir.z);

        let t1 = (self.min.x - ray_origin.x) * inv_dir.x;
        let t2 = (self.max.x - ray_origin.x) * inv_dir.x;
        let t3 = (self.min.y - ray_origin.y) * inv_dir.y;
        let t4 = (self.max.y - ray_origin.y) * inv_dir.y;
        let t5 = (self.min.z - ray_origin.z) * inv_dir.z;
        let t6 = (self.max.z - ray_origin.z) * inv_dir.z;

        let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        // If tmax < 0, ray is intersecting AABB but entire AABB is behind us
        if tmax < 0.0 {
            return None;
        }

        // If tmin > tmax, ray doesn't intersect AABB
        if tmin > tmax {
            return None;
        }

        // If tmin < 0, we're inside the AABB
        let distance = if tmin < 0.0 { tmax } else { tmin };

        Some(distance)
    }

    /// Raycast returning the hit point as well as the distance
    pub fn raycast(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<UIRaycastHit> {
        self.ray_intersection(ray_origin, ray_dir)
            .map(|distance| UIRaycastHit {
                position: ray_origin + ray_dir * distance,
                distance,
            })
    }
}

/// Convert screen coordinates to a 3D ray in world space.
///
/// Expects a projection with a `[0, 1]` depth range (`Mat4::perspective_rh`).
/// The ray starts on the near plane.
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    screen_size: (u32, u32),
    view_matrix: &Mat4,
    projection_matrix: &Mat4,
) -> (Vec3, Vec3) {
    // Convert screen coordinates to normalized device coordinates (-1 to 1)
    let x = (2.0 * screen_pos.0) / screen_size.0.max(1) as f32 - 1.0;
    let y = 1.0 - (2.0 * screen_pos.1) / screen_size.1.max(1) as f32; // Flip Y

    let inv_view_proj = (*projection_matrix * *view_matrix).inverse();
    let near = inv_view_proj.project_point3(Vec3::new(x, y, 0.0));
    let far = inv_view_proj.project_point3(Vec3::new(x, y, 1.0));

    (near, (far - near).normalize())
}

/// Project a world point to screen coordinates. `None` if the point is
/// behind the camera.
pub fn world_to_screen(
    point: Vec3,
    screen_size: (u32, u32),
    view_matrix: &Mat4,
    projection_matrix: &Mat4,
) -> Option<(f32, f32)> {
    let clip = *projection_matrix * *view_matrix * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let x = (ndc.x + 1.0) * 0.5 * screen_size.0 as f32;
    let y = (1.0 - ndc.y) * 0.5 * screen_size.1 as f32;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> (Mat4, Mat4) {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(75f32.to_radians(), 1280.0 / 720.0, 0.1, 1000.0);
        (view, proj)
    }

    #[test]
    fn test_aabb_ray_intersection() {
        let aabb = UIAABB::from_center_size(Vec3::ZERO, Vec3::ONE);

        // Ray pointing at center from positive Z
        let hit = aabb.ray_intersection(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(hit.is_some());
        assert!((hit.unwrap() - 1.5).abs() < 0.001);

        // Ray missing the box
        let miss = aabb.ray_intersection(Vec3::new(2.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(miss.is_none());
    }

    #[test]
    fn test_raycast_hit_position() {
        let aabb = UIAABB::from_center_size(Vec3::new(0.0, 0.0, -1.0), Vec3::new(2.0, 2.0, 0.2));
        let hit = aabb
            .raycast(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
            .expect("hit");
        assert!((hit.position.z + 0.9).abs() < 1e-5);
        assert!((hit.distance - 0.9).abs() < 1e-5);
    }

    #[test]
    fn test_screen_center_ray_points_forward() {
        let (view, proj) = camera();
        let (origin, dir) = screen_to_ray((640.0, 360.0), (1280, 720), &view, &proj);
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
        assert!(origin.x.abs() < 1e-4 && origin.y.abs() < 1e-4);
    }

    #[test]
    fn test_projection_round_trip() {
        let (view, proj) = camera();
        let target = Vec3::new(2.2, 1.8, 2.0);
        let screen = world_to_screen(target, (1280, 720), &view, &proj).expect("in front");

        let (origin, dir) = screen_to_ray(screen, (1280, 720), &view, &proj);
        let to_target = (target - origin).normalize();
        assert!(dir.dot(to_target) > 0.9999);
    }

    #[test]
    fn test_point_behind_camera_is_not_projected() {
        let (view, proj) = camera();
        assert!(world_to_screen(Vec3::new(0.0, 0.0, 10.0), (1280, 720), &view, &proj).is_none());
    }
}
