//! Pointer projection onto the particle plane.
//!
//! Converts the last known pointer position, in normalized device
//! coordinates, into the world-space point on the z = 0 plane that the
//! proximity scan measures against. Pure computation: same NDC and camera
//! in, same point out.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::error::ProjectionError;

/// Below this |z| the pointer ray is treated as parallel to the plane.
const RAY_Z_EPSILON: f32 = 1e-6;

/// Project a pointer position onto the particle plane (z = 0).
///
/// The NDC point is unprojected at mid depth to recover the camera ray,
/// then the ray is intersected with the plane:
/// `distance = -camera.z / ray_direction.z`.
///
/// Returns [`ProjectionError::DegenerateRay`] when the ray is parallel to
/// the plane; callers skip the pointer update in that case rather than let
/// a division by zero reach particle state.
pub fn project_to_plane(ndc: Vec2, camera: &Camera) -> Result<Vec3, ProjectionError> {
    let unprojected = camera.unproject_ndc(Vec3::new(ndc.x, ndc.y, 0.5));
    let direction = (unprojected - camera.position).normalize();

    if direction.z.abs() < RAY_Z_EPSILON {
        return Err(ProjectionError::DegenerateRay { ray_z: direction.z });
    }

    let distance = -camera.position.z / direction.z;
    Ok(camera.position + direction * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_idempotent() {
        let camera = Camera::new(16.0 / 9.0).unwrap();
        let ndc = Vec2::new(0.31, -0.62);

        let a = project_to_plane(ndc, &camera).unwrap();
        let b = project_to_plane(ndc, &camera).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_center_ndc_hits_origin() {
        let camera = Camera::new(1.0).unwrap();
        let point = project_to_plane(Vec2::ZERO, &camera).unwrap();
        assert!(point.length() < 1e-4);
    }

    #[test]
    fn test_projected_point_lies_on_plane() {
        let camera = Camera::new(1.25).unwrap();
        let point = project_to_plane(Vec2::new(0.7, 0.4), &camera).unwrap();
        assert!(point.z.abs() < 1e-4);
    }

    #[test]
    fn test_parallel_ray_is_degenerate() {
        // A camera inside the particle plane looks along it; the center ray
        // never meets z = 0.
        let mut camera = Camera::new(1.0).unwrap();
        camera.position = Vec3::new(5.0, 0.0, 0.0);

        let result = project_to_plane(Vec2::ZERO, &camera);
        assert!(matches!(result, Err(ProjectionError::DegenerateRay { .. })));
    }
}
