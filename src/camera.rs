//! Perspective camera for the particle field.
//!
//! The camera sits on the +z axis looking at the origin, with a roll about
//! the view axis that the frame driver advances over time. The same
//! view-projection matrix is used for rendering and for unprojecting the
//! pointer, so the two always agree.

use glam::{Mat4, Vec3};

use crate::error::ConfigError;

/// Perspective camera with a roll about the view axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Roll about the view axis in radians.
    pub roll: f32,
}

impl Camera {
    /// Create a camera with the original effect's parameters: position
    /// (0, 0, 5), 45 degree vertical fov, clip planes 0.1 / 100.
    pub fn new(aspect: f32) -> Result<Self, ConfigError> {
        Self::with_params(Vec3::new(0.0, 0.0, 5.0), 45.0_f32.to_radians(), aspect, 0.1, 100.0)
    }

    /// Create a camera with explicit parameters.
    pub fn with_params(
        position: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, ConfigError> {
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(ConfigError::InvalidAspect(aspect));
        }
        if !(near > 0.0 && near < far && far.is_finite()) {
            return Err(ConfigError::InvalidClipPlanes { near, far });
        }
        Ok(Self {
            position,
            fov_y,
            aspect,
            near,
            far,
            roll: 0.0,
        })
    }

    /// Update the aspect ratio after a resize. Zero-sized viewports
    /// (minimized windows) are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 && aspect.is_finite() {
            self.aspect = aspect;
        }
    }

    fn up(&self) -> Vec3 {
        // Rolling the camera is rolling its up vector.
        Vec3::new(-self.roll.sin(), self.roll.cos(), 0.0)
    }

    /// View matrix: looking at the origin with the rolled up vector.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, self.up())
    }

    /// Projection matrix (0..1 depth range, matching wgpu).
    pub fn proj_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.proj_matrix() * self.view_matrix()
    }

    /// Unproject a point in normalized device coordinates (z in 0..1)
    /// back into world space.
    pub fn unproject_ndc(&self, ndc: Vec3) -> Vec3 {
        self.view_proj().inverse().project_point3(ndc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_aspect() {
        assert!(Camera::new(16.0 / 9.0).is_ok());
        assert_eq!(Camera::new(0.0), Err(ConfigError::InvalidAspect(0.0)));
        assert!(Camera::new(-1.0).is_err());
    }

    #[test]
    fn test_with_params_validates_clip_planes() {
        let err = Camera::with_params(Vec3::ZERO, 1.0, 1.0, 10.0, 0.1);
        assert_eq!(
            err,
            Err(ConfigError::InvalidClipPlanes {
                near: 10.0,
                far: 0.1
            })
        );
    }

    #[test]
    fn test_roll_changes_view() {
        let mut camera = Camera::new(1.0).unwrap();
        let before = camera.view_matrix();
        camera.roll = 0.3;
        assert_ne!(before, camera.view_matrix());
    }

    #[test]
    fn test_unproject_roundtrip() {
        let camera = Camera::new(1.5).unwrap();
        let world = Vec3::new(0.2, -0.3, 0.0);
        let clip = camera.view_proj().project_point3(world);
        let back = camera.unproject_ndc(clip);
        assert!((back - world).length() < 1e-4);
    }
}
