//! # 3D Camera System
//!
//! Provides a perspective camera with proper matrix mathematics for OpenGL
//! clip-space conventions.
//!
//! ## Design Principles
//! - **Library-agnostic**: No GL dependencies in camera math
//! - **Immutable operation**: Methods don't modify camera state unexpectedly
//! - **Mathematical correctness**: Follows established computer graphics conventions

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D Camera for perspective projections
///
/// Represents a camera in 3D space with position, orientation, and projection
/// parameters.
///
/// # Coordinate System
/// Uses the standard right-handed Y-up coordinate system: the view matrix
/// looks down -Z with Y up, and the projection maps depth to OpenGL's
/// [-1, 1] clip range.
///
/// # Performance Notes
/// Matrix calculations are performed on-demand rather than cached. For the
/// demo workloads this is two small matrix builds per frame.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians (vertical)
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera with standard Y-up orientation
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// The default target is the origin and the up vector is +Y; both can be
    /// adjusted after creation with [`Camera::look_at`].
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Configure camera to look at a specific point with custom up vector
    ///
    /// The up vector doesn't need to be perpendicular to the view direction;
    /// the view matrix calculation orthonormalizes it.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Typically called from framebuffer-size events when the window is
    /// resized. Only logs significant changes to reduce noise during a drag.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Generate view matrix for world-to-camera space transformation
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate perspective projection matrix
    ///
    /// Uses the current aspect ratio; for dynamic viewports, ensure
    /// [`Camera::set_aspect_ratio`] is called when window dimensions change.
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for Camera {
    /// Create a default perspective camera with sensible settings
    ///
    /// Positioned above and behind the origin, looking at the scene center,
    /// with a 45-degree field of view and a widescreen aspect ratio.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_perspective_constructor_converts_degrees() {
        let camera = Camera::perspective(Vec3::new(0.0, 30.0, 300.0), 45.0, 16.0 / 9.0, 1.0, 1000.0);
        assert_relative_eq!(camera.fov, std::f32::consts::FRAC_PI_4, epsilon = EPSILON);
        assert_eq!(camera.target, Vec3::zeros());
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let eye = Vec3::new(12.0, -4.0, 9.0);
        let mut camera = Camera::perspective(eye, 45.0, 1.0, 1.0, 100.0);
        camera.look_at(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        let view = camera.get_view_matrix();
        let eye_h = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
        assert_relative_eq!(eye_h.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(eye_h.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(eye_h.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_aspect_ratio_changes_projection() {
        let mut camera = Camera::default();
        let wide = camera.get_projection_matrix();

        camera.set_aspect_ratio(1.0);
        let square = camera.get_projection_matrix();

        assert_ne!(wide[(0, 0)], square[(0, 0)]);
        // The vertical scale only depends on the field of view
        assert_relative_eq!(wide[(1, 1)], square[(1, 1)], epsilon = EPSILON);
    }
}
