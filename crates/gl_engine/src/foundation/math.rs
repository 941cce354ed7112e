//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics built on nalgebra.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a translation matrix
    fn translation(x: f32, y: f32, z: f32) -> Mat4;

    /// Create a perspective projection matrix
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_translation(&Vec3::new(x, y, z))
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Standard OpenGL perspective projection mapping view-space depth
        // [-near, -far] onto clip-space Z in [-1, 1].
        let f = 1.0 / (fov_y * 0.5).tan();

        Mat4::new(
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (near + far) / (near - far), (2.0 * near * far) / (near - far),
            0.0, 0.0, -1.0, 0.0,
        )
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        // Right-handed look-at matrix: the camera looks down -Z in view space
        // with Y up, matching OpenGL conventions.
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let camera_up = side.cross(&forward);

        Mat4::new(
            side.x, side.y, side.z, -side.dot(&eye),
            camera_up.x, camera_up.y, camera_up.z, -camera_up.dot(&eye),
            -forward.x, -forward.y, -forward.z, forward.dot(&eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(0.0, 30.0, 300.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

        // Coordinates are in the hundreds, so allow for f32 rounding
        let eye_h = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
        assert_relative_eq!(eye_h.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(eye_h.y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(eye_h.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_look_at_maps_target_onto_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let target = Vec3::new(0.0, 0.0, 0.0);
        let view = Mat4::look_at(eye, target, Vec3::new(0.0, 1.0, 0.0));

        let target_h = view * Vec4::new(target.x, target.y, target.z, 1.0);
        assert_relative_eq!(target_h.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(target_h.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(target_h.z, -10.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let near = 1.0;
        let far = 1000.0;
        let proj = Mat4::perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, near, far);

        // A point on the near plane lands on clip Z = -1 after the divide
        let on_near = proj * Vec4::new(0.0, 0.0, -near, 1.0);
        assert_relative_eq!(on_near.z / on_near.w, -1.0, epsilon = EPSILON);

        // A point on the far plane lands on clip Z = +1
        let on_far = proj * Vec4::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(on_far.z / on_far.w, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let rot = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let rotated = rot * Vec4::new(1.0, 0.0, 0.0, 0.0);

        assert_relative_eq!(rotated.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(rotated.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_translation_moves_points_not_directions() {
        let t = Mat4::translation(-50.0, 0.0, -50.0);

        let point = t * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_relative_eq!(point.x, -49.0, epsilon = EPSILON);
        assert_relative_eq!(point.z, -47.0, epsilon = EPSILON);

        let direction = t * Vec4::new(1.0, 2.0, 3.0, 0.0);
        assert_relative_eq!(direction.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(direction.z, 3.0, epsilon = EPSILON);
    }
}
