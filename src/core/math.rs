// Math utilities shared by the camera and locomotion systems

use glam::Vec3;

/// Horizontal forward direction for a yaw angle in degrees.
///
/// Yaw 0 looks down -Z; positive yaw turns toward +X.
pub fn forward_from_yaw(yaw_deg: f32) -> Vec3 {
    let r = yaw_deg.to_radians();
    Vec3::new(r.sin(), 0.0, -r.cos()).normalize()
}

/// Horizontal right direction for a yaw angle in degrees.
pub fn right_from_yaw(yaw_deg: f32) -> Vec3 {
    let r = yaw_deg.to_radians();
    Vec3::new(r.cos(), 0.0, r.sin()).normalize()
}

/// Wrap an angle back into [-360, 360] degrees after a single-frame delta.
pub fn wrap_degrees(mut deg: f32) -> f32 {
    if deg > 360.0 {
        deg -= 360.0;
    }
    if deg < -360.0 {
        deg += 360.0;
    }
    deg
}

/// Linear interpolation
#[allow(dead_code)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_at_zero_yaw() {
        let f = forward_from_yaw(0.0);
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_forward_at_ninety_yaw() {
        let f = forward_from_yaw(90.0);
        assert_relative_eq!(f.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(f.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_right_is_perpendicular_to_forward() {
        for yaw in [0.0, 37.5, 90.0, 215.0, -120.0] {
            let f = forward_from_yaw(yaw);
            let r = right_from_yaw(yaw);
            assert_relative_eq!(f.dot(r), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_basis_vectors_are_horizontal_unit() {
        let f = forward_from_yaw(33.0);
        let r = right_from_yaw(33.0);
        assert_relative_eq!(f.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(r.length(), 1.0, epsilon = 1e-6);
        assert_eq!(f.y, 0.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-365.0), -5.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }
}
