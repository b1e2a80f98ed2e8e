// Third-person orbit camera

use glam::{Mat4, Vec3};

use crate::core::math::wrap_degrees;

/// Degrees of yaw per pixel of horizontal mouse travel.
const YAW_SENSITIVITY: f32 = 0.15;
/// Degrees of pitch per pixel of vertical mouse travel.
const PITCH_SENSITIVITY: f32 = 0.12;
const PITCH_MIN: f32 = -30.0;
const PITCH_MAX: f32 = 45.0;
const DISTANCE_MIN: f32 = 3.0;
const DISTANCE_MAX: f32 = 10.0;
const FOV_Y_DEG: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

/// Orbit camera that follows a world-space target.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera orbits (the avatar position)
    pub target: Vec3,
    /// Orbit yaw in degrees; shared with the avatar's facing
    pub yaw_deg: f32,
    /// Orbit pitch in degrees, clamped
    pub pitch_deg: f32,
    /// Distance from the target
    pub distance: f32,
    /// Extra height added above the orbit eye position
    pub height: f32,
    /// Viewport width
    viewport_width: f32,
    /// Viewport height
    viewport_height: f32,
}

impl OrbitCamera {
    /// Create a new camera
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            yaw_deg: 0.0,
            pitch_deg: 10.0,
            distance: 5.0,
            height: 2.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Apply a raw mouse delta in pixels. Moving the mouse up pitches the
    /// camera up.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw_deg = wrap_degrees(self.yaw_deg + dx * YAW_SENSITIVITY);
        self.pitch_deg = (self.pitch_deg - dy * PITCH_SENSITIVITY).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Zoom with the scroll wheel; positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Follow a new target position.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_width = width;
            self.viewport_height = height;
        }
    }

    /// Unit view direction derived from yaw and pitch.
    fn view_direction(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        self.target - self.view_direction() * self.distance + Vec3::new(0.0, self.height, 0.0)
    }

    /// Combined view-projection matrix.
    pub fn view_proj_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target + Vec3::Y, Vec3::Y);
        let aspect = self.viewport_width / self.viewport_height;
        let projection = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR);
        projection * view
    }
}
