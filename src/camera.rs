//! Orbit camera: mouse drag rotates around a target, wheel zooms.

use glam::{Mat4, Vec3};

use crate::params::CameraConfig;

/// Keeps pitch away from the poles where look-at degenerates
const MAX_PITCH: f32 = 1.55;

/// Camera orbiting a fixed target point
pub struct OrbitCamera {
    config: CameraConfig,
    /// Rotation around the Y axis (radians)
    pub yaw: f32,
    /// Elevation above the XZ plane (radians)
    pub pitch: f32,
    /// Distance from the target (world units)
    pub distance: f32,
    /// Point the camera orbits around
    pub target: Vec3,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitCamera {
    /// Create camera at the configured eye position, looking at the target
    pub fn new(config: CameraConfig) -> Self {
        let mut camera = Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
            dragging: false,
            last_cursor: None,
        };
        camera.reset();
        camera
    }

    /// Return to the configured starting pose
    pub fn reset(&mut self) {
        let eye = Vec3::from_array(self.config.eye);
        let target = Vec3::from_array(self.config.target);
        let offset = eye - target;

        self.target = target;
        self.distance = offset.length().max(f32::EPSILON);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
        self.yaw = offset.x.atan2(offset.z);
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Camera world position
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Rotate by a cursor delta in pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.config.orbit_sensitivity;
        self.pitch = (self.pitch + dy * self.config.orbit_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move toward (positive) or away from (negative) the target
    pub fn zoom(&mut self, lines: f32) {
        let factor = 1.0 - lines * self.config.zoom_sensitivity;
        self.distance = (self.distance * factor.max(0.1))
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Start or stop a drag (left mouse button)
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        if !dragging {
            self.last_cursor = None;
        }
    }

    /// Feed a cursor position; orbits while dragging
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.orbit((x - last_x) as f32, (y - last_y) as f32);
            }
            self.last_cursor = Some((x, y));
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Arguments
    /// * `aspect_ratio` - Surface width over height
    pub fn view_proj(&self, aspect_ratio: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            aspect_ratio,
            self.config.near_plane,
            self.config.far_plane,
        );
        proj * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
