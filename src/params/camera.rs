//! Camera placement and projection settings.

/// Initial orbit camera pose and projection
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Initial eye position (world units)
    pub eye: [f32; 3],

    /// Point the camera looks at and orbits around (world units)
    pub target: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Orbit speed (radians per pixel of mouse drag)
    pub orbit_sensitivity: f32,

    /// Zoom speed (fraction of current distance per wheel line)
    pub zoom_sensitivity: f32,

    /// Closest allowed orbit distance (world units)
    pub min_distance: f32,

    /// Farthest allowed orbit distance (world units)
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 5.0, -10.0],
            target: [0.0, 3.0, 0.0],
            fov_degrees: 60.0,
            near_plane: 0.0001,
            far_plane: 512.0,
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.1,
            min_distance: 0.5,
            max_distance: 200.0,
        }
    }
}
