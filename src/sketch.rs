//! Sketch state shared by the frame loop: parameters, geometry, camera, GUI flag.

use winit::keyboard::KeyCode;

use crate::camera::OrbitCamera;
use crate::grid::{GridVertex, NoiseGrid};
use crate::params::{CameraConfig, GridParams};

/// What the window shell should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    ToggleFullscreen,
    Exit,
}

/// All per-sketch state, owned by the event loop
pub struct Sketch {
    pub params: GridParams,
    pub grid: NoiseGrid,
    pub camera: OrbitCamera,
    pub show_gui: bool,
}

impl Sketch {
    pub fn new(params: GridParams, camera: CameraConfig, noise_seed: u32) -> Self {
        Self {
            params,
            grid: NoiseGrid::new(noise_seed),
            camera: OrbitCamera::new(camera),
            show_gui: true,
        }
    }

    /// Regenerate the line grid for this frame
    ///
    /// # Arguments
    /// * `elapsed_s` - Seconds since the sketch started
    pub fn update(&mut self, elapsed_s: f32) -> &[GridVertex] {
        let sample = self.params.sample_params();
        self.grid.update(&sample, elapsed_s)
    }

    /// React to a pressed key
    pub fn handle_key(&mut self, key: KeyCode) -> KeyAction {
        match key {
            KeyCode::Tab => {
                self.show_gui = !self.show_gui;
                KeyAction::None
            }
            KeyCode::KeyF => KeyAction::ToggleFullscreen,
            KeyCode::Escape => KeyAction::Exit,
            // Space is reserved
            KeyCode::Space => KeyAction::None,
            _ => KeyAction::None,
        }
    }
}
