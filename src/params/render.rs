//! Window and scene rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Background gradient color at the window center (RGB, 0-255)
    pub background_inner: [u8; 3],

    /// Background gradient color at the window corners (RGB, 0-255)
    pub background_outer: [u8; 3],

    /// Floor grid line color (gray level, 0-255)
    pub floor_gray: u8,

    /// Floor grid spacing (world units)
    pub floor_step: f32,

    /// Floor grid lines on each side of the origin
    pub floor_steps: u32,

    /// Control panel width (logical pixels)
    pub panel_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            background_inner: [40, 40, 40],
            background_outer: [0, 0, 0],
            floor_gray: 60,
            floor_step: 10.0,
            floor_steps: 10,
            panel_width: 260.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Floor line color as normalized RGBA
    pub fn floor_color(&self) -> [f32; 4] {
        let gray = self.floor_gray as f32 / 255.0;
        [gray, gray, gray, 1.0]
    }
}

/// Normalize an 8-bit RGB triple to RGBA with full alpha
pub fn rgb8_to_rgba(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        let config = RenderConfig::default();
        assert!((config.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);

        let degenerate = RenderConfig {
            window_height: 0,
            ..RenderConfig::default()
        };
        assert!(degenerate.aspect_ratio().is_finite());
    }

    #[test]
    fn test_colors_normalized() {
        let config = RenderConfig::default();
        assert_eq!(rgb8_to_rgba(config.background_outer), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb8_to_rgba([255, 0, 51]), [1.0, 0.0, 0.2, 1.0]);
        assert!((config.floor_color()[0] - 60.0 / 255.0).abs() < 1e-6);
    }
}
