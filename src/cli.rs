//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::noise::DEFAULT_SEED;
use crate::params::RenderConfig;
use crate::settings::DEFAULT_SETTINGS_PATH;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noise-grid")]
#[command(about = "3D lattice of line segments animated by 4D noise", long_about = None)]
pub struct Args {
    /// Settings file for the control panel values
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Noise seed
    #[arg(long, value_name = "SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Start in borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Start with the control panel hidden (Tab shows it)
    #[arg(long)]
    pub hide_gui: bool,
}

impl Args {
    /// Render configuration with the window size from the command line
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["noise-grid"]);
        assert_eq!(args.settings, PathBuf::from(DEFAULT_SETTINGS_PATH));
        assert_eq!(args.seed, DEFAULT_SEED);
        assert!(!args.fullscreen);
        assert!(!args.hide_gui);

        let config = args.render_config();
        assert_eq!((config.window_width, config.window_height), (1280, 720));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "noise-grid",
            "--settings",
            "/tmp/grid.json",
            "--seed",
            "9",
            "--width",
            "800",
            "--height",
            "0",
            "--hide-gui",
        ]);
        assert_eq!(args.settings, PathBuf::from("/tmp/grid.json"));
        assert_eq!(args.seed, 9);
        assert!(args.hide_gui);

        let config = args.render_config();
        assert_eq!((config.window_width, config.window_height), (800, 1));
    }
}
