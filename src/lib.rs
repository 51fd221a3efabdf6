//! Noise Grid library - a 3D lattice of line segments animated by 4D noise

pub mod camera;
pub mod cli;
pub mod fps;
pub mod grid;
pub mod gui;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod settings;
pub mod sketch;
