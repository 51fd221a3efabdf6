//! Parameter definitions with units, bounds, and documented semantics.
//!
//! All tunable numbers live here:
//! - Sketch parameters carry their (default, min, max) bounds
//! - Camera and render settings document their units
//! - Nothing in here depends on a windowing or GUI toolkit

mod bounded;
mod camera;
mod grid;
mod render;

// Re-export all types
pub use bounded::Bounded;
pub use camera::CameraConfig;
pub use grid::GridParams;
pub use render::{rgb8_to_rgba, RenderConfig};
