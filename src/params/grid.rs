//! Noise grid parameters exposed on the control panel.

use super::Bounded;
use crate::grid::SampleParams;

/// The five sketch parameters, each with its own bounds.
///
/// Defaults and ranges match the control panel sliders:
///
/// | Parameter      | Default | Min   | Max  |
/// |----------------|---------|-------|------|
/// | frequency      | 1.0     | 0.01  | 2.0  |
/// | time frequency | 1.0     | 0.001 | 3.0  |
/// | magnitude      | 0.3     | 0.0   | 5.0  |
/// | grid size      | 6.0     | 0.01  | 20.0 |
/// | resolution     | 20      | 3     | 100  |
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
    /// Spatial noise scale (noise units per world unit)
    pub frequency: Bounded<f32>,

    /// Temporal noise scale (noise units per second)
    pub time_frequency: Bounded<f32>,

    /// Length multiplier applied to the raw displacement (world units)
    pub magnitude: Bounded<f32>,

    /// Width and depth of the lattice, also its height (world units)
    pub grid_size: Bounded<f32>,

    /// Samples per axis, endpoints included
    pub resolution: Bounded<u32>,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            frequency: Bounded::new(1.0, 0.01, 2.0),
            time_frequency: Bounded::new(1.0, 0.001, 3.0),
            magnitude: Bounded::new(0.3, 0.0, 5.0),
            grid_size: Bounded::new(6.0, 0.01, 20.0),
            resolution: Bounded::new(20, 3, 100),
        }
    }
}

impl GridParams {
    /// Plain copy of the current values for one frame of sampling.
    pub fn sample_params(&self) -> SampleParams {
        SampleParams {
            frequency: self.frequency.get(),
            time_frequency: self.time_frequency.get(),
            magnitude: self.magnitude.get(),
            grid_size: self.grid_size.get(),
            resolution: self.resolution.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let params = GridParams::default();
        assert_eq!(params.frequency.get(), 1.0);
        assert_eq!(params.time_frequency.get(), 1.0);
        assert_eq!(params.magnitude.get(), 0.3);
        assert_eq!(params.grid_size.get(), 6.0);
        assert_eq!(params.resolution.get(), 20);
        assert_eq!(params.resolution.min(), 3);
        assert_eq!(params.resolution.max(), 100);
    }

    #[test]
    fn test_sample_params_copies_values() {
        let mut params = GridParams::default();
        params.magnitude.set(2.5);
        params.resolution.set(7);

        let sample = params.sample_params();
        assert_eq!(sample.magnitude, 2.5);
        assert_eq!(sample.resolution, 7);
        assert_eq!(sample.grid_size, 6.0);
    }
}
