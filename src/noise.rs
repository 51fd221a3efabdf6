//! Noise generation for the grid field.
//!
//! Wraps OpenSimplex noise so the sampler only ever sees a signed 4D field.

use ::noise::{NoiseFn, OpenSimplex};

/// Noise seed used when none is given on the command line
pub const DEFAULT_SEED: u32 = 0;

/// Signed 4D coherent noise source
pub struct NoiseGenerator {
    simplex: OpenSimplex,
}

impl NoiseGenerator {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }

    /// Sample 4D simplex noise at position
    ///
    /// Returns value in range [-1, 1]
    pub fn signed_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        let value = self.simplex.get([x as f64, y as f64, z as f64, w as f64]);
        value.clamp(-1.0, 1.0) as f32
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_determinism() {
        let a = NoiseGenerator::new(7);
        let b = NoiseGenerator::new(7);

        for i in 0..200 {
            let t = i as f32 * 0.173;
            let value = a.signed_4d(t, t * 0.5, -t, t * 2.0);
            assert!((-1.0..=1.0).contains(&value), "{} out of range", value);
            assert_eq!(value, b.signed_4d(t, t * 0.5, -t, t * 2.0));
        }
    }

    #[test]
    fn test_field_is_continuous() {
        let noise = NoiseGenerator::default();
        let here = noise.signed_4d(0.3, 1.7, -0.4, 2.2);
        let near = noise.signed_4d(0.3001, 1.7, -0.4, 2.2);
        assert!((here - near).abs() < 0.01);
    }
}
