//! Noise-driven line grid: a 3D lattice of segments displaced by a 4D noise field.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::noise::NoiseGenerator;

/// Vertex data for line meshes (position + RGBA color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl GridVertex {
    fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Raw per-frame sampler inputs.
///
/// No validation happens here; [`crate::params::GridParams`] keeps its values
/// in range before handing them over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParams {
    pub frequency: f32,
    pub time_frequency: f32,
    pub magnitude: f32,
    pub grid_size: f32,
    pub resolution: u32,
}

impl SampleParams {
    /// Number of vertices one frame produces: two per lattice sample
    pub fn vertex_count(&self) -> usize {
        2 * (self.resolution as usize).pow(3)
    }

    /// World-space lattice corners.
    ///
    /// Height reuses the grid size, so the lattice is a cube resting on y = 0.
    pub fn extents(&self) -> (Vec3, Vec3) {
        let min = Vec3::new(-0.5, 0.0, -0.5) * self.grid_size;
        let max = Vec3::new(0.5, 1.0, 0.5) * self.grid_size;
        (min, max)
    }
}

/// Map a lattice index into `[min, max]`.
///
/// A single-sample axis sits at `min`.
fn lattice_coord(index: u32, resolution: u32, min: f32, max: f32) -> f32 {
    if resolution < 2 {
        return min;
    }
    let t = index as f32 / (resolution - 1) as f32;
    min + (max - min) * t
}

/// Displacement at a noise-space position.
///
/// Each axis reads the same 4D field with its coordinates rotated, which keeps
/// the three components uncorrelated.
fn displacement(noise: &NoiseGenerator, p: Vec3, time: f32) -> Vec3 {
    Vec3::new(
        noise.signed_4d(p.x, p.y, p.z, time),
        noise.signed_4d(time, p.z, p.y, p.x),
        noise.signed_4d(p.z, time, p.y, p.x),
    )
}

/// Fill `out` with one frame of line segments.
///
/// Emits anchor/tip pairs in y-outer, x-middle, z-inner order. The buffer is
/// cleared first; its capacity is reused.
pub fn generate_into(
    noise: &NoiseGenerator,
    params: &SampleParams,
    elapsed_s: f32,
    out: &mut Vec<GridVertex>,
) {
    out.clear();
    out.reserve(params.vertex_count());

    let noise_time = elapsed_s * params.time_frequency;
    let (extent_min, extent_max) = params.extents();
    let res = params.resolution;

    for y in 0..res {
        for x in 0..res {
            for z in 0..res {
                let position = Vec3::new(
                    lattice_coord(x, res, extent_min.x, extent_max.x),
                    lattice_coord(y, res, extent_min.y, extent_max.y),
                    lattice_coord(z, res, extent_min.z, extent_max.z),
                );

                let velocity = displacement(noise, position * params.frequency, noise_time);

                // Color by direction; a zero vector maps to mid gray
                let direction = velocity.normalize_or_zero();
                let rgb = (direction + Vec3::ONE) * 0.5;

                out.push(GridVertex::new(position, rgb.extend(1.0)));
                out.push(GridVertex::new(
                    position + velocity * params.magnitude,
                    rgb.extend(0.0),
                ));
            }
        }
    }
}

/// One frame of line segments as a fresh buffer.
pub fn generate(noise: &NoiseGenerator, params: &SampleParams, elapsed_s: f32) -> Vec<GridVertex> {
    let mut vertices = Vec::with_capacity(params.vertex_count());
    generate_into(noise, params, elapsed_s, &mut vertices);
    vertices
}

/// Line grid owning its noise source and per-frame vertex buffer
pub struct NoiseGrid {
    pub vertices: Vec<GridVertex>,
    noise: NoiseGenerator,
    last_resolution: Option<u32>,
}

impl NoiseGrid {
    pub fn new(seed: u32) -> Self {
        Self {
            vertices: Vec::new(),
            noise: NoiseGenerator::new(seed),
            last_resolution: None,
        }
    }

    /// Regenerate all vertices for the given time.
    ///
    /// # Arguments
    /// * `params` - Sampler inputs for this frame
    /// * `elapsed_s` - Seconds since the sketch started
    ///
    /// # Returns
    /// * The freshly generated vertices
    pub fn update(&mut self, params: &SampleParams, elapsed_s: f32) -> &[GridVertex] {
        if self.last_resolution != Some(params.resolution) {
            log::debug!(
                "Grid resolution {} -> {} vertices",
                params.resolution,
                params.vertex_count()
            );
            self.last_resolution = Some(params.resolution);
        }

        generate_into(&self.noise, params, elapsed_s, &mut self.vertices);
        &self.vertices
    }
}

/// Reference grid on the XZ plane at y = 0.
///
/// `steps` lines on each side of both axes, `step` apart, so the plane spans
/// `[-step * steps, step * steps]`.
pub fn floor_plane(step: f32, steps: u32, color: [f32; 4]) -> Vec<GridVertex> {
    let half = step * steps as f32;
    let color = Vec4::from_array(color);
    let lines_per_axis = 2 * steps as usize + 1;
    let mut vertices = Vec::with_capacity(lines_per_axis * 4);

    for i in -(steps as i32)..=steps as i32 {
        let offset = i as f32 * step;

        // Line parallel to Z
        vertices.push(GridVertex::new(Vec3::new(offset, 0.0, -half), color));
        vertices.push(GridVertex::new(Vec3::new(offset, 0.0, half), color));

        // Line parallel to X
        vertices.push(GridVertex::new(Vec3::new(-half, 0.0, offset), color));
        vertices.push(GridVertex::new(Vec3::new(half, 0.0, offset), color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(resolution: u32) -> SampleParams {
        SampleParams {
            frequency: 1.0,
            time_frequency: 1.0,
            magnitude: 0.3,
            grid_size: 6.0,
            resolution,
        }
    }

    #[test]
    fn test_vertex_count() {
        let noise = NoiseGenerator::default();
        for res in [3, 4, 7, 10] {
            let vertices = generate(&noise, &params(res), 1.5);
            assert_eq!(vertices.len(), 2 * (res as usize).pow(3));
        }
    }

    #[test]
    fn test_doubling_resolution_scales_by_eight() {
        let noise = NoiseGenerator::default();
        let small = generate(&noise, &params(5), 0.0).len();
        let large = generate(&noise, &params(10), 0.0).len();
        assert_eq!(large, small * 8);
    }

    #[test]
    fn test_anchor_opaque_tip_transparent() {
        let noise = NoiseGenerator::default();
        let vertices = generate(&noise, &params(6), 2.0);

        for pair in vertices.chunks(2) {
            assert_eq!(pair[0].color[3], 1.0);
            assert_eq!(pair[1].color[3], 0.0);
            // Tip shares the anchor color
            assert_eq!(pair[0].color[..3], pair[1].color[..3]);
        }
    }

    #[test]
    fn test_color_channels_in_unit_range() {
        let noise = NoiseGenerator::new(3);
        let mut p = params(8);
        p.frequency = 1.7;
        p.magnitude = 5.0;

        for vertex in generate(&noise, &p, 12.25) {
            for channel in vertex.color {
                assert!((0.0..=1.0).contains(&channel), "channel {} out of range", channel);
            }
        }
    }

    #[test]
    fn test_anchors_within_extents() {
        let noise = NoiseGenerator::default();
        let mut p = params(9);
        p.grid_size = 13.3;
        let (min, max) = p.extents();
        let eps = 1e-4;

        for pair in generate(&noise, &p, 0.75).chunks(2) {
            let anchor = Vec3::from_array(pair[0].position);
            assert!(anchor.cmpge(min - eps).all(), "{:?} below {:?}", anchor, min);
            assert!(anchor.cmple(max + eps).all(), "{:?} above {:?}", anchor, max);
        }
    }

    #[test]
    fn test_deterministic() {
        let noise = NoiseGenerator::new(11);
        let p = params(7);
        assert_eq!(generate(&noise, &p, 4.2), generate(&noise, &p, 4.2));

        // Same seed in a separate generator gives the same frame
        let other = NoiseGenerator::new(11);
        assert_eq!(generate(&noise, &p, 4.2), generate(&other, &p, 4.2));
    }

    #[test]
    fn test_zero_magnitude_collapses_segments() {
        let noise = NoiseGenerator::default();
        let mut p = params(5);
        p.magnitude = 0.0;
        p.frequency = 1.9;

        for pair in generate(&noise, &p, 3.3).chunks(2) {
            assert_eq!(pair[0].position, pair[1].position);
        }
    }

    #[test]
    fn test_three_cubed_lattice() {
        let noise = NoiseGenerator::default();
        let p = SampleParams {
            frequency: 1.0,
            time_frequency: 1.0,
            magnitude: 0.0,
            grid_size: 6.0,
            resolution: 3,
        };
        let vertices = generate(&noise, &p, 0.0);
        assert_eq!(vertices.len(), 54);

        let coords_xz = [-3.0, 0.0, 3.0];
        let coords_y = [0.0, 3.0, 6.0];
        let mut anchors = vertices.chunks(2).map(|pair| {
            assert_eq!(pair[0].position, pair[1].position);
            pair[0].position
        });

        // y outer, x middle, z inner
        for y in coords_y {
            for x in coords_xz {
                for z in coords_xz {
                    assert_eq!(anchors.next(), Some([x, y, z]));
                }
            }
        }
        assert_eq!(anchors.next(), None);
    }

    #[test]
    fn test_tip_is_anchor_plus_scaled_displacement() {
        let noise = NoiseGenerator::new(5);
        let p = params(4);
        let time = 2.5;
        let vertices = generate(&noise, &p, time);

        // Third sample: y = 0, x = 0, z = 2
        let anchor = Vec3::from_array(vertices[4].position);
        let tip = Vec3::from_array(vertices[5].position);
        let expected = displacement(&noise, anchor * p.frequency, time * p.time_frequency);
        assert!((tip - (anchor + expected * p.magnitude)).length() < 1e-5);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        let noise = NoiseGenerator::default();

        let mut single = params(1);
        let vertices = generate(&noise, &single, 1.0);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [-3.0, 0.0, -3.0]);

        single.resolution = 0;
        assert!(generate(&noise, &single, 1.0).is_empty());

        let mut flat = params(3);
        flat.grid_size = 0.0;
        for vertex in generate(&noise, &flat, 1.0).chunks(2) {
            assert_eq!(vertex[0].position, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_noise_grid_reuses_buffer() {
        let mut grid = NoiseGrid::new(0);
        grid.update(&params(10), 0.0);
        let capacity = grid.vertices.capacity();

        let count = grid.update(&params(4), 1.0).len();
        assert_eq!(count, 128);
        assert_eq!(grid.vertices.capacity(), capacity);
    }

    #[test]
    fn test_floor_plane() {
        let color = [0.2, 0.2, 0.2, 1.0];
        let floor = floor_plane(10.0, 10, color);

        // 21 lines per axis, two axes, two vertices per line
        assert_eq!(floor.len(), 21 * 2 * 2);
        for vertex in &floor {
            assert_eq!(vertex.position[1], 0.0);
            assert!(vertex.position[0].abs() <= 100.0);
            assert!(vertex.position[2].abs() <= 100.0);
            assert_eq!(vertex.color, color);
        }
    }
}
