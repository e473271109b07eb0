//! Secondary point layer: internal sparkles and the "rising particles" wave
//! that carries the labels up into the nav bar.

use crate::constants::RISING_PEAK;
use glam::Mat4;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BubbleVertex {
    pub position: [f32; 3],
    pub speed: f32,
    pub phase: f32,
    pub size: f32,
    pub _pad: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BubbleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub time: f32,
    pub level: f32,
    pub sparkles: f32,
    pub _pad: f32,
}

/// Pick `count` random brain vertices as sparkle/bubble seeds.
pub fn sample_bubbles(brain_points: &[f32], count: usize, seed: u64) -> Vec<BubbleVertex> {
    let n = brain_points.len() / 3;
    if n == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let i = rng.gen_range(0..n) * 3;
            BubbleVertex {
                position: [brain_points[i], brain_points[i + 1], brain_points[i + 2]],
                speed: rng.gen_range(0.5..1.5),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                size: rng.gen_range(2.0..6.0),
                _pad: [0.0; 2],
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RisingState {
    /// 0 = resting, 0.6 = fully risen.
    pub level: f32,
    pub sparkles: bool,
}

impl RisingState {
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, RISING_PEAK);
    }

    pub fn uniforms(&self, view_proj: Mat4, time: f32) -> BubbleUniforms {
        BubbleUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            time,
            level: self.level,
            sparkles: if self.sparkles { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}
