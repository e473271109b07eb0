//! Brain particle swarm.
//!
//! One particle per vertex of the merged brain mesh. Each particle carries a
//! start position on the loading ring, its final brain position, colours, a
//! random delay and a size. After construction the per-particle data never
//! changes; motion is driven by the shared `progress` uniform, which the
//! shader turns into a per-particle eased blend:
//!
//! `t = easeExpoInOut(clamp(progress - delay, 0, duration) / duration)`
//!
//! Progress runs to 1.5 rather than 1.0 so that the particle with the largest
//! delay (0.3) still completes its blend.

use crate::constants::*;
use crate::ease::Ease;
use crate::tween::Tween;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParticleError {
    #[error("particle system needs a non-empty vertex buffer")]
    EmptyVertexBuffer,
    #[error("vertex buffer length {0} is not a multiple of 3")]
    RaggedVertexBuffer(usize),
}

/// Per-particle attributes, uploaded once as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub start: [f32; 3],
    pub scale: f32,
    pub end: [f32; 3],
    pub delay: f32,
    pub start_color: [f32; 3],
    pub duration: f32,
    pub end_color: [f32; 3],
    pub _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub time: f32,
    pub progress: f32,
    pub angle: f32,
    pub point_size: f32,
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

/// Vertices of the loading ring: concentric circles from the inner to the
/// outer radius, `(theta + 1) * (phi + 1)` points, z = 0.
pub fn loading_ring() -> Vec<[f32; 2]> {
    let theta_len = std::f32::consts::TAU;
    let step = (RING_OUTER_RADIUS - RING_INNER_RADIUS) / RING_PHI_SEGMENTS as f32;
    let mut out =
        Vec::with_capacity(((RING_THETA_SEGMENTS + 1) * (RING_PHI_SEGMENTS + 1)) as usize);
    let mut radius = RING_INNER_RADIUS;
    for _ in 0..=RING_PHI_SEGMENTS {
        for i in 0..=RING_THETA_SEGMENTS {
            let seg = RING_THETA_START + i as f32 / RING_THETA_SEGMENTS as f32 * theta_len;
            let (s, c) = seg.sin_cos();
            out.push([radius * c, radius * s]);
        }
        radius += step;
    }
    out
}

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    vertices: Vec<ParticleVertex>,
    progress: f32,
    forward: bool,
    time: f32,
    view_vector: Vec3,
}

impl ParticleSystem {
    /// Build the swarm from a flat xyz vertex buffer. Fails on an empty or
    /// ragged buffer; nothing else can go wrong here.
    pub fn new(brain_points: &[f32], seed: u64) -> Result<Self, ParticleError> {
        if brain_points.is_empty() {
            return Err(ParticleError::EmptyVertexBuffer);
        }
        if brain_points.len() % 3 != 0 {
            return Err(ParticleError::RaggedVertexBuffer(brain_points.len()));
        }
        let count = brain_points.len() / 3;
        let ring = loading_ring();
        let mut rng = StdRng::seed_from_u64(seed);
        let white = [1.0f32, 1.0, 1.0];

        let vertices = brain_points
            .chunks_exact(3)
            .enumerate()
            .map(|(i, end)| {
                let [rx, ry] = ring[i % ring.len()];
                let start = [
                    rx + rng.gen_range(-PARTICLE_START_JITTER..PARTICLE_START_JITTER),
                    ry + rng.gen_range(-PARTICLE_START_JITTER..PARTICLE_START_JITTER),
                    rng.gen_range(PARTICLE_START_Z_MIN..PARTICLE_START_Z_MAX),
                ];
                ParticleVertex {
                    start,
                    scale: rng.gen_range(PARTICLE_SCALE_MIN..PARTICLE_SCALE_MAX),
                    end: [end[0], end[1], end[2]],
                    delay: rng.gen_range(0.0..PARTICLE_MAX_DELAY),
                    start_color: white,
                    duration: PARTICLE_DURATION,
                    end_color: white,
                    _pad: 0.0,
                }
            })
            .collect::<Vec<_>>();

        log::info!("[particles] initialized {} particles", count);
        Ok(Self {
            vertices,
            progress: 0.0,
            forward: true,
            time: 0.0,
            view_vector: Vec3::ZERO,
        })
    }

    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn view_vector(&self) -> Vec3 {
        self.view_vector
    }

    /// Tween for a transform. Forward runs from the current progress up to
    /// 1.5 over ~6 s; reverse runs 1.0 -> 0.5 over 2 s. The caller registers
    /// it on [`crate::scheduler::Channel::ParticleProgress`], which replaces
    /// any transform already in flight.
    pub fn transform(&mut self, forward: bool, now: f64) -> Tween {
        self.forward = forward;
        if forward {
            let from = self.progress.clamp(0.0, PROGRESS_FORWARD_END);
            Tween::new(
                from,
                PROGRESS_FORWARD_END,
                PROGRESS_FORWARD_DURATION,
                Ease::QuadIn,
                now,
            )
        } else {
            Tween::new(
                PROGRESS_REVERSE_FROM,
                PROGRESS_REVERSE_TO,
                PROGRESS_REVERSE_DURATION,
                Ease::QuadIn,
                now,
            )
        }
    }

    /// Write a tween sample. While moving forward progress never decreases
    /// and never passes 1.5.
    pub fn apply_progress(&mut self, value: f32) {
        let v = value.clamp(0.0, PROGRESS_FORWARD_END);
        self.progress = if self.forward {
            self.progress.max(v)
        } else {
            v
        };
    }

    /// Force the fully formed brain.
    pub fn settle(&mut self) {
        self.forward = true;
        self.progress = PROGRESS_FORWARD_END;
    }

    /// Per-frame uniform inputs. `elapsed` is seconds since the scene clock
    /// started; the view vector feeds the x-ray fresnel term.
    #[inline]
    pub fn update(&mut self, elapsed: f32, eye: Vec3, brain_position: Vec3) {
        self.time = elapsed;
        self.view_vector = eye - brain_position;
    }

    pub fn uniforms(&self, view_proj: Mat4, view: Mat4, viewport: Vec2) -> ParticleUniforms {
        ParticleUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            time: self.time,
            progress: self.progress,
            angle: PARTICLE_SWIRL_ANGLE,
            point_size: PARTICLE_POINT_SIZE,
            viewport: viewport.to_array(),
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_has_expected_vertex_count() {
        let ring = loading_ring();
        assert_eq!(
            ring.len(),
            ((RING_THETA_SEGMENTS + 1) * (RING_PHI_SEGMENTS + 1)) as usize
        );
        let [x, y] = ring[0];
        assert!(((x * x + y * y).sqrt() - RING_INNER_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn same_seed_builds_same_swarm() {
        let pts = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let a = ParticleSystem::new(&pts, 7).unwrap();
        let b = ParticleSystem::new(&pts, 7).unwrap();
        assert_eq!(a.vertices(), b.vertices());
    }
}
