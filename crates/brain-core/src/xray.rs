//! X-ray overlay: a fresnel-lit copy of the brain surface, additively blended
//! over the particles, with a scrolling lightning texture.

use crate::constants::*;
use crate::ease::Ease;
use crate::tween::Tween;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct XRayVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct XRayUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view_vector: [f32; 3],
    pub c: f32,
    pub glow_color: [f32; 3],
    pub p: f32,
    pub offset_y: f32,
    pub time: f32,
    pub _pad: [f32; 2],
}

/// Indexed surface with smooth normals. Corners closer than 1e-4 are welded
/// before normals are accumulated, so faces split by the exporter still
/// shade continuously.
#[derive(Clone, Debug, Default)]
pub struct XRayMesh {
    pub vertices: Vec<XRayVertex>,
    pub indices: Vec<u32>,
}

fn weld_key(p: Vec3) -> [i64; 3] {
    let q = p * XRAY_WELD_PRECISION;
    [q.x.round() as i64, q.y.round() as i64, q.z.round() as i64]
}

impl XRayMesh {
    /// Build from a non-indexed triangle stream (flat xyz, 9 floats per face).
    pub fn from_triangles(positions: &[f32]) -> Self {
        let mut lookup: FnvHashMap<[i64; 3], u32> = FnvHashMap::default();
        let mut points: Vec<Vec3> = Vec::new();
        let mut indices = Vec::with_capacity(positions.len() / 3);

        for corner in positions.chunks_exact(3) {
            let p = Vec3::new(corner[0], corner[1], corner[2]);
            let idx = *lookup.entry(weld_key(p)).or_insert_with(|| {
                points.push(p);
                (points.len() - 1) as u32
            });
            indices.push(idx);
        }
        // drop a trailing partial triangle, if any
        indices.truncate(indices.len() / 3 * 3);

        let mut normals = vec![Vec3::ZERO; points.len()];
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (
                points[tri[0] as usize],
                points[tri[1] as usize],
                points[tri[2] as usize],
            );
            let face = (b - a).cross(c - a);
            for &i in tri {
                normals[i as usize] += face;
            }
        }
        let vertices = points
            .iter()
            .zip(normals.iter())
            .map(|(p, n)| XRayVertex {
                position: p.to_array(),
                normal: n.normalize_or_zero().to_array(),
            })
            .collect();

        Self { vertices, indices }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XRayState {
    pub visible: bool,
    pub c: f32,
    pub p: f32,
    pub glow_color: Vec3,
    pub offset_y: f32,
}

impl Default for XRayState {
    fn default() -> Self {
        Self {
            visible: false,
            c: XRAY_C,
            p: XRAY_P,
            glow_color: Vec3::ONE,
            offset_y: XRAY_OFFSET_Y,
        }
    }
}

impl XRayState {
    /// Tween of the lightning phase for switching the overlay on or off;
    /// register it on [`crate::scheduler::Channel::XRayPhase`].
    pub fn toggle(&mut self, on: bool, now: f64) -> Tween {
        if on {
            self.visible = true;
        }
        let (from, to) = if on {
            (XRAY_PHASE_LOW, XRAY_PHASE_HIGH)
        } else {
            (XRAY_PHASE_HIGH, XRAY_PHASE_LOW)
        };
        Tween::new(from, to, XRAY_TOGGLE_DURATION, Ease::QuadIn, now)
    }

    pub fn apply_phase(&mut self, phase: f32) {
        self.offset_y = phase.sin();
    }

    /// Dim the glow term once the brain has formed.
    pub fn dim(&mut self) {
        self.c = XRAY_C_HIDDEN;
    }

    pub fn uniforms(&self, view_proj: Mat4, view_vector: Vec3, time: f32) -> XRayUniforms {
        XRayUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            view_vector: view_vector.to_array(),
            c: self.c,
            glow_color: self.glow_color.to_array(),
            p: self.p,
            offset_y: self.offset_y,
            time,
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_corners_are_welded() {
        // two triangles forming a quad, 6 corners, 4 unique points
        let quad = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.00001,
        ];
        let mesh = XRayMesh::from_triangles(&quad);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        for v in &mesh.vertices {
            assert!((v.normal[2] - 1.0).abs() < 1e-3);
        }
        assert!(!mesh.is_empty());
    }

    #[test]
    fn no_triangles_means_empty_mesh() {
        assert!(XRayMesh::from_triangles(&[]).is_empty());
    }
}
