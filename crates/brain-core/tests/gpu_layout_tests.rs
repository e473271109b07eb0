// The WGSL structs mirror these Pod types byte for byte.

use brain_core::particles::{ParticleUniforms, ParticleVertex};
use brain_core::rising::{BubbleUniforms, BubbleVertex};
use brain_core::xray::{XRayUniforms, XRayVertex};
use std::mem::size_of;

#[test]
fn instance_and_vertex_strides() {
    assert_eq!(size_of::<ParticleVertex>(), 64);
    assert_eq!(size_of::<BubbleVertex>(), 32);
    assert_eq!(size_of::<XRayVertex>(), 24);
}

#[test]
fn uniform_blocks_are_16_byte_multiples() {
    assert_eq!(size_of::<ParticleUniforms>(), 160);
    assert_eq!(size_of::<BubbleUniforms>(), 80);
    assert_eq!(size_of::<XRayUniforms>(), 112);
    for size in [
        size_of::<ParticleUniforms>(),
        size_of::<BubbleUniforms>(),
        size_of::<XRayUniforms>(),
    ] {
        assert_eq!(size % 16, 0);
    }
}

#[test]
fn shaders_export_the_entry_points_the_pipelines_use() {
    for src in [
        brain_core::PARTICLES_WGSL,
        brain_core::BUBBLES_WGSL,
        brain_core::XRAY_WGSL,
    ] {
        assert!(src.contains("fn vs_main"));
        assert!(src.contains("fn fs_main"));
    }
    for entry in ["fn vs_fullscreen", "fn fs_bright", "fn fs_blur", "fn fs_composite"] {
        assert!(brain_core::POST_WGSL.contains(entry), "{}", entry);
    }
}
