// Shared fixtures for the brain-core integration tests.

#![allow(dead_code)]

use brain_core::mesh::{parse_obj, SceneNode};
use brain_core::{BrainScene, Director, StageCommand};

/// Small stand-in for the brain model: one quad per labelled region, an
/// unlabelled cerebellum and a line object that must never become particles.
pub const BRAIN_OBJ: &str = "\
# test brain
v -10 0 0
v 10 0 0
v 10 10 0
v -10 10 0
v 0 -20 5
v 5 -25 5
o Brain_analytic_lobe
f 1 2 3 4
o Brain_episodic_lobe
f 1 2 3
f 1 3 4
o Brain_process_lobe
f -6 -5 -4
o Brain_semantic_lobe
f 2/1/1 3/2/1 4/3/1
o Brain_affective_core
f 1 3 4
o Cerebellum
f 5 6 1
o Guides
l 1 2 3
";

pub fn nodes() -> Vec<SceneNode> {
    parse_obj(BRAIN_OBJ).unwrap()
}

pub fn scene() -> BrainScene {
    BrainScene::new(&nodes(), 42, 1280.0, 720.0).unwrap()
}

// Binary-exact step, so scheduled due times land exactly on frames.
pub const FRAME: f64 = 1.0 / 64.0;

/// Drive director and scene frame by frame from `from` up to `until`,
/// returning each command with the frame time it surfaced at.
pub fn run(
    director: &mut Director,
    scene: &mut BrainScene,
    from: f64,
    until: f64,
) -> Vec<(f64, StageCommand)> {
    let mut out = Vec::new();
    let mut k = (from / FRAME).round() as u64;
    loop {
        let now = k as f64 * FRAME;
        if now > until + 1e-9 {
            break;
        }
        for cmd in director.advance(scene, now) {
            out.push((now, cmd));
        }
        // no orbit motion once released, so end poses can be compared exactly
        if director.phase().is_playing() {
            scene.tick(now, FRAME as f32);
        }
        k += 1;
    }
    out
}
