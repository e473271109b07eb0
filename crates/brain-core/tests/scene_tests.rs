mod common;

use brain_core::camera::{intro_end_eye, viewport_scale};
use brain_core::constants::*;
use brain_core::scheduler::{Channel, Scheduler};
use brain_core::tween::Tween;
use brain_core::ease::Ease;
use brain_core::{BrainScene, Director, IntroPhase};
use common::FRAME;

fn settled_scene() -> BrainScene {
    let mut scene = common::scene();
    Director::new().skip(&mut scene);
    scene
}

#[test]
fn model_without_meshes_is_fatal() {
    let nodes = brain_core::mesh::parse_obj("v 0 0 0\nv 1 0 0\no lines\nl 1 2\n").unwrap();
    assert!(BrainScene::new(&nodes, 1, 800.0, 600.0).is_err());
}

#[test]
fn brainstorm_toggle_rises_and_falls() {
    let mut scene = settled_scene();
    scene.toggle_brainstorm(true, 0.0);
    scene.tick(1.0, 1.0);
    assert!(scene.rising.level > 0.0 && scene.rising.level < RISING_PEAK);
    scene.tick(2.0, 1.0);
    assert!((scene.rising.level - RISING_PEAK).abs() < 1e-5);
    scene.toggle_brainstorm(false, 3.0);
    scene.tick(5.0, 1.0);
    assert_eq!(scene.rising.level, 0.0);
    assert_eq!(scene.pending_ambient_tweens(), 0);
}

#[test]
fn xray_hides_after_switch_off_finishes() {
    let mut scene = settled_scene();
    assert!(!scene.xray.visible);
    scene.toggle_xray(true, 0.0);
    assert!(scene.xray.visible);
    scene.tick(3.0, 0.1);
    assert!((scene.xray.offset_y - XRAY_PHASE_HIGH.sin()).abs() < 1e-5);
    scene.toggle_xray(false, 4.0);
    scene.tick(5.0, 0.1);
    assert!(scene.xray.visible);
    scene.tick(7.0, 0.1);
    assert!(!scene.xray.visible);
}

#[test]
fn reset_restores_captured_pose() {
    let mut scene = settled_scene();
    scene.toggle_xray(true, 0.0);
    scene.toggle_brainstorm(true, 0.0);
    scene.set_zoom(550.0);
    scene.camera.drag(300.0, 120.0, 800.0);
    for i in 1..30 {
        scene.tick(i as f64 / 30.0, 1.0 / 30.0);
    }
    assert!((scene.camera.eye() - intro_end_eye()).length() > 1.0);

    let slider = scene.reset(1.0);
    assert_eq!(slider, DOLLY_TO);
    assert!((scene.camera.eye() - intro_end_eye()).length() < 1e-2);
    assert!(!scene.panel.xray);
    assert!(!scene.panel.brainstorm);
}

#[test]
fn zoom_is_clamped_after_intro() {
    let mut scene = settled_scene();
    scene.set_zoom(5000.0);
    assert_eq!(scene.camera.distance(), POST_INTRO_MAX_DISTANCE);
    scene.set_zoom(0.0);
    assert_eq!(scene.camera.distance(), scene.camera.min_distance);
}

#[test]
fn cancel_all_empties_the_scope() {
    let mut scope = Scheduler::new();
    scope.schedule_at(1.0, 'a');
    scope.schedule_at(2.0, 'b');
    scope.animate(Channel::CameraDolly, Tween::new(0.0, 1.0, 5.0, Ease::Linear, 0.0));
    scope.animate(Channel::Rising, Tween::new(0.0, 1.0, 5.0, Ease::Linear, 0.0));
    assert!(!scope.is_idle());
    scope.cancel_all();
    assert!(scope.is_idle());
    assert_eq!(scope.pop_due(10.0), None);
    assert!(scope.step_tweens(10.0).samples.is_empty());
}

#[test]
fn completions_report_in_end_order() {
    let mut scope: Scheduler<()> = Scheduler::new();
    scope.animate(Channel::Rising, Tween::new(0.0, 1.0, 3.0, Ease::Linear, 0.0));
    scope.animate(Channel::CameraDolly, Tween::new(0.0, 1.0, 1.0, Ease::Linear, 0.0));
    assert_eq!(scope.next_tween_end(), Some(1.0));
    let step = scope.step_tweens(5.0);
    let order: Vec<_> = step.completed.iter().map(|c| c.channel).collect();
    assert_eq!(order, vec![Channel::CameraDolly, Channel::Rising]);
    assert_eq!(scope.pending_tweens(), 0);
}

/// Frame loop as the page runs it: director first, then the scene tick,
/// every frame including after the intro settles.
fn live(director: &mut Director, scene: &mut BrainScene, from: f64, until: f64) {
    let mut k = (from / FRAME).round() as u64;
    while k as f64 * FRAME <= until + 1e-9 {
        let now = k as f64 * FRAME;
        director.advance(scene, now);
        scene.tick(now, FRAME as f32);
        k += 1;
    }
}

#[test]
fn brainstorm_during_intro_fade_keeps_its_level() {
    let mut scene = common::scene();
    let mut director = Director::new();
    director.start(0.0);
    // controls show at 12.2, the intro's own fade would start at 12.5
    live(&mut director, &mut scene, 0.0, 12.25);
    assert_eq!(director.phase(), IntroPhase::TransitioningNav);
    scene.toggle_brainstorm(true, 12.25);
    assert!(scene.rising_claimed());

    live(&mut director, &mut scene, 12.25 + FRAME, 18.0);
    assert_eq!(director.phase(), IntroPhase::Settled);
    assert!(scene.panel.brainstorm);
    assert!((scene.rising.level - RISING_PEAK).abs() < 1e-5);
    assert!(!director.is_active());
}

#[test]
fn reset_during_intro_fade_takes_over_rising() {
    let mut scene = common::scene();
    let mut director = Director::new();
    director.start(0.0);
    live(&mut director, &mut scene, 0.0, 13.0);
    let mid = scene.rising.level;
    assert!(mid > 0.0 && mid < RISING_PEAK);

    scene.reset(13.0);
    assert!(scene.rising_claimed());
    live(&mut director, &mut scene, 13.0 + FRAME, 13.5);
    assert!(!director.is_active());
    assert!(scene.rising.level > 0.0);
    live(&mut director, &mut scene, 13.5 + FRAME, 16.0);
    assert_eq!(scene.rising.level, 0.0);
    assert!(!scene.panel.brainstorm);
}

#[test]
fn resize_mid_intro_keeps_scripted_end_pose() {
    let mut scene = common::scene();
    let mut director = Director::new();
    director.start(0.0);
    common::run(&mut director, &mut scene, 0.0, 9.0);
    assert!(!scene.camera.is_interactive());
    scene.resize(2560.0, 1440.0);
    assert_eq!(scene.camera.distance(), DOLLY_TO);

    common::run(&mut director, &mut scene, 9.0 + FRAME, 13.0);
    assert_eq!(director.phase(), IntroPhase::Settled);
    assert!((scene.camera.eye() - intro_end_eye()).length() < 1e-2);
    assert!((scene.panel.default_distance() - DOLLY_TO).abs() < 1e-3);
    assert_eq!(
        scene.camera.min_distance,
        MIN_DISTANCE_BASE * viewport_scale(2560.0, 1440.0)
    );
    assert_eq!(scene.camera.max_distance, POST_INTRO_MAX_DISTANCE);
}

#[test]
fn resize_after_intro_scales_user_distance() {
    let mut scene = settled_scene();
    let before = scene.camera.distance();
    let old = viewport_scale(1280.0, 720.0);
    let new = viewport_scale(2560.0, 1440.0);
    scene.resize(2560.0, 1440.0);
    assert!((scene.camera.distance() - before * new / old).abs() < 1e-3);
    assert_eq!(scene.camera.max_distance, POST_INTRO_MAX_DISTANCE);
}
