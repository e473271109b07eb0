mod common;

use brain_core::camera::intro_end_eye;
use brain_core::constants::*;
use brain_core::{Director, IntroPhase, StageCommand};
use common::*;

fn eye_error(scene: &brain_core::BrainScene) -> f32 {
    (scene.camera.eye() - intro_end_eye()).length()
}

#[test]
fn full_intro_runs_to_settled() {
    let mut scene = scene();
    let mut director = Director::new();
    director.start(0.0);
    assert_eq!(director.phase(), IntroPhase::Idle);
    assert_eq!(director.pending_timers(), 1);

    // nothing happens during the initial delay
    assert!(run(&mut director, &mut scene, 0.0, 0.99).is_empty());
    assert_eq!(director.phase(), IntroPhase::Idle);
    assert_eq!(scene.particles.progress(), 0.0);

    let cmds = run(&mut director, &mut scene, 1.0, 2.0);
    assert!(cmds.is_empty());
    assert_eq!(director.phase(), IntroPhase::Zooming);
    assert!(scene.camera.distance() > DOLLY_FROM);

    // labels begin fading in three seconds into the dolly
    let cmds = run(&mut director, &mut scene, 2.0 + FRAME, 4.0);
    let kinds: Vec<_> = cmds.iter().map(|(_, c)| *c).collect();
    assert_eq!(
        kinds,
        vec![
            StageCommand::SparklesOn,
            StageCommand::ShowLabels {
                stagger_ms: LABEL_STAGGER_MS
            }
        ]
    );
    assert_eq!(director.phase(), IntroPhase::Labeling);
    assert!(scene.labels.is_tracking());
    assert_eq!(scene.labels.anchors().len(), 4);

    let cmds = run(&mut director, &mut scene, 4.0 + FRAME, 13.0);
    let kinds: Vec<_> = cmds.iter().map(|(_, c)| *c).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(
        kinds[0],
        StageCommand::LabelsToNav {
            slide_ms: LABEL_SLIDE_MS
        }
    );
    assert_eq!(
        kinds[1],
        StageCommand::RevealNav {
            sweep_ms: NAV_SWEEP_MS
        }
    );
    assert_eq!(kinds[2], StageCommand::FadeLabels);
    assert_eq!(kinds[3], StageCommand::ShowChrome);
    assert_eq!(kinds[4], StageCommand::RemoveLabels);
    assert!(matches!(kinds[5], StageCommand::DefaultZoom(d) if (d - DOLLY_TO).abs() < 1e-3));

    // begin 1.0, dolly ends 7.0, nav transition 8.0, settle 12.5
    let settle_at = cmds.last().unwrap().0;
    assert!((settle_at - 12.5).abs() <= FRAME);
    assert_eq!(director.phase(), IntroPhase::Settled);
    assert!(eye_error(&scene) < 1e-2);
    assert_eq!(scene.particles.progress(), PROGRESS_FORWARD_END);
    assert_eq!(scene.xray.c, XRAY_C_HIDDEN);
    assert!(scene.camera.is_interactive());
    assert!(!scene.labels.is_tracking());
}

#[test]
fn rising_particles_fade_after_settling() {
    let mut scene = scene();
    let mut director = Director::new();
    director.start(0.0);
    run(&mut director, &mut scene, 0.0, 10.6);
    assert!((scene.rising.level - RISING_PEAK).abs() < 1e-4);
    run(&mut director, &mut scene, 10.6 + FRAME, 20.0);
    assert_eq!(scene.rising.level, 0.0);
    assert!(!director.is_active());
}

#[test]
fn progress_never_decreases_during_intro() {
    let mut scene = scene();
    let mut director = Director::new();
    director.start(0.0);
    let mut last = 0.0f32;
    let mut k = 0u64;
    while (k as f64) * FRAME < 14.0 {
        let now = k as f64 * FRAME;
        director.advance(&mut scene, now);
        let p = scene.particles.progress();
        assert!(p >= last, "progress went back at {now}: {last} -> {p}");
        assert!(p <= PROGRESS_FORWARD_END);
        last = p;
        k += 1;
    }
    assert_eq!(last, PROGRESS_FORWARD_END);
}

#[test]
fn skip_from_any_phase_reaches_same_end_state() {
    // (time to interrupt at, phase expected at that moment)
    let cases = [
        (0.0, IntroPhase::Idle),
        (0.5, IntroPhase::Idle),
        (2.0, IntroPhase::Zooming),
        (5.0, IntroPhase::Labeling),
        (8.1, IntroPhase::TransitioningNav),
        (10.0, IntroPhase::TransitioningNav),
        (12.3, IntroPhase::TransitioningNav),
    ];
    for (at, expected) in cases {
        let mut scene = scene();
        let mut director = Director::new();
        director.start(0.0);
        run(&mut director, &mut scene, 0.0, at);
        assert_eq!(director.phase(), expected, "phase at {at}");

        let cmds = director.skip(&mut scene);
        assert_eq!(director.phase(), IntroPhase::Interrupted);
        assert_eq!(director.pending_timers(), 0, "timers after skip at {at}");
        assert_eq!(director.pending_tweens(), 0, "tweens after skip at {at}");
        assert_eq!(scene.particles.progress(), PROGRESS_FORWARD_END);
        assert!(eye_error(&scene) < 1e-3, "camera after skip at {at}");
        assert!(cmds.contains(&StageCommand::RevealNav { sweep_ms: 0 }));
        assert!(cmds.contains(&StageCommand::ShowChrome));
        assert!(cmds
            .iter()
            .any(|c| matches!(c, StageCommand::DefaultZoom(d) if (d - DOLLY_TO).abs() < 1e-3)));
        assert!(scene.labels.anchors().is_empty());
        assert_eq!(scene.rising.level, 0.0);

        // nothing that was scheduled before the skip may fire afterwards
        let late = run(&mut director, &mut scene, at + FRAME, at + 30.0);
        assert!(late.is_empty(), "late commands after skip at {at}: {late:?}");
        assert_eq!(scene.particles.progress(), PROGRESS_FORWARD_END);
    }
}

#[test]
fn skip_on_load_matches_scripted_end_pose() {
    let mut skipped = scene();
    let mut d1 = Director::new();
    d1.skip(&mut skipped);

    let mut played = scene();
    let mut d2 = Director::new();
    d2.start(0.0);
    run(&mut d2, &mut played, 0.0, 12.5);
    assert_eq!(d2.phase(), IntroPhase::Settled);

    assert!((skipped.camera.eye() - played.camera.eye()).length() < 1e-2);
    assert_eq!(skipped.panel.zoom_range(), played.panel.zoom_range());
}

#[test]
fn skip_is_ignored_once_finished() {
    let mut scene = scene();
    let mut director = Director::new();
    director.start(0.0);
    run(&mut director, &mut scene, 0.0, 13.0);
    assert_eq!(director.phase(), IntroPhase::Settled);
    assert!(director.skip(&mut scene).is_empty());
    assert_eq!(director.phase(), IntroPhase::Settled);

    let mut scene = common::scene();
    let mut director = Director::new();
    assert!(!director.skip(&mut scene).is_empty());
    assert!(director.skip(&mut scene).is_empty());
    // a late start after an interrupt does nothing
    director.start(1.0);
    assert_eq!(director.pending_timers(), 0);
}

#[test]
fn labels_stop_tracking_when_slide_begins() {
    let mut scene = scene();
    let mut director = Director::new();
    director.start(0.0);
    run(&mut director, &mut scene, 0.0, 5.0);
    let vp = scene.viewport();
    let vp_mat = scene.camera.camera().view_projection();
    assert_eq!(scene.labels.screen_positions(vp_mat, vp).len(), 4);

    run(&mut director, &mut scene, 5.0 + FRAME, 8.25);
    let vp_mat = scene.camera.camera().view_projection();
    assert!(scene.labels.screen_positions(vp_mat, vp).is_empty());
    assert!(scene.labels.anchors().iter().all(|a| a.transitioning));
}
