// Host-side tests for pure input functions.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn escape_skips_the_intro() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::SkipIntro));
    assert_eq!(action_for_key("Esc"), Some(KeyAction::SkipIntro));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["Enter", " ", "a", "ArrowLeft", "escape"] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn drag_reports_deltas_for_its_own_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.move_to(1, 10.0, 10.0), None);

    drag.begin(1, 100.0, 50.0);
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some([10.0, -5.0]));
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some([0.0, 0.0]));
    // a second finger does not steer the orbit
    assert_eq!(drag.move_to(2, 0.0, 0.0), None);

    drag.end(2);
    assert!(drag.active);
    drag.end(1);
    assert!(!drag.active);
    assert_eq!(drag.move_to(1, 200.0, 200.0), None);
}

#[test]
fn wheel_zoom_scales_distance() {
    let d = 320.0;
    assert!(wheel_zoom(d, 100.0) > d);
    assert!(wheel_zoom(d, -100.0) < d);
    assert_eq!(wheel_zoom(d, 0.0), d);
    // a huge flick never flips or zeroes the distance
    assert!(wheel_zoom(d, -1.0e6) > 0.0);
}
