// Host-side tests for the inline style helpers.

#[path = "../src/css.rs"]
mod css;

use css::*;

#[test]
fn transition_strings() {
    assert_eq!(
        transition("opacity", 1500, "ease", 400),
        "opacity 1500ms ease 400ms"
    );
    assert_eq!(transition("clip-path", 0, "ease", 0), "none");
    assert_eq!(
        transitions(&["transform", "opacity"], 2500, "linear"),
        "transform 2500ms linear, opacity 2500ms linear"
    );
    assert_eq!(transitions(&[], 2500, "linear"), "none");
}

#[test]
fn labels_stagger_by_index() {
    let delays: Vec<u32> = (0..4).map(|i| stagger_delay_ms(i, 400)).collect();
    assert_eq!(delays, vec![0, 400, 800, 1200]);
}

#[test]
fn label_anchor_is_bottom_centre() {
    assert_eq!(slot_anchor(100.0, 20.0, 80.0, 18.0), (140.0, 38.0));
    assert_eq!(
        label_translate(140.0, 38.0),
        "translate(140.0px, 38.0px) translate(-50%, -100%)"
    );
}

#[test]
fn misc_values() {
    assert_eq!(px(14.0), "14.0px");
    assert_eq!(opacity(true), "1");
    assert_eq!(opacity(false), "0");
    assert_ne!(CLIP_HIDDEN, CLIP_FULL);
}
