// Host-side tests for page constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        LOADING_SCREEN_ID,
        LOADING_PERCENT_ID,
        LABELS_LAYER_ID,
        NAV_CONTAINER_ID,
        NAV_ID,
        CONTROL_PANEL_ID,
        CONTROL_TAB_ID,
        ZOOM_SLIDER_ID,
        XRAY_TOGGLE_ID,
        BRAINSTORM_TOGGLE_ID,
        RESET_BUTTON_ID,
        BOTTOM_NAV_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_hides_after_fading() {
    assert!(OVERLAY_FADE_DELAY_MS > 0);
    assert!(OVERLAY_HIDE_DELAY_MS as u32 >= OVERLAY_FADE_MS);
}

#[test]
fn bottom_nav_links_are_navigable() {
    for (label, url) in BOTTOM_NAV_LINKS {
        assert!(!label.is_empty());
        assert!(url.starts_with('/') || url.starts_with("http") || url.starts_with("mailto:"));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_tuning_is_sane() {
    assert!(BLOOM_STRENGTH > 0.0);
    assert!((0.0..1.0).contains(&BLOOM_THRESHOLD));
    assert!(MAX_FRAME_DT > 0.0 && MAX_FRAME_DT <= 0.25);
    assert!(WHEEL_ZOOM_PER_PIXEL > 0.0);
}

#[test]
fn label_slide_uses_standard_curve() {
    assert_eq!(LABEL_SLIDE_EASING, "cubic-bezier(0.4, 0.0, 0.2, 1)");
    assert!(NAV_SWEEP_EASING.starts_with("cubic-bezier("));
}
