mod common;

use brain_core::camera::{intro_end_eye, OrbitCamera};
use brain_core::constants::*;
use brain_core::labels::{project_to_screen, LabelTracker};
use brain_core::memory::{MemoryRegions, NAV_ITEMS, REGION_KEYS};
use glam::{Vec2, Vec3};

fn end_view_proj() -> glam::Mat4 {
    let mut cam = OrbitCamera::new(1.0, 16.0 / 9.0);
    cam.set_eye(intro_end_eye());
    cam.camera().view_projection()
}

#[test]
fn projection_is_pure() {
    let vp = end_view_proj();
    let viewport = Vec2::new(1920.0, 1080.0);
    let p = Vec3::new(12.0, 80.0, -4.0);
    let a = project_to_screen(vp, p, viewport);
    for _ in 0..10 {
        assert_eq!(project_to_screen(vp, p, viewport), a);
    }
}

#[test]
fn target_projects_to_viewport_centre() {
    let vp = end_view_proj();
    let s = project_to_screen(vp, BRAIN_CENTER, Vec2::new(1000.0, 500.0));
    assert!((s - Vec2::new(500.0, 250.0)).length() < 1e-2);
}

#[test]
fn points_above_target_land_higher_on_screen() {
    let vp = end_view_proj();
    let viewport = Vec2::new(1000.0, 500.0);
    let centre = project_to_screen(vp, BRAIN_CENTER, viewport);
    let above = project_to_screen(vp, BRAIN_CENTER + LABEL_ANCHOR_OFFSET, viewport);
    assert!(above.y < centre.y);
    assert!((above.x - centre.x).abs() < 1e-2);
}

#[test]
fn anchors_sit_above_region_vertices() {
    let regions = MemoryRegions::from_nodes(&common::nodes(), &REGION_KEYS);
    let mut tracker = LabelTracker::default();
    tracker.place(&regions, &NAV_ITEMS);
    assert_eq!(tracker.anchors().len(), NAV_ITEMS.len());
    let analytic = regions.get("analytic").unwrap().anchor().unwrap();
    assert_eq!(tracker.anchors()[0].position, analytic + LABEL_ANCHOR_OFFSET);
}

#[test]
fn missing_region_drops_only_that_label() {
    let nodes: Vec<_> = common::nodes()
        .into_iter()
        .filter(|n| !n.name().contains("episodic"))
        .collect();
    let regions = MemoryRegions::from_nodes(&nodes, &REGION_KEYS);
    let mut tracker = LabelTracker::default();
    tracker.place(&regions, &NAV_ITEMS);
    let items: Vec<_> = tracker.anchors().iter().map(|a| a.item).collect();
    assert_eq!(items, vec![0, 2, 3]);
}

#[test]
fn tracking_stops_on_transition_and_clear() {
    let regions = MemoryRegions::from_nodes(&common::nodes(), &REGION_KEYS);
    let mut tracker = LabelTracker::default();
    let viewport = Vec2::new(800.0, 600.0);
    assert!(tracker.screen_positions(end_view_proj(), viewport).is_empty());
    tracker.place(&regions, &NAV_ITEMS);
    assert_eq!(tracker.screen_positions(end_view_proj(), viewport).len(), 4);
    tracker.begin_transition();
    assert!(tracker.screen_positions(end_view_proj(), viewport).is_empty());
    assert_eq!(tracker.anchors().len(), 4);
    tracker.clear();
    assert!(tracker.anchors().is_empty());
}
