mod common;

use brain_core::memory::{MemoryRegions, NavTarget, REGION_KEYS};
use brain_core::mesh::{merge_meshes, parse_obj, ObjError, SceneNode};

#[test]
fn nodes_are_tagged_by_kind() {
    let nodes = common::nodes();
    let meshes = nodes
        .iter()
        .filter(|n| matches!(n, SceneNode::Mesh { .. }))
        .count();
    let lines: Vec<_> = nodes
        .iter()
        .filter(|n| matches!(n, SceneNode::LineSegments { .. }))
        .collect();
    assert_eq!(meshes, 6);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name(), "Guides");
    // polyline 1-2-3 -> two segments
    assert_eq!(lines[0].vertex_count(), 4);
}

#[test]
fn quads_are_fan_triangulated() {
    let nodes = common::nodes();
    assert_eq!(nodes[0].name(), "Brain_analytic_lobe");
    assert_eq!(nodes[0].vertex_count(), 6);
    assert_eq!(&nodes[0].positions()[9..18], &[-10.0, 0.0, 0.0, 10.0, 10.0, 0.0, -10.0, 10.0, 0.0]);
}

#[test]
fn merge_skips_line_segments() {
    let nodes = common::nodes();
    let merged = merge_meshes(&nodes);
    // 6 + 6 + 3 + 3 + 3 + 3 vertices
    assert_eq!(merged.len(), 24 * 3);
}

#[test]
fn negative_indices_count_back() {
    let nodes = common::nodes();
    let process = nodes.iter().find(|n| n.name() == "Brain_process_lobe").unwrap();
    assert_eq!(process.positions(), &[-10.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 10.0, 0.0]);
}

#[test]
fn parse_errors_carry_line_numbers() {
    let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 9\n").unwrap_err();
    assert!(matches!(err, ObjError::Parse { line: 3, .. }));
    let err = parse_obj("v 0 0\n").unwrap_err();
    assert!(matches!(err, ObjError::Parse { line: 1, .. }));
    assert!(matches!(parse_obj("# nothing\nv 1 2 3\n"), Err(ObjError::NoGeometry)));
}

#[test]
fn regions_match_by_substring() {
    let regions = MemoryRegions::from_nodes(&common::nodes(), &REGION_KEYS);
    assert_eq!(regions.len(), 5);
    assert_eq!(regions.get("analytic").unwrap().vertex_count(), 6);
    assert!(regions.get("cerebellum").is_none());
    // anchor is the vertex at floor(len / 6) * 3
    let episodic = regions.get("episodic").unwrap();
    assert_eq!(episodic.anchor(), Some(glam::Vec3::new(-10.0, 0.0, 0.0)));
}

#[test]
fn nav_targets() {
    assert_eq!(NavTarget::classify("/about.html"), NavTarget::SameTab("/about.html"));
    assert_eq!(
        NavTarget::classify("https://github.com/alexanderspeer"),
        NavTarget::NewTab("https://github.com/alexanderspeer")
    );
    assert_eq!(NavTarget::classify("#"), NavTarget::Ignored);
}
