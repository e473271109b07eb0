//! 3D-anchored navigation labels.
//!
//! Each label follows a point on the brain until it starts its scripted slide
//! into the nav bar; from then on the tracker stops reporting it so the DOM
//! transition owns the element's position.

use crate::constants::LABEL_ANCHOR_OFFSET;
use crate::memory::{MemoryRegions, NavItem};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Project a world point to viewport pixels (origin top-left, y down).
#[inline]
pub fn project_to_screen(view_proj: Mat4, point: Vec3, viewport: Vec2) -> Vec2 {
    let ndc = view_proj.project_point3(point);
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (-(ndc.y * 0.5) + 0.5) * viewport.y,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchor {
    /// Index into the nav item list this label was built from.
    pub item: usize,
    pub position: Vec3,
    pub transitioning: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LabelTracker {
    anchors: SmallVec<[LabelAnchor; 4]>,
    tracking: bool,
}

impl LabelTracker {
    /// Build one anchor per nav item whose region exists and start tracking.
    /// Items without a region are skipped.
    pub fn place(&mut self, regions: &MemoryRegions, items: &[NavItem]) {
        self.anchors.clear();
        for (i, item) in items.iter().enumerate() {
            let Some(anchor) = regions.get(item.key).and_then(|r| r.anchor()) else {
                log::warn!("[labels] no region for {}", item.key);
                continue;
            };
            self.anchors.push(LabelAnchor {
                item: i,
                position: anchor + LABEL_ANCHOR_OFFSET,
                transitioning: false,
            });
        }
        self.tracking = true;
    }

    pub fn anchors(&self) -> &[LabelAnchor] {
        &self.anchors
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Stop tracking; every label now belongs to the nav slide.
    pub fn begin_transition(&mut self) {
        self.tracking = false;
        for a in self.anchors.iter_mut() {
            a.transitioning = true;
        }
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
        self.tracking = false;
    }

    /// Screen positions for the labels still following the scene.
    pub fn screen_positions(&self, view_proj: Mat4, viewport: Vec2) -> SmallVec<[(usize, Vec2); 4]> {
        if !self.tracking {
            return SmallVec::new();
        }
        self.anchors
            .iter()
            .filter(|a| !a.transitioning)
            .map(|a| (a.item, project_to_screen(view_proj, a.position, viewport)))
            .collect()
    }
}
