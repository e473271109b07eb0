//! Memory regions and the navigation items anchored to them.

use crate::mesh::SceneNode;
use glam::Vec3;

/// Region keys looked up by substring in mesh-node names.
pub const REGION_KEYS: [&str; 5] = ["analytic", "episodic", "process", "semantic", "affective"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        key: "analytic",
        label: "ABOUT ME",
        url: "/about.html",
    },
    NavItem {
        key: "episodic",
        label: "EXPERIENCE",
        url: "/experience.html",
    },
    NavItem {
        key: "process",
        label: "PROJECTS",
        url: "/projects.html",
    },
    NavItem {
        key: "semantic",
        label: "CONTACT",
        url: "/contact.html",
    },
];

/// Where a navigation link leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget<'a> {
    /// Same-tab navigation to a page of this site.
    SameTab(&'a str),
    /// External link, opened in a new tab.
    NewTab(&'a str),
    Ignored,
}

impl<'a> NavTarget<'a> {
    pub fn classify(url: &'a str) -> Self {
        if url.starts_with('/') {
            NavTarget::SameTab(url)
        } else if url.starts_with("http") {
            NavTarget::NewTab(url)
        } else {
            NavTarget::Ignored
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryRegion {
    pub key: &'static str,
    /// Flat xyz positions of every mesh whose name contains `key`.
    pub positions: Vec<f32>,
}

impl MemoryRegion {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Representative point: the vertex at the middle of the region's buffer.
    pub fn anchor(&self) -> Option<Vec3> {
        if self.positions.len() < 3 {
            return None;
        }
        let i = (self.positions.len() / 6) * 3;
        Some(Vec3::new(
            self.positions[i],
            self.positions[i + 1],
            self.positions[i + 2],
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryRegions {
    regions: Vec<MemoryRegion>,
}

impl MemoryRegions {
    /// Group mesh vertices by region key. A mesh contributes to every key its
    /// name contains; line-segment nodes never contribute.
    pub fn from_nodes(nodes: &[SceneNode], keys: &[&'static str]) -> Self {
        let mut regions: Vec<MemoryRegion> = keys
            .iter()
            .map(|&key| MemoryRegion {
                key,
                positions: Vec::new(),
            })
            .collect();
        for node in nodes {
            let SceneNode::Mesh { name, positions } = node else {
                continue;
            };
            for region in regions.iter_mut() {
                if name.contains(region.key) {
                    region.positions.extend_from_slice(positions);
                }
            }
        }
        regions.retain(|r| !r.positions.is_empty());
        for r in &regions {
            log::debug!("[regions] {} -> {} vertices", r.key, r.vertex_count());
        }
        Self { regions }
    }

    pub fn get(&self, key: &str) -> Option<&MemoryRegion> {
        self.regions.iter().find(|r| r.key == key)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
