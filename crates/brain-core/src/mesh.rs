//! Wavefront OBJ ingestion.
//!
//! The brain model is an OBJ with one named object per anatomical region plus
//! a few polyline objects. Parsing produces a flat list of tagged
//! [`SceneNode`]s once at load time; downstream code matches on the variant
//! instead of probing node types at runtime.
//!
//! Face corners are expanded into a non-indexed position stream (polygons are
//! fan-triangulated), which is the layout the particle system consumes: one
//! particle per face corner.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("obj line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("obj contains no faces or line elements")]
    NoGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Mesh { name: String, positions: Vec<f32> },
    LineSegments { name: String, positions: Vec<f32> },
}

impl SceneNode {
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Mesh { name, .. } | SceneNode::LineSegments { name, .. } => name,
        }
    }

    pub fn positions(&self) -> &[f32] {
        match self {
            SceneNode::Mesh { positions, .. } | SceneNode::LineSegments { positions, .. } => {
                positions
            }
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions().len() / 3
    }
}

#[derive(Default)]
struct ObjectBuilder {
    name: String,
    faces: Vec<f32>,
    lines: Vec<f32>,
}

impl ObjectBuilder {
    fn flush_into(&mut self, out: &mut Vec<SceneNode>) {
        let name = std::mem::take(&mut self.name);
        if !self.faces.is_empty() {
            out.push(SceneNode::Mesh {
                name: name.clone(),
                positions: std::mem::take(&mut self.faces),
            });
        }
        if !self.lines.is_empty() {
            out.push(SceneNode::LineSegments {
                name,
                positions: std::mem::take(&mut self.lines),
            });
        }
    }
}

fn parse_err(line: usize, reason: impl Into<String>) -> ObjError {
    ObjError::Parse {
        line,
        reason: reason.into(),
    }
}

// OBJ indices are 1-based; negative values count back from the latest vertex.
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<usize, ObjError> {
    let head = token.split('/').next().unwrap_or("");
    let raw: i64 = head
        .parse()
        .map_err(|_| parse_err(line, format!("bad vertex index `{token}`")))?;
    let idx = match raw {
        0 => return Err(parse_err(line, "vertex index 0")),
        r if r > 0 => (r - 1) as usize,
        r => {
            let back = r.unsigned_abs() as usize;
            if back > vertex_count {
                return Err(parse_err(line, format!("index {r} before first vertex")));
            }
            vertex_count - back
        }
    };
    if idx >= vertex_count {
        return Err(parse_err(line, format!("index {raw} out of range")));
    }
    Ok(idx)
}

fn push_vertex(dst: &mut Vec<f32>, vertices: &[[f32; 3]], idx: usize) {
    dst.extend_from_slice(&vertices[idx]);
}

/// Parse OBJ text into mesh and line-segment nodes, in file order.
pub fn parse_obj(src: &str) -> Result<Vec<SceneNode>, ObjError> {
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut nodes = Vec::new();
    let mut current = ObjectBuilder::default();

    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };
        match keyword {
            "v" => {
                let mut xyz = [0.0f32; 3];
                for slot in xyz.iter_mut() {
                    let tok = parts
                        .next()
                        .ok_or_else(|| parse_err(line_no, "vertex needs 3 coordinates"))?;
                    *slot = tok
                        .parse()
                        .map_err(|_| parse_err(line_no, format!("bad coordinate `{tok}`")))?;
                }
                vertices.push(xyz);
            }
            "o" | "g" => {
                current.flush_into(&mut nodes);
                current.name = parts.collect::<Vec<_>>().join(" ");
            }
            "f" => {
                let corners = parts
                    .map(|t| resolve_index(t, vertices.len(), line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(parse_err(line_no, "face needs at least 3 corners"));
                }
                for k in 1..corners.len() - 1 {
                    push_vertex(&mut current.faces, &vertices, corners[0]);
                    push_vertex(&mut current.faces, &vertices, corners[k]);
                    push_vertex(&mut current.faces, &vertices, corners[k + 1]);
                }
            }
            "l" => {
                let points = parts
                    .map(|t| resolve_index(t, vertices.len(), line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                // polyline -> segment pairs
                for pair in points.windows(2) {
                    push_vertex(&mut current.lines, &vertices, pair[0]);
                    push_vertex(&mut current.lines, &vertices, pair[1]);
                }
            }
            // normals, uvs, materials and smoothing groups are not used
            _ => {}
        }
    }
    current.flush_into(&mut nodes);

    if nodes.is_empty() {
        return Err(ObjError::NoGeometry);
    }
    Ok(nodes)
}

/// Concatenate the positions of every mesh node into one vertex buffer.
/// Line-segment nodes are not part of the brain surface.
pub fn merge_meshes(nodes: &[SceneNode]) -> Vec<f32> {
    let total: usize = nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Mesh { positions, .. } => Some(positions.len()),
            SceneNode::LineSegments { .. } => None,
        })
        .sum();
    let mut merged = Vec::with_capacity(total);
    for node in nodes {
        if let SceneNode::Mesh { positions, .. } = node {
            merged.extend_from_slice(positions);
        }
    }
    merged
}
