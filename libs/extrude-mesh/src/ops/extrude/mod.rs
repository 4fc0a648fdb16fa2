//! # Extrusion Mesh Builder
//!
//! Turns one triangulated contour group into the vertices and faces of its
//! extruded solid between `z = BOTTOM_Z` and `z = TOP_Z`.
//!
//! ## Vertex doubling
//!
//! Point `i` of the global numbering becomes two mesh vertices:
//! `2i` on the bottom plane and `2i + 1` on the top plane (0-based; the OBJ
//! writer shifts both by one).
//!
//! ## Winding
//!
//! For a counter-clockwise triangle `(i0, i1, i2)`:
//!
//! - bottom cap `(b(i2), b(i1), b(i0))` faces -Z,
//! - top cap `(t(i0), t(i1), t(i2))` faces +Z,
//! - each reversed edge `(i2, i1)`, `(i1, i0)`, `(i0, i2)` that is a
//!   boundary edge gets a wall quad `(a, a', b)`, `(b, a', b')`, where `a` and
//!   `b` are the bottom copies of the edge ends and `'` is the top copy.
//!
//! Diagonals added by the triangulation are shared by two triangles and are
//! not in the boundary set, so they never get a wall.

use crate::error::{ExtrudeError, Result};
use crate::geometry::{ContourGroup, IndexRange, Triangle, VertexIndex};
use crate::ops::edges::BoundaryEdgeSet;
use config::constants::{BOTTOM_Z, TOP_Z};
use glam::DVec3;

/// Bottom-plane mesh vertex of point `i`.
#[inline]
pub fn bottom(i: VertexIndex) -> VertexIndex {
    2 * i
}

/// Top-plane mesh vertex of point `i`.
#[inline]
pub fn top(i: VertexIndex) -> VertexIndex {
    2 * i + 1
}

/// The extruded geometry of one contour group, in global mesh indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMesh {
    /// Bottom and top copy of every point, interleaved.
    pub vertices: Vec<DVec3>,
    /// Cap and wall faces in emission order.
    pub faces: Vec<[VertexIndex; 3]>,
    /// Number of wall quads (two faces each).
    pub side_walls: usize,
}

impl GroupMesh {
    /// Number of cap faces (both planes).
    pub fn cap_faces(&self) -> usize {
        self.faces.len() - 2 * self.side_walls
    }
}

/// Builds caps and walls for one group whose points occupy `range`.
///
/// # Errors
///
/// `IndexOutOfRange` when a triangle names a point outside `range`.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::geometry::{Contour, ContourGroup, IndexRange};
/// use extrude_mesh::ops::edges::BoundaryEdgeSet;
/// use extrude_mesh::ops::extrude::extrude_group;
///
/// let tri = ContourGroup::new(Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]));
/// let edges = BoundaryEdgeSet::build(&tri, 0);
/// let mesh = extrude_group(&tri, IndexRange::new(0, 3), &[[0, 1, 2]], &edges).unwrap();
/// assert_eq!(mesh.vertices.len(), 6);
/// assert_eq!(mesh.faces.len(), 2 + 3 * 2);
/// ```
pub fn extrude_group(
    group: &ContourGroup,
    range: IndexRange,
    triangles: &[Triangle],
    edges: &BoundaryEdgeSet,
) -> Result<GroupMesh> {
    let mut vertices = Vec::with_capacity(range.len() * 2);
    for p in group.points() {
        vertices.push(DVec3::new(p.x, p.y, BOTTOM_Z));
        vertices.push(DVec3::new(p.x, p.y, TOP_Z));
    }

    let mut faces = Vec::with_capacity(triangles.len() * 4);
    let mut side_walls = 0;

    for &[i0, i1, i2] in triangles {
        for index in [i0, i1, i2] {
            if !range.contains(index) {
                return Err(ExtrudeError::IndexOutOfRange {
                    index,
                    start: range.start,
                    end: range.end,
                });
            }
        }

        faces.push([bottom(i2), bottom(i1), bottom(i0)]);
        faces.push([top(i0), top(i1), top(i2)]);

        for (u, v) in [(i2, i1), (i1, i0), (i0, i2)] {
            if !edges.contains(u, v) {
                continue;
            }
            let (a, b) = (bottom(u), bottom(v));
            faces.push([a, a + 1, b]);
            faces.push([b, a + 1, b + 1]);
            side_walls += 1;
        }
    }

    tracing::debug!(
        start = range.start,
        triangles = triangles.len(),
        side_walls,
        "extruded group"
    );

    Ok(GroupMesh {
        vertices,
        faces,
        side_walls,
    })
}
