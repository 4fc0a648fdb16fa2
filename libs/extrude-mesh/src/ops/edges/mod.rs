//! # Boundary Edge Index
//!
//! Every edge of the original contours, recorded in both directions, so the
//! mesh builder can tell a boundary edge (needs a side wall) from a diagonal
//! the triangulation introduced (needs nothing) in O(1).

use crate::geometry::{ContourGroup, EdgeKey, VertexIndex};
use std::collections::HashSet;

/// Set of directed boundary edges, symmetric by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryEdgeSet {
    edges: HashSet<EdgeKey>,
}

impl BoundaryEdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes all contour edges of `group`, wrap-around edges included.
    ///
    /// Points are numbered in traversal order starting at `first_index`,
    /// matching the group's reserved index range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use extrude_mesh::geometry::{Contour, ContourGroup};
    /// use extrude_mesh::ops::edges::BoundaryEdgeSet;
    ///
    /// let tri = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    /// let edges = BoundaryEdgeSet::build(&ContourGroup::new(tri), 10);
    /// assert!(edges.contains(12, 10));
    /// assert!(edges.contains(10, 12));
    /// assert_eq!(edges.undirected_len(), 3);
    /// ```
    pub fn build(group: &ContourGroup, first_index: VertexIndex) -> Self {
        let mut set = Self {
            edges: HashSet::with_capacity(group.point_count() * 2),
        };
        let mut base = first_index;
        for contour in group.contours() {
            for (a, b) in contour.edge_offsets() {
                set.insert(base + a, base + b);
            }
            base += contour.len();
        }
        set
    }

    /// Records the edge in both directions.
    pub fn insert(&mut self, u: VertexIndex, v: VertexIndex) {
        let key = EdgeKey::new(u, v);
        self.edges.insert(key);
        self.edges.insert(key.reversed());
    }

    /// Returns true if `u -> v` is a boundary edge.
    #[inline]
    pub fn contains(&self, u: VertexIndex, v: VertexIndex) -> bool {
        self.edges.contains(&EdgeKey::new(u, v))
    }

    /// Number of directed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct undirected edges.
    pub fn undirected_len(&self) -> usize {
        self.edges.iter().filter(|e| e.from <= e.to).count()
    }

    /// Iterates directed entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter()
    }
}
