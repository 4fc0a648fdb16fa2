//! # Geometry Primitives
//!
//! Points, contours, contour groups and the index types shared by every
//! stage of the pipeline.
//!
//! A contour is implicitly closed: the edge from the last point back to the
//! first exists but is never stored as a duplicated point. A contour group is
//! one outer contour plus zero or more holes, triangulated together. The
//! orientation of individual contours is never relied upon.

use config::constants::approx_equal;
use glam::DVec2;

/// Dense 0-based index of a point across all contour groups, in traversal
/// order (group, then contour, then point).
pub type VertexIndex = usize;

/// Returns true when both coordinate differences are at most `epsilon`.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::geometry::points_equal;
/// use glam::DVec2;
///
/// assert!(points_equal(DVec2::new(1.0, 2.0), DVec2::new(1.0, 2.0 + 1e-12), 1e-11));
/// assert!(!points_equal(DVec2::ZERO, DVec2::new(0.0, 1e-10), 1e-11));
/// ```
#[inline]
pub fn points_equal(a: DVec2, b: DVec2, epsilon: f64) -> bool {
    approx_equal(a.x, b.x, epsilon) && approx_equal(a.y, b.y, epsilon)
}

// =============================================================================
// CONTOUR
// =============================================================================

/// A closed 2D polyline stored without a duplicated closing point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    /// Vertices in path order.
    pub points: Vec<DVec2>,
}

impl Contour {
    /// Creates a contour from its points.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Creates a contour from `[x, y]` pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use extrude_mesh::geometry::Contour;
    ///
    /// let triangle = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    /// assert_eq!(triangle.len(), 3);
    /// ```
    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self {
            points: coords.iter().map(|&[x, y]| DVec2::new(x, y)).collect(),
        }
    }

    /// Returns the number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the contour has enough points to bound an area.
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    /// Iterates the closed edges as local point offsets, wrap-around included.
    pub fn edge_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, (i + 1) % n))
    }
}

// =============================================================================
// CONTOUR GROUP
// =============================================================================

/// The contours of one source path: the first is the outer contour, the
/// rest are holes. All of them go through one triangulation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourGroup {
    contours: Vec<Contour>,
}

impl ContourGroup {
    /// Creates a group with an outer contour and no holes.
    pub fn new(outer: Contour) -> Self {
        Self {
            contours: vec![outer],
        }
    }

    /// Creates a group with holes.
    pub fn with_holes(outer: Contour, holes: Vec<Contour>) -> Self {
        let mut contours = Vec::with_capacity(holes.len() + 1);
        contours.push(outer);
        contours.extend(holes);
        Self { contours }
    }

    /// Creates a group from contours in traversal order (outer first).
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Returns the outer contour, if any contour is left.
    pub fn outer(&self) -> Option<&Contour> {
        self.contours.first()
    }

    /// Returns the hole contours.
    pub fn holes(&self) -> &[Contour] {
        self.contours.get(1..).unwrap_or(&[])
    }

    /// Returns all contours in traversal order.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns all contours mutably, in traversal order.
    #[inline]
    pub fn contours_mut(&mut self) -> &mut [Contour] {
        &mut self.contours
    }

    /// Total number of points across all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Returns true if the group has no points at all.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Iterates every point in traversal order.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.contours.iter().flat_map(|c| c.points.iter().copied())
    }

    /// Removes contours that cannot bound an area and returns how many
    /// were removed. Order of the remaining contours is kept.
    pub fn drop_degenerate(&mut self) -> usize {
        let before = self.contours.len();
        self.contours.retain(Contour::is_polygon);
        before - self.contours.len()
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// A reserved, contiguous range of vertex indices `[start, end)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexRange {
    pub start: VertexIndex,
    pub end: VertexIndex,
}

impl IndexRange {
    /// Creates the range `[start, start + len)`.
    pub fn new(start: VertexIndex, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn contains(&self, index: VertexIndex) -> bool {
        index >= self.start && index < self.end
    }
}

/// A directed edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub from: VertexIndex,
    pub to: VertexIndex,
}

impl EdgeKey {
    pub fn new(from: VertexIndex, to: VertexIndex) -> Self {
        Self { from, to }
    }

    /// The same edge walked the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Three vertex indices in counter-clockwise order.
pub type Triangle = [VertexIndex; 3];
