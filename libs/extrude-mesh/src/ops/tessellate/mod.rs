//! # Polygon Tessellator Adapter
//!
//! A synchronous interface to a constrained triangulator. The caller hands
//! over one contour group with every vertex tagged by its global
//! [`VertexIndex`]; the triangulator answers with one [`TessOutcome`]:
//!
//! - `Primitives`: batches of vertex tags, which must be independent
//!   triangles wound counter-clockwise,
//! - `UnsupportedIntersection`: a new vertex would be needed where two
//!   contours touch or cross,
//! - `Error`: an internal failure with a numeric code.
//!
//! [`tessellate_group`] turns that outcome into a flat triangle list or an
//! [`ExtrudeError`]. Any primitive type other than plain triangles is a
//! contract violation.

mod cdt;

pub use cdt::{
    CdtTessellator, CODE_COORDINATE_TOO_LARGE, CODE_COORDINATE_TOO_SMALL, CODE_INSERTION_FAILED,
    CODE_NAN_COORDINATE, CODE_UNSUPPORTED_NORMAL,
};

use crate::error::{ExtrudeError, Result};
use crate::geometry::{ContourGroup, IndexRange, Triangle, VertexIndex};
use glam::{DVec2, DVec3};
use std::fmt;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Decides which regions of a contour group are filled, from the winding
/// number of a point with respect to all contours of the group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindingRule {
    /// Filled where the winding number is not zero.
    NonZero,
    /// Filled where the winding number is odd (even-odd rule). Holes stay
    /// empty whichever way they are wound.
    #[default]
    Odd,
    /// Filled where the winding number is greater than zero.
    Positive,
}

impl WindingRule {
    /// Returns true if a point with this winding number is inside.
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            Self::NonZero => winding != 0,
            Self::Odd => winding % 2 != 0,
            Self::Positive => winding > 0,
        }
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// One contour with the global index of its first point.
#[derive(Debug, Clone, Copy)]
pub struct TaggedContour<'a> {
    pub points: &'a [DVec2],
    pub first_index: VertexIndex,
}

impl TaggedContour<'_> {
    /// Global index of the point at `offset`.
    #[inline]
    pub fn tag(&self, offset: usize) -> VertexIndex {
        self.first_index + offset
    }
}

/// Everything a tessellator receives for one contour group.
#[derive(Debug, Clone)]
pub struct TessInput<'a> {
    pub contours: Vec<TaggedContour<'a>>,
    /// Extrusion normal; always +Z for this pipeline.
    pub normal: DVec3,
}

impl<'a> TessInput<'a> {
    /// Tags the points of `group` consecutively from `first_index`.
    pub fn from_group(group: &'a ContourGroup, first_index: VertexIndex) -> Self {
        let mut next = first_index;
        let contours = group
            .contours()
            .iter()
            .map(|contour| {
                let tagged = TaggedContour {
                    points: &contour.points,
                    first_index: next,
                };
                next += contour.len();
                tagged
            })
            .collect();

        Self {
            contours,
            normal: DVec3::Z,
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Primitive layout of a vertex batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Triangles,
    TriangleFan,
    TriangleStrip,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triangles => "triangles",
            Self::TriangleFan => "triangle fan",
            Self::TriangleStrip => "triangle strip",
        };
        f.write_str(name)
    }
}

/// A run of vertex tags in one primitive layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveBatch {
    pub kind: PrimitiveKind,
    pub vertices: Vec<VertexIndex>,
}

impl PrimitiveBatch {
    pub fn triangles(vertices: Vec<VertexIndex>) -> Self {
        Self {
            kind: PrimitiveKind::Triangles,
            vertices,
        }
    }
}

/// Result of one tessellation call.
#[derive(Debug, Clone, PartialEq)]
pub enum TessOutcome {
    Primitives(Vec<PrimitiveBatch>),
    UnsupportedIntersection { at: DVec2 },
    Error { code: u32 },
}

/// A constrained triangulator for one contour group at a time.
pub trait Tessellator {
    fn tessellate(&self, input: &TessInput<'_>) -> TessOutcome;
}

// =============================================================================
// ADAPTER
// =============================================================================

/// Triangulates one group whose points occupy `range`.
///
/// # Errors
///
/// - `UnsupportedIntersection` / `TessellatorError` straight from the outcome
/// - `UnexpectedPrimitiveType` for fans and strips
/// - `MalformedPrimitive` for a batch that is not a whole number of triangles
///
/// # Example
///
/// ```rust
/// use extrude_mesh::geometry::{Contour, ContourGroup, IndexRange};
/// use extrude_mesh::ops::tessellate::{tessellate_group, CdtTessellator};
///
/// let square = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
/// let group = ContourGroup::new(square);
/// let triangles =
///     tessellate_group(&CdtTessellator::default(), &group, IndexRange::new(0, 4)).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn tessellate_group<T>(
    tessellator: &T,
    group: &ContourGroup,
    range: IndexRange,
) -> Result<Vec<Triangle>>
where
    T: Tessellator + ?Sized,
{
    let input = TessInput::from_group(group, range.start);

    let batches = match tessellator.tessellate(&input) {
        TessOutcome::Primitives(batches) => batches,
        TessOutcome::UnsupportedIntersection { at } => {
            return Err(ExtrudeError::UnsupportedIntersection { x: at.x, y: at.y });
        }
        TessOutcome::Error { code } => return Err(ExtrudeError::TessellatorError { code }),
    };

    let mut triangles = Vec::new();
    for batch in batches {
        if batch.kind != PrimitiveKind::Triangles {
            return Err(ExtrudeError::UnexpectedPrimitiveType { kind: batch.kind });
        }
        if batch.vertices.len() % 3 != 0 {
            return Err(ExtrudeError::MalformedPrimitive {
                len: batch.vertices.len(),
            });
        }
        triangles.extend(batch.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]));
    }

    tracing::debug!(
        start = range.start,
        points = range.len(),
        triangles = triangles.len(),
        "tessellated group"
    );
    Ok(triangles)
}

#[cfg(test)]
mod tests;
