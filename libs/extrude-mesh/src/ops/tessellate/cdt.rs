//! Constrained Delaunay backend built on `spade`.
//!
//! Every contour vertex is inserted with its tag as vertex data and every
//! contour edge becomes a constraint. Faces are then filled by the winding
//! number of their centroid, so contour orientation never matters.

use super::{PrimitiveBatch, TessInput, TessOutcome, Tessellator, WindingRule};
use crate::geometry::VertexIndex;
use glam::{DVec2, DVec3};
use spade::handles::FixedVertexHandle;
use spade::{ConstrainedDelaunayTriangulation, HasPosition, InsertionError, Point2, Triangulation};

/// A coordinate was NaN.
pub const CODE_NAN_COORDINATE: u32 = 1;
/// A non-zero coordinate was too close to zero for the triangulation.
pub const CODE_COORDINATE_TOO_SMALL: u32 = 2;
/// A coordinate exceeded the triangulation's range.
pub const CODE_COORDINATE_TOO_LARGE: u32 = 3;
/// Insertion failed for another reason.
pub const CODE_INSERTION_FAILED: u32 = 4;
/// The extrusion normal was not +Z.
pub const CODE_UNSUPPORTED_NORMAL: u32 = 5;

#[derive(Debug, Clone, Copy)]
struct TaggedVertex {
    position: Point2<f64>,
    tag: VertexIndex,
}

impl HasPosition for TaggedVertex {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

type Cdt = ConstrainedDelaunayTriangulation<TaggedVertex>;

/// Tessellator backed by a constrained Delaunay triangulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdtTessellator {
    pub winding_rule: WindingRule,
}

impl CdtTessellator {
    pub fn new(winding_rule: WindingRule) -> Self {
        Self { winding_rule }
    }

    fn triangulate(&self, input: &TessInput<'_>) -> Result<Vec<VertexIndex>, TessOutcome> {
        let mut cdt = Cdt::new();

        let mut rings: Vec<Vec<FixedVertexHandle>> = Vec::with_capacity(input.contours.len());
        for contour in &input.contours {
            let mut ring = Vec::with_capacity(contour.points.len());
            for (offset, &p) in contour.points.iter().enumerate() {
                let before = cdt.num_vertices();
                let handle = cdt
                    .insert(TaggedVertex {
                        position: Point2::new(p.x, p.y),
                        tag: contour.tag(offset),
                    })
                    .map_err(|err| TessOutcome::Error {
                        code: insertion_error_code(err),
                    })?;
                // Same position as an earlier vertex: the two would have to merge.
                if cdt.num_vertices() == before {
                    return Err(TessOutcome::UnsupportedIntersection { at: p });
                }
                ring.push(handle);
            }
            rings.push(ring);
        }

        for (contour, ring) in input.contours.iter().zip(&rings) {
            let n = ring.len();
            for i in 0..n {
                let (from, to) = (ring[i], ring[(i + 1) % n]);
                if from == to || cdt.exists_constraint(from, to) {
                    continue;
                }
                let at = contour.points[i];
                if !cdt.can_add_constraint(from, to) {
                    return Err(TessOutcome::UnsupportedIntersection { at });
                }
                cdt.add_constraint(from, to);
                // A vertex lying on the segment splits it into several edges.
                if cdt.get_edge_from_neighbors(from, to).is_none() {
                    return Err(TessOutcome::UnsupportedIntersection { at });
                }
            }
        }

        let mut tags = Vec::with_capacity(cdt.num_inner_faces() * 3);
        for face in cdt.inner_faces() {
            let [a, b, c] = face.vertices();
            let (pa, pb, pc) = (to_dvec(a.position()), to_dvec(b.position()), to_dvec(c.position()));

            let centroid = (pa + pb + pc) / 3.0;
            let winding: i32 = input
                .contours
                .iter()
                .map(|contour| winding_number(centroid, contour.points))
                .sum();
            if !self.winding_rule.is_inside(winding) {
                continue;
            }

            let mut triangle = [a.data().tag, b.data().tag, c.data().tag];
            if orient(pa, pb, pc) < 0.0 {
                triangle.swap(1, 2);
            }
            tags.extend(triangle);
        }

        Ok(tags)
    }
}

impl Tessellator for CdtTessellator {
    fn tessellate(&self, input: &TessInput<'_>) -> TessOutcome {
        if input.normal != DVec3::Z {
            return TessOutcome::Error {
                code: CODE_UNSUPPORTED_NORMAL,
            };
        }
        match self.triangulate(input) {
            Ok(tags) => TessOutcome::Primitives(vec![PrimitiveBatch::triangles(tags)]),
            Err(outcome) => outcome,
        }
    }
}

#[allow(unreachable_patterns)]
fn insertion_error_code(err: InsertionError) -> u32 {
    match err {
        InsertionError::NAN => CODE_NAN_COORDINATE,
        InsertionError::TooSmall => CODE_COORDINATE_TOO_SMALL,
        InsertionError::TooLarge => CODE_COORDINATE_TOO_LARGE,
        _ => CODE_INSERTION_FAILED,
    }
}

#[inline]
fn to_dvec(p: Point2<f64>) -> DVec2 {
    DVec2::new(p.x, p.y)
}

/// Positive when `a`, `b`, `c` turn counter-clockwise.
#[inline]
fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    )
}

/// Winding number of `p` with respect to the closed ring `points`.
pub(super) fn winding_number(p: DVec2, points: &[DVec2]) -> i32 {
    let n = points.len();
    let mut winding = 0;
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        if a.y <= p.y {
            if b.y > p.y && orient(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && orient(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}
