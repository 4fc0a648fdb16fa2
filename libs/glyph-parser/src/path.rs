//! # Path Data
//!
//! SVG path data to a [`ContourGroup`]. Curves and arcs are flattened into
//! line segments within the caller's tolerance. Every subpath becomes one
//! contour: the first is the outer contour, the rest are holes.
//!
//! An explicit segment back to the subpath start is kept as a duplicated
//! point; the sanitizer removes it.

use crate::error::{ParseError, Result};
use extrude_mesh::geometry::{Contour, ContourGroup};
use glam::DVec2;
use kurbo::{BezPath, PathEl, Point};

/// Parses path data and flattens it at `tolerance`.
///
/// ## Parameters
///
/// - `data`: SVG path data (`M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T`, `A`, `Z`)
/// - `tolerance`: largest allowed distance between a curve and its polyline
///
/// ## Example
///
/// ```rust
/// use glyph_parser::parse_path;
///
/// let group = parse_path("M0 0 H10 V10 H0 Z M2 2 V8 H8 V2 Z", 0.1).unwrap();
/// assert_eq!(group.contours().len(), 2);
/// assert_eq!(group.holes().len(), 1);
/// ```
pub fn parse_path(data: &str, tolerance: f64) -> Result<ContourGroup> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(ParseError::InvalidTolerance(tolerance));
    }

    let path = BezPath::from_svg(data).map_err(|err| ParseError::PathSyntax {
        message: err.to_string(),
    })?;

    let mut builder = ContourBuilder::default();
    kurbo::flatten(path.iter(), tolerance, |el| builder.push(el));
    let contours = builder.finish();

    tracing::trace!(contours = contours.len(), "parsed path");
    Ok(ContourGroup::from_contours(contours))
}

/// Collects flattened path elements into contours.
#[derive(Default)]
struct ContourBuilder {
    contours: Vec<Contour>,
    current: Vec<DVec2>,
    start: DVec2,
}

impl ContourBuilder {
    fn push(&mut self, el: PathEl) {
        match el {
            PathEl::MoveTo(p) => {
                self.close();
                self.start = to_dvec(p);
                self.current.push(self.start);
            }
            PathEl::LineTo(p) => {
                // Drawing on after `Z` continues from the subpath start.
                if self.current.is_empty() {
                    self.current.push(self.start);
                }
                self.current.push(to_dvec(p));
            }
            PathEl::ClosePath => self.close(),
            // Flattening only emits moves, lines and closes.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }

    fn close(&mut self) {
        if !self.current.is_empty() {
            self.contours.push(Contour::new(std::mem::take(&mut self.current)));
        }
    }

    fn finish(mut self) -> Vec<Contour> {
        self.close();
        self.contours
    }
}

#[inline]
fn to_dvec(p: Point) -> DVec2 {
    DVec2::new(p.x, p.y)
}
