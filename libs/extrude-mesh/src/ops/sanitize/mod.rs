//! # Contour Sanitizer
//!
//! Removes closing duplicates and degenerate vertex loops from a contour.
//!
//! ## Algorithm
//!
//! Scan every ordered pair `(k, j)` with `k < j`. When the two points are
//! equal within epsilon:
//!
//! - `k` first and `j` last: a closing duplicate, the last point is dropped.
//! - otherwise: the loop `k+1..=j` collapses onto point `k` and counts as a
//!   removed loop. A loop with more interior points than the guard allows is
//!   rejected.
//!
//! The scan restarts from the beginning after every removal, because a
//! removal can expose a new match, and stops once a full scan finds nothing.

use crate::error::{ExtrudeError, Result};
use crate::geometry::{points_equal, Contour};
use config::constants::{MAX_LOOP_INTERIOR_POINTS, POINT_EPSILON};

/// A sanitized contour and the number of true loops removed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    pub contour: Contour,
    pub loops_removed: usize,
}

/// Contour sanitizer with its tolerance and loop-size guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sanitizer {
    /// Point equality tolerance.
    pub epsilon: f64,
    /// Largest number of points strictly between two coincident points
    /// that may be collapsed.
    pub max_loop_interior: usize,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            epsilon: POINT_EPSILON,
            max_loop_interior: MAX_LOOP_INTERIOR_POINTS,
        }
    }
}

impl Sanitizer {
    pub fn new(epsilon: f64, max_loop_interior: usize) -> Self {
        Self {
            epsilon,
            max_loop_interior,
        }
    }

    /// Cleans one contour.
    ///
    /// # Errors
    ///
    /// `DegenerateLoopTooLarge` when a repeated vertex encloses more points
    /// than `max_loop_interior`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use extrude_mesh::geometry::Contour;
    /// use extrude_mesh::ops::sanitize::Sanitizer;
    ///
    /// let closed = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
    /// let clean = Sanitizer::default().sanitize(&closed).unwrap();
    /// assert_eq!(clean.contour.len(), 3);
    /// assert_eq!(clean.loops_removed, 0);
    /// ```
    pub fn sanitize(&self, contour: &Contour) -> Result<Sanitized> {
        let mut points = contour.points.clone();
        let mut loops_removed = 0;

        'scan: loop {
            let n = points.len();
            for k in 0..n {
                for j in (k + 1)..n {
                    if !points_equal(points[k], points[j], self.epsilon) {
                        continue;
                    }

                    if k == 0 && j == n - 1 {
                        points.pop();
                    } else {
                        let interior = j - k - 1;
                        if interior > self.max_loop_interior {
                            return Err(ExtrudeError::DegenerateLoopTooLarge {
                                start: k,
                                end: j,
                                interior,
                                max: self.max_loop_interior,
                            });
                        }
                        tracing::warn!(
                            start = k,
                            end = j,
                            x = points[k].x,
                            y = points[k].y,
                            "removed degenerate loop"
                        );
                        points.drain(k + 1..=j);
                        loops_removed += 1;
                    }
                    continue 'scan;
                }
            }
            break;
        }

        Ok(Sanitized {
            contour: Contour::new(points),
            loops_removed,
        })
    }
}

/// Cleans one contour with the default tolerance and guard.
pub fn sanitize(contour: &Contour) -> Result<Sanitized> {
    Sanitizer::default().sanitize(contour)
}
