//! # Affine Transform Applier
//!
//! Maps every contour point through a 2D affine transform, in place:
//!
//! ```text
//! x' = a·x + c·y + e
//! y' = b·x + d·y + f
//! ```
//!
//! Topology is untouched. Index ranges and boundary edges are built from
//! point order, not coordinates, so they stay valid.

use crate::geometry::ContourGroup;
use glam::DAffine2;

/// Builds the transform from its six coefficients `[a, b, c, d, e, f]`.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::ops::transform::from_coefficients;
/// use glam::DVec2;
///
/// let t = from_coefficients([2.0, 0.0, 0.0, 3.0, 10.0, 20.0]);
/// assert_eq!(t.transform_point2(DVec2::new(1.0, 1.0)), DVec2::new(12.0, 23.0));
/// ```
pub fn from_coefficients(coefficients: [f64; 6]) -> DAffine2 {
    DAffine2::from_cols_array(&coefficients)
}

/// Applies `transform` to every point of every group.
///
/// Returns the number of points moved; zero for the identity.
pub fn apply_transform(transform: &DAffine2, groups: &mut [ContourGroup]) -> usize {
    if *transform == DAffine2::IDENTITY {
        return 0;
    }

    let mut moved = 0;
    for group in groups.iter_mut() {
        for contour in group.contours_mut() {
            for point in &mut contour.points {
                *point = transform.transform_point2(*point);
            }
            moved += contour.len();
        }
    }
    moved
}
