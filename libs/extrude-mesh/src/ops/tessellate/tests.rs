use super::cdt::winding_number;
use super::*;
use crate::geometry::Contour;

fn square(x: f64, y: f64, size: f64) -> Contour {
    Contour::from_coords(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size]])
}

fn area(group: &ContourGroup, triangles: &[Triangle]) -> f64 {
    let points: Vec<DVec2> = group.points().collect();
    triangles
        .iter()
        .map(|&[a, b, c]| (points[b] - points[a]).perp_dot(points[c] - points[a]) / 2.0)
        .sum()
}

/// Square wound clockwise, the way glyph outlines draw holes.
fn hole(x: f64, y: f64, size: f64) -> Contour {
    let mut contour = square(x, y, size);
    contour.points.reverse();
    contour
}

fn run(group: &ContourGroup) -> Result<Vec<Triangle>> {
    tessellate_group(
        &CdtTessellator::default(),
        group,
        IndexRange::new(0, group.point_count()),
    )
}

/// Replays a canned outcome.
struct Scripted(TessOutcome);

impl Tessellator for Scripted {
    fn tessellate(&self, _input: &TessInput<'_>) -> TessOutcome {
        self.0.clone()
    }
}

// =============================================================================
// ADAPTER CONTRACT
// =============================================================================

#[test]
fn test_input_tags_follow_range() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 4.0), vec![square(1.0, 1.0, 1.0)]);
    let input = TessInput::from_group(&group, 10);

    assert_eq!(input.normal, DVec3::Z);
    assert_eq!(input.contours.len(), 2);
    assert_eq!(input.contours[0].first_index, 10);
    assert_eq!(input.contours[1].first_index, 14);
    assert_eq!(input.contours[1].tag(3), 17);
}

#[test]
fn test_triangle_batches_are_flattened() {
    let fake = Scripted(TessOutcome::Primitives(vec![
        PrimitiveBatch::triangles(vec![0, 1, 2]),
        PrimitiveBatch::triangles(vec![0, 2, 3]),
    ]));
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let triangles = tessellate_group(&fake, &group, IndexRange::new(0, 4)).unwrap();
    assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
}

#[test]
fn test_fan_is_rejected() {
    let fake = Scripted(TessOutcome::Primitives(vec![PrimitiveBatch {
        kind: PrimitiveKind::TriangleFan,
        vertices: vec![0, 1, 2, 3],
    }]));
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let err = tessellate_group(&fake, &group, IndexRange::new(0, 4)).unwrap_err();
    assert!(matches!(
        err,
        ExtrudeError::UnexpectedPrimitiveType {
            kind: PrimitiveKind::TriangleFan
        }
    ));
}

#[test]
fn test_partial_triangle_is_rejected() {
    let fake = Scripted(TessOutcome::Primitives(vec![PrimitiveBatch::triangles(vec![0, 1])]));
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let err = tessellate_group(&fake, &group, IndexRange::new(0, 4)).unwrap_err();
    assert!(matches!(err, ExtrudeError::MalformedPrimitive { len: 2 }));
}

#[test]
fn test_error_code_is_surfaced() {
    let fake = Scripted(TessOutcome::Error { code: 100_151 });
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let err = tessellate_group(&fake, &group, IndexRange::new(0, 4)).unwrap_err();
    assert!(matches!(err, ExtrudeError::TessellatorError { code: 100_151 }));
}

#[test]
fn test_intersection_is_surfaced() {
    let fake = Scripted(TessOutcome::UnsupportedIntersection {
        at: DVec2::new(0.5, 0.25),
    });
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let err = tessellate_group(&fake, &group, IndexRange::new(0, 4)).unwrap_err();
    match err {
        ExtrudeError::UnsupportedIntersection { x, y } => assert_eq!((x, y), (0.5, 0.25)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_winding_rules() {
    assert!(WindingRule::NonZero.is_inside(-2));
    assert!(!WindingRule::NonZero.is_inside(0));
    assert!(WindingRule::Odd.is_inside(-1));
    assert!(!WindingRule::Odd.is_inside(2));
    assert!(WindingRule::Positive.is_inside(1));
    assert!(!WindingRule::Positive.is_inside(-1));
}

#[test]
fn test_winding_number_follows_orientation() {
    let ccw = square(0.0, 0.0, 2.0).points;
    let cw: Vec<DVec2> = ccw.iter().rev().copied().collect();
    let inside = DVec2::new(1.0, 1.0);

    assert_eq!(winding_number(inside, &ccw), 1);
    assert_eq!(winding_number(inside, &cw), -1);
    assert_eq!(winding_number(DVec2::new(3.0, 1.0), &ccw), 0);
}

// =============================================================================
// CDT BACKEND
// =============================================================================

#[test]
fn test_square_gives_two_ccw_triangles() {
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let triangles = run(&group).unwrap();

    assert_eq!(triangles.len(), 2);
    approx::assert_relative_eq!(area(&group, &triangles), 1.0, epsilon = 1e-12);

    let points: Vec<DVec2> = group.points().collect();
    for &[a, b, c] in &triangles {
        assert!((points[b] - points[a]).perp_dot(points[c] - points[a]) > 0.0);
    }
}

#[test]
fn test_clockwise_input_is_still_filled() {
    let mut points = square(0.0, 0.0, 1.0).points;
    points.reverse();
    let group = ContourGroup::new(Contour::new(points));
    let triangles = run(&group).unwrap();

    assert_eq!(triangles.len(), 2);
    approx::assert_relative_eq!(area(&group, &triangles), 1.0, epsilon = 1e-12);
}

#[test]
fn test_concave_polygon_has_n_minus_two_triangles() {
    let arrow = Contour::from_coords(&[
        [0.0, 0.0],
        [4.0, 0.0],
        [4.0, 3.0],
        [2.0, 1.0],
        [0.0, 3.0],
    ]);
    let group = ContourGroup::new(arrow);
    let triangles = run(&group).unwrap();

    assert_eq!(triangles.len(), 3);
    approx::assert_relative_eq!(area(&group, &triangles), 8.0, epsilon = 1e-12);
}

#[test]
fn test_collinear_vertices_are_kept() {
    let strip = Contour::from_coords(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [2.0, 0.0],
        [3.0, 0.0],
        [3.0, 1.0],
        [0.0, 1.0],
    ]);
    let group = ContourGroup::new(strip);
    let triangles = run(&group).unwrap();

    assert_eq!(triangles.len(), 4);
    let used: std::collections::HashSet<_> = triangles.iter().flatten().copied().collect();
    assert_eq!(used.len(), 6);
}

#[test]
fn test_hole_is_left_empty() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 4.0), vec![hole(1.0, 1.0, 2.0)]);
    let triangles = run(&group).unwrap();

    assert_eq!(triangles.len(), 8);
    approx::assert_relative_eq!(area(&group, &triangles), 12.0, epsilon = 1e-12);
}

#[test]
fn test_hole_with_same_orientation_is_left_empty() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 4.0), vec![square(1.0, 1.0, 2.0)]);

    let triangles = run(&group).unwrap();
    assert_eq!(triangles.len(), 8);
    approx::assert_relative_eq!(area(&group, &triangles), 12.0, epsilon = 1e-12);

    // Nonzero fills a same-direction inner square.
    let nonzero = CdtTessellator::new(WindingRule::NonZero);
    let filled = tessellate_group(&nonzero, &group, IndexRange::new(0, 8)).unwrap();
    approx::assert_relative_eq!(area(&group, &filled), 16.0, epsilon = 1e-12);
}

#[test]
fn test_default_rule_is_odd() {
    assert_eq!(WindingRule::default(), WindingRule::Odd);
}

#[test]
fn test_tags_come_from_the_group_range() {
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let triangles =
        tessellate_group(&CdtTessellator::default(), &group, IndexRange::new(40, 4)).unwrap();
    for index in triangles.iter().flatten() {
        assert!((40..44).contains(index));
    }
}

#[test]
fn test_crossing_contours_are_unsupported() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 2.0), vec![square(1.0, 1.0, 2.0)]);
    let err = run(&group).unwrap_err();
    assert!(matches!(err, ExtrudeError::UnsupportedIntersection { .. }));
}

#[test]
fn test_shared_vertex_is_unsupported() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 4.0), vec![square(0.0, 0.0, 1.0)]);
    let err = run(&group).unwrap_err();
    match err {
        ExtrudeError::UnsupportedIntersection { x, y } => assert_eq!((x, y), (0.0, 0.0)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nan_coordinate_reports_code() {
    let broken = Contour::from_coords(&[[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0]]);
    let err = run(&ContourGroup::new(broken)).unwrap_err();
    assert!(matches!(
        err,
        ExtrudeError::TessellatorError {
            code: CODE_NAN_COORDINATE
        }
    ));
}

#[test]
fn test_tilted_normal_reports_code() {
    let group = ContourGroup::new(square(0.0, 0.0, 1.0));
    let mut input = TessInput::from_group(&group, 0);
    input.normal = DVec3::X;
    assert_eq!(
        CdtTessellator::default().tessellate(&input),
        TessOutcome::Error {
            code: CODE_UNSUPPORTED_NORMAL
        }
    );
}
