//! End-to-end extrusion tests: contour groups in, OBJ text and mesh
//! invariants out.

use approx::assert_relative_eq;
use extrude_mesh::geometry::{Contour, ContourGroup, IndexRange};
use extrude_mesh::ops::edges::BoundaryEdgeSet;
use extrude_mesh::ops::tessellate::{tessellate_group, CdtTessellator, WindingRule};
use extrude_mesh::{extrude, ExtrudeError, ExtrudeOptions};
use glam::{DAffine2, DVec2};
use std::collections::HashMap;

fn square(x: f64, y: f64, size: f64) -> Contour {
    Contour::from_coords(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size]])
}

fn reversed(mut contour: Contour) -> Contour {
    contour.points.reverse();
    contour
}

fn square_with_hole() -> ContourGroup {
    ContourGroup::with_holes(square(0.0, 0.0, 3.0), vec![reversed(square(1.0, 1.0, 1.0))])
}

fn star(cx: f64, cy: f64, points: usize) -> Contour {
    let n = points * 2;
    Contour::new(
        (0..n)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / n as f64;
                let r = if i % 2 == 0 { 2.0 } else { 0.8 };
                DVec2::new(cx + r * angle.cos(), cy + r * angle.sin())
            })
            .collect(),
    )
}

fn comb() -> Contour {
    Contour::from_coords(&[
        [0.0, 0.0],
        [7.0, 0.0],
        [7.0, 3.0],
        [6.0, 3.0],
        [6.0, 1.0],
        [5.0, 1.0],
        [5.0, 3.0],
        [4.0, 3.0],
        [4.0, 1.0],
        [3.0, 1.0],
        [3.0, 3.0],
        [2.0, 3.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 3.0],
        [0.0, 3.0],
    ])
}

fn shoelace(contour: &Contour) -> f64 {
    let p = &contour.points;
    (0..p.len())
        .map(|i| p[i].perp_dot(p[(i + 1) % p.len()]))
        .sum::<f64>()
        / 2.0
}

fn run(groups: &[ContourGroup]) -> extrude_mesh::Extrusion {
    extrude(groups, &DAffine2::IDENTITY, &ExtrudeOptions::default()).unwrap()
}

// =============================================================================
// OUTPUT FORMAT
// =============================================================================

#[test]
fn test_square_obj() {
    let result = run(&[ContourGroup::new(square(0.0, 0.0, 1.0))]);
    let obj = result.mesh.to_obj_string();
    let lines: Vec<&str> = obj.lines().collect();

    let vertices: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("v ")).collect();
    let faces: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(vertices.len(), 8);
    assert_eq!(faces.len(), 12);
    assert_eq!(lines.len(), 20);

    assert_eq!(
        vertices,
        vec![
            "v 0 0 0", "v 0 0 1", "v 1 0 0", "v 1 0 1", "v 1 1 0", "v 1 1 1", "v 0 1 0", "v 0 1 1",
        ]
    );
    for face in faces {
        for index in face[2..].split(' ') {
            let index: usize = index.parse().unwrap();
            assert!((1..=8).contains(&index));
        }
    }
}

#[test]
fn test_closed_input_matches_open_input() {
    let open = run(&[ContourGroup::new(square(0.0, 0.0, 1.0))]);
    let closed = run(&[ContourGroup::new(Contour::from_coords(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [0.0, 0.0],
    ]))]);
    assert_eq!(open.mesh.to_obj_string(), closed.mesh.to_obj_string());
}

// =============================================================================
// MESH PROPERTIES
// =============================================================================

#[test]
fn test_hole_walls_both_boundaries() {
    let result = run(&[square_with_hole()]);
    let report = result.report.groups[0];

    assert_eq!(report.side_walls, 8);
    assert_eq!(report.triangles, 8);
    assert_eq!(result.mesh.triangle_count(), 8 * 2 + 8 * 2);
    assert!(result.mesh.is_closed());
    assert_relative_eq!(result.mesh.signed_volume(), 8.0, epsilon = 1e-9);
}

#[test]
fn test_simple_polygon_has_n_minus_two_triangles() {
    for contour in [square(0.0, 0.0, 2.0), star(0.0, 0.0, 5), comb(), reversed(comb())] {
        let n = contour.len();
        let result = run(&[ContourGroup::new(contour)]);
        assert_eq!(result.report.triangles(), n - 2);
    }
}

#[test]
fn test_vertex_doubling() {
    let groups = vec![
        ContourGroup::new(star(0.0, 0.0, 6)),
        square_with_hole(),
        ContourGroup::new(comb()),
    ];
    let points: usize = groups.iter().map(ContourGroup::point_count).sum();
    let result = run(&groups);
    assert_eq!(result.mesh.vertex_count(), 2 * points);
}

#[test]
fn test_boundary_and_interior_edges_are_partitioned() {
    let group = ContourGroup::with_holes(comb(), vec![]);
    let range = IndexRange::new(0, group.point_count());
    let edges = BoundaryEdgeSet::build(&group, range.start);
    let triangles = tessellate_group(&CdtTessellator::default(), &group, range).unwrap();

    for contour_edge in group.contours()[0].edge_offsets() {
        assert!(edges.contains(contour_edge.0, contour_edge.1));
        assert!(edges.contains(contour_edge.1, contour_edge.0));
    }

    let mut uses: HashMap<(usize, usize), usize> = HashMap::new();
    for &[a, b, c] in &triangles {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            *uses.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }
    }
    for (&(u, v), &count) in &uses {
        if count == 2 {
            assert!(!edges.contains(u, v), "interior edge {u}-{v} marked as boundary");
        } else {
            assert_eq!(count, 1);
            assert!(edges.contains(u, v));
        }
    }
}

#[test]
fn test_wall_faces_match_boundary_edges() {
    let groups = vec![square_with_hole(), ContourGroup::new(star(10.0, 0.0, 4))];
    let directed: usize = groups
        .iter()
        .map(|g| BoundaryEdgeSet::build(g, 0).len())
        .sum();
    let result = run(&groups);
    assert_eq!(result.report.side_walls() * 2, directed);
}

#[test]
fn test_every_mesh_is_closed_with_positive_volume() {
    let cases = vec![
        vec![ContourGroup::new(square(0.0, 0.0, 1.0))],
        vec![ContourGroup::new(reversed(square(0.0, 0.0, 1.0)))],
        vec![square_with_hole()],
        vec![ContourGroup::new(star(0.0, 0.0, 7)), ContourGroup::new(comb())],
    ];

    for groups in cases {
        let expected: f64 = groups
            .iter()
            .map(|g| {
                let outer = shoelace(&g.contours()[0]).abs();
                let holes: f64 = g.holes().iter().map(|h| shoelace(h).abs()).sum();
                outer - holes
            })
            .sum();
        let mesh = run(&groups).mesh;
        assert!(mesh.validate());
        assert!(mesh.is_closed());
        assert_relative_eq!(mesh.signed_volume(), expected, epsilon = 1e-9);
    }
}

#[test]
fn test_transform_is_applied() {
    let groups = vec![ContourGroup::new(square(0.0, 0.0, 1.0))];
    let scale = DAffine2::from_scale(DVec2::new(2.0, 3.0));
    let result = extrude(&groups, &scale, &ExtrudeOptions::default()).unwrap();
    assert_relative_eq!(result.mesh.signed_volume(), 6.0, epsilon = 1e-12);
}

#[test]
fn test_mirroring_transform_keeps_normals_outward() {
    let groups = vec![square_with_hole()];
    let mirror = DAffine2::from_cols_array(&[1.0, 0.0, 0.0, -1.0, 0.0, 0.0]);
    let mesh = extrude(&groups, &mirror, &ExtrudeOptions::default()).unwrap().mesh;
    assert!(mesh.is_closed());
    assert!(mesh.signed_volume() > 0.0);
}

#[test]
fn test_parallel_output_matches_sequential() {
    let groups: Vec<_> = (0..24)
        .map(|i| {
            let x = (i % 6) as f64 * 6.0;
            let y = (i / 6) as f64 * 6.0;
            if i % 3 == 0 {
                ContourGroup::with_holes(square(x, y, 3.0), vec![reversed(square(x + 1.0, y + 1.0, 1.0))])
            } else {
                ContourGroup::new(star(x, y, 3 + i % 5))
            }
        })
        .collect();

    let sequential = run(&groups);
    let parallel = extrude(
        &groups,
        &DAffine2::IDENTITY,
        &ExtrudeOptions::default().with_parallel(true),
    )
    .unwrap();

    assert_eq!(sequential.mesh.to_obj_string(), parallel.mesh.to_obj_string());
    assert_eq!(sequential.report, parallel.report);
}

// =============================================================================
// REJECTED INPUT
// =============================================================================

#[test]
fn test_crossing_contours_are_rejected() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 2.0), vec![square(1.0, 1.0, 2.0)]);
    let err = extrude(&[group], &DAffine2::IDENTITY, &ExtrudeOptions::default()).unwrap_err();
    assert!(matches!(err.root(), ExtrudeError::UnsupportedIntersection { .. }));
}

#[test]
fn test_bow_tie_is_rejected() {
    let bow_tie = Contour::from_coords(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
    let err = extrude(
        &[ContourGroup::new(bow_tie)],
        &DAffine2::IDENTITY,
        &ExtrudeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err.root(), ExtrudeError::UnsupportedIntersection { .. }));
}

#[test]
fn test_same_direction_hole_with_default_options() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 3.0), vec![square(1.0, 1.0, 1.0)]);
    let result = run(&[group]);
    let report = result.report.groups[0];

    assert_eq!(report.side_walls, 8);
    assert_eq!(report.triangles, 8);
    assert!(result.mesh.is_closed());
    assert_relative_eq!(result.mesh.signed_volume(), 8.0, epsilon = 1e-9);
}

#[test]
fn test_nonzero_rule_fills_same_direction_hole() {
    let group = ContourGroup::with_holes(square(0.0, 0.0, 3.0), vec![square(1.0, 1.0, 1.0)]);
    let options = ExtrudeOptions::default().with_winding_rule(WindingRule::NonZero);
    let result = extrude(&[group], &DAffine2::IDENTITY, &options).unwrap();
    // Inner edges get a wall from the filled hole as well as from the ring.
    assert_eq!(result.report.groups[0].side_walls, 12);
    assert!(!result.mesh.is_closed());
}

#[test]
fn test_collapsed_loop_example_emits_no_vertices() {
    let contour = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0], [2.0, 2.0]]);
    let result = run(&[ContourGroup::new(contour)]);
    let report = result.report.groups[0];

    // [(0,0),(2,2)] is left after the loop collapse and cannot bound an area.
    assert_eq!(report.loops_removed, 1);
    assert_eq!(report.contours_dropped, 1);
    assert_eq!(report.points, 0);
    assert_eq!(result.mesh.vertex_count(), 2 * report.points);
    assert!(result.mesh.is_empty());
}
