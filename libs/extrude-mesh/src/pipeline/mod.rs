//! # Extrusion Pipeline
//!
//! Drives every contour group through the stages and assembles one mesh:
//!
//! ```text
//! groups → sanitize → transform → allocate ranges → per group:
//!          edge index → tessellate → extrude → merged Mesh + report
//! ```
//!
//! Index ranges are reserved for all groups before any group is
//! triangulated, so groups are independent and can run in parallel. Results
//! are merged in group order either way, and the first failing group (by
//! position) decides the error.

use crate::error::{ExtrudeError, Result};
use crate::geometry::{ContourGroup, IndexRange};
use crate::mesh::Mesh;
use crate::ops::edges::BoundaryEdgeSet;
use crate::ops::extrude::{extrude_group, GroupMesh};
use crate::ops::sanitize::Sanitizer;
use crate::ops::tessellate::{tessellate_group, CdtTessellator, Tessellator, WindingRule};
use crate::ops::transform::apply_transform;
use config::constants::{PipelineConfig, MAX_LOOP_INTERIOR_POINTS, POINT_EPSILON};
use glam::DAffine2;
use rayon::prelude::*;
use serde::Serialize;

// =============================================================================
// OPTIONS
// =============================================================================

/// Settings for one extrusion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeOptions {
    /// Point equality tolerance.
    pub epsilon: f64,
    /// Loop-size guard for the sanitizer.
    pub max_loop_interior: usize,
    /// Fill rule for the default tessellator.
    pub winding_rule: WindingRule,
    /// Process groups on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self {
            epsilon: POINT_EPSILON,
            max_loop_interior: MAX_LOOP_INTERIOR_POINTS,
            winding_rule: WindingRule::default(),
            parallel: false,
        }
    }
}

impl ExtrudeOptions {
    /// Takes tolerance and guard from a validated config.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            max_loop_interior: config.max_loop_interior,
            ..Self::default()
        }
    }

    pub fn with_winding_rule(mut self, winding_rule: WindingRule) -> Self {
        self.winding_rule = winding_rule;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn sanitizer(&self) -> Sanitizer {
        Sanitizer::new(self.epsilon, self.max_loop_interior)
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Diagnostics for one contour group. Has no effect on the mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    /// Degenerate loops removed by the sanitizer.
    pub loops_removed: usize,
    /// Contours dropped for having fewer than three points.
    pub contours_dropped: usize,
    /// Points left after sanitizing.
    pub points: usize,
    /// Triangles from the tessellator.
    pub triangles: usize,
    /// Side wall quads.
    pub side_walls: usize,
}

/// Diagnostics for a whole run, one entry per input group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtrusionReport {
    pub groups: Vec<GroupReport>,
}

impl ExtrusionReport {
    pub fn loops_removed(&self) -> usize {
        self.groups.iter().map(|g| g.loops_removed).sum()
    }

    pub fn triangles(&self) -> usize {
        self.groups.iter().map(|g| g.triangles).sum()
    }

    pub fn side_walls(&self) -> usize {
        self.groups.iter().map(|g| g.side_walls).sum()
    }
}

/// The finished mesh together with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrusion {
    pub mesh: Mesh,
    pub report: ExtrusionReport,
}

// =============================================================================
// STAGES
// =============================================================================

/// Reserves a contiguous index range per group, in traversal order.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::geometry::{Contour, ContourGroup, IndexRange};
/// use extrude_mesh::pipeline::allocate_indices;
///
/// let tri = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
/// let groups = vec![ContourGroup::new(tri.clone()), ContourGroup::new(tri)];
/// assert_eq!(
///     allocate_indices(&groups),
///     vec![IndexRange::new(0, 3), IndexRange::new(3, 3)]
/// );
/// ```
pub fn allocate_indices(groups: &[ContourGroup]) -> Vec<IndexRange> {
    let mut next = 0;
    groups
        .iter()
        .map(|group| {
            let range = IndexRange::new(next, group.point_count());
            next = range.end;
            range
        })
        .collect()
}

/// Sanitizes every contour of a group and drops the ones left degenerate.
pub fn sanitize_group(
    sanitizer: &Sanitizer,
    group: &ContourGroup,
) -> Result<(ContourGroup, GroupReport)> {
    let mut report = GroupReport::default();
    let mut contours = Vec::with_capacity(group.contours().len());
    for contour in group.contours() {
        let clean = sanitizer.sanitize(contour)?;
        report.loops_removed += clean.loops_removed;
        contours.push(clean.contour);
    }

    let mut clean = ContourGroup::from_contours(contours);
    report.contours_dropped = clean.drop_degenerate();
    if report.contours_dropped > 0 {
        tracing::warn!(
            dropped = report.contours_dropped,
            "dropped contours with fewer than three points"
        );
    }
    report.points = clean.point_count();
    Ok((clean, report))
}

fn build_group<T>(tessellator: &T, group: &ContourGroup, range: IndexRange) -> Result<GroupMesh>
where
    T: Tessellator + ?Sized,
{
    if group.is_empty() {
        return Ok(GroupMesh::default());
    }
    let edges = BoundaryEdgeSet::build(group, range.start);
    let triangles = tessellate_group(tessellator, group, range)?;
    extrude_group(group, range, &triangles, &edges)
}

// =============================================================================
// DRIVER
// =============================================================================

/// Extrudes `groups` with the constrained Delaunay tessellator.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::geometry::{Contour, ContourGroup};
/// use extrude_mesh::pipeline::{extrude, ExtrudeOptions};
/// use glam::DAffine2;
///
/// let square = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
/// let result = extrude(&[ContourGroup::new(square)], &DAffine2::IDENTITY, &ExtrudeOptions::default())
///     .unwrap();
/// assert_eq!(result.mesh.vertex_count(), 8);
/// assert_eq!(result.mesh.triangle_count(), 12);
/// ```
pub fn extrude(
    groups: &[ContourGroup],
    transform: &DAffine2,
    options: &ExtrudeOptions,
) -> Result<Extrusion> {
    extrude_with(
        &CdtTessellator::new(options.winding_rule),
        groups,
        transform,
        options,
    )
}

/// Extrudes `groups` with a caller-supplied tessellator.
///
/// # Errors
///
/// Any stage error, wrapped in `InGroup` with the failing group's position,
/// or `TooManyVertices` when the doubled vertex count does not fit in `u32`.
pub fn extrude_with<T>(
    tessellator: &T,
    groups: &[ContourGroup],
    transform: &DAffine2,
    options: &ExtrudeOptions,
) -> Result<Extrusion>
where
    T: Tessellator + Sync + ?Sized,
{
    let sanitizer = options.sanitizer();

    let mut cleaned = Vec::with_capacity(groups.len());
    let mut reports = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let (group, report) = sanitize_group(&sanitizer, group).map_err(|e| e.in_group(i))?;
        cleaned.push(group);
        reports.push(report);
    }

    apply_transform(transform, &mut cleaned);

    let ranges = allocate_indices(&cleaned);
    let vertex_count = ranges.last().map_or(0, |r| r.end) * 2;
    if vertex_count > u32::MAX as usize {
        return Err(ExtrudeError::TooManyVertices {
            count: vertex_count,
            max: u32::MAX as usize,
        });
    }

    let built: Vec<Result<GroupMesh>> = if options.parallel {
        cleaned
            .par_iter()
            .zip(&ranges)
            .enumerate()
            .map(|(i, (group, &range))| build_group(tessellator, group, range).map_err(|e| e.in_group(i)))
            .collect()
    } else {
        cleaned
            .iter()
            .zip(&ranges)
            .enumerate()
            .map(|(i, (group, &range))| build_group(tessellator, group, range).map_err(|e| e.in_group(i)))
            .collect()
    };
    let built = built.into_iter().collect::<Result<Vec<_>>>()?;

    let face_count = built.iter().map(|g| g.faces.len()).sum();
    let mut mesh = Mesh::with_capacity(vertex_count, face_count);
    for (group_mesh, report) in built.iter().zip(reports.iter_mut()) {
        for &v in &group_mesh.vertices {
            mesh.add_vertex(v);
        }
        for &[a, b, c] in &group_mesh.faces {
            mesh.add_triangle(a as u32, b as u32, c as u32);
        }
        report.triangles = group_mesh.cap_faces() / 2;
        report.side_walls = group_mesh.side_walls;
    }

    let report = ExtrusionReport { groups: reports };
    tracing::info!(
        groups = groups.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.triangle_count(),
        loops_removed = report.loops_removed(),
        "extrusion complete"
    );

    Ok(Extrusion { mesh, report })
}
