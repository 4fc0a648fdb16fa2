//! # Extrusion Errors
//!
//! Error types for the contour-to-solid pipeline. Every error is fatal for
//! the run: a structurally wrong mesh is never emitted.

use crate::ops::tessellate::PrimitiveKind;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExtrudeError>;

/// Errors that can occur while turning contours into a mesh.
#[derive(Debug, Error)]
pub enum ExtrudeError {
    /// A repeated vertex encloses more points than the sanitizer may collapse.
    ///
    /// Usually a real self-intersection rather than a removable loop.
    #[error(
        "degenerate loop too large: points {start} and {end} coincide with {interior} points between them (max {max})"
    )]
    DegenerateLoopTooLarge {
        start: usize,
        end: usize,
        interior: usize,
        max: usize,
    },

    /// The tessellator would need a new vertex at a computed intersection.
    #[error("unsupported intersection near ({x}, {y}): contours must not touch or cross")]
    UnsupportedIntersection { x: f64, y: f64 },

    /// The tessellator reported an internal error code.
    #[error("tessellator error code {code}")]
    TessellatorError { code: u32 },

    /// The tessellator produced something other than independent triangles.
    #[error("unexpected primitive type {kind}: only triangles are supported")]
    UnexpectedPrimitiveType { kind: PrimitiveKind },

    /// A triangle batch whose vertex count is not a multiple of three.
    #[error("malformed triangle batch with {len} vertices")]
    MalformedPrimitive { len: usize },

    /// A triangle references a vertex outside its group's index range.
    #[error("triangle references vertex {index} outside group range {start}..{end}")]
    IndexOutOfRange {
        index: usize,
        start: usize,
        end: usize,
    },

    /// Too many vertices for 32-bit mesh indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// An error raised while processing one contour group.
    #[error("glyph {group}: {source}")]
    InGroup {
        group: usize,
        #[source]
        source: Box<ExtrudeError>,
    },
}

impl ExtrudeError {
    /// Wraps the error with the index of the group being processed.
    pub fn in_group(self, group: usize) -> Self {
        match self {
            wrapped @ Self::InGroup { .. } => wrapped,
            other => Self::InGroup {
                group,
                source: Box::new(other),
            },
        }
    }

    /// Returns the underlying error, looking through group context.
    pub fn root(&self) -> &ExtrudeError {
        match self {
            Self::InGroup { source, .. } => source.root(),
            other => other,
        }
    }
}
