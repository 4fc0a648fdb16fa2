//! # Pipeline Stages
//!
//! One module per stage, in the order a contour group passes through them:
//! sanitize, transform, index edges, tessellate, extrude.

pub mod edges;
pub mod extrude;
pub mod sanitize;
pub mod tessellate;
pub mod transform;

pub use edges::BoundaryEdgeSet;
pub use extrude::{extrude_group, GroupMesh};
pub use sanitize::{sanitize, Sanitized, Sanitizer};
pub use tessellate::{tessellate_group, CdtTessellator, Tessellator, WindingRule};
pub use transform::apply_transform;
