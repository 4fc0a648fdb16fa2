//! # Extrude Mesh
//!
//! Turns closed 2D contour groups into one watertight solid, extruded
//! between `z = 0` and `z = 1`.
//!
//! ## Architecture
//!
//! ```text
//! ContourGroup[] → sanitize → transform → allocate_indices
//!                → BoundaryEdgeSet + Tessellator → extrude_group → Mesh → OBJ
//! ```
//!
//! ## Modules
//!
//! - [`geometry`]: points, contours, groups, index types
//! - [`ops`]: the pipeline stages
//! - [`pipeline`]: the driver, options and report
//! - [`mesh`] / [`export`]: the output mesh and its OBJ text
//!
//! ## Usage
//!
//! ```rust
//! use extrude_mesh::geometry::{Contour, ContourGroup};
//! use extrude_mesh::{extrude, ExtrudeOptions};
//! use glam::DAffine2;
//!
//! let square = Contour::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
//! let result = extrude(&[ContourGroup::new(square)], &DAffine2::IDENTITY, &ExtrudeOptions::default())?;
//!
//! let obj = result.mesh.to_obj_string();
//! assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
//! # Ok::<(), extrude_mesh::ExtrudeError>(())
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod mesh;
pub mod ops;
pub mod pipeline;

pub use error::{ExtrudeError, Result};
pub use export::write_obj;
pub use geometry::{Contour, ContourGroup};
pub use mesh::Mesh;
pub use pipeline::{extrude, extrude_with, Extrusion, ExtrusionReport, ExtrudeOptions, GroupReport};
