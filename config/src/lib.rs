//! # Config Crate
//!
//! Centralized configuration constants for the glyph extrusion pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! sanitizer, the tessellator adapter, the mesh builder and the command line
//! front end agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, POINT_EPSILON, TOP_Z, BOTTOM_Z};
//!
//! // Two coordinates closer than POINT_EPSILON are the same coordinate
//! assert!(approx_equal(1.0, 1.0 + POINT_EPSILON / 2.0, POINT_EPSILON));
//!
//! // The extrusion always spans the unit slab
//! assert_eq!(TOP_Z - BOTTOM_Z, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Every crate in the workspace can depend on it
//! - **Validated**: Runtime configuration goes through `PipelineConfig::new`

pub mod constants;
