//! # Glyph Parser
//!
//! Text front end for the extruder: SVG path data, SVG transform lists and
//! the glyph document format that bundles them.
//!
//! ## Example
//!
//! ```rust
//! use glyph_parser::parse_document;
//!
//! let doc = parse_document("transform scale(1 -1)\nglyph M0 0 L10 0 L10 10 Z\n", 0.1)?;
//! assert_eq!(doc.groups[0].contours()[0].len(), 3);
//! # Ok::<(), glyph_parser::ParseError>(())
//! ```

pub mod document;
pub mod error;
pub mod path;
pub mod transform;

pub use document::{parse_document, GlyphDocument};
pub use error::{ParseError, Result};
pub use path::parse_path;
pub use transform::parse_transform;
