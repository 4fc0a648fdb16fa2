//! # Glyph Documents
//!
//! A line-oriented description of one extrusion job:
//!
//! ```text
//! # comment
//! transform matrix(1 0 0 -1 0 1000)
//! glyph M0 0 H10 V10 H0 Z
//! glyph M20 0 H30 V10 H20 Z M22 2 V8 H28 V2 Z
//! ```
//!
//! Blank lines and `#` comments are ignored. `transform` must appear
//! exactly once; every `glyph` line is one contour group.

use crate::error::{ParseError, Result};
use crate::path::parse_path;
use crate::transform::parse_transform;
use extrude_mesh::geometry::ContourGroup;
use glam::DAffine2;

/// Contour groups and the transform to apply to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDocument {
    pub transform: DAffine2,
    pub groups: Vec<ContourGroup>,
}

/// Parses a glyph document, flattening curves at `tolerance`.
///
/// # Errors
///
/// - `TransformSpecViolation` unless there is exactly one `transform` line
/// - `AtLine` around any path, transform or directive error
///
/// # Example
///
/// ```rust
/// use glyph_parser::parse_document;
///
/// let doc = parse_document("transform scale(2)\nglyph M0 0 H1 V1 H0 Z\n", 0.1).unwrap();
/// assert_eq!(doc.groups.len(), 1);
/// ```
pub fn parse_document(text: &str, tolerance: f64) -> Result<GlyphDocument> {
    let mut transforms = Vec::new();
    let mut groups = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        let (directive, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match directive {
            "transform" => {
                transforms.push(parse_transform(rest).map_err(|e| e.at_line(number))?);
            }
            "glyph" => {
                groups.push(parse_path(rest, tolerance).map_err(|e| e.at_line(number))?);
            }
            other => {
                return Err(ParseError::UnknownDirective {
                    directive: other.to_string(),
                }
                .at_line(number));
            }
        }
    }

    let &[transform] = transforms.as_slice() else {
        return Err(ParseError::TransformSpecViolation {
            found: transforms.len(),
        });
    };

    tracing::debug!(groups = groups.len(), "parsed glyph document");
    Ok(GlyphDocument { transform, groups })
}
