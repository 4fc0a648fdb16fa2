//! # OBJ Export
//!
//! Line-oriented text output: one `v x y z` line per vertex, then one
//! `f i j k` line per triangle with 1-based indices. Nothing else is written.

use crate::mesh::Mesh;
use config::constants::OBJ_SIGNIFICANT_DIGITS;
use std::fmt;
use std::io::{self, Write};

/// Writes `mesh` as OBJ text.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::{export::write_obj, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
///
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "v 0 0 0\nv 1 0 0\nv 0 1 1\nf 1 2 3\n");
/// ```
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", ObjText(mesh))
}

/// OBJ text of a mesh, produced through `Display`.
struct ObjText<'a>(&'a Mesh);

impl fmt::Display for ObjText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0.vertices() {
            writeln!(
                f,
                "v {} {} {}",
                format_coordinate(v.x),
                format_coordinate(v.y),
                format_coordinate(v.z)
            )?;
        }
        for &[a, b, c] in self.0.triangles() {
            writeln!(f, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        Ok(())
    }
}

impl Mesh {
    /// Renders the mesh as OBJ text in memory.
    pub fn to_obj_string(&self) -> String {
        ObjText(self).to_string()
    }
}

/// Rounds to `OBJ_SIGNIFICANT_DIGITS` significant digits and prints the
/// shortest text that reads back as the rounded value.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.*e}", OBJ_SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    rounded.to_string()
}
