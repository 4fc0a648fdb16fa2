//! Read, extrude, write.
//!
//! The OBJ text is built in memory and only written once the whole run has
//! succeeded, so a failed run never leaves a partial mesh behind.

use crate::args::Args;
use crate::error::CliError;
use config::constants::PipelineConfig;
use extrude_mesh::{extrude, Extrusion, ExtrudeOptions};
use glyph_parser::parse_document;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

pub fn run(args: &Args) -> Result<(), CliError> {
    let config = PipelineConfig::default().with_flatten_tolerance(args.tolerance)?;
    let text = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;

    let extrusion = render(&text, &config, &args.options(&config))?;
    let obj = extrusion.mesh.to_obj_string();

    match &args.output {
        Some(path) => fs::write(path, obj)?,
        None => io::stdout().lock().write_all(obj.as_bytes())?,
    }

    if let Some(path) = &args.report {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &extrusion.report)?;
        writer.flush()?;
    }

    tracing::info!(
        input = %args.input.display(),
        vertices = extrusion.mesh.vertex_count(),
        faces = extrusion.mesh.triangle_count(),
        "wrote mesh"
    );
    Ok(())
}

/// Parses a glyph document and extrudes it.
pub fn render(
    text: &str,
    config: &PipelineConfig,
    options: &ExtrudeOptions,
) -> Result<Extrusion, CliError> {
    let document = parse_document(text, config.flatten_tolerance)?;
    Ok(extrude(&document.groups, &document.transform, options)?)
}
