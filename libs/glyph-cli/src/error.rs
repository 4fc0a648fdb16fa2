use config::constants::ConfigError;
use extrude_mesh::ExtrudeError;
use glyph_parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Extrude(#[from] ExtrudeError),

    #[error("cannot write report: {0}")]
    Report(#[from] serde_json::Error),
}
