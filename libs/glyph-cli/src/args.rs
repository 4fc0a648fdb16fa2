use clap::{Parser, ValueEnum};
use config::constants::{PipelineConfig, DEFAULT_FLATTEN_TOLERANCE};
use extrude_mesh::ops::tessellate::WindingRule;
use extrude_mesh::ExtrudeOptions;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Extrude glyph outlines into a closed mesh between z=0 and z=1
#[derive(Parser, Debug, Clone)]
#[command(name = "glyph-extrude", version)]
pub struct Args {
    /// Glyph document: one `transform` line and one `glyph <path-data>` line per glyph
    pub input: PathBuf,

    /// Path of the OBJ output, defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Curve flattening tolerance in input units
    #[arg(short, long, default_value_t = DEFAULT_FLATTEN_TOLERANCE)]
    pub tolerance: f64,

    /// Fill rule deciding which regions of a glyph are solid
    #[arg(long, value_enum, default_value_t = Winding::Odd)]
    pub winding: Winding,

    /// Process glyphs on all available threads
    #[clap(long, action)]
    pub parallel: bool,

    /// Write a JSON report of removed loops, triangles and walls per glyph
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Log per-glyph details
    #[clap(short, long, action)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    #[value(name = "nonzero")]
    NonZero,
    Odd,
    Positive,
}

impl From<Winding> for WindingRule {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::NonZero => WindingRule::NonZero,
            Winding::Odd => WindingRule::Odd,
            Winding::Positive => WindingRule::Positive,
        }
    }
}

impl Args {
    pub fn options(&self, config: &PipelineConfig) -> ExtrudeOptions {
        ExtrudeOptions::from_config(config)
            .with_winding_rule(self.winding.into())
            .with_parallel(self.parallel)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "glyph_extrude=debug,extrude_mesh=debug,glyph_parser=debug"
        } else {
            "glyph_extrude=info,extrude_mesh=info"
        }
    }

    /// Filter from `RUST_LOG` when it holds any directive, else from
    /// `log_filter`. Errors stay enabled for targets no directive names.
    pub fn env_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let directives = rust_log
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(self.log_filter());
        EnvFilter::builder()
            .with_default_directive(LevelFilter::ERROR.into())
            .parse_lossy(directives)
    }
}
