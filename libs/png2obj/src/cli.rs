//! Command-line surface.

use crate::output::default_destination;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use wallmesh::{AxisRemap, FaceStyle, PipelineSettings};

/// Creates a 3D level Wavefront OBJ from a PNG.
#[derive(Debug, Parser)]
#[command(name = "png2obj", version, about, long_about = None)]
pub struct Cli {
    /// Source image
    pub src: PathBuf,

    /// Destination mesh [default: SRC with an .obj extension]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Vertical extrusion amount
    #[arg(long)]
    pub height: Option<f64>,

    /// Output units per pixel
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Internal to output axis mapping, e.g. "+x,+z,+y"
    #[arg(long)]
    pub axes: Option<AxisRemap>,

    /// Write 0-based face indices
    #[arg(long)]
    pub zero_index: bool,

    /// Split wall quads into triangles
    #[arg(long)]
    pub triangles: bool,

    /// Skip the top cap
    #[arg(long)]
    pub no_caps: bool,

    /// TOML pipeline settings; flags override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `-v` flags. `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Where the mesh is written.
    pub fn destination(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_destination(&self.src))
    }

    /// Settings file (if any) with command-line overrides applied.
    pub fn pipeline_settings(&self) -> Result<PipelineSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => PipelineSettings::default(),
        };

        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        if let Some(axes) = self.axes {
            settings.export.axes = axes;
        }
        if self.zero_index {
            settings.export.one_based = false;
        }
        if self.triangles {
            settings.face_style = FaceStyle::Triangles;
        }
        if self.no_caps {
            settings.caps = false;
        }

        settings.validate().context("invalid pipeline settings")?;
        Ok(settings)
    }
}

fn load_settings(path: &Path) -> Result<PipelineSettings> {
    let text = std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))
}
