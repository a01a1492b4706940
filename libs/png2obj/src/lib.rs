//! # png2obj
//!
//! Converts a level image into an extruded wall mesh:
//!
//! ```text
//! PNG → walkable matrix → wallmesh pipeline → .obj (atomic write)
//! ```

pub mod cli;
pub mod output;
pub mod raster;

pub use cli::Cli;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

/// Runs one conversion and returns the destination and bytes written.
pub fn run(cli: &Cli) -> Result<(PathBuf, usize)> {
    let settings = cli.pipeline_settings()?;

    let started = Instant::now();
    let grid = raster::load_grid(&cli.src)?;
    log::info!("decoded in {:.2?}", started.elapsed());

    let built = wallmesh::build_wall_mesh(&grid, &settings)
        .with_context(|| format!("cannot build a mesh from {}", cli.src.display()))?;

    let dst = cli.destination();
    let started = Instant::now();
    let written = output::write_atomic(&built.exported, &dst)?;
    log::info!("wrote {} in {:.2?}", dst.display(), started.elapsed());
    Ok((dst, written))
}
