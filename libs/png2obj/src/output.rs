//! Atomic mesh output.

use anyhow::{Context, Result};
use config::constants::OBJ_FILE_EXTENSION;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wallmesh::ExportedMesh;

/// `src` with its extension replaced by `.obj`.
pub fn default_destination(src: &Path) -> PathBuf {
    src.with_extension(OBJ_FILE_EXTENSION)
}

/// Writes `mesh` to `dst` through a temporary file in the same directory.
///
/// The destination is only replaced once the whole file has been written,
/// so a failed run leaves any previous file untouched. Returns the number
/// of bytes written.
pub fn write_atomic(mesh: &ExportedMesh, dst: &Path) -> Result<usize> {
    let dir = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".png2obj-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("cannot create temporary file in {}", dir.display()))?;

    let mut writer = BufWriter::new(tmp.as_file());
    let written = mesh
        .write_obj(&mut writer)
        .with_context(|| format!("cannot write mesh for {}", dst.display()))?;
    writer.flush().context("cannot flush mesh")?;
    drop(writer);

    tmp.persist(dst)
        .with_context(|| format!("cannot move mesh into {}", dst.display()))?;
    Ok(written)
}
