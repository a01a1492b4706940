//! Raster → walkable matrix.
//!
//! Indexed (palette) PNGs are walkable wherever the palette index is not 0.
//! Other images with an alpha channel are walkable where a pixel is fully
//! transparent or pure white; images without one where the pixel is pure
//! white. Everything else is a blocked cell.

use anyhow::{Context, Result};
use config::constants::WALKABLE_RGB;
use image::{DynamicImage, ImageFormat, Rgba};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wallmesh::OccupancyGrid;

/// Whether a decoded pixel is walkable.
pub fn is_walkable(pixel: Rgba<u8>, has_alpha: bool) -> bool {
    let [r, g, b, a] = pixel.0;
    let white = [r, g, b] == WALKABLE_RGB;
    if has_alpha {
        a == 0 || white
    } else {
        white
    }
}

/// Row-major walkable matrix of `image`.
pub fn walkable_rows(image: &DynamicImage) -> Vec<Vec<bool>> {
    let has_alpha = image.color().has_alpha();
    let rgba = image.to_rgba8();
    rgba.rows()
        .map(|row| row.map(|&pixel| is_walkable(pixel, has_alpha)).collect())
        .collect()
}

/// Palette indices of one packed scanline of `width` pixels.
fn unpack_indices(line: &[u8], bit_depth: u8, width: usize) -> impl Iterator<Item = u8> + '_ {
    let per_byte = usize::from(8 / bit_depth);
    let mask = ((1u16 << bit_depth) - 1) as u8;
    (0..width).map(move |x| {
        let shift = 8 - bit_depth * (x % per_byte + 1) as u8;
        (line[x / per_byte] >> shift) & mask
    })
}

/// Walkable matrix of an indexed PNG, read without palette expansion.
///
/// Returns `None` for PNGs of any other color type.
pub fn indexed_walkable_rows(path: &Path) -> Result<Option<Vec<Vec<bool>>>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("cannot decode {}", path.display()))?;
    if reader.info().color_type != png::ColorType::Indexed {
        return Ok(None);
    }

    let mut buffer = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buffer)
        .with_context(|| format!("cannot decode {}", path.display()))?;
    let width = frame.width as usize;
    let bit_depth = frame.bit_depth as u8;
    log::info!(
        "loaded {} ({}x{}, {}-bit indexed)",
        path.display(),
        frame.width,
        frame.height,
        bit_depth
    );

    let rows = buffer
        .chunks(frame.line_size)
        .take(frame.height as usize)
        .map(|line| unpack_indices(line, bit_depth, width).map(|index| index > 0).collect())
        .collect();
    Ok(Some(rows))
}

/// Decodes `path` into an occupancy grid.
pub fn load_grid(path: &Path) -> Result<OccupancyGrid> {
    let indexed = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Png) => indexed_walkable_rows(path)?,
        _ => None,
    };
    let rows = match indexed {
        Some(rows) => rows,
        None => {
            let image = image::open(path).with_context(|| format!("cannot decode {}", path.display()))?;
            log::info!(
                "loaded {} ({}x{}, {:?})",
                path.display(),
                image.width(),
                image.height(),
                image.color()
            );
            walkable_rows(&image)
        }
    };
    let grid = OccupancyGrid::from_walkable_rows(&rows)
        .with_context(|| format!("{} is not a usable level", path.display()))?;
    log::debug!("{} blocked cells", grid.blocked_count());
    Ok(grid)
}
