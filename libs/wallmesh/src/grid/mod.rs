//! # Occupancy Grid
//!
//! Rectangular walkable/blocked matrix and the per-vertex neighborhood
//! queries the tracer is driven by.
//!
//! Cells outside the grid bounds are walkable: the grid is surrounded by
//! open exterior, so every blocked region has a closed boundary.

mod scan;


pub use scan::{LatticeScan, ScanOrder};

use crate::error::{WallMeshError, WallMeshResult};
use crate::lattice::LatticePoint;
use config::constants::{CELL_CENTER_OFFSET, MAX_LATTICE_VERTICES};
use glam::DVec2;

/// Blocked flags of the four cells sharing a lattice vertex, packed as a
/// 4-bit mask.
///
/// | bit | cell |
/// |---|---|
/// | `0b1000` | upper-left |
/// | `0b0100` | upper-right |
/// | `0b0010` | lower-left |
/// | `0b0001` | lower-right |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood(u8);

impl Neighborhood {
    /// Upper-left cell bit.
    pub const UPPER_LEFT: u8 = 0b1000;
    /// Upper-right cell bit.
    pub const UPPER_RIGHT: u8 = 0b0100;
    /// Lower-left cell bit.
    pub const LOWER_LEFT: u8 = 0b0010;
    /// Lower-right cell bit.
    pub const LOWER_RIGHT: u8 = 0b0001;

    /// Builds a neighborhood from the blocked flags of the four cells.
    pub fn from_cells(upper_left: bool, upper_right: bool, lower_left: bool, lower_right: bool) -> Self {
        let mut bits = 0;
        if upper_left {
            bits |= Self::UPPER_LEFT;
        }
        if upper_right {
            bits |= Self::UPPER_RIGHT;
        }
        if lower_left {
            bits |= Self::LOWER_LEFT;
        }
        if lower_right {
            bits |= Self::LOWER_RIGHT;
        }
        Self(bits)
    }

    /// Builds a neighborhood from a raw mask; bits above the low four are
    /// ignored.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Returns the raw 4-bit mask.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Blocked flags as a 2x2 matrix `[[upper_left, upper_right], [lower_left, lower_right]]`.
    pub fn matrix(self) -> [[bool; 2]; 2] {
        [
            [self.0 & Self::UPPER_LEFT != 0, self.0 & Self::UPPER_RIGHT != 0],
            [self.0 & Self::LOWER_LEFT != 0, self.0 & Self::LOWER_RIGHT != 0],
        ]
    }

    /// True unless all four cells share the same occupancy.
    #[inline]
    pub fn is_boundary(self) -> bool {
        self.0 != 0 && self.0 != 0b1111
    }

    /// True for the two checkerboard configurations.
    #[inline]
    pub fn is_saddle(self) -> bool {
        self.0 == 0b1001 || self.0 == 0b0110
    }
}

/// A dense rectangular occupancy grid.
///
/// # Example
///
/// ```rust
/// use wallmesh::{LatticePoint, OccupancyGrid};
///
/// // `true` marks walkable cells.
/// let grid = OccupancyGrid::from_walkable_rows(&[vec![false]]).unwrap();
/// let n = grid.neighborhood(LatticePoint::new(0, 0));
/// assert_eq!(n.bits(), 0b0001);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    /// Row-major blocked flags
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Builds a grid from a walkable matrix (`true` = walkable), one inner
    /// vector per row.
    ///
    /// Rows of differing length are rejected before anything else happens.
    pub fn from_walkable_rows(rows: &[Vec<bool>]) -> WallMeshResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(WallMeshError::NonRectangular {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        check_size(width, height)?;

        let blocked = rows
            .iter()
            .flat_map(|cells| cells.iter().map(|walkable| !walkable))
            .collect();

        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Builds a grid from explicit dimensions and a sparse list of blocked
    /// cells.
    pub fn from_blocked_cells(
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = (i64, i64)>,
    ) -> WallMeshResult<Self> {
        check_size(width, height)?;
        let mut blocked = vec![false; width * height];

        for (x, y) in cells {
            let index = usize::try_from(x)
                .ok()
                .zip(usize::try_from(y).ok())
                .filter(|&(cx, cy)| cx < width && cy < height)
                .map(|(cx, cy)| cy * width + cx)
                .ok_or(WallMeshError::CellOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })?;
            blocked[index] = true;
        }

        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Returns true if cell `(x, y)` is blocked. Out-of-bounds cells are
    /// walkable.
    #[inline]
    pub fn is_blocked(&self, x: i64, y: i64) -> bool {
        self.cell_index(x, y).is_some_and(|index| self.blocked[index])
    }

    /// Occupancy of the four cells around lattice vertex `vertex`.
    pub fn neighborhood(&self, vertex: LatticePoint) -> Neighborhood {
        let x = i64::from(vertex.x);
        let y = i64::from(vertex.y);
        Neighborhood::from_cells(
            self.is_blocked(x - 1, y - 1),
            self.is_blocked(x, y - 1),
            self.is_blocked(x - 1, y),
            self.is_blocked(x, y),
        )
    }

    /// Number of lattice vertices, `(width + 1) * (height + 1)`.
    #[inline]
    pub fn lattice_vertex_count(&self) -> usize {
        (self.width + 1) * (self.height + 1)
    }

    /// Dense row-major index of a lattice vertex, if it lies on the lattice.
    pub fn lattice_index(&self, vertex: LatticePoint) -> Option<usize> {
        let x = usize::try_from(vertex.x).ok()?;
        let y = usize::try_from(vertex.y).ok()?;
        (x <= self.width && y <= self.height).then(|| y * (self.width + 1) + x)
    }

    /// Iterates every lattice vertex in the given order.
    pub fn lattice_vertices(&self, order: ScanOrder) -> LatticeScan {
        LatticeScan::new(self.width + 1, self.height + 1, order)
    }

    /// One interior point per 4-connected walkable region inside the grid.
    ///
    /// Each seed is the centre of the region's first cell in row-major
    /// order, scaled by `cell_size`. Seeds never lie on a lattice edge.
    pub fn walkable_region_seeds(&self, cell_size: f64) -> Vec<DVec2> {
        let mut visited = vec![false; self.blocked.len()];
        let mut stack = Vec::new();
        let mut seeds = Vec::new();

        for start in 0..self.blocked.len() {
            if self.blocked[start] || visited[start] {
                continue;
            }

            let (sx, sy) = (start % self.width, start / self.width);
            seeds.push(DVec2::new(
                (sx as f64 + CELL_CENTER_OFFSET) * cell_size,
                (sy as f64 + CELL_CENTER_OFFSET) * cell_size,
            ));

            visited[start] = true;
            stack.push(start);
            while let Some(index) = stack.pop() {
                let (x, y) = (index % self.width, index / self.width);
                let neighbors = [
                    (x > 0).then(|| index - 1),
                    (x + 1 < self.width).then(|| index + 1),
                    (y > 0).then(|| index - self.width),
                    (y + 1 < self.height).then(|| index + self.width),
                ];
                for next in neighbors.into_iter().flatten() {
                    if !self.blocked[next] && !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        seeds
    }

    fn cell_index(&self, x: i64, y: i64) -> Option<usize> {
        let cx = usize::try_from(x).ok()?;
        let cy = usize::try_from(y).ok()?;
        (cx < self.width && cy < self.height).then(|| cy * self.width + cx)
    }
}

/// Bounds the lattice, not just the cell count, so that zero-width or
/// zero-height grids cannot request unbounded tracing work.
fn check_size(width: usize, height: usize) -> WallMeshResult<()> {
    let vertices = width
        .checked_add(1)
        .zip(height.checked_add(1))
        .and_then(|(columns, rows)| columns.checked_mul(rows));
    match vertices {
        Some(count) if count <= MAX_LATTICE_VERTICES => Ok(()),
        _ => Err(WallMeshError::GridTooLarge {
            width,
            height,
            max: MAX_LATTICE_VERTICES,
        }),
    }
}
