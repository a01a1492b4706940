//! # Configuration Constants
//!
//! Centralized constants for the wall mesh pipeline.
//!
//! ## Categories
//!
//! - **Geometry**: Extrusion and lattice scaling defaults
//! - **Export**: Wavefront formatting and axis conventions
//! - **Limits**: Safety bounds on input size

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default vertical extrusion of the wall perimeters.
///
/// Measured in lattice units (one unit per grid cell at the default cell
/// size).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_EXTRUSION_HEIGHT;
///
/// let user_height: Option<f64> = None;
/// let height = user_height.unwrap_or(DEFAULT_EXTRUSION_HEIGHT);
/// assert_eq!(height, 3.0);
/// ```
pub const DEFAULT_EXTRUSION_HEIGHT: f64 = 3.0;

/// Default edge length of one grid cell in output units.
///
/// Lattice vertices are integer; they are multiplied by the cell size when
/// lifted into float geometry.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CELL_SIZE;
///
/// let lattice_x = 4;
/// assert_eq!(lattice_x as f64 * DEFAULT_CELL_SIZE, 4.0);
/// ```
pub const DEFAULT_CELL_SIZE: f64 = 1.0;

/// Offset from a cell's upper-left lattice corner to its centre.
///
/// Hole seeds for the cap triangulation are placed at cell centres so they
/// never lie on a lattice edge.
pub const CELL_CENTER_OFFSET: f64 = 0.5;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Number of decimals written for every Wavefront vertex coordinate.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_COORDINATE_DECIMALS;
///
/// let line = format!("v {:.*}", OBJ_COORDINATE_DECIMALS, 2.0);
/// assert_eq!(line, "v 2.000000");
/// ```
pub const OBJ_COORDINATE_DECIMALS: usize = 6;

/// Default mapping from the internal (x, y, z) frame to the output frame.
///
/// The internal trace lives in the XY ground plane with Z as extrusion
/// height; most consumers expect Y-up, so output-y takes internal +z and
/// output-z takes internal +y.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_AXIS_REMAP;
///
/// assert_eq!(DEFAULT_AXIS_REMAP, ["+x", "+z", "+y"]);
/// ```
pub const DEFAULT_AXIS_REMAP: [&str; 3] = ["+x", "+z", "+y"];

/// Wavefront indices are 1-based unless a caller asks otherwise.
pub const DEFAULT_ONE_BASED_INDICES: bool = true;

/// Tag that opens a Wavefront vertex line.
pub const OBJ_VERTEX_TAG: &str = "v";

/// Tag that opens a Wavefront face line.
pub const OBJ_FACE_TAG: &str = "f";

/// Extension given to exported meshes when no destination is named.
pub const OBJ_FILE_EXTENSION: &str = "obj";

// =============================================================================
// RASTER CONSTANTS
// =============================================================================

/// Pixel color that marks a walkable cell in opaque rasters.
pub const WALKABLE_RGB: [u8; 3] = [255, 255, 255];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of lattice vertices, `(width + 1) * (height + 1)`,
/// accepted for a single occupancy grid.
///
/// Tracing allocates per lattice vertex, so the limit applies to the lattice
/// rather than the cell count: a zero-width grid has no cells but still
/// `height + 1` vertices. The value admits an 8192 x 8192 image and keeps
/// every lattice coordinate well inside `i32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LATTICE_VERTICES;
///
/// let (width, height) = (8192usize, 8192usize);
/// assert!((width + 1) * (height + 1) <= MAX_LATTICE_VERTICES);
/// ```
pub const MAX_LATTICE_VERTICES: usize = 8193 * 8193;

/// Upper bound on the number of unit steps a single traced loop may take on
/// a `width` x `height` grid, or `None` if the count overflows `usize`.
///
/// Every unit lattice edge is walked at most once over the whole trace, so a
/// single loop can never be longer than the lattice's edge count. A walk
/// exceeding this budget has failed to close.
///
/// # Example
///
/// ```rust
/// use config::constants::lattice_edge_budget;
///
/// // A 1x1 grid has 4 unit edges around its single cell.
/// assert_eq!(lattice_edge_budget(1, 1), Some(4));
/// assert_eq!(lattice_edge_budget(0, usize::MAX), None);
/// ```
pub fn lattice_edge_budget(width: usize, height: usize) -> Option<usize> {
    let horizontal = width.checked_mul(height.checked_add(1)?)?;
    let vertical = width.checked_add(1)?.checked_mul(height)?;
    horizontal.checked_add(vertical)
}
