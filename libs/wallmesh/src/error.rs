//! # Error Types
//!
//! Error types for the wall mesh pipeline.
//!
//! ## Error Policy
//!
//! - Precondition violations (non-rectangular grids, invalid settings) are
//!   reported before any geometry is built
//! - Internal consistency failures carry the offending wall and segment
//!   index and abort the run
//! - No partial meshes are ever returned

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or exporting a wall mesh.
///
/// ## Example
///
/// ```rust
/// use wallmesh::{OccupancyGrid, WallMeshError};
///
/// let rows = vec![vec![true, true], vec![true]];
/// match OccupancyGrid::from_walkable_rows(&rows) {
///     Err(WallMeshError::NonRectangular { row, .. }) => assert_eq!(row, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum WallMeshError {
    /// The walkable matrix has rows of differing length.
    #[error("Non-rectangular grid: row {row} has {found} cells, expected {expected}")]
    NonRectangular {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// The grid's lattice exceeds the configured vertex limit.
    #[error("Grid too large: {width}x{height} cells (max: {max} lattice vertices)")]
    GridTooLarge {
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
        /// Maximum accepted lattice vertex count
        max: usize,
    },

    /// A sparse blocked cell lies outside the declared grid bounds.
    #[error("Blocked cell ({x}, {y}) outside {width}x{height} grid")]
    CellOutOfBounds {
        /// Cell column
        x: i64,
        /// Cell row
        y: i64,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// A boundary walk did not return to its starting vertex.
    #[error("Perimeter starting at ({x}, {y}) did not close after {steps} steps")]
    UnclosedPerimeter {
        /// Start vertex x
        x: i32,
        /// Start vertex y
        y: i32,
        /// Steps taken before giving up
        steps: usize,
    },

    /// A boundary walk reached a vertex with no transition for its heading.
    #[error("No transition at ({x}, {y}) for configuration {configuration:#06b}")]
    MissingTransition {
        /// Vertex x
        x: i32,
        /// Vertex y
        y: i32,
        /// 4-bit neighborhood mask
        configuration: u8,
    },

    /// A perimeter collapsed to fewer than three corners.
    #[error("Degenerate perimeter {wall}: {corners} distinct corners")]
    DegeneratePerimeter {
        /// Index of the wall perimeter
        wall: usize,
        /// Number of distinct corners left
        corners: usize,
    },

    /// A cap graph edge does not reproduce its source perimeter segment.
    #[error("Inconsistent cap segment {segment} of wall {wall}: {message}")]
    InconsistentSegment {
        /// Index of the wall perimeter
        wall: usize,
        /// Index of the segment inside the wall
        segment: usize,
        /// What did not match
        message: String,
    },

    /// The triangulation backend failed.
    #[error("Triangulation failed: {message}")]
    Triangulation {
        /// Backend error description
        message: String,
    },

    /// Extrusion height is zero, negative or not finite.
    #[error("Invalid extrusion height: {0}")]
    InvalidHeight(f64),

    /// Cell size is zero, negative or not finite.
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(f64),

    /// A readable axis remap could not be parsed or reuses an axis.
    #[error("Invalid axis remap: {message}")]
    InvalidAxisRemap {
        /// Description of the problem
        message: String,
    },

    /// A face refers to a vertex index outside the vertex table.
    #[error("Face {face} references vertex {index}, but only {count} vertices exist")]
    FaceIndexOutOfRange {
        /// Index of the face
        face: usize,
        /// Offending vertex index
        index: usize,
        /// Size of the vertex table
        count: usize,
    },

    /// Writing the exported text failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WallMeshError {
    /// Creates an inconsistent segment error.
    pub fn inconsistent_segment(wall: usize, segment: usize, message: impl Into<String>) -> Self {
        Self::InconsistentSegment {
            wall,
            segment,
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::Triangulation {
            message: message.into(),
        }
    }

    /// Creates an invalid axis remap error.
    pub fn invalid_axis_remap(message: impl Into<String>) -> Self {
        Self::InvalidAxisRemap {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for wall mesh operations.
pub type WallMeshResult<T> = Result<T, WallMeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WallMeshError::inconsistent_segment(3, 7, "vertex mismatch");
        let text = err.to_string();
        assert!(text.contains("segment 7"));
        assert!(text.contains("wall 3"));

        let err = WallMeshError::NonRectangular {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_missing_transition_shows_mask() {
        let err = WallMeshError::MissingTransition {
            x: 1,
            y: 2,
            configuration: 0b1001,
        };
        assert!(err.to_string().contains("0b1001"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WallMeshError>();
    }
}
