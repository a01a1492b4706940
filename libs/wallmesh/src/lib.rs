//! # Wall Mesh
//!
//! Turns a walkable/blocked occupancy grid into a closed, exportable wall
//! mesh.
//!
//! ## Architecture
//!
//! ```text
//! OccupancyGrid → PerimeterTracer → normalize ─┬→ extrude ──────────┬→ ExportedMesh
//!                                              └→ triangulate_caps ─┘
//! ```
//!
//! ## Conventions
//!
//! - Lattice vertex `(x, y)` is the upper-left corner of cell `(x, y)`;
//!   `y` grows downward
//! - Cells outside the grid are walkable
//! - Perimeters keep blocked cells on their left in the XY plane, so wall
//!   normals point away from blocked regions and caps face +z
//! - Diagonally touching blocked cells form separate walls that share the
//!   saddle vertex
//!
//! ## Usage
//!
//! ```rust
//! use wallmesh::{build_wall_mesh, OccupancyGrid, PipelineSettings};
//!
//! // `true` = walkable
//! let rows = vec![
//!     vec![true, true, true],
//!     vec![true, false, true],
//!     vec![true, true, true],
//! ];
//! let grid = OccupancyGrid::from_walkable_rows(&rows).unwrap();
//! let output = build_wall_mesh(&grid, &PipelineSettings::default()).unwrap();
//! assert_eq!(output.perimeters[0].to_string(), "[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)]");
//! let obj = output.exported.to_obj_string();
//! assert!(obj.starts_with("v 1.000000 0.000000 1.000000\n"));
//! ```

pub mod cap;
pub mod error;
pub mod export;
pub mod extrude;
pub mod grid;
pub mod lattice;
pub mod mesh;
pub mod normalize;
pub mod pipeline;
pub mod settings;
pub mod trace;

pub use cap::{
    triangulate_caps, CapTriangulation, ConstrainedTriangulator, EarcutTriangulator, PlanarGraph,
};
pub use error::{WallMeshError, WallMeshResult};
pub use export::{Axis, AxisRemap, ExportedMesh, SignedAxis};
pub use extrude::{extrude_perimeters, ExtrudeParams, FaceStyle};
pub use grid::{LatticeScan, Neighborhood, OccupancyGrid, ScanOrder};
pub use lattice::{Direction, LatticePoint, WallPerimeter};
pub use mesh::{Face, Mesh};
pub use normalize::{normalize_all, normalize_perimeter};
pub use pipeline::{build_wall_mesh, build_wall_mesh_with, WallMeshOutput};
pub use settings::{ExportSettings, PipelineSettings};
pub use trace::{trace_walls, PerimeterTracer, VisitCounter};
