//! # Pipeline
//!
//! One-shot driver chaining every stage:
//!
//! ```text
//! OccupancyGrid → trace → normalize ─┬→ extrude ────────┬→ ExportedMesh
//!                                    └→ triangulate caps ┘
//! ```

use crate::cap::{triangulate_caps, ConstrainedTriangulator, EarcutTriangulator};
use crate::error::WallMeshResult;
use crate::export::ExportedMesh;
use crate::extrude::extrude_perimeters;
use crate::grid::OccupancyGrid;
use crate::lattice::WallPerimeter;
use crate::mesh::Mesh;
use crate::settings::PipelineSettings;
use crate::trace::trace_walls;
use std::time::Instant;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct WallMeshOutput {
    /// Normalized, sorted wall perimeters
    pub perimeters: Vec<WallPerimeter>,
    /// Wall and cap faces in emission order
    pub mesh: Mesh,
    /// Indexed mesh ready to be written
    pub exported: ExportedMesh,
}

/// Runs the whole pipeline with the bundled earcut backend.
///
/// # Example
///
/// ```rust
/// use wallmesh::{build_wall_mesh, OccupancyGrid, PipelineSettings};
///
/// let grid = OccupancyGrid::from_walkable_rows(&[vec![false]]).unwrap();
/// let output = build_wall_mesh(&grid, &PipelineSettings::default()).unwrap();
/// assert_eq!(output.perimeters.len(), 1);
/// // 4 wall quads + 2 cap triangles
/// assert_eq!(output.exported.face_count(), 6);
/// ```
pub fn build_wall_mesh(grid: &OccupancyGrid, settings: &PipelineSettings) -> WallMeshResult<WallMeshOutput> {
    build_wall_mesh_with(grid, settings, &EarcutTriangulator::new())
}

/// Runs the whole pipeline with a caller-supplied triangulation backend.
pub fn build_wall_mesh_with<T: ConstrainedTriangulator + ?Sized>(
    grid: &OccupancyGrid,
    settings: &PipelineSettings,
    triangulator: &T,
) -> WallMeshResult<WallMeshOutput> {
    settings.validate()?;

    let started = Instant::now();
    let perimeters = trace_walls(grid, settings.scan_order)?;
    log::info!(
        "detected {} wall perimeters in {:.2?}",
        perimeters.len(),
        started.elapsed()
    );

    let started = Instant::now();
    let mut mesh = extrude_perimeters(&perimeters, &settings.extrude_params())?;
    log::info!("extruded {} wall faces in {:.2?}", mesh.face_count(), started.elapsed());

    if settings.caps {
        let started = Instant::now();
        let holes = grid.walkable_region_seeds(settings.cell_size);
        let caps = triangulate_caps(
            triangulator,
            &perimeters,
            &holes,
            settings.height,
            settings.cell_size,
        )?;
        log::info!(
            "triangulated {} cap faces around {} holes in {:.2?}",
            caps.face_count(),
            holes.len(),
            started.elapsed()
        );
        mesh.append(caps);
    }

    let started = Instant::now();
    let exported = ExportedMesh::from_mesh(&mesh, &settings.export);
    log::info!(
        "indexed {} vertices, {} faces in {:.2?}",
        exported.vertex_count(),
        exported.face_count(),
        started.elapsed()
    );

    Ok(WallMeshOutput {
        perimeters,
        mesh,
        exported,
    })
}
