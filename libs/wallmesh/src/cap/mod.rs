//! # Cap Triangulation
//!
//! Fills the horizontal footprint bounded by the wall perimeters with
//! triangles at the top of the walls.
//!
//! ## Pipeline
//!
//! ```text
//! perimeters ──► PlanarGraph (dedup + consistency check)
//!                    │
//! hole seeds ───────►│
//!                    ▼
//!          ConstrainedTriangulator ──► 2D triangles ──► lift to z = height
//! ```
//!
//! The numerical triangulation sits behind [`ConstrainedTriangulator`];
//! [`EarcutTriangulator`] is the bundled backend.

mod earcut;


pub use earcut::EarcutTriangulator;

use crate::error::{WallMeshError, WallMeshResult};
use crate::lattice::{LatticePoint, WallPerimeter};
use crate::mesh::{Face, Mesh};
use glam::{DVec2, DVec3};
use std::collections::HashMap;

// =============================================================================
// PLANAR GRAPH
// =============================================================================

/// Planar straight-line graph of the wall footprint.
///
/// Vertices are deduplicated by exact lattice coordinate; segments are
/// vertex index pairs in perimeter order, one per perimeter segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarGraph {
    /// Vertex positions, scaled by the cell size
    pub vertices: Vec<DVec2>,
    /// Directed edges `[from, to]`
    pub segments: Vec<[usize; 2]>,
}

impl PlanarGraph {
    /// Builds the graph from normalized perimeters.
    ///
    /// Every segment is re-derived from its source perimeter after
    /// construction; a mismatch is reported with the wall and segment index.
    pub fn from_perimeters(perimeters: &[WallPerimeter], cell_size: f64) -> WallMeshResult<Self> {
        let mut lattice: Vec<LatticePoint> = Vec::new();
        let mut index: HashMap<LatticePoint, usize> = HashMap::new();
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        let mut segments: Vec<[usize; 2]> = Vec::new();
        let mut sources: Vec<Vec<usize>> = Vec::with_capacity(perimeters.len());

        let mut intern = |point: LatticePoint, lattice: &mut Vec<LatticePoint>| {
            *index.entry(point).or_insert_with(|| {
                lattice.push(point);
                lattice.len() - 1
            })
        };

        for (wall, perimeter) in perimeters.iter().enumerate() {
            let mut wall_edges = Vec::with_capacity(perimeter.segment_count());
            for (segment, (a, b)) in perimeter.segments().enumerate() {
                let from = intern(a, &mut lattice);
                let to = intern(b, &mut lattice);
                if from == to {
                    return Err(WallMeshError::inconsistent_segment(
                        wall,
                        segment,
                        format!("zero-length segment at {a}"),
                    ));
                }
                let key = (from.min(to), from.max(to));
                let edge = *edges.entry(key).or_insert_with(|| {
                    segments.push([from, to]);
                    segments.len() - 1
                });
                wall_edges.push(edge);
            }
            sources.push(wall_edges);
        }

        verify_segments(perimeters, &lattice, &segments, &sources)?;

        Ok(Self {
            vertices: lattice.iter().map(|p| p.to_dvec2(cell_size)).collect(),
            segments,
        })
    }

    /// Returns true if the graph has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn verify_segments(
    perimeters: &[WallPerimeter],
    lattice: &[LatticePoint],
    segments: &[[usize; 2]],
    sources: &[Vec<usize>],
) -> WallMeshResult<()> {
    for (wall, (perimeter, edges)) in perimeters.iter().zip(sources).enumerate() {
        if edges.len() != perimeter.segment_count() {
            return Err(WallMeshError::inconsistent_segment(
                wall,
                edges.len().min(perimeter.segment_count()),
                "segment count mismatch",
            ));
        }
        for (segment, ((a, b), &edge)) in perimeter.segments().zip(edges).enumerate() {
            let [from, to] = segments
                .get(edge)
                .copied()
                .ok_or_else(|| WallMeshError::inconsistent_segment(wall, segment, "missing edge"))?;
            let (p, q) = (lattice[from], lattice[to]);
            if !((p == a && q == b) || (p == b && q == a)) {
                return Err(WallMeshError::inconsistent_segment(
                    wall,
                    segment,
                    format!("edge {p}-{q} does not match {a}-{b}"),
                ));
            }
        }
    }
    Ok(())
}

// =============================================================================
// TRIANGULATOR SEAM
// =============================================================================

/// Result of a constrained triangulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapTriangulation {
    /// Output vertices (may extend the input vertex list)
    pub vertices: Vec<DVec2>,
    /// Counter-clockwise triangles as vertex indices
    pub triangles: Vec<[usize; 3]>,
}

/// Constrained triangulation backend.
///
/// Implementations triangulate the area enclosed by `graph`'s segments,
/// leaving out every region that contains one of `holes`.
pub trait ConstrainedTriangulator {
    /// Triangulates `graph`, excluding regions marked by `holes`.
    fn triangulate(&self, graph: &PlanarGraph, holes: &[DVec2]) -> WallMeshResult<CapTriangulation>;
}

// =============================================================================
// CAP BUILDER
// =============================================================================

/// Triangulates the footprint of `perimeters` and lifts it to `height`.
///
/// An empty perimeter set yields an empty mesh without calling the backend.
/// Output triangles face +z.
pub fn triangulate_caps<T: ConstrainedTriangulator + ?Sized>(
    triangulator: &T,
    perimeters: &[WallPerimeter],
    holes: &[DVec2],
    height: f64,
    cell_size: f64,
) -> WallMeshResult<Mesh> {
    if !height.is_finite() || height <= 0.0 {
        return Err(WallMeshError::InvalidHeight(height));
    }

    let graph = PlanarGraph::from_perimeters(perimeters, cell_size)?;
    if graph.is_empty() {
        log::debug!("empty cap graph, skipping triangulation");
        return Ok(Mesh::new());
    }

    let result = triangulator.triangulate(&graph, holes)?;
    log::debug!(
        "cap: {} vertices, {} segments, {} holes -> {} triangles",
        graph.vertices.len(),
        graph.segments.len(),
        holes.len(),
        result.triangles.len()
    );

    let lift = |i: usize| -> WallMeshResult<DVec3> {
        result
            .vertices
            .get(i)
            .map(|v| v.extend(height))
            .ok_or_else(|| WallMeshError::triangulation(format!("triangle vertex {i} out of range")))
    };

    let faces = result
        .triangles
        .iter()
        .map(|&[a, b, c]| Ok(Face::triangle(lift(a)?, lift(b)?, lift(c)?)))
        .collect::<WallMeshResult<Vec<_>>>()?;

    Ok(Mesh::from_faces(faces))
}
