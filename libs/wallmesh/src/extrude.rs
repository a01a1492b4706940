//! Vertical extrusion of wall perimeters into side faces.

use crate::error::{WallMeshError, WallMeshResult};
use crate::lattice::WallPerimeter;
use crate::mesh::{Face, Mesh};
use config::constants::{DEFAULT_CELL_SIZE, DEFAULT_EXTRUSION_HEIGHT};
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How each wall segment is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceStyle {
    /// One quad per segment
    #[default]
    Quads,
    /// Two triangles per segment, split along the bottom-start/top-end
    /// diagonal
    Triangles,
}

/// Extrusion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Wall height along +z
    pub height: f64,
    /// Output units per lattice unit
    pub cell_size: f64,
    /// Quad or triangle output
    pub style: FaceStyle,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            height: DEFAULT_EXTRUSION_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            style: FaceStyle::default(),
        }
    }
}

/// Extrudes every perimeter between `z = 0` and `z = height`.
///
/// Segment `(a, b)` becomes the quad `(a,0) (b,0) (b,h) (a,h)`. Perimeters
/// keep blocked cells on their left in XY, so every face normal points away
/// from the blocked region. Faces come out in perimeter order, then segment
/// order.
///
/// # Example
///
/// ```rust
/// use wallmesh::{extrude_perimeters, ExtrudeParams, WallPerimeter};
///
/// let square = WallPerimeter::from(vec![(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)]);
/// let mesh = extrude_perimeters(&[square], &ExtrudeParams::default()).unwrap();
/// assert_eq!(mesh.face_count(), 4);
/// ```
pub fn extrude_perimeters(perimeters: &[WallPerimeter], params: &ExtrudeParams) -> WallMeshResult<Mesh> {
    if !params.height.is_finite() || params.height <= 0.0 {
        return Err(WallMeshError::InvalidHeight(params.height));
    }
    if !params.cell_size.is_finite() || params.cell_size <= 0.0 {
        return Err(WallMeshError::InvalidCellSize(params.cell_size));
    }

    let faces: Vec<Vec<Face>> = perimeters
        .par_iter()
        .map(|perimeter| extrude_one(perimeter, params))
        .collect();

    Ok(faces.into_iter().flatten().collect())
}

fn extrude_one(perimeter: &WallPerimeter, params: &ExtrudeParams) -> Vec<Face> {
    let lift = DVec3::new(0.0, 0.0, params.height);
    perimeter
        .segments()
        .flat_map(|(a, b)| {
            let a0 = a.to_dvec2(params.cell_size).extend(0.0);
            let b0 = b.to_dvec2(params.cell_size).extend(0.0);
            let (a1, b1) = (a0 + lift, b0 + lift);
            match params.style {
                FaceStyle::Quads => vec![Face::quad(a0, b0, b1, a1)],
                FaceStyle::Triangles => vec![Face::triangle(a0, b0, b1), Face::triangle(a0, b1, a1)],
            }
        })
        .collect()
}
