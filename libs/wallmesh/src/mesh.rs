//! # Mesh Module
//!
//! Unindexed polygon soup produced by the extruder and the cap
//! triangulator. Faces hold raw coordinates; indexing happens at export.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use wallmesh::{Face, Mesh};
//!
//! let mut mesh = Mesh::new();
//! mesh.push(Face::triangle(DVec3::ZERO, DVec3::X, DVec3::Y));
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.faces()[0].normal(), DVec3::Z);
//! ```

use glam::DVec3;

// =============================================================================
// FACE
// =============================================================================

/// A planar polygon (triangle or quad) given by its corner coordinates in
/// winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    corners: Vec<DVec3>,
}

impl Face {
    /// Creates a triangle `a`, `b`, `c`.
    pub fn triangle(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self {
            corners: vec![a, b, c],
        }
    }

    /// Creates a quad `a`, `b`, `c`, `d`.
    pub fn quad(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> Self {
        Self {
            corners: vec![a, b, c, d],
        }
    }

    /// Creates a face from an arbitrary corner list.
    pub fn from_corners(corners: Vec<DVec3>) -> Self {
        Self { corners }
    }

    /// Corner coordinates in winding order.
    #[inline]
    pub fn corners(&self) -> &[DVec3] {
        &self.corners
    }

    /// Unnormalized face normal (Newell's method); its length is twice the
    /// face area.
    pub fn area_normal(&self) -> DVec3 {
        let n = self.corners.len();
        (0..n).fold(DVec3::ZERO, |acc, i| {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % n];
            acc + DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        })
    }

    /// Unit face normal, or zero for degenerate faces.
    pub fn normal(&self) -> DVec3 {
        self.area_normal().normalize_or_zero()
    }

    /// Face area.
    pub fn area(&self) -> f64 {
        self.area_normal().length() * 0.5
    }

    /// Average of the corners.
    pub fn centroid(&self) -> DVec3 {
        if self.corners.is_empty() {
            return DVec3::ZERO;
        }
        self.corners.iter().copied().sum::<DVec3>() / self.corners.len() as f64
    }
}

// =============================================================================
// MESH
// =============================================================================

/// Ordered collection of faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing face list.
    #[must_use]
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Appends one face.
    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Appends every face of `other`, keeping order.
    pub fn append(&mut self, mut other: Mesh) {
        self.faces.append(&mut other.faces);
    }

    /// Faces in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Consumes the mesh and returns its faces.
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total number of face corners (before deduplication).
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(|f| f.corners.len()).sum()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl FromIterator<Face> for Mesh {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}
