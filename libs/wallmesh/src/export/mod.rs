//! # Wavefront Export
//!
//! Deduplicates face corners into an indexed vertex table and writes the
//! Wavefront OBJ subset used for level geometry: one `v x y z` line per
//! vertex followed by one `f i1 i2 ... iN` line per face.
//!
//! ## Determinism
//!
//! Vertices are deduplicated by exact coordinate equality (`-0.0` equals
//! `0.0`) and numbered in lexicographic `(x, y, z)` order of the internal
//! frame. Faces are then ordered by their index sequence, so the whole text
//! is byte-identical whatever order the faces were inserted in.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use wallmesh::{ExportSettings, ExportedMesh, Face, Mesh};
//!
//! let mesh = Mesh::from_faces(vec![Face::triangle(DVec3::ZERO, DVec3::X, DVec3::Y)]);
//! let exported = ExportedMesh::from_mesh(&mesh, &ExportSettings::default());
//! assert_eq!(exported.vertex_count(), 3);
//! assert!(exported.to_obj_string().starts_with("v 0.000000 0.000000 0.000000\n"));
//! ```

mod axis;


pub use axis::{Axis, AxisRemap, SignedAxis};

use crate::error::{WallMeshError, WallMeshResult};
use crate::mesh::Mesh;
use crate::settings::ExportSettings;
use config::constants::{OBJ_COORDINATE_DECIMALS, OBJ_FACE_TAG, OBJ_VERTEX_TAG};
use glam::DVec3;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Exact-equality key; `-0.0` and `0.0` share a key.
fn vertex_key(v: DVec3) -> [u64; 3] {
    [(v.x + 0.0).to_bits(), (v.y + 0.0).to_bits(), (v.z + 0.0).to_bits()]
}

fn lexicographic(a: &DVec3, b: &DVec3) -> Ordering {
    (a.x + 0.0)
        .total_cmp(&(b.x + 0.0))
        .then((a.y + 0.0).total_cmp(&(b.y + 0.0)))
        .then((a.z + 0.0).total_cmp(&(b.z + 0.0)))
}

/// An indexed mesh ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedMesh {
    /// Vertices in the output frame
    vertices: Vec<DVec3>,
    /// Zero-based vertex indices, already in output winding
    faces: Vec<Vec<usize>>,
    one_based: bool,
}

impl ExportedMesh {
    /// Indexes a face soup.
    ///
    /// Faces come out sorted by their vertex index sequence. When the axis remap mirrors the frame, every face's corner order is
    /// reversed so outward normals stay outward.
    pub fn from_mesh(mesh: &Mesh, settings: &ExportSettings) -> Self {
        let mut unique: Vec<DVec3> = Vec::with_capacity(mesh.corner_count());
        let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(mesh.corner_count());
        for face in mesh.faces() {
            for &corner in face.corners() {
                if seen.insert(vertex_key(corner)) {
                    unique.push(corner);
                }
            }
        }
        unique.sort_by(lexicographic);

        let index: HashMap<[u64; 3], usize> = unique
            .iter()
            .enumerate()
            .map(|(i, &v)| (vertex_key(v), i))
            .collect();

        let mut faces: Vec<Vec<usize>> = mesh
            .faces()
            .iter()
            .map(|face| {
                face.corners()
                    .iter()
                    .filter_map(|&corner| index.get(&vertex_key(corner)).copied())
                    .collect()
            })
            .collect();
        faces.sort_unstable();

        Self::assemble(unique, faces, settings)
    }

    /// Wraps an existing vertex table and zero-based face list.
    ///
    /// Duplicate vertices are kept and logged; indices past the vertex table
    /// are rejected.
    pub fn from_indexed(
        vertices: Vec<DVec3>,
        faces: Vec<Vec<usize>>,
        settings: &ExportSettings,
    ) -> WallMeshResult<Self> {
        let mut seen: HashMap<[u64; 3], usize> = HashMap::with_capacity(vertices.len());
        for (i, &v) in vertices.iter().enumerate() {
            if let Some(first) = seen.insert(vertex_key(v), i) {
                log::warn!("duplicated vertex {i} (first seen as {first}): {v}");
            }
        }

        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(WallMeshError::FaceIndexOutOfRange {
                    face,
                    index,
                    count: vertices.len(),
                });
            }
        }

        Ok(Self::assemble(vertices, faces, settings))
    }

    fn assemble(vertices: Vec<DVec3>, mut faces: Vec<Vec<usize>>, settings: &ExportSettings) -> Self {
        let remap = settings.axes;
        if remap.is_mirroring() {
            faces.iter_mut().for_each(|face| face.reverse());
        }
        Self {
            vertices: vertices.into_iter().map(|v| remap.apply(v)).collect(),
            faces,
            one_based: settings.one_based,
        }
    }

    /// Vertices in the output frame.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Zero-based face indices in output winding.
    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Number of vertex lines.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of face lines.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Writes the OBJ text to `out` and returns the number of bytes written.
    pub fn write_obj<W: Write>(&self, mut out: W) -> WallMeshResult<usize> {
        let mut written = 0;
        let mut line = String::new();

        for v in &self.vertices {
            line.clear();
            line.push_str(OBJ_VERTEX_TAG);
            for component in [v.x, v.y, v.z] {
                line.push(' ');
                line.push_str(&format_coordinate(component));
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
            written += line.len();
        }

        let base = usize::from(self.one_based);
        for face in &self.faces {
            line.clear();
            line.push_str(OBJ_FACE_TAG);
            for &index in face {
                line.push(' ');
                line.push_str(&(index + base).to_string());
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
            written += line.len();
        }

        out.flush()?;
        Ok(written)
    }

    /// Renders the OBJ text into a string.
    pub fn to_obj_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_obj(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Formats one coordinate with fixed precision, never producing `-0.000000`.
fn format_coordinate(value: f64) -> String {
    let text = format!("{:.*}", OBJ_COORDINATE_DECIMALS, value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => magnitude.to_string(),
        _ => text,
    }
}
