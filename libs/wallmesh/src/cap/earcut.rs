//! Ear-clipping backend built on `earcutr`.
//!
//! The graph's segments are chained back into closed rings, rings are
//! nested by point-in-polygon tests, and every ring that is the innermost
//! container of a hole seed bounds an excluded region. Each remaining ring
//! is ear-clipped together with its excluded children as holes.

use super::{CapTriangulation, ConstrainedTriangulator, PlanarGraph};
use crate::error::{WallMeshError, WallMeshResult};
use glam::DVec2;
use robust::{orient2d, Coord};

/// Triangulator backed by `earcutr::earcut`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTriangulator;

impl EarcutTriangulator {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl ConstrainedTriangulator for EarcutTriangulator {
    fn triangulate(&self, graph: &PlanarGraph, holes: &[DVec2]) -> WallMeshResult<CapTriangulation> {
        let rings = chain_rings(graph)?;
        let nesting = Nesting::build(&graph.vertices, &rings);

        let mut excluded = vec![false; rings.len()];
        for &seed in holes {
            if let Some(ring) = nesting.innermost_container(&graph.vertices, &rings, seed) {
                excluded[ring] = true;
            }
        }

        let mut triangles = Vec::new();
        for (outer, ring) in rings.iter().enumerate() {
            if excluded[outer] {
                continue;
            }
            let children: Vec<&[usize]> = rings
                .iter()
                .enumerate()
                .filter(|&(child, _)| excluded[child] && nesting.parent[child] == Some(outer))
                .map(|(_, r)| r.as_slice())
                .collect();
            clip_ring(&graph.vertices, ring, &children, &mut triangles)?;
        }

        Ok(CapTriangulation {
            vertices: graph.vertices.clone(),
            triangles,
        })
    }
}

/// Splits the ordered segment list into closed rings of vertex indices.
fn chain_rings(graph: &PlanarGraph) -> WallMeshResult<Vec<Vec<usize>>> {
    let mut rings = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut end = 0;

    for (k, &[from, to]) in graph.segments.iter().enumerate() {
        if !current.is_empty() && from != end {
            return Err(WallMeshError::triangulation(format!(
                "segment {k} does not continue the ring at vertex {end}"
            )));
        }
        current.push(from);
        end = to;
        if current.first() == Some(&to) {
            rings.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        return Err(WallMeshError::triangulation("segments do not close into rings"));
    }
    Ok(rings)
}

struct Nesting {
    parent: Vec<Option<usize>>,
    depth: Vec<usize>,
}

impl Nesting {
    fn build(vertices: &[DVec2], rings: &[Vec<usize>]) -> Self {
        let containers: Vec<Vec<usize>> = rings
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                let sample = (vertices[ring[0]] + vertices[ring[1 % ring.len()]]) * 0.5;
                (0..rings.len())
                    .filter(|&j| j != i && ring_contains(vertices, &rings[j], sample))
                    .collect()
            })
            .collect();

        let depth: Vec<usize> = containers.iter().map(Vec::len).collect();
        let parent = containers
            .iter()
            .map(|outer| outer.iter().copied().max_by_key(|&j| depth[j]))
            .collect();

        Self { parent, depth }
    }

    fn innermost_container(&self, vertices: &[DVec2], rings: &[Vec<usize>], point: DVec2) -> Option<usize> {
        (0..rings.len())
            .filter(|&j| ring_contains(vertices, &rings[j], point))
            .max_by_key(|&j| self.depth[j])
    }
}

/// Crossing-number test; `point` must not lie on the ring.
fn ring_contains(vertices: &[DVec2], ring: &[usize], point: DVec2) -> bool {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let a = vertices[ring[i]];
        let b = vertices[ring[(i + 1) % n]];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn clip_ring(
    vertices: &[DVec2],
    outer: &[usize],
    holes: &[&[usize]],
    triangles: &mut Vec<[usize; 3]>,
) -> WallMeshResult<()> {
    let mut global: Vec<usize> = outer.to_vec();
    let mut hole_starts = Vec::with_capacity(holes.len());
    for hole in holes {
        hole_starts.push(global.len());
        global.extend_from_slice(hole);
    }

    let flat: Vec<f64> = global
        .iter()
        .flat_map(|&i| [vertices[i].x, vertices[i].y])
        .collect();

    let indices = earcutr::earcut(&flat, &hole_starts, 2)
        .map_err(|e| WallMeshError::triangulation(format!("earcut failed: {e:?}")))?;

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [global[tri[0]], global[tri[1]], global[tri[2]]];
        let orientation = orient2d(coord(vertices[a]), coord(vertices[b]), coord(vertices[c]));
        if orientation > 0.0 {
            triangles.push([a, b, c]);
        } else if orientation < 0.0 {
            triangles.push([a, c, b]);
        }
    }
    Ok(())
}

fn coord(v: DVec2) -> Coord<f64> {
    Coord { x: v.x, y: v.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x, y),
            DVec2::new(x + size, y),
            DVec2::new(x + size, y + size),
            DVec2::new(x, y + size),
        ]
    }

    #[test]
    fn test_ring_contains() {
        let vertices = square(0.0, 0.0, 2.0);
        let ring = [0, 1, 2, 3];
        assert!(ring_contains(&vertices, &ring, DVec2::new(1.0, 1.0)));
        assert!(ring_contains(&vertices, &ring, DVec2::new(0.5, 1.0)));
        assert!(!ring_contains(&vertices, &ring, DVec2::new(2.5, 1.0)));
        assert!(!ring_contains(&vertices, &ring, DVec2::new(1.0, -0.5)));
    }

    #[test]
    fn test_chain_rings_splits_loops() {
        let mut vertices = square(0.0, 0.0, 1.0);
        vertices.extend(square(5.0, 5.0, 1.0));
        let graph = PlanarGraph {
            vertices,
            segments: vec![[0, 1], [1, 2], [2, 3], [3, 0], [4, 5], [5, 6], [6, 7], [7, 4]],
        };
        let rings = chain_rings(&graph).unwrap();
        assert_eq!(rings, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
    }

    #[test]
    fn test_chain_rings_rejects_open_chain() {
        let graph = PlanarGraph {
            vertices: square(0.0, 0.0, 1.0),
            segments: vec![[0, 1], [1, 2]],
        };
        assert!(matches!(chain_rings(&graph), Err(WallMeshError::Triangulation { .. })));

        let graph = PlanarGraph {
            vertices: square(0.0, 0.0, 1.0),
            segments: vec![[0, 1], [2, 3]],
        };
        assert!(chain_rings(&graph).is_err());
    }

    #[test]
    fn test_nesting_depths() {
        let mut vertices = square(0.0, 0.0, 10.0);
        vertices.extend(square(2.0, 2.0, 6.0));
        vertices.extend(square(4.0, 4.0, 2.0));
        let rings = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10, 11]];
        let nesting = Nesting::build(&vertices, &rings);
        assert_eq!(nesting.depth, vec![0, 1, 2]);
        assert_eq!(nesting.parent, vec![None, Some(0), Some(1)]);
        assert_eq!(
            nesting.innermost_container(&vertices, &rings, DVec2::new(3.0, 3.0)),
            Some(1)
        );
        assert_eq!(
            nesting.innermost_container(&vertices, &rings, DVec2::new(20.0, 3.0)),
            None
        );
    }
}
