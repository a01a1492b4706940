//! # Perimeter Normalization
//!
//! Reduces a traced loop to its corners and rotates it into a canonical
//! start, so equal walls compare equal regardless of where tracing began.
//!
//! Steps, applied to the loop as a circular sequence:
//!
//! 1. Drop contiguous duplicate points
//! 2. Drop every point whose incoming and outgoing steps point the same way
//!    (the start point included)
//! 3. Rotate to start at the lexicographically smallest point and close
//!
//! Normalizing an already normalized perimeter returns it unchanged.

use crate::error::{WallMeshError, WallMeshResult};
use crate::lattice::{LatticePoint, WallPerimeter};

/// Normalizes one perimeter. `wall` is only used for error reporting.
///
/// # Errors
///
/// [`WallMeshError::DegeneratePerimeter`] when fewer than three corners
/// remain.
///
/// # Example
///
/// ```rust
/// use wallmesh::{normalize_perimeter, WallPerimeter};
///
/// // A 2x1 rectangle traced from the middle of its bottom edge.
/// let raw = WallPerimeter::from(vec![
///     (1, 1), (0, 1), (0, 0), (1, 0), (2, 0), (2, 1), (1, 1),
/// ]);
/// let normalized = normalize_perimeter(0, &raw).unwrap();
/// assert_eq!(normalized, WallPerimeter::from(vec![(0, 0), (2, 0), (2, 1), (0, 1), (0, 0)]));
/// ```
pub fn normalize_perimeter(wall: usize, perimeter: &WallPerimeter) -> WallMeshResult<WallPerimeter> {
    let mut ring = open_ring(perimeter.points());
    dedup_cyclic(&mut ring);
    let corners = collapse_collinear(&ring);

    if corners.len() < 3 {
        return Err(WallMeshError::DegeneratePerimeter {
            wall,
            corners: corners.len(),
        });
    }

    // `corners` is non-empty here, so a minimum exists.
    let start = corners
        .iter()
        .enumerate()
        .min_by_key(|&(_, point)| point)
        .map_or(0, |(i, _)| i);

    let mut points = Vec::with_capacity(corners.len() + 1);
    points.extend_from_slice(&corners[start..]);
    points.extend_from_slice(&corners[..start]);
    points.push(corners[start]);

    Ok(WallPerimeter::from_points(points))
}

/// Normalizes every perimeter, keeping input order.
pub fn normalize_all(perimeters: &[WallPerimeter]) -> WallMeshResult<Vec<WallPerimeter>> {
    perimeters
        .iter()
        .enumerate()
        .map(|(wall, perimeter)| normalize_perimeter(wall, perimeter))
        .collect()
}

/// Strips the closing duplicate, if present.
fn open_ring(points: &[LatticePoint]) -> Vec<LatticePoint> {
    match points {
        [first, .., last] if first == last => points[..points.len() - 1].to_vec(),
        _ => points.to_vec(),
    }
}

fn dedup_cyclic(ring: &mut Vec<LatticePoint>) {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
}

/// Keeps only the points where the loop turns (or reverses).
fn collapse_collinear(ring: &[LatticePoint]) -> Vec<LatticePoint> {
    let n = ring.len();
    if n < 3 {
        return ring.to_vec();
    }

    (0..n)
        .filter(|&i| {
            let prev = ring[(i + n - 1) % n];
            let here = ring[i];
            let next = ring[(i + 1) % n];
            !continues_straight(prev, here, next)
        })
        .map(|i| ring[i])
        .collect()
}

fn continues_straight(prev: LatticePoint, here: LatticePoint, next: LatticePoint) -> bool {
    let (ax, ay) = (i64::from(here.x - prev.x), i64::from(here.y - prev.y));
    let (bx, by) = (i64::from(next.x - here.x), i64::from(next.y - here.y));
    ax * by - ay * bx == 0 && ax * bx + ay * by > 0
}
