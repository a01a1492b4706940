//! # Lattice Primitives
//!
//! Integer lattice points, unit directions and closed wall perimeters.
//!
//! Lattice vertex `(x, y)` is the upper-left corner of grid cell `(x, y)`.
//! `x` grows to the right (columns) and `y` grows downward (rows), so
//! [`Direction::Up`] is a step towards smaller `y`.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit step between neighboring lattice vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards +x
    Right,
    /// Towards +y
    Down,
    /// Towards -x
    Left,
    /// Towards -y
    Up,
}

impl Direction {
    /// The four moving directions.
    pub const MOVES: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Lattice offset of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    /// Returns the direction of a unit step, if `(dx, dy)` is one.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (0, -1) => Some(Direction::Up),
            _ => None,
        }
    }

    /// Single-bit mask used by the tracer's visit counter.
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        match self {
            Direction::Right => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Up => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        };
        f.write_str(name)
    }
}

/// An integer lattice vertex.
///
/// Ordering is lexicographic on `x`, then `y`, which is the order used to
/// canonicalize perimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LatticePoint {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl LatticePoint {
    /// Creates a lattice point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbor one step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Lifts the point into float space, scaled by `cell_size`.
    #[inline]
    pub fn to_dvec2(self, cell_size: f64) -> DVec2 {
        DVec2::new(f64::from(self.x) * cell_size, f64::from(self.y) * cell_size)
    }
}

impl From<(i32, i32)> for LatticePoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A closed loop of lattice vertices: the first point equals the last.
///
/// Perimeters order lexicographically by their point sequence, so a set of
/// normalized perimeters can be sorted into a canonical order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WallPerimeter {
    points: Vec<LatticePoint>,
}

impl WallPerimeter {
    /// Wraps a point sequence without validation.
    pub fn from_points(points: Vec<LatticePoint>) -> Self {
        Self { points }
    }

    /// Returns the points, including the closing duplicate.
    #[inline]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Consumes the perimeter and returns its points.
    pub fn into_points(self) -> Vec<LatticePoint> {
        self.points
    }

    /// Number of stored points, including the closing duplicate.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the perimeter holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the first point equals the last.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates consecutive `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (LatticePoint, LatticePoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Twice the signed area in the right-handed XY plane.
    ///
    /// Tracer output keeps blocked cells on the left, so outer boundaries of
    /// blocked regions are positive and boundaries of walkable islands are
    /// negative.
    pub fn doubled_signed_area(&self) -> i64 {
        self.segments()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum()
    }

    /// Lifts the points into float space.
    pub fn to_dvec2(&self, cell_size: f64) -> Vec<DVec2> {
        self.points.iter().map(|p| p.to_dvec2(cell_size)).collect()
    }
}

impl From<Vec<(i32, i32)>> for WallPerimeter {
    fn from(points: Vec<(i32, i32)>) -> Self {
        Self::from_points(points.into_iter().map(LatticePoint::from).collect())
    }
}

impl fmt::Display for WallPerimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_round_trip() {
        let p = LatticePoint::new(3, 4);
        for d in Direction::MOVES {
            let (dx, dy) = d.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(d));
            assert_ne!(p.step(d), p);
        }
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_up_is_negative_y() {
        assert_eq!(LatticePoint::new(0, 0).step(Direction::Up), LatticePoint::new(0, -1));
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut points = vec![
            LatticePoint::new(1, 0),
            LatticePoint::new(0, 5),
            LatticePoint::new(0, 1),
        ];
        points.sort();
        assert_eq!(points[0], LatticePoint::new(0, 1));
        assert_eq!(points[2], LatticePoint::new(1, 0));
    }

    #[test]
    fn test_direction_bits_are_distinct() {
        let mask = Direction::MOVES.iter().fold(0u8, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(mask, 0b1111);
    }

    #[test]
    fn test_perimeter_closed_and_area() {
        let square = WallPerimeter::from(vec![(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)]);
        assert!(square.is_closed());
        assert_eq!(square.segment_count(), 4);
        assert_eq!(square.doubled_signed_area(), 2);
        assert_eq!(square.to_string(), "[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)]");
    }

    #[test]
    fn test_open_perimeter() {
        let open = WallPerimeter::from(vec![(0, 0), (1, 0)]);
        assert!(!open.is_closed());
        assert!(!WallPerimeter::from_points(Vec::new()).is_closed());
    }
}
