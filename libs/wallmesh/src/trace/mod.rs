//! # Perimeter Tracing
//!
//! Marching-squares boundary follower over the lattice of an
//! [`OccupancyGrid`].
//!
//! ## Algorithm
//!
//! 1. Scan lattice vertices in a [`ScanOrder`]
//! 2. At a vertex with an unconsumed exit, start a loop along that exit
//! 3. Apply the [`rules`] table at every vertex reached, consuming the exit
//!    taken, until the walk is back at the start about to repeat its first
//!    step
//!
//! Blocked cells stay on the right of travel in grid coordinates, which is
//! the left in the right-handed XY plane: outer boundaries of blocked
//! regions come out counter-clockwise, boundaries of walkable islands
//! clockwise.
//!
//! ## Example
//!
//! ```rust
//! use wallmesh::{trace_walls, OccupancyGrid, ScanOrder, WallPerimeter};
//!
//! let grid = OccupancyGrid::from_walkable_rows(&[vec![false]]).unwrap();
//! let walls = trace_walls(&grid, ScanOrder::RowMajor).unwrap();
//! assert_eq!(walls, vec![WallPerimeter::from(vec![(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)])]);
//! ```

pub mod rules;


use crate::error::{WallMeshError, WallMeshResult};
use crate::grid::{OccupancyGrid, ScanOrder};
use crate::lattice::{Direction, LatticePoint, WallPerimeter};
use crate::normalize::normalize_perimeter;
use config::constants::lattice_edge_budget;

// =============================================================================
// VISIT COUNTER
// =============================================================================

/// Per-vertex record of the exits already walked.
///
/// A vertex is exhausted once every exit of its configuration has been
/// consumed: after one visit for ordinary boundary vertices, after two for
/// saddles.
#[derive(Debug, Clone)]
pub struct VisitCounter {
    columns: usize,
    consumed: Vec<u8>,
}

impl VisitCounter {
    /// Creates an empty counter covering every lattice vertex of `grid`.
    pub fn new(grid: &OccupancyGrid) -> Self {
        Self {
            columns: grid.width() + 1,
            consumed: vec![0; grid.lattice_vertex_count()],
        }
    }

    /// Number of times `vertex` has been left along a boundary edge.
    pub fn visits(&self, vertex: LatticePoint) -> usize {
        self.index(vertex)
            .map_or(0, |i| self.consumed[i].count_ones() as usize)
    }

    /// Returns true if `exit` has already been walked from `vertex`.
    pub fn is_consumed(&self, vertex: LatticePoint, exit: Direction) -> bool {
        self.index(vertex)
            .is_some_and(|i| self.consumed[i] & exit.bit() != 0)
    }

    /// Marks `exit` as walked from `vertex`. Returns false if it already was.
    fn consume(&mut self, vertex: LatticePoint, exit: Direction) -> bool {
        match self.index(vertex) {
            Some(i) if self.consumed[i] & exit.bit() == 0 => {
                self.consumed[i] |= exit.bit();
                true
            }
            _ => false,
        }
    }

    fn index(&self, vertex: LatticePoint) -> Option<usize> {
        let x = usize::try_from(vertex.x).ok()?;
        let y = usize::try_from(vertex.y).ok()?;
        let rows = self.consumed.len() / self.columns;
        (x < self.columns && y < rows).then(|| y * self.columns + x)
    }
}

// =============================================================================
// TRACER
// =============================================================================

/// Boundary follower bound to one grid.
#[derive(Debug, Clone, Copy)]
pub struct PerimeterTracer<'a> {
    grid: &'a OccupancyGrid,
    order: ScanOrder,
    budget: usize,
}

impl<'a> PerimeterTracer<'a> {
    /// Creates a tracer scanning `grid` in row-major order.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self {
            grid,
            order: ScanOrder::default(),
            // Grids are bounded on construction, so the count cannot overflow.
            budget: lattice_edge_budget(grid.width(), grid.height()).unwrap_or(usize::MAX),
        }
    }

    /// Sets the lattice scan order.
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Traces every closed boundary loop of the grid.
    ///
    /// Loops are raw: every unit step appears as its own point and each loop
    /// starts wherever the scan first found it.
    pub fn trace(&self) -> WallMeshResult<Vec<WallPerimeter>> {
        self.trace_counted().map(|(loops, _)| loops)
    }

    /// Same as [`trace`](Self::trace), also returning the final visit
    /// counter.
    pub fn trace_counted(&self) -> WallMeshResult<(Vec<WallPerimeter>, VisitCounter)> {
        let mut counter = VisitCounter::new(self.grid);
        let mut loops = Vec::new();

        for vertex in self.grid.lattice_vertices(self.order) {
            let rule = rules::rule(self.grid.neighborhood(vertex));
            while let Some(&exit) = rule
                .exits
                .iter()
                .find(|&&exit| !counter.is_consumed(vertex, exit))
            {
                let perimeter = self.walk(vertex, exit, &mut counter)?;
                log::trace!("traced loop of {} steps from {}", perimeter.segment_count(), vertex);
                loops.push(perimeter);
            }
        }

        log::debug!(
            "traced {} loops on {}x{} grid ({:?})",
            loops.len(),
            self.grid.width(),
            self.grid.height(),
            self.order
        );
        Ok((loops, counter))
    }

    /// Walks one loop from `start`, leaving along `exit`.
    fn walk(
        &self,
        start: LatticePoint,
        exit: Direction,
        counter: &mut VisitCounter,
    ) -> WallMeshResult<WallPerimeter> {
        let unclosed = |steps| WallMeshError::UnclosedPerimeter {
            x: start.x,
            y: start.y,
            steps,
        };

        let mut points = vec![start];
        let mut current = start;
        let mut heading = exit;

        loop {
            if !counter.consume(current, heading) {
                return Err(unclosed(points.len() - 1));
            }
            current = current.step(heading);
            points.push(current);

            let steps = points.len() - 1;
            if steps > self.budget {
                return Err(unclosed(steps));
            }

            let neighborhood = self.grid.neighborhood(current);
            let next = rules::rule(neighborhood).transition(heading).ok_or(
                WallMeshError::MissingTransition {
                    x: current.x,
                    y: current.y,
                    configuration: neighborhood.bits(),
                },
            )?;

            if current == start && next == exit {
                return Ok(WallPerimeter::from_points(points));
            }
            heading = next;
        }
    }
}

/// Traces, normalizes and sorts every wall perimeter of `grid`.
///
/// The result does not depend on `order`.
pub fn trace_walls(grid: &OccupancyGrid, order: ScanOrder) -> WallMeshResult<Vec<WallPerimeter>> {
    let raw = PerimeterTracer::new(grid).with_order(order).trace()?;
    let mut walls = raw
        .iter()
        .enumerate()
        .map(|(wall, perimeter)| normalize_perimeter(wall, perimeter))
        .collect::<WallMeshResult<Vec<_>>>()?;
    walls.sort();
    Ok(walls)
}
