//! Lattice vertex iteration orders.

use crate::lattice::LatticePoint;
use serde::{Deserialize, Serialize};

/// Order in which the tracer visits lattice vertices looking for unwalked
/// boundary exits.
///
/// The set of traced perimeters does not depend on the order; only the
/// order and start points of the raw loops do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Rows top to bottom, columns left to right
    #[default]
    RowMajor,
    /// Columns left to right, rows top to bottom
    ColumnMajor,
    /// Rows bottom to top, columns right to left
    ReverseRowMajor,
    /// Columns right to left, rows bottom to top
    ReverseColumnMajor,
}

impl ScanOrder {
    /// Every supported order.
    pub const ALL: [ScanOrder; 4] = [
        ScanOrder::RowMajor,
        ScanOrder::ColumnMajor,
        ScanOrder::ReverseRowMajor,
        ScanOrder::ReverseColumnMajor,
    ];
}

/// Iterator over the `columns` x `rows` lattice in a [`ScanOrder`].
#[derive(Debug, Clone)]
pub struct LatticeScan {
    columns: usize,
    rows: usize,
    order: ScanOrder,
    next: usize,
}

impl LatticeScan {
    pub(crate) fn new(columns: usize, rows: usize, order: ScanOrder) -> Self {
        Self {
            columns,
            rows,
            order,
            next: 0,
        }
    }

    fn total(&self) -> usize {
        self.columns * self.rows
    }
}

impl Iterator for LatticeScan {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.total();
        if self.next >= total {
            return None;
        }
        let k = self.next;
        self.next += 1;

        let (x, y) = match self.order {
            ScanOrder::RowMajor => (k % self.columns, k / self.columns),
            ScanOrder::ColumnMajor => (k / self.rows, k % self.rows),
            ScanOrder::ReverseRowMajor => {
                let r = total - 1 - k;
                (r % self.columns, r / self.columns)
            }
            ScanOrder::ReverseColumnMajor => {
                let r = total - 1 - k;
                (r / self.rows, r % self.rows)
            }
        };

        // Grid dimensions are capped well below i32::MAX per axis.
        Some(LatticePoint::new(x as i32, y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LatticeScan {}
