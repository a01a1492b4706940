//! # Transition Rules
//!
//! The boundary follower's lookup table, one entry per 2x2 configuration.
//!
//! Every entry lists the exits a walker may start along (in preference
//! order) and the incoming → outgoing transitions that keep the blocked
//! cells on the right of travel in grid (y-down) coordinates.
//!
//! ## Saddles
//!
//! Configurations `0b1001` and `0b0110` admit two transitions each. The
//! walker always keeps hugging the blocked cell it arrived along, so
//! diagonally touching blocked cells belong to separate loops that share
//! the saddle vertex:
//!
//! | configuration | incoming → outgoing |
//! |---|---|
//! | `0b1001` (UL + DR) | down → left, up → right |
//! | `0b0110` (UR + DL) | right → down, left → up |

use crate::grid::Neighborhood;
use crate::lattice::Direction::{self, Down, Left, Right, Up};

/// Exits and transitions of one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Directions a walk may leave the vertex along, preference ordered
    pub exits: &'static [Direction],
    /// `(incoming, outgoing)` pairs
    pub transitions: &'static [(Direction, Direction)],
}

impl Rule {
    /// Number of loops that pass through a vertex with this configuration.
    #[inline]
    pub fn max_visits(&self) -> usize {
        self.exits.len()
    }

    /// Outgoing direction for a walker arriving along `incoming`.
    pub fn transition(&self, incoming: Direction) -> Option<Direction> {
        self.transitions
            .iter()
            .find(|(from, _)| *from == incoming)
            .map(|&(_, to)| to)
    }
}

/// Indexed by [`Neighborhood::bits`] (UL = 8, UR = 4, DL = 2, DR = 1).
pub const RULES: [Rule; 16] = [
    // 0b0000: all walkable
    Rule {
        exits: &[],
        transitions: &[],
    },
    // 0b0001: DR
    Rule {
        exits: &[Right],
        transitions: &[(Up, Right)],
    },
    // 0b0010: DL
    Rule {
        exits: &[Down],
        transitions: &[(Right, Down)],
    },
    // 0b0011: DL + DR
    Rule {
        exits: &[Right],
        transitions: &[(Right, Right)],
    },
    // 0b0100: UR
    Rule {
        exits: &[Up],
        transitions: &[(Left, Up)],
    },
    // 0b0101: UR + DR
    Rule {
        exits: &[Up],
        transitions: &[(Up, Up)],
    },
    // 0b0110: UR + DL (saddle)
    Rule {
        exits: &[Up, Down],
        transitions: &[(Right, Down), (Left, Up)],
    },
    // 0b0111: UR + DL + DR
    Rule {
        exits: &[Up],
        transitions: &[(Right, Up)],
    },
    // 0b1000: UL
    Rule {
        exits: &[Left],
        transitions: &[(Down, Left)],
    },
    // 0b1001: UL + DR (saddle)
    Rule {
        exits: &[Right, Left],
        transitions: &[(Down, Left), (Up, Right)],
    },
    // 0b1010: UL + DL
    Rule {
        exits: &[Down],
        transitions: &[(Down, Down)],
    },
    // 0b1011: UL + DL + DR
    Rule {
        exits: &[Right],
        transitions: &[(Down, Right)],
    },
    // 0b1100: UL + UR
    Rule {
        exits: &[Left],
        transitions: &[(Left, Left)],
    },
    // 0b1101: UL + UR + DR
    Rule {
        exits: &[Left],
        transitions: &[(Up, Left)],
    },
    // 0b1110: UL + UR + DL
    Rule {
        exits: &[Down],
        transitions: &[(Left, Down)],
    },
    // 0b1111: all blocked
    Rule {
        exits: &[],
        transitions: &[],
    },
];

/// Looks up the rule for a neighborhood.
#[inline]
pub fn rule(neighborhood: Neighborhood) -> &'static Rule {
    &RULES[usize::from(neighborhood.bits())]
}
