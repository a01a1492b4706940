//! Signed axis remapping between the internal frame and the output frame.

use crate::error::{WallMeshError, WallMeshResult};
use config::constants::DEFAULT_AXIS_REMAP;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Internal x (columns)
    X,
    /// Internal y (rows)
    Y,
    /// Internal z (extrusion)
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    fn name(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// An axis with a sign, written `+x`, `-z`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedAxis {
    /// Source axis in the internal frame
    pub axis: Axis,
    /// True if the component is negated
    pub negated: bool,
}

impl SignedAxis {
    /// Reads this signed component from an internal-frame vector.
    #[inline]
    pub fn pick(self, v: DVec3) -> f64 {
        let value = v[self.axis.index()];
        if self.negated {
            -value
        } else {
            value
        }
    }
}

impl FromStr for SignedAxis {
    type Err = WallMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negated, name) = match trimmed.as_bytes() {
            [b'+', rest @ ..] => (false, rest),
            [b'-', rest @ ..] => (true, rest),
            rest => (false, rest),
        };
        let axis = match name {
            [b'x' | b'X'] => Axis::X,
            [b'y' | b'Y'] => Axis::Y,
            [b'z' | b'Z'] => Axis::Z,
            _ => {
                return Err(WallMeshError::invalid_axis_remap(format!(
                    "'{trimmed}' is not one of +x, -x, +y, -y, +z, -z"
                )))
            }
        };
        Ok(Self { axis, negated })
    }
}

impl fmt::Display for SignedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negated { '-' } else { '+' };
        write!(f, "{sign}{}", self.axis.name())
    }
}

/// Maps internal `(x, y, z)` to output `(right, forward, up)`.
///
/// Each output component takes one signed internal axis; every axis is
/// used exactly once.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wallmesh::AxisRemap;
///
/// let remap: AxisRemap = "+x,-z,+y".parse().unwrap();
/// assert_eq!(remap.apply(DVec3::new(2.0, -1.0, 3.0)), DVec3::new(2.0, -3.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AxisRemap {
    components: [SignedAxis; 3],
}

impl AxisRemap {
    /// The identity mapping `+x +y +z`.
    pub const IDENTITY: AxisRemap = AxisRemap {
        components: [
            SignedAxis {
                axis: Axis::X,
                negated: false,
            },
            SignedAxis {
                axis: Axis::Y,
                negated: false,
            },
            SignedAxis {
                axis: Axis::Z,
                negated: false,
            },
        ],
    };

    /// Builds a remap from three signed axes, rejecting reused axes.
    pub fn new(components: [SignedAxis; 3]) -> WallMeshResult<Self> {
        let [a, b, c] = components.map(|s| s.axis);
        if a == b || a == c || b == c {
            return Err(WallMeshError::invalid_axis_remap(format!(
                "axes must be distinct, got {}, {}, {}",
                components[0], components[1], components[2]
            )));
        }
        Ok(Self { components })
    }

    /// Parses three readable components such as `["+x", "+z", "+y"]`.
    pub fn parse<S: AsRef<str>>(readable: &[S]) -> WallMeshResult<Self> {
        let [a, b, c] = readable else {
            return Err(WallMeshError::invalid_axis_remap(format!(
                "expected 3 components, got {}",
                readable.len()
            )));
        };
        Self::new([a.as_ref().parse()?, b.as_ref().parse()?, c.as_ref().parse()?])
    }

    /// Signed components in output order.
    #[inline]
    pub fn components(&self) -> [SignedAxis; 3] {
        self.components
    }

    /// Maps an internal-frame point into the output frame.
    pub fn apply(&self, v: DVec3) -> DVec3 {
        let [a, b, c] = self.components;
        DVec3::new(a.pick(v), b.pick(v), c.pick(v))
    }

    /// Determinant of the (signed permutation) matrix: `1` or `-1`.
    pub fn determinant(&self) -> i32 {
        let [a, b, c] = self.components.map(|s| s.axis.index());
        // Parity of the permutation (a, b, c) of (0, 1, 2).
        let inversions = usize::from(a > b) + usize::from(a > c) + usize::from(b > c);
        let mut det = if inversions % 2 == 0 { 1 } else { -1 };
        for component in self.components {
            if component.negated {
                det = -det;
            }
        }
        det
    }

    /// True if the remap reverses handedness, which flips face winding.
    #[inline]
    pub fn is_mirroring(&self) -> bool {
        self.determinant() < 0
    }
}

impl Default for AxisRemap {
    fn default() -> Self {
        // The constant is checked by the config crate's tests.
        Self::parse(&DEFAULT_AXIS_REMAP).unwrap_or(Self::IDENTITY)
    }
}

impl FromStr for AxisRemap {
    type Err = WallMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::parse(parts.as_slice())
    }
}

impl TryFrom<Vec<String>> for AxisRemap {
    type Error = WallMeshError;

    fn try_from(readable: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(readable.as_slice())
    }
}

impl From<AxisRemap> for Vec<String> {
    fn from(remap: AxisRemap) -> Self {
        remap.components.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for AxisRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.components;
        write!(f, "{a},{b},{c}")
    }
}
