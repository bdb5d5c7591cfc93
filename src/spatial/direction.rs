//! The six axis-aligned directions of the block grid

use serde::{Deserialize, Serialize};

use crate::spatial::block::Position;

/// Axis-aligned unit direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Positive X
    PosX,
    /// Negative X
    NegX,
    /// Positive Y
    PosY,
    /// Negative Y
    NegY,
    /// Positive Z
    PosZ,
    /// Negative Z
    NegZ,
}

impl Direction {
    /// All six directions in probing order
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Integer offset of the neighbouring cell
    pub const fn offset(self) -> Position {
        match self {
            Self::PosX => [1, 0, 0],
            Self::NegX => [-1, 0, 0],
            Self::PosY => [0, 1, 0],
            Self::NegY => [0, -1, 0],
            Self::PosZ => [0, 0, 1],
            Self::NegZ => [0, 0, -1],
        }
    }

    /// Offset as a floating point vector
    pub fn vector(self) -> [f64; 3] {
        let [x, y, z] = self.offset();
        [f64::from(x), f64::from(y), f64::from(z)]
    }

    /// Axis index (0 = X, 1 = Y, 2 = Z)
    pub const fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Bit used for this direction in six-bit neighbour masks
    pub const fn bit(self) -> u8 {
        match self {
            Self::PosX => 1,
            Self::NegX => 1 << 1,
            Self::PosY => 1 << 2,
            Self::NegY => 1 << 3,
            Self::PosZ => 1 << 4,
            Self::NegZ => 1 << 5,
        }
    }

    /// Cell adjacent to `position` in this direction
    pub const fn step(self, position: Position) -> Position {
        let offset = self.offset();
        [
            position[0] + offset[0],
            position[1] + offset[1],
            position[2] + offset[2],
        ]
    }

    /// Direction whose unit offset equals `offset`
    pub fn from_offset(offset: Position) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.offset() == offset)
    }

    /// Cross product of two directions, `None` when they are parallel
    pub fn cross(self, other: Self) -> Option<Self> {
        let a = self.offset();
        let b = other.offset();
        Self::from_offset([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    /// Positive or negative direction along `axis` (0 = X, 1 = Y, 2 = Z)
    pub const fn along(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, true) => Self::PosX,
            (0, false) => Self::NegX,
            (1, true) => Self::PosY,
            (1, false) => Self::NegY,
            (_, true) => Self::PosZ,
            (_, false) => Self::NegZ,
        }
    }
}
