//! Read-only snapshot of a modular structure
//!
//! Blocks keep their caller-supplied order. Occupancy is backed by a dense
//! volume over the bounding box storing `block index + 1` per cell, with 0
//! marking empty cells, so neighbour and ray queries are constant-time lookups.

use std::collections::HashSet;

use ndarray::Array3;

use crate::io::configuration::{DEFAULT_CELL_SIZE, MAX_OCCUPANCY_CELLS};
use crate::io::error::{Result, invalid_argument};
use crate::spatial::block::{Block, Position};

/// Identifier of a physical entity as reported by collision queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Axis-aligned integer bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Position,
    /// Maximum coordinates (inclusive)
    pub max: Position,
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: Position) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
            && pos[2] >= self.min[2]
            && pos[2] <= self.max[2]
    }

    /// Vector from `min` to `max`
    pub fn diagonal(&self) -> [f64; 3] {
        [
            f64::from(self.max[0]) - f64::from(self.min[0]),
            f64::from(self.max[1]) - f64::from(self.min[1]),
            f64::from(self.max[2]) - f64::from(self.min[2]),
        ]
    }

    /// Geometric center in cell coordinates
    pub fn center(&self) -> [f64; 3] {
        [
            f64::midpoint(f64::from(self.min[0]), f64::from(self.max[0])),
            f64::midpoint(f64::from(self.min[1]), f64::from(self.max[1])),
            f64::midpoint(f64::from(self.min[2]), f64::from(self.max[2])),
        ]
    }
}

/// Modular 3D structure made of unit blocks
#[derive(Debug, Clone)]
pub struct Structure {
    id: EntityId,
    blocks: Vec<Block>,
    bounds: BoundingBox,
    size: [u32; 3],
    /// Block references per cell (0 = empty, 1+ = block index + 1)
    occupancy: Array3<u32>,
    cell_size: f64,
    world_origin: [f64; 3],
}

impl Structure {
    /// Build a structure snapshot from its blocks
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if two blocks share a position, if a block
    /// sits on the edge of the `i32` coordinate range, or if the bounding box
    /// spans more than [`MAX_OCCUPANCY_CELLS`] cells
    pub fn new(id: EntityId, blocks: Vec<Block>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if !seen.insert(block.position) {
                return Err(invalid_argument(
                    "blocks",
                    &format!("duplicate block at {:?}", block.position),
                ));
            }
        }

        let bounds = compute_bounds(&blocks);
        let size = if blocks.is_empty() {
            [0, 0, 0]
        } else {
            checked_size(&bounds)?
        };

        let mut occupancy = Array3::zeros((size[0] as usize, size[1] as usize, size[2] as usize));
        for (index, block) in blocks.iter().enumerate() {
            let local = local_index(&bounds, block.position);
            if let Some(cell) = local.and_then(|l| occupancy.get_mut(l)) {
                *cell = index as u32 + 1;
            }
        }

        Ok(Self {
            id,
            blocks,
            bounds,
            size,
            occupancy,
            cell_size: DEFAULT_CELL_SIZE,
            world_origin: [0.0; 3],
        })
    }

    /// Set the world-space edge length of one cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the size is not a positive finite number
    pub fn with_cell_size(mut self, cell_size: f64) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(invalid_argument(
                "cell_size",
                &format!("must be positive and finite, got {cell_size}"),
            ));
        }
        self.cell_size = cell_size;
        Ok(self)
    }

    /// Set the world-space position of cell `[0, 0, 0]`
    #[must_use]
    pub fn with_world_origin(mut self, origin: [f64; 3]) -> Self {
        self.world_origin = origin;
        self
    }

    /// Entity id reported by collision queries for this structure
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Blocks in caller order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block by index
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Number of blocks
    pub const fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the structure has no blocks
    pub const fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Inclusive bounding box (all zeros for an empty structure)
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Cell counts along each axis (all zeros for an empty structure)
    pub const fn size(&self) -> [u32; 3] {
        self.size
    }

    /// Whether any axis has zero extent
    pub const fn is_degenerate(&self) -> bool {
        self.size[0] == 0 || self.size[1] == 0 || self.size[2] == 0
    }

    /// World-space edge length of one cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// World-space position of cell `[0, 0, 0]`
    pub const fn world_origin(&self) -> [f64; 3] {
        self.world_origin
    }

    /// Index of the block occupying `position`
    pub fn index_at(&self, position: Position) -> Option<usize> {
        let local = local_index(&self.bounds, position)?;
        match self.occupancy.get(local).copied() {
            Some(0) | None => None,
            Some(reference) => Some(reference as usize - 1),
        }
    }

    /// Block occupying `position`
    pub fn block_at(&self, position: Position) -> Option<&Block> {
        self.index_at(position).and_then(|index| self.blocks.get(index))
    }

    /// Occupancy query
    pub fn is_occupied(&self, position: Position) -> bool {
        self.index_at(position).is_some()
    }

    /// World-space center of a cell
    pub fn world_position(&self, position: Position) -> [f64; 3] {
        [
            f64::from(position[0]).mul_add(self.cell_size, self.world_origin[0]),
            f64::from(position[1]).mul_add(self.cell_size, self.world_origin[1]),
            f64::from(position[2]).mul_add(self.cell_size, self.world_origin[2]),
        ]
    }

    /// Cell containing a world-space point
    pub fn cell_at(&self, point: [f64; 3]) -> Position {
        [
            ((point[0] - self.world_origin[0]) / self.cell_size).round() as i32,
            ((point[1] - self.world_origin[1]) / self.cell_size).round() as i32,
            ((point[2] - self.world_origin[2]) / self.cell_size).round() as i32,
        ]
    }
}

fn compute_bounds(blocks: &[Block]) -> BoundingBox {
    let Some(first) = blocks.first() else {
        return BoundingBox {
            min: [0; 3],
            max: [0; 3],
        };
    };

    let mut min = first.position;
    let mut max = first.position;
    for block in blocks {
        for axis in 0..3 {
            min[axis] = min[axis].min(block.position[axis]);
            max[axis] = max[axis].max(block.position[axis]);
        }
    }
    BoundingBox { min, max }
}

/// Per-axis extent of non-empty bounds, rejecting volumes the dense
/// occupancy cannot hold
///
/// Blocks keep two cells of headroom to the `i32` limits so the padded
/// surface volume and the neighbour steps out of it stay representable.
fn checked_size(bounds: &BoundingBox) -> Result<[u32; 3]> {
    let mut size = [0_u32; 3];
    for axis in 0..3 {
        let (min, max) = (bounds.min[axis], bounds.max[axis]);
        if min.checked_sub(2).is_none() || max.checked_add(2).is_none() {
            return Err(invalid_argument(
                "blocks",
                &format!("coordinate on axis {axis} leaves no room for neighbours ({min}..={max})"),
            ));
        }
        size[axis] = max
            .checked_sub(min)
            .and_then(|span| span.checked_add(1))
            .and_then(|extent| u32::try_from(extent).ok())
            .ok_or_else(|| {
                invalid_argument(
                    "blocks",
                    &format!("extent on axis {axis} overflows ({min}..={max})"),
                )
            })?;
    }

    let volume = size
        .iter()
        .try_fold(1_u64, |volume, &extent| volume.checked_mul(u64::from(extent)))
        .filter(|&volume| volume <= MAX_OCCUPANCY_CELLS);
    if volume.is_none() {
        return Err(invalid_argument(
            "blocks",
            &format!("bounding box {size:?} exceeds {MAX_OCCUPANCY_CELLS} cells"),
        ));
    }
    Ok(size)
}

fn local_index(bounds: &BoundingBox, position: Position) -> Option<[usize; 3]> {
    if !bounds.contains(position) {
        return None;
    }
    Some([
        (position[0] - bounds.min[0]) as usize,
        (position[1] - bounds.min[1]) as usize,
        (position[2] - bounds.min[2]) as usize,
    ])
}
