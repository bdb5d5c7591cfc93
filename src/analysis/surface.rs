//! Outer surface membership by flood fill of exterior air
//!
//! Empty space is flooded from a corner of the bounding box padded by one cell,
//! which is always empty. Blocks touching flooded air form the outer shell;
//! empty pockets enclosed by the hull are never reached, so blocks bordering
//! only such pockets stay off the surface.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::analysis::cache::{Analyzer, AnalyzerKind};
use crate::spatial::block::Position;
use crate::spatial::direction::Direction;
use crate::spatial::structure::Structure;

/// Outer surface membership for every block
#[derive(Debug, Clone)]
pub struct SurfaceAnalyzer {
    /// Surface flag per block index
    members: BitVec,
    /// Reachable outside air over the padded volume
    outside_air: BitVec,
    /// Minimum corner of the padded volume
    padded_min: Position,
    /// Dimensions of the padded volume
    padded_size: [usize; 3],
}

impl Analyzer for SurfaceAnalyzer {
    const KIND: AnalyzerKind = AnalyzerKind::Surface;

    fn analyze(structure: &Structure) -> Self {
        let bounds = structure.bounds();
        let size = structure.size();
        let padded_min = bounds.min.map(|coordinate| coordinate.saturating_sub(1));
        let padded_size = size.map(|extent| extent as usize + 2);
        // Structures cap their volume, so this only fails on hosts with a tiny usize
        let Some(volume) = padded_size
            .iter()
            .try_fold(1_usize, |volume, &extent| volume.checked_mul(extent))
        else {
            return Self::all_surface(structure.len());
        };

        let mut analyzer = Self {
            members: bitvec![0; structure.len()],
            outside_air: bitvec![0; volume],
            padded_min,
            padded_size,
        };

        let mut queue = VecDeque::new();
        analyzer.mark_air(padded_min);
        queue.push_back(padded_min);

        while let Some(cell) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = direction.step(cell);
                let Some(flat) = analyzer.flat_index(next) else {
                    continue;
                };
                if analyzer.outside_air.get(flat).as_deref() == Some(&true)
                    || structure.is_occupied(next)
                {
                    continue;
                }
                analyzer.outside_air.set(flat, true);
                queue.push_back(next);
            }
        }

        for (index, block) in structure.blocks().iter().enumerate() {
            let touches_air = Direction::ALL
                .iter()
                .any(|direction| analyzer.is_outside_air(direction.step(block.position)));
            analyzer.members.set(index, touches_air);
        }

        analyzer
    }
}

impl SurfaceAnalyzer {
    /// Every block on the surface and every cell outside
    fn all_surface(blocks: usize) -> Self {
        Self {
            members: bitvec![1; blocks],
            outside_air: BitVec::new(),
            padded_min: [0; 3],
            padded_size: [0; 3],
        }
    }

    fn flat_index(&self, position: Position) -> Option<usize> {
        let mut local = [0_usize; 3];
        for axis in 0..3 {
            let offset = position[axis].checked_sub(self.padded_min[axis])?;
            if offset < 0 || offset as usize >= self.padded_size[axis] {
                return None;
            }
            local[axis] = offset as usize;
        }
        Some((local[0] * self.padded_size[1] + local[1]) * self.padded_size[2] + local[2])
    }

    fn mark_air(&mut self, position: Position) {
        if let Some(flat) = self.flat_index(position) {
            self.outside_air.set(flat, true);
        }
    }

    /// Whether `position` is empty space connected to the outside
    ///
    /// Cells beyond the padded volume are always outside air.
    pub fn is_outside_air(&self, position: Position) -> bool {
        self.flat_index(position)
            .is_none_or(|flat| self.outside_air.get(flat).as_deref() == Some(&true))
    }

    /// Whether block `index` belongs to the outer surface
    pub fn is_surface(&self, index: usize) -> bool {
        self.members.get(index).as_deref() == Some(&true)
    }

    /// Number of surface blocks
    pub fn surface_count(&self) -> usize {
        self.members.count_ones()
    }

    /// Indices of surface blocks in structure order
    pub fn surface_indices(&self) -> Vec<usize> {
        self.members.iter_ones().collect()
    }
}
