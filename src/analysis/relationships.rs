//! Per-block neighbour relationships

use crate::analysis::cache::{Analyzer, AnalyzerKind};
use crate::io::configuration::EDGE_EMPTY_NEIGHBOR_THRESHOLD;
use crate::spatial::direction::Direction;
use crate::spatial::structure::Structure;

/// Six-bit occupied-neighbour masks for every block, indexed like the structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipAnalyzer {
    masks: Vec<u8>,
}

impl Analyzer for RelationshipAnalyzer {
    const KIND: AnalyzerKind = AnalyzerKind::Relationships;

    fn analyze(structure: &Structure) -> Self {
        let masks = structure
            .blocks()
            .iter()
            .map(|block| {
                Direction::ALL
                    .iter()
                    .filter(|direction| structure.is_occupied(direction.step(block.position)))
                    .fold(0_u8, |mask, direction| mask | direction.bit())
            })
            .collect();
        Self { masks }
    }
}

impl RelationshipAnalyzer {
    /// Occupied-neighbour mask of block `index` (bits from [`Direction::bit`])
    pub fn mask(&self, index: usize) -> u8 {
        self.masks.get(index).copied().unwrap_or(0)
    }

    /// Whether block `index` has a neighbour in `direction`
    pub fn has_neighbor(&self, index: usize, direction: Direction) -> bool {
        self.mask(index) & direction.bit() != 0
    }

    /// Occupied orthogonal neighbours of block `index`
    pub fn neighbor_count(&self, index: usize) -> usize {
        self.mask(index).count_ones() as usize
    }

    /// Empty orthogonal neighbours of block `index`
    pub fn empty_neighbor_count(&self, index: usize) -> usize {
        Direction::ALL.len() - self.neighbor_count(index)
    }

    /// Whether block `index` has at least two empty neighbours
    pub fn is_edge(&self, index: usize) -> bool {
        self.empty_neighbor_count(index) >= EDGE_EMPTY_NEIGHBOR_THRESHOLD
    }

    /// Number of edge blocks
    pub fn edge_count(&self) -> usize {
        (0..self.masks.len()).filter(|&index| self.is_edge(index)).count()
    }
}
