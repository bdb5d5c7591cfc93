//! Block groups that factors and pattern overlays can target

use serde::{Deserialize, Serialize};

use crate::algorithm::factor::FactorScope;
use crate::analysis::clustering::ClusterAnalyzer;
use crate::analysis::relationships::RelationshipAnalyzer;
use crate::analysis::surface::SurfaceAnalyzer;
use crate::spatial::block::{Block, BlockCategory, Position, Subsystem};

/// Predicate selecting a group of blocks within a structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockSelector {
    /// Every block
    All,
    /// Blocks the probe classifies as exterior
    Exterior,
    /// Blocks the probe classifies as interior
    Interior,
    /// Blocks with at least two empty neighbours
    Edges,
    /// Blocks touching air connected to the outside
    OuterSurface,
    /// Blocks hosting a functional sub-entity
    Functional,
    /// Functional blocks that belong to a cluster of this subsystem
    Subsystem(Subsystem),
    /// Blocks of any of these categories
    Categories(Vec<BlockCategory>),
}

impl BlockSelector {
    /// Whether `block` belongs to the group
    pub fn matches(&self, block: &Block, scope: &mut FactorScope<'_, '_>) -> bool {
        match self {
            Self::All => true,
            Self::Exterior => scope.is_exterior(block),
            Self::Interior => !scope.is_exterior(block),
            Self::Edges => {
                let relationships = scope.analyzer::<RelationshipAnalyzer>();
                scope
                    .structure
                    .index_at(block.position)
                    .is_some_and(|index| relationships.is_edge(index))
            }
            Self::OuterSurface => {
                let surface = scope.analyzer::<SurfaceAnalyzer>();
                scope
                    .structure
                    .index_at(block.position)
                    .is_some_and(|index| surface.is_surface(index))
            }
            Self::Functional => block.functional,
            Self::Subsystem(subsystem) => {
                let clusters = scope.analyzer::<ClusterAnalyzer>();
                scope
                    .structure
                    .index_at(block.position)
                    .and_then(|index| clusters.cluster_of(index))
                    .and_then(|id| clusters.cluster(id))
                    .is_some_and(|cluster| cluster.subsystem == *subsystem)
            }
            Self::Categories(categories) => categories.contains(&block.category),
        }
    }

    /// Positions of every matching block in structure order
    pub fn select(&self, scope: &mut FactorScope<'_, '_>) -> Vec<Position> {
        let structure = scope.structure;
        structure
            .blocks()
            .iter()
            .filter(|block| self.matches(block, scope))
            .map(|block| block.position)
            .collect()
    }
}
