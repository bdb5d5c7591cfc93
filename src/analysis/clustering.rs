//! Grouping of functional blocks into connected subsystem clusters

use std::collections::VecDeque;

use crate::analysis::cache::{Analyzer, AnalyzerKind};
use crate::spatial::block::Subsystem;
use crate::spatial::direction::Direction;
use crate::spatial::structure::Structure;

/// Face-connected group of functional blocks sharing a subsystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Cluster id, assigned in order of each cluster's first block
    pub id: usize,
    /// Subsystem shared by all members
    pub subsystem: Subsystem,
    /// Member block indices in discovery order
    pub members: Vec<usize>,
}

/// Functional clusters of a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAnalyzer {
    clusters: Vec<Cluster>,
    cluster_of: Vec<Option<usize>>,
}

impl Analyzer for ClusterAnalyzer {
    const KIND: AnalyzerKind = AnalyzerKind::Clusters;

    fn analyze(structure: &Structure) -> Self {
        let mut clusters = Vec::new();
        let mut cluster_of = vec![None; structure.len()];

        for (seed, block) in structure.blocks().iter().enumerate() {
            let Some(subsystem) = block.subsystem() else {
                continue;
            };
            if cluster_of.get(seed).copied().flatten().is_some() {
                continue;
            }

            let id = clusters.len();
            let mut members = Vec::new();
            let mut queue = VecDeque::from([seed]);
            if let Some(slot) = cluster_of.get_mut(seed) {
                *slot = Some(id);
            }

            while let Some(index) = queue.pop_front() {
                members.push(index);
                let Some(current) = structure.block(index) else {
                    continue;
                };
                for direction in Direction::ALL {
                    let Some(neighbor) = structure.index_at(direction.step(current.position))
                    else {
                        continue;
                    };
                    let same_subsystem = structure
                        .block(neighbor)
                        .is_some_and(|b| b.subsystem() == Some(subsystem));
                    if !same_subsystem {
                        continue;
                    }
                    if let Some(slot) = cluster_of.get_mut(neighbor) {
                        if slot.is_none() {
                            *slot = Some(id);
                            queue.push_back(neighbor);
                        }
                    }
                }
            }

            clusters.push(Cluster {
                id,
                subsystem,
                members,
            });
        }

        Self {
            clusters,
            cluster_of,
        }
    }
}

impl ClusterAnalyzer {
    /// All clusters ordered by id
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Cluster id of block `index`, if it is functional
    pub fn cluster_of(&self, index: usize) -> Option<usize> {
        self.cluster_of.get(index).copied().flatten()
    }

    /// Cluster by id
    pub fn cluster(&self, id: usize) -> Option<&Cluster> {
        self.clusters.get(id)
    }

    /// Clusters belonging to `subsystem`
    pub fn by_subsystem(&self, subsystem: Subsystem) -> impl Iterator<Item = &Cluster> {
        self.clusters
            .iter()
            .filter(move |cluster| cluster.subsystem == subsystem)
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the structure has no functional blocks
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
