//! Tests for functional clustering by subsystem

#[cfg(test)]
mod tests {
    use gridpaint::analysis::cache::Analyzer;
    use gridpaint::analysis::clustering::ClusterAnalyzer;
    use gridpaint::spatial::block::{Block, BlockCategory, Subsystem};
    use gridpaint::spatial::structure::{EntityId, Structure};

    fn mixed() -> Structure {
        let blocks = vec![
            Block::new([0, 0, 0], BlockCategory::Thruster),
            Block::new([1, 0, 0], BlockCategory::Thruster),
            Block::armor([2, 0, 0]),
            Block::new([3, 0, 0], BlockCategory::Thruster),
            Block::new([0, 1, 0], BlockCategory::Reactor),
            Block::new([1, 1, 0], BlockCategory::Battery),
            Block::new([2, 1, 0], BlockCategory::Light).with_functional(false),
        ];
        Structure::new(EntityId(1), blocks).unwrap_or_else(|e| panic!("{e}"))
    }

    // Touching blocks of one subsystem form a single cluster
    // Verified by using 26-connectivity
    #[test]
    fn test_clusters_split_by_gap_and_subsystem() {
        let clusters = ClusterAnalyzer::analyze(&mixed());
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters.cluster_of(0), clusters.cluster_of(1));
        assert_ne!(clusters.cluster_of(0), clusters.cluster_of(3));
        assert_eq!(clusters.cluster_of(4), clusters.cluster_of(5));
        assert_ne!(clusters.cluster_of(0), clusters.cluster_of(4));
    }

    // Structural and disabled blocks stay unclustered
    // Verified by clustering every block regardless of subsystem
    #[test]
    fn test_non_functional_blocks_unclustered() {
        let clusters = ClusterAnalyzer::analyze(&mixed());
        assert_eq!(clusters.cluster_of(2), None);
        assert_eq!(clusters.cluster_of(6), None);
        assert_eq!(clusters.by_subsystem(Subsystem::Propulsion).count(), 2);
        assert_eq!(
            clusters.cluster(0).map(|c| c.members.clone()),
            Some(vec![0, 1])
        );
    }

    // Structures without functional blocks have no clusters
    // Verified by creating an empty cluster per structure
    #[test]
    fn test_no_functional_blocks() {
        let Ok(structure) = Structure::new(EntityId(1), vec![Block::armor([0, 0, 0])]) else {
            panic!("single block should build");
        };
        assert!(ClusterAnalyzer::analyze(&structure).is_empty());
    }
}
