//! Tests for bounds, proportions and diagonal projection

#[cfg(test)]
mod tests {
    use gridpaint::analysis::cache::Analyzer;
    use gridpaint::analysis::shape::ShapeAnalyzer;
    use gridpaint::spatial::block::Block;
    use gridpaint::spatial::structure::{EntityId, Structure};

    fn slab() -> Structure {
        let mut blocks = Vec::new();
        for x in 0..4 {
            for z in 0..2 {
                blocks.push(Block::armor([x, 0, z]));
            }
        }
        Structure::new(EntityId(1), blocks).unwrap_or_else(|e| panic!("{e}"))
    }

    // Extents, fill ratio and dominant axis describe the slab
    // Verified by picking the smallest extent as dominant
    #[test]
    fn test_shape_metrics() {
        let shape = ShapeAnalyzer::analyze(&slab());
        assert_eq!(shape.extents, [4, 1, 2]);
        assert_eq!(shape.block_count, 8);
        assert!((shape.fill_ratio - 1.0).abs() < 1e-12);
        assert_eq!(shape.dominant_axis, 0);
        assert_eq!(shape.longest_extent(), 4);
        assert_eq!(shape.center, [1.5, 0.0, 0.5]);
    }

    // Diagonal projection runs from 0 at min to 1 at max
    // Verified by normalizing by the diagonal length instead of its square
    #[test]
    fn test_diagonal_fraction() {
        let shape = ShapeAnalyzer::analyze(&slab());
        assert!(shape.diagonal_fraction([0, 0, 0]).abs() < 1e-12);
        assert!((shape.diagonal_fraction([3, 0, 1]) - 1.0).abs() < 1e-12);
        let mid = shape.diagonal_fraction([1, 0, 1]);
        assert!(mid > 0.0 && mid < 1.0);
        assert!((shape.diagonal_fraction([9, 9, 9]) - 1.0).abs() < 1e-12);
    }

    // A single block has a zero diagonal and projects to 0
    // Verified by dividing by a zero length
    #[test]
    fn test_single_block_fraction() {
        let Ok(structure) = Structure::new(EntityId(1), vec![Block::armor([4, 4, 4])]) else {
            panic!("single block should build");
        };
        let shape = ShapeAnalyzer::analyze(&structure);
        assert!(shape.diagonal_fraction([4, 4, 4]).abs() < 1e-12);
    }
}
