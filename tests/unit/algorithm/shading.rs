//! Tests for exterior shading and edge highlighting

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gridpaint::algorithm::factor::ColorFactor;
    use gridpaint::algorithm::job::PaintJob;
    use gridpaint::algorithm::pipeline::FactorPipeline;
    use gridpaint::algorithm::shading::{EdgeFactor, ShadingFactor};
    use gridpaint::math::color::{Color, Palette};
    use gridpaint::spatial::block::Block;
    use gridpaint::spatial::raycast::VoxelRaycaster;
    use gridpaint::spatial::structure::{EntityId, Structure};

    fn cube() -> Structure {
        let mut blocks = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    blocks.push(Block::armor([x, y, z]));
                }
            }
        }
        Structure::new(EntityId(1), blocks).unwrap_or_else(|e| panic!("{e}"))
    }

    // Exterior blocks darken and the enclosed core lightens
    // Verified by swapping the two branches
    #[test]
    fn test_shading_by_exposure() {
        let structure = cube();
        let palette = Palette::single(Color::RED);
        let raycaster = VoxelRaycaster::new(&structure);
        let pipeline = FactorPipeline::new().with(Arc::new(ShadingFactor::default()));
        let mut job = PaintJob::new(&structure, &palette).with_collision(&raycaster);
        let colors = pipeline
            .apply(&mut job)
            .unwrap_or_else(|e| panic!("{e}"))
            .colors;

        assert_eq!(colors.get(&[1, 1, 1]), Some(&Color::new(255, 51, 51)));
        let darkened = colors.values().filter(|&&c| c == Color::new(204, 0, 0)).count();
        assert_eq!(darkened, 26);
    }

    // Amounts outside the unit interval are rejected
    // Verified by clamping instead of failing
    #[test]
    fn test_amount_validation() {
        assert!(ShadingFactor::new(0.5, 0.0).is_ok());
        assert!(ShadingFactor::new(-0.1, 0.2).is_err_and(|e| e.is_invalid_argument()));
        assert!(ShadingFactor::new(0.2, f32::NAN).is_err());
        assert!(EdgeFactor::new(1.01).is_err());

        let shading = ShadingFactor::default();
        assert!((shading.exterior_darken() - 0.2).abs() < f32::EPSILON);
        assert_eq!(shading.name(), "shading");
    }

    // Only blocks with two or more empty neighbours are highlighted
    // Verified by lowering the edge threshold to one
    #[test]
    fn test_edge_highlight() {
        let structure = cube();
        let palette = Palette::single(Color::BLACK);
        let edge = EdgeFactor::new(0.5).unwrap_or_else(|e| panic!("{e}"));
        let pipeline = FactorPipeline::new().with(Arc::new(edge));
        let mut job = PaintJob::new(&structure, &palette);
        let colors = pipeline
            .apply(&mut job)
            .unwrap_or_else(|e| panic!("{e}"))
            .colors;

        let grey = Color::new(128, 128, 128);
        assert_eq!(colors.get(&[0, 0, 0]), Some(&grey));
        assert_eq!(colors.get(&[1, 0, 0]), Some(&grey));
        assert_eq!(colors.get(&[1, 1, 0]), Some(&Color::BLACK));
        assert_eq!(colors.values().filter(|&&c| c == grey).count(), 20);
    }
}
