//! Tests for pattern overlays and cluster coloring

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gridpaint::algorithm::job::PaintJob;
    use gridpaint::algorithm::overlay::{ClusterFactor, PatternOverlay};
    use gridpaint::algorithm::pipeline::FactorPipeline;
    use gridpaint::algorithm::selector::BlockSelector;
    use gridpaint::io::error::Result;
    use gridpaint::math::color::{Color, Palette};
    use gridpaint::pattern::builtin::Checker;
    use gridpaint::pattern::parameters::PatternParameters;
    use gridpaint::pattern::strategy::{IndexMap, PatternStrategy};
    use gridpaint::spatial::block::{Block, BlockCategory, Position};
    use gridpaint::spatial::structure::{EntityId, Structure};

    #[derive(Debug, Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl PatternStrategy for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn description(&self) -> &str {
            "Assigns the last chosen index and counts calls"
        }

        fn generate(
            &self,
            _structure: &Structure,
            positions: &[Position],
            color_indices: &[usize],
            _parameters: &PatternParameters,
        ) -> Result<IndexMap> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index = color_indices.last().copied().unwrap_or(0);
            Ok(positions.iter().map(|&p| (p, index)).collect())
        }
    }

    fn rgb() -> Palette {
        Palette::new(vec![Color::RED, Color::GREEN, Color::BLUE]).unwrap_or_else(|e| panic!("{e}"))
    }

    fn row_with_window() -> Structure {
        let mut blocks: Vec<Block> = (0..4).map(|x| Block::armor([x, 0, 0])).collect();
        blocks.push(Block::new([0, 1, 0], BlockCategory::Window));
        Structure::new(EntityId(1), blocks).unwrap_or_else(|e| panic!("{e}"))
    }

    // Selected blocks take the pattern index and the rest keep their color
    // Verified by applying the overlay to every block
    #[test]
    fn test_checker_on_selected_blocks() {
        let structure = row_with_window();
        let palette = rgb();
        let overlay = PatternOverlay::new(
            Arc::new(Checker),
            BlockSelector::Categories(vec![BlockCategory::LightArmor]),
            vec![1, 2],
            PatternParameters::default().with_scale(1.0, 1.0),
        );
        let pipeline = FactorPipeline::new().with(Arc::new(overlay));
        let mut job = PaintJob::new(&structure, &palette);
        let report = pipeline.apply(&mut job).unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(report.colors.get(&[0, 0, 0]), Some(&Color::GREEN));
        assert_eq!(report.colors.get(&[1, 0, 0]), Some(&Color::BLUE));
        assert_eq!(report.colors.get(&[2, 0, 0]), Some(&Color::GREEN));
        assert_eq!(report.colors.get(&[0, 1, 0]), Some(&Color::RED));
        assert_eq!(pipeline.names(), vec!["checker"]);
        assert!(job.caches_are_clean());
    }

    // The index map is generated once per job
    // Verified by regenerating the map for every block
    #[test]
    fn test_generated_once_per_job() {
        let structure = row_with_window();
        let palette = rgb();
        let strategy = Arc::new(Counting::default());
        let overlay = PatternOverlay::new(
            Arc::clone(&strategy) as Arc<dyn PatternStrategy>,
            BlockSelector::All,
            vec![0, 2],
            PatternParameters::default(),
        );
        assert_eq!(overlay.selector(), &BlockSelector::All);
        let pipeline = FactorPipeline::new().with(Arc::new(overlay));

        for run in 1..=2 {
            let mut job = PaintJob::new(&structure, &palette);
            let report = pipeline.apply(&mut job).unwrap_or_else(|e| panic!("{e}"));
            assert!(report.colors.values().all(|&c| c == Color::BLUE));
            assert_eq!(strategy.calls.load(Ordering::SeqCst), run);
        }
    }

    // Each functional cluster gets its own palette entry
    // Verified by keying cluster colors on subsystem
    #[test]
    fn test_cluster_colors() {
        let blocks = vec![
            Block::new([0, 0, 0], BlockCategory::Thruster),
            Block::new([1, 0, 0], BlockCategory::Thruster),
            Block::armor([2, 0, 0]),
            Block::new([3, 0, 0], BlockCategory::Thruster),
            Block::new([3, 1, 0], BlockCategory::Light),
        ];
        let structure = Structure::new(EntityId(1), blocks).unwrap_or_else(|e| panic!("{e}"));
        let palette = Palette::new(vec![Color::WHITE, Color::RED, Color::GREEN])
            .unwrap_or_else(|e| panic!("{e}"));
        let pipeline = FactorPipeline::new().with(Arc::new(ClusterFactor));
        let mut job = PaintJob::new(&structure, &palette);
        let colors = pipeline
            .apply(&mut job)
            .unwrap_or_else(|e| panic!("{e}"))
            .colors;

        assert_eq!(colors.get(&[0, 0, 0]), Some(&Color::WHITE));
        assert_eq!(colors.get(&[1, 0, 0]), Some(&Color::WHITE));
        assert_eq!(colors.get(&[3, 0, 0]), Some(&Color::RED));
        assert_eq!(colors.get(&[3, 1, 0]), Some(&Color::GREEN));
        assert_eq!(colors.get(&[2, 0, 0]), Some(&Color::WHITE));
    }
}
