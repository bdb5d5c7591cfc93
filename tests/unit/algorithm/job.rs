//! Tests for job construction and job-scoped cache handling

#[cfg(test)]
mod tests {
    use gridpaint::algorithm::job::{PaintJob, PaintReport};
    use gridpaint::analysis::cache::AnalyzerCache;
    use gridpaint::analysis::shape::ShapeAnalyzer;
    use gridpaint::io::error::PaintError;
    use gridpaint::math::color::{Color, Palette};
    use gridpaint::spatial::block::Block;
    use gridpaint::spatial::raycast::VoxelRaycaster;
    use gridpaint::spatial::structure::{EntityId, Structure};

    fn column() -> Structure {
        let blocks = (0..3).map(|y| Block::armor([0, y, 0])).collect();
        Structure::new(EntityId(3), blocks).unwrap_or_else(|e| panic!("{e}"))
    }

    // Jobs start clean and pick up a collision capability on request
    // Verified by attaching the capability in new
    #[test]
    fn test_job_construction() {
        let structure = column();
        let palette = Palette::single(Color::WHITE);
        let job = PaintJob::new(&structure, &palette);
        assert!(!job.probe().has_collision());
        assert!(job.caches_are_clean());
        assert_eq!(job.structure().len(), 3);

        let raycaster = VoxelRaycaster::new(&structure);
        let job = PaintJob::new(&structure, &palette).with_collision(&raycaster);
        assert!(job.probe().has_collision());
        assert_eq!(job.palette().len(), 1);
    }

    // Splitting a job allocates one slot per factor
    // Verified by ignoring slot_count
    #[test]
    fn test_parts_allocates_slots() {
        let structure = column();
        let palette = Palette::single(Color::WHITE);
        let mut job = PaintJob::new(&structure, &palette);

        assert_eq!(job.parts(3).slots.len(), 3);
        assert!(job.slot(2).is_some());
        assert!(job.slot(3).is_none());
    }

    // Cleaning drops analyzers and slot contents
    // Verified by leaving the analyzer cache untouched
    #[test]
    fn test_clean_caches() {
        let structure = column();
        let palette = Palette::single(Color::WHITE);
        let mut analyzers = AnalyzerCache::new();
        let _shape = analyzers.analyzer::<ShapeAnalyzer>(&structure);
        let mut job = PaintJob::new(&structure, &palette).with_analyzers(analyzers);
        assert!(!job.caches_are_clean());

        let _ = job.analyzers_mut().analyzer::<ShapeAnalyzer>(&structure);
        job.clean_caches();
        assert!(job.caches_are_clean());
    }

    // Reports are clean only without cleanup failures
    // Verified by ignoring cleanup_failures in is_clean
    #[test]
    fn test_report_cleanliness() {
        let mut report = PaintReport {
            colors: std::collections::BTreeMap::new(),
            cleanup_failures: Vec::new(),
        };
        assert!(report.is_clean());
        report.cleanup_failures.push(PaintError::Cleanup {
            factor: "lights".to_string(),
            reason: "socket closed".to_string(),
        });
        assert!(!report.is_clean());
    }
}
