//! Job-scoped painting context
//!
//! A job borrows the structure and palette for one paint run and owns every
//! cache that run produces. Nothing in it is shared with other jobs.

use std::collections::BTreeMap;

use crate::algorithm::cache::FactorCache;
use crate::analysis::cache::AnalyzerCache;
use crate::io::error::PaintError;
use crate::math::color::{Color, Palette};
use crate::spatial::block::Position;
use crate::spatial::probe::{CollisionCapability, SpatialProbe};
use crate::spatial::structure::Structure;

/// Final color per block position
pub type ColorMap = BTreeMap<Position, Color>;

/// Receives progress while a job runs
pub trait PaintObserver {
    /// Called after each block has been colored
    fn block_painted(&self, painted: usize, total: usize);

    /// Called once the pass over all blocks has finished
    fn job_finished(&self, _total: usize) {}
}

/// Outcome of a completed job
#[derive(Debug)]
pub struct PaintReport {
    /// Final color per block position
    pub colors: ColorMap,
    /// Factors whose cleanup failed; the colors are still valid
    pub cleanup_failures: Vec<PaintError>,
}

impl PaintReport {
    /// Whether every factor cleaned up successfully
    pub fn is_clean(&self) -> bool {
        self.cleanup_failures.is_empty()
    }
}

/// Context of one paint run over one structure
pub struct PaintJob<'a> {
    structure: &'a Structure,
    palette: &'a Palette,
    probe: SpatialProbe<'a>,
    analyzers: AnalyzerCache,
    slots: Vec<FactorCache>,
    observer: Option<&'a dyn PaintObserver>,
}

impl std::fmt::Debug for PaintJob<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintJob")
            .field("blocks", &self.structure.len())
            .field("palette", &self.palette.len())
            .field("probe", &self.probe)
            .field("analyzers", &self.analyzers)
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

/// Borrowed pieces of a job handed to the pipeline
pub struct JobParts<'s, 'a> {
    /// Structure being painted
    pub structure: &'a Structure,
    /// Palette of the job
    pub palette: &'a Palette,
    /// Exterior and edge classifier
    pub probe: &'s SpatialProbe<'a>,
    /// Shared analyzer cache
    pub analyzers: &'s mut AnalyzerCache,
    /// One cache slot per registered factor
    pub slots: &'s mut [FactorCache],
    /// Optional progress observer
    pub observer: Option<&'a dyn PaintObserver>,
}

impl<'a> PaintJob<'a> {
    /// Start a job without a collision capability
    ///
    /// Until [`Self::with_collision`] is called every block probes as exterior.
    pub fn new(structure: &'a Structure, palette: &'a Palette) -> Self {
        Self {
            structure,
            palette,
            probe: SpatialProbe::without_collision(),
            analyzers: AnalyzerCache::new(),
            slots: Vec::new(),
            observer: None,
        }
    }

    /// Attach the collision capability used for exterior probing
    #[must_use]
    pub fn with_collision(mut self, collision: &'a dyn CollisionCapability) -> Self {
        self.probe = SpatialProbe::new(collision);
        self
    }

    /// Use a caller-built analyzer cache for this job
    ///
    /// The cache must have been created for this structure; it is cleared
    /// when the job's pipeline run ends.
    #[must_use]
    pub fn with_analyzers(mut self, analyzers: AnalyzerCache) -> Self {
        self.analyzers = analyzers;
        self
    }

    /// Report progress to `observer`
    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn PaintObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Structure being painted
    pub const fn structure(&self) -> &'a Structure {
        self.structure
    }

    /// Palette of the job
    pub const fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Exterior and edge classifier
    pub const fn probe(&self) -> &SpatialProbe<'a> {
        &self.probe
    }

    /// Shared analyzer cache
    pub const fn analyzers_mut(&mut self) -> &mut AnalyzerCache {
        &mut self.analyzers
    }

    /// Cache slot of the factor registered at `index`
    pub fn slot(&self, index: usize) -> Option<&FactorCache> {
        self.slots.get(index)
    }

    /// Whether every job-scoped cache is empty
    pub fn caches_are_clean(&self) -> bool {
        self.analyzers.is_empty() && self.slots.iter().all(FactorCache::is_empty)
    }

    /// Split the job into disjoint borrows with `slot_count` factor slots
    pub fn parts(&mut self, slot_count: usize) -> JobParts<'_, 'a> {
        if self.slots.len() < slot_count {
            self.slots.resize_with(slot_count, FactorCache::default);
        }
        JobParts {
            structure: self.structure,
            palette: self.palette,
            probe: &self.probe,
            analyzers: &mut self.analyzers,
            slots: &mut self.slots,
            observer: self.observer,
        }
    }

    /// Clear every factor slot and the analyzer cache
    pub fn clean_caches(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.analyzers.clear();
    }
}
