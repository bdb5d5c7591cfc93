//! Color factor capability set and the per-call view of a paint job

use std::fmt;
use std::sync::Arc;

use crate::algorithm::cache::FactorCache;
use crate::analysis::cache::{Analyzer, AnalyzerCache};
use crate::io::error::Result;
use crate::math::color::{Color, Palette};
use crate::spatial::block::Block;
use crate::spatial::probe::SpatialProbe;
use crate::spatial::structure::Structure;

/// Everything a factor may consult while coloring one block
///
/// `cache` is the factor's own slot; it is cleared at the end of every job.
pub struct FactorScope<'s, 'a> {
    /// Structure being painted
    pub structure: &'a Structure,
    /// Palette of the job
    pub palette: &'a Palette,
    /// Exterior and edge classifier
    pub probe: &'s SpatialProbe<'a>,
    /// Analyzers shared by every factor in the job
    pub analyzers: &'s mut AnalyzerCache,
    /// This factor's job-scoped cache
    pub cache: &'s mut FactorCache,
}

impl<'s, 'a> FactorScope<'s, 'a> {
    /// Assemble a scope from its parts
    pub const fn new(
        structure: &'a Structure,
        palette: &'a Palette,
        probe: &'s SpatialProbe<'a>,
        analyzers: &'s mut AnalyzerCache,
        cache: &'s mut FactorCache,
    ) -> Self {
        Self {
            structure,
            palette,
            probe,
            analyzers,
            cache,
        }
    }

    /// Shared analyzer instance, built on first use within the job
    pub fn analyzer<A: Analyzer>(&mut self) -> Arc<A> {
        self.analyzers.analyzer::<A>(self.structure)
    }

    /// Whether `block` is visible from outside the structure
    pub fn is_exterior(&self, block: &Block) -> bool {
        self.probe.is_exterior(block, self.structure)
    }

    /// Whether `block` has at least two empty neighbours
    pub fn is_edge(&self, block: &Block) -> bool {
        self.probe.is_edge(block, self.structure)
    }
}

/// A composable rule that conditionally transforms a block's color
///
/// Factors are shared through `Arc` and keep no mutable state of their own;
/// anything they memoize goes through [`FactorScope::cache`].
pub trait ColorFactor: fmt::Debug + Send + Sync {
    /// Name used in logs and cleanup reports
    fn name(&self) -> &str;

    /// Whether the factor takes part in coloring `block`
    fn applies(&self, block: &Block, scope: &mut FactorScope<'_, '_>) -> bool;

    /// New color for `block` given the color accumulated so far
    ///
    /// # Errors
    ///
    /// Returns an error if a required derived computation fails
    fn transform(&self, block: &Block, current: Color, scope: &mut FactorScope<'_, '_>)
    -> Result<Color>;

    /// Release external per-job state
    ///
    /// Called once at the end of every job, after the job's caches have been
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor could not reset itself
    fn clean(&self) -> Result<()> {
        Ok(())
    }
}
