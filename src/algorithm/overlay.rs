//! Factors that paint whole block groups at once

use std::sync::Arc;

use tracing::debug;

use crate::algorithm::factor::{ColorFactor, FactorScope};
use crate::algorithm::selector::BlockSelector;
use crate::analysis::clustering::ClusterAnalyzer;
use crate::io::error::Result;
use crate::math::color::Color;
use crate::pattern::parameters::PatternParameters;
use crate::pattern::strategy::PatternStrategy;
use crate::spatial::block::Block;

/// Paints selected blocks with a pattern strategy's index map
///
/// The map is generated once per job, over every selected position, the
/// first time a selected block is transformed.
#[derive(Debug, Clone)]
pub struct PatternOverlay {
    strategy: Arc<dyn PatternStrategy>,
    selector: BlockSelector,
    color_indices: Vec<usize>,
    parameters: PatternParameters,
}

impl PatternOverlay {
    /// Overlay `strategy` on the blocks chosen by `selector`
    pub fn new(
        strategy: Arc<dyn PatternStrategy>,
        selector: BlockSelector,
        color_indices: Vec<usize>,
        parameters: PatternParameters,
    ) -> Self {
        Self {
            strategy,
            selector,
            color_indices,
            parameters,
        }
    }

    /// Strategy being overlaid
    pub fn strategy(&self) -> &Arc<dyn PatternStrategy> {
        &self.strategy
    }

    /// Blocks the overlay targets
    pub const fn selector(&self) -> &BlockSelector {
        &self.selector
    }
}

impl ColorFactor for PatternOverlay {
    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn applies(&self, block: &Block, scope: &mut FactorScope<'_, '_>) -> bool {
        self.selector.matches(block, scope)
    }

    fn transform(
        &self,
        block: &Block,
        current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        if !scope.cache.has_indices() {
            let positions = self.selector.select(scope);
            let indices = self.strategy.generate(
                scope.structure,
                &positions,
                &self.color_indices,
                &self.parameters,
            )?;
            debug!(
                strategy = self.strategy.name(),
                positions = positions.len(),
                "generated pattern overlay"
            );
            scope.cache.store_indices(indices);
        }

        Ok(scope
            .cache
            .index_for(block.position)
            .map_or(current, |index| scope.palette.get_clamped(index)))
    }
}

/// Gives every functional cluster its own palette entry
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterFactor;

impl ColorFactor for ClusterFactor {
    fn name(&self) -> &str {
        "clusters"
    }

    fn applies(&self, block: &Block, _scope: &mut FactorScope<'_, '_>) -> bool {
        block.functional && block.subsystem().is_some()
    }

    fn transform(
        &self,
        block: &Block,
        current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        let clusters = scope.analyzer::<ClusterAnalyzer>();
        let palette = scope.palette;
        Ok(scope
            .structure
            .index_at(block.position)
            .and_then(|index| clusters.cluster_of(index))
            .map_or(current, |id| palette.get_clamped(id % palette.len())))
    }
}
