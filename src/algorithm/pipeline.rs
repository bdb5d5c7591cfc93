//! Ordered composition of color factors
//!
//! Each block starts from the palette's first entry. Factors run in
//! registration order; a factor whose `applies` returns false is skipped,
//! otherwise its output becomes the running color. The job is cleaned after
//! every run, including failed ones.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::algorithm::factor::{ColorFactor, FactorScope};
use crate::algorithm::gradient::GradientFactor;
use crate::algorithm::job::{ColorMap, PaintJob, PaintReport};
use crate::algorithm::overrides::{FixedIndexOverride, SideOverride};
use crate::algorithm::shading::{EdgeFactor, ShadingFactor};
use crate::io::error::{PaintError, Result};

/// Ordered set of color factors applied to every block of a job
#[derive(Debug, Clone, Default)]
pub struct FactorPipeline {
    factors: Vec<Arc<dyn ColorFactor>>,
}

impl FactorPipeline {
    /// Empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Gradient base, shading, edge highlight, then functional overrides
    pub fn standard() -> Self {
        Self::new()
            .with(Arc::new(GradientFactor::new()))
            .with(Arc::new(ShadingFactor::default()))
            .with(Arc::new(EdgeFactor::default()))
            .with(Arc::new(FixedIndexOverride::thrusters()))
            .with(Arc::new(SideOverride::navigation_lights()))
    }

    /// Append a factor after all registered ones
    pub fn register(&mut self, factor: Arc<dyn ColorFactor>) -> &mut Self {
        self.factors.push(factor);
        self
    }

    /// Builder form of [`Self::register`]
    #[must_use]
    pub fn with(mut self, factor: Arc<dyn ColorFactor>) -> Self {
        self.factors.push(factor);
        self
    }

    /// Number of registered factors
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether no factor is registered
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Factor names in registration order
    pub fn names(&self) -> Vec<String> {
        self.factors.iter().map(|f| f.name().to_string()).collect()
    }

    /// Registered factors in order
    pub fn factors(&self) -> &[Arc<dyn ColorFactor>] {
        &self.factors
    }

    /// Color every block of the job's structure
    ///
    /// Job caches are cleared and every factor's `clean` is called before
    /// returning, whatever the outcome of the pass. Cleanup failures do not
    /// invalidate the colors; they are listed in the report.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a factor transform. If cleanup also
    /// failed, that error is wrapped in `PaintError::Job` together with the
    /// cleanup failures.
    pub fn apply(&self, job: &mut PaintJob<'_>) -> Result<PaintReport> {
        debug!(
            blocks = job.structure().len(),
            factors = self.factors.len(),
            palette = job.palette().len(),
            "starting paint job"
        );
        if !job.probe().has_collision() || job.structure().is_degenerate() {
            warn!(
                collision = job.probe().has_collision(),
                "probing falls back to exterior for every block"
            );
        }

        let pass = self.paint(job);
        let cleanup_failures = self.clean(job);

        match pass {
            Ok(colors) => {
                info!(
                    blocks = colors.len(),
                    cleanup_failures = cleanup_failures.len(),
                    "paint job finished"
                );
                Ok(PaintReport {
                    colors,
                    cleanup_failures,
                })
            }
            Err(error) if cleanup_failures.is_empty() => {
                warn!(%error, "paint job failed");
                Err(error)
            }
            Err(error) => {
                warn!(%error, cleanup_failures = cleanup_failures.len(), "paint job failed");
                Err(PaintError::Job {
                    source: Box::new(error),
                    cleanup_failures,
                })
            }
        }
    }

    fn paint(&self, job: &mut PaintJob<'_>) -> Result<ColorMap> {
        let parts = job.parts(self.factors.len());
        let total = parts.structure.len();
        let mut colors = ColorMap::new();

        for (painted, block) in parts.structure.blocks().iter().enumerate() {
            let mut color = parts.palette.first();
            for (factor, cache) in self.factors.iter().zip(parts.slots.iter_mut()) {
                let mut scope = FactorScope::new(
                    parts.structure,
                    parts.palette,
                    parts.probe,
                    &mut *parts.analyzers,
                    cache,
                );
                if factor.applies(block, &mut scope) {
                    color = factor.transform(block, color, &mut scope)?;
                }
            }
            colors.insert(block.position, color);

            if let Some(observer) = parts.observer {
                observer.block_painted(painted + 1, total);
            }
        }

        if let Some(observer) = parts.observer {
            observer.job_finished(total);
        }
        Ok(colors)
    }

    fn clean(&self, job: &mut PaintJob<'_>) -> Vec<PaintError> {
        job.clean_caches();

        let mut failures = Vec::new();
        for factor in &self.factors {
            if let Err(error) = factor.clean() {
                warn!(factor = factor.name(), %error, "factor cleanup failed");
                failures.push(PaintError::Cleanup {
                    factor: factor.name().to_string(),
                    reason: error.to_string(),
                });
            }
        }
        failures
    }
}
