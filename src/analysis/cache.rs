//! Lazy per-job memoization of derived-geometry analyzers
//!
//! Several factors and patterns need the same expensive view of a structure
//! (its shape, surface shell, clusters or orientation). The cache builds each
//! analyzer the first time it is requested and hands out shared references
//! afterwards. It never checks staleness: build a fresh cache for every job.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::debug;

use crate::algorithm::cache::CacheStats;
use crate::io::error::{Result, invalid_argument};
use crate::spatial::structure::Structure;

/// Key identifying a kind of derived-geometry analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalyzerKind {
    /// Overall shape and bounds
    Shape,
    /// Per-block neighbour relationships
    Relationships,
    /// Outer surface membership
    Surface,
    /// Functional clustering by subsystem
    Clusters,
    /// Local forward/right/up basis
    Orientation,
}

/// A derived-geometry computation that can be memoized per job
pub trait Analyzer: Any + Send + Sync + Sized {
    /// Cache key for this analyzer
    const KIND: AnalyzerKind;

    /// Run the analysis over a structure
    fn analyze(structure: &Structure) -> Self;

    /// Run the analysis inside a job, resolving other analyzers it depends on
    /// through `cache`
    fn analyze_cached(structure: &Structure, _cache: &mut AnalyzerCache) -> Self {
        Self::analyze(structure)
    }
}

/// Memoization context for analyzers, scoped to one paint job
#[derive(Default)]
pub struct AnalyzerCache {
    entries: HashMap<AnalyzerKind, Arc<dyn Any + Send + Sync>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl std::fmt::Debug for AnalyzerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.entries.keys().collect();
        kinds.sort();
        f.debug_struct("AnalyzerCache")
            .field("kinds", &kinds)
            .field("stats", &self.stats)
            .finish()
    }
}

impl AnalyzerCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored instance for `kind` or build and store a new one
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `kind` already holds an analyzer of a
    /// different type
    pub fn get_or_create<A, F>(&mut self, kind: AnalyzerKind, build_fn: F) -> Result<Arc<A>>
    where
        A: Any + Send + Sync,
        F: FnOnce() -> A,
    {
        match self.entries.entry(kind) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Arc::clone(entry.get()).downcast::<A>().map_err(|_stored| {
                    invalid_argument(
                        "kind",
                        &format!(
                            "{kind:?} holds an analyzer of another type than {}",
                            std::any::type_name::<A>()
                        ),
                    )
                })
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                debug!(?kind, "building analyzer");
                let analyzer = Arc::new(build_fn());
                entry.insert(Arc::clone(&analyzer) as Arc<dyn Any + Send + Sync>);
                Ok(analyzer)
            }
        }
    }

    /// Typed access using the analyzer's own key and build function
    ///
    /// Dependencies of `A` are resolved through this cache while it builds.
    /// If the key holds a foreign type (only possible through
    /// [`Self::get_or_create`] misuse) the entry is rebuilt.
    pub fn analyzer<A: Analyzer>(&mut self, structure: &Structure) -> Arc<A> {
        if let Some(analyzer) = self
            .entries
            .get(&A::KIND)
            .and_then(|stored| Arc::clone(stored).downcast::<A>().ok())
        {
            self.stats.hits += 1;
            return analyzer;
        }

        self.stats.misses += 1;
        debug!(kind = ?A::KIND, "building analyzer");
        let analyzer = Arc::new(A::analyze_cached(structure, self));
        self.entries
            .insert(A::KIND, Arc::clone(&analyzer) as Arc<dyn Any + Send + Sync>);
        analyzer
    }

    /// Whether an analyzer is stored under `kind`
    pub fn contains(&self, kind: AnalyzerKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of stored analyzers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no analyzer is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every stored analyzer and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
