use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::io::error::Result;
use crate::math::color::Color;
use crate::spatial::block::{BlockCategory, Position};

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Per-factor memoization slot scoped to one paint job
///
/// Category colors are keyed by block category rather than block identity,
/// so a slot must be cleared before it is used for another structure.
#[derive(Default, Debug)]
pub struct FactorCache {
    /// Category to computed color mapping
    category_colors: HashMap<BlockCategory, Color>,

    /// Position to palette index mapping produced by a pattern overlay
    index_map: Option<BTreeMap<Position, usize>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl FactorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached color for a category or compute and store it
    ///
    /// # Errors
    ///
    /// Propagates the error of `compute_fn`; nothing is stored in that case
    pub fn get_or_compute_category<F>(&mut self, category: BlockCategory, compute_fn: F) -> Result<Color>
    where
        F: FnOnce() -> Result<Color>,
    {
        match self.category_colors.entry(category) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(*entry.get())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(*entry.insert(compute_fn()?))
            }
        }
    }

    /// Store the index map produced by a pattern overlay
    pub fn store_indices(&mut self, indices: BTreeMap<Position, usize>) {
        self.stats.misses += 1;
        self.index_map = Some(indices);
    }

    /// Cached palette index for `position`
    ///
    /// Returns `None` when no map is stored or the position is not in it.
    pub fn index_for(&mut self, position: Position) -> Option<usize> {
        let index = self.index_map.as_ref()?.get(&position).copied();
        self.stats.hits += 1;
        index
    }

    /// Number of cached category colors
    pub fn category_count(&self) -> usize {
        self.category_colors.len()
    }

    /// Whether an index map has been stored
    pub const fn has_indices(&self) -> bool {
        self.index_map.is_some()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.category_colors.is_empty() && self.index_map.is_none()
    }

    /// Drop all cached values and reset statistics
    pub fn clear(&mut self) {
        self.category_colors.clear();
        self.index_map = None;
        self.stats = CacheStats::default();
    }
}
