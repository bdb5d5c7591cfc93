//! Name-keyed registry of pattern strategies
//!
//! Names are matched case-insensitively; the spelling used at registration is
//! kept for listing.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::io::error::{Result, invalid_argument, not_found};
use crate::pattern::builtin::builtin_strategies;
use crate::pattern::strategy::PatternStrategy;

/// Registry of pattern strategies held by shared ownership
#[derive(Debug, Default, Clone)]
pub struct PatternRegistry {
    /// Lower-cased name to (registered name, strategy)
    strategies: BTreeMap<String, (String, Arc<dyn PatternStrategy>)>,
}

impl PatternRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in strategy under its own name
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for strategy in builtin_strategies() {
            let name = strategy.name().to_string();
            // Built-in names are distinct and non-empty
            if let Err(error) = registry.register(&name, Some(strategy)) {
                debug!(%error, "skipping built-in strategy");
            }
        }
        registry
    }

    /// Register a strategy under `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is blank, `strategy` is `None`, or
    /// the name is already registered (ignoring case)
    pub fn register(&mut self, name: &str, strategy: Option<Arc<dyn PatternStrategy>>) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(invalid_argument("name", &"strategy name must not be empty"));
        }
        let Some(strategy) = strategy else {
            return Err(invalid_argument(
                "strategy",
                &format!("no strategy supplied for '{trimmed}'"),
            ));
        };

        let key = trimmed.to_lowercase();
        if let Some((existing, _)) = self.strategies.get(&key) {
            return Err(invalid_argument(
                "name",
                &format!("'{trimmed}' is already registered as '{existing}'"),
            ));
        }

        debug!(name = trimmed, "registered pattern strategy");
        self.strategies.insert(key, (trimmed.to_string(), strategy));
        Ok(())
    }

    /// Look up a strategy by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no strategy is registered under `name`
    pub fn get(&self, name: &str) -> Result<Arc<dyn PatternStrategy>> {
        self.strategies
            .get(&name.trim().to_lowercase())
            .map(|(_, strategy)| Arc::clone(strategy))
            .ok_or_else(|| not_found("pattern strategy", &name))
    }

    /// Whether a strategy is registered under `name`, ignoring case
    pub fn has(&self, name: &str) -> bool {
        self.strategies.contains_key(&name.trim().to_lowercase())
    }

    /// Registered names in case-insensitive order
    pub fn names(&self) -> Vec<String> {
        self.strategies
            .values()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Remove every strategy
    pub fn clear(&mut self) {
        self.strategies.clear();
    }
}
