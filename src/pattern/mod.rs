//! Procedural pattern generation
//!
//! Strategies map a set of positions to palette indices and are looked up by
//! name through a [`PatternRegistry`].

/// Built-in strategies
pub mod builtin;
/// Generator parameters
pub mod parameters;
/// Case-insensitive strategy registry
pub mod registry;
/// Strategy trait and shared helpers
pub mod strategy;

pub use parameters::{ParameterValue, PatternParameters};
pub use registry::PatternRegistry;
pub use strategy::{IndexMap, PatternStrategy};
