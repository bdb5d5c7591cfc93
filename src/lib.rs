//! Per-block color assignment for modular voxel structures
//!
//! A structure snapshot and a palette go in; a color per block comes out.
//! Blocks are classified by probing the structure's own occupancy, then a
//! pipeline of color factors runs over every block in registration order.
//! Procedural pattern strategies can be overlaid on groups of blocks, and
//! expensive derived geometry is shared through a per-job analyzer cache.

#![forbid(unsafe_code)]

/// Color factors, the factor pipeline and job-scoped caches
pub mod algorithm;
/// Derived-geometry analyzers and their cache
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colors, palettes, vector helpers and noise
pub mod math;
/// Procedural pattern strategies and their registry
pub mod pattern;
/// Blocks, structures and spatial probing
pub mod spatial;

pub use io::error::{PaintError, Result};
