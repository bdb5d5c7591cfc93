//! Mathematical utilities for colors, vectors and procedural noise

/// Colors, blending and palettes
pub mod color;
/// Fixed-size vector helpers
pub mod geometry;
/// Seeded gradient noise
pub mod noise;
