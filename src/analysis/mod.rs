//! Derived-geometry analyzers and their per-job cache

/// Lazy memoization of analyzers within one paint job
pub mod cache;
/// Connected functional clusters grouped by subsystem
pub mod clustering;
/// Forward/right/up basis derivation
pub mod orientation;
/// Per-block neighbour masks
pub mod relationships;
/// Bounds, extents and proportions
pub mod shape;
/// Outer surface membership
pub mod surface;

pub use cache::{Analyzer, AnalyzerCache, AnalyzerKind};
pub use clustering::{Cluster, ClusterAnalyzer};
pub use orientation::{OrientationAnalyzer, OrientationSource, Side};
pub use relationships::RelationshipAnalyzer;
pub use shape::ShapeAnalyzer;
pub use surface::SurfaceAnalyzer;
