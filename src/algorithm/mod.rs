/// Per-factor memoization scoped to one job
pub mod cache;
/// Color factor trait and the per-call scope
pub mod factor;
/// Base gradient factor
pub mod gradient;
/// Job context owning every per-run cache
pub mod job;
/// Pattern overlay and cluster coloring
pub mod overlay;
/// Fixed palette and side-based overrides
pub mod overrides;
/// Ordered factor composition
pub mod pipeline;
/// Block groups targeted by overlays
pub mod selector;
/// Exterior, interior and edge shading
pub mod shading;

pub use factor::{ColorFactor, FactorScope};
pub use job::{ColorMap, PaintJob, PaintObserver, PaintReport};
pub use pipeline::FactorPipeline;
