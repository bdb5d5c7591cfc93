//! Painting constants and runtime configuration defaults

// Shading applied by the standard pipeline
/// Fraction by which exterior blocks are darkened
pub const DEFAULT_EXTERIOR_DARKEN: f32 = 0.20;
/// Fraction by which interior blocks are lightened
pub const DEFAULT_INTERIOR_LIGHTEN: f32 = 0.20;
/// Fraction by which edge blocks are lightened on top of shading
pub const DEFAULT_EDGE_LIGHTEN: f32 = 0.10;

/// Empty orthogonal neighbors needed before a block counts as an edge
///
/// Flat wall blocks have exactly one empty neighbor, so a threshold of one
/// would flag every surface block.
pub const EDGE_EMPTY_NEIGHBOR_THRESHOLD: usize = 2;

/// Extra cells a probe ray travels past the structure extent
pub const PROBE_CLEARANCE_CELLS: f64 = 1.0;

/// Default edge length of one grid cell in world units
pub const DEFAULT_CELL_SIZE: f64 = 2.5;

/// Largest bounding-box volume a structure may span, in cells
///
/// Occupancy is a dense volume over the bounding box, so sparse blocks far
/// apart cost as much as a solid hull of the same extent.
pub const MAX_OCCUPANCY_CELLS: u64 = 1 << 25;

// Default values for configurable parameters
/// Fixed seed for reproducible pattern generation
pub const DEFAULT_SEED: u64 = 42;
/// Default pattern scale in cells
pub const DEFAULT_PATTERN_SCALE: f64 = 1.0;
/// Default pattern frequency
pub const DEFAULT_PATTERN_FREQUENCY: f64 = 0.25;
/// Maximum octaves accepted by the noise strategy
pub const MAX_NOISE_OCTAVES: u32 = 8;

// Demo hull generation
/// Default edge length of demo hulls
pub const DEFAULT_DEMO_SIZE: u32 = 9;
/// Largest demo hull edge length accepted by the CLI
pub const MAX_DEMO_SIZE: u32 = 256;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_painted";
/// Pixel size of one block in exported slice sheets
pub const SLICE_PIXEL_SCALE: u32 = 8;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Environment variable holding the tracing filter for the binary
pub const LOG_FILTER_ENV: &str = "GRIDPAINT_LOG";
