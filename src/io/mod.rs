//! Input/output, configuration and error handling

/// Command-line parsing and job orchestration
pub mod cli;
/// Painting constants and defaults
pub mod configuration;
/// Procedural demo hulls
pub mod demo;
/// Error types
pub mod error;
/// PNG slice sheet export
pub mod image;
/// Terminal progress display
pub mod progress;
/// JSON paint settings
pub mod settings;
