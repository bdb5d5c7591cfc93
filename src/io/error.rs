//! Error types for paint jobs, pattern generation and file output

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all painting operations
#[derive(Debug, Error)]
pub enum PaintError {
    /// An argument or parameter failed validation
    ///
    /// Raised for empty or duplicate registry names, absent strategies,
    /// malformed pattern parameters and invalid structure input.
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A named item is not registered
    #[error("No {kind} named '{name}' is registered")]
    NotFound {
        /// What kind of item was looked up
        kind: &'static str,
        /// Name used for the lookup
        name: String,
    },

    /// Input is structurally unusable, such as an empty palette
    #[error("Degenerate input: {reason}")]
    Degenerate {
        /// Description of what is missing
        reason: String,
    },

    /// A factor failed to release its per-job state
    #[error("Cleanup of factor '{factor}' failed: {reason}")]
    Cleanup {
        /// Name of the factor whose cleanup failed
        factor: String,
        /// Description of the failure
        reason: String,
    },

    /// A paint pass failed and some factors then failed to clean up
    #[error("{source} (cleanup also failed for {} factor(s))", .cleanup_failures.len())]
    Job {
        /// Error that aborted the pass
        #[source]
        source: Box<PaintError>,
        /// `Cleanup` errors raised after the pass was aborted
        cleanup_failures: Vec<PaintError>,
    },

    /// Failed to save a rendered image to disk
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Settings or report JSON could not be read or written
    #[error("Invalid settings in '{}': {source}", .path.display())]
    Settings {
        /// Path of the settings document
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for painting results
pub type Result<T> = std::result::Result<T, PaintError>;

/// Create an invalid argument error
pub fn invalid_argument(parameter: &'static str, reason: &impl ToString) -> PaintError {
    PaintError::InvalidArgument {
        parameter,
        reason: reason.to_string(),
    }
}

/// Create a not found error
pub fn not_found(kind: &'static str, name: &impl ToString) -> PaintError {
    PaintError::NotFound {
        kind,
        name: name.to_string(),
    }
}

/// Create a degenerate input error
pub fn degenerate(reason: &impl ToString) -> PaintError {
    PaintError::Degenerate {
        reason: reason.to_string(),
    }
}

impl PaintError {
    /// Whether this error reports a failed argument validation
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this error reports a missing registry entry
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error reports degenerate input
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    /// Error that aborted a paint pass, unwrapping cleanup context
    pub fn pass_error(&self) -> &Self {
        match self {
            Self::Job { source, .. } => &**source,
            other => other,
        }
    }

    /// Cleanup failures attached to a failed paint pass
    pub fn cleanup_failures(&self) -> &[Self] {
        match self {
            Self::Job {
                cleanup_failures, ..
            } => cleanup_failures,
            _ => &[],
        }
    }
}
