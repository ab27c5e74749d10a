//! Error types for lattice construction, walk growth and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all walk operations
#[derive(Debug)]
pub enum WalkError {
    /// Lattice or growth parameters can never produce a walk
    ///
    /// Reported before any attempt runs:
    /// - Non-positive lattice size or hexagon radius
    /// - A minimum length above the lattice capacity
    /// - A start position outside the lattice
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The configured attempt cap or deadline ran out before a long enough walk
    GrowthExhausted {
        /// Attempts made before giving up
        attempts: usize,
        /// Minimum accepted walk length
        min_length: usize,
        /// Longest walk seen across all attempts
        longest: usize,
    },

    /// Two consecutive path positions are not joined by a lattice step
    NonAdjacentStep {
        /// Index of the second position of the offending pair
        index: usize,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::GrowthExhausted {
                attempts,
                min_length,
                longest,
            } => {
                write!(
                    f,
                    "Growth exhausted after {attempts} attempts: no walk reached length {min_length} (longest {longest})"
                )
            }
            Self::NonAdjacentStep { index } => {
                write!(f, "Path positions {} and {index} are not adjacent", index.saturating_sub(1))
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for walk results
pub type Result<T> = std::result::Result<T, WalkError>;

impl From<image::ImageError> for WalkError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WalkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WalkError {
    WalkError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a directory-creation error for the parent of an output file
pub fn create_dir_error(path: PathBuf, source: std::io::Error) -> WalkError {
    WalkError::FileSystem {
        path,
        operation: "create directory",
        source,
    }
}
