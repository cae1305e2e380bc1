//! Error types for image loading, synthesis configuration and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum PixelChainError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source image decoded to a grid with no pixels
    ///
    /// Training is never attempted on an empty grid.
    EmptySource {
        /// Path to the image file
        path: PathBuf,
    },

    /// Configuration or input parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Channel count with no matching pixel layout
    UnsupportedChannels {
        /// Requested bytes per color
        channels: usize,
    },

    /// Failed to encode the generated grid to disk
    ///
    /// The generated grid is left with the caller, so the write can be retried.
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

impl PixelChainError {
    /// Whether this error happened before training (bad or missing source)
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::ImageLoad { .. } | Self::EmptySource { .. })
    }

    /// Whether this error happened while persisting a generated grid
    pub const fn is_output_error(&self) -> bool {
        matches!(self, Self::ImageExport { .. } | Self::FileSystem { .. })
    }
}

impl fmt::Display for PixelChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptySource { path } => {
                write!(f, "Source image '{}' contains no pixels", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsupportedChannels { channels } => {
                write!(
                    f,
                    "Unsupported channel count {channels} (expected 1, 2, 3 or 4)"
                )
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

impl std::error::Error for PixelChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, PixelChainError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PixelChainError {
    PixelChainError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
