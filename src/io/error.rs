//! Error types for chart parsing, link decoding and export

use std::fmt;
use std::path::PathBuf;

use crate::codec::DecodeError;

/// Main error type for all chart operations
#[derive(Debug)]
pub enum ChartError {
    /// Encoded pattern text could not be decoded
    Decode(DecodeError),

    /// Compressor failed while encoding pattern text
    Encode {
        /// Underlying compression error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Pattern cannot be used for the requested operation
    InvalidPattern {
        /// Description of what's wrong with the pattern
        reason: String,
    },

    /// Share link is not a valid URL
    InvalidLink {
        /// The rejected link text
        url: String,
        /// Underlying URL parse error
        source: url::ParseError,
    },

    /// Failed to save rendered chart to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(source) => write!(f, "Failed to decode pattern: {source}"),
            Self::Encode { source } => write!(f, "Failed to encode pattern: {source}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPattern { reason } => write!(f, "Invalid pattern: {reason}"),
            Self::InvalidLink { url, source } => {
                write!(f, "Invalid share link '{url}': {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export chart to '{}': {source}",
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

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(source) => Some(source),
            Self::Encode { source } | Self::FileSystem { source, .. } => Some(source),
            Self::InvalidLink { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidPattern { .. } => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<DecodeError> for ChartError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ChartError {
    ChartError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
