//! Error types for the pixel_palette library

use thiserror::Error;

/// Result type alias for pixel_palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette extraction and image handling
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image has no pixels or an unsupported channel layout
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Requested cluster count is outside [1, pixel_count], or an
    /// assignment index fell outside [0, k)
    #[error("Invalid cluster count {value}: {reason}")]
    InvalidClusterCount { value: usize, reason: String },

    /// Hex encoding was attempted on a vector with the wrong channel count.
    /// Indicates a wiring bug between pipeline stages, not bad user input.
    #[error("Invalid color vector: expected {expected} channels, got {actual}")]
    InvalidColorVector { expected: usize, actual: usize },

    /// Cluster or histogram was empty at selection time
    #[error("Empty cluster: {reason}")]
    EmptyCluster { reason: String },

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image format/mode combination is not in the support tables
    #[error("Unsupported image: format {format} with mode {mode}")]
    UnsupportedImage { format: String, mode: String },

    /// Re-encoding a processed image failed
    #[error("Image encoding failed: {message}")]
    ImageEncode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid-image error
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Create an invalid-cluster-count error
    pub fn invalid_cluster_count(value: usize, reason: impl Into<String>) -> Self {
        Self::InvalidClusterCount {
            value,
            reason: reason.into(),
        }
    }

    /// Create an empty-cluster error
    pub fn empty_cluster(reason: impl Into<String>) -> Self {
        Self::EmptyCluster {
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image encode error with context
    pub fn image_encode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageEncode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a condition the caller can correct
    /// by adjusting its input (a smaller `k`, a converted image, ...)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidClusterCount { .. }
                | PaletteError::UnsupportedImage { .. }
                | PaletteError::InvalidImage { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidImage { .. } => {
                "The image is empty or uses a pixel layout that cannot be analyzed.".to_string()
            }
            PaletteError::InvalidClusterCount { value, .. } => {
                format!(
                    "Cannot build a palette of {} colors for this image. Try a smaller palette.",
                    value
                )
            }
            PaletteError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::UnsupportedImage { format, mode } => {
                format!(
                    "Images of format {} with color mode {} are not supported.",
                    format, mode
                )
            }
            _ => "Palette extraction failed. Please try with a different image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let err = PaletteError::invalid_cluster_count(12, "exceeds pixel count");
        assert!(err.is_recoverable());

        let err = PaletteError::InvalidColorVector {
            expected: 3,
            actual: 4,
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_message_mentions_cluster_count() {
        let err = PaletteError::invalid_cluster_count(12, "exceeds pixel count");
        assert!(err.user_message().contains("12"));
    }
}
