//! Configuration structures for palette extraction and image processing
//!
//! Tunable parameters for the clustering engine and the resize/encode
//! pipeline. Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use pixel_palette::ServiceConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ServiceConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ServiceConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{clustering, resize};

/// K-means clustering parameters.
///
/// Controls iteration bounds, the convergence threshold, and the random
/// seed used for centroid initialization. With the default seed, repeated
/// runs over the same image yield identical palettes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Maximum Lloyd's iterations before stopping regardless of convergence
    pub max_iterations: usize,

    /// Stop once the largest squared centroid movement falls below this
    pub convergence: f32,

    /// Seed for centroid initialization
    pub seed: u64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_iterations: clustering::MAX_ITERATIONS,
            convergence: clustering::CONVERGENCE_EPSILON,
            seed: clustering::DEFAULT_SEED,
        }
    }
}

/// Resample filter used when resizing.
///
/// Mirrors the `image` crate's filter set without exposing it in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Nearest neighbor
    Nearest,
    /// Linear filter
    Triangle,
    /// Cubic filter
    CatmullRom,
    /// Lanczos with window 3 (the original service's default)
    Lanczos3,
}

impl From<ResampleFilter> for image::imageops::FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Triangle => image::imageops::FilterType::Triangle,
            ResampleFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Output encoding for processed images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

/// Resize and encode parameters.
///
/// A single configuration struct covers every image variant; the original
/// service expressed icons and wallpapers as subclasses differing only in
/// these defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeSpec {
    /// Target dimensions (width, height)
    pub size: (u32, u32),

    /// Encoding quality for lossy formats (0-100)
    pub quality: u8,

    /// Resample filter
    pub filter: ResampleFilter,

    /// Output encoding
    pub format: OutputFormat,
}

impl ResizeSpec {
    /// Icon preset: small square JPEG, Lanczos resampling
    pub fn icon() -> Self {
        Self {
            size: resize::ICON_SIZE,
            quality: resize::DEFAULT_QUALITY,
            filter: ResampleFilter::Lanczos3,
            format: OutputFormat::Jpeg,
        }
    }

    /// Wallpaper preset: full-screen JPEG, Lanczos resampling
    pub fn wallpaper() -> Self {
        Self {
            size: resize::WALLPAPER_SIZE,
            quality: resize::DEFAULT_QUALITY,
            filter: ResampleFilter::Lanczos3,
            format: OutputFormat::Jpeg,
        }
    }

    /// Same spec with different target dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

/// Complete service configuration.
///
/// Groups the palette engine parameters with the resize presets so a whole
/// deployment can be described by one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Number of palette entries produced by default
    pub palette_size: usize,

    /// Clustering engine parameters
    pub clustering: ClusteringConfig,

    /// Icon resize preset
    pub icon: ResizeSpec,

    /// Wallpaper resize preset
    pub wallpaper: ResizeSpec,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            palette_size: clustering::DEFAULT_PALETTE_SIZE,
            clustering: ClusteringConfig::default(),
            icon: ResizeSpec::icon(),
            wallpaper: ResizeSpec::wallpaper(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clustering_config_defaults() {
        let config = ClusteringConfig::default();
        assert_eq!(config.max_iterations, clustering::MAX_ITERATIONS);
        assert_eq!(config.seed, clustering::DEFAULT_SEED);
    }

    #[test]
    fn test_resize_presets_differ_only_in_size() {
        let icon = ResizeSpec::icon();
        let wallpaper = ResizeSpec::wallpaper();
        assert_ne!(icon.size, wallpaper.size);
        assert_eq!(icon.quality, wallpaper.quality);
        assert_eq!(icon.filter, wallpaper.filter);
    }

    #[test]
    fn test_with_size() {
        let spec = ResizeSpec::icon().with_size(64, 48);
        assert_eq!(spec.size, (64, 48));
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ServiceConfig::default();
        config.to_json_file(&path).unwrap();

        let loaded = ServiceConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded.palette_size, config.palette_size);
        assert_eq!(loaded.clustering, config.clustering);
        assert_eq!(loaded.icon, config.icon);
    }
}
