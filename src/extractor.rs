//! Palette extraction facade
//!
//! [`PaletteExtractor`] wires the pipeline stages together:
//! sample → cluster → assign → histogram → (palette | dominant color).
//! Each call is an independent computation over its inputs; nothing is
//! cached between requests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::{self, ColorCluster};
use crate::config::ClusteringConfig;
use crate::error::Result;
use crate::palette;
use crate::sampler::{self, PixelGrid};

/// Complete palette extraction result from a single clustering pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteResult {
    /// Hex colors ordered by descending incidence
    pub palette: Vec<String>,
    /// Hex color of the most prevalent cluster; always equals the first
    /// palette entry
    pub dominant: String,
    /// Pixel counts in the same order as `palette`
    pub incidence: Vec<usize>,
    /// Total number of pixels analyzed
    pub pixel_count: usize,
}

/// Palette extraction engine.
///
/// Holds only configuration; every extraction runs the full pipeline over
/// the image it is given.
#[derive(Debug, Clone, Default)]
pub struct PaletteExtractor {
    config: ClusteringConfig,
}

impl PaletteExtractor {
    /// Create an extractor with default clustering parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom clustering parameters
    pub fn with_config(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Extract a palette of `k` hex colors, most prevalent first.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidImage` for empty or unsupported pixel
    /// layouts and `PaletteError::InvalidClusterCount` when `k` is outside
    /// `[1, pixel_count]`.
    pub fn palette<G: PixelGrid>(&self, image: &G, k: usize) -> Result<Vec<String>> {
        let (cluster, histogram) = self.run_pipeline(image, k)?;
        palette::compose(&cluster, &histogram)
    }

    /// Extract the single most prevalent color as a hex string.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Self::palette`].
    pub fn dominant_color<G: PixelGrid>(&self, image: &G, k: usize) -> Result<String> {
        let (cluster, histogram) = self.run_pipeline(image, k)?;
        palette::dominant(&cluster, &histogram)
    }

    /// Extract palette, dominant color, and incidence counts from one
    /// clustering pass. Callers needing both the palette and the dominant
    /// color should prefer this over two separate calls.
    pub fn extract<G: PixelGrid>(&self, image: &G, k: usize) -> Result<PaletteResult> {
        let (cluster, histogram) = self.run_pipeline(image, k)?;

        let order = palette::ranked_indices(&histogram);
        let incidence: Vec<usize> = order.iter().map(|&index| histogram[index]).collect();
        let entries = palette::compose(&cluster, &histogram)?;
        let dominant = palette::dominant(&cluster, &histogram)?;
        let pixel_count: usize = histogram.iter().sum();

        debug!(k, pixel_count, dominant = %dominant, "palette extracted");
        Ok(PaletteResult {
            palette: entries,
            dominant,
            incidence,
            pixel_count,
        })
    }

    /// Run sample → cluster → assign → histogram once
    fn run_pipeline<G: PixelGrid>(&self, image: &G, k: usize) -> Result<(ColorCluster, Vec<usize>)> {
        let population = sampler::sample(image)?;
        let cluster = cluster::cluster(&population, k, &self.config)?;
        let assignment = cluster::assign(&population, &cluster)?;
        let histogram = cluster::histogram(&assignment, k)?;
        Ok((cluster, histogram))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use image::{Rgb, RgbImage};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_palette_length_matches_k() {
        let img = solid_image(10, 10, [120, 40, 200]);
        let extractor = PaletteExtractor::new();
        let palette = extractor.palette(&img, 3).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_extract_incidence_sums_to_pixel_count() {
        let img = solid_image(8, 4, [10, 20, 30]);
        let result = PaletteExtractor::new().extract(&img, 2).unwrap();
        assert_eq!(result.pixel_count, 32);
        assert_eq!(result.incidence.iter().sum::<usize>(), 32);
        assert_eq!(result.incidence.len(), result.palette.len());
    }

    #[test]
    fn test_extract_dominant_is_first_entry() {
        let mut img = solid_image(10, 10, [0, 0, 0]);
        for y in 0..10 {
            for x in 0..3 {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }

        let result = PaletteExtractor::new().extract(&img, 2).unwrap();
        assert_eq!(result.dominant, result.palette[0]);
        // Black covers 70 of 100 pixels
        assert_eq!(result.dominant, "#000000");
        assert!(result.incidence[0] > result.incidence[1]);
    }

    #[test]
    fn test_invalid_k_zero() {
        let img = solid_image(4, 4, [1, 2, 3]);
        let result = PaletteExtractor::new().palette(&img, 0);
        assert!(matches!(
            result,
            Err(PaletteError::InvalidClusterCount { value: 0, .. })
        ));
    }

    #[test]
    fn test_result_serializes() {
        let img = solid_image(4, 4, [250, 10, 10]);
        let result = PaletteExtractor::new().extract(&img, 1).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PaletteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
