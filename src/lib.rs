//! # pixel_palette
//!
//! A Rust crate for extracting a representative color palette and a
//! dominant color from raster images.
//!
//! The engine reduces an image to a population of per-pixel color vectors,
//! clusters that population into K representative colors with k-means,
//! measures each color's prevalence, and produces an incidence-ordered
//! palette of hex colors plus a single dominant pick. Around the engine
//! sit the pieces a complete service needs: format/mode support lookup,
//! image loading, RGBA flattening, and resize/encode presets.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pixel_palette::analyze_image;
//! use std::path::Path;
//!
//! // `None` asks for the default palette size of 5 colors
//! let result = analyze_image(Path::new("photo.jpg"), None)?;
//! println!("Dominant: {}, palette: {:?}", result.dominant, result.palette);
//! # Ok::<(), pixel_palette::PaletteError>(())
//! ```
//!
//! For in-memory images, use [`PaletteExtractor`] directly with any type
//! implementing [`PixelGrid`].

use std::path::Path;

use image::DynamicImage;

pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod palette;
pub mod resize;
pub mod sampler;
pub mod support;

pub use config::{ClusteringConfig, OutputFormat, ResampleFilter, ResizeSpec, ServiceConfig};
pub use error::{PaletteError, Result};
pub use extractor::{PaletteExtractor, PaletteResult};
pub use sampler::{PixelGrid, PixelPopulation};

/// Extract a palette of `k` hex colors from an image file, most prevalent
/// first. Passing `None` for `k` uses the default palette size of
/// [`constants::clustering::DEFAULT_PALETTE_SIZE`] colors.
///
/// Loads and decodes the file, verifies its format/mode combination
/// against the support tables, and runs the extraction pipeline with
/// default clustering parameters.
///
/// # Errors
///
/// Returns `PaletteError` if the file cannot be loaded, its format/mode is
/// unsupported, or `k` is outside `[1, pixel_count]`.
pub fn extract_palette(path: &Path, k: Option<usize>) -> Result<Vec<String>> {
    let img = load_supported(path)?;
    PaletteExtractor::new().palette(&img, palette_size(k))
}

/// Extract the dominant color of an image file as a hex string.
///
/// # Errors
///
/// Same conditions as [`extract_palette`].
pub fn extract_dominant_color(path: &Path, k: Option<usize>) -> Result<String> {
    let img = load_supported(path)?;
    PaletteExtractor::new().dominant_color(&img, palette_size(k))
}

/// Extract palette, dominant color, and incidence counts from one
/// clustering pass over an image file.
///
/// # Errors
///
/// Same conditions as [`extract_palette`].
pub fn analyze_image(path: &Path, k: Option<usize>) -> Result<PaletteResult> {
    let img = load_supported(path)?;
    PaletteExtractor::new().extract(&img, palette_size(k))
}

/// Extract palette, dominant color, and incidence counts from an image
/// file using a service configuration's palette size and clustering
/// parameters.
///
/// # Errors
///
/// Same conditions as [`extract_palette`].
pub fn analyze_image_with(path: &Path, config: &ServiceConfig) -> Result<PaletteResult> {
    let img = load_supported(path)?;
    PaletteExtractor::with_config(config.clustering).extract(&img, config.palette_size)
}

fn palette_size(k: Option<usize>) -> usize {
    k.unwrap_or(constants::clustering::DEFAULT_PALETTE_SIZE)
}

/// Load an image and verify its support profile
fn load_supported(path: &Path) -> Result<DynamicImage> {
    let (img, format) = loader::load_image(path)?;
    let mode = support::ColorMode::from_color_type(img.color());
    support::ensure_supported(format, mode)?;
    Ok(img)
}
