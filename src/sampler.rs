//! Pixel access boundary and population sampling
//!
//! The clustering engine never touches a decoder directly. It consumes any
//! type implementing [`PixelGrid`]: a decoded image exposing dimensions, a
//! channel count, and a row-major per-pixel accessor. Implementations are
//! provided for the `image` crate's common buffer types.
//!
//! [`sample`] flattens a grid into a [`PixelPopulation`], one floating
//! point color vector per pixel, which the rest of the pipeline passes
//! along explicitly. Nothing here holds state between calls.

use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};

use crate::constants::channels;
use crate::error::{PaletteError, Result};

/// Capability interface for a decoded in-memory image.
///
/// Channel values are exposed as floats in [0, 255] so the clustering math
/// works on a single numeric type regardless of the source bit depth.
pub trait PixelGrid {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Number of channels per pixel (3 for RGB, 4 for RGBA)
    fn channel_count(&self) -> usize;

    /// Write the channel values of the pixel at (x, y) into `out`.
    /// `out` has exactly `channel_count()` slots.
    fn read_pixel(&self, x: u32, y: u32, out: &mut [f32]);
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn channel_count(&self) -> usize {
        channels::RGB
    }

    fn read_pixel(&self, x: u32, y: u32, out: &mut [f32]) {
        let pixel = self.get_pixel(x, y);
        for (slot, &value) in out.iter_mut().zip(pixel.0.iter()) {
            *slot = value as f32;
        }
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn channel_count(&self) -> usize {
        channels::RGBA
    }

    fn read_pixel(&self, x: u32, y: u32, out: &mut [f32]) {
        let pixel = self.get_pixel(x, y);
        for (slot, &value) in out.iter_mut().zip(pixel.0.iter()) {
            *slot = value as f32;
        }
    }
}

impl PixelGrid for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::dimensions(self).0
    }

    fn height(&self) -> u32 {
        GenericImageView::dimensions(self).1
    }

    fn channel_count(&self) -> usize {
        if self.color().has_alpha() {
            channels::RGBA
        } else {
            channels::RGB
        }
    }

    fn read_pixel(&self, x: u32, y: u32, out: &mut [f32]) {
        // get_pixel always yields RGBA; grayscale variants expand to
        // equal RGB components, alpha-less variants keep only 3 slots.
        let pixel = self.get_pixel(x, y);
        for (slot, &value) in out.iter_mut().zip(pixel.0.iter()) {
            *slot = value as f32;
        }
    }
}

/// A flat population of per-pixel color vectors.
///
/// Vectors are stored contiguously in row-major pixel order; each vector
/// has exactly `channel_count` components. The population is derived data
/// scoped to a single request and never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelPopulation {
    channels: usize,
    values: Vec<f32>,
}

impl PixelPopulation {
    /// Build a population from raw channel values.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidImage` if `values` is not a whole
    /// number of `channels`-sized vectors or `channels` is not 3 or 4.
    pub fn new(channels: usize, values: Vec<f32>) -> Result<Self> {
        if channels != channels::RGB && channels != channels::RGBA {
            return Err(PaletteError::invalid_image(format!(
                "unsupported channel count: {}",
                channels
            )));
        }
        if values.is_empty() {
            return Err(PaletteError::invalid_image("image has no pixels"));
        }
        if values.len() % channels != 0 {
            return Err(PaletteError::invalid_image(format!(
                "{} channel values do not divide into {}-channel pixels",
                values.len(),
                channels
            )));
        }
        Ok(Self { channels, values })
    }

    /// Number of pixels in the population
    pub fn len(&self) -> usize {
        self.values.len() / self.channels
    }

    /// True if the population holds no pixels
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Components per color vector
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    /// Color vector of the pixel at `index`
    pub fn pixel(&self, index: usize) -> &[f32] {
        let start = index * self.channels;
        &self.values[start..start + self.channels]
    }

    /// Iterate over all color vectors in order
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.values.chunks_exact(self.channels)
    }
}

/// Flatten an image's pixel grid into a [`PixelPopulation`].
///
/// Vectors follow row-major pixel order, so assignment indices produced
/// downstream correspond 1:1 with the original pixels.
///
/// # Errors
///
/// Returns `PaletteError::InvalidImage` if the image has zero pixels or a
/// channel count other than 3 or 4.
pub fn sample<G: PixelGrid>(image: &G) -> Result<PixelPopulation> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(PaletteError::invalid_image(format!(
            "image has zero pixels ({}x{})",
            width, height
        )));
    }

    let channel_count = image.channel_count();
    if channel_count != channels::RGB && channel_count != channels::RGBA {
        return Err(PaletteError::invalid_image(format!(
            "unsupported channel count: {}",
            channel_count
        )));
    }

    let pixel_count = (width as usize) * (height as usize);
    let mut values = Vec::with_capacity(pixel_count * channel_count);
    let mut buffer = [0.0f32; channels::RGBA];

    for y in 0..height {
        for x in 0..width {
            let slot = &mut buffer[..channel_count];
            image.read_pixel(x, y, slot);
            values.extend_from_slice(slot);
        }
    }

    PixelPopulation::new(channel_count, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_sample_row_major_order() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(1, 0, Rgb([4, 5, 6]));
        img.put_pixel(0, 1, Rgb([7, 8, 9]));
        img.put_pixel(1, 1, Rgb([10, 11, 12]));

        let population = sample(&img).unwrap();
        assert_eq!(population.len(), 4);
        assert_eq!(population.channel_count(), 3);
        assert_eq!(population.pixel(0), &[1.0, 2.0, 3.0]);
        assert_eq!(population.pixel(1), &[4.0, 5.0, 6.0]);
        assert_eq!(population.pixel(2), &[7.0, 8.0, 9.0]);
        assert_eq!(population.pixel(3), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_sample_zero_pixels() {
        let img = RgbImage::new(0, 0);
        let result = sample(&img);
        assert!(matches!(result, Err(PaletteError::InvalidImage { .. })));
    }

    #[test]
    fn test_sample_rgba_keeps_alpha() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 128]));

        let population = sample(&img).unwrap();
        assert_eq!(population.channel_count(), 4);
        assert_eq!(population.pixel(0), &[10.0, 20.0, 30.0, 128.0]);
    }

    #[test]
    fn test_dynamic_image_channel_count() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert_eq!(PixelGrid::channel_count(&rgb), 3);

        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        assert_eq!(PixelGrid::channel_count(&rgba), 4);
    }

    #[test]
    fn test_population_rejects_ragged_values() {
        let result = PixelPopulation::new(3, vec![1.0, 2.0]);
        assert!(matches!(result, Err(PaletteError::InvalidImage { .. })));
    }

    #[test]
    fn test_population_rejects_bad_channel_count() {
        let result = PixelPopulation::new(5, vec![0.0; 10]);
        assert!(matches!(result, Err(PaletteError::InvalidImage { .. })));
    }

    #[test]
    fn test_population_iter_matches_pixel() {
        let population = PixelPopulation::new(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let collected: Vec<&[f32]> = population.iter().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1], population.pixel(1));
    }
}
