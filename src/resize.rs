//! Resize, alpha flattening, and re-encoding
//!
//! The processing steps the original service ran around palette
//! extraction: composite RGBA images over an opaque white background,
//! resize to a target geometry, and encode to bytes. All behavior is
//! driven by a [`ResizeSpec`]; there is one code path regardless of which
//! preset (icon, wallpaper) produced the spec.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, Rgb, RgbImage};

use crate::config::{OutputFormat, ResizeSpec};
use crate::error::{PaletteError, Result};

/// Composite an image's alpha layer over an opaque white background,
/// producing a plain RGB image. Images without alpha pass through
/// unchanged apart from conversion to RGB.
pub fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flattened = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let blend = |channel: u8| {
            (channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8
        };
        flattened.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    flattened
}

/// Resize an image to the spec's target dimensions with its resample
/// filter
pub fn resize(image: &DynamicImage, spec: &ResizeSpec) -> DynamicImage {
    let (width, height) = spec.size;
    DynamicImage::ImageRgba8(imageops::resize(image, width, height, spec.filter.into()))
}

/// Encode an image to bytes in the spec's output format.
///
/// JPEG honors the spec's quality setting; PNG and WebP encode lossless.
/// JPEG input is flattened to RGB first since the format cannot carry
/// alpha.
///
/// # Errors
///
/// Returns `PaletteError::ImageEncode` if the encoder fails.
pub fn encode(image: &DynamicImage, spec: &ResizeSpec) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    match spec.format {
        OutputFormat::Jpeg => {
            let rgb = flatten_alpha(image);
            let encoder = JpegEncoder::new_with_quality(&mut cursor, spec.quality);
            rgb.write_with_encoder(encoder)
                .map_err(|e| PaletteError::image_encode("JPEG encoding failed", e))?;
        }
        OutputFormat::Png => {
            image
                .write_to(&mut cursor, image::ImageFormat::Png)
                .map_err(|e| PaletteError::image_encode("PNG encoding failed", e))?;
        }
        OutputFormat::WebP => {
            image
                .write_to(&mut cursor, image::ImageFormat::WebP)
                .map_err(|e| PaletteError::image_encode("WebP encoding failed", e))?;
        }
    }

    Ok(buffer)
}

/// Flatten (when the source carries alpha), resize, and encode one image
pub fn process(image: &DynamicImage, spec: &ResizeSpec) -> Result<Vec<u8>> {
    let source = if image.color().has_alpha() {
        DynamicImage::ImageRgb8(flatten_alpha(image))
    } else {
        image.clone()
    };
    encode(&resize(&source, spec), spec)
}

/// Flatten, resize, encode, and write one image to `path`, returning the
/// encoded bytes as well.
///
/// # Errors
///
/// Returns `PaletteError::ImageEncode` if encoding or writing fails.
pub fn process_to_path(image: &DynamicImage, spec: &ResizeSpec, path: &Path) -> Result<Vec<u8>> {
    let bytes = process(image, spec)?;
    std::fs::write(path, &bytes).map_err(|e| {
        PaletteError::image_encode(format!("failed to write {}", path.display()), e)
    })?;
    Ok(bytes)
}

/// Process a batch of images with a shared spec, collecting the encoded
/// bytes in input order. When `output_paths` is given it must supply one
/// path per image, and each encoded image is also written to its path.
///
/// # Errors
///
/// Returns `PaletteError::ImageEncode` if encoding or writing fails, or
/// if the path count does not match the image count.
pub fn process_batch<'a, I>(
    images: I,
    spec: &ResizeSpec,
    output_paths: Option<&[&Path]>,
) -> Result<Vec<Vec<u8>>>
where
    I: IntoIterator<Item = &'a DynamicImage>,
{
    let images: Vec<&DynamicImage> = images.into_iter().collect();
    if let Some(paths) = output_paths {
        if paths.len() != images.len() {
            return Err(PaletteError::ImageEncode {
                message: format!(
                    "{} output paths supplied for {} images",
                    paths.len(),
                    images.len()
                ),
                source: None,
            });
        }
        images
            .into_iter()
            .zip(paths)
            .map(|(image, path)| process_to_path(image, spec, path))
            .collect()
    } else {
        images.into_iter().map(|image| process(image, spec)).collect()
    }
}
