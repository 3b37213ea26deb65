//! Image loading for the standard raster formats
//!
//! Single entry point for opening an image from disk. Format detection is
//! extension-based; decoding delegates to the `image` crate. The loader
//! returns the decoded image together with the detected format so the
//! caller can run the support lookup before palette extraction.

use std::path::Path;

use image::DynamicImage;

use crate::error::{PaletteError, Result};

/// Image formats the loader recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (decoded as its first frame)
    Gif,
    /// WebP image
    WebP,
    /// BMP image
    Bmp,
    /// TIFF image
    Tiff,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "bmp" => Some(ImageFormat::Bmp),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            _ => None,
        }
    }

    /// Lowercase name used in error messages and support lookups
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tiff",
        }
    }
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Load an image from disk.
///
/// # Errors
///
/// Returns `PaletteError::ImageLoad` if the extension is unknown, the file
/// cannot be opened, or decoding fails.
pub fn load_image(path: &Path) -> Result<(DynamicImage, ImageFormat)> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| PaletteError::ImageLoad {
        message: format!("unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let reader = image::ImageReader::open(path).map_err(|e| {
        PaletteError::image_load(format!("failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        PaletteError::image_load(format!("failed to decode image: {}", path.display()), e)
    })?;

    Ok((img, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("anim.gif")),
            Some(ImageFormat::Gif)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("photo.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(!is_supported_extension("xyz"));
        assert!(!is_supported_extension("heic"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("does_not_exist.png"));
        assert!(matches!(result, Err(PaletteError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_unknown_extension() {
        let result = load_image(Path::new("file.doc"));
        assert!(matches!(result, Err(PaletteError::ImageLoad { .. })));
    }
}
