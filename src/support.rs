//! Format/mode compatibility lookup
//!
//! Decides whether an image's format and color mode combination is
//! supported, and whether it is handled as a static or animated image.
//! This is a plain table lookup run by the caller before palette
//! extraction or resizing; the engine itself only validates pixel shape.

use image::ColorType;

use crate::error::{PaletteError, Result};
use crate::loader::ImageFormat;

/// Color mode of a decoded image, derived from its pixel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 3-channel color
    Rgb,
    /// 4-channel color with alpha
    Rgba,
    /// Single-channel grayscale
    Luma,
    /// Grayscale with alpha
    LumaAlpha,
}

impl ColorMode {
    /// Derive the mode from an `image` crate color type
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => ColorMode::Luma,
            ColorType::La8 | ColorType::La16 => ColorMode::LumaAlpha,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
            _ => ColorMode::Rgb,
        }
    }

    /// Lowercase name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Rgba => "rgba",
            ColorMode::Luma => "luma",
            ColorMode::LumaAlpha => "luma-alpha",
        }
    }
}

/// How a supported image is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProfile {
    /// Single-frame image
    Static {
        format: ImageFormat,
        mode: ColorMode,
    },
    /// Multi-frame image; palette extraction uses the first frame
    Animated {
        format: ImageFormat,
        mode: ColorMode,
    },
}

/// (format, mode) combinations handled as static images
const STATIC_PROFILES: &[(ImageFormat, ColorMode)] = &[
    (ImageFormat::Jpeg, ColorMode::Rgb),
    (ImageFormat::Png, ColorMode::Rgb),
    (ImageFormat::Png, ColorMode::Rgba),
    (ImageFormat::WebP, ColorMode::Rgb),
    (ImageFormat::WebP, ColorMode::Rgba),
    (ImageFormat::Bmp, ColorMode::Rgb),
    (ImageFormat::Tiff, ColorMode::Rgb),
];

/// (format, mode) combinations handled as animated images
const ANIMATED_PROFILES: &[(ImageFormat, ColorMode)] = &[
    (ImageFormat::Gif, ColorMode::Rgb),
    (ImageFormat::Gif, ColorMode::Rgba),
];

/// Look up the processing profile for a format/mode combination.
///
/// GIF always resolves against the animated table; everything else is
/// static. Returns `None` for unsupported combinations.
pub fn profile_for(format: ImageFormat, mode: ColorMode) -> Option<ImageProfile> {
    if format == ImageFormat::Gif {
        ANIMATED_PROFILES
            .iter()
            .find(|&&(f, m)| f == format && m == mode)
            .map(|_| ImageProfile::Animated { format, mode })
    } else {
        STATIC_PROFILES
            .iter()
            .find(|&&(f, m)| f == format && m == mode)
            .map(|_| ImageProfile::Static { format, mode })
    }
}

/// Check whether a format/mode combination is supported
pub fn is_supported(format: ImageFormat, mode: ColorMode) -> bool {
    profile_for(format, mode).is_some()
}

/// Resolve the profile or fail with `PaletteError::UnsupportedImage`
pub fn ensure_supported(format: ImageFormat, mode: ColorMode) -> Result<ImageProfile> {
    profile_for(format, mode).ok_or_else(|| PaletteError::UnsupportedImage {
        format: format.name().to_string(),
        mode: mode.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_profile_lookup() {
        let profile = profile_for(ImageFormat::Jpeg, ColorMode::Rgb);
        assert_eq!(
            profile,
            Some(ImageProfile::Static {
                format: ImageFormat::Jpeg,
                mode: ColorMode::Rgb
            })
        );
    }

    #[test]
    fn test_animated_profile_lookup() {
        let profile = profile_for(ImageFormat::Gif, ColorMode::Rgba);
        assert!(matches!(profile, Some(ImageProfile::Animated { .. })));
    }

    #[test]
    fn test_grayscale_png_unsupported() {
        assert!(!is_supported(ImageFormat::Png, ColorMode::Luma));
        assert!(ensure_supported(ImageFormat::Png, ColorMode::Luma).is_err());
    }

    #[test]
    fn test_jpeg_rgba_unsupported() {
        // JPEG cannot carry alpha
        assert!(!is_supported(ImageFormat::Jpeg, ColorMode::Rgba));
    }

    #[test]
    fn test_color_mode_from_color_type() {
        assert_eq!(ColorMode::from_color_type(ColorType::L8), ColorMode::Luma);
        assert_eq!(ColorMode::from_color_type(ColorType::Rgb8), ColorMode::Rgb);
        assert_eq!(
            ColorMode::from_color_type(ColorType::Rgba8),
            ColorMode::Rgba
        );
        assert_eq!(
            ColorMode::from_color_type(ColorType::La8),
            ColorMode::LumaAlpha
        );
    }

    #[test]
    fn test_ensure_supported_error_names_combination() {
        let err = ensure_supported(ImageFormat::Png, ColorMode::Luma).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("png"));
        assert!(message.contains("luma"));
    }
}
