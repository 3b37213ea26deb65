//! Hexadecimal color encoding
//!
//! Converts a 3-component floating point color vector to a canonical
//! lowercase `#rrggbb` string, and parses such strings back. Components
//! are rounded to the nearest integer and clamped to [0, 255] before
//! formatting.

use palette::Srgb;

use crate::constants::channels;
use crate::error::{PaletteError, Result};

/// Encode a 3-channel color vector as a lowercase `#rrggbb` string.
///
/// # Errors
///
/// Returns `PaletteError::InvalidColorVector` for any channel count other
/// than 3. Alpha must be dropped or composited before encoding.
pub fn to_hex(color: &[f32]) -> Result<String> {
    if color.len() != channels::RGB {
        return Err(PaletteError::InvalidColorVector {
            expected: channels::RGB,
            actual: color.len(),
        });
    }

    let quantize = |value: f32| value.round().clamp(0.0, channels::CHANNEL_MAX) as u8;
    let rgb = Srgb::<u8>::new(quantize(color[0]), quantize(color[1]), quantize(color[2]));
    Ok(format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue))
}

/// Parse a `#rrggbb` (or `rrggbb`) string into an 8-bit sRGB color.
///
/// # Errors
///
/// Returns `PaletteError::InvalidImage` if the string is not 6 hex digits.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(PaletteError::invalid_image(format!(
            "invalid hex color: expected 6 digits, got {}",
            hex.len()
        )));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| PaletteError::invalid_image(format!("invalid red value: {}", e)))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| PaletteError::invalid_image(format!("invalid green value: {}", e)))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| PaletteError::invalid_image(format!("invalid blue value: {}", e)))?;

    Ok(Srgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_primaries() {
        assert_eq!(to_hex(&[255.0, 0.0, 0.0]).unwrap(), "#ff0000");
        assert_eq!(to_hex(&[0.0, 255.0, 0.0]).unwrap(), "#00ff00");
        assert_eq!(to_hex(&[0.0, 0.0, 255.0]).unwrap(), "#0000ff");
    }

    #[test]
    fn test_to_hex_rounds_components() {
        assert_eq!(to_hex(&[127.4, 127.5, 128.6]).unwrap(), "#7f8081");
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(to_hex(&[-3.0, 270.0, 128.0]).unwrap(), "#00ff80");
    }

    #[test]
    fn test_to_hex_rejects_wrong_channel_count() {
        let result = to_hex(&[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            result,
            Err(PaletteError::InvalidColorVector {
                expected: 3,
                actual: 4
            })
        ));

        assert!(to_hex(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_parse_hex() {
        let red = parse_hex("#ff0000").unwrap();
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));

        // Leading '#' is optional
        let teal = parse_hex("008080").unwrap();
        assert_eq!((teal.red, teal.green, teal.blue), (0, 128, 128));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("#ff").is_err());
        assert!(parse_hex("#gggggg").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let hex = to_hex(&[12.0, 200.0, 99.0]).unwrap();
        let parsed = parse_hex(&hex).unwrap();
        assert_eq!((parsed.red, parsed.green, parsed.blue), (12, 200, 99));
    }
}
