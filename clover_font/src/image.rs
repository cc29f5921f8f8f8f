//! Conversion of the coverage atlas into an encoded image.

use anyhow::Result;

/// Encodes 8-bit RGBA pixel data into an image file format.
pub trait ImageEncoder {
    /// Encodes `width * height` RGBA pixels, 4 bytes each, row-major.
    fn encode_rgba(&self, rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>>;
}

/// Returns the size in bytes of a `width * height` RGBA image, or `None` if it does not fit in
/// memory.
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)?.checked_mul(4)
}

/// Promotes single channel coverage to opaque white RGBA pixels with coverage as alpha.
pub fn coverage_to_rgba(coverage: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(coverage.len() * 4);
    for &alpha in coverage {
        rgba.extend_from_slice(&[0xFF, 0xFF, 0xFF, alpha]);
    }
    rgba
}

#[cfg(feature = "png")]
pub use png_encoder::PngEncoder;

#[cfg(feature = "png")]
mod png_encoder {
    use super::{rgba_len, ImageEncoder};
    use anyhow::{ensure, Context, Result};

    /// Encodes images as PNG files using the `png` crate.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct PngEncoder;
    impl ImageEncoder for PngEncoder {
        fn encode_rgba(&self, rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
            ensure!(
                rgba_len(width, height) == Some(rgba.len()),
                "error writing png file: expected {width}x{height} RGBA pixels, got {} bytes",
                rgba.len()
            );

            let mut data = Vec::new();
            let mut encoder = png::Encoder::new(&mut data, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().context("error writing png file")?;
            writer
                .write_image_data(rgba)
                .context("error writing png file")?;
            writer.finish().context("error writing png file")?;
            Ok(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_is_white_with_coverage_alpha() {
        let coverage = [0, 1, 127, 128, 255];
        let rgba = coverage_to_rgba(&coverage);
        assert_eq!(rgba.len(), coverage.len() * 4);
        for (i, b) in coverage.iter().enumerate() {
            assert_eq!(&rgba[i * 4..i * 4 + 4], &[255, 255, 255, *b]);
        }
    }

    #[test]
    fn rgba_len_overflow() {
        assert_eq!(rgba_len(3, 2), Some(24));
        assert_eq!(rgba_len(0, u32::MAX), Some(0));
        if cfg!(target_pointer_width = "64") {
            assert_eq!(rgba_len(u32::MAX, u32::MAX), None);
            assert_eq!(rgba_len(4_000_000_000, 4_000_000_000), None);
        }
    }

    #[test]
    fn rgba_of_nothing_is_nothing() {
        assert!(coverage_to_rgba(&[]).is_empty());
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_has_signature_and_dimensions() {
        let rgba = coverage_to_rgba(&[0, 64, 128, 255, 0, 0]);
        let png = PngEncoder.encode_rgba(&rgba, 3, 2).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR immediately follows the signature.
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes(png[16..20].try_into().unwrap()), 3);
        assert_eq!(u32::from_be_bytes(png[20..24].try_into().unwrap()), 2);
        // bit depth 8, color type 6 (RGBA)
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 6);
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_is_deterministic() {
        let rgba = coverage_to_rgba(&(0..=255).collect::<Vec<u8>>());
        let a = PngEncoder.encode_rgba(&rgba, 16, 16).unwrap();
        let b = PngEncoder.encode_rgba(&rgba, 16, 16).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_rejects_mismatched_buffers() {
        assert!(PngEncoder.encode_rgba(&[0; 12], 2, 2).is_err());
    }
}
