//! Image dimension probing

use crate::types::Result;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// File extensions accepted as image inputs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// Check whether a path has a supported raster image extension.
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Read pixel dimensions from encoded image bytes.
///
/// Only the header is parsed; the pixel data is not decoded. The bytes
/// stay untouched so the caller can embed them as-is afterwards.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let dimensions = reader.into_dimensions()?;
    Ok(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_probe_png_dimensions() {
        let bytes = png_bytes(200, 100);
        assert_eq!(probe_dimensions(&bytes).unwrap(), (200, 100));
    }

    #[test]
    fn test_probe_garbage_fails() {
        let bytes = vec![0u8; 32];
        assert!(probe_dimensions(&bytes).is_err());
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image("photo.jpg"));
        assert!(is_supported_image("photo.JPEG"));
        assert!(is_supported_image("scan.tiff"));
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("no_extension"));
    }
}
