//! Image source loading.
//!
//! Decodes the session's source raster. A missing or undecodable file is
//! fatal to session startup and reported as a distinct error before any
//! editing state is constructed.

use std::path::Path;

use image::RgbImage;

use crate::error::SessionError;

/// Decode the image at `path` into an RGB raster.
pub fn load_from_path(path: &Path) -> Result<RgbImage, SessionError> {
    let decoded = image::open(path).map_err(|source| SessionError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    log::info!(
        "📂 Loaded {}x{} image from {:?}",
        rgb.width(),
        rgb.height(),
        path
    );
    Ok(rgb)
}

/// Decode an in-memory encoded image into an RGB raster.
pub fn load_from_memory(data: &[u8]) -> Result<RgbImage, SessionError> {
    let decoded = image::load_from_memory(data)?;
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_from_memory_roundtrips_pixels() {
        let img = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8, y as u8, 42]));
        let mut encoded = Vec::new();
        image::DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .unwrap();

        let loaded = load_from_memory(&encoded).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_undecodable_bytes_are_an_error() {
        let result = load_from_memory(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(SessionError::ImageDecode(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_from_path(Path::new("/definitely/not/here.png"));
        match result {
            Err(SessionError::ImageLoad { path, .. }) => {
                assert!(path.ends_with("here.png"));
            }
            other => panic!("expected ImageLoad error, got {:?}", other.map(|_| ())),
        }
    }
}
