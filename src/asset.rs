// KujiraPixel
// copyright kujira project 2026

//! Sprite image loading. Files are decoded through the image crate and
//! converted to the engine's packed-RGBA [`Bitmap`] layout.

use crate::render::{bitmap::Bitmap, color::Rgba};
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum AssetError {
    Io(std::io::Error),
    Decode(image::ImageError),
    /// the decoded image has a zero width or height
    ZeroArea,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(e) => write!(f, "asset io error: {}", e),
            AssetError::Decode(e) => write!(f, "asset decode error: {}", e),
            AssetError::ZeroArea => write!(f, "asset image has zero area"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e)
    }
}

/// Decode an image file into a bitmap. Any format the image crate is built
/// with is accepted; pixels are converted to packed RGBA with alpha in the
/// low byte.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Bitmap, AssetError> {
    let img = image::open(path)?.to_rgba8();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(AssetError::ZeroArea);
    }
    let pixels = img
        .pixels()
        .map(|p| Rgba::from_channels(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();
    Ok(Bitmap::from_pixels(w as usize, h as usize, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_image("no/such/sprite.png").unwrap_err();
        assert!(matches!(
            err,
            AssetError::Io(_) | AssetError::Decode(_)
        ));
    }

    #[test]
    fn png_round_trip_preserves_channels() {
        let dir = std::env::temp_dir().join("kujira_asset_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("two_by_one.png");

        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 255, 128]));
        img.save(&path).unwrap();

        let bm = load_image(&path).unwrap();
        assert_eq!((bm.width(), bm.height()), (2, 1));
        assert_eq!(bm.get(0, 0), Some(Rgba::from_channels(255, 0, 0, 255)));
        assert_eq!(bm.get(1, 0), Some(Rgba::from_channels(0, 0, 255, 128)));
    }
}
