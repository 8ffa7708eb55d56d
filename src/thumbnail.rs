/// Tile thumbnails
///
/// Photos are decoded and downscaled off the UI thread, then handed to iced
/// as raw RGBA handles. Nothing is written to disk.
use ::image::imageops::FilterType;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::ThumbnailError;

/// Load state of one tile's thumbnail
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed(ThumbnailError),
}

/// Decode `path` and shrink it so its longest edge is at most `max_size`
pub async fn load_thumbnail(path: PathBuf, max_size: u32) -> Result<Handle, ThumbnailError> {
    // Spawn blocking because decoding and resizing are CPU-bound
    task::spawn_blocking(move || load_thumbnail_blocking(&path, max_size))
        .await
        .map_err(|e| ThumbnailError::Task(e.to_string()))?
}

/// Blocking implementation of thumbnail loading
fn load_thumbnail_blocking(path: &Path, max_size: u32) -> Result<Handle, ThumbnailError> {
    let rgba = decode_thumbnail(path, max_size)?;
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Decode and resize to RGBA pixels
fn decode_thumbnail(path: &Path, max_size: u32) -> Result<::image::RgbaImage, ThumbnailError> {
    if !path.exists() {
        return Err(ThumbnailError::NotFound(path.display().to_string()));
    }

    let img = ::image::open(path).map_err(|e| ThumbnailError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    // Only ever shrink; small images keep their size
    let img = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Triangle)
    } else {
        img
    };

    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_shrinks_large_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        ::image::RgbaImage::new(800, 400).save(&path).unwrap();

        let rgba = decode_thumbnail(&path, 200).unwrap();
        assert_eq!(rgba.dimensions(), (200, 100));
    }

    #[test]
    fn test_decode_keeps_small_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        ::image::RgbaImage::new(50, 30).save(&path).unwrap();

        let rgba = decode_thumbnail(&path, 200).unwrap();
        assert_eq!(rgba.dimensions(), (50, 30));
    }

    #[test]
    fn test_bundled_photo_decodes() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/photos/image-1.png");
        let rgba = decode_thumbnail(&path, 160).unwrap();
        assert_eq!(rgba.dimensions(), (160, 120));
    }

    #[test]
    fn test_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = decode_thumbnail(&dir.path().join("gone.png"), 200).unwrap_err();
        assert!(matches!(missing, ThumbnailError::NotFound(_)));

        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"definitely not a png").unwrap();
        let err = decode_thumbnail(&corrupt, 200).unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode { .. }));
    }
}
