//! Writing rendered images to disk.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::{color_to_rgb8, ImageBuffer, PersistenceError};

/// Save an image as an 8-bit PNG.
///
/// Channels are clamped to [0, 1] and written without a transfer curve.
/// Missing parent directories are created. The in-memory image is never
/// modified, so a failed save can simply be retried elsewhere.
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let rgb = RgbImage::from_fn(image.width, image.height, |x, y| {
        Rgb(color_to_rgb8(image.get(x, y)))
    });

    rgb.save_with_format(path, ImageFormat::Png)
        .map_err(|source| PersistenceError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_save_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renders").join("render.png");

        let mut image = ImageBuffer::new(3, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(2, 1, Color::new(2.0, 0.5, -1.0));

        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(loaded.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(loaded.get_pixel(2, 1), &Rgb([255, 127, 0]));
    }

    #[test]
    fn test_save_png_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten by a file
        let image = ImageBuffer::new(2, 2);
        let before = image.clone();

        let result = save_png(&image, dir.path());
        assert!(matches!(result, Err(PersistenceError::Encode { .. })));
        assert_eq!(image, before);
    }

    #[test]
    fn test_save_png_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = save_png(&ImageBuffer::new(1, 1), blocker.join("render.png"));
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }
}
