//! Tests for image decoding, tile encoding and format sniffing

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, ImageReader, Rgba};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tileex::AlgorithmError;
    use tileex::io::image::{is_lossless_path, load_image, save_tile};

    fn sample_tile() -> DynamicImage {
        let buffer = ImageBuffer::from_fn(3, 2, |x, y| Rgba([x as u8 * 40, y as u8 * 90, 7, 128]));
        DynamicImage::ImageRgba8(buffer)
    }

    // Tests a saved tile decodes back to identical pixels
    // Verified by flattening alpha before saving
    #[test]
    fn test_save_and_load_tile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.png");
        let tile = sample_tile();

        save_tile(&tile, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1), tile.get_pixel(2, 1));
    }

    // Tests missing parent directories are created
    // Verified by removing directory creation
    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("tile.png");

        save_tile(&sample_tile(), &path).unwrap();
        assert!(path.exists());
    }

    // Tests output is PNG even when the extension says otherwise
    // Verified by inferring the format from the extension
    #[test]
    fn test_save_always_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.jpg");

        save_tile(&sample_tile(), &path).unwrap();

        let reader = ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
    }

    // Tests a missing file reports the path it tried
    // Verified by dropping the path from the error
    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("definitely/not/here.png"));

        match result {
            Err(AlgorithmError::ImageLoad { path, .. }) => {
                assert_eq!(path, Path::new("definitely/not/here.png"));
            }
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests undecodable content is an error
    // Verified by returning an empty image on decode failure
    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, "not a png").unwrap();

        assert!(matches!(
            load_image(&path),
            Err(AlgorithmError::ImageLoad { .. })
        ));
    }

    // Tests writing into a path occupied by a file fails cleanly
    // Verified by ignoring the directory creation error
    #[test]
    fn test_save_into_unwritable_location() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file, not directory").unwrap();

        let result = save_tile(&sample_tile(), &blocker.join("tile.png"));
        assert!(matches!(result, Err(AlgorithmError::FileSystem { .. })));
    }

    // Tests a failed write is an export error naming the destination
    // Verified by reporting write failures as load errors on an unknown path
    #[test]
    fn test_save_onto_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("occupied.png");
        fs::create_dir(&target).unwrap();

        match save_tile(&sample_tile(), &target) {
            Err(error @ AlgorithmError::ImageExport { .. }) => {
                assert!(error.to_string().contains("occupied.png"));
                assert!(error.to_string().starts_with("Failed to export"));
            }
            other => unreachable!("Expected ImageExport error, got {other:?}"),
        }
    }

    // Tests extension sniffing for lossless input
    // Verified by matching the extension case-sensitively
    #[test]
    fn test_is_lossless_path() {
        assert!(is_lossless_path(Path::new("wallpaper.png")));
        assert!(is_lossless_path(Path::new("WALLPAPER.PNG")));
        assert!(!is_lossless_path(Path::new("wallpaper.jpg")));
        assert!(!is_lossless_path(Path::new("wallpaper.jpeg")));
        assert!(!is_lossless_path(Path::new("wallpaper")));
        assert!(!is_lossless_path(Path::new("png")));
    }
}
