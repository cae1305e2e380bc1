//! Tests for decoding source images and encoding generated grids

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage, RgbaImage};
    use pixelchain::PixelChainError;
    use pixelchain::io::image::{grid_from_image, load_grid, save_grid};
    use pixelchain::spatial::{Color, PixelGrid};
    use std::fs;

    const RED: Color = Color::new([255, 0, 0]);
    const BLUE: Color = Color::new([0, 0, 255]);

    // Tests a written PNG decodes back to the same pixels
    // Verified by writing channels in reverse order
    #[test]
    fn test_save_then_load_png() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("out.png");
        let Ok(grid) = PixelGrid::from_rows(&[[RED, BLUE, RED], [BLUE, RED, BLUE]]) else {
            unreachable!("rows have equal length");
        };

        assert!(save_grid(&grid, &path).is_ok());
        let Ok(loaded) = load_grid::<3>(&path) else {
            unreachable!("grid was just written");
        };

        assert_eq!(loaded, grid);
    }

    // Tests channel conversion picks luma or RGBA layouts
    // Verified by always converting through RGB
    #[test]
    fn test_grid_from_image_channel_layouts() {
        let Some(rgb) = RgbImage::from_raw(2, 1, vec![255, 255, 255, 0, 0, 0]) else {
            unreachable!("buffer matches dimensions");
        };
        let image = DynamicImage::ImageRgb8(rgb);

        let Ok(luma) = grid_from_image::<1>(&image) else {
            unreachable!("one channel is supported");
        };
        assert_eq!(luma.get([0, 0]), Some(Color::new([255])));
        assert_eq!(luma.get([0, 1]), Some(Color::new([0])));

        let Ok(rgba) = grid_from_image::<4>(&image) else {
            unreachable!("four channels are supported");
        };
        assert_eq!(rgba.get([0, 1]), Some(Color::new([0, 0, 0, 255])));
    }

    // Tests alpha survives an RGBA round trip through PNG
    // Verified by dropping the alpha channel on export
    #[test]
    fn test_rgba_alpha_preserved() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("alpha.png");
        let Some(buffer) = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]) else {
            unreachable!("buffer matches dimensions");
        };
        let Ok(grid) = grid_from_image::<4>(&DynamicImage::ImageRgba8(buffer)) else {
            unreachable!("four channels are supported");
        };

        assert!(save_grid(&grid, &path).is_ok());
        let loaded = load_grid::<4>(&path).ok().and_then(|grid| grid.get([0, 0]));
        assert_eq!(loaded, Some(Color::new([10, 20, 30, 40])));
    }

    // Tests missing and corrupt files fail as input errors
    // Verified by returning an empty grid on decode failure
    #[test]
    fn test_load_failures_are_input_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing.png");
        let corrupt = dir.path().join("corrupt.png");
        fs::write(&corrupt, b"not an image").ok();

        for path in [missing, corrupt] {
            match load_grid::<3>(&path) {
                Err(error) => assert!(error.is_input_error(), "{error}"),
                Ok(_) => unreachable!("{} should not decode", path.display()),
            }
        }
    }

    // Tests unsupported channel counts are rejected on both sides
    // Verified by falling back to RGB for unknown counts
    #[test]
    fn test_unsupported_channels() {
        let grid: PixelGrid<5> = PixelGrid::new(1, 1);
        let result = save_grid(&grid, std::path::Path::new("never-written.png"));
        assert!(matches!(
            result,
            Err(PixelChainError::UnsupportedChannels { channels: 5 })
        ));

        let image = DynamicImage::new_rgb8(1, 1);
        assert!(grid_from_image::<5>(&image).is_err());
    }

    // Tests an unwritable destination is an output error
    // Verified by ignoring directory creation failures
    #[test]
    fn test_save_failure_is_output_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").ok();
        let grid: PixelGrid = PixelGrid::new(2, 2);

        match save_grid(&grid, &blocker.join("out.png")) {
            Err(error) => assert!(error.is_output_error(), "{error}"),
            Ok(()) => unreachable!("parent path is a regular file"),
        }
    }
}
