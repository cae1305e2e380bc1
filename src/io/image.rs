//! Decoding source images into pixel grids and encoding generated grids

use crate::io::error::{PixelChainError, Result};
use crate::spatial::{Color, PixelGrid};
use image::{ColorType, DynamicImage};
use std::path::Path;

/// Pixel layout used for `N` bytes per color
///
/// # Errors
///
/// Returns an error if `N` is not between 1 and 4
pub fn color_type_for<const N: usize>() -> Result<ColorType> {
    match N {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        channels => Err(PixelChainError::UnsupportedChannels { channels }),
    }
}

/// Convert a decoded image into an `N`-channel pixel grid
///
/// One channel is luma, two are luma with alpha, three are RGB and four
/// are RGBA.
///
/// # Errors
///
/// Returns an error if `N` is not between 1 and 4
pub fn grid_from_image<const N: usize>(img: &DynamicImage) -> Result<PixelGrid<N>> {
    let raw = match color_type_for::<N>()? {
        ColorType::L8 => img.to_luma8().into_raw(),
        ColorType::La8 => img.to_luma_alpha8().into_raw(),
        ColorType::Rgb8 => img.to_rgb8().into_raw(),
        _ => img.to_rgba8().into_raw(),
    };

    let pixels = raw
        .chunks_exact(N)
        .map(|chunk| {
            let mut channels = [0u8; N];
            channels.copy_from_slice(chunk);
            Color::new(channels)
        })
        .collect();

    PixelGrid::from_pixels(img.width() as usize, img.height() as usize, pixels)
}

/// Decode the image at `path` into an `N`-channel pixel grid
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a decodable image
/// - The image has no pixels
/// - `N` is not between 1 and 4
pub fn load_grid<const N: usize>(path: &Path) -> Result<PixelGrid<N>> {
    let img = image::open(path).map_err(|e| PixelChainError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(PixelChainError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    grid_from_image(&img)
}

/// Encode `grid` to `path`, choosing the format from the file extension
///
/// Unreached pixels are written as their all-zero sentinel color.
///
/// # Errors
///
/// Returns an error if:
/// - `N` is not between 1 and 4
/// - The parent directory cannot be created
/// - The format cannot store this channel layout or the file cannot be written
pub fn save_grid<const N: usize>(grid: &PixelGrid<N>, path: &Path) -> Result<()> {
    let color_type = color_type_for::<N>()?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PixelChainError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let raw: Vec<u8> = grid
        .pixels()
        .flat_map(|color| *color.channels())
        .collect();

    image::save_buffer(
        path,
        &raw,
        grid.width() as u32,
        grid.height() as u32,
        color_type,
    )
    .map_err(|e| PixelChainError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
