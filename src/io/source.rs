//! Source image enumeration for batch processing

use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{PixelChainError, Result, invalid_parameter};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Whether the extension of `path` names an image format
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Whether `path` looks like a previously generated output
pub fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}

/// List the source images named by `target`
///
/// A file target is returned as-is if it is an image. A directory target
/// yields every image file directly inside it, excluding generated outputs,
/// sorted by path.
///
/// # Errors
///
/// Returns an error if:
/// - The target is a file without an image extension
/// - The target is neither a file nor a directory
/// - The directory cannot be read
pub fn collect_sources(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if is_image_path(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"file does not have an image extension",
            ))
        }
    } else if target.is_dir() {
        let read_error = |e: std::io::Error| PixelChainError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory",
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && is_image_path(&path) && !is_generated_output(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be an image file or a directory",
        ))
    }
}
