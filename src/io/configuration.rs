//! Synthesis constants and runtime configuration defaults

// Output grid settings, independent of the source image size
/// Default output width in pixels
pub const DEFAULT_OUTPUT_WIDTH: usize = 100;
/// Default output height in pixels
pub const DEFAULT_OUTPUT_HEIGHT: usize = 100;
/// Default bytes per color (RGB)
pub const DEFAULT_CHANNELS: usize = crate::spatial::color::DEFAULT_CHANNELS;
/// Largest supported bytes per color (RGBA)
pub const MAX_CHANNELS: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Drawn pixels between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 256;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
