//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Colors as fixed-width channel tuples
//! - Pixel grid storage
//! - 8-connected neighborhood enumeration

/// Fixed-width color values
pub mod color;
/// Pixel grid storage and access
pub mod grid;
/// 8-neighbor offsets and bounds clipping
pub mod neighbors;

pub use color::Color;
pub use grid::PixelGrid;
pub use neighbors::Position;
