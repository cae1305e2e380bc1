//! Pixel grid storage for source and generated images
//!
//! Wraps an `ndarray` 2D array of colors indexed by `[row, col]`. Freshly
//! allocated grids are filled with [`Color::UNREACHED`], which generation
//! leaves in place for any pixel its growth never reaches.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::color::{Color, DEFAULT_CHANNELS};
use crate::spatial::neighbors::Position;

/// Fixed-size 2D array of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<const N: usize = DEFAULT_CHANNELS> {
    pixels: Array2<Color<N>>,
}

impl<const N: usize> PixelGrid<N> {
    /// Allocate a `width` x `height` grid filled with the unreached sentinel
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), Color::UNREACHED),
        }
    }

    /// Build a grid from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels.len()` is not `width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color<N>>) -> Result<Self> {
        let provided = pixels.len();
        let pixels = Array2::from_shape_vec((height, width), pixels).map_err(|_shape_error| {
            invalid_parameter(
                "pixels",
                &provided,
                &format!("expected {} pixels for a {width}x{height} grid", width * height),
            )
        })?;
        Ok(Self { pixels })
    }

    /// Build a grid from equally sized rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths
    pub fn from_rows<R: AsRef<[Color<N>]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != width) {
            return Err(invalid_parameter(
                "rows",
                &row.as_ref().len(),
                &format!("every row must hold {width} pixels"),
            ));
        }
        let pixels = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::from_pixels(width, rows.len(), pixels)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Total pixel count
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `position` lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.height() && position[1] < self.width()
    }

    /// Color at `position`, if in bounds
    pub fn get(&self, position: Position) -> Option<Color<N>> {
        self.pixels.get(position).copied()
    }

    /// Overwrite the color at `position`
    ///
    /// Returns false without writing if the position is out of bounds.
    pub fn set(&mut self, position: Position, color: Color<N>) -> bool {
        self.pixels.get_mut(position).map(|pixel| *pixel = color).is_some()
    }

    /// Iterate `(position, color)` pairs in row-major order
    pub fn indexed_pixels(&self) -> impl Iterator<Item = (Position, Color<N>)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((row, col), color)| ([row, col], *color))
    }

    /// Iterate colors in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color<N>> + '_ {
        self.pixels.iter().copied()
    }
}
