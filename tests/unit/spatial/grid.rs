//! Tests for pixel grid construction, bounds and iteration order

#[cfg(test)]
mod tests {
    use pixelchain::PixelChainError;
    use pixelchain::spatial::Color;
    use pixelchain::spatial::grid::PixelGrid;

    const A: Color = Color::new([1, 0, 0]);
    const B: Color = Color::new([0, 1, 0]);
    const C: Color = Color::new([0, 0, 1]);

    // Tests a new grid has the requested shape and unreached fill
    // Verified by swapping width and height in the array shape
    #[test]
    fn test_new_grid_is_unreached() {
        let grid: PixelGrid = PixelGrid::new(4, 2);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.area(), 8);
        assert!(grid.pixels().all(|color| color.is_unreached()));
    }

    // Tests pixel count mismatch is rejected
    // Verified by ignoring the shape error
    #[test]
    fn test_from_pixels_wrong_length() {
        let result = PixelGrid::from_pixels(2, 2, vec![A, B, C]);

        assert!(matches!(
            result,
            Err(PixelChainError::InvalidParameter {
                parameter: "pixels",
                ..
            })
        ));
    }

    // Tests rows are laid out row-major and indexed as [row, col]
    // Verified by transposing the row iteration
    #[test]
    fn test_from_rows_layout() {
        let Ok(grid) = PixelGrid::from_rows(&[[A, B, C], [C, B, A]]) else {
            unreachable!("rows have equal length");
        };

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get([0, 2]), Some(C));
        assert_eq!(grid.get([1, 0]), Some(C));
        assert_eq!(grid.get([2, 0]), None);
        assert_eq!(grid.pixels().collect::<Vec<_>>(), vec![A, B, C, C, B, A]);
    }

    // Tests ragged rows are rejected
    // Verified by only checking the first row length
    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<Color>> = vec![vec![A, B], vec![C]];
        assert!(PixelGrid::from_rows(&rows).is_err());
    }

    // Tests writes inside bounds succeed and outside bounds are refused
    // Verified by returning true for every write
    #[test]
    fn test_set_respects_bounds() {
        let mut grid: PixelGrid = PixelGrid::new(2, 2);

        assert!(grid.set([1, 1], B));
        assert!(!grid.set([2, 0], B));
        assert!(!grid.set([0, 2], B));
        assert_eq!(grid.get([1, 1]), Some(B));
        assert!(grid.contains([1, 1]));
        assert!(!grid.contains([1, 2]));
    }

    // Tests indexed iteration reports positions with their colors
    // Verified by reporting (col, row) positions
    #[test]
    fn test_indexed_pixels() {
        let Ok(grid) = PixelGrid::from_rows(&[[A, B]]) else {
            unreachable!("single row");
        };

        let pixels: Vec<_> = grid.indexed_pixels().collect();
        assert_eq!(pixels, vec![([0, 0], A), ([0, 1], B)]);
    }

    // Tests an empty grid reports zero area
    // Verified by treating zero width as one column
    #[test]
    fn test_empty_grid() {
        let grid: PixelGrid = PixelGrid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.area(), 0);
    }
}
