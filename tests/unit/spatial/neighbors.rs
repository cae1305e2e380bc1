//! Tests for 8-neighbor enumeration and border clipping

#[cfg(test)]
mod tests {
    use pixelchain::spatial::neighbors::{NEIGHBOR_OFFSETS, neighbor_count, neighbors};

    // Tests interior positions see all eight neighbors in offset order
    // Verified by reordering the offset table
    #[test]
    fn test_interior_neighbors_in_order() {
        let found: Vec<_> = neighbors([1, 1], 3, 3).collect();

        assert_eq!(
            found,
            vec![
                [1, 2],
                [1, 0],
                [2, 2],
                [2, 1],
                [2, 0],
                [0, 2],
                [0, 1],
                [0, 0],
            ]
        );
    }

    // Tests corners, edges and interior get 3, 5 and 8 neighbors
    // Verified by wrapping around the grid edges
    #[test]
    fn test_border_positions_have_fewer_neighbors() {
        assert_eq!(neighbor_count([0, 0], 4, 4), 3);
        assert_eq!(neighbor_count([3, 3], 4, 4), 3);
        assert_eq!(neighbor_count([0, 2], 4, 4), 5);
        assert_eq!(neighbor_count([2, 0], 4, 4), 5);
        assert_eq!(neighbor_count([2, 2], 4, 4), 8);
    }

    // Tests the center is never its own neighbor
    // Verified by adding a zero offset
    #[test]
    fn test_offsets_exclude_center() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
        assert!(!NEIGHBOR_OFFSETS.contains(&[0, 0]));
        assert!(neighbors([1, 1], 3, 3).all(|position| position != [1, 1]));
    }

    // Tests single-pixel and single-row grids
    // Verified by removing the row bounds check
    #[test]
    fn test_degenerate_grids() {
        assert_eq!(neighbor_count([0, 0], 1, 1), 0);
        let found: Vec<_> = neighbors([0, 1], 1, 3).collect();
        assert_eq!(found, vec![[0, 2], [0, 0]]);
    }
}
