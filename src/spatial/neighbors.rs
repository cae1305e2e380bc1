//! 8-connected neighborhood enumeration with bounds clipping

/// Grid coordinate as `[row, col]`
pub type Position = [usize; 2];

/// Offsets of the eight neighbors of a position as `[row, col]` deltas
///
/// The order is part of the generation contract: neighbors are pushed onto
/// the frontier in this order and popped in reverse.
pub const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [0, 1],
    [0, -1],
    [1, 1],
    [1, 0],
    [1, -1],
    [-1, 1],
    [-1, 0],
    [-1, -1],
];

/// Iterate the in-bounds 8-neighbors of `position` in a `rows` x `cols` grid
///
/// Positions outside the grid are skipped; there is no wraparound.
pub fn neighbors(position: Position, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |[d_row, d_col]| {
            let row = position[0].checked_add_signed(d_row)?;
            let col = position[1].checked_add_signed(d_col)?;
            (row < rows && col < cols).then_some([row, col])
        })
}

/// Number of in-bounds 8-neighbors of `position`
pub fn neighbor_count(position: Position, rows: usize, cols: usize) -> usize {
    neighbors(position, rows, cols).count()
}
