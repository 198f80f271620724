//! Translation between `(row, col)` positions and the row-major flat layout of a grid.

/// Flat index of `(row, col)` in a grid with `cols` columns.
///
/// No bounds checking is done; validate with [`is_in_bounds`] first.
pub fn to_index(row: usize, col: usize, cols: usize) -> usize {
    col + row * cols
}

pub fn to_row(index: usize, cols: usize) -> usize {
    index / cols
}

pub fn to_col(index: usize, cols: usize) -> usize {
    index % cols
}

/// Returns `true` iff `0 <= row < rows` and `0 <= col < cols`.
///
/// Coordinates are signed so that neighbour offsets and pointer positions
/// left of or above the grid can be checked without wrapping.
pub fn is_in_bounds(row: i64, col: i64, rows: usize, cols: usize) -> bool {
    (0..rows as i64).contains(&row) && (0..cols as i64).contains(&col)
}
