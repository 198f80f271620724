use crate::utils::{to_col, to_row};
use crate::Grid;

const NEIB_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of live cells among the 8 neighbours of `(row, col)`.
///
/// Neighbours outside the grid contribute nothing: the field has hard edges.
pub fn live_neighbours(grid: &Grid, row: usize, col: usize) -> usize {
    let (row, col) = (row as i64, col as i64);
    NEIB_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.get(row + dr, col + dc))
        .count()
}

/// Computes the generation that follows `grid` under the B3/S23 rule.
///
/// The input is left untouched; the result owns freshly allocated cells.
pub fn next_generation(grid: &Grid) -> Grid {
    let cols = grid.cols();
    let cells = grid
        .cells()
        .iter()
        .enumerate()
        .map(|(i, &alive)| {
            let neibs = live_neighbours(grid, to_row(i, cols), to_col(i, cols));
            if alive {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            }
        })
        .collect();
    Grid::with_same_shape(grid, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::blank(rows, cols).unwrap();
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    #[test]
    fn test_corner_has_three_neighbours() {
        let full = Grid::from_cells(3, 3, vec![true; 9]).unwrap();
        assert_eq!(live_neighbours(&full, 0, 0), 3);
        assert_eq!(live_neighbours(&full, 0, 1), 5);
        assert_eq!(live_neighbours(&full, 1, 1), 8);
        assert_eq!(live_neighbours(&full, 2, 2), 3);

        let lonely = grid_with(3, 3, &[(0, 0)]);
        assert_eq!(live_neighbours(&lonely, 0, 0), 0);
        assert_eq!(live_neighbours(&lonely, 1, 1), 1);
        assert_eq!(next_generation(&lonely).population(), 0);
    }

    #[test]
    fn test_no_wraparound_across_rows() {
        // (0, 3) and (1, 0) are adjacent in memory but not on the field
        let grid = grid_with(3, 4, &[(0, 3)]);
        assert_eq!(live_neighbours(&grid, 1, 0), 0);
        assert_eq!(live_neighbours(&grid, 0, 0), 0);
        assert_eq!(live_neighbours(&grid, 1, 3), 1);
    }

    #[test]
    fn test_birth_and_death() {
        // L-tromino: every cell has two neighbours, the missing corner is born
        let grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1)]);
        let next = next_generation(&grid);
        assert_eq!(next, grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]));

        // overcrowded centre dies
        let plus = grid_with(5, 5, &[(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
        assert!(!next_generation(&plus).get(2, 2));
    }

    #[test]
    fn test_full_small_grid() {
        let full = Grid::from_cells(2, 2, vec![true; 4]).unwrap();
        assert_eq!(next_generation(&full), full);
        let full = Grid::from_cells(3, 3, vec![true; 9]).unwrap();
        assert_eq!(next_generation(&full), grid_with(3, 3, &[(0, 0), (0, 2), (2, 0), (2, 2)]));
    }
}
