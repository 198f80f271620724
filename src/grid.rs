use crate::utils::{is_in_bounds, to_col, to_index, to_row};
use anyhow::{ensure, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One generation of a bounded Game of Life field.
///
/// Cells are stored row-major: `(row, col)` lives at `col + row * cols`.
/// The length of `cells` always equals `rows * cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from a row-major vector of cells.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        ensure!(
            rows > 0 && cols > 0,
            "grid dimensions must be positive, got {rows}x{cols}"
        );
        ensure!(
            cells.len() == rows * cols,
            "a {rows}x{cols} grid needs {} cells, got {}",
            rows * cols,
            cells.len()
        );
        Ok(Self { rows, cols, cells })
    }

    /// All cells dead.
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        create_grid(|| false, rows, cols)
    }

    /// Each cell is alive with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::random_with(rows, cols, &mut rng)
    }

    /// Same as [`Grid::random`] but draws from the given generator.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        create_grid(|| rng.gen::<f64>() >= 0.5, rows, cols)
    }

    /// Grid of the same dimensions as `shape` holding `cells`.
    pub(crate) fn with_same_shape(shape: &Grid, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), shape.cells.len());
        Self {
            rows: shape.rows,
            cols: shape.cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of the cell at `(row, col)`; `false` for positions outside the grid.
    pub fn get(&self, row: i64, col: i64) -> bool {
        is_in_bounds(row, col, self.rows, self.cols)
            && self.cells[to_index(row as usize, col as usize, self.cols)]
    }

    /// Sets the cell at `(row, col)`. Out-of-bounds positions are ignored.
    pub fn set(&mut self, row: i64, col: i64, state: bool) {
        if is_in_bounds(row, col, self.rows, self.cols) {
            self.cells[to_index(row as usize, col as usize, self.cols)] = state;
        }
    }

    /// Flips the cell at `(row, col)` in place.
    ///
    /// Returns whether a cell was flipped: positions outside the grid
    /// leave it untouched.
    pub fn toggle_cell(&mut self, row: i64, col: i64) -> bool {
        if !is_in_bounds(row, col, self.rows, self.cols) {
            return false;
        }
        let cell = &mut self.cells[to_index(row as usize, col as usize, self.cols)];
        *cell = !*cell;
        true
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates over `(row, col)` of every live cell in index order.
    pub fn live_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (to_row(i, cols), to_col(i, cols)))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Creates a `rows x cols` grid, calling `generator` once per cell in index order.
pub fn create_grid<F>(mut generator: F, rows: usize, cols: usize) -> Result<Grid>
where
    F: FnMut() -> bool,
{
    ensure!(
        rows > 0 && cols > 0,
        "grid dimensions must be positive, got {rows}x{cols}"
    );
    let cells = (0..rows * cols).map(|_| generator()).collect();
    Grid::from_cells(rows, cols, cells)
}
