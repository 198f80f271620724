use crate::{Grid, Layout};

/// Anything the grid can be drawn onto. Coordinates are surface pixels.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a grid line from `from` to `to`.
    fn line(&mut self, from: (f32, f32), to: (f32, f32));

    /// Fill a square with the top-left corner at `(x, y)`.
    fn fill_cell(&mut self, x: f32, y: f32, size: f32);
}

/// Draws the grid lines and every live cell of `grid`.
pub fn render(grid: &Grid, layout: &Layout, surface: &mut impl Surface) {
    surface.clear();

    let (left, top) = layout.margins();
    let (right, bottom) = (left + layout.width(), top + layout.height());
    let size = layout.cell_size();

    for col in 0..=layout.cols() {
        let x = left + col as f32 * size;
        surface.line((x, top), (x, bottom));
    }
    for row in 0..=layout.rows() {
        let y = top + row as f32 * size;
        surface.line((left, y), (right, y));
    }

    for (row, col) in grid.live_positions() {
        let (x, y) = layout.cell_origin(row, col);
        surface.fill_cell(x, y, size);
    }
}
