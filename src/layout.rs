use anyhow::{ensure, Result};

/// Placement of the grid on a drawing surface measured in pixels.
///
/// The number of rows and columns is fixed when the layout is created;
/// the margins keep the grid centred and follow the surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    cell_size: f32,
    margin_x: f32,
    margin_y: f32,
}

impl Layout {
    /// Fits as many whole cells as possible into a `width x height` surface.
    pub fn for_surface(width: f32, height: f32, cell_size: f32) -> Result<Self> {
        ensure!(
            cell_size.is_finite() && cell_size > 0.,
            "cell size must be positive, got {cell_size}"
        );
        let cols = (width / cell_size).floor();
        let rows = (height / cell_size).floor();
        ensure!(
            rows >= 1. && cols >= 1.,
            "a {width}x{height} surface cannot fit a single {cell_size}px cell"
        );
        let mut layout = Self {
            rows: rows as usize,
            cols: cols as usize,
            cell_size,
            margin_x: 0.,
            margin_y: 0.,
        };
        layout.recentre(width, height);
        Ok(layout)
    }

    /// Recomputes the margins for a resized surface.
    ///
    /// A surface smaller than the grid gets zero margins and clips it.
    pub fn recentre(&mut self, width: f32, height: f32) {
        self.margin_x = ((width - self.width()) / 2.).max(0.);
        self.margin_y = ((height - self.height()) / 2.).max(0.);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn margins(&self) -> (f32, f32) {
        (self.margin_x, self.margin_y)
    }

    /// Width of the grid in pixels.
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Top-left corner of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.margin_x + col as f32 * self.cell_size,
            self.margin_y + row as f32 * self.cell_size,
        )
    }

    /// `(row, col)` under the surface point `(x, y)`.
    ///
    /// Points in the margins map to positions outside the grid.
    pub fn position_at(&self, x: f32, y: f32) -> (i64, i64) {
        let row = ((y - self.margin_y) / self.cell_size).floor() as i64;
        let col = ((x - self.margin_x) / self.cell_size).floor() as i64;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_and_margins() {
        let layout = Layout::for_surface(103., 52., 5.).unwrap();
        assert_eq!((layout.rows(), layout.cols()), (10, 20));
        assert_eq!(layout.margins(), (1.5, 1.));
        assert_eq!(layout.cell_origin(0, 0), (1.5, 1.));
        assert_eq!(layout.cell_origin(2, 3), (16.5, 11.));
    }

    #[test]
    fn test_rejects_unusable_surfaces() {
        assert!(Layout::for_surface(100., 100., 0.).is_err());
        assert!(Layout::for_surface(100., 100., -3.).is_err());
        assert!(Layout::for_surface(100., 100., f32::NAN).is_err());
        assert!(Layout::for_surface(4., 100., 5.).is_err());
    }

    #[test]
    fn test_position_at() {
        let layout = Layout::for_surface(103., 52., 5.).unwrap();
        assert_eq!(layout.position_at(1.5, 1.), (0, 0));
        assert_eq!(layout.position_at(6.4, 5.9), (0, 0));
        assert_eq!(layout.position_at(6.5, 6.), (1, 1));
        assert_eq!(layout.position_at(0.5, 0.5), (-1, -1));
        assert_eq!(layout.position_at(102., 51.5), (10, 20));
    }

    #[test]
    fn test_recentre_keeps_dimensions() {
        let mut layout = Layout::for_surface(100., 50., 10.).unwrap();
        layout.recentre(140., 70.);
        assert_eq!((layout.rows(), layout.cols()), (5, 10));
        assert_eq!(layout.margins(), (20., 10.));
        layout.recentre(30., 30.);
        assert_eq!(layout.margins(), (0., 0.));
    }
}
