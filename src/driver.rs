use crate::{next_generation, Grid, Layout};
use anyhow::{ensure, Result};
use log::{debug, error, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Discrete user actions understood by the [`Driver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Start the run loop if paused, pause it otherwise.
    ToggleRun,
    /// Replace the field with a random one.
    ResetRandom,
    /// Kill every cell.
    Clear,
    /// Advance a single generation while paused.
    Step,
    /// Primary pointer pressed at surface coordinates.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved; toggles cells only while the primary button is held.
    PointerMove { x: f32, y: f32 },
    PointerUp,
}

/// Invokes the driver once per display refresh.
pub trait FrameScheduler {
    /// Ask for [`Driver::on_frame`] to be called on the next refresh.
    fn request_frame(&mut self);
}

/// Owner of the current generation and of the run/pause state.
///
/// All state changes go through [`Driver::handle`] and [`Driver::on_frame`],
/// which are called from a single thread between refreshes.
pub struct Driver {
    current: Grid,
    layout: Layout,
    rng: ChaCha8Rng,
    is_running: bool,
    generation: u64,
    // Last cell toggled by the ongoing drag, `None` when the pointer is up.
    drag: Option<Option<(i64, i64)>>,
}

impl Driver {
    /// Starts paused with a random field sized by `layout`.
    ///
    /// `seed` - random seed for every random field (if `None`, then random seed is generated)
    pub fn new(layout: Layout, seed: Option<u64>) -> Result<Self> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let current = Grid::random_with(layout.rows(), layout.cols(), &mut rng)?;
        info!(
            "created {}x{} field with {} live cells",
            current.rows(),
            current.cols(),
            current.population()
        );
        Ok(Self {
            current,
            layout,
            rng,
            is_running: false,
            generation: 0,
            drag: None,
        })
    }

    /// Starts paused with the given field; `layout` must match its dimensions.
    pub fn with_grid(grid: Grid, layout: Layout) -> Result<Self> {
        ensure!(
            (grid.rows(), grid.cols()) == (layout.rows(), layout.cols()),
            "layout of {}x{} cells cannot display a {}x{} grid",
            layout.rows(),
            layout.cols(),
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            current: grid,
            layout,
            rng: ChaCha8Rng::from_entropy(),
            is_running: false,
            generation: 0,
            drag: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Generations computed since the last reset or clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies one input event. Returns whether the field needs redrawing.
    pub fn handle(&mut self, event: InputEvent, scheduler: &mut impl FrameScheduler) -> bool {
        match event {
            InputEvent::ToggleRun => {
                self.is_running = !self.is_running;
                info!(
                    "{} at generation {}",
                    if self.is_running { "running" } else { "paused" },
                    self.generation
                );
                if self.is_running {
                    scheduler.request_frame();
                }
                true
            }
            InputEvent::ResetRandom => {
                self.replace(|driver| {
                    Grid::random_with(driver.layout.rows(), driver.layout.cols(), &mut driver.rng)
                });
                info!("random field with {} live cells", self.current.population());
                true
            }
            InputEvent::Clear => {
                self.replace(|driver| Grid::blank(driver.layout.rows(), driver.layout.cols()));
                info!("field cleared");
                true
            }
            InputEvent::Step => {
                if self.is_running {
                    return false;
                }
                self.advance();
                true
            }
            InputEvent::PointerDown { x, y } => {
                let pos = self.layout.position_at(x, y);
                self.drag = Some(None);
                self.toggle_under_pointer(pos)
            }
            InputEvent::PointerMove { x, y } => {
                let pos = self.layout.position_at(x, y);
                match self.drag {
                    Some(last) if last != Some(pos) => self.toggle_under_pointer(pos),
                    _ => false,
                }
            }
            InputEvent::PointerUp => {
                self.drag = None;
                false
            }
        }
    }

    /// Frame callback: computes one generation while running and schedules the next frame.
    ///
    /// Returns whether a generation was computed. A pause observed before this call
    /// means no step happens and no further frame is requested.
    pub fn on_frame(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if !self.is_running {
            return false;
        }
        self.advance();
        scheduler.request_frame();
        true
    }

    fn advance(&mut self) {
        self.current = next_generation(&self.current);
        self.generation += 1;
        trace!(
            "generation {}: {} live cells",
            self.generation,
            self.current.population()
        );
    }

    fn replace(&mut self, make: impl FnOnce(&mut Self) -> Result<Grid>) {
        // layout dimensions are always positive
        match make(self) {
            Ok(grid) => {
                self.current = grid;
                self.generation = 0;
            }
            Err(err) => error!("failed to rebuild the field: {err:#}"),
        }
    }

    fn toggle_under_pointer(&mut self, (row, col): (i64, i64)) -> bool {
        if !self.current.toggle_cell(row, col) {
            trace!("ignoring pointer outside the field at ({row}, {col})");
            return false;
        }
        debug!("toggled cell ({row}, {col})");
        self.drag = Some(Some((row, col)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Frames(usize);

    impl FrameScheduler for Frames {
        fn request_frame(&mut self) {
            self.0 += 1;
        }
    }

    fn driver(rows: usize, cols: usize) -> Driver {
        let layout = Layout::for_surface(cols as f32 * 10., rows as f32 * 10., 10.).unwrap();
        Driver::with_grid(Grid::blank(rows, cols).unwrap(), layout).unwrap()
    }

    #[test]
    fn test_drag_toggles_each_cell_once() {
        let mut d = driver(4, 4);
        let mut frames = Frames::default();
        assert!(d.handle(InputEvent::PointerDown { x: 5., y: 5. }, &mut frames));
        // still inside (0, 0)
        assert!(!d.handle(InputEvent::PointerMove { x: 8., y: 2. }, &mut frames));
        assert!(d.handle(InputEvent::PointerMove { x: 15., y: 5. }, &mut frames));
        assert!(d.handle(InputEvent::PointerMove { x: 25., y: 5. }, &mut frames));
        assert!(!d.handle(InputEvent::PointerMove { x: 45., y: 5. }, &mut frames));
        d.handle(InputEvent::PointerUp, &mut frames);
        assert!(!d.handle(InputEvent::PointerMove { x: 35., y: 35. }, &mut frames));

        assert_eq!(d.grid().to_string(), "###.\n....\n....\n....\n");
        assert_eq!(frames.0, 0);
    }

    #[test]
    fn test_pointer_outside_is_ignored() {
        let mut d = driver(3, 3);
        let mut frames = Frames::default();
        assert!(!d.handle(InputEvent::PointerDown { x: -1., y: 5. }, &mut frames));
        assert!(!d.handle(InputEvent::PointerDown { x: 5., y: 31. }, &mut frames));
        assert_eq!(d.grid().population(), 0);
    }

    #[test]
    fn test_step_only_while_paused() {
        let mut d = driver(3, 3);
        let mut frames = Frames::default();
        d.handle(InputEvent::PointerDown { x: 5., y: 5. }, &mut frames);
        assert!(d.handle(InputEvent::Step, &mut frames));
        assert_eq!(d.generation(), 1);
        assert_eq!(d.grid().population(), 0);

        d.handle(InputEvent::ToggleRun, &mut frames);
        assert!(!d.handle(InputEvent::Step, &mut frames));
        assert_eq!(d.generation(), 1);
    }

    #[test]
    fn test_layout_must_match_grid() {
        let layout = Layout::for_surface(30., 30., 10.).unwrap();
        assert!(Driver::with_grid(Grid::blank(3, 4).unwrap(), layout).is_err());
    }
}
