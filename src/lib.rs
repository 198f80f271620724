#![warn(clippy::all)]

mod driver;
mod grid;
mod gui;
mod layout;
mod life;
mod render;
mod utils;

pub use driver::{Driver, FrameScheduler, InputEvent};
pub use grid::{create_grid, Grid};
pub use gui::{App, Config};
pub use layout::Layout;
pub use life::{live_neighbours, next_generation};
pub use render::{render, Surface};
pub use utils::{is_in_bounds, to_col, to_index, to_row, Settings};
