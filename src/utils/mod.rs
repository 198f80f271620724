mod indexing;
mod settings;

pub use indexing::{is_in_bounds, to_col, to_index, to_row};
pub use settings::Settings;
