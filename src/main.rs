#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use life_canvas::{App, Config, Driver, Layout, Settings};
use log::info;

fn main() -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let [width, height] = Config::field_size();
    let layout = Layout::for_surface(width, height, settings.cell_size)?;
    info!(
        "cell size {}px, {}x{} cells, seed {:?}",
        settings.cell_size,
        layout.rows(),
        layout.cols(),
        settings.seed
    );
    let driver = Driver::new(layout, settings.seed)?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(vec2(Config::MIN_WINDOW_SIZE[0], Config::MIN_WINDOW_SIZE[1])),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(driver)))),
    )
    .map_err(|err| anyhow!("window event loop failed: {err}"))
}
