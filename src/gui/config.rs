use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1280., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [320., 240.];

    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLACK;
    pub const LINE_COLOR: Color32 = Color32::from_gray(200);
    pub const LINE_WIDTH: f32 = 1.;

    pub const STATUS_BAR_HEIGHT: f32 = 24.;
    pub const PANEL_PADDING: f32 = 8.;
    pub const TEXT_SIZE: f32 = 14.;
    pub const TEXT_COLOR: Color32 = Color32::DARK_GRAY;

    pub const MAX_FPS: f64 = 60.;

    /// Space left for the field in a window of [`Config::WINDOW_SIZE`].
    pub fn field_size() -> [f32; 2] {
        let [width, height] = Self::WINDOW_SIZE;
        [width, height - Self::STATUS_BAR_HEIGHT - Self::PANEL_PADDING]
    }
}
