use super::{App, Config};
use crate::Surface;
use eframe::egui::{pos2, vec2, Painter, Pos2, Rect, RichText, Stroke, Ui};

/// Draws onto an egui painter, translating surface coordinates by `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: [f32; 2],
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            origin: rect.min,
            size: [rect.width(), rect.height()],
        }
    }

    fn at(&self, (x, y): (f32, f32)) -> Pos2 {
        self.origin + vec2(x, y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        let rect = Rect::from_min_size(self.origin, self.size.into());
        self.painter.rect_filled(rect, 0., Config::BACKGROUND_COLOR);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.painter.line_segment(
            [self.at(from), self.at(to)],
            Stroke::new(Config::LINE_WIDTH, Config::LINE_COLOR),
        );
    }

    fn fill_cell(&mut self, x: f32, y: f32, size: f32) {
        let min = self.at((x, y));
        let rect = Rect::from_min_max(min, pos2(min.x + size, min.y + size));
        self.painter.rect_filled(rect, 0., Config::CELL_COLOR);
    }
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    pub(super) fn draw_status(&self, ui: &mut Ui) {
        let driver = &self.driver;
        let state = if driver.is_running() { "running" } else { "paused" };
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!(
                "Generation: {}   Population: {}   {}   {:.0} gen/s   FPS: {:3}",
                driver.generation(),
                driver.grid().population(),
                state,
                self.fps_limiter.generations_per_sec(),
                self.fps_limiter.fps().round() as u32
            )));
            ui.separator();
            ui.label(Self::new_text(
                "[R] random  [C] clear  [N] next step  [any other key] run/pause  [drag] toggle cells",
            ));
        });
    }
}
