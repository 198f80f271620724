use super::{Config, FpsLimiter, PainterSurface};
use crate::{render, Driver, FrameScheduler, InputEvent};
use eframe::egui::{
    CentralPanel, Context, Event, Frame, Key, PointerButton, Rect, Sense, TopBottomPanel, Ui,
};

/// Requests the next egui frame as soon as possible.
struct RepaintScheduler<'a>(&'a Context);

impl FrameScheduler for RepaintScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_repaint();
    }
}

pub struct App {
    pub(super) driver: Driver,         // Owner of the current generation.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    field_rect: Option<Rect>,          // Part of the window displaying the field.
}

impl App {
    pub fn new(driver: Driver) -> Self {
        Self {
            driver,
            fps_limiter: FpsLimiter::default(),
            field_rect: None,
        }
    }

    fn key_event(key: Key) -> InputEvent {
        match key {
            Key::C => InputEvent::Clear,
            Key::R => InputEvent::ResetRandom,
            Key::N => InputEvent::Step,
            _ => InputEvent::ToggleRun,
        }
    }

    /// Translates this frame's raw egui events into driver input.
    fn handle_input(&mut self, ctx: &Context) {
        let Some(field_rect) = self.field_rect else {
            return;
        };
        let events = ctx.input(|input| input.events.clone());
        let mut scheduler = RepaintScheduler(ctx);
        for event in events {
            let input = match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => Self::key_event(key),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } if field_rect.contains(pos) => {
                    let p = pos - field_rect.min;
                    InputEvent::PointerDown { x: p.x, y: p.y }
                }
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                }
                | Event::PointerGone => InputEvent::PointerUp,
                Event::PointerMoved(pos) => {
                    let p = pos - field_rect.min;
                    InputEvent::PointerMove { x: p.x, y: p.y }
                }
                _ => continue,
            };
            if self.driver.handle(input, &mut scheduler) {
                ctx.request_repaint();
            }
        }
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.driver
            .layout_mut()
            .recentre(rect.width(), rect.height());
        render(
            self.driver.grid(),
            self.driver.layout(),
            &mut PainterSurface::new(&painter, rect),
        );
        self.field_rect.replace(rect);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // input first, so that a pause lands before this frame's step
        self.handle_input(ctx);

        if self.driver.on_frame(&mut RepaintScheduler(ctx)) {
            self.fps_limiter.record_generation();
        }

        TopBottomPanel::bottom("status")
            .exact_height(Config::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| self.draw_status(ui));

        CentralPanel::default()
            .frame(Frame::default().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw_field(ui));

        self.fps_limiter.sleep(Config::MAX_FPS);
    }
}
