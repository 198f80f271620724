use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the refresh rate and keeps smoothed frame and generation rates for display.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
    generations_in_frame: u32,
    generations_per_sec: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
            generations_in_frame: 0,
            generations_per_sec: 0.,
        }
    }
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn generations_per_sec(&self) -> f64 {
        self.generations_per_sec
    }

    /// Counts a generation computed during the current frame.
    pub fn record_generation(&mut self) {
        self.generations_in_frame += 1;
    }

    /// Sleeps until the frame lasts at least `1 / max_fps` seconds.
    pub fn sleep(&mut self, max_fps: f64) {
        let target_frametime = Duration::from_secs_f64(1. / max_fps);
        let before_wait = self.frame_timer.elapsed();
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        let rate = self.generations_in_frame as f64 / frametime;
        self.generations_per_sec += (rate - self.generations_per_sec) * Self::SMOOTHING;

        self.generations_in_frame = 0;
        self.frame_timer = Instant::now();
    }
}
