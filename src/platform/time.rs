//! Frame timing
//!
//! Wall-clock frames are turned into a whole number of fixed simulation
//! ticks with an accumulator, and presentation is capped to a target rate.

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta fed into the accumulator (seconds)
const MAX_FRAME_DT: f32 = 0.1;
/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

#[derive(Debug)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    accumulator: f32,
    next_frame: Instant,
    // FPS tracking
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: None,
            accumulator: 0.0,
            next_frame: now,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame at `now` and return how many simulation ticks to run
    pub fn advance(&mut self, now: Instant) -> u32 {
        let dt = self
            .last_frame
            .replace(now)
            .map(|prev| now.saturating_duration_since(prev).as_secs_f32())
            .unwrap_or(0.0)
            .min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.record_fps(now);
        substeps
    }

    fn record_fps(&mut self, now: Instant) {
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot after the newest is the oldest sample
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f32();
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f32 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Whether a new frame may be presented; schedules the next one if so
    pub fn frame_due(&mut self, now: Instant, interval: Duration) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += interval;
        // Fell far behind (window dragged, machine asleep): don't try to catch up
        if self.next_frame < now {
            self.next_frame = now + interval;
        }
        true
    }

    /// Deadline for the next presented frame
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }
}
