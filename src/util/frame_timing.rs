use web_time::{Duration, Instant};

/// Frame counts gathered over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsReport {
    /// Frames completed in the window.
    pub frames: u32,
    /// Wall time covered by the window.
    pub elapsed: Duration,
}

impl FpsReport {
    /// Average frame rate over the window.
    #[must_use]
    pub fn fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }
}

/// Frame timing with FPS calculation, optional frame limiting and periodic
/// frame-count reports
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Length of a reporting window
    report_interval: Duration,
    /// Start of the current reporting window
    window_start: Instant,
    /// Frames completed in the current reporting window
    window_frames: u32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited),
    /// reporting once per second.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            report_interval: Duration::from_secs(1),
            window_start: now,
            window_frames: 0,
        }
    }

    /// Override the reporting window length.
    #[must_use]
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the frame cap allows the next frame.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.window_frames = self.window_frames.saturating_add(1);

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Close the reporting window once it has run its full length.
    ///
    /// Returns the window's frame count and duration, and starts a new
    /// window; returns `None` while the window is still open.
    pub fn take_report(&mut self) -> Option<FpsReport> {
        let elapsed = self.window_start.elapsed();
        if elapsed < self.report_interval {
            return None;
        }

        let report = FpsReport {
            frames: self.window_frames,
            elapsed,
        };
        self.window_start = Instant::now();
        self.window_frames = 0;
        Some(report)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn capped_timer_waits_at_most_one_frame() {
        let timing = FrameTiming::new(30);
        assert!(timing.time_until_next_frame() <= Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn window_stays_open_until_interval_elapses() {
        let mut timing =
            FrameTiming::new(0).with_report_interval(Duration::from_secs(3600));
        timing.end_frame();
        assert!(timing.take_report().is_none());
    }

    #[test]
    fn report_counts_frames_and_resets() {
        let mut timing =
            FrameTiming::new(0).with_report_interval(Duration::ZERO);
        for _ in 0..3 {
            timing.end_frame();
        }

        let report = timing.take_report().unwrap();
        assert_eq!(report.frames, 3);
        assert!(report.fps() >= 0.0);

        let next = timing.take_report().unwrap();
        assert_eq!(next.frames, 0);
    }

    #[test]
    fn smoothed_fps_stays_positive() {
        let mut timing = FrameTiming::new(0);
        timing.end_frame();
        assert!(timing.fps() > 0.0);
    }

    #[test]
    fn zero_length_report_has_zero_fps() {
        let report = FpsReport {
            frames: 10,
            elapsed: Duration::ZERO,
        };
        assert_eq!(report.fps(), 0.0);
    }
}
