//! Rolling frame-rate tracker.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames averaged for the displayed rate
const WINDOW: usize = 60;

pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
}

impl FpsTracker {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            last_frame: Instant::now(),
        }
    }

    /// Record a frame that finished now
    pub fn record_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now - self.last_frame;
        self.last_frame = now;
        self.push(frame_time);
    }

    fn push(&mut self, frame_time: Duration) {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the window, 0 before the first frame
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_reports_zero() {
        assert_eq!(FpsTracker::new().current_fps(), 0.0);
    }

    #[test]
    fn test_average_over_window() {
        let mut tracker = FpsTracker::new();
        for _ in 0..10 {
            tracker.push(Duration::from_millis(20));
        }
        assert!((tracker.current_fps() - 50.0).abs() < 0.01);

        // Old frames fall out of the window
        for _ in 0..WINDOW {
            tracker.push(Duration::from_millis(10));
        }
        assert_eq!(tracker.frame_times.len(), WINDOW);
        assert!((tracker.current_fps() - 100.0).abs() < 0.01);
    }
}
