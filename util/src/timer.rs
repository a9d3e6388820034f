use std::time::{Duration, Instant};

/// Keeps track of how long a phase of work took.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a new `Timer`, started now.
    pub fn now() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart the timer.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Time since the timer was created or last reset.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
