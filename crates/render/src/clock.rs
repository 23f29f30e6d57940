use std::time::{Duration, Instant};

/// Monotonic elapsed-time source started when the loop is created.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}
