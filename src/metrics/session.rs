use std::time::{Duration, Instant};

/// Lightweight bookkeeping for one play session: wall-clock time, ticks
/// where the snake actually moved, and how many times the game was
/// restarted.
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub moves: u32,
    pub restarts: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            moves: 0,
            restarts: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_move(&mut self) {
        self.moves += 1;
    }

    pub fn on_restart(&mut self) {
        self.restarts += 1;
        self.moves = 0;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
