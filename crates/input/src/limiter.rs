//! Per-command rate limiting for input sources that repeat too fast.
//!
//! Time is fed in explicitly (`advance`), so the limiter works the same under
//! a real frame loop and in tests.

use crate::types::Command;

const COMMANDS: usize = 4;

fn slot(command: Command) -> usize {
    match command {
        Command::Left => 0,
        Command::Right => 1,
        Command::Rotate => 2,
        Command::Drop => 3,
    }
}

/// Lets each command through at most once per `interval_ms`.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval_ms: u32,
    now_ms: u64,
    last_fired: [Option<u64>; COMMANDS],
}

impl RateLimiter {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            now_ms: 0,
            last_fired: [None; COMMANDS],
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Move the limiter clock forward
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
    }

    /// Fire `command` if its interval has passed; records the firing.
    pub fn try_fire(&mut self, command: Command) -> bool {
        let last = &mut self.last_fired[slot(command)];
        let ready = match *last {
            Some(t) => self.now_ms - t >= self.interval_ms as u64,
            None => true,
        };
        if ready {
            *last = Some(self.now_ms);
        }
        ready
    }

    /// Forget past firings (e.g. when the stick returns to neutral)
    pub fn reset(&mut self, command: Command) {
        self.last_fired[slot(command)] = None;
    }
}
