//! VR thumbstick mapping.
//!
//! Converts continuous axis samples from a controller thumbstick into the same
//! discrete commands the keyboard produces. Axis convention follows WebXR:
//! `x` grows to the right, `y` grows toward the user (pulling the stick down).
//!
//! - left / right / down repeat while held, limited to one per interval
//! - up (rotate) fires once per push; the stick has to come back before it
//!   fires again
//! - returning an axis to neutral lets the next push through immediately

use arrayvec::ArrayVec;

use crate::limiter::RateLimiter;
use crate::types::{Command, DEFAULT_STICK_REPEAT_MS, STICK_DEADZONE};

/// Commands produced by one sample (one per axis at most)
pub type StickCommands = ArrayVec<Command, 2>;

#[derive(Debug, Clone)]
pub struct ThumbstickMapper {
    limiter: RateLimiter,
    deadzone: f32,
    rotate_armed: bool,
}

impl ThumbstickMapper {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_STICK_REPEAT_MS, STICK_DEADZONE)
    }

    pub fn with_config(repeat_ms: u32, deadzone: f32) -> Self {
        Self {
            limiter: RateLimiter::new(repeat_ms),
            deadzone,
            rotate_armed: true,
        }
    }

    /// Process one axis sample taken `elapsed_ms` after the previous one
    pub fn sample(&mut self, x: f32, y: f32, elapsed_ms: u32) -> StickCommands {
        self.limiter.advance(elapsed_ms);
        let mut out = StickCommands::new();

        if y > self.deadzone {
            self.rotate_armed = true;
            if self.limiter.try_fire(Command::Drop) {
                out.push(Command::Drop);
            }
        } else if y < -self.deadzone {
            if self.rotate_armed {
                self.rotate_armed = false;
                out.push(Command::Rotate);
            }
        } else {
            self.rotate_armed = true;
            self.limiter.reset(Command::Drop);
        }

        if x < -self.deadzone {
            if self.limiter.try_fire(Command::Left) {
                out.push(Command::Left);
            }
        } else if x > self.deadzone {
            if self.limiter.try_fire(Command::Right) {
                out.push(Command::Right);
            }
        } else {
            self.limiter.reset(Command::Left);
            self.limiter.reset(Command::Right);
        }

        out
    }
}

impl Default for ThumbstickMapper {
    fn default() -> Self {
        Self::new()
    }
}
