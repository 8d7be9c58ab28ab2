//! Command driver mappings (engine-facing).
//!
//! Independent of any rendering or VR runtime.
//! It reduces raw input into [`crate::types::Command`]s:
//!
//! - [`map`]: terminal key events (via `crossterm`)
//! - [`thumbstick`]: VR controller thumbstick axis samples
//! - [`limiter`]: per-command rate limiting shared by repeating sources

pub mod limiter;
pub mod map;
pub mod thumbstick;

pub use vr_tetris_types as types;

pub use limiter::RateLimiter;
pub use map::{command_for_key, handle_key_event, should_quit, KeyAction};
pub use thumbstick::{StickCommands, ThumbstickMapper};
