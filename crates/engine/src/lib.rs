//! Session layer - sequencing commands and time onto the grid engine.
//!
//! The core engine is a set of pure transitions. Something still has to own
//! "the" current state, serialize commands arriving from several drivers,
//! turn wall-clock time into gravity ticks, and remember enough to undo and
//! replay. That is [`Session`].
//!
//! # Example
//!
//! ```
//! use vr_tetris_engine::{Session, SessionConfig};
//! use vr_tetris_types::Command;
//!
//! let mut session = Session::new(&SessionConfig::default()).unwrap();
//! session.apply(Command::Right);
//! session.advance(1000); // one gravity tick
//!
//! assert_eq!(&session.replayed(), session.state());
//! ```

pub mod config;
pub mod session;

pub use vr_tetris_core as core;
pub use vr_tetris_types as types;

pub use config::{SessionConfig, DEFAULT_HISTORY_LIMIT};
pub use session::{replay, Outcome, Session};
