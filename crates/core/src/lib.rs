//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the falling-piece grid engine: the board, the active
//! piece, and the rules for movement, rotation, collision, line clearing and
//! spawning. It has **zero dependencies** on rendering, input devices or I/O:
//!
//! - **Deterministic**: spawn randomness is part of the state, same seed and
//!   same commands replay to the same game
//! - **Value semantics**: every transition returns a new [`GameState`] and
//!   never mutates its input
//! - **Configurable**: board dimensions live in an [`EngineConfig`] owned by
//!   each [`Engine`], so independent games can coexist
//!
//! # Module Structure
//!
//! - [`shapes`]: catalog of the seven tetromino layouts
//! - [`piece`]: a shape bound to an absolute position
//! - [`board`]: grid of locked tiles, collision checks and line clearing
//! - [`game_state`]: the state aggregate and the [`Engine`] transitions
//! - [`rng`]: uniform random piece selection
//! - [`config`]: board dimensions and configuration errors
//! - [`snapshot`]: serializable view for presentation layers
//!
//! # Rules
//!
//! - **Spawn**: uniformly random kind, bounding box centered, top on row 0
//! - **Move**: all four blocks must stay in the columns, above the floor, and
//!   off locked tiles; rows above the top edge are open
//! - **Rotate**: 90° around the piece anchor, no wall kicks
//! - **Tick**: descend one row, or lock + spawn + clear full rows
//!
//! # Example
//!
//! ```
//! use vr_tetris_core::Engine;
//! use vr_tetris_types::Command;
//!
//! let engine = Engine::default();
//! let state = engine.create_initial_game_state(12345);
//!
//! let moved = engine.apply(&state, Command::Drop);
//! assert_eq!(moved.active().position().y, state.active().position().y + 1);
//!
//! // Rejected commands return an equal state
//! assert_eq!(engine.move_block(&state, 0, 0), state);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use vr_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use config::{ConfigError, EngineConfig};
pub use game_state::{Engine, GameState};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{create_shape, layout, Shape};
pub use snapshot::GameSnapshot;
