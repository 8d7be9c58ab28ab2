//! VR Tetris grid engine (workspace facade crate).
//!
//! This package exposes `vr_tetris::{types, core, engine, input}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use vr_tetris_core as core;
pub use vr_tetris_engine as engine;
pub use vr_tetris_input as input;
pub use vr_tetris_types as types;
