//! Game state module - the board + active piece aggregate and its transitions
//!
//! [`GameState`] is an immutable-per-version value. Every [`Engine`] operation
//! takes a state by reference and returns a new one; nothing it receives is
//! mutated. A rejected move or rotation returns a state equal to the input.
//!
//! The board sits behind an `Arc`: moves, rotations and ordinary gravity ticks
//! reuse the same board allocation, only locking and line clears copy it.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::shapes::{create_shape, Shape};
use crate::types::{Block, Command, Coord};
use crate::Board;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Arc<Board>,
    active: Piece,
    /// Spawn randomness, threaded through transitions so replays are exact.
    rng: SimpleRng,
    lines_cleared: u32,
}

impl GameState {
    /// Assemble a state from explicit parts (fixtures, replays, editors)
    pub fn from_parts(board: Board, active: Piece, seed: u32) -> Self {
        Self {
            board: Arc::new(board),
            active,
            rng: SimpleRng::new(seed),
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn rng(&self) -> &SimpleRng {
        &self.rng
    }

    /// Total rows removed since the game started
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Whether both states point at the same board allocation
    pub fn shares_board_with(&self, other: &GameState) -> bool {
        Arc::ptr_eq(&self.board, &other.board)
    }

    /// Whether the active piece overlaps locked tiles.
    ///
    /// The transition rules have no game-over state; this happens when a piece
    /// spawns into a stacked-up board. Drivers decide what to do about it.
    pub fn is_topped_out(&self) -> bool {
        self.board.overlaps(self.active.blocks())
    }
}

/// The grid engine: spawn, move, rotate, tick and line-clear rules
///
/// Holds only immutable configuration, so any number of engines (and games)
/// can coexist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Empty board plus a freshly spawned piece
    pub fn create_initial_game_state(&self, seed: u32) -> GameState {
        let mut rng = SimpleRng::new(seed);
        let active = self.spawn_piece(&mut rng);
        GameState {
            board: Arc::new(Board::new(&self.config)),
            active,
            rng,
            lines_cleared: 0,
        }
    }

    /// Draw a uniformly random kind and place it at the spawn position
    pub fn spawn_piece(&self, rng: &mut SimpleRng) -> Piece {
        self.place_at_spawn(&create_shape(rng.next_kind()))
    }

    /// Center a shape's true bounding box horizontally, top edge on row 0
    pub fn place_at_spawn(&self, shape: &Shape) -> Piece {
        let left = (self.config.width() as i8 - shape.width()) / 2;
        let anchor = Coord::new(left - shape.min_x(), -shape.min_y());
        Piece::new(shape, anchor)
    }

    /// Whether every block may sit where it is on `board`
    pub fn fits(&self, board: &Board, blocks: &[Block]) -> bool {
        blocks.iter().all(|b| board.admits(b.x, b.y))
    }

    /// Translate the active piece, or `None` if any block would collide or
    /// the delta runs past the coordinate range
    pub fn try_move_block(&self, state: &GameState, dx: i8, dy: i8) -> Option<GameState> {
        let candidate = state.active.try_translated(dx, dy)?;
        if !self.fits(&state.board, candidate.blocks()) {
            return None;
        }
        Some(GameState {
            board: Arc::clone(&state.board),
            active: candidate,
            ..*state
        })
    }

    /// Translate the active piece by (dx, dy); unchanged state if rejected
    pub fn move_block(&self, state: &GameState, dx: i8, dy: i8) -> GameState {
        self.try_move_block(state, dx, dy)
            .unwrap_or_else(|| state.clone())
    }

    /// Rotate the active piece 90°, or `None` if the rotated blocks collide.
    ///
    /// There is no wall kick: a rotation blocked by a wall or a locked tile is
    /// simply rejected.
    pub fn try_rotate_block(&self, state: &GameState) -> Option<GameState> {
        let candidate = state.active.try_rotated()?;
        if !self.fits(&state.board, candidate.blocks()) {
            return None;
        }
        Some(GameState {
            board: Arc::clone(&state.board),
            active: candidate,
            ..*state
        })
    }

    /// Rotate the active piece 90°; unchanged state if rejected
    pub fn rotate_block(&self, state: &GameState) -> GameState {
        self.try_rotate_block(state)
            .unwrap_or_else(|| state.clone())
    }

    /// One gravity tick
    ///
    /// Moves the piece down one row. If it cannot descend, locks it into the
    /// board, spawns the next piece and clears full rows.
    pub fn update(&self, state: &GameState) -> GameState {
        if let Some(next) = self.try_move_block(state, 0, 1) {
            return next;
        }

        let mut board = Board::clone(&state.board);
        board.lock_blocks(state.active.blocks());

        let mut rng = state.rng;
        let active = self.spawn_piece(&mut rng);

        clear_lines(GameState {
            board: Arc::new(board),
            active,
            rng,
            lines_cleared: state.lines_cleared,
        })
    }

    /// Remove full rows, shifting the rows above down
    ///
    /// The active piece is left where it is.
    pub fn check_for_complete_lines(&self, state: &GameState) -> GameState {
        clear_lines(state.clone())
    }

    /// Apply one driver command
    pub fn apply(&self, state: &GameState, command: Command) -> GameState {
        match command {
            Command::Left => self.move_block(state, -1, 0),
            Command::Right => self.move_block(state, 1, 0),
            Command::Rotate => self.rotate_block(state),
            Command::Drop => self.update(state),
        }
    }
}

fn clear_lines(mut state: GameState) -> GameState {
    if state.board.full_row_count() == 0 {
        return state;
    }
    let cleared = Arc::make_mut(&mut state.board).clear_full_rows();
    state.lines_cleared += cleared.len() as u32;
    state
}
