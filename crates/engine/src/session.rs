//! Session - the single authoritative holder of the current game state
//!
//! Drivers (keyboard loop, VR frame callback, headless scripts) feed commands
//! and elapsed time through one `Session`, which sequences them onto the
//! engine one at a time. Because every transition yields a new state value,
//! undo is a stack of previous states and replay is a fold over the command
//! log starting from the seed.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::core::{ConfigError, Engine, GameState};
use crate::types::Command;

/// Re-run a command log from a seed.
pub fn replay(engine: &Engine, seed: u32, commands: &[Command]) -> GameState {
    commands
        .iter()
        .fold(engine.create_initial_game_state(seed), |state, &command| {
            engine.apply(&state, command)
        })
}

/// What an accepted command did, for callers that react to locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State unchanged
    Rejected,
    /// Piece moved or rotated
    Moved,
    /// Piece locked, next piece spawned, `lines` rows cleared
    Locked { lines: u32 },
}

impl Outcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Rejected)
    }
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    state: GameState,
    /// Command log length when `state` was current
    log_len: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    state: GameState,
    seed: u32,
    tick_ms: u32,
    tick_accum_ms: u32,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
    commands: Vec<Command>,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        if config.tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "tick_ms",
                value: "0".to_string(),
            });
        }
        let engine = Engine::new(config.engine_config()?);
        Ok(Self {
            state: engine.create_initial_game_state(config.seed),
            engine,
            seed: config.seed,
            tick_ms: config.tick_ms,
            tick_accum_ms: 0,
            history: VecDeque::new(),
            history_limit: config.history_limit,
            commands: Vec::new(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed the current game started from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Accepted commands since the last restart
    ///
    /// Rejected commands leave the state unchanged, so they are not recorded;
    /// the log grows by one entry per state change and is only emptied by
    /// [`Session::restart`].
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of undo steps available
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_topped_out(&self) -> bool {
        self.state.is_topped_out()
    }

    /// Apply one command; returns whether the state changed
    pub fn apply(&mut self, command: Command) -> bool {
        self.apply_outcome(command).changed()
    }

    /// Apply one command and report what it did
    pub fn apply_outcome(&mut self, command: Command) -> Outcome {
        let next = self.engine.apply(&self.state, command);
        if next == self.state {
            debug!(command = command.as_str(), "command rejected");
            return Outcome::Rejected;
        }

        let log_len = self.commands.len();
        self.commands.push(command);

        let outcome = if next.shares_board_with(&self.state) {
            debug!(command = command.as_str(), "command applied");
            Outcome::Moved
        } else {
            let lines = next.lines_cleared() - self.state.lines_cleared();
            info!(
                kind = self.state.active().kind().as_str(),
                lines,
                total_lines = next.lines_cleared(),
                next_kind = next.active().kind().as_str(),
                "piece locked"
            );
            Outcome::Locked { lines }
        };

        let prev = std::mem::replace(&mut self.state, next);
        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back(HistoryEntry {
                state: prev,
                log_len,
            });
        }

        outcome
    }

    /// Feed elapsed time; applies one gravity tick per whole `tick_ms`
    ///
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.tick_accum_ms = self.tick_accum_ms.saturating_add(elapsed_ms);
        let mut ticks = 0;
        while self.tick_accum_ms >= self.tick_ms {
            self.tick_accum_ms -= self.tick_ms;
            self.apply(Command::Drop);
            ticks += 1;
        }
        ticks
    }

    /// Time accumulated toward the next gravity tick
    pub fn pending_ms(&self) -> u32 {
        self.tick_accum_ms
    }

    /// Step back to the state before the last accepted command
    ///
    /// The command log is truncated to match, so replay stays consistent.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop_back() else {
            return false;
        };
        self.state = entry.state;
        self.commands.truncate(entry.log_len);
        debug!(remaining = self.history.len(), "undo");
        true
    }

    /// Start a new game from `seed`
    pub fn restart(&mut self, seed: u32) {
        info!(
            seed,
            lines = self.state.lines_cleared(),
            "restart"
        );
        self.seed = seed;
        self.state = self.engine.create_initial_game_state(seed);
        self.tick_accum_ms = 0;
        self.history.clear();
        self.commands.clear();
    }

    /// Rebuild the current state from the seed and the command log
    pub fn replayed(&self) -> GameState {
        replay(&self.engine, self.seed, &self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_advance_applies_whole_ticks() {
        let mut s = session();
        let y0 = s.state().active().position().y;

        assert_eq!(s.advance(999), 0);
        assert_eq!(s.advance(1), 1);
        assert_eq!(s.state().active().position().y, y0 + 1);

        assert_eq!(s.advance(2500), 2);
        assert_eq!(s.pending_ms(), 500);
        assert_eq!(s.state().active().position().y, y0 + 3);
    }

    #[test]
    fn test_rejected_command_is_not_logged() {
        let mut s = session();
        for _ in 0..10 {
            s.apply(Command::Left);
        }
        // The piece hit the wall at some point.
        let accepted = s.commands().len();
        assert!(accepted < 10);
        assert_eq!(s.history_len(), accepted);
        assert!(s.commands().iter().all(|&c| c == Command::Left));

        assert!(!s.apply(Command::Left));
        assert_eq!(s.commands().len(), accepted);
        assert_eq!(&s.replayed(), s.state());
    }

    #[test]
    fn test_undo_restores_state_and_log() {
        let mut s = session();
        let initial = s.state().clone();

        assert!(s.apply(Command::Drop));
        assert!(s.apply(Command::Right));
        assert!(s.undo());
        assert!(s.undo());
        assert_eq!(s.state(), &initial);
        assert!(s.commands().is_empty());
        assert!(!s.undo());
    }

    #[test]
    fn test_history_is_bounded() {
        let config = SessionConfig {
            history_limit: 3,
            ..SessionConfig::default()
        };
        let mut s = Session::new(&config).unwrap();
        for _ in 0..6 {
            s.apply(Command::Drop);
        }
        assert_eq!(s.history_len(), 3);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut s = session();
        s.apply(Command::Drop);
        s.advance(400);
        s.restart(77);

        assert_eq!(s.seed(), 77);
        assert_eq!(s.history_len(), 0);
        assert!(s.commands().is_empty());
        assert_eq!(s.pending_ms(), 0);
        assert_eq!(s.state(), &s.engine().create_initial_game_state(77));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = SessionConfig {
            tick_ms: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(&config).is_err());
    }
}
